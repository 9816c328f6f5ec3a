use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a002_product::form::ProductForm;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_category::api as category_api;
use crate::domain::a002_product::api;
use crate::shared::api_utils::HttpClient;
use crate::shared::list_utils::{run_mutation, Outcome};
use crate::shared::notify::NotificationService;
use crate::shared::ref_data::{use_ref_data, RefDataCache};

const SAVE: Outcome = Outcome::from_server("Product saved successfully", "Operation failed");

#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductForm>,
    pub errors: RwSignal<FieldErrors>,
    pub saving: RwSignal<bool>,
    /// Active categories for the category select.
    pub categories: RwSignal<Vec<Category>>,
    http: HttpClient,
    refs: RefDataCache,
    notify: NotificationService,
}

impl ProductDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProductForm::default()),
            errors: RwSignal::new(FieldErrors::new()),
            saving: RwSignal::new(false),
            categories: RwSignal::new(Vec::new()),
            http: use_context::<HttpClient>().expect("HttpClient not found"),
            refs: use_ref_data(),
            notify: use_context::<NotificationService>().expect("NotificationService not found"),
        }
    }

    /// The category lookup is never cached; every call hits the server.
    pub fn load_categories(&self) {
        let this = *self;
        spawn_local(async move {
            match category_api::fetch_active(this.http).await {
                Ok(list) => this.categories.set(list),
                Err(e) => {
                    log::error!("active categories: {}", e);
                    this.notify.error(e.user_message("Failed to load categories"));
                }
            }
        });
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(ProductForm::is_edit)
    }

    pub fn edit(&self, product: &Product) {
        self.form.set(ProductForm::from_product(product));
        self.errors.set(FieldErrors::new());
    }

    pub fn reset(&self) {
        self.form.set(ProductForm::default());
        self.errors.set(FieldErrors::new());
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let form = self.form.get_untracked();
        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(errors) => {
                self.errors.set(errors);
                return;
            }
        };
        self.errors.set(FieldErrors::new());

        let (http, refs) = (self.http, self.refs);
        let this = *self;
        let call = async move {
            match form.editing_id {
                Some(id) => api::update(http, refs, id, payload).await,
                None => api::create(http, refs, payload).await,
            }
        };
        run_mutation(self.notify, Some(self.saving), SAVE, call, move || {
            this.reset();
            on_saved.run(());
        });
    }
}
