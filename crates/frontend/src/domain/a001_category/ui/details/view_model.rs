use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a001_category::form::CategoryForm;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use crate::domain::a001_category::api;
use crate::shared::api_utils::HttpClient;
use crate::shared::list_utils::{run_mutation, Outcome};
use crate::shared::notify::NotificationService;

const SAVE: Outcome = Outcome::from_server("Category saved successfully", "Operation failed");

#[derive(Clone, Copy)]
pub struct CategoryDetailsViewModel {
    pub form: RwSignal<CategoryForm>,
    pub errors: RwSignal<FieldErrors>,
    pub saving: RwSignal<bool>,
    http: HttpClient,
    notify: NotificationService,
}

impl CategoryDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CategoryForm::default()),
            errors: RwSignal::new(FieldErrors::new()),
            saving: RwSignal::new(false),
            http: use_context::<HttpClient>().expect("HttpClient not found"),
            notify: use_context::<NotificationService>().expect("NotificationService not found"),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(CategoryForm::is_edit)
    }

    pub fn edit(&self, category: &Category) {
        self.form.set(CategoryForm::from_category(category));
        self.errors.set(FieldErrors::new());
    }

    pub fn reset(&self) {
        self.form.set(CategoryForm::default());
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

        let http = self.http;
        let this = *self;
        let call = async move {
            match form.editing_id {
                Some(id) => api::update(http, id, payload).await,
                None => api::create(http, payload).await,
            }
        };
        run_mutation(self.notify, Some(self.saving), SAVE, call, move || {
            this.reset();
            on_saved.run(());
        });
    }
}
