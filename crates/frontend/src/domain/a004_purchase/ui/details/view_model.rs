use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a004_purchase::form::PurchaseForm;
use contracts::shared::date_format::local_input_now;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use crate::domain::a004_purchase::api;
use crate::shared::api_utils::HttpClient;
use crate::shared::list_utils::{run_mutation, Outcome};
use crate::shared::notify::NotificationService;
use crate::shared::ref_data::{load_products, use_ref_data, RefDataCache};

const CREATE: Outcome = Outcome::fixed("Purchase created successfully", "Failed to create purchase");

#[derive(Clone, Copy)]
pub struct AddPurchaseViewModel {
    pub form: RwSignal<PurchaseForm>,
    pub errors: RwSignal<FieldErrors>,
    pub saving: RwSignal<bool>,
    pub products: RwSignal<Vec<Product>>,
    http: HttpClient,
    refs: RefDataCache,
    notify: NotificationService,
}

impl AddPurchaseViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(PurchaseForm::new(local_input_now())),
            errors: RwSignal::new(FieldErrors::new()),
            saving: RwSignal::new(false),
            products: RwSignal::new(Vec::new()),
            http: use_context::<HttpClient>().expect("HttpClient not found"),
            refs: use_ref_data(),
            notify: use_context::<NotificationService>().expect("NotificationService not found"),
        }
    }

    pub fn load_products(&self, force: bool) {
        load_products(self.refs, self.notify, self.products, force);
    }

    pub fn reset(&self) {
        self.form.set(PurchaseForm::new(local_input_now()));
        self.errors.set(FieldErrors::new());
    }

    /// The form is cleared for the next entry after a successful save.
    pub fn save_command(&self) {
        let payload = match self.form.with_untracked(PurchaseForm::validate) {
            Ok(payload) => payload,
            Err(errors) => {
                self.errors.set(errors);
                return;
            }
        };
        self.errors.set(FieldErrors::new());
        let this = *self;
        run_mutation(
            self.notify,
            Some(self.saving),
            CREATE,
            api::create(self.http, payload),
            move || this.reset(),
        );
    }
}
