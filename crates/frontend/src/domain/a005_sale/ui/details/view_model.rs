use contracts::domain::a004_purchase::aggregate::Purchase;
use contracts::domain::a005_sale::form::SaleForm;
use contracts::shared::date_format::local_input_now;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use crate::domain::a005_sale::api;
use crate::shared::api_utils::HttpClient;
use crate::shared::list_utils::{run_mutation, Outcome};
use crate::shared::modal::ModalService;
use crate::shared::notify::NotificationService;

const CREATE: Outcome = Outcome::fixed("Sale created successfully", "Failed to create sale");

#[derive(Clone, Copy)]
pub struct SaleDetailsViewModel {
    pub form: RwSignal<SaleForm>,
    pub errors: RwSignal<FieldErrors>,
    pub saving: RwSignal<bool>,
    http: HttpClient,
    notify: NotificationService,
    modal: ModalService,
}

impl SaleDetailsViewModel {
    pub fn for_purchase(purchase: &Purchase) -> Self {
        Self {
            form: RwSignal::new(SaleForm::for_purchase(purchase, local_input_now())),
            errors: RwSignal::new(FieldErrors::new()),
            saving: RwSignal::new(false),
            http: use_context::<HttpClient>().expect("HttpClient not found"),
            notify: use_context::<NotificationService>().expect("NotificationService not found"),
            modal: use_context::<ModalService>().expect("ModalService not found"),
        }
    }

    pub fn close(&self) {
        self.modal.close();
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let payload = match self.form.with_untracked(SaleForm::validate) {
            Ok(payload) => payload,
            Err(errors) => {
                self.errors.set(errors);
                return;
            }
        };
        self.errors.set(FieldErrors::new());
        let modal = self.modal;
        run_mutation(
            self.notify,
            Some(self.saving),
            CREATE,
            api::create(self.http, payload),
            move || {
                modal.close();
                on_saved.run(());
            },
        );
    }
}
