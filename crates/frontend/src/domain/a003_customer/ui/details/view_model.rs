use contracts::domain::a003_customer::aggregate::Customer;
use contracts::domain::a003_customer::form::CustomerForm;
use contracts::shared::date_format::local_input_now;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use crate::domain::a003_customer::api;
use crate::shared::api_utils::HttpClient;
use crate::shared::list_utils::{run_mutation, Outcome};
use crate::shared::modal::ModalService;
use crate::shared::notify::NotificationService;
use crate::shared::ref_data::{use_ref_data, RefDataCache};

const CREATE: Outcome = Outcome::from_server("Customer created successfully", "Failed to create customer");
const UPDATE: Outcome = Outcome::from_server("Customer updated successfully", "Failed to update customer");

#[derive(Clone, Copy)]
pub struct CustomerDetailsViewModel {
    pub form: RwSignal<CustomerForm>,
    pub errors: RwSignal<FieldErrors>,
    pub saving: RwSignal<bool>,
    http: HttpClient,
    refs: RefDataCache,
    notify: NotificationService,
    modal: ModalService,
}

impl CustomerDetailsViewModel {
    pub fn new(customer: Option<&Customer>) -> Self {
        let form = match customer {
            Some(c) => CustomerForm::from_customer(c),
            None => CustomerForm::new(local_input_now()),
        };
        Self {
            form: RwSignal::new(form),
            errors: RwSignal::new(FieldErrors::new()),
            saving: RwSignal::new(false),
            http: use_context::<HttpClient>().expect("HttpClient not found"),
            refs: use_ref_data(),
            notify: use_context::<NotificationService>().expect("NotificationService not found"),
            modal: use_context::<ModalService>().expect("ModalService not found"),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(CustomerForm::is_edit)
    }

    pub fn close(&self) {
        self.modal.close();
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

        let (http, refs, modal) = (self.http, self.refs, self.modal);
        let outcome = if form.is_edit() { UPDATE } else { CREATE };
        let call = async move {
            match form.editing_id {
                Some(id) => api::update(http, refs, id, payload).await,
                None => api::create(http, refs, payload).await,
            }
        };
        run_mutation(self.notify, Some(self.saving), outcome, call, move || {
            modal.close();
            on_saved.run(());
        });
    }
}
