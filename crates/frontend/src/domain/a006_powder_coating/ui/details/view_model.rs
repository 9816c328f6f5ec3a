use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a003_customer::aggregate::Customer;
use contracts::domain::a006_powder_coating::form::ProcessForm;
use contracts::domain::common::EntityId;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a006_powder_coating::api;
use crate::shared::api_utils::HttpClient;
use crate::shared::list_utils::{run_mutation, Outcome};
use crate::shared::notify::NotificationService;

const SAVE: Outcome = Outcome::from_server("Process saved successfully", "Failed to save process");

#[derive(Clone, Copy)]
pub struct ProcessDetailsViewModel {
    pub form: RwSignal<ProcessForm>,
    pub errors: RwSignal<FieldErrors>,
    pub saving: RwSignal<bool>,
    /// Lookups shared with the list's filter panel.
    pub products: RwSignal<Vec<Product>>,
    pub customers: RwSignal<Vec<Customer>>,
    http: HttpClient,
    notify: NotificationService,
}

impl ProcessDetailsViewModel {
    pub fn new(products: RwSignal<Vec<Product>>, customers: RwSignal<Vec<Customer>>) -> Self {
        Self {
            form: RwSignal::new(ProcessForm::default()),
            errors: RwSignal::new(FieldErrors::new()),
            saving: RwSignal::new(false),
            products,
            customers,
            http: use_context::<HttpClient>().expect("HttpClient not found"),
            notify: use_context::<NotificationService>().expect("NotificationService not found"),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(ProcessForm::is_edit)
    }

    /// Loads the latest copy of the process, then calls `on_ready`.
    pub fn edit(&self, id: EntityId, on_ready: Callback<()>) {
        let this = *self;
        spawn_local(async move {
            match api::get_process(this.http, id).await {
                Ok(process) => {
                    this.form.set(ProcessForm::from_process(&process));
                    this.errors.set(FieldErrors::new());
                    on_ready.run(());
                }
                Err(e) => {
                    log::error!("getProcess {}: {}", id, e);
                    this.notify.error(e.user_message("Failed to load process"));
                }
            }
        });
    }

    pub fn reset(&self) {
        self.form.set(ProcessForm::default());
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
