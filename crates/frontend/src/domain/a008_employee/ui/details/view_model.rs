use contracts::domain::a008_employee::aggregate::Employee;
use contracts::domain::a008_employee::form::EmployeeForm;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use crate::domain::a008_employee::api;
use crate::shared::api_utils::HttpClient;
use crate::shared::list_utils::{run_mutation, Outcome};
use crate::shared::notify::NotificationService;

const CREATE: Outcome = Outcome::from_server("Employee created successfully", "Failed to create employee");
const UPDATE: Outcome = Outcome::from_server("Employee updated successfully", "Failed to update employee");

#[derive(Clone, Copy)]
pub struct EmployeeDetailsViewModel {
    pub form: RwSignal<EmployeeForm>,
    pub errors: RwSignal<FieldErrors>,
    pub saving: RwSignal<bool>,
    http: HttpClient,
    notify: NotificationService,
}

impl EmployeeDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(EmployeeForm::default()),
            errors: RwSignal::new(FieldErrors::new()),
            saving: RwSignal::new(false),
            http: use_context::<HttpClient>().expect("HttpClient not found"),
            notify: use_context::<NotificationService>().expect("NotificationService not found"),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(EmployeeForm::is_edit)
    }

    pub fn edit(&self, employee: &Employee) {
        self.form.set(EmployeeForm::from_employee(employee));
        self.errors.set(FieldErrors::new());
    }

    pub fn reset(&self) {
        self.form.set(EmployeeForm::default());
        self.errors.set(FieldErrors::new());
    }

    /// Signal/callback pair for one text field of the form.
    pub fn text(
        &self,
        get: fn(&EmployeeForm) -> &String,
        set: fn(&mut EmployeeForm, String),
    ) -> (Signal<String>, Callback<String>) {
        let form = self.form;
        (
            Signal::derive(move || form.with(|f| get(f).clone())),
            Callback::new(move |v| form.update(|f| set(f, v))),
        )
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
        let done = move || {
            this.reset();
            on_saved.run(());
        };
        match form.editing_id {
            Some(id) => run_mutation(
                self.notify,
                Some(self.saving),
                UPDATE,
                api::update(http, id, payload),
                done,
            ),
            None => run_mutation(self.notify, Some(self.saving), CREATE, api::create(http, payload), done),
        }
    }
}
