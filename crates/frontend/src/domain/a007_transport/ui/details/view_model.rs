use std::collections::HashSet;

use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a003_customer::aggregate::Customer;
use contracts::domain::a007_transport::aggregate::{TransportListQuery, TransportRow};
use contracts::domain::a007_transport::form::{TransportAction, TransportForm};
use contracts::domain::common::EntityId;
use contracts::shared::validation::parse_number;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a007_transport::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::layout::tabs::tab_labels::transport_edit_key;
use crate::shared::api_utils::HttpClient;
use crate::shared::list_utils::{run_mutation, Outcome};
use crate::shared::modal::ModalService;
use crate::shared::notify::NotificationService;
use crate::shared::ref_data::{load_customers, load_products, use_ref_data, RefDataCache};

const CREATE: Outcome = Outcome::fixed("Transport created successfully", "Failed to create transport");
const UPDATE: Outcome = Outcome::fixed("Transport updated successfully", "Failed to update transport");

/// Bags and kilograms entered so far; unparsable weights count as zero.
pub fn form_totals(form: &TransportForm) -> (usize, f64) {
    let weight = form
        .bags
        .iter()
        .filter_map(|b| parse_number(&b.weight))
        .sum();
    (form.bags.len(), weight)
}

fn blank_form() -> TransportForm {
    TransportForm::default().reduce(TransportAction::AddBag).0
}

#[derive(Clone, Copy)]
pub struct TransportDetailsViewModel {
    pub id: Option<EntityId>,
    pub form: RwSignal<TransportForm>,
    pub errors: RwSignal<Vec<String>>,
    pub saving: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    pub products: RwSignal<Vec<Product>>,
    pub customers: RwSignal<Vec<Customer>>,
    /// Earlier transports of the selected customer.
    pub history: RwSignal<Vec<TransportRow>>,
    http: HttpClient,
    refs: RefDataCache,
    notify: NotificationService,
    modal: ModalService,
    tabs: AppGlobalContext,
}

impl TransportDetailsViewModel {
    pub fn new(id: Option<EntityId>) -> Self {
        Self {
            id,
            form: RwSignal::new(blank_form()),
            errors: RwSignal::new(Vec::new()),
            saving: RwSignal::new(false),
            loading: RwSignal::new(false),
            products: RwSignal::new(Vec::new()),
            customers: RwSignal::new(Vec::new()),
            history: RwSignal::new(Vec::new()),
            http: use_context::<HttpClient>().expect("HttpClient not found"),
            refs: use_ref_data(),
            notify: use_context::<NotificationService>().expect("NotificationService not found"),
            modal: use_context::<ModalService>().expect("ModalService not found"),
            tabs: use_context::<AppGlobalContext>().expect("AppGlobalContext not found"),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    /// Lookups first; in edit mode the stored transport is decoded against
    /// the loaded product list.
    pub fn init(&self) {
        load_customers(self.refs, self.notify, self.customers, false);
        let Some(id) = self.id else {
            load_products(self.refs, self.notify, self.products, false);
            return;
        };

        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            // Without a product list stored ids cannot be checked, so they are kept.
            let known: Option<HashSet<EntityId>> = match this.refs.active_products(false).await {
                Ok(list) => {
                    let known = list.iter().map(|p| p.id).collect();
                    this.products.set(list);
                    Some(known)
                }
                Err(e) => {
                    log::error!("active products: {}", e);
                    this.notify.error(e.user_message("Failed to load products"));
                    None
                }
            };

            match api::detail(this.http, id).await {
                Ok(detail) => {
                    let (form, report) = TransportForm::from_detail(&detail, known.as_ref());
                    if !report.is_clean() {
                        log::warn!("transport {} decoded with problems: {:?}", id, report);
                    }
                    if let Some(name) = detail.customer_name.as_deref().filter(|n| !n.is_empty()) {
                        this.tabs.update_tab_title(
                            &transport_edit_key(id),
                            &detail_tab_label("Transport", name),
                        );
                    }
                    this.form.set(form);
                    this.load_history(detail.customer_id);
                }
                Err(e) => {
                    log::error!("transport detail {}: {}", id, e);
                    this.notify.error(e.user_message("Failed to load transport"));
                }
            }
            this.loading.set(false);
        });
    }

    pub fn refresh_products(&self) {
        load_products(self.refs, self.notify, self.products, true);
    }

    pub fn refresh_customers(&self) {
        load_customers(self.refs, self.notify, self.customers, true);
    }

    /// Applies one form action; a refusal becomes an error notification.
    pub fn dispatch(&self, action: TransportAction) {
        if let Some(refusal) = self.form.try_update(|f| f.apply(action)).flatten() {
            self.notify.error(refusal);
        }
    }

    pub fn select_customer(&self, id: Option<EntityId>) {
        self.dispatch(TransportAction::SetCustomer(id));
        self.load_history(id);
    }

    pub fn remove_bag(&self, bag: usize) {
        let this = *self;
        self.modal.confirm(
            format!("Are you sure you want to remove Bag #{}?", bag + 1),
            move || this.dispatch(TransportAction::RemoveBag(bag)),
        );
    }

    /// The last item of a bag is refused by the reducer without asking.
    pub fn remove_item(&self, bag: usize, item: usize) {
        let count = self
            .form
            .with_untracked(|f| f.bags.get(bag).map(|b| b.items.len()).unwrap_or(0));
        if count <= 1 {
            self.dispatch(TransportAction::RemoveItem { bag, item });
            return;
        }
        let this = *self;
        self.modal.confirm(
            format!("Remove item {} from Bag #{}?", item + 1, bag + 1),
            move || this.dispatch(TransportAction::RemoveItem { bag, item }),
        );
    }

    fn load_history(&self, customer_id: Option<EntityId>) {
        let Some(customer_id) = customer_id else {
            self.history.set(Vec::new());
            return;
        };
        let this = *self;
        spawn_local(async move {
            let query = TransportListQuery {
                customer_id: Some(customer_id),
                status: None,
            };
            match api::list(this.http, query).await {
                Ok(rows) => this.history.set(
                    rows.into_iter()
                        .filter(|r| Some(r.id) != this.id)
                        .collect(),
                ),
                Err(e) => {
                    // informational only
                    log::warn!("transport history for customer {}: {}", customer_id, e);
                    this.history.set(Vec::new());
                }
            }
        });
    }

    pub fn reset(&self) {
        self.form.set(blank_form());
        self.errors.set(Vec::new());
        self.history.set(Vec::new());
    }

    /// Every validation message is listed inline and raised as a notification.
    pub fn save_command(&self, on_close: Callback<()>) {
        self.dispatch(TransportAction::MarkTouched);
        let payload = match self.form.with_untracked(TransportForm::validate) {
            Ok(payload) => payload,
            Err(errors) => {
                for message in &errors {
                    self.notify.error(message.clone());
                }
                self.errors.set(errors);
                return;
            }
        };
        self.errors.set(Vec::new());

        let this = *self;
        if self.is_edit_mode() {
            run_mutation(
                self.notify,
                Some(self.saving),
                UPDATE,
                api::update(self.http, payload),
                move || on_close.run(()),
            );
        } else {
            run_mutation(
                self.notify,
                Some(self.saving),
                CREATE,
                api::create(self.http, payload),
                move || this.reset(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_has_one_bag_with_one_item() {
        let form = blank_form();
        assert_eq!(form.bags.len(), 1);
        assert_eq!(form.bags[0].items.len(), 1);
    }

    #[test]
    fn totals_skip_blank_weights() {
        let mut form = blank_form();
        form.apply(TransportAction::AddBag);
        form.apply(TransportAction::AddBag);
        form.apply(TransportAction::SetBagWeight {
            bag: 0,
            weight: "2.5".into(),
        });
        form.apply(TransportAction::SetBagWeight {
            bag: 2,
            weight: "4".into(),
        });
        assert_eq!(form_totals(&form), (3, 6.5));
    }
}
