//! Tab content registry: maps a tab key to the view it shows.

use super::tab_labels::{self as keys, transport_edit_id};
use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a003_customer::ui::list::CustomerList;
use crate::domain::a004_purchase::ui::details::AddPurchase;
use crate::domain::a004_purchase::ui::list::PurchaseList;
use crate::domain::a005_sale::ui::list::SaleList;
use crate::domain::a006_powder_coating::ui::list::PowderCoatingList;
use crate::domain::a007_transport::ui::details::TransportDetails;
use crate::domain::a007_transport::ui::list::TransportList;
use crate::domain::a008_employee::ui::list::EmployeeList;
use crate::layout::global_context::AppGlobalContext;
use crate::projections::p900_profit::ui::list::ProfitList;
use crate::usecases::u501_combined_purchase_sale::CombinedPurchaseSaleView;
use leptos::logging::log;
use leptos::prelude::*;

/// Builds the content of the tab `key`. `tabs_store` lets form tabs close
/// themselves.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();
    let on_close = Callback::new(move |_: ()| tabs_store.close_tab(&key_for_close));

    match key {
        keys::CATEGORY => view! { <CategoryList /> }.into_any(),
        keys::PRODUCT => view! { <ProductList /> }.into_any(),
        keys::CUSTOMER => view! { <CustomerList /> }.into_any(),
        keys::PURCHASE => view! { <PurchaseList /> }.into_any(),
        keys::PURCHASE_NEW => view! { <AddPurchase on_close=on_close /> }.into_any(),
        keys::SALE => view! { <SaleList /> }.into_any(),
        keys::POWDER_COATING => view! { <PowderCoatingList /> }.into_any(),
        keys::TRANSPORT => view! { <TransportList /> }.into_any(),
        keys::TRANSPORT_NEW => {
            view! { <TransportDetails id=None on_close=on_close /> }.into_any()
        }
        k if transport_edit_id(k).is_some() => {
            let id = transport_edit_id(k);
            view! { <TransportDetails id=id on_close=on_close /> }.into_any()
        }
        keys::EMPLOYEE => view! { <EmployeeList /> }.into_any(),
        keys::PROFIT => view! { <ProfitList /> }.into_any(),
        keys::COMBINED_PURCHASE_SALE => {
            view! { <CombinedPurchaseSaleView on_close=on_close /> }.into_any()
        }
        _ => {
            log!("no view registered for tab '{}'", key);
            view! { <div class="placeholder">{format!("Unknown tab: {}", key)}</div> }.into_any()
        }
    }
}
