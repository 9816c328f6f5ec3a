//! Tab labels: the one place that maps a tab key to its title.

use contracts::domain::common::EntityId;

pub const CATEGORY: &str = "a001_category";
pub const PRODUCT: &str = "a002_product";
pub const CUSTOMER: &str = "a003_customer";
pub const PURCHASE: &str = "a004_purchase";
pub const PURCHASE_NEW: &str = "a004_purchase_new";
pub const SALE: &str = "a005_sale";
pub const POWDER_COATING: &str = "a006_powder_coating";
pub const TRANSPORT: &str = "a007_transport";
pub const TRANSPORT_NEW: &str = "a007_transport_new";
pub const TRANSPORT_EDIT_PREFIX: &str = "a007_transport_edit_";
pub const EMPLOYEE: &str = "a008_employee";
pub const PROFIT: &str = "p900_profit";
pub const COMBINED_PURCHASE_SALE: &str = "u501_combined_purchase_sale";

/// Readable title for a tab key. Fallback: empty string.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        CATEGORY => "Categories",
        PRODUCT => "Products",
        CUSTOMER => "Customers",
        PURCHASE => "Purchases",
        PURCHASE_NEW => "Add Purchase",
        SALE => "Sales",
        POWDER_COATING => "Powder Coating",
        TRANSPORT => "Transport",
        TRANSPORT_NEW => "New Transport",
        EMPLOYEE => "Employees",
        PROFIT => "Profit Report",
        COMBINED_PURCHASE_SALE => "Purchase & Sale",
        k if k.starts_with(TRANSPORT_EDIT_PREFIX) => "Edit Transport",
        _ => "",
    }
}

pub fn transport_edit_key(id: EntityId) -> String {
    format!("{}{}", TRANSPORT_EDIT_PREFIX, id)
}

/// Id carried by a `a007_transport_edit_<id>` key.
pub fn transport_edit_id(key: &str) -> Option<EntityId> {
    key.strip_prefix(TRANSPORT_EDIT_PREFIX)?.parse().ok()
}

/// Detail tab title: «<entity> · <identifier>».
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_keys_round_trip_through_label_and_id() {
        let key = transport_edit_key(17);
        assert_eq!(tab_label_for_key(&key), "Edit Transport");
        assert_eq!(transport_edit_id(&key), Some(17));
        assert_eq!(transport_edit_id("a007_transport_edit_x"), None);
    }

    #[test]
    fn unknown_key_has_no_label() {
        assert_eq!(tab_label_for_key("d400_monthly_summary"), "");
    }
}
