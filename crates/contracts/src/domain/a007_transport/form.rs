//! Transport form: a customer plus an ordered list of bags, each an ordered
//! list of items. All edits go through [`TransportForm::reduce`].

use std::collections::HashSet;

use super::aggregate::{
    Embedded, StoredBag, TransportBag, TransportDetail, TransportItem, TransportPayload,
};
use crate::domain::common::EntityId;
use crate::shared::validation::parse_number;

const MIN_WEIGHT: f64 = 0.01;
const MIN_QUANTITY: f64 = 1.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub product_id: Option<EntityId>,
    pub quantity: String,
    pub remarks: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BagForm {
    pub weight: String,
    pub items: Vec<ItemForm>,
}

impl Default for BagForm {
    /// A new bag starts with one empty item.
    fn default() -> Self {
        Self {
            weight: String::new(),
            items: vec![ItemForm::default()],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransportForm {
    pub editing_id: Option<EntityId>,
    pub customer_id: Option<EntityId>,
    pub bags: Vec<BagForm>,
    /// Set after a failed submit so inline errors show up.
    pub touched: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransportAction {
    SetCustomer(Option<EntityId>),
    AddBag,
    RemoveBag(usize),
    SetBagWeight { bag: usize, weight: String },
    AddItem(usize),
    RemoveItem { bag: usize, item: usize },
    SetItemProduct { bag: usize, item: usize, product_id: Option<EntityId> },
    SetItemQuantity { bag: usize, item: usize, quantity: String },
    SetItemRemarks { bag: usize, item: usize, remarks: String },
    MarkTouched,
    Reset,
}

/// An item whose product is not in the loaded product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanItem {
    pub bag: usize,
    pub item: usize,
    pub product_id: EntityId,
}

/// What could not be restored when loading a stored transport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeReport {
    pub orphans: Vec<OrphanItem>,
    /// Bags whose `items` payload did not decode; they come back empty.
    pub malformed_bags: Vec<usize>,
    /// The `bags` payload itself did not decode.
    pub bags_unreadable: bool,
}

impl DecodeReport {
    pub fn is_clean(&self) -> bool {
        self.orphans.is_empty() && self.malformed_bags.is_empty() && !self.bags_unreadable
    }
}

impl TransportForm {
    pub fn is_edit(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Applies one edit. The second value is a message for the user when
    /// the edit was refused.
    pub fn reduce(mut self, action: TransportAction) -> (Self, Option<String>) {
        let refusal = self.apply(action);
        (self, refusal)
    }

    pub fn apply(&mut self, action: TransportAction) -> Option<String> {
        match action {
            TransportAction::SetCustomer(id) => self.customer_id = id,
            TransportAction::AddBag => self.bags.push(BagForm::default()),
            TransportAction::RemoveBag(bag) => {
                if bag < self.bags.len() {
                    self.bags.remove(bag);
                }
            }
            TransportAction::SetBagWeight { bag, weight } => {
                if let Some(b) = self.bags.get_mut(bag) {
                    b.weight = weight;
                }
            }
            TransportAction::AddItem(bag) => {
                if let Some(b) = self.bags.get_mut(bag) {
                    b.items.push(ItemForm::default());
                }
            }
            TransportAction::RemoveItem { bag, item } => {
                if let Some(b) = self.bags.get_mut(bag) {
                    if item >= b.items.len() {
                        return None;
                    }
                    if b.items.len() <= 1 {
                        return Some("At least one item is required in a bag".to_string());
                    }
                    b.items.remove(item);
                }
            }
            TransportAction::SetItemProduct { bag, item, product_id } => {
                if let Some(i) = self.item_mut(bag, item) {
                    i.product_id = product_id;
                }
            }
            TransportAction::SetItemQuantity { bag, item, quantity } => {
                if let Some(i) = self.item_mut(bag, item) {
                    i.quantity = quantity;
                }
            }
            TransportAction::SetItemRemarks { bag, item, remarks } => {
                if let Some(i) = self.item_mut(bag, item) {
                    i.remarks = remarks;
                }
            }
            TransportAction::MarkTouched => self.touched = true,
            TransportAction::Reset => *self = Self::default(),
        }
        None
    }

    fn item_mut(&mut self, bag: usize, item: usize) -> Option<&mut ItemForm> {
        self.bags.get_mut(bag)?.items.get_mut(item)
    }

    /// All problems, in form order. Empty quantity or weight (or zero)
    /// counts as missing.
    pub fn validate(&self) -> Result<TransportPayload, Vec<String>> {
        let mut errors = Vec::new();

        if self.customer_id.is_none() {
            errors.push("Please select a customer".to_string());
        }

        if self.bags.is_empty() {
            errors.push("Please add at least one bag".to_string());
        }

        let mut bags = Vec::with_capacity(self.bags.len());
        for (bi, bag) in self.bags.iter().enumerate() {
            let n = bi + 1;
            let weight = parse_number(&bag.weight).filter(|w| *w != 0.0);
            match weight {
                None => errors.push(format!("Please enter weight for Bag #{n}")),
                Some(w) if w < MIN_WEIGHT => {
                    errors.push(format!("Weight must be greater than 0kg for Bag #{n}"))
                }
                Some(_) => {}
            }

            if bag.items.is_empty() {
                errors.push(format!("Please add at least one item in Bag #{n}"));
            }

            let mut items = Vec::with_capacity(bag.items.len());
            for (ii, item) in bag.items.iter().enumerate() {
                let i = ii + 1;
                if item.product_id.is_none() {
                    errors.push(format!("Please select product for item {i} in Bag #{n}"));
                }
                let quantity = parse_number(&item.quantity).filter(|q| *q != 0.0);
                match quantity {
                    None => errors.push(format!("Please enter quantity for item {i} in Bag #{n}")),
                    Some(q) if q < MIN_QUANTITY => errors.push(format!(
                        "Quantity must be greater than 0 for item {i} in Bag #{n}"
                    )),
                    Some(_) => {}
                }
                if let (Some(product_id), Some(quantity)) = (item.product_id, quantity) {
                    let remarks = item.remarks.trim();
                    items.push(TransportItem {
                        product_id,
                        quantity,
                        remarks: (!remarks.is_empty()).then(|| remarks.to_string()),
                    });
                }
            }
            if let Some(weight) = weight {
                bags.push(TransportBag { weight, items });
            }
        }

        match self.customer_id {
            Some(customer_id) if errors.is_empty() => Ok(TransportPayload {
                id: self.editing_id,
                customer_id,
                bags,
            }),
            _ => Err(errors),
        }
    }

    /// Rebuilds the form from a stored transport. Items pointing at products
    /// outside `known_products` lose their product and are reported. With no
    /// product list every stored id is kept as is.
    pub fn from_detail(
        detail: &TransportDetail,
        known_products: Option<&HashSet<EntityId>>,
    ) -> (Self, DecodeReport) {
        let mut report = DecodeReport::default();

        let stored_bags = match &detail.bags {
            Embedded::Encoded(s) if s.trim().is_empty() => Vec::new(),
            other => other.decode().unwrap_or_else(|_| {
                report.bags_unreadable = true;
                Vec::new()
            }),
        };

        let bags = stored_bags
            .iter()
            .enumerate()
            .map(|(bi, bag)| restore_bag(bi, bag, known_products, &mut report))
            .collect();

        let form = Self {
            editing_id: Some(detail.id),
            customer_id: detail.customer_id,
            bags,
            touched: false,
        };
        (form, report)
    }
}

fn restore_bag(
    bi: usize,
    bag: &StoredBag,
    known_products: Option<&HashSet<EntityId>>,
    report: &mut DecodeReport,
) -> BagForm {
    let stored_items = match &bag.items {
        Embedded::Encoded(s) if s.trim().is_empty() => Vec::new(),
        other => other.decode().unwrap_or_else(|_| {
            report.malformed_bags.push(bi);
            Vec::new()
        }),
    };

    let items = stored_items
        .into_iter()
        .enumerate()
        .map(|(ii, item)| {
            let product_id = match item.product_id {
                Some(id) if known_products.map_or(true, |known| known.contains(&id)) => {
                    Some(id)
                }
                Some(id) => {
                    report.orphans.push(OrphanItem {
                        bag: bi,
                        item: ii,
                        product_id: id,
                    });
                    None
                }
                None => None,
            };
            ItemForm {
                product_id,
                quantity: item.quantity.map(format_quantity).unwrap_or_default(),
                remarks: item.remarks.unwrap_or_default(),
            }
        })
        .collect();

    BagForm {
        weight: bag.weight.map(format_quantity).unwrap_or_default(),
        items,
    }
}

fn format_quantity(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(form: TransportForm, actions: Vec<TransportAction>) -> TransportForm {
        actions.into_iter().fold(form, |f, a| f.reduce(a).0)
    }

    fn filled() -> TransportForm {
        run(
            TransportForm::default(),
            vec![
                TransportAction::SetCustomer(Some(3)),
                TransportAction::AddBag,
                TransportAction::SetBagWeight {
                    bag: 0,
                    weight: "12.5".into(),
                },
                TransportAction::SetItemProduct {
                    bag: 0,
                    item: 0,
                    product_id: Some(7),
                },
                TransportAction::SetItemQuantity {
                    bag: 0,
                    item: 0,
                    quantity: "4".into(),
                },
            ],
        )
    }

    #[test]
    fn add_bag_starts_with_one_item() {
        let (form, msg) = TransportForm::default().reduce(TransportAction::AddBag);
        assert!(msg.is_none());
        assert_eq!(form.bags.len(), 1);
        assert_eq!(form.bags[0].items.len(), 1);
    }

    #[test]
    fn last_item_cannot_be_removed() {
        let (form, msg) = filled().reduce(TransportAction::RemoveItem { bag: 0, item: 0 });
        assert_eq!(msg.as_deref(), Some("At least one item is required in a bag"));
        assert_eq!(form.bags[0].items.len(), 1);
    }

    #[test]
    fn out_of_range_edits_are_ignored() {
        let before = filled();
        let after = run(
            before.clone(),
            vec![
                TransportAction::RemoveBag(4),
                TransportAction::AddItem(9),
                TransportAction::SetItemRemarks {
                    bag: 0,
                    item: 5,
                    remarks: "x".into(),
                },
            ],
        );
        assert_eq!(after, before);
    }

    #[test]
    fn empty_bag_blocks_submit() {
        let mut form = filled();
        form.bags[0].items.clear();
        let errors = form.validate().unwrap_err();
        assert!(errors.contains(&"Please add at least one item in Bag #1".to_string()));
    }

    #[test]
    fn messages_follow_form_order() {
        let form = run(
            TransportForm::default(),
            vec![
                TransportAction::AddBag,
                TransportAction::SetBagWeight {
                    bag: 0,
                    weight: "0.001".into(),
                },
                TransportAction::SetItemQuantity {
                    bag: 0,
                    item: 0,
                    quantity: "0.5".into(),
                },
            ],
        );
        assert_eq!(
            form.validate().unwrap_err(),
            vec![
                "Please select a customer".to_string(),
                "Weight must be greater than 0kg for Bag #1".to_string(),
                "Please select product for item 1 in Bag #1".to_string(),
                "Quantity must be greater than 0 for item 1 in Bag #1".to_string(),
            ]
        );
    }

    #[test]
    fn no_bags() {
        let form = TransportForm {
            customer_id: Some(1),
            ..Default::default()
        };
        assert_eq!(
            form.validate().unwrap_err(),
            vec!["Please add at least one bag".to_string()]
        );
    }

    #[test]
    fn valid_form_payload() {
        let form = run(
            filled(),
            vec![TransportAction::SetItemRemarks {
                bag: 0,
                item: 0,
                remarks: "  top shelf ".into(),
            }],
        );
        let payload = form.validate().unwrap();
        assert_eq!(payload.customer_id, 3);
        assert_eq!(payload.bags[0].weight, 12.5);
        assert_eq!(payload.bags[0].items[0].remarks.as_deref(), Some("top shelf"));
        assert_eq!(payload.id, None);
    }

    #[test]
    fn restore_from_detail_reports_orphans_and_bad_bags() {
        let body = r#"{
            "id": 30,
            "customerId": 3,
            "bags": [
                {"weight": 5, "items": "[{\"productId\":7,\"quantity\":2},{\"productId\":99,\"quantity\":1}]"},
                {"weight": 2, "items": "not json"}
            ]
        }"#;
        let detail: TransportDetail = serde_json::from_str(body).unwrap();
        let known: HashSet<EntityId> = [7].into_iter().collect();
        let (form, report) = TransportForm::from_detail(&detail, Some(&known));

        assert_eq!(form.editing_id, Some(30));
        assert_eq!(form.bags.len(), 2);
        assert_eq!(form.bags[0].weight, "5");
        assert_eq!(form.bags[0].items[0].product_id, Some(7));
        assert_eq!(form.bags[0].items[0].quantity, "2");
        assert_eq!(form.bags[0].items[1].product_id, None);
        assert!(form.bags[1].items.is_empty());
        assert_eq!(
            report.orphans,
            vec![OrphanItem {
                bag: 0,
                item: 1,
                product_id: 99
            }]
        );
        assert_eq!(report.malformed_bags, vec![1]);
        assert!(!report.is_clean());
    }

    #[test]
    fn missing_product_list_keeps_stored_ids() {
        let body = r#"{
            "id": 31,
            "customerId": 3,
            "bags": [
                {"weight": 4, "items": "[{\"productId\":7,\"quantity\":2},{\"productId\":99,\"quantity\":1}]"}
            ]
        }"#;
        let detail: TransportDetail = serde_json::from_str(body).unwrap();
        let (form, report) = TransportForm::from_detail(&detail, None);

        assert_eq!(form.bags[0].items[0].product_id, Some(7));
        assert_eq!(form.bags[0].items[1].product_id, Some(99));
        assert!(report.orphans.is_empty());
        assert!(report.is_clean());
    }
}
