use super::aggregate::PurchasePayload;
use crate::domain::common::EntityId;
use crate::shared::date_format::format_api_datetime;
use crate::shared::validation::{
    optional_number, required_count, required_id, required_number, required_text, FieldErrors,
};

/// "Add purchase" form; `purchase_date` is a `datetime-local` value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurchaseForm {
    pub product_id: Option<EntityId>,
    pub quantity: String,
    pub unit_price: String,
    pub purchase_date: String,
    pub invoice_number: String,
    pub other_expenses: String,
}

impl PurchaseForm {
    pub fn new(now: String) -> Self {
        Self {
            purchase_date: now,
            other_expenses: "0".to_string(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<PurchasePayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        let product_id = required_id(&mut errors, "productId", self.product_id, "Product");
        let quantity = required_count(&mut errors, "quantity", &self.quantity, "Quantity", 1, None);
        let unit_price = required_number(&mut errors, "unitPrice", &self.unit_price, "Unit price", 0.01);
        let purchase_date = format_api_datetime(&self.purchase_date);
        if purchase_date.is_none() {
            errors.add("purchaseDate", "Purchase date is required");
        }
        let invoice_number =
            required_text(&mut errors, "invoiceNumber", &self.invoice_number, "Invoice number");
        let other_expenses =
            optional_number(&mut errors, "otherExpenses", &self.other_expenses, "Other expenses", 0.0);

        match (product_id, quantity, unit_price, purchase_date) {
            (Some(product_id), Some(quantity), Some(unit_price), Some(purchase_date))
                if errors.is_empty() =>
            {
                Ok(PurchasePayload {
                    product_id,
                    quantity,
                    unit_price,
                    purchase_date,
                    invoice_number,
                    other_expenses,
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PurchaseForm {
        PurchaseForm {
            product_id: Some(11),
            quantity: "20".into(),
            unit_price: "45.5".into(),
            invoice_number: "INV-778".into(),
            ..PurchaseForm::new("2024-02-10T16:45".into())
        }
    }

    #[test]
    fn payload_uses_wire_date() {
        let p = filled().validate().unwrap();
        assert_eq!(p.purchase_date, "10-02-2024 16:45:00");
        assert_eq!(p.quantity, 20);
        assert_eq!(p.other_expenses, 0.0);
    }

    #[test]
    fn zero_price_and_quantity_rejected() {
        let form = PurchaseForm {
            quantity: "0".into(),
            unit_price: "0".into(),
            ..filled()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("quantity"), Some("Quantity must be at least 1"));
        assert_eq!(errors.get("unitPrice"), Some("Unit price must be at least 0.01"));
    }
}
