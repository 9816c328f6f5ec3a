use super::aggregate::SalePayload;
use crate::domain::a004_purchase::aggregate::Purchase;
use crate::domain::common::EntityId;
use crate::shared::date_format::format_api_datetime;
use crate::shared::validation::{
    optional_number, required_count, required_number, required_text, FieldErrors,
};

/// Sale modal opened from a purchase row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaleForm {
    pub purchase_id: EntityId,
    /// Remaining quantity of the purchase.
    pub max_quantity: u32,
    pub quantity: String,
    pub unit_price: String,
    pub sale_date: String,
    pub invoice_number: String,
    pub other_expenses: String,
}

impl SaleForm {
    pub fn for_purchase(purchase: &Purchase, now: String) -> Self {
        Self {
            purchase_id: purchase.id,
            max_quantity: purchase.sellable_quantity(),
            quantity: String::new(),
            unit_price: purchase.unit_price.to_string(),
            sale_date: now,
            invoice_number: String::new(),
            other_expenses: "0".to_string(),
        }
    }

    pub fn validate(&self) -> Result<SalePayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        let quantity = required_count(
            &mut errors,
            "quantity",
            &self.quantity,
            "Quantity",
            1,
            Some(self.max_quantity),
        );
        let unit_price = required_number(&mut errors, "unitPrice", &self.unit_price, "Unit price", 0.0);
        let invoice_number =
            required_text(&mut errors, "invoiceNumber", &self.invoice_number, "Invoice number");
        let other_expenses =
            optional_number(&mut errors, "otherExpenses", &self.other_expenses, "Other expenses", 0.0);
        let sale_date = format_api_datetime(&self.sale_date);
        if sale_date.is_none() {
            errors.add("saleDate", "Sale date is required");
        }

        match (quantity, unit_price, sale_date) {
            (Some(quantity), Some(unit_price), Some(sale_date)) if errors.is_empty() => {
                Ok(SalePayload {
                    purchase_id: self.purchase_id,
                    quantity,
                    unit_price,
                    sale_date,
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

    fn purchase(remaining: f64) -> Purchase {
        Purchase {
            id: 42,
            product_id: 5,
            product_name: Some("Angle bracket".into()),
            category_id: None,
            category_name: None,
            quantity: 100.0,
            unit_price: 12.0,
            purchase_date: "01-01-2024 10:00:00".into(),
            invoice_number: None,
            other_expenses: None,
            remaining_quantity: Some(remaining),
            total_amount: None,
        }
    }

    #[test]
    fn prefilled_from_purchase() {
        let form = SaleForm::for_purchase(&purchase(30.0), "2024-01-05T11:00".into());
        assert_eq!(form.purchase_id, 42);
        assert_eq!(form.max_quantity, 30);
        assert_eq!(form.unit_price, "12");
    }

    #[test]
    fn quantity_capped_by_remaining() {
        let mut form = SaleForm::for_purchase(&purchase(30.0), "2024-01-05T11:00".into());
        form.quantity = "31".into();
        form.invoice_number = "S-1".into();
        assert_eq!(
            form.validate().unwrap_err().get("quantity"),
            Some("Quantity must not exceed 30")
        );

        form.quantity = "30".into();
        let payload = form.validate().unwrap();
        assert_eq!(payload.quantity, 30);
        assert_eq!(payload.sale_date, "05-01-2024 11:00:00");
    }

    #[test]
    fn invoice_required() {
        let mut form = SaleForm::for_purchase(&purchase(3.0), "2024-01-05T11:00".into());
        form.quantity = "1".into();
        assert_eq!(
            form.validate().unwrap_err().get("invoiceNumber"),
            Some("Invoice number is required")
        );
    }
}
