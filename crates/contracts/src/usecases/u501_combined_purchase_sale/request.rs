//! One form that records a purchase and its immediate sale.

use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::shared::date_format::format_api_datetime;
use crate::shared::validation::{
    optional_number, optional_text, required_count, required_id, required_number, FieldErrors,
};

pub const RESOURCE: &str = "/api/combined-purchase-sale";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedPurchaseSaleRequest {
    pub product_id: EntityId,
    pub quantity: u32,
    pub purchase_unit_price: f64,
    pub purchase_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_invoice_number: Option<String>,
    pub purchase_other_expenses: f64,
    pub sale_unit_price: f64,
    pub sale_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_invoice_number: Option<String>,
    pub sale_other_expenses: f64,
}

/// Product and quantity are shared by both halves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombinedForm {
    pub product_id: Option<EntityId>,
    pub quantity: String,
    pub purchase_unit_price: String,
    pub purchase_date: String,
    pub purchase_invoice_number: String,
    pub purchase_other_expenses: String,
    pub sale_unit_price: String,
    pub sale_date: String,
    pub sale_invoice_number: String,
    pub sale_other_expenses: String,
}

impl CombinedForm {
    pub fn new(now: String) -> Self {
        Self {
            purchase_date: now.clone(),
            sale_date: now,
            purchase_other_expenses: "0".to_string(),
            sale_other_expenses: "0".to_string(),
            ..Default::default()
        }
    }

    /// Sale minus purchase for the entered quantity, before expenses.
    pub fn expected_margin(&self) -> Option<f64> {
        let qty: f64 = self.quantity.trim().parse().ok()?;
        let buy: f64 = self.purchase_unit_price.trim().parse().ok()?;
        let sell: f64 = self.sale_unit_price.trim().parse().ok()?;
        Some((sell - buy) * qty)
    }

    pub fn validate(&self) -> Result<CombinedPurchaseSaleRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        let product_id = required_id(&mut errors, "productId", self.product_id, "Product");
        let quantity = required_count(&mut errors, "quantity", &self.quantity, "Quantity", 1, None);
        let purchase_unit_price = required_number(
            &mut errors,
            "purchaseUnitPrice",
            &self.purchase_unit_price,
            "Purchase unit price",
            0.01,
        );
        let purchase_date = format_api_datetime(&self.purchase_date);
        if purchase_date.is_none() {
            errors.add("purchaseDate", "Purchase date is required");
        }
        let purchase_other_expenses = optional_number(
            &mut errors,
            "purchaseOtherExpenses",
            &self.purchase_other_expenses,
            "Purchase other expenses",
            0.0,
        );
        let sale_unit_price = required_number(
            &mut errors,
            "saleUnitPrice",
            &self.sale_unit_price,
            "Sale unit price",
            0.01,
        );
        let sale_date = format_api_datetime(&self.sale_date);
        if sale_date.is_none() {
            errors.add("saleDate", "Sale date is required");
        }
        let sale_other_expenses = optional_number(
            &mut errors,
            "saleOtherExpenses",
            &self.sale_other_expenses,
            "Sale other expenses",
            0.0,
        );

        match (product_id, quantity, purchase_unit_price, purchase_date, sale_unit_price, sale_date) {
            (Some(product_id), Some(quantity), Some(pup), Some(pd), Some(sup), Some(sd))
                if errors.is_empty() =>
            {
                Ok(CombinedPurchaseSaleRequest {
                    product_id,
                    quantity,
                    purchase_unit_price: pup,
                    purchase_date: pd,
                    purchase_invoice_number: optional_text(&self.purchase_invoice_number),
                    purchase_other_expenses,
                    sale_unit_price: sup,
                    sale_date: sd,
                    sale_invoice_number: optional_text(&self.sale_invoice_number),
                    sale_other_expenses,
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CombinedForm {
        CombinedForm {
            product_id: Some(4),
            quantity: "10".into(),
            purchase_unit_price: "20".into(),
            sale_unit_price: "26.5".into(),
            ..CombinedForm::new("2024-04-01T12:00".into())
        }
    }

    #[test]
    fn both_halves_share_product_and_quantity() {
        let req = filled().validate().unwrap();
        assert_eq!(req.product_id, 4);
        assert_eq!(req.quantity, 10);
        assert_eq!(req.purchase_date, "01-04-2024 12:00:00");
        assert_eq!(req.sale_date, "01-04-2024 12:00:00");
        assert_eq!(req.sale_invoice_number, None);
    }

    #[test]
    fn margin_preview() {
        assert_eq!(filled().expected_margin(), Some(65.0));
        assert_eq!(CombinedForm::default().expected_margin(), None);
    }

    #[test]
    fn sale_price_must_be_positive() {
        let form = CombinedForm {
            sale_unit_price: "0".into(),
            ..filled()
        };
        assert_eq!(
            form.validate().unwrap_err().get("saleUnitPrice"),
            Some("Sale unit price must be at least 0.01")
        );
    }
}
