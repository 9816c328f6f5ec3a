use super::aggregate::{PowderCoatingProcess, ProcessPayload, ReturnPayload};
use crate::domain::common::{EntityId, RecordStatus};
use crate::shared::date_format::format_api_datetime;
use crate::shared::validation::{required_count, required_id, FieldErrors};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessForm {
    pub editing_id: Option<EntityId>,
    pub customer_id: Option<EntityId>,
    pub product_id: Option<EntityId>,
    pub quantity: String,
    pub status: RecordStatus,
}

impl ProcessForm {
    pub fn from_process(p: &PowderCoatingProcess) -> Self {
        Self {
            editing_id: Some(p.id),
            customer_id: Some(p.customer_id),
            product_id: Some(p.product_id),
            quantity: p.quantity.to_string(),
            status: p.status,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn validate(&self) -> Result<ProcessPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        let customer_id = required_id(&mut errors, "customerId", self.customer_id, "Customer");
        let product_id = required_id(&mut errors, "productId", self.product_id, "Product");
        let quantity = required_count(&mut errors, "quantity", &self.quantity, "Quantity", 1, None);
        match (customer_id, product_id, quantity) {
            (Some(customer_id), Some(product_id), Some(quantity)) => Ok(ProcessPayload {
                customer_id,
                product_id,
                quantity,
                status: self.status,
            }),
            _ => Err(errors),
        }
    }
}

/// Return modal for one process.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReturnForm {
    pub process_id: EntityId,
    /// Cap from the process row, `None` when unknown.
    pub max_quantity: Option<u32>,
    pub return_quantity: String,
    pub return_date: String,
}

impl ReturnForm {
    pub fn for_process(process: &PowderCoatingProcess, now: String) -> Self {
        Self {
            process_id: process.id,
            max_quantity: Some(process.returnable_quantity()).filter(|q| *q > 0),
            return_quantity: String::new(),
            return_date: now,
        }
    }

    pub fn validate(&self) -> Result<ReturnPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        let quantity = required_count(
            &mut errors,
            "returnQuantity",
            &self.return_quantity,
            "Return quantity",
            1,
            self.max_quantity,
        );
        match quantity {
            Some(return_quantity) => Ok(ReturnPayload {
                id: self.process_id,
                return_quantity,
                return_date: format_api_datetime(&self.return_date),
            }),
            None => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn process() -> PowderCoatingProcess {
        PowderCoatingProcess {
            id: 8,
            product_id: 3,
            product_name: "Gate panel".into(),
            customer_id: 4,
            customer_name: "Shree Fab".into(),
            quantity: 50.0,
            remaining_quantity: 20.0,
            status: RecordStatus::Active,
            created_at: None,
        }
    }

    #[test]
    fn return_payload_shape() {
        let mut form = ReturnForm::for_process(&process(), "2024-06-01T08:15".into());
        form.return_quantity = "5".into();
        let payload = form.validate().unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({"id": 8, "returnQuantity": 5, "returnDate": "01-06-2024 08:15:00"})
        );
    }

    #[test]
    fn return_quantity_bounds() {
        let mut form = ReturnForm::for_process(&process(), "2024-06-01T08:15".into());
        form.return_quantity = "0".into();
        assert_eq!(
            form.validate().unwrap_err().get("returnQuantity"),
            Some("Return quantity must be at least 1")
        );
        form.return_quantity = "21".into();
        assert!(form.validate().is_err());
    }

    #[test]
    fn process_form_requires_selection() {
        let form = ProcessForm {
            quantity: "4".into(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("customerId"), Some("Customer is required"));
        assert_eq!(errors.get("productId"), Some("Product is required"));
    }
}
