use super::aggregate::{Product, ProductPayload};
use crate::domain::common::{EntityId, RecordStatus};
use crate::shared::validation::{required_id, required_number, required_text, FieldErrors};

#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub editing_id: Option<EntityId>,
    pub name: String,
    pub category_id: Option<EntityId>,
    pub description: String,
    pub minimum_stock: String,
    pub status: RecordStatus,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            editing_id: None,
            name: String::new(),
            category_id: None,
            description: String::new(),
            minimum_stock: "0".to_string(),
            status: RecordStatus::Active,
        }
    }
}

impl ProductForm {
    pub fn from_product(p: &Product) -> Self {
        Self {
            editing_id: Some(p.id),
            name: p.name.clone(),
            category_id: p.category_id,
            description: p.description.clone(),
            minimum_stock: p.minimum_stock.to_string(),
            status: p.status,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn validate(&self) -> Result<ProductPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = required_text(&mut errors, "name", &self.name, "Name");
        let category_id = required_id(&mut errors, "categoryId", self.category_id, "Category");
        let description = required_text(&mut errors, "description", &self.description, "Description");
        let minimum_stock =
            required_number(&mut errors, "minimumStock", &self.minimum_stock, "Minimum stock", 0.0);

        match (category_id, minimum_stock) {
            (Some(category_id), Some(minimum_stock)) if errors.is_empty() => Ok(ProductPayload {
                name,
                category_id,
                description,
                minimum_stock,
                status: self.status,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_minimum_stock_rejected() {
        let form = ProductForm {
            name: "Hinge".into(),
            category_id: Some(2),
            description: "Steel hinge".into(),
            minimum_stock: "-1".into(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("minimumStock"), Some("Minimum stock must be at least 0"));
    }

    #[test]
    fn missing_category_reported() {
        let form = ProductForm {
            name: "Hinge".into(),
            description: "Steel hinge".into(),
            ..Default::default()
        };
        assert_eq!(
            form.validate().unwrap_err().get("categoryId"),
            Some("Category is required")
        );
    }

    #[test]
    fn valid_form_builds_payload() {
        let form = ProductForm {
            name: "Hinge".into(),
            category_id: Some(2),
            description: "Steel hinge".into(),
            minimum_stock: "15".into(),
            ..Default::default()
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.category_id, 2);
        assert_eq!(payload.minimum_stock, 15.0);
    }
}
