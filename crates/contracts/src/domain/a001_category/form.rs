use super::aggregate::{Category, CategoryPayload};
use crate::domain::common::{EntityId, RecordStatus};
use crate::shared::validation::{required_text, FieldErrors};

/// Inline create/edit form on the category screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    pub editing_id: Option<EntityId>,
    pub name: String,
    pub status: RecordStatus,
}

impl CategoryForm {
    pub fn from_category(category: &Category) -> Self {
        Self {
            editing_id: Some(category.id),
            name: category.name.clone(),
            status: category.status,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn validate(&self) -> Result<CategoryPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = required_text(&mut errors, "name", &self.name, "Name");
        errors.into_result(|| CategoryPayload {
            name,
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_rejected() {
        let form = CategoryForm {
            name: "  ".into(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Name is required"));
    }

    #[test]
    fn edit_keeps_id_and_trims() {
        let category = Category {
            id: 3,
            name: "Fasteners".into(),
            status: RecordStatus::Inactive,
            created_at: None,
        };
        let mut form = CategoryForm::from_category(&category);
        form.name = " Bolts ".into();
        assert!(form.is_edit());
        let payload = form.validate().unwrap();
        assert_eq!(payload.name, "Bolts");
        assert_eq!(payload.status, RecordStatus::Inactive);
    }
}
