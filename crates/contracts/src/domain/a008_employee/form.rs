use super::aggregate::{Employee, EmployeePayload};
use crate::domain::common::{EntityId, RecordStatus};
use crate::shared::date_format::{api_to_input_date, format_api_date_midnight};
use crate::shared::validation::{required_text, FieldErrors, ValidationRules, EMAIL_RE, MOBILE_RE};

static MOBILE: ValidationRules =
    ValidationRules::required().pattern(&MOBILE_RE, "Invalid mobile number format");
static EMAIL: ValidationRules = ValidationRules::required().pattern(&EMAIL_RE, "Invalid email format");

/// `joining_date` holds an `<input type="date">` value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeForm {
    pub editing_id: Option<EntityId>,
    pub name: String,
    pub mobile_number: String,
    pub email: String,
    pub address: String,
    pub designation: String,
    pub department: String,
    pub joining_date: String,
    pub status: RecordStatus,
}

impl EmployeeForm {
    pub fn from_employee(e: &Employee) -> Self {
        Self {
            editing_id: Some(e.id),
            name: e.name.clone(),
            mobile_number: e.mobile_number.clone(),
            email: e.email.clone(),
            address: e.address.clone(),
            designation: e.designation.clone(),
            department: e.department.clone(),
            joining_date: e.joining_date.as_deref().map(api_to_input_date).unwrap_or_default(),
            status: e.status,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn validate(&self) -> Result<EmployeePayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = required_text(&mut errors, "name", &self.name, "Name");
        errors.check("mobileNumber", MOBILE.validate_string(&self.mobile_number, "Mobile number"));
        errors.check("email", EMAIL.validate_string(&self.email, "Email"));
        let address = required_text(&mut errors, "address", &self.address, "Address");
        let designation = required_text(&mut errors, "designation", &self.designation, "Designation");
        let department = required_text(&mut errors, "department", &self.department, "Department");
        let joining_date = format_api_date_midnight(&self.joining_date);
        if joining_date.is_none() {
            errors.add("joiningDate", "Joining date is required");
        }

        match joining_date {
            Some(joining_date) if errors.is_empty() => Ok(EmployeePayload {
                name,
                mobile_number: self.mobile_number.trim().to_string(),
                email: self.email.trim().to_string(),
                address,
                designation,
                department,
                joining_date,
                status: self.status,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EmployeeForm {
        EmployeeForm {
            name: "Meera Joshi".into(),
            mobile_number: "9123456780".into(),
            email: "meera@example.com".into(),
            address: "Kothrud, Pune".into(),
            designation: "Supervisor".into(),
            department: "Coating".into(),
            joining_date: "2023-07-09".into(),
            ..Default::default()
        }
    }

    #[test]
    fn joining_date_sent_at_midnight() {
        let payload = filled().validate().unwrap();
        assert_eq!(payload.joining_date, "09-07-2023 00:00:00");
    }

    #[test]
    fn missing_joining_date_and_bad_mobile() {
        let form = EmployeeForm {
            joining_date: String::new(),
            mobile_number: "91234".into(),
            ..filled()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("joiningDate"), Some("Joining date is required"));
        assert_eq!(errors.get("mobileNumber"), Some("Invalid mobile number format"));
    }

    #[test]
    fn edit_form_restores_date_input() {
        let employee = Employee {
            id: 2,
            name: "Meera Joshi".into(),
            mobile_number: "9123456780".into(),
            email: "meera@example.com".into(),
            address: "Pune".into(),
            designation: "Supervisor".into(),
            department: "Coating".into(),
            joining_date: Some("09-07-2023 00:00:00".into()),
            status: RecordStatus::Active,
        };
        assert_eq!(EmployeeForm::from_employee(&employee).joining_date, "2023-07-09");
    }
}
