use super::aggregate::{Customer, CustomerPayload};
use crate::domain::common::{EntityId, RecordStatus};
use crate::shared::date_format::{api_to_input_datetime, format_api_datetime};
use crate::shared::validation::{
    optional_text, required_number, FieldErrors, ValidationRules, EMAIL_RE, GST_RE, MOBILE_RE,
};

static NAME: ValidationRules = ValidationRules::required().max_length(100);
static MOBILE: ValidationRules =
    ValidationRules::required().pattern(&MOBILE_RE, "Invalid mobile number format");
static EMAIL: ValidationRules = ValidationRules::required().pattern(&EMAIL_RE, "Invalid email format");
static GST: ValidationRules = ValidationRules::none().pattern(&GST_RE, "Invalid GST number format");
static ADDRESS: ValidationRules = ValidationRules::required();

/// Customer modal form. `next_action_date` holds a `datetime-local` value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerForm {
    pub editing_id: Option<EntityId>,
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub gst: String,
    pub address: String,
    pub remaining_payment_amount: String,
    pub next_action_date: String,
    pub remarks: String,
    pub status: RecordStatus,
}

impl CustomerForm {
    /// Blank form with the next action date set to `now`.
    pub fn new(now: String) -> Self {
        Self {
            remaining_payment_amount: "0".to_string(),
            next_action_date: now,
            ..Default::default()
        }
    }

    pub fn from_customer(c: &Customer) -> Self {
        Self {
            editing_id: Some(c.id),
            name: c.name.clone(),
            mobile: c.mobile.clone(),
            email: c.email.clone(),
            gst: c.gst.clone().unwrap_or_default(),
            address: c.address.clone(),
            remaining_payment_amount: c.remaining_payment_amount.to_string(),
            next_action_date: c
                .next_action_date
                .as_deref()
                .map(api_to_input_datetime)
                .unwrap_or_default(),
            remarks: c.remarks.clone().unwrap_or_default(),
            status: c.status,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn validate(&self) -> Result<CustomerPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("name", NAME.validate_string(&self.name, "Name"));
        errors.check("mobile", MOBILE.validate_string(&self.mobile, "Mobile"));
        errors.check("email", EMAIL.validate_string(&self.email, "Email"));
        errors.check("gst", GST.validate_string(&self.gst, "GST"));
        errors.check("address", ADDRESS.validate_string(&self.address, "Address"));
        let remaining = required_number(
            &mut errors,
            "remainingPaymentAmount",
            &self.remaining_payment_amount,
            "Remaining payment",
            0.0,
        );

        let Some(remaining_payment_amount) = remaining else {
            return Err(errors);
        };
        errors.into_result(|| CustomerPayload {
            name: self.name.trim().to_string(),
            mobile: self.mobile.trim().to_string(),
            email: self.email.trim().to_string(),
            gst: optional_text(&self.gst),
            address: self.address.trim().to_string(),
            remaining_payment_amount,
            next_action_date: format_api_datetime(&self.next_action_date),
            remarks: optional_text(&self.remarks),
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CustomerForm {
        CustomerForm {
            name: "Ravi Traders".into(),
            mobile: "9876543210".into(),
            email: "ravi@example.com".into(),
            address: "Plot 4, MIDC".into(),
            ..CustomerForm::new("2024-05-02T09:30".into())
        }
    }

    #[test]
    fn valid_customer_payload() {
        let payload = filled().validate().unwrap();
        assert_eq!(payload.gst, None);
        assert_eq!(payload.next_action_date.as_deref(), Some("02-05-2024 09:30:00"));
        assert_eq!(payload.remaining_payment_amount, 0.0);
    }

    #[test]
    fn pattern_errors() {
        let form = CustomerForm {
            mobile: "12345".into(),
            email: "ravi@".into(),
            gst: "NOTAGST".into(),
            ..filled()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("mobile"), Some("Invalid mobile number format"));
        assert_eq!(errors.get("email"), Some("Invalid email format"));
        assert_eq!(errors.get("gst"), Some("Invalid GST number format"));
    }

    #[test]
    fn negative_balance_rejected() {
        let form = CustomerForm {
            remaining_payment_amount: "-10".into(),
            ..filled()
        };
        assert!(form.validate().unwrap_err().get("remainingPaymentAmount").is_some());
    }
}
