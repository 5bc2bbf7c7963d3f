use crate::error::LeadError;
use crate::leads::model::NewLead;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use validator::{Validate, ValidationErrors};

/// Optional leading `+`, then at least six digits mixed with spaces, dashes and parentheses
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?(?:[ ()\-]*[0-9]){6,}[ ()\-]*$").expect("phone pattern compiles")
});

/// Fields in form order, with the message shown when one fails.
const FIELD_REASONS: [(&str, &str); 4] = [
    ("name", "required"),
    ("email", "expected an address like name@example.com"),
    ("phone", "expected digits with optional + - ( ) and spaces"),
    ("message", "required"),
];

/// Raw contact form as submitted from a listing or the contact page
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LeadForm {
    #[validate(length(min = 1, max = 120))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[serde(default)]
    #[validate(regex(path = *PHONE_RE))]
    pub phone: Option<String>,

    #[validate(length(min = 1, max = 2000))]
    pub message: String,

    #[serde(default)]
    pub property_id: Option<String>,
}

impl LeadForm {
    /// Copy with every field trimmed and blank optional fields dropped.
    pub fn normalized(&self) -> LeadForm {
        let optional = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        LeadForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            phone: optional(&self.phone),
            message: self.message.trim().to_string(),
            property_id: optional(&self.property_id),
        }
    }

    /// Trim every field and check the required ones.
    pub fn validate_lead(&self) -> Result<NewLead, LeadError> {
        let form = self.normalized();
        form.validate().map_err(first_invalid_field)?;

        Ok(NewLead {
            name: form.name,
            email: form.email,
            phone: form.phone,
            message: form.message,
            property_id: form.property_id,
        })
    }
}

fn first_invalid_field(errors: ValidationErrors) -> LeadError {
    let failed = errors.field_errors();
    let (field, reason) = FIELD_REASONS
        .iter()
        .find(|(field, _)| failed.contains_key(*field))
        .copied()
        .unwrap_or(("form", "invalid"));
    LeadError::Invalid { field, reason }
}
