//! Whole-form normalization and validation.

use intake_types::api::FieldError;

use crate::rules;

/// Field names in the order errors are reported.
pub const FIELD_ORDER: [&str; 5] = [
    "first_name",
    "last_name",
    "email",
    "phone_number",
    "eircode",
];

/// A normalized form payload. Construction applies each field's
/// normalization exactly once; validation never mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub eircode: String,
}

impl Submission {
    /// Normalize raw field values: trim everything, strip all
    /// whitespace from the phone number, uppercase the eircode.
    pub fn from_raw(
        first_name: &str,
        last_name: &str,
        email: &str,
        phone_number: &str,
        eircode: &str,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_owned(),
            last_name: last_name.trim().to_owned(),
            email: email.trim().to_owned(),
            phone_number: phone_number.chars().filter(|c| !c.is_whitespace()).collect(),
            eircode: eircode.trim().to_ascii_uppercase(),
        }
    }

    /// Run every field's rules and collect one error per failing
    /// field, in [`FIELD_ORDER`].
    pub fn validate(&self) -> Vec<FieldError> {
        let checks = [
            rules::validate_name(&self.first_name, "First name"),
            rules::validate_name(&self.last_name, "Last name"),
            rules::validate_email(&self.email),
            rules::validate_phone(&self.phone_number),
            rules::validate_eircode(&self.eircode),
        ];

        FIELD_ORDER
            .into_iter()
            .zip(checks)
            .filter_map(|(field, check)| {
                check.err().map(|message| FieldError {
                    field: field.to_owned(),
                    message,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Submission {
        Submission::from_raw("Alice", "Murphy", "alice@example.com", "0851234567", "1D2AF3")
    }

    #[test]
    fn valid_submission_has_no_errors() {
        assert!(valid().validate().is_empty());
    }

    #[test]
    fn normalization_trims_and_cases() {
        let sub = Submission::from_raw(
            "  Alice  ",
            "\tMurphy ",
            " alice@example.com ",
            " 085 123 4567 ",
            " 1d2af3 ",
        );
        assert_eq!(sub.first_name, "Alice");
        assert_eq!(sub.last_name, "Murphy");
        assert_eq!(sub.email, "alice@example.com");
        assert_eq!(sub.phone_number, "0851234567");
        assert_eq!(sub.eircode, "1D2AF3");
        assert!(sub.validate().is_empty());
    }

    #[test]
    fn spaced_phone_number_passes_after_stripping() {
        let sub = Submission::from_raw("Alice", "Murphy", "a@b.com", "085 123 4567", "1D2AF3");
        assert!(sub.validate().is_empty());
    }

    #[test]
    fn all_failures_are_collected_in_field_order() {
        let sub = Submission::from_raw("", "", "", "", "");
        let errors = sub.validate();

        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, FIELD_ORDER);
        assert_eq!(errors[0].message, "First name is required.");
        assert_eq!(errors[4].message, "Eircode is required.");
    }

    #[test]
    fn single_bad_field_yields_single_error() {
        let mut sub = valid();
        sub.email = "a@b".to_owned();
        let errors = sub.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[0].message, "Enter a valid email address.");
    }

    #[test]
    fn revalidating_an_accepted_submission_stays_accepted() {
        let sub = valid();
        assert!(sub.validate().is_empty());
        assert!(sub.validate().is_empty());
    }

    #[test]
    fn repeated_validation_yields_identical_errors() {
        let sub = Submission::from_raw("Al ice", "Murphy", "a@b", "12345", "D02AF30");
        assert_eq!(sub.validate(), sub.validate());
    }
}
