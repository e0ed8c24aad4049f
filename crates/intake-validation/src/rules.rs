//! Per-field rules. Each function takes an already-normalized value
//! (see [`crate::form::Submission::from_raw`]), consults no external
//! state, and reports the first rule that fails.

/// Upper bound on name length, in characters.
pub const NAME_MAX_CHARS: usize = 20;
/// An Irish mobile/landline number without country code.
pub const PHONE_DIGITS: usize = 10;
/// Routing key plus unique identifier.
pub const EIRCODE_CHARS: usize = 6;

fn is_alphanumeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

fn starts_with_digit(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Email shape: exactly one `@`, a non-empty local part, a domain with
/// an interior dot, and no whitespace anywhere.
fn is_email_like(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

pub fn validate_name(value: &str, label: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{label} is required."));
    }
    if !is_alphanumeric(value) {
        return Err(format!("{label} must contain letters and numbers only."));
    }
    if value.chars().count() > NAME_MAX_CHARS {
        return Err(format!("{label} must be at most {NAME_MAX_CHARS} characters."));
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Email is required.".to_owned());
    }
    if !is_email_like(value) {
        return Err("Enter a valid email address.".to_owned());
    }
    Ok(())
}

pub fn validate_phone(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Phone number is required.".to_owned());
    }
    if !is_digits(value) {
        return Err("Phone number must contain digits only.".to_owned());
    }
    if value.chars().count() != PHONE_DIGITS {
        return Err(format!("Phone number must be exactly {PHONE_DIGITS} digits."));
    }
    Ok(())
}

pub fn validate_eircode(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Eircode is required.".to_owned());
    }
    if value.chars().count() != EIRCODE_CHARS {
        return Err(format!("Eircode must be {EIRCODE_CHARS} characters."));
    }
    if !starts_with_digit(value) {
        return Err("Eircode must start with a number.".to_owned());
    }
    if !is_alphanumeric(value) {
        return Err("Eircode must contain letters and numbers only.".to_owned());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_accept_letters_and_digits() {
        assert!(validate_name("Al1ce", "First name").is_ok());
        assert!(validate_name("Murphy", "Last name").is_ok());
    }

    #[test]
    fn empty_name_is_required() {
        assert_eq!(
            validate_name("", "First name"),
            Err("First name is required.".to_owned())
        );
    }

    #[test]
    fn name_rejects_symbols_and_interior_spaces() {
        assert_eq!(
            validate_name("Al ice", "First name"),
            Err("First name must contain letters and numbers only.".to_owned())
        );
        assert!(validate_name("O'Brien", "Last name").is_err());
    }

    #[test]
    fn name_rejects_twenty_one_characters() {
        let long = "a".repeat(21);
        assert_eq!(
            validate_name(&long, "First name"),
            Err("First name must be at most 20 characters.".to_owned())
        );
        assert!(validate_name(&"a".repeat(20), "First name").is_ok());
    }

    #[test]
    fn first_failing_rule_wins_for_names() {
        // Empty input fails "required", not the alphanumeric rule.
        assert_eq!(
            validate_name("", "Last name"),
            Err("Last name is required.".to_owned())
        );
    }

    #[test]
    fn email_accepts_plain_address() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("first.last@sub.example.ie").is_ok());
    }

    #[test]
    fn email_requires_dot_after_at() {
        assert_eq!(
            validate_email("a@b"),
            Err("Enter a valid email address.".to_owned())
        );
        assert!(validate_email("a@b.").is_err());
        assert!(validate_email("a@.com").is_err());
    }

    #[test]
    fn email_rejects_whitespace_and_double_at() {
        assert!(validate_email("a b@c.com").is_err());
        assert!(validate_email("a@b@c.com").is_err());
        assert!(validate_email("@b.com").is_err());
    }

    #[test]
    fn empty_email_is_required() {
        assert_eq!(validate_email(""), Err("Email is required.".to_owned()));
    }

    #[test]
    fn phone_accepts_ten_digits() {
        assert!(validate_phone("0851234567").is_ok());
    }

    #[test]
    fn short_phone_reports_length() {
        assert_eq!(
            validate_phone("12345"),
            Err("Phone number must be exactly 10 digits.".to_owned())
        );
    }

    #[test]
    fn phone_with_letters_reports_digits_only() {
        assert_eq!(
            validate_phone("12345abcde"),
            Err("Phone number must contain digits only.".to_owned())
        );
    }

    #[test]
    fn eircode_accepts_digit_led_code() {
        assert!(validate_eircode("123ABC").is_ok());
        assert!(validate_eircode("1D2AF3").is_ok());
    }

    #[test]
    fn seven_char_eircode_reports_length() {
        assert_eq!(
            validate_eircode("D02AF30"),
            Err("Eircode must be 6 characters.".to_owned())
        );
    }

    #[test]
    fn eircode_must_lead_with_digit() {
        assert_eq!(
            validate_eircode("AD2AF3"),
            Err("Eircode must start with a number.".to_owned())
        );
    }

    #[test]
    fn eircode_rejects_symbols() {
        assert_eq!(
            validate_eircode("102-F3"),
            Err("Eircode must contain letters and numbers only.".to_owned())
        );
    }

    #[test]
    fn verdicts_are_deterministic() {
        for _ in 0..3 {
            assert_eq!(
                validate_phone("12345abcde"),
                Err("Phone number must contain digits only.".to_owned())
            );
            assert!(validate_eircode("1D2AF3").is_ok());
        }
    }
}
