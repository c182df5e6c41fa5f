use regex::Regex;

use crate::errors::Result;

pub fn name_req() -> String {
    "Name must not be empty".to_string()
}

pub fn email_req() -> String {
    "Email is not valid".to_string()
}

pub fn phone_req() -> String {
    "Phone number is not a valid Indonesian mobile number".to_string()
}

pub fn duplicate_req() -> String {
    "Contact name is already in use".to_string()
}

pub fn validate_name(name: &str) -> bool {
    !name.trim().is_empty()
}

pub fn validate_email(email: &str) -> Result<bool> {
    // Single local part, single domain with at least one dot, no whitespace
    let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")?;
    Ok(re.is_match(email))
}

pub fn validate_phone(phone: &str) -> Result<bool> {
    // Indonesian mobile number: +62/62/0 prefix, 8x mobile block,
    // 8 to 11 further digits
    let re = Regex::new(r"^(\+62|62|0)8[1-9][0-9]{6,9}$")?;
    Ok(re.is_match(phone))
}

/// Runs the whole validation chain for a submitted contact form and collects
/// the error messages to re-render inline on the originating form.
/// `duplicate` is the caller's `exists_by_name` verdict, since only the
/// caller knows whether the name is allowed to collide (editing a contact
/// without renaming it).
pub fn validate_contact(name: &str, email: &str, phone: &str, duplicate: bool) -> Result<Vec<String>> {
    let mut errors = Vec::new();

    if !validate_name(name) {
        errors.push(name_req());
    }

    if duplicate {
        errors.push(duplicate_req());
    }

    if !validate_email(email)? {
        errors.push(email_req());
    }

    if !validate_phone(phone)? {
        errors.push(phone_req());
    }

    Ok(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_indonesian_mobile_numbers() -> Result<()> {
        assert!(validate_phone("081234567890")?);
        assert!(validate_phone("+6281234567890")?);
        assert!(validate_phone("6281234567890")?);
        assert!(validate_phone("085612345678")?);
        Ok(())
    }

    #[test]
    fn rejects_numbers_outside_the_mobile_plan() -> Result<()> {
        // landline prefix
        assert!(!validate_phone("0211234567")?);
        // second digit of the mobile block must not be zero
        assert!(!validate_phone("080123456789")?);
        // too short
        assert!(!validate_phone("0812345")?);
        // too long
        assert!(!validate_phone("0812345678901234")?);
        // non-digits
        assert!(!validate_phone("08123abc789")?);
        Ok(())
    }

    #[test]
    fn email_needs_a_dotted_domain() -> Result<()> {
        assert!(validate_email("tegar@gmail.com")?);
        assert!(!validate_email("foo@bar")?);
        assert!(!validate_email("foo bar@baz.com")?);
        assert!(!validate_email("")?);
        Ok(())
    }

    #[test]
    fn collects_every_failing_field() -> Result<()> {
        let errors = validate_contact("", "foo@bar", "12345", true)?;

        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&name_req()));
        assert!(errors.contains(&duplicate_req()));
        assert!(errors.contains(&email_req()));
        assert!(errors.contains(&phone_req()));
        Ok(())
    }

    #[test]
    fn valid_form_has_no_errors() -> Result<()> {
        let errors = validate_contact("Tegar", "tegar@gmail.com", "081111111111", false)?;

        assert!(errors.is_empty());
        Ok(())
    }
}
