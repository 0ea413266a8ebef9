/// Validates that a required lead field was filled in
pub fn validate_required(field: &str, value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{} is required", field));
    }
    Ok(())
}

/// Validates the basic `local@domain.tld` shape of an e-mail address
pub fn validate_email(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if value.chars().any(char::is_whitespace) {
        return Err("Email must not contain whitespace".to_string());
    }
    let (local, domain) = value
        .split_once('@')
        .ok_or_else(|| "Email must contain '@'".to_string())?;
    if local.is_empty() || domain.contains('@') {
        return Err("Email must contain exactly one '@' after a non-empty name".to_string());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err("Email domain is invalid".to_string());
    }
    Ok(())
}

/// Validates an e-mail only when one was given
pub fn validate_optional_email(value: Option<&str>) -> Result<(), String> {
    match value {
        Some(email) if !email.is_empty() => validate_email(email),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert_eq!(validate_required("name", "Ada"), Ok(()));
        assert_eq!(validate_required("name", " "), Ok(()));
        assert_eq!(
            validate_required("phone", ""),
            Err("phone is required".to_string())
        );
    }

    #[test]
    fn test_validate_email() {
        assert_eq!(validate_email("hello@gadgethavenabuja.com"), Ok(()));
        assert_eq!(validate_email("a.b@mail.example.ng"), Ok(()));
        assert_eq!(
            validate_email(""),
            Err("Email cannot be empty".to_string())
        );
        assert_eq!(
            validate_email("chidi.example.com"),
            Err("Email must contain '@'".to_string())
        );
        assert_eq!(
            validate_email("@example.com"),
            Err("Email must contain exactly one '@' after a non-empty name".to_string())
        );
        assert_eq!(
            validate_email("a@b@example.com"),
            Err("Email must contain exactly one '@' after a non-empty name".to_string())
        );
        assert_eq!(
            validate_email("chidi@localhost"),
            Err("Email domain is invalid".to_string())
        );
        assert_eq!(
            validate_email("chidi@example..com"),
            Err("Email domain is invalid".to_string())
        );
        assert_eq!(
            validate_email("chi di@example.com"),
            Err("Email must not contain whitespace".to_string())
        );
    }

    #[test]
    fn test_validate_optional_email() {
        assert_eq!(validate_optional_email(None), Ok(()));
        assert_eq!(validate_optional_email(Some("")), Ok(()));
        assert_eq!(validate_optional_email(Some("amina@example.com")), Ok(()));
        assert!(validate_optional_email(Some("amina")).is_err());
    }
}
