use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};

/// Validate an employee email and normalise it to lowercase
pub fn validate_and_normalize_email(email: &str) -> ApiResult<String> {
    let trimmed = email.trim();

    if !email_address::EmailAddress::is_valid(trimmed) {
        return Err(ApiError::BadRequest(
            "Invalid email format. Must be in format user@domain.tld".to_string(),
        ));
    }

    // require a TLD
    if let Some((_, domain_part)) = trimmed.rsplit_once('@') {
        if !domain_part.contains('.') {
            return Err(ApiError::BadRequest(
                "Invalid email format. Domain must include a TLD (e.g., .com, .org)".to_string(),
            ));
        }
    }

    Ok(trimmed.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_normalization() {
        let result = validate_and_normalize_email("  Kim.Lee@Example.COM ");
        assert_eq!(result.unwrap(), "kim.lee@example.com");
    }

    #[test]
    fn test_invalid_emails_rejected() {
        for email in ["kim.example.com", "kim@", "kim@example", ""] {
            assert!(
                validate_and_normalize_email(email).is_err(),
                "{} should be rejected",
                email
            );
        }
    }
}
