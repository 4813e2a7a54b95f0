//! Request authorization and log redaction.
//! Phone numbers never reach the logs in full, and the cron secret is
//! compared in constant time.

use tracing::warn;

/// Check an `Authorization` header value against `Bearer {secret}`.
pub fn is_authorized(auth_header: Option<&str>, secret: &str) -> bool {
    let Some(header) = auth_header else {
        warn!("Security: Missing Authorization header on scheduled trigger");
        return false;
    };

    let expected = format!("Bearer {}", secret);
    if constant_time_eq(header.as_bytes(), expected.as_bytes()) {
        true
    } else {
        warn!("Security: Rejected scheduled trigger with a bad bearer token");
        false
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Mask a phone number down to its last four digits, e.g. `+1******4567`.
pub fn mask_phone(number: &str) -> String {
    let digits: Vec<char> = number.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() <= 4 {
        return "*".repeat(digits.len());
    }

    let prefix = if number.trim_start().starts_with('+') { "+" } else { "" };
    let tail: String = digits[digits.len() - 4..].iter().collect();
    format!("{}{}{}", prefix, "*".repeat(digits.len() - 4), tail)
}

/// Redact phone numbers embedded in free text (message bodies, error details).
pub fn redact_phone_numbers(text: &str) -> String {
    let re = regex_lite::Regex::new(r"\+?\d[\d\- ]{7,}\d").ok();
    match re {
        Some(regex) => regex
            .replace_all(text, |caps: &regex_lite::Captures| mask_phone(&caps[0]))
            .to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_check() {
        assert!(is_authorized(Some("Bearer s3cret"), "s3cret"));
        assert!(!is_authorized(Some("Bearer wrong"), "s3cret"));
        assert!(!is_authorized(Some("s3cret"), "s3cret"));
        assert!(!is_authorized(None, "s3cret"));
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("+15551234567"), "+*******4567");
        assert_eq!(mask_phone("555-123-4567"), "******4567");
        assert_eq!(mask_phone("123"), "***");
    }

    #[test]
    fn test_redacts_numbers_in_text() {
        let text = "Unable to create record: The 'To' number +15551234567 is not a valid phone number.";
        let redacted = redact_phone_numbers(text);
        assert!(!redacted.contains("+15551234567"));
        assert!(redacted.contains("+*******4567"));
        assert_eq!(redact_phone_numbers("Day 7 of 365"), "Day 7 of 365");
    }
}
