//! Shape checks approximating valid syntax for typed field kinds.
//! A shape check is a structural test, not a semantic or existence check.

use once_cell::sync::Lazy;
use regex::Regex;

// Deliberately permissive: a UX guard, not an RFC 5322 parser.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

// Malawi numbering: the +265 country code or a single leading zero, a lead
// digit in {1, 7, 8, 9}, then exactly seven more digits.
static PHONE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+265|0)[1789]\d{7}$").expect("Failed to compile phone regex")
});

pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

/// Whitespace anywhere in the number is ignored; any other separator
/// (hyphens, parentheses) fails the check.
pub fn is_phone_shaped(value: &str) -> bool {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_SHAPE.is_match(&compact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email_shapes() {
        let valid_emails = vec![
            "user@example.com",
            "user.name@example.com",
            "user+tag@example.com",
            "USER@EXAMPLE.COM",
            "u@e.c",
        ];

        for email in valid_emails {
            assert!(is_email_shaped(email), "Should accept valid email: {}", email);
        }
    }

    #[test]
    fn test_malformed_email_shapes() {
        let invalid_emails = vec![
            "",
            "not-an-email",
            "@example.com",
            "user@",
            "user@@bad",
            "user@.com",
            "user@nodot",
            "user name@example.com",
            "user@exam ple.com",
            "user@example.com extra",
        ];

        for email in invalid_emails {
            assert!(!is_email_shaped(email), "Should reject malformed email: {}", email);
        }
    }

    #[test]
    fn test_valid_phone_shapes() {
        let valid_phones = vec![
            "099123456",
            "088123456",
            "077123456",
            "011234567",
            "+26591234567",
            "+26571234567",
            "0 99 123 456",
            "+265 9 123 4567",
        ];

        for phone in valid_phones {
            assert!(is_phone_shaped(phone), "Should accept valid phone: {}", phone);
        }
    }

    #[test]
    fn test_malformed_phone_shapes() {
        let invalid_phones = vec![
            "",
            "99123456",      // no prefix
            "029123456",     // lead digit outside the allowed set
            "09912345",      // one digit short
            "0991234567",    // one digit over
            "+2659123456",   // one digit short after the country code
            "+265912345678", // one digit over after the country code
            "+44991234567",  // wrong country code
            "099-123-456",   // separators other than whitespace
            "(099)123456",
            "09912345a",
        ];

        for phone in invalid_phones {
            assert!(!is_phone_shaped(phone), "Should reject malformed phone: {}", phone);
        }
    }
}
