// Email plausibility check for the capture modal

/// Minimal validation applied before a capture insert: the address must be
/// non-empty and contain an `@`. Anything stricter is left to the mail
/// provider bounce.
pub fn is_plausible_email(email: &str) -> bool {
    !email.is_empty() && email.contains('@')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_with_at_sign_passes() {
        assert!(is_plausible_email("a@b"));
        assert!(is_plausible_email("someone@example.com"));
    }

    #[test]
    fn test_address_without_at_sign_fails() {
        assert!(!is_plausible_email("abc"));
        assert!(!is_plausible_email("x"));
    }

    #[test]
    fn test_empty_address_fails() {
        assert!(!is_plausible_email(""));
    }
}
