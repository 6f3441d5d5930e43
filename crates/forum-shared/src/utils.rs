//! Utility functions

/// Masks the local part of an email address for log output.
pub fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at_pos) if at_pos > 0 => {
            let (local, domain) = email.split_at(at_pos);
            let visible = local.chars().take(if local.chars().count() <= 2 { 1 } else { 2 });
            format!("{}***{}", visible.collect::<String>(), domain)
        }
        _ => "***".to_string(),
    }
}

/// Masks a session token so that only a short prefix ends up in logs.
pub fn mask_token(token: &str) -> String {
    let prefix: String = token.chars().take(6).collect();
    format!("{}…", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("alice@example.com"), "al***@example.com");
        assert_eq!(mask_email("al@example.com"), "a***@example.com");
        assert_eq!(mask_email("@example.com"), "***");
        assert_eq!(mask_email("not-an-email"), "***");
    }

    #[test]
    fn test_mask_token_keeps_short_prefix() {
        assert_eq!(mask_token("abcdef0123456789"), "abcdef…");
        assert_eq!(mask_token("abc"), "abc…");
    }
}
