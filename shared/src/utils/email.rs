//! Institutional email utilities
//!
//! An address belongs to the institution when it ends with `@{domain}` or
//! `@{sub}.{domain}` for any chain of subdomain labels, compared
//! case-insensitively.

use once_cell::sync::Lazy;
use regex::Regex;

/// Default institutional domain
pub const DEFAULT_INSTITUTIONAL_DOMAIN: &str = "ox.ac.uk";

static OX_EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    institutional_pattern(DEFAULT_INSTITUTIONAL_DOMAIN).expect("static domain pattern is valid")
});

/// Build the suffix pattern for an institutional domain
pub fn institutional_pattern(domain: &str) -> Result<Regex, regex::Error> {
    let domain = domain.trim().trim_start_matches('@').trim_start_matches('.');
    Regex::new(&format!(
        r"(?i)@([A-Za-z0-9-]+\.)*{}$",
        regex::escape(domain)
    ))
}

/// Check whether `email` is a non-empty address under `domain`
pub fn is_institutional_email(email: &str, domain: &str) -> bool {
    if email.is_empty() {
        return false;
    }
    if domain.eq_ignore_ascii_case(DEFAULT_INSTITUTIONAL_DOMAIN) {
        return OX_EMAIL_RE.is_match(email);
    }
    institutional_pattern(domain)
        .map(|re| re.is_match(email))
        .unwrap_or(false)
}

/// Mask an email address for logging
///
/// Keeps the first character of the local part and the whole domain:
/// `jane.doe@ox.ac.uk` becomes `j***@ox.ac.uk`.
pub fn mask_email(email: &str) -> String {
    match email.rsplit_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}
