//! Canonical domain keys.
//!
//! A canonical key is the lowercase host plus any path, with the scheme, a
//! leading `www.`, the query string and the fragment removed:
//! `HTTPS://www.Example.com/Promo?x=1#top` becomes `example.com/promo`.
//! Normalizing a canonical key returns it unchanged.

use crate::errors::DomainError;

const SCHEMES: [&str; 2] = ["https://", "http://"];
const WWW: &str = "www.";
const MIN_HOST_LEN: usize = 3;

/// Result of normalizing one raw import row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRow {
    pub key: String,
    pub brand_label: String,
}

/// Turns free-text domain input into its canonical key.
pub fn canonical_key(domain_text: &str) -> Result<String, DomainError> {
    let trimmed = domain_text.trim();
    if trimmed.is_empty() {
        return Err(DomainError::MissingField("Domain".to_string()));
    }

    let lowered = trimmed.to_lowercase();
    let mut key = lowered.as_str();

    loop {
        let before = key;
        for scheme in SCHEMES {
            if let Some(rest) = key.strip_prefix(scheme) {
                key = rest.trim_start();
            }
        }
        if let Some(rest) = key.strip_prefix(WWW) {
            key = rest.trim_start();
        }
        if key == before {
            break;
        }
    }

    let key = key.split('?').next().unwrap_or_default();
    let key = key.split('#').next().unwrap_or_default().trim();

    let base_host = key.split('/').next().unwrap_or_default();
    if !base_host.contains('.') || base_host.chars().count() < MIN_HOST_LEN {
        return Err(DomainError::InvalidFormat(domain_text.trim().to_string()));
    }

    Ok(key.to_string())
}

/// Normalizes the domain and brand fields of a raw import row.
///
/// Checks run in order: domain present, domain well-formed, brand present.
pub fn normalize_row(
    domain_text: Option<&str>,
    brand_text: Option<&str>,
) -> Result<NormalizedRow, DomainError> {
    let key = canonical_key(domain_text.unwrap_or_default())?;

    let brand_label = brand_text.map(str::trim).unwrap_or_default();
    if brand_label.is_empty() {
        return Err(DomainError::MissingField("Brand".to_string()));
    }

    Ok(NormalizedRow {
        key,
        brand_label: brand_label.to_string(),
    })
}
