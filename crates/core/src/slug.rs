//! Company key derivation.
//!
//! Companies are stored under a key derived from their display name so that
//! seed data and API-created rows share one identity scheme.

use crate::error::CoreError;
use crate::types::CompanyId;

/// Derive a company key from its display name.
///
/// The name is lower-cased and every whitespace character is dropped.
///
/// # Examples
///
/// ```
/// use gigboard_core::slug::company_slug;
///
/// assert_eq!(company_slug("Acme Labs").unwrap(), "acmelabs");
/// assert_eq!(company_slug("  Open\tSource Co ").unwrap(), "opensourceco");
/// assert!(company_slug("   ").is_err());
/// ```
pub fn company_slug(name: &str) -> Result<CompanyId, CoreError> {
    let slug: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    if slug.is_empty() {
        return Err(CoreError::Validation(
            "Company name must contain at least one non-whitespace character".into(),
        ));
    }
    Ok(slug)
}
