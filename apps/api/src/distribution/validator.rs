//! Distribution Validator — structural post-condition check on allocator output.
//!
//! A distribution is valid when it holds exactly `pages_needed` pages and none of them
//! is blank. It does not check that all input content was placed; see
//! `TruncationReport` for that.

use serde_json::Value;

use crate::distribution::Distribution;
use crate::models::resume::Page;

/// True if the page carries a summary or at least one section item.
pub fn page_has_content(page: &Page) -> bool {
    !page.summary.is_empty()
        || !page.education.is_empty()
        || !page.experience.is_empty()
        || !page.skills.is_empty()
        || !page.projects.is_empty()
        || !page.certifications.is_empty()
        || !page.awards.is_empty()
        || !page.languages.is_empty()
}

/// Checks page count consistency and that no page is blank. A missing (null) page
/// counts as blank.
pub fn validate_distribution(result: &Distribution) -> bool {
    if result.distributed_content.len() != result.pages_needed as usize {
        return false;
    }
    result
        .distributed_content
        .iter()
        .all(|page| page.as_ref().is_some_and(page_has_content))
}

/// Validates an arbitrary JSON payload. Anything that does not deserialize into a
/// distribution (null, missing `distributedContent`, ...) is invalid.
pub fn validate_json(value: &Value) -> bool {
    match serde_json::from_value::<Distribution>(value.clone()) {
        Ok(result) => validate_distribution(&result),
        Err(_) => false,
    }
}
