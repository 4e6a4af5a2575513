// Content Distribution Engine
// Decides how many pages a resume needs and which slice of each section lands on
// each page. Pure and synchronous: Resume → scorer → page count → allocator → pages.

pub mod allocator;
pub mod handlers;
pub mod scorer;
pub mod validator;

#[cfg(test)]
pub(crate) mod test_support;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::resume::{Page, Resume};

pub use allocator::TruncationReport;

/// Page ceiling applied when the caller does not supply one.
pub const DEFAULT_MAX_PAGES: u32 = 3;

/// Result of distributing a resume over pages.
///
/// `distributed_content.len() == pages_needed` always. A `None` page only occurs when
/// no resume was supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    pub pages_needed: u32,
    pub distributed_content: Vec<Option<Page>>,
    /// Items dropped by the page templates, per section.
    #[serde(default)]
    pub truncation: TruncationReport,
}

/// Scores the resume, bounds the page count by `max_pages`, and builds the page snapshots.
///
/// A missing resume passes through as a single null page without scoring.
pub fn distribute_content(resume: Option<&Resume>, max_pages: u32) -> Distribution {
    let Some(resume) = resume else {
        return Distribution {
            pages_needed: 1,
            distributed_content: vec![None],
            truncation: TruncationReport::default(),
        };
    };

    let score_pages = scorer::score_pages(resume);
    let pages_needed = allocator::actual_pages(score_pages, max_pages);
    debug!(
        score_pages,
        max_pages,
        pages_needed,
        "Distributing resume content"
    );

    let pages = allocator::allocate(resume, score_pages, max_pages);
    let truncation = TruncationReport::from_pages(resume, &pages);

    if !truncation.is_empty() {
        warn!(
            dropped = truncation.total(),
            experience = truncation.experience,
            skills = truncation.skills,
            projects = truncation.projects,
            pages_needed,
            "Page templates dropped resume content"
        );
    }

    Distribution {
        pages_needed,
        distributed_content: pages.into_iter().map(Some).collect(),
        truncation,
    }
}

/// Returns the snapshot for a 1-indexed page, or `None` when out of range.
pub fn get_page_content(
    resume: Option<&Resume>,
    page_number: u32,
    max_pages: u32,
) -> Option<Page> {
    if page_number == 0 {
        return None;
    }
    distribute_content(resume, max_pages)
        .distributed_content
        .into_iter()
        .nth(page_number as usize - 1)
        .flatten()
}
