//! Page Allocator — splits a resume into per-page snapshots using fixed page templates.
//!
//! # Section priority
//! Header and summary first, then education, experience, skills, and finally
//! projects / certifications / awards / languages. Earlier sections always win
//! placement on earlier pages.
//!
//! # Templates
//! - 3 pages: `GENERIC_TEMPLATES` as-is.
//! - 2 pages: the first two generic templates. When the score itself asked for two
//!   pages and experience is short, page 2 uses `SPARE_ROOM_SECOND_PAGE` instead and
//!   absorbs the leading projects, certifications, awards and all languages.
//! - 1 page: `SINGLE_PAGE_SQUEEZE`, every section hard-capped. Overflow is dropped,
//!   not moved, and is reported through `TruncationReport`.

use serde::{Deserialize, Serialize};

use crate::distribution::scorer::MAX_PAGES;
use crate::models::resume::{Page, Resume};

// ────────────────────────────────────────────────────────────────────────────
// Policy tables
// ────────────────────────────────────────────────────────────────────────────

/// A half-open index range over one section list. `end: None` runs to the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSlice {
    pub start: usize,
    pub end: Option<usize>,
}

impl SectionSlice {
    pub const NONE: Self = Self::range(0, 0);
    pub const ALL: Self = Self::skip(0);

    pub const fn range(start: usize, end: usize) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    pub const fn first(n: usize) -> Self {
        Self::range(0, n)
    }

    pub const fn skip(start: usize) -> Self {
        Self { start, end: None }
    }

    /// Copies the covered items, clamping the range to the list length.
    pub fn take<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let len = items.len();
        let start = self.start.min(len);
        let end = self.end.map_or(len, |e| e.min(len)).max(start);
        items[start..end].to_vec()
    }
}

/// Which slice of each section one page receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTemplate {
    pub summary: bool,
    pub education: SectionSlice,
    pub experience: SectionSlice,
    pub skills: SectionSlice,
    pub projects: SectionSlice,
    pub certifications: SectionSlice,
    pub awards: SectionSlice,
    pub languages: SectionSlice,
}

impl PageTemplate {
    /// Builds the page snapshot. Header fields and pass-through fields are copied
    /// verbatim; summary is cleared unless the template keeps it.
    pub fn apply(&self, resume: &Resume) -> Page {
        Page {
            id: resume.id.clone(),
            name: resume.name.clone(),
            email: resume.email.clone(),
            phone: resume.phone.clone(),
            location: resume.location.clone(),
            role: resume.role.clone(),
            summary: if self.summary {
                resume.summary.clone()
            } else {
                String::new()
            },
            education: self.education.take(&resume.education),
            experience: self.experience.take(&resume.experience),
            skills: self.skills.take(&resume.skills),
            projects: self.projects.take(&resume.projects),
            certifications: self.certifications.take(&resume.certifications),
            awards: self.awards.take(&resume.awards),
            languages: self.languages.take(&resume.languages),
            other: resume.other.clone(),
        }
    }
}

const SKILLS_ON_FIRST_PAGE: usize = 18;
const EDUCATION_ON_FIRST_PAGE: usize = 2;

const FIRST_PAGE: PageTemplate = PageTemplate {
    summary: true,
    education: SectionSlice::first(EDUCATION_ON_FIRST_PAGE),
    experience: SectionSlice::NONE,
    skills: SectionSlice::first(SKILLS_ON_FIRST_PAGE),
    projects: SectionSlice::NONE,
    certifications: SectionSlice::NONE,
    awards: SectionSlice::NONE,
    languages: SectionSlice::NONE,
};

const SECOND_PAGE: PageTemplate = PageTemplate {
    summary: false,
    education: SectionSlice::skip(EDUCATION_ON_FIRST_PAGE),
    experience: SectionSlice::ALL,
    skills: SectionSlice::skip(SKILLS_ON_FIRST_PAGE),
    projects: SectionSlice::NONE,
    certifications: SectionSlice::NONE,
    awards: SectionSlice::NONE,
    languages: SectionSlice::NONE,
};

const THIRD_PAGE: PageTemplate = PageTemplate {
    summary: false,
    education: SectionSlice::NONE,
    experience: SectionSlice::NONE,
    skills: SectionSlice::NONE,
    projects: SectionSlice::ALL,
    certifications: SectionSlice::ALL,
    awards: SectionSlice::ALL,
    languages: SectionSlice::ALL,
};

/// The generic three-page layout. Shorter layouts use its leading pages.
pub static GENERIC_TEMPLATES: [PageTemplate; 3] = [FIRST_PAGE, SECOND_PAGE, THIRD_PAGE];

/// Everything on one page, capped per section.
pub static SINGLE_PAGE_SQUEEZE: PageTemplate = PageTemplate {
    summary: true,
    education: SectionSlice::ALL,
    experience: SectionSlice::first(3),
    skills: SectionSlice::first(20),
    projects: SectionSlice::first(2),
    certifications: SectionSlice::first(3),
    awards: SectionSlice::first(2),
    languages: SectionSlice::ALL,
};

/// Generic page 2 plus the leading tail sections that would have gone to page 3.
pub static SPARE_ROOM_SECOND_PAGE: PageTemplate = PageTemplate {
    projects: SectionSlice::first(2),
    certifications: SectionSlice::first(3),
    awards: SectionSlice::first(2),
    languages: SectionSlice::ALL,
    ..SECOND_PAGE
};

/// Page 2 is judged to have spare room at or below this many experience entries.
const SPARE_ROOM_MAX_EXPERIENCE: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Allocation
// ────────────────────────────────────────────────────────────────────────────

/// Number of pages actually produced: `pages_needed` bounded by `max_pages`, never
/// below 1 and never above `MAX_PAGES`.
pub fn actual_pages(pages_needed: u32, max_pages: u32) -> u32 {
    pages_needed.min(max_pages).clamp(1, MAX_PAGES)
}

/// Picks the template for each page.
pub fn select_templates(
    resume: &Resume,
    pages_needed: u32,
    max_pages: u32,
) -> Vec<&'static PageTemplate> {
    match actual_pages(pages_needed, max_pages) {
        1 => vec![&SINGLE_PAGE_SQUEEZE],
        // Only when the score asked for two pages; a clamped 3-page layout keeps
        // the plain generic split.
        2 if pages_needed == 2 && has_spare_room(resume) => {
            vec![&GENERIC_TEMPLATES[0], &SPARE_ROOM_SECOND_PAGE]
        }
        n => GENERIC_TEMPLATES.iter().take(n as usize).collect(),
    }
}

/// Produces one snapshot per page, in page order.
pub fn allocate(resume: &Resume, pages_needed: u32, max_pages: u32) -> Vec<Page> {
    select_templates(resume, pages_needed, max_pages)
        .into_iter()
        .map(|template| template.apply(resume))
        .collect()
}

fn has_spare_room(resume: &Resume) -> bool {
    !resume.projects.is_empty() && resume.experience.len() <= SPARE_ROOM_MAX_EXPERIENCE
}

// ────────────────────────────────────────────────────────────────────────────
// Truncation accounting
// ────────────────────────────────────────────────────────────────────────────

/// Items per section present in the resume but placed on no page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TruncationReport {
    pub education: usize,
    pub experience: usize,
    pub skills: usize,
    pub projects: usize,
    pub certifications: usize,
    pub awards: usize,
    pub languages: usize,
}

impl TruncationReport {
    /// Compares section lengths in `resume` against what the pages hold in total.
    pub fn from_pages(resume: &Resume, pages: &[Page]) -> Self {
        let dropped = |total: usize, placed: fn(&Page) -> usize| {
            total.saturating_sub(pages.iter().map(placed).sum())
        };

        Self {
            education: dropped(resume.education.len(), |p| p.education.len()),
            experience: dropped(resume.experience.len(), |p| p.experience.len()),
            skills: dropped(resume.skills.len(), |p| p.skills.len()),
            projects: dropped(resume.projects.len(), |p| p.projects.len()),
            certifications: dropped(resume.certifications.len(), |p| p.certifications.len()),
            awards: dropped(resume.awards.len(), |p| p.awards.len()),
            languages: dropped(resume.languages.len(), |p| p.languages.len()),
        }
    }

    pub fn total(&self) -> usize {
        self.education
            + self.experience
            + self.skills
            + self.projects
            + self.certifications
            + self.awards
            + self.languages
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
