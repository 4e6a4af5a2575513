//! Content Scorer — turns section sizes and text lengths into a density score and a page count.
//!
//! # Scoring rules
//! - Summary: > 300 chars → +2, > 150 chars → +1
//! - Education: +1 per entry, capped at 4
//! - Experience: per entry by description length: > 200 → +3, > 100 → +2, else +1
//! - Skills: +1 per started block of 10
//! - Projects: +2 each
//! - Certifications + awards + languages: +0.5 each
//!
//! Score ≤ 20 → 1 page, ≤ 40 → 2 pages, anything above → 3 pages.

use serde::{Deserialize, Serialize};

use crate::models::resume::Resume;

const SUMMARY_LONG_CHARS: usize = 300;
const SUMMARY_MEDIUM_CHARS: usize = 150;

const EDUCATION_CAP: usize = 4;

const EXPERIENCE_DENSE_CHARS: usize = 200;
const EXPERIENCE_MEDIUM_CHARS: usize = 100;

const SKILLS_PER_POINT: usize = 10;
const POINTS_PER_PROJECT: f64 = 2.0;
const POINTS_PER_MINOR_ITEM: f64 = 0.5;

const ONE_PAGE_MAX_SCORE: f64 = 20.0;
const TWO_PAGE_MAX_SCORE: f64 = 40.0;

/// Hard ceiling on pages, whatever the score.
pub const MAX_PAGES: u32 = 3;

/// Per-section contributions to the content score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub summary: f64,
    pub education: f64,
    pub experience: f64,
    pub skills: f64,
    pub projects: f64,
    /// Certifications, awards and languages combined.
    pub minor_sections: f64,
    pub total: f64,
    pub pages_needed: u32,
}

/// Computes the full score breakdown for a resume.
pub fn score_breakdown(resume: &Resume) -> ScoreBreakdown {
    let summary = summary_points(resume.summary.chars().count());
    let education = resume.education.len().min(EDUCATION_CAP) as f64;
    let experience: f64 = resume
        .experience
        .iter()
        .map(|e| experience_points(e.description_len()))
        .sum();
    let skills = resume.skills.len().div_ceil(SKILLS_PER_POINT) as f64;
    let projects = resume.projects.len() as f64 * POINTS_PER_PROJECT;
    let minor_count = resume.certifications.len() + resume.awards.len() + resume.languages.len();
    let minor_sections = minor_count as f64 * POINTS_PER_MINOR_ITEM;

    let total = summary + education + experience + skills + projects + minor_sections;

    ScoreBreakdown {
        summary,
        education,
        experience,
        skills,
        projects,
        minor_sections,
        total,
        pages_needed: pages_for_score(total),
    }
}

/// Scalar content density score.
pub fn content_score(resume: &Resume) -> f64 {
    score_breakdown(resume).total
}

/// Number of pages the content calls for, always in `1..=MAX_PAGES`.
pub fn score_pages(resume: &Resume) -> u32 {
    pages_for_score(content_score(resume))
}

/// Maps a content score onto a page count.
pub fn pages_for_score(score: f64) -> u32 {
    if score <= ONE_PAGE_MAX_SCORE {
        1
    } else if score <= TWO_PAGE_MAX_SCORE {
        2
    } else {
        MAX_PAGES
    }
}

fn summary_points(len: usize) -> f64 {
    if len > SUMMARY_LONG_CHARS {
        2.0
    } else if len > SUMMARY_MEDIUM_CHARS {
        1.0
    } else {
        0.0
    }
}

fn experience_points(description_len: usize) -> f64 {
    if description_len > EXPERIENCE_DENSE_CHARS {
        3.0
    } else if description_len > EXPERIENCE_MEDIUM_CHARS {
        2.0
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::test_support::*;

    #[test]
    fn test_empty_resume_scores_zero() {
        let breakdown = score_breakdown(&Resume::default());
        assert_eq!(breakdown.total, 0.0);
        assert_eq!(breakdown.pages_needed, 1);
    }

    #[test]
    fn test_summary_thresholds() {
        assert_eq!(summary_points(150), 0.0);
        assert_eq!(summary_points(151), 1.0);
        assert_eq!(summary_points(300), 1.0);
        assert_eq!(summary_points(301), 2.0);
    }

    #[test]
    fn test_experience_thresholds() {
        assert_eq!(experience_points(0), 1.0);
        assert_eq!(experience_points(100), 1.0);
        assert_eq!(experience_points(101), 2.0);
        assert_eq!(experience_points(200), 2.0);
        assert_eq!(experience_points(201), 3.0);
    }

    #[test]
    fn test_education_is_capped() {
        let mut resume = Resume::default();
        resume.education = educations(9);
        assert_eq!(score_breakdown(&resume).education, 4.0);
        resume.education = educations(3);
        assert_eq!(score_breakdown(&resume).education, 3.0);
    }

    #[test]
    fn test_skills_round_up_per_ten() {
        let mut resume = Resume::default();
        resume.skills = skills(1);
        assert_eq!(score_breakdown(&resume).skills, 1.0);
        resume.skills = skills(10);
        assert_eq!(score_breakdown(&resume).skills, 1.0);
        resume.skills = skills(11);
        assert_eq!(score_breakdown(&resume).skills, 2.0);
    }

    #[test]
    fn test_minor_sections_are_half_a_point_each() {
        let mut resume = Resume::default();
        resume.certifications = certifications(1);
        resume.awards = awards(1);
        resume.languages = languages(1);
        assert_eq!(score_breakdown(&resume).minor_sections, 1.5);
    }

    #[test]
    fn test_threshold_scenario_scores_19_one_page() {
        let resume = threshold_resume();
        let breakdown = score_breakdown(&resume);
        assert_eq!(breakdown.summary, 2.0);
        assert_eq!(breakdown.education, 4.0);
        assert_eq!(breakdown.experience, 6.0);
        assert_eq!(breakdown.skills, 3.0);
        assert_eq!(breakdown.projects, 2.0);
        assert_eq!(breakdown.minor_sections, 2.0);
        assert_eq!(breakdown.total, 19.0);
        assert_eq!(score_pages(&resume), 1);
    }

    #[test]
    fn test_boundary_scenario_scores_21_two_pages() {
        let resume = boundary_resume();
        assert_eq!(content_score(&resume), 21.0);
        assert_eq!(score_pages(&resume), 2);
    }

    #[test]
    fn test_page_mapping_is_capped_at_three() {
        assert_eq!(pages_for_score(20.0), 1);
        assert_eq!(pages_for_score(20.5), 2);
        assert_eq!(pages_for_score(40.0), 2);
        assert_eq!(pages_for_score(40.5), 3);
        assert_eq!(pages_for_score(10_000.0), MAX_PAGES);
    }

    #[test]
    fn test_adding_content_never_lowers_score() {
        let base = threshold_resume();
        let base_score = content_score(&base);

        let mut more_edu = base.clone();
        more_edu.education.extend(educations(1));
        let mut more_exp = base.clone();
        more_exp.experience.push(experience_with_description(0));
        let mut longer_exp = base.clone();
        longer_exp.experience[0] = experience_with_description(400);
        let mut more_skills = base.clone();
        more_skills.skills.extend(skills(1));
        let mut more_projects = base.clone();
        more_projects.projects.extend(projects(1));
        let mut longer_summary = base.clone();
        longer_summary.summary.push_str(&"x".repeat(50));

        for variant in [
            more_edu,
            more_exp,
            longer_exp,
            more_skills,
            more_projects,
            longer_summary,
        ] {
            assert!(content_score(&variant) >= base_score);
            assert!(score_pages(&variant) >= score_pages(&base));
        }
    }
}
