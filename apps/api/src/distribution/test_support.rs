//! Resume builders shared by the distribution tests.

use crate::models::resume::{
    AwardEntry, CertificationEntry, EducationEntry, ExperienceEntry, Language, ProjectEntry,
    Resume, Skill,
};

pub fn educations(n: usize) -> Vec<EducationEntry> {
    (0..n)
        .map(|i| EducationEntry {
            institution: Some(format!("University {i}")),
            degree: Some("BSc".to_string()),
            ..Default::default()
        })
        .collect()
}

pub fn experience_with_description(chars: usize) -> ExperienceEntry {
    ExperienceEntry {
        company: Some("Acme".to_string()),
        title: Some("Engineer".to_string()),
        description: Some("d".repeat(chars)),
        ..Default::default()
    }
}

pub fn experiences(n: usize, description_chars: usize) -> Vec<ExperienceEntry> {
    (0..n)
        .map(|i| ExperienceEntry {
            company: Some(format!("Company {i}")),
            ..experience_with_description(description_chars)
        })
        .collect()
}

pub fn skills(n: usize) -> Vec<Skill> {
    (0..n).map(|i| Skill::Name(format!("skill-{i}"))).collect()
}

pub fn projects(n: usize) -> Vec<ProjectEntry> {
    (0..n)
        .map(|i| ProjectEntry {
            name: Some(format!("Project {i}")),
            ..Default::default()
        })
        .collect()
}

pub fn certifications(n: usize) -> Vec<CertificationEntry> {
    (0..n)
        .map(|i| CertificationEntry {
            name: Some(format!("Cert {i}")),
            ..Default::default()
        })
        .collect()
}

pub fn awards(n: usize) -> Vec<AwardEntry> {
    (0..n)
        .map(|i| AwardEntry {
            title: Some(format!("Award {i}")),
            ..Default::default()
        })
        .collect()
}

pub fn languages(n: usize) -> Vec<Language> {
    (0..n).map(|i| Language::Name(format!("Language {i}"))).collect()
}

fn with_header() -> Resume {
    Resume {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "+44 20 0000 0000".to_string(),
        location: "London".to_string(),
        role: "Engineer".to_string(),
        ..Default::default()
    }
}

/// Scores exactly 19: one page.
pub fn threshold_resume() -> Resume {
    Resume {
        summary: "s".repeat(400),
        education: educations(5),
        experience: experiences(2, 250),
        skills: skills(25),
        projects: projects(1),
        certifications: certifications(2),
        awards: awards(1),
        languages: languages(1),
        ..with_header()
    }
}

/// Scores exactly 21: two pages.
pub fn boundary_resume() -> Resume {
    Resume {
        summary: "s".repeat(400),
        education: educations(5),
        experience: experiences(4, 250),
        skills: skills(30),
        ..with_header()
    }
}

/// Scores 47.5: three pages, with every section populated.
pub fn dense_resume() -> Resume {
    Resume {
        summary: "s".repeat(400),
        education: educations(4),
        experience: experiences(8, 250),
        skills: skills(24),
        projects: projects(5),
        certifications: certifications(4),
        awards: awards(3),
        languages: languages(2),
        ..with_header()
    }
}
