use chrono::NaiveDate;

use super::{Education, Experience, Profile, Settings, Skills, Summary};
use crate::duration;

/// Everything loaded from the data directory. Each section is independent:
/// a file that failed to load leaves its section as None.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteData {
    pub profile: Option<Profile>,
    pub summary: Option<Summary>,
    pub education: Option<Education>,
    pub experience: Option<Experience>,
    pub skills: Option<Skills>,
    pub settings: Option<Settings>,
}

/// Which section a dated entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Experience,
    Education,
}

/// One dated row: a role at a company, or a degree at an institution.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub kind: EntryKind,
    /// Company or institution
    pub organization: String,
    /// Role title or degree
    pub heading: String,
    pub display_date: String,
    pub start: Option<String>,
    pub end: Option<String>,
    /// Elapsed time, None when the range is missing or invalid
    pub duration: Option<String>,
}

impl TimelineEntry {
    /// Date text with the duration appended, when there is one.
    pub fn label(&self) -> String {
        match &self.duration {
            Some(d) => duration::accessible_label(&self.display_date, d),
            None => self.display_date.clone(),
        }
    }
}

impl SiteData {
    pub fn is_empty(&self) -> bool {
        *self == SiteData::default()
    }

    /// Dated entries in display order (experience first), each with its
    /// duration computed once against `today`.
    pub fn timeline(&self, today: NaiveDate) -> Vec<TimelineEntry> {
        let mut entries = Vec::new();

        if let Some(experience) = &self.experience {
            for company in &experience.items {
                for role in &company.roles {
                    entries.push(TimelineEntry {
                        kind: EntryKind::Experience,
                        organization: company.company.clone(),
                        heading: role.title.clone(),
                        display_date: role.display_date.clone(),
                        start: role.start_date.clone(),
                        end: role.end_date.clone(),
                        duration: duration::annotate(
                            role.start_date.as_deref(),
                            role.end_date.as_deref(),
                            today,
                        ),
                    });
                }
            }
        }

        if let Some(education) = &self.education {
            for item in &education.items {
                entries.push(TimelineEntry {
                    kind: EntryKind::Education,
                    organization: item.institution.clone(),
                    heading: item.degree.clone(),
                    display_date: item.display_date.clone(),
                    start: item.start_date.clone(),
                    end: item.end_date.clone(),
                    duration: duration::annotate(
                        item.start_date.as_deref(),
                        item.end_date.as_deref(),
                        today,
                    ),
                });
            }
        }

        entries
    }
}
