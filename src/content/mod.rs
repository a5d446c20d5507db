use std::fs;
use std::path::Path;

use crate::error::ContentError;
use crate::model::{Education, Experience, Profile, Settings, SiteData, Skills, Summary};
use crate::paths::Paths;

// ============================================================================
// FUNCTIONAL CORE: parsing content documents
// ============================================================================

pub fn parse_profile(content: &str) -> Result<Profile, ContentError> {
    Ok(serde_json::from_str(content)?)
}

pub fn parse_summary(content: &str) -> Result<Summary, ContentError> {
    Ok(serde_json::from_str(content)?)
}

pub fn parse_education(content: &str) -> Result<Education, ContentError> {
    Ok(serde_json::from_str(content)?)
}

pub fn parse_experience(content: &str) -> Result<Experience, ContentError> {
    Ok(serde_json::from_str(content)?)
}

pub fn parse_skills(content: &str) -> Result<Skills, ContentError> {
    Ok(serde_json::from_str(content)?)
}

pub fn parse_settings(content: &str) -> Result<Settings, ContentError> {
    Ok(serde_json::from_str(content)?)
}

// ============================================================================
// IMPERATIVE SHELL: reading the data directory
// ============================================================================

/// A content file that could not be loaded, keyed by its path.
pub type LoadFailure = (String, ContentError);

/// Read one content file and hand it to `parse`.
pub fn load_file<T>(
    path: &Path,
    parse: fn(&str) -> Result<T, ContentError>,
) -> Result<T, ContentError> {
    let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse(&content)
}

/// Load every content file. A failed file leaves its section empty and is
/// reported in the returned list; it never stops the other sections loading.
pub fn load_site(paths: &Paths) -> (SiteData, Vec<LoadFailure>) {
    let mut failures = Vec::new();

    let site = SiteData {
        profile: load_section(&paths.profile, parse_profile, &mut failures),
        summary: load_section(&paths.summary, parse_summary, &mut failures),
        education: load_section(&paths.education, parse_education, &mut failures),
        experience: load_section(&paths.experience, parse_experience, &mut failures),
        skills: load_section(&paths.skills, parse_skills, &mut failures),
        settings: load_section(&paths.settings, parse_settings, &mut failures),
    };

    tracing::debug!(
        data_dir = %paths.data_dir.display(),
        failed = failures.len(),
        "site content loaded"
    );

    (site, failures)
}

fn load_section<T>(
    path: &Path,
    parse: fn(&str) -> Result<T, ContentError>,
    failures: &mut Vec<LoadFailure>,
) -> Option<T> {
    match load_file(path, parse) {
        Ok(section) => Some(section),
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "failed to load content file");
            failures.push((path.display().to_string(), error));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parse_summary_reads_content() {
        let summary = parse_summary(r#"{"content":"Statistician."}"#).unwrap();
        assert_eq!(summary.content, "Statistician.");
    }

    #[test]
    fn parse_profile_rejects_invalid_json() {
        let err = parse_profile("{not json").unwrap_err();
        assert!(matches!(err, ContentError::Json(_)));
    }

    #[test]
    fn parse_experience_reads_nested_roles() {
        let json = r#"{
            "items": [{
                "company": "Acme",
                "location": "Remote",
                "logo": {"default": "a.svg"},
                "roles": [{"title": "Dev", "startDate": "2020", "endDate": "2021",
                           "displayDate": "2020 - 2021", "responsibilities": ["Ship"]}]
            }]
        }"#;
        let experience = parse_experience(json).unwrap();
        assert_eq!(experience.items[0].roles[0].responsibilities, vec!["Ship"]);
    }

    #[test]
    fn parse_education_and_settings() {
        let education =
            parse_education(r#"{"items":[{"institution":"Uni","degree":"BSc","startDate":"2015","endDate":"2018"}]}"#)
                .unwrap();
        assert_eq!(education.items.len(), 1);

        let settings = parse_settings(r#"{"cv":{"path":"cv.pdf","downloadName":"me.pdf"}}"#).unwrap();
        assert_eq!(settings.cv.unwrap().download_name, "me.pdf");
    }

    #[test]
    fn parse_skills_empty_categories() {
        let skills = parse_skills("{}").unwrap();
        assert!(skills.categories.is_empty());
    }

    #[test]
    fn load_site_reports_missing_files_without_failing() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("summary.json"),
            r#"{"content":"Hello"}"#,
        )
        .unwrap();

        let paths = Paths::resolve(dir.path());
        let (site, failures) = load_site(&paths);

        assert_eq!(site.summary.unwrap().content, "Hello");
        assert!(site.profile.is_none());
        assert_eq!(failures.len(), 5);
        assert!(failures
            .iter()
            .all(|(_, e)| matches!(e, ContentError::Io { .. })));
    }

    #[test]
    fn load_site_reports_malformed_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("skills.json"), "[1, 2").unwrap();

        let paths = Paths::resolve(dir.path());
        let (site, failures) = load_site(&paths);

        assert!(site.skills.is_none());
        let (path, error) = failures
            .iter()
            .find(|(p, _)| p.ends_with("skills.json"))
            .unwrap();
        assert!(path.contains("skills.json"));
        assert!(matches!(error, ContentError::Json(_)));
    }
}
