use std::path::{Path, PathBuf};

/// Resolved paths for every file the site is built from.
/// Pure data structure with no I/O.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Directory holding the JSON content files
    /// Example: <site_root>/data/
    pub data_dir: PathBuf,

    /// Site root that asset paths (CV, logos) are relative to.
    /// The parent of `data_dir`; `.` for a bare relative name like `data`.
    pub site_root: PathBuf,

    pub profile: PathBuf,
    pub summary: PathBuf,
    pub education: PathBuf,
    pub experience: PathBuf,
    pub skills: PathBuf,
    pub settings: PathBuf,
}

impl Paths {
    /// Resolves all content paths relative to the given data directory.
    ///
    /// Does NOT create directories or verify file existence.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use folio::paths::Paths;
    ///
    /// let paths = Paths::resolve(Path::new("/srv/site/data"));
    ///
    /// assert_eq!(paths.profile, Path::new("/srv/site/data/profile.json"));
    /// assert_eq!(paths.site_root, Path::new("/srv/site"));
    /// ```
    pub fn resolve(data_dir: &Path) -> Self {
        let site_root = match data_dir.parent() {
            Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
            Some(parent) => parent.to_path_buf(),
            None => data_dir.to_path_buf(),
        };

        Self {
            data_dir: data_dir.to_path_buf(),
            site_root,
            profile: data_dir.join("profile.json"),
            summary: data_dir.join("summary.json"),
            education: data_dir.join("education.json"),
            experience: data_dir.join("experience.json"),
            skills: data_dir.join("skills.json"),
            settings: data_dir.join("settings.json"),
        }
    }

    /// All content files, in load order.
    pub fn content_files(&self) -> [&Path; 6] {
        [
            &self.profile,
            &self.summary,
            &self.education,
            &self.experience,
            &self.skills,
            &self.settings,
        ]
    }

    /// True when `path` is one of the content files.
    pub fn is_content_file(&self, path: &Path) -> bool {
        self.content_files().iter().any(|p| *p == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_content_paths() {
        let paths = Paths::resolve(Path::new("/home/user/site/data"));

        assert_eq!(paths.data_dir, Path::new("/home/user/site/data"));
        assert_eq!(paths.site_root, Path::new("/home/user/site"));
        assert_eq!(paths.summary, Path::new("/home/user/site/data/summary.json"));
        assert_eq!(paths.education, Path::new("/home/user/site/data/education.json"));
        assert_eq!(paths.experience, Path::new("/home/user/site/data/experience.json"));
        assert_eq!(paths.skills, Path::new("/home/user/site/data/skills.json"));
        assert_eq!(paths.settings, Path::new("/home/user/site/data/settings.json"));
    }

    #[test]
    fn test_bare_relative_data_dir_uses_working_directory_as_root() {
        let paths = Paths::resolve(Path::new("data"));
        assert_eq!(paths.site_root, Path::new("."));
        assert_eq!(paths.site_root.join("assets/cv.pdf"), Path::new("./assets/cv.pdf"));
    }

    #[test]
    fn test_filesystem_root_is_its_own_root() {
        let paths = Paths::resolve(Path::new("/"));
        assert_eq!(paths.site_root, Path::new("/"));
    }

    #[test]
    fn test_is_content_file() {
        let paths = Paths::resolve(Path::new("/site/data"));
        assert!(paths.is_content_file(Path::new("/site/data/skills.json")));
        assert!(!paths.is_content_file(Path::new("/site/data/notes.json")));
    }

    #[test]
    fn test_content_files_order() {
        let paths = Paths::resolve(Path::new("/site/data"));
        let names: Vec<_> = paths
            .content_files()
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "profile.json",
                "summary.json",
                "education.json",
                "experience.json",
                "skills.json",
                "settings.json"
            ]
        );
    }
}
