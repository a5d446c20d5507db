use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CvError;
use crate::model::{CvSettings, SiteData};

/// Where the CV lives and what the copy is called.
/// Pure function: no filesystem access.
///
/// Returns `(source, destination)`. Only the final component of the download
/// name is used, so a name like `../x.pdf` cannot escape `dest_dir`.
pub fn plan_export(
    cv: &CvSettings,
    site_root: &Path,
    dest_dir: &Path,
) -> Result<(PathBuf, PathBuf), CvError> {
    if cv.path.trim().is_empty() {
        return Err(CvError::NotConfigured);
    }
    let file_name = Path::new(cv.download_name.trim())
        .file_name()
        .ok_or(CvError::NotConfigured)?;

    Ok((site_root.join(&cv.path), dest_dir.join(file_name)))
}

/// Copy the CV into `dest_dir` under its download name.
///
/// Settings without a CV block fall back to the stock location, with the
/// copy named after the profile owner.
///
/// # Returns
/// * `Ok(PathBuf)` - path of the written copy
/// * `Err(CvError)` - not configured, source missing, or copy failed
pub fn export_cv(site: &SiteData, site_root: &Path, dest_dir: &Path) -> Result<PathBuf, CvError> {
    let owner = site.profile.as_ref().map(|p| p.name.as_str());
    let cv = site
        .settings
        .as_ref()
        .map_or_else(|| CvSettings::for_owner(owner), |s| s.cv_for(owner));
    let (source, destination) = plan_export(&cv, site_root, dest_dir)?;

    if !source.is_file() {
        return Err(CvError::NotFound(source.display().to_string()));
    }

    fs::create_dir_all(dest_dir).map_err(|source| CvError::Copy {
        path: dest_dir.display().to_string(),
        source,
    })?;
    fs::copy(&source, &destination).map_err(|source| CvError::Copy {
        path: destination.display().to_string(),
        source,
    })?;

    tracing::info!(
        from = %source.display(),
        to = %destination.display(),
        "CV exported"
    );
    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Profile, Settings};
    use tempfile::TempDir;

    fn site_with_cv(path: &str, name: &str) -> SiteData {
        SiteData {
            settings: Some(Settings {
                cv: Some(CvSettings {
                    path: path.to_string(),
                    download_name: name.to_string(),
                }),
            }),
            ..SiteData::default()
        }
    }

    #[test]
    fn plan_export_joins_paths() {
        let cv = CvSettings {
            path: "assets/cv.pdf".into(),
            download_name: "Jane_CV.pdf".into(),
        };
        let (src, dst) = plan_export(&cv, Path::new("/site"), Path::new("/out")).unwrap();
        assert_eq!(src, Path::new("/site/assets/cv.pdf"));
        assert_eq!(dst, Path::new("/out/Jane_CV.pdf"));
    }

    #[test]
    fn plan_export_keeps_only_file_name() {
        let cv = CvSettings {
            path: "cv.pdf".into(),
            download_name: "../../etc/cv.pdf".into(),
        };
        let (_, dst) = plan_export(&cv, Path::new("/site"), Path::new("/out")).unwrap();
        assert_eq!(dst, Path::new("/out/cv.pdf"));
    }

    #[test]
    fn plan_export_rejects_empty_settings() {
        let cv = CvSettings {
            path: " ".into(),
            download_name: "cv.pdf".into(),
        };
        assert!(matches!(
            plan_export(&cv, Path::new("/site"), Path::new("/out")),
            Err(CvError::NotConfigured)
        ));

        let cv = CvSettings {
            path: "cv.pdf".into(),
            download_name: "..".into(),
        };
        assert!(matches!(
            plan_export(&cv, Path::new("/site"), Path::new("/out")),
            Err(CvError::NotConfigured)
        ));
    }

    #[test]
    fn export_copies_file() {
        let site = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::create_dir_all(site.path().join("assets")).unwrap();
        fs::write(site.path().join("assets/cv.pdf"), b"%PDF-1.7").unwrap();

        let dest_dir = out.path().join("downloads");
        let written = export_cv(
            &site_with_cv("assets/cv.pdf", "Jane_CV.pdf"),
            site.path(),
            &dest_dir,
        )
        .unwrap();

        assert_eq!(written, dest_dir.join("Jane_CV.pdf"));
        assert_eq!(fs::read(&written).unwrap(), b"%PDF-1.7");
    }

    #[test]
    fn export_reports_missing_source() {
        let site = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();

        let err = export_cv(&SiteData::default(), site.path(), out.path()).unwrap_err();
        assert!(matches!(&err, CvError::NotFound(p) if p.ends_with("cv.pdf")));
    }

    #[test]
    fn export_without_settings_uses_owner_name() {
        let site = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::create_dir_all(site.path().join("assets")).unwrap();
        fs::write(site.path().join("assets/cv.pdf"), b"%PDF-1.7").unwrap();

        let data = SiteData {
            profile: Some(Profile::new("Jane Doe", "Statistician")),
            ..SiteData::default()
        };
        let written = export_cv(&data, site.path(), out.path()).unwrap();
        assert_eq!(written, out.path().join("Jane_Doe_CV.pdf"));
    }
}
