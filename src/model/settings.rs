use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub cv: Option<CvSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CvSettings {
    /// Path of the CV relative to the site root.
    pub path: String,
    /// File name the exported copy is written under.
    pub download_name: String,
}

impl Default for CvSettings {
    fn default() -> Self {
        Self {
            path: "assets/cv.pdf".to_string(),
            download_name: "CV.pdf".to_string(),
        }
    }
}

impl CvSettings {
    /// Stock settings for a site owned by `owner`: the download is named
    /// after them (`Jane_Doe_CV.pdf`), or plain `CV.pdf` without a name.
    pub fn for_owner(owner: Option<&str>) -> Self {
        let name = owner
            .map(|o| o.split_whitespace().collect::<Vec<_>>().join("_"))
            .filter(|n| !n.is_empty());
        match name {
            Some(name) => Self {
                download_name: format!("{}_CV.pdf", name),
                ..Self::default()
            },
            None => Self::default(),
        }
    }
}

impl Settings {
    /// CV settings, or the stock ones for `owner` when the settings file
    /// leaves them out.
    pub fn cv_for(&self, owner: Option<&str>) -> CvSettings {
        self.cv
            .clone()
            .unwrap_or_else(|| CvSettings::for_owner(owner))
    }
}
