use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Education {
    #[serde(default)]
    pub items: Vec<EducationItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub display_date: String,
    #[serde(default)]
    pub grade: Option<String>,
}

impl EducationItem {
    pub fn new(institution: impl Into<String>, degree: impl Into<String>) -> Self {
        Self {
            institution: institution.into(),
            degree: degree.into(),
            ..Self::default()
        }
    }

    pub fn with_dates(mut self, start: &str, end: &str, display: &str) -> Self {
        self.start_date = Some(start.to_string());
        self.end_date = Some(end.to_string());
        self.display_date = display.to_string();
        self
    }
}
