use serde::{Deserialize, Serialize};

use super::theme::ThemeMode;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    #[serde(default)]
    pub items: Vec<Company>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub logo: Logo,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl Company {
    pub fn new(company: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            ..Self::default()
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.push(role);
        self
    }
}

/// Company logo with optional per-theme variants.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Logo {
    #[serde(default)]
    pub default: String,
    #[serde(default)]
    pub light: Option<String>,
    #[serde(default)]
    pub dark: Option<String>,
}

impl Logo {
    /// Theme variants apply only when both are present; otherwise the default is used.
    pub fn for_mode(&self, mode: ThemeMode) -> &str {
        match (&self.light, &self.dark) {
            (Some(light), Some(dark)) => match mode {
                ThemeMode::Light => light,
                ThemeMode::Dark => dark,
            },
            _ => &self.default,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub title: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub display_date: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

impl Role {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_uses_variant_for_mode_when_both_present() {
        let logo = Logo {
            default: "acme.svg".into(),
            light: Some("acme-light.svg".into()),
            dark: Some("acme-dark.svg".into()),
        };
        assert_eq!(logo.for_mode(ThemeMode::Light), "acme-light.svg");
        assert_eq!(logo.for_mode(ThemeMode::Dark), "acme-dark.svg");
    }

    #[test]
    fn logo_falls_back_to_default_with_one_variant() {
        let logo = Logo {
            default: "acme.svg".into(),
            light: None,
            dark: Some("acme-dark.svg".into()),
        };
        assert_eq!(logo.for_mode(ThemeMode::Dark), "acme.svg");
    }

    #[test]
    fn role_reads_camel_case_dates() {
        let role: Role = serde_json::from_str(
            r#"{"title":"Analyst","startDate":"2021-02","endDate":"Present","displayDate":"Feb 2021 - Present"}"#,
        )
        .unwrap();
        assert_eq!(role.start_date.as_deref(), Some("2021-02"));
        assert_eq!(role.end_date.as_deref(), Some("Present"));
        assert!(role.responsibilities.is_empty());
    }
}
