use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Skills {
    #[serde(default)]
    pub categories: Vec<SkillCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillCategory {
    pub name: String,
    #[serde(flatten)]
    pub group: SkillGroup,
}

/// Category body, selected by the `type` field.
/// Unrecognised types deserialize to `Unknown` and render empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SkillGroup {
    List {
        #[serde(default)]
        items: Vec<SkillItem>,
    },
    Tags {
        #[serde(default)]
        items: Vec<SkillItem>,
    },
    Proficiency {
        #[serde(default)]
        items: Vec<ProficiencyItem>,
    },
    #[serde(other)]
    Unknown,
}

/// A bare string or an object with a `name`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SkillItem {
    Plain(String),
    Named { name: String },
}

impl SkillItem {
    pub fn name(&self) -> &str {
        match self {
            SkillItem::Plain(name) | SkillItem::Named { name } => name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProficiencyItem {
    pub name: String,
    /// Percentage, 0-100.
    #[serde(default)]
    pub level: u16,
    #[serde(default)]
    pub label: String,
}

impl ProficiencyItem {
    /// Level as a ratio clamped to 0.0..=1.0.
    pub fn ratio(&self) -> f64 {
        f64::from(self.level.min(100)) / 100.0
    }
}
