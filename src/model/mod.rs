pub mod education;
pub mod experience;
pub mod profile;
pub mod settings;
pub mod site;
pub mod skills;
pub mod theme;

pub use education::{Education, EducationItem};
pub use experience::{Company, Experience, Logo, Role};
pub use profile::{Contact, Link, Profile, Summary};
pub use settings::{CvSettings, Settings};
pub use site::{EntryKind, SiteData, TimelineEntry};
pub use skills::{ProficiencyItem, SkillCategory, SkillGroup, SkillItem, Skills};
pub use theme::{Palette, ThemeMode, ThemeState};
