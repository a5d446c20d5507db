use std::collections::{BTreeSet, VecDeque};

use chrono::{Local, NaiveDate};

use crate::model::{EntryKind, SiteData, ThemeState, TimelineEntry};

/// Error ring buffer capacity
pub const MAX_ERRORS: usize = 100;

/// Ticks a banner stays visible (about three seconds at the default tick rate)
pub const BANNER_TICKS: u8 = 12;

/// Main application state.
/// Updated via pure `update(state, event) -> state` function.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Section currently shown
    pub section: Section,

    /// Loaded content (empty until the first load completes)
    pub site: SiteData,

    /// Dated entries derived from `site`, with durations as of `today`
    pub timeline: Vec<TimelineEntry>,

    /// Evaluation date for ongoing ranges
    pub today: NaiveDate,

    pub theme: ThemeState,

    /// Position within each section
    pub cursor: Cursor,

    /// Timeline indices whose duration is revealed
    pub revealed: BTreeSet<usize>,

    /// Reveal every duration regardless of `revealed`
    pub show_all_durations: bool,

    /// Section menu, with the highlighted row when open
    pub menu: Option<usize>,

    /// Show help overlay
    pub show_help: bool,

    /// Transient status message
    pub banner: Option<Banner>,

    /// Error message ring buffer (for status bar display)
    pub errors: VecDeque<String>,

    /// True once content has been loaded at least once
    pub loaded: bool,

    /// Side effect requested by a key press, performed by the event loop
    pub pending_action: Option<Action>,

    /// Signal to quit the application
    pub should_quit: bool,
}

/// Page sections, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Profile,
    Experience,
    Education,
    Skills,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Profile,
        Section::Experience,
        Section::Education,
        Section::Skills,
    ];

    pub fn index(self) -> usize {
        match self {
            Section::Profile => 0,
            Section::Experience => 1,
            Section::Education => 2,
            Section::Skills => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Section> {
        Self::ALL.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Profile => "Profile",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Skills => "Skills",
        }
    }

    pub fn next(self) -> Section {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Section {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Timeline kind listed in this section, if it is a dated section
    pub fn entry_kind(self) -> Option<EntryKind> {
        match self {
            Section::Experience => Some(EntryKind::Experience),
            Section::Education => Some(EntryKind::Education),
            Section::Profile | Section::Skills => None,
        }
    }
}

/// Cursor per section. Dated sections and skills select an item;
/// the profile scrolls by line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    pub profile: usize,
    pub experience: usize,
    pub education: usize,
    pub skills: usize,
}

impl Cursor {
    pub fn get(&self, section: Section) -> usize {
        match section {
            Section::Profile => self.profile,
            Section::Experience => self.experience,
            Section::Education => self.education,
            Section::Skills => self.skills,
        }
    }

    pub fn get_mut(&mut self, section: Section) -> &mut usize {
        match section {
            Section::Profile => &mut self.profile,
            Section::Experience => &mut self.experience,
            Section::Education => &mut self.education,
            Section::Skills => &mut self.skills,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub text: String,
    pub kind: BannerKind,
    pub ticks_left: u8,
}

impl Banner {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: BannerKind::Info,
            ticks_left: BANNER_TICKS,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: BannerKind::Error,
            ticks_left: BANNER_TICKS,
        }
    }
}

/// Side effects the pure update cannot perform itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ExportCv,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create new default application state, evaluated as of the local date
    pub fn new() -> Self {
        Self::with_today(Local::now().date_naive())
    }

    pub fn with_today(today: NaiveDate) -> Self {
        Self {
            section: Section::Profile,
            site: SiteData::default(),
            timeline: Vec::new(),
            today,
            theme: ThemeState::default(),
            cursor: Cursor::default(),
            revealed: BTreeSet::new(),
            show_all_durations: false,
            menu: None,
            show_help: false,
            banner: None,
            errors: VecDeque::with_capacity(MAX_ERRORS),
            loaded: false,
            pending_action: None,
            should_quit: false,
        }
    }

    pub fn with_theme(mut self, theme: ThemeState) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.section = section;
        self
    }

    /// Install content and derive the timeline from it.
    pub fn with_site(mut self, site: SiteData) -> Self {
        self.timeline = site.timeline(self.today);
        self.site = site;
        self.loaded = true;
        self
    }

    /// Timeline indices listed in `section`, in display order.
    pub fn section_entries(&self, section: Section) -> Vec<usize> {
        match section.entry_kind() {
            Some(kind) => self
                .timeline
                .iter()
                .enumerate()
                .filter(|(_, e)| e.kind == kind)
                .map(|(i, _)| i)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Timeline index of the selected entry in the current section.
    pub fn selected_entry(&self) -> Option<usize> {
        self.section_entries(self.section)
            .get(self.cursor.get(self.section))
            .copied()
    }

    pub fn is_revealed(&self, timeline_index: usize) -> bool {
        self.show_all_durations || self.revealed.contains(&timeline_index)
    }

    /// Number of cursor positions in a section (at least 1).
    pub fn section_len(&self, section: Section) -> usize {
        let len = match section {
            Section::Profile => {
                let contact = self
                    .site
                    .profile
                    .as_ref()
                    .map(|p| p.contact.rows().len())
                    .unwrap_or(0);
                let summary = self
                    .site
                    .summary
                    .as_ref()
                    .map(|s| s.content.lines().count())
                    .unwrap_or(0);
                contact + summary
            }
            Section::Experience | Section::Education => self.section_entries(section).len(),
            Section::Skills => self
                .site
                .skills
                .as_ref()
                .map(|s| s.categories.len())
                .unwrap_or(0),
        };
        len.max(1)
    }

    /// Page-wide reading progress, 0-100, counting each section equally.
    pub fn scroll_progress(&self) -> u16 {
        let sections = Section::ALL.len() as f64;
        let len = self.section_len(self.section);
        let within = if len > 1 {
            self.cursor.get(self.section) as f64 / (len - 1) as f64
        } else {
            1.0
        };
        let progress = (self.section.index() as f64 + within) / sections * 100.0;
        progress.round().clamp(0.0, 100.0) as u16
    }

    /// Clamp every cursor into its section after content changes.
    pub fn clamp_cursors(&mut self) {
        for section in Section::ALL {
            let max = self.section_len(section) - 1;
            let cursor = self.cursor.get_mut(section);
            *cursor = (*cursor).min(max);
        }
    }

    /// Record an error, evicting the oldest when full.
    pub fn push_error(&mut self, message: String) {
        if self.errors.len() >= MAX_ERRORS {
            self.errors.pop_front();
        }
        self.errors.push_back(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Company, Education, EducationItem, Experience, Role, Skills, Summary};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 19).unwrap()
    }

    fn site() -> SiteData {
        SiteData {
            experience: Some(Experience {
                items: vec![Company::new("Acme")
                    .with_role(Role::new("Lead").with_dates("2023-01", "present", "2023 - now"))
                    .with_role(Role::new("Dev").with_dates("2020-01", "2022-12", "2020 - 2022"))],
            }),
            education: Some(Education {
                items: vec![EducationItem::new("Uni", "MSc").with_dates("2018", "2019-12", "2018 - 2019")],
            }),
            summary: Some(Summary {
                content: "one\ntwo\nthree".into(),
            }),
            skills: Some(Skills::default()),
            ..SiteData::default()
        }
    }

    #[test]
    fn test_app_state_default() {
        let state = AppState::with_today(today());
        assert_eq!(state.section, Section::Profile);
        assert!(state.timeline.is_empty());
        assert!(state.revealed.is_empty());
        assert!(!state.show_all_durations);
        assert!(state.menu.is_none());
        assert!(!state.show_help);
        assert!(state.banner.is_none());
        assert!(state.errors.is_empty());
        assert!(!state.loaded);
        assert!(state.pending_action.is_none());
        assert!(!state.should_quit);
    }

    #[test]
    fn test_errors_capacity() {
        let state = AppState::new();
        assert_eq!(state.errors.capacity(), MAX_ERRORS);
    }

    #[test]
    fn test_with_site_builds_timeline() {
        let state = AppState::with_today(today()).with_site(site());
        assert!(state.loaded);
        assert_eq!(state.timeline.len(), 3);
        assert_eq!(state.section_entries(Section::Experience), vec![0, 1]);
        assert_eq!(state.section_entries(Section::Education), vec![2]);
        assert!(state.section_entries(Section::Skills).is_empty());
    }

    #[test]
    fn test_selected_entry_follows_cursor() {
        let mut state = AppState::with_today(today())
            .with_site(site())
            .with_section(Section::Education);
        assert_eq!(state.selected_entry(), Some(2));

        state.section = Section::Experience;
        state.cursor.experience = 1;
        assert_eq!(state.selected_entry(), Some(1));

        state.section = Section::Profile;
        assert_eq!(state.selected_entry(), None);
    }

    #[test]
    fn test_section_cycle() {
        assert_eq!(Section::Profile.next(), Section::Experience);
        assert_eq!(Section::Skills.next(), Section::Profile);
        assert_eq!(Section::Profile.prev(), Section::Skills);
        assert_eq!(Section::from_index(2), Some(Section::Education));
        assert_eq!(Section::from_index(4), None);
    }

    #[test]
    fn test_section_len_never_zero() {
        let state = AppState::with_today(today());
        for section in Section::ALL {
            assert_eq!(state.section_len(section), 1);
        }
        let state = state.with_site(site());
        assert_eq!(state.section_len(Section::Profile), 3);
        assert_eq!(state.section_len(Section::Experience), 2);
    }

    #[test]
    fn test_clamp_cursors() {
        let mut state = AppState::with_today(today()).with_site(site());
        state.cursor.experience = 9;
        state.cursor.skills = 4;
        state.clamp_cursors();
        assert_eq!(state.cursor.experience, 1);
        assert_eq!(state.cursor.skills, 0);
    }

    #[test]
    fn test_scroll_progress_bounds() {
        let state = AppState::with_today(today()).with_site(site());
        assert_eq!(state.scroll_progress(), 0);

        let mut state = state.with_section(Section::Skills);
        state.cursor.skills = 0;
        assert_eq!(state.scroll_progress(), 100);
    }

    #[test]
    fn test_push_error_evicts_oldest() {
        let mut state = AppState::new();
        for i in 0..MAX_ERRORS + 5 {
            state.push_error(format!("error {}", i));
        }
        assert_eq!(state.errors.len(), MAX_ERRORS);
        assert_eq!(state.errors.front().unwrap(), "error 5");
    }
}
