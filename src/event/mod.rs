use std::path::PathBuf;

use chrono::{DateTime, Local};
use crossterm::event::KeyEvent;

use crate::error::FolioError;
use crate::model::SiteData;

/// All events that can occur in the application.
/// Sourced from the content loader, file watcher, keyboard input and timers.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Content directory (re)loaded; sections that failed are None
    ContentLoaded(SiteData),

    /// Keyboard input event
    Key(KeyEvent),

    /// Timer tick with the wall-clock time, for banner expiry and ongoing ranges
    Tick(DateTime<Local>),

    /// Non-fatal error (content file, watcher, CV export)
    Error { source: String, error: FolioError },

    /// CV copied to the given path
    CvExported(PathBuf),
}
