pub mod navigation;
pub mod state;
pub mod update;

pub use navigation::handle_key;
pub use state::{Action, AppState, Banner, BannerKind, Cursor, Section};
pub use update::update;
