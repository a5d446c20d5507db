pub mod banner;
pub mod entry_row;
pub mod footer;
pub mod format;
pub mod header;
pub mod help_overlay;
pub mod popup;

pub use banner::{banner_visible, render_banner};
pub use entry_row::{entry_line, scroll_offset};
pub use footer::render_footer;
pub use header::render_header;
pub use help_overlay::render_help_overlay;
pub use popup::render_menu_popup;
