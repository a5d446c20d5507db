pub mod app;
pub mod config;
pub mod content;
pub mod cv;
pub mod duration;
pub mod error;
pub mod event;
pub mod logging;
pub mod model;
pub mod paths;
pub mod view;
pub mod watcher;
