//! status_watcher_rust - Long-running watcher for homework review statuses

pub mod config;
pub mod formatters;
pub mod scheduler;
pub mod telegram;
pub mod tracker;
pub mod watcher;

pub use config::Config;
pub use tracker::{StatusChange, StatusTracker};
pub use watcher::StatusWatcher;
