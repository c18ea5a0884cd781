//! Widgets composed by `ui::render`.

pub mod categories;
pub mod chat;
pub mod input;
pub mod markdown;
pub mod notification;
pub mod report;
pub mod scroll;
pub mod sources;
pub mod tabs;
