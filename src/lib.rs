#![warn(clippy::all, rust_2018_idioms)]

mod app;
pub mod error;
pub mod i18n;
pub mod ui;

pub use app::HistoryApp;
pub use error::UiError;
pub use ui::history::{HistoryRow, HistorySection, create_history_section};
