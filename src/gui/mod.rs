//! Native dashboard GUI built on eframe/egui
//!
//! All view state lives in [`state::DashboardState`] and changes only
//! through its event transitions; rendering is a pure pass over that
//! state each frame. Network work happens on the fetch worker thread
//! and arrives back as events.

pub mod app;
mod app_eframe;
mod cards;
mod detail;
pub mod fetcher;
mod filters;
pub mod format;
mod header;
pub mod runner;
pub mod state;
pub mod theme;

pub use app::DashboardApp;
pub use fetcher::{FetchEvent, FetchRequest, Fetcher, start_fetcher};
pub use runner::run_gui;
pub use state::{Command, DashboardState, Event, StatusFilter};
