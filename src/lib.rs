//! Mixo Ads campaign dashboard
//!
//! A read-only native dashboard for the Mixo campaign API. It loads the
//! campaign list with a bounded retry, estimates aggregate performance
//! locally until the insights endpoint answers, and shows per-campaign
//! details with independent fallbacks when individual fetches fail.

pub mod api;
pub mod domain;
pub mod gui;
pub mod insights;

pub use domain::*;
