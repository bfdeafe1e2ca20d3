//! Folio - a personal portfolio for the terminal
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod effects;
pub mod models;
pub mod relay;
pub mod state;
pub mod storage;
pub mod ui;
pub mod widgets;
