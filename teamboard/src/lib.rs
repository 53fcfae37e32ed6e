//! `Teamboard` — terminal team-status dashboard.

pub mod app;
pub mod config;
pub mod ui;
