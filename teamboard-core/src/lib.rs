//! Roster and session state for the `Teamboard` dashboard.
//!
//! The [`store::Store`] owns both slices and applies [`command::Command`]s;
//! the task progress/status transition rules live on [`task::Task`].

pub mod clock;
pub mod command;
pub mod member;
pub mod roster;
pub mod seed;
pub mod session;
pub mod store;
pub mod summary;
pub mod task;
