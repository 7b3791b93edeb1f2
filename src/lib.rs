//! cloudctl - cloud server installations from the terminal
//!
//! Talks to the chat server's cloud plugin to list the installations it
//! provisioned for a user, show their state and scheduled deletion, and
//! lock, unlock or restart them.

pub mod api;
pub mod audit;
pub mod cli;
pub mod config;
pub mod countdown;
pub mod error;
pub mod install;
pub mod store;
pub mod ui;

pub use error::{CloudError, CloudResult};
