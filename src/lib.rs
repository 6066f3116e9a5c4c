//! Library crate for user-admin-tui.
//!
//! This crate exposes the building blocks of the TUI:
//! - HTTP client and wire types for the users endpoint (`api`)
//! - Application state, key handling and request reconciliation (`app`)
//! - Command-line configuration (`config`)
//! - Error types (`error`)
//! - In-memory search helpers (`search`)
//! - UI rendering and widgets (`ui`)
//!
//! It is used by the `user-admin-tui` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod search;
pub mod ui;

pub use error::{FetchError, Result};
