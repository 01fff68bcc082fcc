//! # Circ Common
//!
//! Shared building blocks for the `circ` workspace.
//!
//! ## Contents
//! * **[`catalog`]**: The lending domain models (items, classifications).
//! * **[`error`]**: The recoverable error taxonomy of the lending workflows.
//! * **[`config`]**: Runtime options threaded through a session.
//! * **[`log`]**: Logging facade macros over [`tracing`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod log;
