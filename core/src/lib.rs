//! # Circ Core
//!
//! Services of the lending registry.
//!
//! * **[`registry`]**: The owning store of catalog items and registered
//!   users, and the enforcement point for the borrow/return workflows.
//! * **[`seed`]**: Demo catalog and user set for interactive sessions.

pub mod registry;
pub mod seed;
