use thiserror::Error;

/// Recoverable outcomes of the lending workflows.
///
/// None of these are fatal: the registry and every item stay valid and
/// usable after any of them, and the caller is free to retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CirculationError {
    /// The workflow referenced a user name that was never registered.
    #[error("unknown user '{name}'")]
    UnknownUser { name: String },

    /// The workflow referenced a title not present in the catalog.
    #[error("no item titled '{title}' in the catalog")]
    UnknownItem { title: String },

    /// User and item both exist, but the item's lending policy refused
    /// the borrow (single copy already out, or pool at capacity).
    #[error("'{title}' cannot be lent to '{user}' right now")]
    LendingDenied { title: String, user: String },
}
