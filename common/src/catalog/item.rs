//! # Catalog Item Model
//!
//! A lendable entry in the catalog: shared descriptive fields plus a
//! tagged lending policy.
//!
//! The two policies share one contract (check-out returns a success flag,
//! check-in never fails) so the registry can coordinate lending without
//! knowing which policy an item carries:
//! * **Single holder**: one physical copy, at most one borrower.
//! * **Limited pool**: a fixed number of licensed copies, one slot per user.

use crate::catalog::classification::Classification;
use crate::warn;

/// How many borrowers an item tolerates at once, and who holds it now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LendingPolicy {
    /// One physical copy: at most one holder at any time.
    SingleHolder {
        /// Name of the current borrower, if the copy is out.
        holder: Option<String>,
    },
    /// A pool of licensed copies: up to `capacity` simultaneous holders.
    LimitedPool {
        /// Fixed slot count, set at creation and never mutated.
        capacity: usize,
        /// Current holders. Never longer than `capacity`; a user appears
        /// at most once.
        holders: Vec<String>,
    },
}

/// A lendable catalog entry.
///
/// The title doubles as the item's unique key within a registry and is
/// immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    classification: Classification,
    title: String,
    author: String,
    policy: LendingPolicy,
}

impl Item {
    /// Creates a single physical copy, initially unheld.
    pub fn single_holder(
        classification: Classification,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            classification,
            title: title.into(),
            author: author.into(),
            policy: LendingPolicy::SingleHolder { holder: None },
        }
    }

    /// Creates a pool of `capacity` simultaneous slots, initially empty.
    ///
    /// `capacity` must be positive; callers collecting it from input are
    /// expected to validate before construction.
    pub fn limited_pool(
        classification: Classification,
        title: impl Into<String>,
        author: impl Into<String>,
        capacity: usize,
    ) -> Self {
        Self {
            classification,
            title: title.into(),
            author: author.into(),
            policy: LendingPolicy::LimitedPool {
                capacity,
                holders: Vec::new(),
            },
        }
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn policy(&self) -> &LendingPolicy {
        &self.policy
    }

    /// Number of holders currently recorded.
    pub fn holder_count(&self) -> usize {
        match &self.policy {
            LendingPolicy::SingleHolder { holder } => usize::from(holder.is_some()),
            LendingPolicy::LimitedPool { holders, .. } => holders.len(),
        }
    }

    /// Whether at least one slot is free right now.
    pub fn is_available(&self) -> bool {
        match &self.policy {
            LendingPolicy::SingleHolder { holder } => holder.is_none(),
            LendingPolicy::LimitedPool { capacity, holders } => holders.len() < *capacity,
        }
    }

    /// Attempts to record `user` as a holder.
    ///
    /// Returns whether the borrow was accepted. A single copy refuses while
    /// held by anyone (including `user`); a pool refuses at capacity or when
    /// `user` already occupies a slot, so one user can never consume more
    /// than one.
    pub fn check_out(&mut self, user: &str) -> bool {
        match &mut self.policy {
            LendingPolicy::SingleHolder { holder } => {
                if holder.is_some() {
                    return false;
                }
                *holder = Some(user.to_string());
                true
            }
            LendingPolicy::LimitedPool { capacity, holders } => {
                if holders.len() >= *capacity {
                    return false;
                }
                if holders.iter().any(|held_by| held_by == user) {
                    return false;
                }
                holders.push(user.to_string());
                true
            }
        }
    }

    /// Releases `user`'s hold on this item.
    ///
    /// Never signals failure. A check-in that does not match a recorded
    /// holder leaves the item untouched: a single copy stays with its real
    /// borrower, and a pool drops nothing for an absent user.
    pub fn check_in(&mut self, user: &str) {
        match &mut self.policy {
            LendingPolicy::SingleHolder { holder } => match holder.as_deref() {
                Some(current) if current == user => *holder = None,
                Some(_) => {
                    warn!("'{}' is not the recorded holder of '{}'", user, self.title);
                }
                None => {}
            },
            LendingPolicy::LimitedPool { holders, .. } => {
                if let Some(idx) = holders.iter().position(|held_by| held_by == user) {
                    holders.remove(idx);
                }
            }
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
