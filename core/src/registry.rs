//! # Lending Registry
//!
//! Implements the core "borrow" and "return" use cases.
//!
//! The registry owns the catalog (title → item) and the user directory, and
//! layers the identity/existence checks on top of the items' own lending
//! policies:
//! 1. **Identity**: the user must have been registered.
//! 2. **Existence**: the title must be in the catalog.
//! 3. **Policy**: the item itself accepts or refuses the state change.

use std::collections::{HashMap, HashSet};

use circ_common::catalog::item::Item;
use circ_common::error::CirculationError;
use circ_common::warn;

/// The owning store of all items and registered users.
///
/// Constructed empty and passed by ownership to whatever drives a session;
/// it grows monotonically (no deletion operations exist) and is the only
/// holder of item and user state.
pub struct Registry {
    items: HashMap<String, Item>,
    users: HashSet<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            users: HashSet::new(),
        }
    }

    /// Adds `name` to the user directory. Registering a name twice is a
    /// no-op, not an error.
    pub fn register_user(&mut self, name: impl Into<String>) {
        self.users.insert(name.into());
    }

    pub fn is_registered_user(&self, name: &str) -> bool {
        self.users.contains(name)
    }

    /// Inserts `item` under its title key.
    ///
    /// A duplicate title silently replaces the previous entry,
    /// holder state included.
    pub fn add_item(&mut self, item: Item) {
        if let Some(previous) = self.items.insert(item.title().to_string(), item) {
            warn!("replaced catalog entry '{}'", previous.title());
        }
    }

    pub fn find_item(&self, title: &str) -> Option<&Item> {
        self.items.get(title)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Catalog entries in title order, for stable display.
    pub fn items_by_title(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items.values().collect();
        items.sort_by(|a, b| a.title().cmp(b.title()));
        items
    }

    /// Executes the borrow workflow for `user` against `title`.
    ///
    /// Checks identity and existence, then delegates the holder-state
    /// mutation to the item's policy; a policy refusal surfaces as
    /// [`CirculationError::LendingDenied`].
    pub fn borrow_item(&mut self, user: &str, title: &str) -> Result<(), CirculationError> {
        if !self.users.contains(user) {
            return Err(CirculationError::UnknownUser {
                name: user.to_string(),
            });
        }

        let item = self
            .items
            .get_mut(title)
            .ok_or_else(|| CirculationError::UnknownItem {
                title: title.to_string(),
            })?;

        if item.check_out(user) {
            Ok(())
        } else {
            Err(CirculationError::LendingDenied {
                title: title.to_string(),
                user: user.to_string(),
            })
        }
    }

    /// Executes the return workflow for `user` against `title`.
    ///
    /// The same identity/existence checks as borrowing apply; once
    /// delegated, check-in itself never fails.
    pub fn return_item(&mut self, user: &str, title: &str) -> Result<(), CirculationError> {
        if !self.users.contains(user) {
            return Err(CirculationError::UnknownUser {
                name: user.to_string(),
            });
        }

        let item = self
            .items
            .get_mut(title)
            .ok_or_else(|| CirculationError::UnknownItem {
                title: title.to_string(),
            })?;

        item.check_in(user);
        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circ_common::catalog::classification::Classification;

    fn registry_with(item: Item) -> Registry {
        let mut registry = Registry::new();
        registry.register_user("alice");
        registry.add_item(item);
        registry
    }

    #[test]
    fn test_borrow_requires_registered_user() {
        let mut registry = registry_with(Item::single_holder(
            Classification::Hardback,
            "Dune",
            "Frank Herbert",
        ));

        let result = registry.borrow_item("mallory", "Dune");
        assert_eq!(
            result,
            Err(CirculationError::UnknownUser {
                name: "mallory".to_string()
            })
        );

        // The item is untouched and still lendable.
        assert!(registry.borrow_item("alice", "Dune").is_ok());
    }

    #[test]
    fn test_borrow_requires_known_title() {
        let mut registry = Registry::new();
        registry.register_user("alice");

        let result = registry.borrow_item("alice", "Neuromancer");
        assert_eq!(
            result,
            Err(CirculationError::UnknownItem {
                title: "Neuromancer".to_string()
            })
        );
    }

    #[test]
    fn test_policy_refusal_surfaces_as_lending_denied() {
        let mut registry = registry_with(Item::limited_pool(
            Classification::EBook,
            "Go in Action",
            "William Kennedy",
            1,
        ));
        registry.register_user("bob");

        assert!(registry.borrow_item("alice", "Go in Action").is_ok());
        assert_eq!(
            registry.borrow_item("bob", "Go in Action"),
            Err(CirculationError::LendingDenied {
                title: "Go in Action".to_string(),
                user: "bob".to_string()
            })
        );
    }

    #[test]
    fn test_return_checks_user_and_title() {
        let mut registry = registry_with(Item::single_holder(
            Classification::Paperback,
            "Dune",
            "Frank Herbert",
        ));

        assert!(matches!(
            registry.return_item("mallory", "Dune"),
            Err(CirculationError::UnknownUser { .. })
        ));
        assert!(matches!(
            registry.return_item("alice", "Neuromancer"),
            Err(CirculationError::UnknownItem { .. })
        ));
        assert!(registry.return_item("alice", "Dune").is_ok());
    }

    #[test]
    fn test_register_user_is_idempotent() {
        let mut registry = Registry::new();
        registry.register_user("alice");
        registry.register_user("alice");

        assert_eq!(registry.user_count(), 1);
        assert!(registry.is_registered_user("alice"));
        assert!(!registry.is_registered_user("bob"));
    }

    #[test]
    fn test_add_item_replaces_duplicate_title() {
        let mut registry = registry_with(Item::single_holder(
            Classification::Hardback,
            "Dune",
            "Frank Herbert",
        ));

        assert!(registry.borrow_item("alice", "Dune").is_ok());

        // Re-adding the same title is last-write-wins: the fresh entry
        // replaces the held one.
        registry.add_item(Item::single_holder(
            Classification::Paperback,
            "Dune",
            "Frank Herbert",
        ));

        assert_eq!(registry.item_count(), 1);
        let item = registry.find_item("Dune").expect("entry must exist");
        assert_eq!(item.classification(), Classification::Paperback);
        assert!(item.is_available());
    }

    #[test]
    fn test_items_by_title_is_sorted() {
        let mut registry = Registry::new();
        registry.add_item(Item::single_holder(Classification::Comic, "Watchmen", "Alan Moore"));
        registry.add_item(Item::single_holder(Classification::Paperback, "Dune", "Frank Herbert"));

        let titles: Vec<&str> = registry.items_by_title().iter().map(|i| i.title()).collect();
        assert_eq!(titles, vec!["Dune", "Watchmen"]);
    }
}
