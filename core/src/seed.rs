//! Demo data for interactive sessions.
//!
//! Opt-in via the `--seed` flag: an empty registry makes for a dull first
//! session, so this hands one a small catalog and a few borrowers.

use circ_common::catalog::classification::Classification;
use circ_common::catalog::item::Item;

use crate::registry::Registry;

/// Loads the demo catalog and user set into `registry`.
pub fn load_demo_data(registry: &mut Registry) {
    registry.add_item(Item::single_holder(
        Classification::Hardback,
        "Dune",
        "Frank Herbert",
    ));
    registry.add_item(Item::single_holder(
        Classification::Comic,
        "Watchmen",
        "Alan Moore",
    ));
    registry.add_item(Item::limited_pool(
        Classification::EBook,
        "Go in Action",
        "William Kennedy",
        2,
    ));
    registry.add_item(Item::limited_pool(
        Classification::Audiobook,
        "The Left Hand of Darkness",
        "Ursula K. Le Guin",
        3,
    ));

    for user in ["alice", "bob", "carol"] {
        registry.register_user(user);
    }
}
