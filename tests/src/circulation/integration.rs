#![cfg(test)]
use circ_common::catalog::classification::Classification;
use circ_common::catalog::item::Item;
use circ_common::error::CirculationError;
use circ_core::registry::Registry;
use circ_core::seed;

/// A circulation desk with the demo catalog loaded, exactly as the
/// `--seed` flag would hand it to a session.
fn seeded_desk() -> Registry {
    let mut registry = Registry::new();
    seed::load_demo_data(&mut registry);
    registry
}

#[test]
fn pool_scenario_go_in_action() {
    let mut registry = seeded_desk();

    // Capacity-2 pool: two borrowers fit, the third is refused.
    assert!(registry.borrow_item("alice", "Go in Action").is_ok());
    assert!(registry.borrow_item("bob", "Go in Action").is_ok());
    assert_eq!(
        registry.borrow_item("carol", "Go in Action"),
        Err(CirculationError::LendingDenied {
            title: "Go in Action".to_string(),
            user: "carol".to_string(),
        })
    );

    // Returning one slot frees capacity for the refused borrower.
    assert!(registry.return_item("alice", "Go in Action").is_ok());
    assert!(registry.borrow_item("carol", "Go in Action").is_ok());
}

#[test]
fn single_holder_scenario_dune() {
    let mut registry = seeded_desk();

    assert!(registry.borrow_item("alice", "Dune").is_ok());
    assert_eq!(
        registry.borrow_item("bob", "Dune"),
        Err(CirculationError::LendingDenied {
            title: "Dune".to_string(),
            user: "bob".to_string(),
        })
    );

    assert!(registry.return_item("alice", "Dune").is_ok());
    assert!(registry.borrow_item("bob", "Dune").is_ok());
}

#[test]
fn unknown_user_is_checked_before_the_item() {
    let mut registry = seeded_desk();

    // Identity comes first: an unregistered user is rejected even when
    // the title is also unknown, and regardless of item state.
    assert_eq!(
        registry.borrow_item("mallory", "No Such Title"),
        Err(CirculationError::UnknownUser {
            name: "mallory".to_string(),
        })
    );

    assert!(registry.borrow_item("alice", "Dune").is_ok());
    assert_eq!(
        registry.borrow_item("mallory", "Dune"),
        Err(CirculationError::UnknownUser {
            name: "mallory".to_string(),
        })
    );
}

#[test]
fn unknown_title_is_reported_for_registered_users() {
    let mut registry = seeded_desk();

    assert_eq!(
        registry.borrow_item("alice", "Snow Crash"),
        Err(CirculationError::UnknownItem {
            title: "Snow Crash".to_string(),
        })
    );
    assert_eq!(
        registry.return_item("alice", "Snow Crash"),
        Err(CirculationError::UnknownItem {
            title: "Snow Crash".to_string(),
        })
    );
}

#[test]
fn denied_borrow_leaves_state_usable() {
    let mut registry = seeded_desk();

    assert!(registry.borrow_item("alice", "Watchmen").is_ok());
    assert!(registry.borrow_item("bob", "Watchmen").is_err());

    // The failed attempt changed nothing: alice still holds the copy
    // and can hand it back, after which bob succeeds.
    assert!(registry.return_item("alice", "Watchmen").is_ok());
    assert!(registry.borrow_item("bob", "Watchmen").is_ok());
}

#[test]
fn a_user_cannot_hold_two_pool_slots() {
    let mut registry = seeded_desk();

    assert!(registry.borrow_item("alice", "Go in Action").is_ok());
    assert_eq!(
        registry.borrow_item("alice", "Go in Action"),
        Err(CirculationError::LendingDenied {
            title: "Go in Action".to_string(),
            user: "alice".to_string(),
        })
    );

    // The duplicate attempt consumed nothing: a second user still fits.
    assert!(registry.borrow_item("bob", "Go in Action").is_ok());
}

#[test]
fn return_by_a_non_holder_does_not_free_the_copy() {
    let mut registry = seeded_desk();

    assert!(registry.borrow_item("alice", "Dune").is_ok());

    // Bob is registered, so the workflow accepts the call, but check-in
    // leaves the copy with its recorded holder.
    assert!(registry.return_item("bob", "Dune").is_ok());
    assert!(registry.borrow_item("carol", "Dune").is_err());

    assert!(registry.return_item("alice", "Dune").is_ok());
    assert!(registry.borrow_item("carol", "Dune").is_ok());
}

#[test]
fn catalog_grows_across_a_session() {
    let mut registry = Registry::new();
    assert_eq!(registry.item_count(), 0);

    registry.register_user("dana");
    registry.add_item(Item::limited_pool(
        Classification::Encyclopedia,
        "Britannica",
        "Various",
        5,
    ));
    registry.add_item(Item::single_holder(
        Classification::Magazine,
        "Wired",
        "Condé Nast",
    ));

    assert_eq!(registry.item_count(), 2);
    assert!(registry.find_item("Britannica").is_some());
    assert!(registry.borrow_item("dana", "Britannica").is_ok());
    assert!(registry.borrow_item("dana", "Wired").is_ok());
}
