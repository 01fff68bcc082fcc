//! Interactive circulation session.
//!
//! The menu loop that drives the registry: add items, register users,
//! borrow, return, and list the catalog. Recoverable lending errors are
//! reported and the loop continues; only real terminal failures abort.

use anyhow::Result;
use circ_common::catalog::classification::Classification;
use circ_common::catalog::item::Item;
use circ_common::config::Config;
use circ_common::error::CirculationError;
use circ_common::{info, success, warn};
use circ_core::registry::Registry;
use console::Term;

use crate::terminal::{format, print, prompt};

pub fn run(mut registry: Registry, cfg: &Config) -> Result<()> {
    let term = Term::stdout();

    loop {
        menu(cfg);
        let choice = prompt::read_required(&term, "Enter your choice")?;

        match choice.as_str() {
            "1" => add_item(&term, &mut registry)?,
            "2" => register_user(&term, &mut registry)?,
            "3" => borrow_item(&term, &mut registry)?,
            "4" => return_item(&term, &mut registry)?,
            "5" => list_catalog(&registry, cfg),
            "6" | "q" | "quit" | "exit" => break,
            other => warn!("'{}' is not an option", other),
        }
    }

    print::end_of_session();
    Ok(())
}

fn menu(cfg: &Config) {
    if cfg.quiet == 0 {
        print::fat_separator();
    }
    print::print_status("Choose one of the options below:");
    print::menu_option(1, "Add a new item to the catalog");
    print::menu_option(2, "Register a new user");
    print::menu_option(3, "Borrow an item");
    print::menu_option(4, "Return an item");
    print::menu_option(5, "List the catalog");
    print::menu_option(6, "Exit");
}

fn add_item(term: &Term, registry: &mut Registry) -> Result<()> {
    let title = prompt::read_required(term, "Title")?;

    print::print_status("Classifications:");
    for (idx, classification) in Classification::ALL.iter().enumerate() {
        print::menu_option(idx + 1, classification.label());
    }
    let classification: Classification = prompt::read_parsed(term, "Classification")?;

    let author = prompt::read_required(term, "Author")?;

    let kind = prompt::read_required(term, "Kind (1. physical copy / 2. digital pool)")?;
    let item = match kind.as_str() {
        "2" | "digital" => {
            let capacity = read_capacity(term)?;
            Item::limited_pool(classification, title, author, capacity)
        }
        _ => Item::single_holder(classification, title, author),
    };

    success!("'{}' added to the catalog", item.title());
    registry.add_item(item);
    Ok(())
}

/// The borrowing limit must be positive; zero would make the pool
/// permanently unlendable.
fn read_capacity(term: &Term) -> Result<usize> {
    loop {
        let capacity: usize = prompt::read_parsed(term, "Borrowing limit")?;
        if capacity >= 1 {
            return Ok(capacity);
        }
        warn!("The borrowing limit must be at least 1");
    }
}

fn register_user(term: &Term, registry: &mut Registry) -> Result<()> {
    let name = prompt::read_required(term, "Name")?;

    registry.register_user(name.as_str());
    success!("'{}' is registered and may borrow items", name);
    Ok(())
}

fn borrow_item(term: &Term, registry: &mut Registry) -> Result<()> {
    let user = prompt::read_required(term, "Your name")?;
    let title = prompt::read_required(term, "Title to borrow")?;

    match registry.borrow_item(&user, &title) {
        Ok(()) => success!("'{}' checked out to '{}'", title, user),
        Err(err) => report(err),
    }
    Ok(())
}

fn return_item(term: &Term, registry: &mut Registry) -> Result<()> {
    let user = prompt::read_required(term, "Your name")?;
    let title = prompt::read_required(term, "Title to return")?;

    match registry.return_item(&user, &title) {
        Ok(()) => success!("'{}' returned by '{}'", title, user),
        Err(err) => report(err),
    }
    Ok(())
}

fn list_catalog(registry: &Registry, cfg: &Config) {
    print::header("catalog", cfg.quiet);

    let items = registry.items_by_title();
    if items.is_empty() {
        print::centerln("The catalog is empty.");
        return;
    }

    if cfg.quiet >= 2 {
        info!(
            "{} items, {} users",
            registry.item_count(),
            registry.user_count()
        );
        return;
    }

    for (idx, item) in items.iter().enumerate() {
        print::tree_head(idx, item.title());
        print::as_tree_one_level(format::item_details(item));
    }
}

fn report(err: CirculationError) {
    warn!("{}", err);
}
