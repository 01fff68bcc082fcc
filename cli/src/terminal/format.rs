use circ_common::catalog::item::{Item, LendingPolicy};
use colored::*;

use crate::terminal::colors;

/// One item's key/value rows for the catalog tree display.
pub fn item_details(item: &Item) -> Vec<(String, ColoredString)> {
    let mut details: Vec<(String, ColoredString)> = vec![
        (
            String::from("Class"),
            item.classification().label().color(colors::ACCENT),
        ),
        (
            String::from("Author"),
            item.author().color(colors::TEXT_DEFAULT),
        ),
        (String::from("Status"), availability(item)),
    ];

    if let Some(holders) = holders_detail(item) {
        details.push(holders);
    }

    details
}

fn availability(item: &Item) -> ColoredString {
    match item.policy() {
        LendingPolicy::SingleHolder { holder: None } => "available".color(colors::AVAILABLE),
        LendingPolicy::SingleHolder { holder: Some(_) } => "on loan".color(colors::ON_LOAN),
        LendingPolicy::LimitedPool { capacity, holders } => {
            let summary = format!("{} of {} slots in use", holders.len(), capacity);
            if holders.len() < *capacity {
                summary.color(colors::AVAILABLE)
            } else {
                summary.color(colors::ON_LOAN)
            }
        }
    }
}

fn holders_detail(item: &Item) -> Option<(String, ColoredString)> {
    match item.policy() {
        LendingPolicy::SingleHolder { holder: Some(name) } => {
            Some((String::from("Holder"), name.normal()))
        }
        LendingPolicy::LimitedPool { holders, .. } if !holders.is_empty() => {
            Some((String::from("Holders"), holders.join(", ").normal()))
        }
        _ => None,
    }
}
