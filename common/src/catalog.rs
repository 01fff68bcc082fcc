//! # Catalog Models
//!
//! The entities and value objects of the lending domain.
//!
//! ## Core Entities
//! * [`item::Item`]: A lendable catalog entry with its lending policy.
//!
//! ## Value Objects
//! * [`classification::Classification`]: Descriptive category of an item.
//!
//! ## Design Principles
//! * **Rich Models**: Parsing and lending-state transitions live on the
//!   models themselves.
//! * **Encapsulated Policy**: Holder-state mutation is only reachable
//!   through an item's check-out/check-in contract.

pub mod classification;
pub mod item;
