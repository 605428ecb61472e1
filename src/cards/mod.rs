//! Card attribute system: the external, data-driven card table.
//!
//! ## Key Types
//!
//! - `CardData`: Descriptive attributes for one rank (name, rarity, power, ...)
//! - `CardCatalog`: Rank → `CardData` lookup
//!
//! The engine works fine without a catalog; supplying one switches deck
//! composition and scoring to the table's contents.

pub mod catalog;
pub mod data;

pub use catalog::CardCatalog;
pub use data::CardData;
