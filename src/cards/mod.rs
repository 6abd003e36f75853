//! Card catalogue: definitions and registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions (persisted in deck codes)
//! - `CardDefinition`: Static card data (classes, rarity, runes)
//! - `CardRegistry`: Card definition lookup by id or name
//!
//! The catalogue is populated externally and only read by the codecs.

pub mod definition;
pub mod registry;

pub use definition::{CardDefinition, CardId, Rarity};
pub use registry::{CardRegistry, CatalogueError};
