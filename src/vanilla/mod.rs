//! External ("vanilla") deck string support.
//!
//! The external format identifies cards by numeric `dbf_id` from a large
//! third-party catalogue. Conversion matches cards by name, so the
//! catalogue is filtered first and remaining name collisions are settled
//! by an injected `AmbiguityPolicy`.
//!
//! ## Key Types
//!
//! - `VanillaBridge`: `to_vanilla` and `from_vanilla`
//! - `VanillaCatalogue`: the external card database
//! - `DeckstringCodec`: the base64 varint deck string format, swappable
//! - `AmbiguityPolicy`: chooses between same-named external cards

pub mod bridge;
pub mod card;
pub mod catalogue;
pub mod deckstring;
pub mod heroes;
pub mod resolve;

pub use bridge::VanillaBridge;
pub use card::VanillaCard;
pub use catalogue::{filter, FilterOptions, VanillaCatalogue};
pub use deckstring::{Deckstring, DeckstringCodec, DeckstringError, VanillaDeck, VanillaFormat};
pub use heroes::{class_for_hero_id, hero_dbf_id, normalize_class_name};
pub use resolve::{policy_fn, AmbiguityPolicy, FirstMatch, RejectAmbiguous};
