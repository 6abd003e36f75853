//! The deck code format.
//!
//! A deck code looks like `Death Knight [3B] /1:8,2/ 5o,66,5f,...`:
//! the hero class, an optional rune block, a copy definition between
//! slashes, and the distinct card IDs in base 36.
//!
//! ## Key Types
//!
//! - `DeckCodec`: `export` (deck to code) and `import` (code to deck)
//! - `CopyDefinition`: run-length encoded copy counts
//! - `DeckCodeParser`: incremental parser over a position-tracked `Cursor`

pub mod base36;
pub mod codec;
pub mod copies;
pub mod cursor;
pub mod parser;

pub(crate) use codec::compose;
pub use codec::{DeckCodec, Export, Import, ImportWarning};
pub use copies::{AssignError, CopyDefinition, CopyRun, MAX_COPIES};
pub use cursor::{Cursor, ParseError};
pub use parser::{parse, DeckCodeParser, ParsedCode};
