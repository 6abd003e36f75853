//! Deck code parser.
//!
//! Grammar:
//!
//! ```text
//! deckcode  = heroclass SP [runeblock SP] "/" copydef "/" SP idlist
//! runeblock = "[" (3LETTER / "3" LETTER) "]"
//! copydef   = group *("," group)
//! group     = 1*DIGIT [":" 1*DIGIT]
//! idlist    = base36id *("," base36id)
//! ```
//!
//! The parser is incremental so callers can validate each section before
//! the next one is read.

use tracing::trace;

use crate::cards::CardId;
use crate::deck::ValidationError;
use crate::runes::{decode_block, Runes};

use super::base36;
use super::copies::CopyDefinition;
use super::cursor::{Cursor, ParseError};

/// Reads a deck code section by section.
#[derive(Clone, Debug)]
pub struct DeckCodeParser<'a> {
    cur: Cursor<'a>,
}

impl<'a> DeckCodeParser<'a> {
    #[must_use]
    pub fn new(code: &'a str) -> Self {
        Self {
            cur: Cursor::new(code.trim_start()),
        }
    }

    /// Read the hero class: everything up to the first `" ["` or `" /"`.
    pub fn hero(&mut self) -> &'a str {
        let rest = self.cur.rest();
        let end = [" [", " /"]
            .iter()
            .filter_map(|&delim| rest.find(delim))
            .min()
            .unwrap_or(rest.len());

        self.cur.advance(end);
        self.cur.eat(' ');
        rest[..end].trim()
    }

    /// Read a rune block followed by a space, if one is present.
    pub fn runes(&mut self) -> Option<Runes> {
        let rest = self.cur.rest();
        let (runes, used) = decode_block(rest)?;
        if !rest[used..].starts_with(' ') {
            return None;
        }
        self.cur.advance(used + 1);
        Some(runes)
    }

    /// Read `"/" copydef "/" SP`.
    pub fn copy_definition(&mut self) -> Result<CopyDefinition, ValidationError> {
        read_copy_definition(&mut self.cur)
            .map_err(|err| ValidationError::copy_definition_malformed(err.to_string()))
    }

    /// Read the comma-separated card IDs that make up the rest of the code.
    pub fn card_ids(&mut self) -> Result<Vec<CardId>, ValidationError> {
        let rest = self.cur.rest();
        self.cur.advance(rest.len());

        if rest.trim().is_empty() {
            return Err(ValidationError::empty_deck());
        }

        rest.split(',')
            .map(str::trim)
            .map(|token| {
                base36::decode(token)
                    .ok_or_else(|| ValidationError::malformed(format!("invalid card id '{token}'")))
            })
            .collect()
    }
}

fn read_copy_definition(cur: &mut Cursor<'_>) -> Result<CopyDefinition, ParseError> {
    cur.expect('/', "'/' before copy definition")?;
    let def = CopyDefinition::parse(cur)?;
    cur.expect('/', "'/' after copy definition")?;
    cur.expect(' ', "space after copy definition")?;
    Ok(def)
}

/// A structurally parsed deck code. Nothing has been checked against a
/// catalogue or ruleset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedCode {
    pub hero: String,
    pub runes: Option<Runes>,
    pub copies: CopyDefinition,
    pub ids: Vec<CardId>,
}

impl ParsedCode {
    /// Each listed card with its copy count.
    pub fn entries(&self) -> Result<Vec<(CardId, u32)>, ValidationError> {
        self.copies
            .assign(&self.ids)
            .map_err(|err| ValidationError::copy_definition_malformed(err.to_string()))
    }
}

/// Parse a whole deck code without validating it.
pub fn parse(code: &str) -> Result<ParsedCode, ValidationError> {
    let mut parser = DeckCodeParser::new(code);
    let hero = parser.hero().to_string();
    let runes = parser.runes();
    let copies = parser.copy_definition()?;
    let ids = parser.card_ids()?;

    trace!(%hero, cards = ids.len(), "parsed deck code");
    Ok(ParsedCode {
        hero,
        runes,
        copies,
        ids,
    })
}
