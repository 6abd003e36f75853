//! Classified deck validation errors.
//!
//! Every failure the codecs can report is a `ValidationError`: a kind,
//! whether the operation still produced a result, and enough context to
//! render a precise message without the codec doing any presentation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{CardDefinition, CardId};

/// What went wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidHero,
    CopyDefinitionMalformed,
    UnknownCardId,
    EmptyDeck,
    TooFewCards,
    TooManyCards,
    TooManyCopies,
    TooManyLegendaryCopies,
    ClassMismatch,
    Uncollectible,
    RuneMismatch,
    /// An external card name matched several entries and the policy
    /// declined to pick one.
    AmbiguousCard,
    /// The code does not follow the grammar outside the copy definition.
    MalformedCode,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            ErrorKind::InvalidHero => "invalid hero class",
            ErrorKind::CopyDefinitionMalformed => "copy definition not found or malformed",
            ErrorKind::UnknownCardId => "card does not exist",
            ErrorKind::EmptyDeck => "deck is empty",
            ErrorKind::TooFewCards => "too few cards in deck",
            ErrorKind::TooManyCards => "too many cards in deck",
            ErrorKind::TooManyCopies => "too many copies of a card",
            ErrorKind::TooManyLegendaryCopies => "too many copies of a legendary card",
            ErrorKind::ClassMismatch => "card from a different class",
            ErrorKind::Uncollectible => "uncollectible card",
            ErrorKind::RuneMismatch => "card does not support the deck's runes",
            ErrorKind::AmbiguousCard => "ambiguous card name",
            ErrorKind::MalformedCode => "malformed deck code",
        };
        f.write_str(msg)
    }
}

/// Details attached to an error. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorContext {
    pub card_name: Option<String>,
    pub card_id: Option<u32>,
    /// Observed amount (cards in deck, copies of a card).
    pub count: Option<usize>,
    /// The limit that was exceeded or not met.
    pub limit: Option<usize>,
    pub hero_class: Option<String>,
    /// Free-form parser detail, e.g. the offending token.
    pub detail: Option<String>,
}

impl ErrorContext {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return Ok(());
        }

        let mut parts = Vec::new();
        if let Some(name) = &self.card_name {
            parts.push(format!("card: {name}"));
        }
        if let Some(id) = self.card_id {
            parts.push(format!("id: {id}"));
        }
        if let Some(count) = self.count {
            parts.push(format!("count: {count}"));
        }
        if let Some(limit) = self.limit {
            parts.push(format!("limit: {limit}"));
        }
        if let Some(hero) = &self.hero_class {
            parts.push(format!("hero: {hero}"));
        }
        if let Some(detail) = &self.detail {
            parts.push(detail.clone());
        }
        write!(f, " ({})", parts.join(", "))
    }
}

/// A classified validation failure.
///
/// `recoverable` errors still come with a result (an exported code or an
/// imported deck); fatal ones abort the operation.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind}{context}")]
pub struct ValidationError {
    pub kind: ErrorKind,
    pub recoverable: bool,
    pub context: ErrorContext,
}

impl ValidationError {
    /// Create a fatal error with no context.
    #[must_use]
    pub fn fatal(kind: ErrorKind) -> Self {
        Self {
            kind,
            recoverable: false,
            context: ErrorContext::default(),
        }
    }

    /// Create a recoverable error with no context.
    #[must_use]
    pub fn recoverable(kind: ErrorKind) -> Self {
        Self {
            kind,
            recoverable: true,
            context: ErrorContext::default(),
        }
    }

    pub fn invalid_hero(hero: impl Into<String>) -> Self {
        Self::fatal(ErrorKind::InvalidHero).with_hero(hero)
    }

    pub fn copy_definition_malformed(detail: impl Into<String>) -> Self {
        Self::fatal(ErrorKind::CopyDefinitionMalformed).with_detail(detail)
    }

    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::fatal(ErrorKind::MalformedCode).with_detail(detail)
    }

    pub fn unknown_card(id: CardId) -> Self {
        Self::fatal(ErrorKind::UnknownCardId).with_card_id(id.raw())
    }

    pub fn empty_deck() -> Self {
        Self::fatal(ErrorKind::EmptyDeck)
    }

    pub fn too_few_cards(count: usize, min: usize) -> Self {
        Self::recoverable(ErrorKind::TooFewCards).with_count(count, min)
    }

    pub fn too_many_cards(count: usize, max: usize) -> Self {
        Self::recoverable(ErrorKind::TooManyCards).with_count(count, max)
    }

    pub fn too_many_copies(card: &CardDefinition, count: usize, max: usize) -> Self {
        Self::recoverable(ErrorKind::TooManyCopies)
            .with_card(card)
            .with_count(count, max)
    }

    pub fn too_many_legendary_copies(card: &CardDefinition, count: usize, max: usize) -> Self {
        Self::recoverable(ErrorKind::TooManyLegendaryCopies)
            .with_card(card)
            .with_count(count, max)
    }

    /// A fatal per-card error (class, collectibility, runes).
    pub fn card(kind: ErrorKind, card: &CardDefinition, hero: impl Into<String>) -> Self {
        Self::fatal(kind).with_card(card).with_hero(hero)
    }

    /// Attach card name and id.
    #[must_use]
    pub fn with_card(mut self, card: &CardDefinition) -> Self {
        self.context.card_name = Some(card.name.clone());
        self.context.card_id = Some(card.id.raw());
        self
    }

    #[must_use]
    pub fn with_card_name(mut self, name: impl Into<String>) -> Self {
        self.context.card_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_card_id(mut self, id: u32) -> Self {
        self.context.card_id = Some(id);
        self
    }

    #[must_use]
    pub fn with_count(mut self, count: usize, limit: usize) -> Self {
        self.context.count = Some(count);
        self.context.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_hero(mut self, hero: impl Into<String>) -> Self {
        self.context.hero_class = Some(hero.into());
        self
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.context.detail = Some(detail.into());
        self
    }

    /// Promote to fatal. Import uses this for deck size errors.
    #[must_use]
    pub fn into_fatal(mut self) -> Self {
        self.recoverable = false;
        self
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        self.recoverable
    }
}
