//! Copy definitions: run-length encoded copy counts.
//!
//! Cards in a deck code are listed once each, sorted by copy count. The
//! copy definition says how many copies each run of cards has:
//! `1:8,2` means "the next 8 cards have 1 copy, the rest have 2".
//! The last run never states its length.

use super::cursor::{Cursor, ParseError};

/// Largest copy count a run may carry, whatever the deck rules say.
pub const MAX_COPIES: u32 = 255;

/// One run of cards sharing a copy count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopyRun {
    pub copies: u32,
    /// Number of cards in the run. `None` for the final run, which takes
    /// whatever cards remain.
    pub len: Option<usize>,
}

/// Error assigning copy counts to a card list.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AssignError {
    #[error("copy run needs {needed} cards but only {available} remain")]
    RunTooLong { needed: usize, available: usize },

    #[error("final copy run has no cards")]
    EmptyFinalRun,

    #[error("copy count must be at least 1")]
    ZeroCopies,

    #[error("copy count {copies} exceeds the maximum of {max}")]
    TooManyCopies { copies: u32, max: u32 },
}

/// A parsed or built copy definition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CopyDefinition {
    runs: Vec<CopyRun>,
}

impl CopyDefinition {
    /// Build from copy counts sorted ascending, one count per distinct card.
    ///
    /// ```
    /// use ccg_deckcode::deckcode::CopyDefinition;
    ///
    /// let def = CopyDefinition::from_sorted_counts([1, 1, 1, 2, 2]);
    /// assert_eq!(def.to_string(), "1:3,2");
    ///
    /// let singles = CopyDefinition::from_sorted_counts([1, 1, 1]);
    /// assert_eq!(singles.to_string(), "1");
    /// ```
    pub fn from_sorted_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let mut runs: Vec<CopyRun> = Vec::new();
        for copies in counts {
            match runs.last_mut() {
                Some(run) if run.copies == copies => {
                    run.len = run.len.map(|n| n + 1);
                }
                _ => runs.push(CopyRun {
                    copies,
                    len: Some(1),
                }),
            }
        }
        if let Some(last) = runs.last_mut() {
            last.len = None;
        }
        Self { runs }
    }

    /// Parse `group *("," group)` at the cursor, where only the final group
    /// omits its `:length`.
    pub fn parse(cur: &mut Cursor<'_>) -> Result<Self, ParseError> {
        let mut runs = Vec::new();
        loop {
            let copies = cur.number("copy count")?;
            if cur.eat(':') {
                let len = cur.number("run length")?;
                cur.expect(',', "',' after run length")?;
                runs.push(CopyRun {
                    copies,
                    len: Some(len as usize),
                });
            } else {
                runs.push(CopyRun { copies, len: None });
                return Ok(Self { runs });
            }
        }
    }

    /// The runs in order.
    #[must_use]
    pub fn runs(&self) -> &[CopyRun] {
        &self.runs
    }

    /// Pair each item with its copy count.
    pub fn assign<T: Copy>(&self, items: &[T]) -> Result<Vec<(T, u32)>, AssignError> {
        let mut out = Vec::with_capacity(items.len());
        let mut rest = items;

        for run in &self.runs {
            if run.copies == 0 {
                return Err(AssignError::ZeroCopies);
            }
            if run.copies > MAX_COPIES {
                return Err(AssignError::TooManyCopies {
                    copies: run.copies,
                    max: MAX_COPIES,
                });
            }

            let take = match run.len {
                Some(n) if n > rest.len() => {
                    return Err(AssignError::RunTooLong {
                        needed: n,
                        available: rest.len(),
                    })
                }
                Some(n) => n,
                None if rest.is_empty() => return Err(AssignError::EmptyFinalRun),
                None => rest.len(),
            };

            let (head, tail) = rest.split_at(take);
            out.extend(head.iter().map(|&item| (item, run.copies)));
            rest = tail;
        }

        Ok(out)
    }
}

impl std::fmt::Display for CopyDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for run in &self.runs {
            match run.len {
                Some(len) => write!(f, "{}:{},", run.copies, len)?,
                None => write!(f, "{}", run.copies)?,
            }
        }
        Ok(())
    }
}
