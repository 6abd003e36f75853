//! Picking one external card when a name matches several.

use super::card::VanillaCard;

/// Chooses among external cards that share a name.
///
/// `candidates` always holds at least two cards, sorted by ascending
/// `dbf_id`. Return the index to use, or `None` to fail the conversion
/// with an ambiguity error.
pub trait AmbiguityPolicy {
    fn choose(&self, name: &str, candidates: &[&VanillaCard]) -> Option<usize>;
}

/// Take the lowest `dbf_id`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMatch;

impl AmbiguityPolicy for FirstMatch {
    fn choose(&self, _name: &str, candidates: &[&VanillaCard]) -> Option<usize> {
        (!candidates.is_empty()).then_some(0)
    }
}

/// Never guess.
#[derive(Clone, Copy, Debug, Default)]
pub struct RejectAmbiguous;

impl AmbiguityPolicy for RejectAmbiguous {
    fn choose(&self, _name: &str, _candidates: &[&VanillaCard]) -> Option<usize> {
        None
    }
}

impl<F> AmbiguityPolicy for F
where
    F: Fn(&str, &[&VanillaCard]) -> Option<usize>,
{
    fn choose(&self, name: &str, candidates: &[&VanillaCard]) -> Option<usize> {
        self(name, candidates)
    }
}

/// Wrap a closure as a policy, pinning its argument types.
pub fn policy_fn<F>(f: F) -> F
where
    F: Fn(&str, &[&VanillaCard]) -> Option<usize>,
{
    f
}
