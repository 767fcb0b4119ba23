//! Combinators and combined selector trees
//!
//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use super::{Selector, Specificity};
use crate::error::{SelectorError, SelectorResult};

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// `Display` and `FromStr` use the bare symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    #[strum(to_string = " ")]
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    #[strum(to_string = ">")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    #[strum(to_string = "+")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    #[strum(to_string = "~")]
    SubsequentSibling,
}

impl Combinator {
    /// Parse a combinator symbol. Only the bare symbols ` `, `>`, `+` and `~`
    /// are accepted; padded forms such as `" + "` are rejected.
    ///
    /// # Errors
    ///
    /// [`SelectorError::InvalidCombinator`] for any other input.
    pub fn from_symbol(symbol: &str) -> SelectorResult<Self> {
        Self::from_str(symbol).map_err(|_| SelectorError::InvalidCombinator {
            symbol: symbol.to_string(),
        })
    }
}

/// Two selectors joined by a combinator.
///
/// Either side may itself be combined, which gives arbitrarily deep trees.
/// Renders as `left + " " + symbol + " " + right`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CombinedSelector {
    /// Selector on the left of the combinator.
    pub left: SelectorHandle,
    /// The relationship between the two sides.
    pub combinator: Combinator,
    /// Selector on the right of the combinator.
    pub right: SelectorHandle,
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.combinator, self.right)
    }
}

/// Anything that can be stringified or combined further: a compound selector
/// or a combinator tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectorHandle {
    /// A single compound selector.
    Compound(Selector),
    /// A combinator node.
    Combined(Box<CombinedSelector>),
}

impl SelectorHandle {
    /// Join `self` and `right` with a known combinator.
    #[must_use]
    pub fn combine(self, combinator: Combinator, right: impl Into<Self>) -> Self {
        Self::Combined(Box::new(CombinedSelector {
            left: self,
            combinator,
            right: right.into(),
        }))
    }

    /// Render the selector string.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// Sum of the specificities of every compound selector in the tree.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        match self {
            Self::Compound(selector) => selector.specificity(),
            Self::Combined(combined) => {
                let left = combined.left.specificity();
                let right = combined.right.specificity();
                Specificity(left.0 + right.0, left.1 + right.1, left.2 + right.2)
            }
        }
    }

    /// Number of compound selectors in the tree.
    #[must_use]
    pub fn compound_count(&self) -> usize {
        match self {
            Self::Compound(_) => 1,
            Self::Combined(combined) => {
                combined.left.compound_count() + combined.right.compound_count()
            }
        }
    }
}

impl fmt::Display for SelectorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(selector) => write!(f, "{selector}"),
            Self::Combined(combined) => write!(f, "{combined}"),
        }
    }
}

impl From<Selector> for SelectorHandle {
    fn from(selector: Selector) -> Self {
        Self::Compound(selector)
    }
}

impl From<CombinedSelector> for SelectorHandle {
    fn from(combined: CombinedSelector) -> Self {
        Self::Combined(Box::new(combined))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::FragmentKind;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_combinator_round_trips_through_its_symbol() {
        for combinator in Combinator::iter() {
            let symbol = combinator.to_string();
            assert_eq!(Combinator::from_symbol(&symbol), Ok(combinator));
        }
    }

    #[test]
    fn test_rejects_padded_and_unknown_symbols() {
        for symbol in ["", "*", " + ", ">>", "  ", "\t"] {
            assert_eq!(
                Combinator::from_symbol(symbol),
                Err(SelectorError::InvalidCombinator {
                    symbol: symbol.to_string()
                })
            );
        }
    }

    #[test]
    fn test_compound_count() {
        let a = SelectorHandle::from(Selector::single(FragmentKind::Element, "a"));
        let b = SelectorHandle::from(Selector::single(FragmentKind::Element, "b"));
        let c = Selector::single(FragmentKind::Element, "c");
        let tree = a.combine(Combinator::Child, b.combine(Combinator::Descendant, c));
        assert_eq!(tree.compound_count(), 3);
        assert_eq!(tree.stringify(), "a > b   c");
    }
}
