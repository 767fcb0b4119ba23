//! Error types for selector building.

use thiserror::Error;

use crate::selector::FragmentKind;

/// Result type alias for selector building.
pub type SelectorResult<T> = Result<T, SelectorError>;

/// Usage errors raised at the builder call that breaks a selector invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// An element, id or pseudo-element was set twice on one chain.
    #[error(
        "element, id and pseudo-element should not occur more than one time inside the selector \
         (duplicate {kind})"
    )]
    DuplicateSelectorPart {
        /// The singleton kind that was repeated.
        kind: FragmentKind,
    },

    /// A fragment was added after one of higher canonical rank.
    #[error(
        "selector parts should be arranged in the following order: element, id, class, \
         attribute, pseudo-class, pseudo-element ({attempted} after {after})"
    )]
    SelectorOrder {
        /// The kind that was being added.
        attempted: FragmentKind,
        /// The higher-ranked kind already on the chain.
        after: FragmentKind,
    },

    /// `combine` received a symbol other than ` `, `+`, `~` or `>`.
    #[error("invalid combinator {symbol:?}: expected one of \" \", \"+\", \"~\", \">\"")]
    InvalidCombinator {
        /// The rejected symbol, verbatim.
        symbol: String,
    },
}
