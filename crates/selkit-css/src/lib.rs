//! Validating CSS selector builder.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element fragments
//!   - Canonical ordering and singleton checks, enforced per call
//!
//! - **Combinators** ([§ 16](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child, next-sibling and subsequent-sibling
//!   - Arbitrarily nested combinator trees
//!
//! - **Specificity** ([§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules))
//!
//! Attribute values are passed through verbatim; nothing is escaped.

/// Selector builder facade.
pub mod builder;
/// Builder usage errors.
pub mod error;
/// Fragment model, compound selectors and combinators.
pub mod selector;

// Re-exports for convenience
pub use builder::SelectorBuilder;
pub use error::{SelectorError, SelectorResult};
pub use selector::{
    Combinator, CombinedSelector, Fragment, FragmentKind, Selector, SelectorHandle, Specificity,
};
