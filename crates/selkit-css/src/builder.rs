//! Entry point for building selectors.

use crate::error::SelectorResult;
use crate::selector::{Combinator, FragmentKind, Selector, SelectorHandle};

/// Facade that starts selector chains.
///
/// Every method returns a brand-new [`Selector`] holding one fragment, so
/// chains started from the same builder are fully independent.
///
/// ```
/// use selkit_css::SelectorBuilder;
///
/// let builder = SelectorBuilder;
/// let selector = builder.combine(builder.element("div"), "+", builder.element("table"))?;
/// assert_eq!(selector.stringify(), "div + table");
/// # Ok::<(), selkit_css::SelectorError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorBuilder;

#[allow(clippy::unused_self)]
impl SelectorBuilder {
    /// Start a chain with a type selector.
    #[must_use]
    pub fn element(&self, value: impl Into<String>) -> Selector {
        Selector::single(FragmentKind::Element, value)
    }

    /// Start a chain with an ID selector.
    #[must_use]
    pub fn id(&self, value: impl Into<String>) -> Selector {
        Selector::single(FragmentKind::Id, value)
    }

    /// Start a chain with a class selector.
    #[must_use]
    pub fn class(&self, value: impl Into<String>) -> Selector {
        Selector::single(FragmentKind::Class, value)
    }

    /// Start a chain with an attribute selector.
    #[must_use]
    pub fn attr(&self, value: impl Into<String>) -> Selector {
        Selector::single(FragmentKind::Attribute, value)
    }

    /// Start a chain with a pseudo-class.
    #[must_use]
    pub fn pseudo_class(&self, value: impl Into<String>) -> Selector {
        Selector::single(FragmentKind::PseudoClass, value)
    }

    /// Start a chain with a pseudo-element.
    #[must_use]
    pub fn pseudo_element(&self, value: impl Into<String>) -> Selector {
        Selector::single(FragmentKind::PseudoElement, value)
    }

    /// Join two selectors with the combinator named by `symbol`.
    ///
    /// Either side may be a compound selector or the result of an earlier
    /// `combine`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::InvalidCombinator`](crate::SelectorError::InvalidCombinator)
    /// if `symbol` is not exactly one of ` `, `+`, `~`, `>`.
    pub fn combine(
        &self,
        left: impl Into<SelectorHandle>,
        symbol: &str,
        right: impl Into<SelectorHandle>,
    ) -> SelectorResult<SelectorHandle> {
        let combinator = Combinator::from_symbol(symbol)?;
        Ok(left.into().combine(combinator, right))
    }
}
