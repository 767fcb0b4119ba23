//! Compound selector model and fluent builder chain
//!
//! A [`Selector`] is one compound selector per
//! [Selectors Level 4 § 4.2](https://www.w3.org/TR/selectors-4/#compound):
//!
//! ```text
//!    element#id.class[attr]:pseudoClass::pseudoElement
//!              \----/\----/\----------/
//!              can repeat
//! ```
//!
//! Fragments are validated as they are appended, so a `Selector` that exists
//! is always in canonical order.

mod combinator;

use std::fmt;

use selkit_common::warning::warn_once;
use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::{SelectorError, SelectorResult};

pub use combinator::{Combinator, CombinedSelector, SelectorHandle};

/// The kind of a single selector fragment.
///
/// Variants are declared in canonical order, so the derived `Ord` is the
/// rank used for order validation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter, Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FragmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Example: `div`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Example: `#main`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Example: `.container`
    Class,

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Example: `[href$=".png"]`
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Example: `:focus`
    PseudoClass,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Example: `::before`
    PseudoElement,
}

impl FragmentKind {
    /// Whether a compound selector may hold more than one fragment of this kind.
    #[must_use]
    pub const fn is_repeatable(self) -> bool {
        matches!(self, Self::Class | Self::Attribute | Self::PseudoClass)
    }

    /// Text written before the fragment value.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    /// Text written after the fragment value.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            _ => "",
        }
    }
}

/// One atomic piece of a compound selector.
///
/// The value is stored exactly as supplied; no escaping is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Fragment {
    /// Which part of the compound selector this is.
    pub kind: FragmentKind,
    /// The raw value, without prefix or brackets.
    pub value: String,
}

impl Fragment {
    fn new(kind: FragmentKind, value: String) -> Self {
        if value.is_empty() {
            warn_once("selector", &format!("empty {kind} value"));
        }
        if kind == FragmentKind::Attribute && value.contains(['[', ']']) {
            warn_once(
                "selector",
                &format!("attribute value '{value}' contains a bracket and is passed through unescaped"),
            );
        }
        Self { kind, value }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.kind.prefix(), self.value, self.kind.suffix())
    }
}

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "A selector's specificity is calculated for a given element as follows:
///  - count the number of ID selectors in the selector (= A)
///  - count the number of class selectors, attributes selectors, and pseudo-classes in the selector (= B)
///  - count the number of type selectors and pseudo-elements in the selector (= C)
///
/// Specificities are compared by comparing the three components in order."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// An ordered, validated sequence of fragments. Every chain method consumes
/// the selector and hands back the extended one, so two chains never share
/// fragment storage.
///
/// ```
/// use selkit_css::SelectorBuilder;
///
/// let builder = SelectorBuilder;
/// let selector = builder.id("main").class("container")?.class("editable")?;
/// assert_eq!(selector.stringify(), "#main.container.editable");
/// # Ok::<(), selkit_css::SelectorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Selector {
    fragments: Vec<Fragment>,
}

impl Selector {
    /// An empty selector that renders as `""`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    /// Start a chain holding exactly one fragment. A single fragment is
    /// always valid, so this cannot fail.
    pub(crate) fn single(kind: FragmentKind, value: impl Into<String>) -> Self {
        Self {
            fragments: vec![Fragment::new(kind, value.into())],
        }
    }

    /// Set the type selector.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateSelectorPart`] if an element is already set,
    /// [`SelectorError::SelectorOrder`] if any other fragment precedes it.
    pub fn element(self, value: impl Into<String>) -> SelectorResult<Self> {
        self.push(FragmentKind::Element, value)
    }

    /// Set the ID selector, rendered with a `#` prefix.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateSelectorPart`] if an id is already set,
    /// [`SelectorError::SelectorOrder`] if a class or later fragment precedes it.
    pub fn id(self, value: impl Into<String>) -> SelectorResult<Self> {
        self.push(FragmentKind::Id, value)
    }

    /// Append a class selector, rendered with a `.` prefix.
    ///
    /// # Errors
    ///
    /// [`SelectorError::SelectorOrder`] if an attribute or later fragment
    /// precedes it.
    pub fn class(self, value: impl Into<String>) -> SelectorResult<Self> {
        self.push(FragmentKind::Class, value)
    }

    /// Append an attribute selector. The value is wrapped in brackets as-is,
    /// so `href$=".png"` renders as `[href$=".png"]`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::SelectorOrder`] if a pseudo-class or pseudo-element
    /// precedes it.
    pub fn attr(self, value: impl Into<String>) -> SelectorResult<Self> {
        self.push(FragmentKind::Attribute, value)
    }

    /// Append a pseudo-class, rendered with a `:` prefix.
    ///
    /// # Errors
    ///
    /// [`SelectorError::SelectorOrder`] if a pseudo-element precedes it.
    pub fn pseudo_class(self, value: impl Into<String>) -> SelectorResult<Self> {
        self.push(FragmentKind::PseudoClass, value)
    }

    /// Set the pseudo-element, rendered with a `::` prefix.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateSelectorPart`] if a pseudo-element is already set.
    pub fn pseudo_element(self, value: impl Into<String>) -> SelectorResult<Self> {
        self.push(FragmentKind::PseudoElement, value)
    }

    /// Append a fragment of any kind, applying the same checks as the named
    /// chain methods.
    ///
    /// Singleton kinds are checked for duplicates before order is checked.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateSelectorPart`] or [`SelectorError::SelectorOrder`].
    pub fn push(mut self, kind: FragmentKind, value: impl Into<String>) -> SelectorResult<Self> {
        if !kind.is_repeatable() && self.contains(kind) {
            return Err(SelectorError::DuplicateSelectorPart { kind });
        }

        if let Some(after) = self.highest_kind().filter(|&after| kind < after) {
            return Err(SelectorError::SelectorOrder {
                attempted: kind,
                after,
            });
        }

        self.fragments.push(Fragment::new(kind, value.into()));
        Ok(self)
    }

    /// The fragments in render order.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Whether no fragment has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Whether a fragment of `kind` is present.
    #[must_use]
    pub fn contains(&self, kind: FragmentKind) -> bool {
        self.fragments.iter().any(|fragment| fragment.kind == kind)
    }

    /// The highest-ranked kind added so far. Fragments are only ever appended
    /// in non-decreasing rank, so this is the last one.
    #[must_use]
    pub fn highest_kind(&self) -> Option<FragmentKind> {
        self.fragments.last().map(|fragment| fragment.kind)
    }

    /// Render the canonical selector string, e.g. `div#main.container.draggable`.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        let mut spec = Specificity::default();

        for fragment in &self.fragments {
            match fragment.kind {
                // "count the number of ID selectors in the selector (= A)"
                FragmentKind::Id => spec.0 += 1,
                // "count the number of class selectors, attributes selectors,
                // and pseudo-classes in the selector (= B)"
                FragmentKind::Class | FragmentKind::Attribute | FragmentKind::PseudoClass => {
                    spec.1 += 1;
                }
                // "count the number of type selectors and pseudo-elements in
                // the selector (= C)"
                FragmentKind::Element | FragmentKind::PseudoElement => spec.2 += 1,
            }
        }

        spec
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            write!(f, "{fragment}")?;
        }
        Ok(())
    }
}
