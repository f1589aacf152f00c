//! Relation taxonomy and operator rendering.
//!
//! A relation between two pattern nodes is described by a closed set of
//! kinds plus modifiers (negation, optionality, a numeric argument and a
//! "via" sub-pattern). Rendering produces the operator token of the tree
//! pattern language for a given traversal direction.

use std::fmt::{self, Write};
use std::num::NonZeroU32;

/// Pattern that matches any tree node; default for via sub-patterns.
pub const MATCH_ANY: &str = ".*";

/// Structural relation between two pattern nodes.
///
/// Variants are listed in editor menu order (see [`RelationKind::ALL`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    #[default]
    Descendant,
    DirectDescendant,
    NthChild,
    NthToLastChild,
    Precedes,
    ImmediatelyPrecedes,
    OnlyDescendant,
    UnaryDescendant,
    LeftmostDescendant,
    RightmostDescendant,
    Sibling,
    LeftSibling,
    ImmediateLeftSibling,
    DescendantVia,
    PrecedesVia,
}

impl RelationKind {
    pub const ALL: [RelationKind; 15] = [
        Self::Descendant,
        Self::DirectDescendant,
        Self::NthChild,
        Self::NthToLastChild,
        Self::Precedes,
        Self::ImmediatelyPrecedes,
        Self::OnlyDescendant,
        Self::UnaryDescendant,
        Self::LeftmostDescendant,
        Self::RightmostDescendant,
        Self::Sibling,
        Self::LeftSibling,
        Self::ImmediateLeftSibling,
        Self::DescendantVia,
        Self::PrecedesVia,
    ];

    /// Human-readable name, as shown in relation menus.
    pub fn name(self) -> &'static str {
        match self {
            Self::Descendant => "Descendant of",
            Self::DirectDescendant => "Direct Descendant of",
            Self::NthChild => "Nth child of",
            Self::NthToLastChild => "Nth-to-last child of",
            Self::Precedes => "Precedes",
            Self::ImmediatelyPrecedes => "Immediately Precedes",
            Self::OnlyDescendant => "Only descendant of",
            Self::UnaryDescendant => "Descendant of (via unary tree)",
            Self::LeftmostDescendant => "Left-most Descendant of",
            Self::RightmostDescendant => "Right-most Descendant of",
            Self::Sibling => "Sibling of",
            Self::LeftSibling => "Left Sibling of",
            Self::ImmediateLeftSibling => "Immediate Left Sibling of",
            Self::DescendantVia => "Descendant via",
            Self::PrecedesVia => "Precedes via",
        }
    }

    /// Uses the numeric argument `n`.
    pub fn has_number_arg(self) -> bool {
        matches!(self, Self::NthChild | Self::NthToLastChild)
    }

    /// Uses the via sub-pattern.
    pub fn has_via_arg(self) -> bool {
        matches!(self, Self::DescendantVia | Self::PrecedesVia)
    }

    pub fn is_directional(self) -> bool {
        matches!(self, Self::LeftmostDescendant | Self::RightmostDescendant)
    }

    pub fn requires_double_symbol(self) -> bool {
        matches!(
            self,
            Self::Descendant | Self::Precedes | Self::UnaryDescendant | Self::Sibling
        )
    }

    pub fn is_only_type(self) -> bool {
        matches!(self, Self::OnlyDescendant | Self::UnaryDescendant)
    }

    pub fn is_precedes_type(self) -> bool {
        matches!(
            self,
            Self::Precedes | Self::ImmediatelyPrecedes | Self::PrecedesVia
        )
    }

    pub fn is_sibling_type(self) -> bool {
        matches!(
            self,
            Self::Sibling | Self::LeftSibling | Self::ImmediateLeftSibling
        )
    }

    pub fn is_descendant_type(self) -> bool {
        matches!(
            self,
            Self::Descendant
                | Self::DirectDescendant
                | Self::NthChild
                | Self::NthToLastChild
                | Self::OnlyDescendant
                | Self::UnaryDescendant
                | Self::LeftmostDescendant
                | Self::RightmostDescendant
                | Self::DescendantVia
        )
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A relation kind together with its modifiers.
///
/// Plain value type: reversing a relation clones the descriptor instead of
/// sharing it, so edits on the new relation never reach the old one.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RelationDescriptor {
    kind: RelationKind,
    negative: bool,
    optional: bool,
    n: NonZeroU32,
    via: String,
}

impl Default for RelationDescriptor {
    fn default() -> Self {
        Self::new(RelationKind::default())
    }
}

impl RelationDescriptor {
    pub fn new(kind: RelationKind) -> Self {
        Self {
            kind,
            negative: false,
            optional: false,
            n: NonZeroU32::MIN,
            via: MATCH_ANY.to_owned(),
        }
    }

    pub fn kind(&self) -> RelationKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: RelationKind) {
        self.kind = kind;
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn set_negative(&mut self, negative: bool) {
        self.negative = negative;
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn set_optional(&mut self, optional: bool) {
        self.optional = optional;
    }

    pub fn n(&self) -> u32 {
        self.n.get()
    }

    /// Set the child index for nth-child kinds.
    ///
    /// Values below 1 are ignored and the previous value is kept.
    pub fn set_n(&mut self, n: i64) {
        if let Some(n) = u32::try_from(n).ok().and_then(NonZeroU32::new) {
            self.n = n;
        }
    }

    pub fn via_pattern(&self) -> &str {
        &self.via
    }

    pub fn set_via_pattern(&mut self, via: impl Into<String>) {
        self.via = via.into();
    }

    /// Builder-style kind override.
    pub fn with_kind(mut self, kind: RelationKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn negative(mut self, value: bool) -> Self {
        self.negative = value;
        self
    }

    pub fn optional(mut self, value: bool) -> Self {
        self.optional = value;
        self
    }

    pub fn with_n(mut self, n: i64) -> Self {
        self.set_n(n);
        self
    }

    pub fn with_via(mut self, via: impl Into<String>) -> Self {
        self.via = via.into();
        self
    }

    /// Render the operator token.
    ///
    /// `reverse` is set when the relation is traversed from its target side
    /// back to its source side. Modifiers come out as `!?TOKEN`.
    pub fn render(&self, reverse: bool) -> String {
        let mut out = String::new();
        self.write_operator(&mut out, reverse)
            .expect("String write never fails");
        out
    }

    pub fn write_operator(&self, w: &mut impl Write, reverse: bool) -> fmt::Result {
        if self.negative {
            w.write_char('!')?;
        }
        if self.optional {
            w.write_char('?')?;
        }
        self.write_token(w, reverse)
    }

    /// Operator token without negation or optionality markers.
    fn write_token(&self, w: &mut impl Write, reverse: bool) -> fmt::Result {
        let pick = |forward: &'static str, backward: &'static str| {
            if reverse { backward } else { forward }
        };

        match self.kind {
            RelationKind::Descendant => w.write_str(pick(">>", "<<")),
            RelationKind::DirectDescendant => w.write_str(pick(">", "<")),
            RelationKind::NthChild => {
                w.write_str(pick(">", "<"))?;
                if self.n == NonZeroU32::MIN {
                    w.write_char(',')
                } else {
                    write!(w, "{}", self.n)
                }
            }
            RelationKind::NthToLastChild => {
                w.write_str(pick(">-", "<-"))?;
                if self.n == NonZeroU32::MIN {
                    Ok(())
                } else {
                    write!(w, "{}", self.n)
                }
            }
            RelationKind::Precedes => w.write_str(pick("..", ",,")),
            RelationKind::ImmediatelyPrecedes => w.write_str(pick(".", ",")),
            RelationKind::OnlyDescendant => w.write_str(pick(">:", "<:")),
            RelationKind::UnaryDescendant => w.write_str(pick(">>:", "<<:")),
            RelationKind::LeftmostDescendant => w.write_str(pick(">>,", "<<,")),
            RelationKind::RightmostDescendant => w.write_str(pick(">>-", "<<-")),
            RelationKind::Sibling => w.write_char('$'),
            RelationKind::LeftSibling => w.write_str(pick("$..", "$,,")),
            RelationKind::ImmediateLeftSibling => w.write_str(pick("$.", "$,")),
            RelationKind::DescendantVia => write!(w, "{}+({})", pick(">", "<"), self.via),
            RelationKind::PrecedesVia => write!(w, "{}+({})", pick(".", ","), self.via),
        }
    }
}
