//! Handles into the arena and read-site identifiers.

use std::fmt;

use crate::{Kind, Span};

/// Tagged reference to arena data.
///
/// Copying a handle never copies the data it refers to. A handle is only
/// meaningful for the [`Arena`](crate::Arena) that produced it; after
/// `Arena::clear` it must not be used.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Handle {
    pub kind: Kind,
    pub index: u32,
    pub span: Span,
}

impl Handle {
    #[inline]
    pub const fn new(kind: Kind, index: u32, span: Span) -> Self {
        Handle { kind, index, span }
    }

    /// Handle for a payload-free kind (`Yes`, `No`, `EmptyStack`, `EmptyString`, `Any`).
    #[inline]
    pub const fn unit(kind: Kind, span: Span) -> Self {
        debug_assert!(kind.is_unit());
        Handle {
            kind,
            index: 0,
            span,
        }
    }

    #[inline]
    pub const fn any(span: Span) -> Self {
        Self::unit(Kind::Any, span)
    }

    #[inline]
    pub const fn boolean(value: bool, span: Span) -> Self {
        Self::unit(if value { Kind::Yes } else { Kind::No }, span)
    }

    #[inline]
    pub fn is(self, kind: Kind) -> bool {
        self.kind == kind
    }

    /// Same data, different source location.
    #[inline]
    #[must_use]
    pub const fn with_span(self, span: Span) -> Self {
        Handle { span, ..self }
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}@{:?}", self.kind, self.index, self.span)
    }
}

/// Identity of one lexical read site in the source.
///
/// Symbol lookups, application callees and typed-expression type names each
/// get one at parse time. The evaluator keys its hop-count cache by it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct ReadSite(u32);

impl ReadSite {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        ReadSite(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Handle;
    crate::static_assert_size!(Handle, 16);
}
