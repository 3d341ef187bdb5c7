//! Parse context flags for context-sensitive parsing.

/// Context flags for parsing.
///
/// Multiple flags can be combined with [`ParseContext::with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseContext(u16);

impl ParseContext {
    /// No special context.
    pub const NONE: Self = Self(0);

    /// Conditional expressions (`a if b else c`) are not allowed.
    ///
    /// Set for comprehension `if` clauses, where a trailing `if` starts the
    /// next clause, and inherited by lambda bodies parsed there.
    pub const NO_CONDITIONAL: Self = Self(1 << 0);

    #[inline]
    pub const fn new() -> Self {
        Self::NONE
    }

    /// Check if a flag is set.
    #[inline]
    pub const fn has(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    /// Add a flag to the context.
    #[inline]
    #[must_use]
    pub const fn with(self, flag: Self) -> Self {
        Self(self.0 | flag.0)
    }

    /// Remove a flag from the context.
    #[inline]
    #[must_use]
    pub const fn without(self, flag: Self) -> Self {
        Self(self.0 & !flag.0)
    }
}
