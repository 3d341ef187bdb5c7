//! Errors raised while compiling or running a match plan.
//!
//! Compile errors are properties of the source: they are found once, before
//! any value is matched. Match errors depend on the subject or the
//! environment and surface from [`MatchPlan::execute`].
//!
//! [`MatchPlan::execute`]: crate::MatchPlan::execute

use sere_ir::Span;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("integer literal `{text}` does not fit in 64 bits at {span}")]
    IntegerOutOfRange { text: String, span: Span },

    #[error("malformed literal `{text}` at {span}")]
    MalformedLiteral { text: String, span: Span },

    #[error("formatted string literals cannot be used in patterns at {span}")]
    FormattedString { span: Span },

    #[error("cannot mix bytes and non-bytes literals at {span}")]
    MixedBytes { span: Span },

    /// A case that matches everything is followed by another case.
    #[error("{what} makes remaining patterns unreachable at {span}")]
    Unreachable { what: String, span: Span },

    /// A star pattern outside a sequence pattern.
    #[error("star pattern cannot be used here at {span}")]
    MisplacedStar { span: Span },

    #[error("expression is not a valid literal pattern at {span}")]
    InvalidLiteral { span: Span },
}

impl CompileError {
    pub fn span(&self) -> Span {
        match self {
            CompileError::IntegerOutOfRange { span, .. }
            | CompileError::MalformedLiteral { span, .. }
            | CompileError::FormattedString { span }
            | CompileError::MixedBytes { span }
            | CompileError::Unreachable { span, .. }
            | CompileError::MisplacedStar { span }
            | CompileError::InvalidLiteral { span } => *span,
        }
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MatchError {
    /// A value pattern names something the environment cannot resolve.
    #[error("name `{0}` is not defined")]
    UndefinedName(String),

    /// A class pattern names something that is not a class.
    #[error("called match pattern must be a class, found `{0}`")]
    NotAClass(String),

    #[error("{class}() accepts {accepted} positional sub-pattern(s) ({given} given)")]
    TooManyPositional {
        class: String,
        accepted: usize,
        given: usize,
    },

    #[error("{class}() got multiple sub-patterns for attribute `{attr}`")]
    DuplicateAttribute { class: String, attr: String },

    #[error("mapping pattern checks duplicate key ({0})")]
    DuplicateKey(String),

    /// The guard evaluator failed.
    #[error("guard evaluation failed: {0}")]
    Guard(String),
}
