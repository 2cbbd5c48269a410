use thiserror::Error;

/// Contract violations raised while building assembly text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AsmError {
    /// A post-indexed memory operand was requested without an offset.
    #[error("post-indexed addressing requires an offset")]
    Addressing,

    /// Labels must be non-empty and must not contain whitespace.
    #[error("invalid label {0:?}: a label must be a non-empty identifier without spaces")]
    InvalidLabel(String),

    /// Generated programs address their data with 32-bit immediates.
    #[error("text of {0} bytes is too large for a generated program")]
    ProgramTooLarge(usize),
}
