use crate::error::AsmError;

pub type Result<T> = std::result::Result<T, AsmError>;
