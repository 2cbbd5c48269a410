pub mod error;
pub mod result;

pub mod arch;
pub mod asm;
pub mod cli;
pub mod config;
pub mod programs;
pub mod syscall;

pub use arch::{Condition, Operation, Register, Vocabulary};
pub use asm::{Asm, Instruction, Memory, Modifiers, Operand};
pub use cli::*;
pub use error::AsmError;
