/**
 * Arch contains the vocabulary of the 32-bit ARM target: registers,
 * condition codes, and operations.  Everything in here is identity only,
 * it knows how to print itself and nothing else.
 *
 * Which operations are actually available is decided by the host through
 * the `Vocabulary` trait, so that a host with a partial instruction set
 * can still drive the emitter.
 */
pub mod condition;
pub mod operations;
pub mod registers;

pub use condition::Condition;
pub use operations::{OperationSubset, Operation, StandardVocabulary, Vocabulary};
pub use registers::Register;
