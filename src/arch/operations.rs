use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Base operation tags.  The printed mnemonic is the upper case name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operation {
    Mov,
    Mvn,
    Add,
    Adc,
    Sub,
    Sbc,
    Rsb,
    Rsc,
    Mul,
    Mla,
    And,
    Orr,
    Eor,
    Bic,
    Lsl,
    Lsr,
    Asr,
    Ror,
    Rrx,
    Ldr,
    Str,
    Ldrb,
    Strb,
    Ldrh,
    Ldrsh,
    Ldm,
    Stm,
    Svc,
    Nop,
    Swp,
    B,
    Bl,
    Bx,
    Push,
    Pop,
}

impl Operation {
    pub const ALL: [Operation; 35] = [
        Operation::Mov,
        Operation::Mvn,
        Operation::Add,
        Operation::Adc,
        Operation::Sub,
        Operation::Sbc,
        Operation::Rsb,
        Operation::Rsc,
        Operation::Mul,
        Operation::Mla,
        Operation::And,
        Operation::Orr,
        Operation::Eor,
        Operation::Bic,
        Operation::Lsl,
        Operation::Lsr,
        Operation::Asr,
        Operation::Ror,
        Operation::Rrx,
        Operation::Ldr,
        Operation::Str,
        Operation::Ldrb,
        Operation::Strb,
        Operation::Ldrh,
        Operation::Ldrsh,
        Operation::Ldm,
        Operation::Stm,
        Operation::Svc,
        Operation::Nop,
        Operation::Swp,
        Operation::B,
        Operation::Bl,
        Operation::Bx,
        Operation::Push,
        Operation::Pop,
    ];

    pub fn name(self) -> &'static str {
        use Operation::*;
        match self {
            Mov => "MOV",
            Mvn => "MVN",
            Add => "ADD",
            Adc => "ADC",
            Sub => "SUB",
            Sbc => "SBC",
            Rsb => "RSB",
            Rsc => "RSC",
            Mul => "MUL",
            Mla => "MLA",
            And => "AND",
            Orr => "ORR",
            Eor => "EOR",
            Bic => "BIC",
            Lsl => "LSL",
            Lsr => "LSR",
            Asr => "ASR",
            Ror => "ROR",
            Rrx => "RRX",
            Ldr => "LDR",
            Str => "STR",
            Ldrb => "LDRB",
            Strb => "STRB",
            Ldrh => "LDRH",
            Ldrsh => "LDRSH",
            Ldm => "LDM",
            Stm => "STM",
            Svc => "SVC",
            Nop => "NOP",
            Swp => "SWP",
            B => "B",
            Bl => "BL",
            Bx => "BX",
            Push => "PUSH",
            Pop => "POP",
        }
    }

    /**
     * Whether the mnemonic may carry the `S` (set flags) suffix.  The
     * single register and multiple register transfers and the plain, linked,
     * and exchanging branches never do.
     */
    pub fn accepts_set_flags(self) -> bool {
        use Operation::*;
        !matches!(self, Ldr | Str | Ldrb | Strb | Ldm | Stm | B | Bl | Bx)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/**
 * The set of operations a host makes available to the emitter.  The
 * builder consults it for the operations that have a fallback (`BL` and
 * `BX` both degrade to `B`).
 */
pub trait Vocabulary {
    fn has_operation(&self, op: Operation) -> bool;
}

/// Every operation in `Operation::ALL`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardVocabulary;

impl Vocabulary for StandardVocabulary {
    fn has_operation(&self, _op: Operation) -> bool {
        true
    }
}

/// A host supplied vocabulary with only the listed operations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OperationSubset {
    ops: BTreeSet<Operation>,
}

impl OperationSubset {
    pub fn new<I: IntoIterator<Item = Operation>>(ops: I) -> OperationSubset {
        OperationSubset {
            ops: ops.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl Vocabulary for OperationSubset {
    fn has_operation(&self, op: Operation) -> bool {
        self.ops.contains(&op)
    }
}
