use std::fmt::{Display, Formatter};

use crate::arch::{Condition, Operation};

use super::operand::Operand;

/// Condition code, flag setting, and trailing comment of one instruction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub cond: Condition,
    pub set_flags: bool,
    pub comment: Option<String>,
}

impl Modifiers {
    pub fn new() -> Modifiers {
        Modifiers::default()
    }

    pub fn cond(mut self, cond: Condition) -> Modifiers {
        self.cond = cond;
        self
    }

    pub fn set_flags(mut self) -> Modifiers {
        self.set_flags = true;
        self
    }

    pub fn comment<S: Into<String>>(mut self, text: S) -> Modifiers {
        self.comment = Some(text.into());
        self
    }
}

impl From<Condition> for Modifiers {
    fn from(cond: Condition) -> Self {
        Modifiers::new().cond(cond)
    }
}

/**
 * One instruction: the operation, its operands, and its modifiers.
 *
 * Prints as `<OP><COND><S> <operands> ; <comment>` with operands joined
 * by `, `.  The `S` only appears when flags are requested and the operation
 * accepts it.  Without operands the comment follows the mnemonic directly
 * (`NOP; text`), and without either the line is just the mnemonic.
 */
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub op: Operation,
    pub operands: Vec<Operand>,
    pub modifiers: Modifiers,
}

impl Instruction {
    pub fn new(op: Operation, operands: Vec<Operand>) -> Instruction {
        Instruction {
            op,
            operands,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Instruction {
        self.modifiers = modifiers;
        self
    }

    pub fn mnemonic(&self) -> String {
        let sfx = if self.modifiers.set_flags && self.op.accepts_set_flags() {
            "S"
        } else {
            ""
        };
        format!("{}{}{}", self.op, self.modifiers.cond, sfx)
    }

    fn operand_list(&self) -> String {
        self.operands
            .iter()
            .map(|o| o.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.mnemonic())?;

        let ops = self.operand_list();
        if !ops.is_empty() {
            write!(f, " {}", ops)?;
        }

        match &self.modifiers.comment {
            Some(comment) if !comment.is_empty() => {
                let pad = if ops.is_empty() { "" } else { " " };
                write!(f, "{}; {}", pad, comment)
            }
            _ => Ok(()),
        }
    }
}
