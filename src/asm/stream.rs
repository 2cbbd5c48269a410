use std::fmt::{Display, Formatter};

use log::{debug, trace};

use crate::arch::{Condition, Operation, Register, StandardVocabulary, Vocabulary};
use crate::error::AsmError;
use crate::result::Result;

use super::instruction::{Instruction, Modifiers};
use super::operand::{Memory, Operand, Operand2};

pub const ENTRY_POINT: &str = "_start";

/**
 * An ordered log of assembly source lines.
 *
 * Every call appends one or more finished lines; nothing already in the
 * stream is ever revisited.  `text` joins the lines (with a final newline)
 * and can be called at any time, `clear` empties the stream.
 *
 * Operations with a fallback (`BL`, `BX`) are checked against the
 * `Vocabulary` given at construction.
 */
pub struct Asm {
    lines: Vec<String>,
    vocabulary: Box<dyn Vocabulary>,
}

impl Default for Asm {
    fn default() -> Self {
        Asm::new()
    }
}

impl std::fmt::Debug for Asm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Asm").field("lines", &self.lines).finish()
    }
}

impl Asm {
    pub fn new() -> Asm {
        Asm::with_vocabulary(Box::new(StandardVocabulary))
    }

    pub fn with_vocabulary(vocabulary: Box<dyn Vocabulary>) -> Asm {
        Asm {
            lines: vec![],
            vocabulary,
        }
    }

    /// A stream seeded with the text section, the global entry point and
    /// its label.
    pub fn initial() -> Asm {
        let mut asm = Asm::new();
        asm.prologue();
        asm
    }

    /// Appends `.section .text`, `.global _start` and `_start:`.
    pub fn prologue(&mut self) -> &mut Self {
        self.directive(".section .text");
        self.global(ENTRY_POINT);
        self.push_line(format!("{}:", ENTRY_POINT));
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn push_line(&mut self, line: String) {
        trace!("asm[{}]: {}", self.lines.len(), line);
        self.lines.push(line);
    }

    /*
     * Low level emission
     */
    pub fn emit(&mut self, inst: Instruction) -> &mut Self {
        self.push_line(inst.to_string());
        self
    }

    pub fn op(&mut self, op: Operation, operands: Vec<Operand>, modifiers: Modifiers) -> &mut Self {
        self.emit(Instruction::new(op, operands).with_modifiers(modifiers))
    }

    pub fn label(&mut self, name: &str) -> Result<&mut Self> {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(AsmError::InvalidLabel(name.into()));
        }
        self.push_line(format!("{}:", name));
        Ok(self)
    }

    pub fn directive(&mut self, text: &str) -> &mut Self {
        self.push_line(text.into());
        self
    }

    pub fn comment(&mut self, text: &str) -> &mut Self {
        self.push_line(format!("# {}", text));
        self
    }

    pub fn global(&mut self, name: &str) -> &mut Self {
        self.push_line(format!(".global {}", name));
        self
    }

    /*
     * Data movement and data processing
     */
    pub fn mov<S: Into<Operand2>>(&mut self, rd: Register, src: S) -> &mut Self {
        self.mov_with(rd, src, Modifiers::default())
    }

    pub fn mov_with<S: Into<Operand2>>(&mut self, rd: Register, src: S, m: Modifiers) -> &mut Self {
        let src: Operand2 = src.into();
        self.op(Operation::Mov, vec![rd.into(), src.into()], m)
    }

    pub fn add<S: Into<Operand2>>(&mut self, rd: Register, rn: Register, op2: S) -> &mut Self {
        self.dataproc(Operation::Add, rd, rn, op2.into(), Modifiers::default())
    }

    pub fn add_with<S: Into<Operand2>>(
        &mut self,
        rd: Register,
        rn: Register,
        op2: S,
        m: Modifiers,
    ) -> &mut Self {
        self.dataproc(Operation::Add, rd, rn, op2.into(), m)
    }

    pub fn sub<S: Into<Operand2>>(&mut self, rd: Register, rn: Register, op2: S) -> &mut Self {
        self.dataproc(Operation::Sub, rd, rn, op2.into(), Modifiers::default())
    }

    pub fn sub_with<S: Into<Operand2>>(
        &mut self,
        rd: Register,
        rn: Register,
        op2: S,
        m: Modifiers,
    ) -> &mut Self {
        self.dataproc(Operation::Sub, rd, rn, op2.into(), m)
    }

    pub fn and<S: Into<Operand2>>(&mut self, rd: Register, rn: Register, op2: S) -> &mut Self {
        self.dataproc(Operation::And, rd, rn, op2.into(), Modifiers::default())
    }

    pub fn and_with<S: Into<Operand2>>(
        &mut self,
        rd: Register,
        rn: Register,
        op2: S,
        m: Modifiers,
    ) -> &mut Self {
        self.dataproc(Operation::And, rd, rn, op2.into(), m)
    }

    pub fn orr<S: Into<Operand2>>(&mut self, rd: Register, rn: Register, op2: S) -> &mut Self {
        self.dataproc(Operation::Orr, rd, rn, op2.into(), Modifiers::default())
    }

    pub fn orr_with<S: Into<Operand2>>(
        &mut self,
        rd: Register,
        rn: Register,
        op2: S,
        m: Modifiers,
    ) -> &mut Self {
        self.dataproc(Operation::Orr, rd, rn, op2.into(), m)
    }

    pub fn eor<S: Into<Operand2>>(&mut self, rd: Register, rn: Register, op2: S) -> &mut Self {
        self.dataproc(Operation::Eor, rd, rn, op2.into(), Modifiers::default())
    }

    pub fn eor_with<S: Into<Operand2>>(
        &mut self,
        rd: Register,
        rn: Register,
        op2: S,
        m: Modifiers,
    ) -> &mut Self {
        self.dataproc(Operation::Eor, rd, rn, op2.into(), m)
    }

    // Shifted register operands keep their condition and flags like any other.
    fn dataproc(
        &mut self,
        op: Operation,
        rd: Register,
        rn: Register,
        op2: Operand2,
        m: Modifiers,
    ) -> &mut Self {
        self.op(op, vec![rd.into(), rn.into(), op2.into()], m)
    }

    /*
     * Loads and stores
     */
    pub fn ldr(&mut self, rd: Register, address: Memory) -> &mut Self {
        self.ldr_with(rd, address, Condition::Al)
    }

    pub fn ldr_with(&mut self, rd: Register, address: Memory, cond: Condition) -> &mut Self {
        self.op(Operation::Ldr, vec![rd.into(), address.into()], cond.into())
    }

    pub fn str(&mut self, rd: Register, address: Memory) -> &mut Self {
        self.str_with(rd, address, Condition::Al)
    }

    pub fn str_with(&mut self, rd: Register, address: Memory, cond: Condition) -> &mut Self {
        self.op(Operation::Str, vec![rd.into(), address.into()], cond.into())
    }

    pub fn strb(&mut self, rd: Register, address: Memory) -> &mut Self {
        self.strb_with(rd, address, Condition::Al)
    }

    pub fn strb_with(&mut self, rd: Register, address: Memory, cond: Condition) -> &mut Self {
        self.op(Operation::Strb, vec![rd.into(), address.into()], cond.into())
    }

    /*
     * Branches
     */
    pub fn b(&mut self, target: &str) -> &mut Self {
        self.b_with(target, Condition::Al)
    }

    pub fn b_with(&mut self, target: &str, cond: Condition) -> &mut Self {
        self.op(Operation::B, vec![target.into()], cond.into())
    }

    pub fn bl(&mut self, target: &str) -> &mut Self {
        self.bl_with(target, Condition::Al)
    }

    pub fn bl_with(&mut self, target: &str, cond: Condition) -> &mut Self {
        let op = self.available_or_branch(Operation::Bl);
        self.op(op, vec![target.into()], cond.into())
    }

    pub fn bx(&mut self, rm: Register) -> &mut Self {
        self.bx_with(rm, Condition::Al)
    }

    pub fn bx_with(&mut self, rm: Register, cond: Condition) -> &mut Self {
        let op = self.available_or_branch(Operation::Bx);
        self.op(op, vec![rm.into()], cond.into())
    }

    fn available_or_branch(&self, op: Operation) -> Operation {
        if self.vocabulary.has_operation(op) {
            op
        } else {
            debug!("{} is not in the vocabulary, falling back to B", op);
            Operation::B
        }
    }

    /*
     * Stack and supervisor calls
     */
    pub fn push(&mut self, regs: &[Register]) -> &mut Self {
        self.push_with(regs, Condition::Al)
    }

    pub fn push_with(&mut self, regs: &[Register], cond: Condition) -> &mut Self {
        self.op(Operation::Push, vec![reglist(regs).into()], cond.into())
    }

    pub fn pop(&mut self, regs: &[Register]) -> &mut Self {
        self.pop_with(regs, Condition::Al)
    }

    pub fn pop_with(&mut self, regs: &[Register], cond: Condition) -> &mut Self {
        self.op(Operation::Pop, vec![reglist(regs).into()], cond.into())
    }

    pub fn svc(&mut self) -> &mut Self {
        self.op(Operation::Svc, vec!["#0".into()], Modifiers::default())
    }

    /*
     * Output
     */
    pub fn text(&self) -> String {
        let mut text = self.lines.join("\n");
        if let Some(last) = self.lines.last() {
            if !last.ends_with('\n') {
                text.push('\n');
            }
        }
        text
    }

    pub fn clear(&mut self) {
        debug!("clearing {} lines", self.lines.len());
        self.lines.clear();
    }
}

impl Display for Asm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}

/// `{R1, R2, ...}`
fn reglist(regs: &[Register]) -> String {
    let names: Vec<_> = regs.iter().map(|r| r.name()).collect();
    format!("{{{}}}", names.join(", "))
}
