use std::fmt::{Display, Formatter};

use crate::arch::Register;
use crate::error::AsmError;
use crate::result::Result;

/*
Operand text forms

    #5                immediate
    LSL #2            shift
    [R0]              pre-indexed, no offset
    [R0, #4]          pre-indexed, immediate offset
    [R0, #4]!         pre-indexed with write back
    [R0, R1, LSL #2]  pre-indexed, shifted register offset
    [R0], #4          post-indexed (write back is implied)
    [R0], R1, LSL #2  post-indexed, shifted register offset
    R1, LSL #2        shifted register (flexible second operand)

Single spaces only, operands never carry padding.
*/

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Immediate(pub i32);

impl Immediate {
    pub fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for Immediate {
    fn from(v: i32) -> Self {
        Immediate(v)
    }
}

impl Display for Immediate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShiftKind {
    Lsl,
    Lsr,
    Asr,
    Ror,
}

impl Display for ShiftKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use ShiftKind::*;
        match self {
            Lsl => f.write_str("LSL"),
            Lsr => f.write_str("LSR"),
            Asr => f.write_str("ASR"),
            Ror => f.write_str("ROR"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shift {
    pub kind: ShiftKind,
    pub amount: u32,
}

impl Shift {
    pub fn new(kind: ShiftKind, amount: u32) -> Shift {
        Shift { kind, amount }
    }
}

impl Display for Shift {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} #{}", self.kind, self.amount)
    }
}

pub fn lsl(amount: u32) -> Shift {
    Shift::new(ShiftKind::Lsl, amount)
}

pub fn lsr(amount: u32) -> Shift {
    Shift::new(ShiftKind::Lsr, amount)
}

pub fn asr(amount: u32) -> Shift {
    Shift::new(ShiftKind::Asr, amount)
}

pub fn ror(amount: u32) -> Shift {
    Shift::new(ShiftKind::Ror, amount)
}

/// Offset added to the base register of a memory operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Offset {
    Immediate(i32),
    Register(Register),
}

impl From<i32> for Offset {
    fn from(v: i32) -> Self {
        Offset::Immediate(v)
    }
}

impl From<Register> for Offset {
    fn from(reg: Register) -> Self {
        Offset::Register(reg)
    }
}

impl Display for Offset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Offset::Immediate(v) => write!(f, "#{}", v),
            Offset::Register(reg) => write!(f, "{}", reg),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Indexing {
    Pre,
    Post,
}

impl Default for Indexing {
    fn default() -> Self {
        Indexing::Pre
    }
}

/**
 * A memory addressing expression: a base register, an optional offset
 * (with an optional shift when the offset is a register), the indexing
 * mode and the write back flag.
 *
 * A post-indexed expression always has an offset, the constructors refuse
 * to build one without.  The write back flag is only printed in pre-indexed
 * mode and only when there is an offset; post-indexed addressing always
 * writes back.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Memory {
    base: Register,
    offset: Option<Offset>,
    shift: Option<Shift>,
    indexing: Indexing,
    write_back: bool,
}

impl Memory {
    /// `[base]`
    pub fn new(base: Register) -> Memory {
        Memory {
            base,
            offset: None,
            shift: None,
            indexing: Indexing::Pre,
            write_back: false,
        }
    }

    /// `[base, offset]`
    pub fn offset<O: Into<Offset>>(base: Register, offset: O) -> Memory {
        Memory {
            offset: Some(offset.into()),
            ..Memory::new(base)
        }
    }

    pub fn from_parts(
        base: Register,
        offset: Option<Offset>,
        shift: Option<Shift>,
        indexing: Indexing,
        write_back: bool,
    ) -> Result<Memory> {
        if indexing == Indexing::Post && offset.is_none() {
            return Err(AsmError::Addressing);
        }
        Ok(Memory {
            base,
            offset,
            shift,
            indexing,
            write_back,
        })
    }

    pub fn shifted(self, shift: Shift) -> Memory {
        Memory {
            shift: Some(shift),
            ..self
        }
    }

    pub fn with_write_back(self) -> Memory {
        Memory {
            write_back: true,
            ..self
        }
    }

    /// Switches to post-indexed addressing, which needs an offset.
    pub fn post_indexed(self) -> Result<Memory> {
        Memory::from_parts(self.base, self.offset, self.shift, Indexing::Post, self.write_back)
    }

    pub fn base(&self) -> Register {
        self.base
    }

    pub fn offset_value(&self) -> Option<Offset> {
        self.offset
    }

    pub fn shift(&self) -> Option<Shift> {
        self.shift
    }

    pub fn indexing(&self) -> Indexing {
        self.indexing
    }

    pub fn writes_back(&self) -> bool {
        match self.indexing {
            Indexing::Pre => self.write_back,
            Indexing::Post => true,
        }
    }

    /// Text of the expression, or `AsmError::Addressing` for a
    /// post-indexed expression without an offset.
    pub fn render(&self) -> Result<String> {
        if self.indexing == Indexing::Post && self.offset.is_none() {
            return Err(AsmError::Addressing);
        }
        Ok(self.to_string())
    }

    fn fmt_offset(&self, f: &mut Formatter<'_>, off: &Offset) -> std::fmt::Result {
        write!(f, "{}", off)?;
        if let Some(shift) = &self.shift {
            write!(f, ", {}", shift)?;
        }
        Ok(())
    }
}

impl Display for Memory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.indexing {
            Indexing::Pre => match &self.offset {
                None => write!(f, "[{}]", self.base),
                Some(off) => {
                    write!(f, "[{}, ", self.base)?;
                    self.fmt_offset(f, off)?;
                    f.write_str("]")?;
                    if self.write_back {
                        f.write_str("!")?;
                    }
                    Ok(())
                }
            },
            Indexing::Post => {
                let off = self.offset.as_ref().ok_or(std::fmt::Error)?;
                write!(f, "[{}], ", self.base)?;
                self.fmt_offset(f, off)
            }
        }
    }
}

/// Shorthand for the common memory operands.
pub fn mem<O: Into<Offset>>(base: Register, offset: O) -> Memory {
    Memory::offset(base, offset)
}

/**
 * The flexible second operand of the data processing instructions: an
 * immediate, a register, or a register with a shift applied.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand2 {
    Immediate(Immediate),
    Register(Register),
    Shifted(Register, Shift),
}

impl From<i32> for Operand2 {
    fn from(v: i32) -> Self {
        Operand2::Immediate(Immediate(v))
    }
}

impl From<Immediate> for Operand2 {
    fn from(imm: Immediate) -> Self {
        Operand2::Immediate(imm)
    }
}

impl From<Register> for Operand2 {
    fn from(reg: Register) -> Self {
        Operand2::Register(reg)
    }
}

impl From<(Register, Shift)> for Operand2 {
    fn from((reg, shift): (Register, Shift)) -> Self {
        Operand2::Shifted(reg, shift)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    Register(Register),
    Immediate(Immediate),
    Memory(Memory),
    Shifted(Register, Shift),
    /// Preformatted text: branch targets, register lists.
    Symbol(String),
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Register(reg) => write!(f, "{}", reg),
            Operand::Immediate(imm) => write!(f, "{}", imm),
            Operand::Memory(m) => write!(f, "{}", m),
            Operand::Shifted(reg, shift) => write!(f, "{}, {}", reg, shift),
            Operand::Symbol(s) => f.write_str(s),
        }
    }
}

impl From<Register> for Operand {
    fn from(reg: Register) -> Self {
        Operand::Register(reg)
    }
}

impl From<Immediate> for Operand {
    fn from(imm: Immediate) -> Self {
        Operand::Immediate(imm)
    }
}

impl From<i32> for Operand {
    fn from(v: i32) -> Self {
        Operand::Immediate(Immediate(v))
    }
}

impl From<Memory> for Operand {
    fn from(m: Memory) -> Self {
        Operand::Memory(m)
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::Symbol(s.into())
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::Symbol(s)
    }
}

impl From<Operand2> for Operand {
    fn from(op2: Operand2) -> Self {
        match op2 {
            Operand2::Immediate(imm) => Operand::Immediate(imm),
            Operand2::Register(reg) => Operand::Register(reg),
            Operand2::Shifted(reg, shift) => Operand::Shifted(reg, shift),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch::Register::*;

    #[test]
    fn test_immediate() {
        assert_eq!(Immediate(5).to_string(), "#5");
        assert_eq!(Immediate(0).to_string(), "#0");
        assert_eq!(Immediate(-12).to_string(), "#-12");
        assert_eq!(Immediate(i32::MIN).to_string(), format!("#{}", i32::MIN));
    }

    #[test]
    fn test_immediate_equality_is_by_value() {
        assert_eq!(Immediate(7), Immediate::from(7));
        assert_ne!(Immediate(7), Immediate(8));
    }

    #[test]
    fn test_shift() {
        assert_eq!(lsl(2).to_string(), "LSL #2");
        assert_eq!(lsr(0).to_string(), "LSR #0");
        assert_eq!(asr(31).to_string(), "ASR #31");
        assert_eq!(ror(8).to_string(), "ROR #8");
    }

    #[test]
    fn test_pre_indexed_no_offset() {
        assert_eq!(Memory::new(R0).to_string(), "[R0]");
        assert_eq!(Memory::new(Sp).to_string(), "[SP]");
    }

    #[test]
    fn test_pre_indexed_no_offset_ignores_write_back() {
        let m = Memory::new(R0).with_write_back();
        assert_eq!(m.to_string(), "[R0]");
        let m = Memory::from_parts(R0, None, None, Indexing::Pre, true).unwrap();
        assert_eq!(m.render(), Ok("[R0]".to_string()));
    }

    #[test]
    fn test_pre_indexed_immediate_offset() {
        assert_eq!(mem(R0, 4).to_string(), "[R0, #4]");
        assert_eq!(mem(R0, 4).with_write_back().to_string(), "[R0, #4]!");
        assert_eq!(mem(Sp, -8).to_string(), "[SP, #-8]");
    }

    #[test]
    fn test_pre_indexed_register_offset() {
        assert_eq!(mem(R0, R1).to_string(), "[R0, R1]");
        assert_eq!(mem(R0, R1).shifted(lsl(2)).to_string(), "[R0, R1, LSL #2]");
        assert_eq!(
            mem(R0, R1).shifted(lsl(2)).with_write_back().to_string(),
            "[R0, R1, LSL #2]!"
        );
    }

    #[test]
    fn test_shift_without_offset_is_not_printed() {
        assert_eq!(Memory::new(R2).shifted(asr(1)).to_string(), "[R2]");
    }

    #[test]
    fn test_post_indexed() {
        let m = mem(R0, 4).post_indexed().unwrap();
        assert_eq!(m.to_string(), "[R0], #4");
        let m = mem(R0, R3).shifted(lsr(1)).post_indexed().unwrap();
        assert_eq!(m.to_string(), "[R0], R3, LSR #1");
    }

    #[test]
    fn test_post_indexed_write_back_is_implicit() {
        let m = mem(R0, 4).with_write_back().post_indexed().unwrap();
        assert_eq!(m.to_string(), "[R0], #4");
        assert!(mem(R0, 4).post_indexed().unwrap().writes_back());
    }

    #[test]
    fn test_post_indexed_without_offset_fails() {
        assert_eq!(Memory::new(R0).post_indexed(), Err(AsmError::Addressing));
        assert_eq!(
            Memory::from_parts(R0, None, None, Indexing::Post, false),
            Err(AsmError::Addressing)
        );
        assert_eq!(
            Memory::from_parts(R0, None, Some(lsl(1)), Indexing::Post, true),
            Err(AsmError::Addressing)
        );
    }

    #[test]
    fn test_accessors() {
        let m = mem(R4, R5).shifted(ror(3));
        assert_eq!(m.base(), R4);
        assert_eq!(m.offset_value(), Some(Offset::Register(R5)));
        assert_eq!(m.shift(), Some(ror(3)));
        assert_eq!(m.indexing(), Indexing::Pre);
        assert!(!m.writes_back());
    }

    #[test]
    fn test_operand_text() {
        assert_eq!(Operand::from(R7).to_string(), "R7");
        assert_eq!(Operand::from(42).to_string(), "#42");
        assert_eq!(Operand::from(mem(R1, 0)).to_string(), "[R1, #0]");
        assert_eq!(Operand::Shifted(R1, lsl(3)).to_string(), "R1, LSL #3");
        assert_eq!(Operand::from("loop").to_string(), "loop");
        assert_eq!(Operand::from("{R4, LR}".to_string()).to_string(), "{R4, LR}");
    }

    #[test]
    fn test_operand2_conversion() {
        assert_eq!(Operand::from(Operand2::from(3)), Operand::Immediate(Immediate(3)));
        assert_eq!(Operand::from(Operand2::from(R2)), Operand::Register(R2));
        assert_eq!(
            Operand::from(Operand2::from((R2, lsl(1)))),
            Operand::Shifted(R2, lsl(1))
        );
    }
}
