use serde::{Deserialize, Serialize};

/**
 * The sixteen registers visible to user mode code.  R13 to R15 are always
 * printed with their aliases (SP, LR, PC).
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Register {
    R0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
    R9,
    R10,
    R11,
    R12,
    #[serde(alias = "R13")]
    Sp,
    #[serde(alias = "R14")]
    Lr,
    #[serde(alias = "R15")]
    Pc,
}

impl Register {
    pub const ALL: [Register; 16] = [
        Register::R0,
        Register::R1,
        Register::R2,
        Register::R3,
        Register::R4,
        Register::R5,
        Register::R6,
        Register::R7,
        Register::R8,
        Register::R9,
        Register::R10,
        Register::R11,
        Register::R12,
        Register::Sp,
        Register::Lr,
        Register::Pc,
    ];

    /// Looks up a register by its number, 13 to 15 give the aliased registers.
    pub fn from_index(idx: u8) -> Option<Register> {
        Self::ALL.get(idx as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        use Register::*;
        match self {
            R0 => "R0",
            R1 => "R1",
            R2 => "R2",
            R3 => "R3",
            R4 => "R4",
            R5 => "R5",
            R6 => "R6",
            R7 => "R7",
            R8 => "R8",
            R9 => "R9",
            R10 => "R10",
            R11 => "R11",
            R12 => "R12",
            Sp => "SP",
            Lr => "LR",
            Pc => "PC",
        }
    }
}

impl std::fmt::Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_purpose_names() {
        assert_eq!(Register::R0.to_string(), "R0");
        assert_eq!(Register::R7.to_string(), "R7");
        assert_eq!(Register::R12.to_string(), "R12");
    }

    #[test]
    fn test_special_registers_use_aliases() {
        assert_eq!(Register::Sp.to_string(), "SP");
        assert_eq!(Register::Lr.to_string(), "LR");
        assert_eq!(Register::Pc.to_string(), "PC");
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Register::from_index(0), Some(Register::R0));
        assert_eq!(Register::from_index(13), Some(Register::Sp));
        assert_eq!(Register::from_index(15), Some(Register::Pc));
        assert_eq!(Register::from_index(16), None);
    }

    #[test]
    fn test_index_round_trips() {
        for (i, reg) in Register::ALL.iter().enumerate() {
            assert_eq!(reg.index() as usize, i);
        }
    }
}
