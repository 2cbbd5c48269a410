use serde::{Deserialize, Serialize};

/// Condition code suffix.  `Al` is the default and prints as nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Condition {
    Al,
    Eq,
    Ne,
    Cs,
    Cc,
    Mi,
    Pl,
    Vs,
    Vc,
    Hi,
    Ls,
    Ge,
    Lt,
    Gt,
    Le,
}

impl Default for Condition {
    fn default() -> Self {
        Condition::Al
    }
}

impl Condition {
    pub fn suffix(self) -> &'static str {
        use Condition::*;
        match self {
            Al => "",
            Eq => "EQ",
            Ne => "NE",
            Cs => "CS",
            Cc => "CC",
            Mi => "MI",
            Pl => "PL",
            Vs => "VS",
            Vc => "VC",
            Hi => "HI",
            Ls => "LS",
            Ge => "GE",
            Lt => "LT",
            Gt => "GT",
            Le => "LE",
        }
    }

    /// The condition that holds exactly when `self` does not.  `Al` has none.
    pub fn invert(self) -> Option<Condition> {
        use Condition::*;
        let inv = match self {
            Al => return None,
            Eq => Ne,
            Ne => Eq,
            Cs => Cc,
            Cc => Cs,
            Mi => Pl,
            Pl => Mi,
            Vs => Vc,
            Vc => Vs,
            Hi => Ls,
            Ls => Hi,
            Ge => Lt,
            Lt => Ge,
            Gt => Le,
            Le => Gt,
        };
        Some(inv)
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_is_empty() {
        assert_eq!(Condition::Al.to_string(), "");
        assert_eq!(Condition::default(), Condition::Al);
    }

    #[test]
    fn test_two_letter_suffixes() {
        assert_eq!(Condition::Eq.to_string(), "EQ");
        assert_eq!(Condition::Cs.to_string(), "CS");
        assert_eq!(Condition::Le.to_string(), "LE");
    }

    #[test]
    fn test_invert() {
        assert_eq!(Condition::Eq.invert(), Some(Condition::Ne));
        assert_eq!(Condition::Hi.invert(), Some(Condition::Ls));
        assert_eq!(Condition::Gt.invert(), Some(Condition::Le));
        assert_eq!(Condition::Al.invert(), None);
    }

    #[test]
    fn test_invert_is_an_involution() {
        use Condition::*;
        for c in [Eq, Ne, Cs, Cc, Mi, Pl, Vs, Vc, Hi, Ls, Ge, Lt, Gt, Le].iter() {
            assert_eq!(c.invert().and_then(Condition::invert), Some(*c));
        }
    }
}
