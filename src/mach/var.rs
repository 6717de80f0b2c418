use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Register memory
///
/// Four integer registers `a` to `d`, all starting at zero.

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Var {
    regs: [i64; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    A,
    B,
    C,
    D,
}

impl Register {
    pub fn from_str(s: &str) -> Option<Register> {
        match s.to_ascii_lowercase().as_str() {
            "a" => Some(Register::A),
            "b" => Some(Register::B),
            "c" => Some(Register::C),
            "d" => Some(Register::D),
            _ => None,
        }
    }

    /// Register named by a command argument, or a fatal error naming it.
    pub fn from_arg(s: &str) -> Result<Register> {
        match Register::from_str(s) {
            Some(reg) => Ok(reg),
            None => Err(error!(BadArgument; format!(
                "Arg1 not a Valid Register! ({})",
                s.to_ascii_lowercase()
            ))),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Register::*;
        match self {
            A => write!(f, "a"),
            B => write!(f, "b"),
            C => write!(f, "c"),
            D => write!(f, "d"),
        }
    }
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn fetch(&self, reg: Register) -> i64 {
        self.regs[reg.index()]
    }

    pub fn store(&mut self, reg: Register, value: i64) {
        self.regs[reg.index()] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_store_fetch() {
        let mut v = Var::new();
        for (i, name) in ["a", "B", "c", "D"].iter().enumerate() {
            let reg = Register::from_str(name).unwrap();
            assert_eq!(v.fetch(reg), 0);
            v.store(reg, i as i64 - 2);
            assert_eq!(v.fetch(reg), i as i64 - 2);
        }
    }

    #[test]
    fn test_bad_register() {
        let e = Register::from_arg("E").unwrap_err();
        assert_eq!(e.code(), ErrorCode::BadArgument);
        assert_eq!(e.to_string(), "Bad Argument(s): Arg1 not a Valid Register! (e)");
    }
}
