use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Integer arithmetic for the register commands

pub struct Operation {}

impl Operation {
    fn overflow() -> Error {
        error!(BadArgument; "Arithmetic Overflow")
    }

    pub fn sum(lhs: i64, rhs: i64) -> Result<i64> {
        lhs.checked_add(rhs).ok_or_else(Operation::overflow)
    }

    pub fn subtract(lhs: i64, rhs: i64) -> Result<i64> {
        lhs.checked_sub(rhs).ok_or_else(Operation::overflow)
    }

    pub fn multiply(lhs: i64, rhs: i64) -> Result<i64> {
        lhs.checked_mul(rhs).ok_or_else(Operation::overflow)
    }

    /// Truncates toward zero.
    pub fn divide(lhs: i64, rhs: i64) -> Result<i64> {
        match lhs.checked_div(rhs) {
            Some(i) => Ok(i),
            None => {
                if rhs == 0 {
                    Err(error!(BadArgument; "Division by Zero"))
                } else {
                    Err(Operation::overflow())
                }
            }
        }
    }

    /// Floor of the square root.
    pub fn sqrt(val: i64) -> Result<i64> {
        if val < 0 {
            return Err(error!(BadArgument; format!(
                "Square Root of Negative Number! ({})",
                val
            )));
        }
        let mut root = (val as f64).sqrt() as i64;
        while root > 0 && root.checked_mul(root).map_or(true, |sq| sq > val) {
            root -= 1;
        }
        while (root + 1).checked_mul(root + 1).map_or(false, |sq| sq <= val) {
            root += 1;
        }
        Ok(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_divide_truncates() {
        assert_eq!(Operation::divide(7, 2).unwrap(), 3);
        assert_eq!(Operation::divide(7, -2).unwrap(), -3);
        assert_eq!(Operation::divide(-7, 2).unwrap(), -3);
    }

    #[test]
    fn test_divide_by_zero() {
        let e = Operation::divide(1, 0).unwrap_err();
        assert_eq!(e.code(), ErrorCode::BadArgument);
        assert_eq!(e.to_string(), "Bad Argument(s): Division by Zero");
    }

    #[test]
    fn test_overflow() {
        assert!(Operation::sum(i64::MAX, 1).is_err());
        assert!(Operation::subtract(i64::MIN, 1).is_err());
        assert!(Operation::multiply(i64::MAX, 2).is_err());
        assert!(Operation::divide(i64::MIN, -1).is_err());
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(Operation::sqrt(0).unwrap(), 0);
        assert_eq!(Operation::sqrt(15).unwrap(), 3);
        assert_eq!(Operation::sqrt(16).unwrap(), 4);
        assert_eq!(Operation::sqrt(i64::MAX).unwrap(), 3_037_000_499);
        assert!(Operation::sqrt(-4).is_err());
    }
}
