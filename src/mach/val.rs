/// ## Runtime values
///
/// Everything is an integer or text. `Val::empty()` stands in for
/// anything that could not be resolved.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Val {
    Integer(i64),
    Text(String),
}

impl Val {
    pub fn empty() -> Val {
        Val::Text(String::new())
    }

    pub fn is_digits(s: &str) -> bool {
        !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
    }

    /// Parses unsigned decimal digits that fit in an `i64`.
    pub fn parse_digits(s: &str) -> Option<i64> {
        if !Val::is_digits(s) {
            return None;
        }
        s.parse::<i64>().ok()
    }

    /// Digits become an `Integer`, or `Text` when they overflow, anything
    /// else is `Text`. Used for literals and for line text read through `#`.
    pub fn from_line(s: &str) -> Val {
        match Val::parse_digits(s) {
            Some(n) => Val::Integer(n),
            None => Val::Text(s.to_string()),
        }
    }

    /// Text contributes its length in characters, never a parsed number.
    pub fn to_integer(&self) -> i64 {
        match self {
            Val::Integer(n) => *n,
            Val::Text(s) => s.chars().count() as i64,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Val::Integer(n) => Some(*n),
            Val::Text(_) => None,
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Integer(n) => write!(f, "{}", n),
            Val::Text(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_coerces_to_length() {
        assert_eq!(Val::Text("xyz".into()).to_integer(), 3);
        assert_eq!(Val::empty().to_integer(), 0);
        assert_eq!(Val::Text("42".into()).to_integer(), 2);
        assert_eq!(Val::Text("héllo".into()).to_integer(), 5);
    }

    #[test]
    fn test_parse_digits() {
        assert_eq!(Val::parse_digits("007"), Some(7));
        assert_eq!(Val::parse_digits("-1"), None);
        assert_eq!(Val::parse_digits(""), None);
        assert_eq!(Val::parse_digits("99999999999999999999"), None);
    }

    #[test]
    fn test_oversized_digits_stay_text() {
        assert_eq!(
            Val::from_line("99999999999999999999"),
            Val::Text("99999999999999999999".into())
        );
        assert_eq!(Val::from_line("0042"), Val::Integer(42));
    }

    #[test]
    fn test_render() {
        assert_eq!(Val::Integer(-3).to_string(), "-3");
        assert_eq!(Val::Text("println a".into()).to_string(), "println a");
    }
}
