/// ## One line of program text, split for execution
///
/// Lines are split on single spaces with no quoting, so repeated spaces
/// produce empty arguments.

#[derive(Debug, PartialEq)]
pub enum Line<'a> {
    Blank,
    Label(&'a str),
    Statement { command: &'a str, args: Vec<&'a str> },
}

impl<'a> Line<'a> {
    pub fn new(s: &'a str) -> Line<'a> {
        if s.is_empty() {
            return Line::Blank;
        }
        if let Some(name) = s.strip_prefix(':') {
            return Line::Label(name);
        }
        let mut tokens = s.split(' ');
        let command = tokens.next().unwrap_or_default();
        Line::Statement {
            command,
            args: tokens.collect(),
        }
    }

    /// Label name defined by this line. A bare `:` defines nothing.
    pub fn label(&self) -> Option<&'a str> {
        match self {
            Line::Label(name) if !name.is_empty() => Some(name),
            _ => None,
        }
    }
}
