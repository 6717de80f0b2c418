use crate::error;
use crate::lang::{Error, Line};
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Program text as storage
///
/// A fixed number of lines, each freely rewritable while running.
/// Labels are scanned once when the program is built and never again,
/// so a rewritten label line keeps its old entry.

#[derive(Debug, Clone, Default)]
pub struct Program {
    lines: Vec<String>,
    labels: HashMap<String, usize>,
}

impl Program {
    pub fn new(lines: Vec<String>) -> Program {
        let mut labels = HashMap::new();
        for (index, text) in lines.iter().enumerate() {
            if let Some(name) = Line::new(text).label() {
                labels.insert(name.to_string(), index);
            }
        }
        Program { lines, labels }
    }

    /// Lines end at `\n`, `\r\n` or a lone `\r`.
    pub fn from_source(source: &str) -> Program {
        Program::new(
            source
                .replace("\r\n", "\n")
                .split(|c: char| c == '\n' || c == '\r')
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn set(&mut self, index: i64, text: String) -> Result<()> {
        let index = self.index(index)?;
        self.lines[index] = text;
        Ok(())
    }

    /// Checks an evaluated line number against the program length.
    pub fn index(&self, index: i64) -> Result<usize> {
        if index >= 0 && (index as u64) < self.lines.len() as u64 {
            Ok(index as usize)
        } else {
            Err(error!(BadArgument; format!("Line {} out of range", index)))
        }
    }

    pub fn label(&self, name: &str) -> Option<usize> {
        self.labels.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_last_label_wins() {
        let p = Program::from_source(":top\nprint 1\n:top\n:\n");
        assert_eq!(p.label("top"), Some(2));
        assert_eq!(p.label(""), None);
        assert_eq!(p.len(), 5);
    }

    #[test]
    fn test_crlf() {
        let p = Program::from_source("print 1\r\nprint 2");
        assert_eq!(p.len(), 2);
        assert_eq!(p.get(0), Some("print 1"));
        assert_eq!(p.get(1), Some("print 2"));
    }

    #[test]
    fn test_lone_carriage_return() {
        let p = Program::from_source("print 1\rprint 2\r\n\rprint 3");
        assert_eq!(p.len(), 4);
        assert_eq!(p.get(1), Some("print 2"));
        assert_eq!(p.get(2), Some(""));
        assert_eq!(p.get(3), Some("print 3"));
    }

    #[test]
    fn test_set_out_of_range() {
        let mut p = Program::from_source("a\nb");
        assert!(p.set(1, "c".into()).is_ok());
        assert_eq!(p.get(1), Some("c"));
        assert_eq!(p.set(2, "x".into()).unwrap_err().code(), ErrorCode::BadArgument);
        assert_eq!(p.set(-1, "x".into()).unwrap_err().code(), ErrorCode::BadArgument);
    }

    #[test]
    fn test_labels_are_a_snapshot() {
        let mut p = Program::from_source(":here\nprint 1");
        p.set(0, ":moved".into()).unwrap();
        assert_eq!(p.label("here"), Some(0));
        assert_eq!(p.label("moved"), None);
    }
}
