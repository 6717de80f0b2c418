use std::collections::HashMap;

thread_local!(
    static STRING_TO_WORD: HashMap<&'static str, Word> = Word::ALL
        .iter()
        .map(|w| (w.as_str(), *w))
        .collect();
);

/// ## Command words
///
/// The fixed command table. Names are matched case-insensitively.

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Word {
    Print,
    Println,
    Exit,
    Setreg,
    Pushreg,
    Popreg,
    Peekreg,
    Addreg,
    Subreg,
    Mulreg,
    Divreg,
    Sqrtreg,
    Setline,
    Jumpline,
    Inputline,
    Conditional,
}

impl Word {
    pub const ALL: [Word; 16] = [
        Word::Print,
        Word::Println,
        Word::Exit,
        Word::Setreg,
        Word::Pushreg,
        Word::Popreg,
        Word::Peekreg,
        Word::Addreg,
        Word::Subreg,
        Word::Mulreg,
        Word::Divreg,
        Word::Sqrtreg,
        Word::Setline,
        Word::Jumpline,
        Word::Inputline,
        Word::Conditional,
    ];

    pub fn from_str(s: &str) -> Option<Word> {
        let lower = s.to_ascii_lowercase();
        STRING_TO_WORD.with(|stw| stw.get(lower.as_str()).copied())
    }

    pub fn as_str(&self) -> &'static str {
        use Word::*;
        match self {
            Print => "print",
            Println => "println",
            Exit => "exit",
            Setreg => "setreg",
            Pushreg => "pushreg",
            Popreg => "popreg",
            Peekreg => "peekreg",
            Addreg => "addreg",
            Subreg => "subreg",
            Mulreg => "mulreg",
            Divreg => "divreg",
            Sqrtreg => "sqrtreg",
            Setline => "setline",
            Jumpline => "jumpline",
            Inputline => "inputline",
            Conditional => "conditional",
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
