use super::{Program, Register, Val, Var};

/// ## Token evaluation
///
/// Resolves one argument token, first match wins:
///
/// 1. unsigned decimal digits are an `Integer`, or `Text` if too large
/// 2. a register name (any case) is that register's value
/// 3. `#X` reads the current text of line `X`, where `X` is digits or a register
/// 4. a label name is the index of the line that defined it
/// 5. anything else is `Val::empty()`

pub fn evaluate(token: &str, program: &Program, var: &Var) -> Val {
    if Val::is_digits(token) {
        return Val::from_line(token);
    }
    if let Some(reg) = Register::from_str(token) {
        return Val::Integer(var.fetch(reg));
    }
    if let Some(inner) = token.strip_prefix('#') {
        return indirect(inner, program, var);
    }
    match program.label(token) {
        Some(index) => Val::Integer(index as i64),
        None => Val::empty(),
    }
}

fn direct(token: &str, var: &Var) -> Option<i64> {
    if let Some(n) = Val::parse_digits(token) {
        return Some(n);
    }
    Register::from_str(token).map(|reg| var.fetch(reg))
}

fn indirect(inner: &str, program: &Program, var: &Var) -> Val {
    let index = match direct(inner, var) {
        Some(index) if index >= 0 => index as usize,
        _ => return Val::empty(),
    };
    match program.get(index) {
        Some(text) => Val::from_line(text),
        None => Val::empty(),
    }
}
