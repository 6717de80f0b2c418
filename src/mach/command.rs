use super::eval::evaluate;
use super::{Event, Operation, Program, Register, Stack, Val, Var};
use crate::error;
use crate::lang::{Error, Word};
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// What the execution loop does after a command.
#[derive(Debug, PartialEq)]
pub enum Control {
    Next,
    /// Continue at this line. `Program::len()` ends the run.
    Jump(usize),
    /// Wait for one line of input to store at this line.
    Input(usize),
    Exit(i32),
}

#[derive(Debug, PartialEq)]
pub struct Outcome {
    pub event: Option<Event>,
    pub control: Control,
}

impl Outcome {
    fn next(event: Option<Event>) -> Outcome {
        Outcome {
            event,
            control: Control::Next,
        }
    }
}

/// ## Command dispatch
///
/// Borrows the machine state for the duration of one command.
/// Every handler checks its own arity before evaluating anything.

pub struct Command<'a> {
    pub program: &'a mut Program,
    pub var: &'a mut Var,
    pub stack: &'a mut Stack<i64>,
    pub verbose: bool,
}

impl<'a> Command<'a> {
    pub fn dispatch(&mut self, command: &str, args: &[&str]) -> Result<Outcome> {
        let word = match Word::from_str(command) {
            Some(word) => word,
            None => {
                return Err(error!(InvalidCommand; format!(
                    "Invalid Command {}",
                    command.to_ascii_lowercase()
                )))
            }
        };
        use Word::*;
        match word {
            Print => self.print(args, false),
            Println => self.print(args, true),
            Exit => self.exit(args),
            Setreg => self.setreg(args),
            Pushreg => self.pushreg(args),
            Popreg => self.popreg(args),
            Peekreg => self.peekreg(args),
            Addreg => self.math(args, "+", Operation::sum),
            Subreg => self.math(args, "-", Operation::subtract),
            Mulreg => self.math(args, "*", Operation::multiply),
            Divreg => self.math(args, "/", Operation::divide),
            Sqrtreg => self.sqrtreg(args),
            Setline => self.setline(args),
            Jumpline => self.jumpline(args),
            Inputline => self.inputline(args),
            Conditional => self.conditional(args),
        }
    }

    fn eval(&self, token: &str) -> Val {
        evaluate(token, self.program, self.var)
    }

    fn trace<F: FnOnce() -> String>(&self, f: F) -> Option<Event> {
        if self.verbose {
            Some(Event::Trace(f()))
        } else {
            None
        }
    }

    fn print(&mut self, args: &[&str], newline: bool) -> Result<Outcome> {
        require(args, 1)?;
        let mut s = self.eval(args[0]).to_string();
        if newline {
            s.push('\n');
        }
        Ok(Outcome::next(Some(Event::Print(s))))
    }

    fn exit(&mut self, args: &[&str]) -> Result<Outcome> {
        let code = match args.first() {
            Some(arg) => self.eval(arg).to_integer(),
            None => 0,
        };
        let code = i32::try_from(code).unwrap_or(if code < 0 { i32::MIN } else { i32::MAX });
        Ok(Outcome {
            event: None,
            control: Control::Exit(code),
        })
    }

    fn setreg(&mut self, args: &[&str]) -> Result<Outcome> {
        require(args, 2)?;
        let reg = Register::from_arg(args[0])?;
        let src = self.eval(args[1]).to_integer();
        self.var.store(reg, src);
        Ok(Outcome::next(self.trace(|| format!("{} = {}", reg, src))))
    }

    fn pushreg(&mut self, args: &[&str]) -> Result<Outcome> {
        require(args, 1)?;
        let reg = Register::from_arg(args[0])?;
        self.stack.push(self.var.fetch(reg));
        Ok(Outcome::next(self.trace(|| format!("PUSH {}", reg))))
    }

    fn popreg(&mut self, args: &[&str]) -> Result<Outcome> {
        require(args, 1)?;
        let reg = Register::from_arg(args[0])?;
        let val = self.stack.pop()?;
        self.var.store(reg, val);
        Ok(Outcome::next(self.trace(|| format!("POP {}", reg))))
    }

    fn peekreg(&mut self, args: &[&str]) -> Result<Outcome> {
        require(args, 1)?;
        let reg = Register::from_arg(args[0])?;
        let val = *self.stack.last()?;
        self.var.store(reg, val);
        Ok(Outcome::next(self.trace(|| format!("PEEK {}", reg))))
    }

    fn math(
        &mut self,
        args: &[&str],
        symbol: &str,
        op: fn(i64, i64) -> Result<i64>,
    ) -> Result<Outcome> {
        require(args, 3)?;
        let reg = Register::from_arg(args[0])?;
        let lhs = self.eval(args[1]).to_integer();
        let rhs = self.eval(args[2]).to_integer();
        self.var.store(reg, op(lhs, rhs)?);
        Ok(Outcome::next(self.trace(|| {
            format!("{} = {} {} {}", reg, args[1], symbol, args[2])
        })))
    }

    fn sqrtreg(&mut self, args: &[&str]) -> Result<Outcome> {
        require(args, 2)?;
        let reg = Register::from_arg(args[0])?;
        let src = self.eval(args[1]).to_integer();
        self.var.store(reg, Operation::sqrt(src)?);
        Ok(Outcome::next(self.trace(|| format!("{} = sqrt({})", reg, src))))
    }

    fn setline(&mut self, args: &[&str]) -> Result<Outcome> {
        require(args, 2)?;
        let line = line_number(self.eval(args[0]), 1)?;
        let src = self.eval(args[1]).to_string();
        self.program.set(line, src.clone())?;
        Ok(Outcome::next(self.trace(|| format!("#{} = {}", line, src))))
    }

    fn jumpline(&mut self, args: &[&str]) -> Result<Outcome> {
        require(args, 1)?;
        let line = line_number(self.eval(args[0]), 1)?;
        if line < 0 || line as u64 > self.program.len() as u64 {
            return Err(error!(BadArgument; format!("Line {} out of range", line)));
        }
        Ok(Outcome {
            event: self.trace(|| format!("-> #{}", line)),
            control: Control::Jump(line as usize),
        })
    }

    fn inputline(&mut self, args: &[&str]) -> Result<Outcome> {
        require(args, 1)?;
        let line = line_number(self.eval(args[0]), 1)?;
        let index = self.program.index(line)?;
        Ok(Outcome {
            event: None,
            control: Control::Input(index),
        })
    }

    fn conditional(&mut self, args: &[&str]) -> Result<Outcome> {
        require(args, 5)?;
        let mut v1 = self.eval(args[0]);
        let mut v2 = self.eval(args[1]);
        let condition = args[2];
        let line = line_number(self.eval(args[3]), 4)?;
        let src = self.eval(args[4]).to_string();
        let result = match condition {
            "eq" => v1.to_string() == v2.to_string(),
            "numeq" | "less" | "gtr" | "lesseq" | "gtreq" => {
                let (n1, n2) = (v1.to_integer(), v2.to_integer());
                v1 = Val::Integer(n1);
                v2 = Val::Integer(n2);
                match condition {
                    "numeq" => n1 == n2,
                    "less" => n1 < n2,
                    "gtr" => n1 > n2,
                    "lesseq" => n1 <= n2,
                    _ => n1 >= n2,
                }
            }
            _ => {
                return Err(error!(BadArgument; format!(
                    "Arg3 not a valid Condition! ({})",
                    condition
                )))
            }
        };
        if result {
            self.program.set(line, src.clone())?;
        }
        Ok(Outcome::next(self.trace(|| {
            if result {
                format!("{} {} {} | #{} = {}", v1, condition, v2, line, src)
            } else {
                format!("{} {} {} | false", v1, condition, v2)
            }
        })))
    }
}

fn require(args: &[&str], count: usize) -> Result<()> {
    if args.len() < count {
        Err(error!(BadArgument; format!("Not Enough Args ({} Required)", count)))
    } else {
        Ok(())
    }
}

fn line_number(val: Val, position: usize) -> Result<i64> {
    match val.as_integer() {
        Some(line) => Ok(line),
        None => Err(error!(BadArgument; format!(
            "Arg{} not a Valid Line Number! ({})",
            position, val
        ))),
    }
}
