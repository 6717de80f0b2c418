use super::command::{Command, Control};
use super::{Program, Stack, Var};
use crate::error;
use crate::lang::{Error, Line};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

/// ## Execution loop
///
/// The host calls `execute` repeatedly and reacts to each `Event`.
/// Interrupts are only observed between instructions. The flag behind
/// `interrupt_flag` may be set from a signal handler at any time.

#[derive(Debug, Default)]
pub struct Runtime {
    program: Program,
    var: Var,
    stack: Stack<i64>,
    pc: usize,
    verbose: bool,
    halted: bool,
    interrupted: Arc<AtomicBool>,
    awaiting_input: Option<usize>,
    pending: Option<Event>,
}

/// ## Events for the user interface

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Cycle budget spent, call `execute` again.
    Running,
    Print(String),
    /// Verbose description of the last instruction.
    Trace(String),
    /// Waiting for `Runtime::enter`.
    Input,
    Errors(Vec<Error>),
    Exit(i32),
    Stopped,
}

impl Runtime {
    pub fn new(program: Program) -> Runtime {
        Runtime {
            program,
            ..Runtime::default()
        }
    }

    pub fn from_source(source: &str) -> Runtime {
        Runtime::new(Program::from_source(source))
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn interrupt(&mut self) {
        self.interrupted.store(true, Ordering::SeqCst);
    }

    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        self.interrupted.clone()
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn var(&self) -> &Var {
        &self.var
    }

    pub fn stack(&self) -> &Stack<i64> {
        &self.stack
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Supplies a line of input to a waiting `inputline`. The text is
    /// stored as-is. Returns false if nothing was waiting.
    pub fn enter(&mut self, string: &str) -> bool {
        let index = match self.awaiting_input.take() {
            Some(index) => index,
            None => return false,
        };
        match self.program.set(index as i64, string.to_string()) {
            Ok(()) => {
                if self.verbose {
                    self.pending = Some(Event::Trace(format!("#{} <- {}", index, string)));
                }
                self.pc += 1;
            }
            Err(error) => self.fault(error),
        }
        true
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(event) = self.pending.take() {
            return event;
        }
        if self.halted {
            return Event::Stopped;
        }
        if self.awaiting_input.is_some() && !self.interrupted.load(Ordering::SeqCst) {
            return Event::Input;
        }
        for _ in 0..cycles {
            match self.step() {
                Ok(None) => {}
                Ok(Some(event)) => return event,
                Err(error) => {
                    self.fault(error);
                    return self.pending.take().unwrap_or(Event::Stopped);
                }
            }
        }
        Event::Running
    }

    fn fault(&mut self, error: Error) {
        self.halted = true;
        self.awaiting_input = None;
        self.pending = Some(Event::Errors(vec![
            error.in_line_number(Some(self.pc + 1))
        ]));
    }

    fn step(&mut self) -> Result<Option<Event>> {
        if self.pc >= self.program.len() {
            self.halted = true;
            return Ok(Some(Event::Stopped));
        }
        if self.interrupted.swap(false, Ordering::SeqCst) {
            return Err(error!(SignalInterrupt; "SIGINT Keyboard Interrupt"));
        }
        let text = self.program.get(self.pc).unwrap_or_default().to_string();
        let outcome = match Line::new(&text) {
            Line::Statement { command, args } => Command {
                program: &mut self.program,
                var: &mut self.var,
                stack: &mut self.stack,
                verbose: self.verbose,
            }
            .dispatch(command, &args)?,
            Line::Blank | Line::Label(_) => {
                self.pc += 1;
                return Ok(None);
            }
        };
        match outcome.control {
            Control::Next => self.pc += 1,
            Control::Jump(line) => self.pc = line,
            Control::Input(line) => {
                self.awaiting_input = Some(line);
                return Ok(Some(Event::Input));
            }
            Control::Exit(code) => {
                self.halted = true;
                return Ok(Some(Event::Exit(code)));
            }
        }
        Ok(outcome.event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn drain(r: &mut Runtime) -> Vec<Event> {
        let mut events = vec![];
        loop {
            let event = r.execute(100);
            let done = matches!(
                event,
                Event::Stopped | Event::Exit(_) | Event::Errors(_) | Event::Input
            );
            events.push(event);
            if done {
                return events;
            }
        }
    }

    #[test]
    fn test_empty_program_stops() {
        let mut r = Runtime::default();
        assert_eq!(r.execute(1), Event::Stopped);
        assert_eq!(r.execute(1), Event::Stopped);
    }

    #[test]
    fn test_cycle_budget() {
        let mut r = Runtime::from_source(":top\njumpline top");
        assert_eq!(r.execute(10), Event::Running);
        assert!(!r.is_halted());
    }

    #[test]
    fn test_interrupt_at_boundary() {
        let mut r = Runtime::from_source("setreg a 1\nsetreg a 2\nsetreg a 3");
        assert_eq!(r.execute(1), Event::Running);
        r.interrupt();
        match r.execute(10) {
            Event::Errors(errors) => {
                assert_eq!(errors[0].code(), ErrorCode::SignalInterrupt);
                assert_eq!(errors[0].line_number(), Some(2));
            }
            event => panic!("{:?}", event),
        }
        assert_eq!(r.var().fetch(crate::mach::Register::A), 1);
        assert_eq!(r.execute(10), Event::Stopped);
    }

    #[test]
    fn test_interrupt_flag_stops_a_busy_loop() {
        let mut r = Runtime::from_source(":top\naddreg a a 1\njumpline top");
        let flag = r.interrupt_flag();
        assert_eq!(r.execute(7), Event::Running);
        flag.store(true, Ordering::SeqCst);
        match r.execute(5000) {
            Event::Errors(errors) => {
                assert_eq!(errors[0].code(), ErrorCode::SignalInterrupt);
                assert_eq!(errors[0].line_number(), Some(2));
            }
            event => panic!("{:?}", event),
        }
        assert_eq!(r.var().fetch(crate::mach::Register::A), 2);
        assert!(!flag.load(Ordering::SeqCst));
    }

    #[test]
    fn test_input_then_continue() {
        let mut r = Runtime::from_source("inputline 3\nprintln #3\nexit\n0");
        assert_eq!(drain(&mut r), vec![Event::Input]);
        assert_eq!(r.execute(10), Event::Input);
        assert!(r.enter("hello world"));
        assert!(!r.enter("again"));
        assert_eq!(
            drain(&mut r),
            vec![Event::Print("hello world\n".into()), Event::Exit(0)]
        );
    }

    #[test]
    fn test_interrupt_while_waiting_for_input() {
        let mut r = Runtime::from_source("print 1\ninputline 0");
        assert_eq!(
            drain(&mut r),
            vec![Event::Print("1".into()), Event::Input]
        );
        r.interrupt();
        match r.execute(10) {
            Event::Errors(errors) => assert_eq!(
                errors[0].to_string(),
                "Signal Interrupt on Line 2: SIGINT Keyboard Interrupt"
            ),
            event => panic!("{:?}", event),
        }
    }

    #[test]
    fn test_lines_are_fetched_fresh() {
        let mut r = Runtime::from_source("setline 1 #2\nprint 1\nprint 2");
        assert_eq!(
            drain(&mut r),
            vec![
                Event::Print("2".into()),
                Event::Print("2".into()),
                Event::Stopped
            ]
        );
        assert_eq!(r.program().get(1), Some("print 2"));
    }
}
