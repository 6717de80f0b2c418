/*!
# Terminal

Runs a Modify script from the command line. Ctrl-C is forwarded to the
runtime, which stops at the next instruction boundary.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::mach::{Event, Program, Runtime};
use crate::{error, lang::Error};
use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::io::{BufRead, ErrorKind, Write};
use std::sync::atomic::Ordering;

const CYCLES: usize = 5000;

pub fn main() {
    let args: Vec<String> = std::env::args().collect();
    let code = match run(&args) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", error);
            1
        }
    };
    std::process::exit(code);
}

/// Command line flags following the script path.
#[derive(Debug, Default, PartialEq)]
pub struct Flags {
    pub verbose: bool,
}

impl Flags {
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Flags {
        let mut flags = Flags::default();
        for arg in args {
            match arg.as_ref() {
                "-v" => flags.verbose = true,
                _ => {}
            }
        }
        flags
    }
}

pub fn usage(arg0: &str) -> String {
    format!(
        "Usage: {} <script> [-v]\n\
         <script>: The .modify Script to Run\n\
         -v: Verbose Flag, Prints extra Debug Info\n",
        arg0
    )
}

fn run(args: &[String]) -> std::io::Result<i32> {
    println!("The Modify Esolang Interpreter");
    println!("    written by JakubKwantowy");
    println!();

    let arg0 = args.first().map(String::as_str).unwrap_or("modify");
    let path = match args.get(1) {
        Some(path) => path,
        None => {
            print!("{}", usage(arg0));
            return Ok(0);
        }
    };
    let flags = Flags::parse(&args[2..]);

    let program = match load(path) {
        Ok(program) => program,
        Err(error) => {
            println!("{}", Style::new().bold().paint(error.to_string()));
            return Ok(1);
        }
    };
    let mut runtime = Runtime::new(program);
    runtime.set_verbose(flags.verbose);

    let int_moved = runtime.interrupt_flag();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("Error setting Ctrl-C handler: {}", error);
    }
    main_loop(&mut runtime)
}

fn main_loop(runtime: &mut Runtime) -> std::io::Result<i32> {
    let stdout = std::io::stdout();
    let mut input = Input::new();
    loop {
        match runtime.execute(CYCLES) {
            Event::Running => {}
            Event::Print(s) => {
                let mut out = stdout.lock();
                out.write_all(s.as_bytes())?;
                out.flush()?;
            }
            Event::Trace(s) => {
                writeln!(stdout.lock(), "[ {} ]", s)?;
            }
            Event::Input => match input.read_line()? {
                InputLine::Line(string) => {
                    runtime.enter(&string);
                }
                InputLine::Interrupt => runtime.interrupt(),
                InputLine::Eof => {
                    let error = error!(InternalError, Some(runtime.pc() + 1); "End of Input");
                    println!("{}", Style::new().bold().paint(error.to_string()));
                    return Ok(1);
                }
            },
            Event::Errors(errors) => {
                let mut code = 1;
                for error in errors.iter() {
                    if error.is_interrupt() {
                        println!();
                        code = 0;
                    }
                    println!("{}", Style::new().bold().paint(error.to_string()));
                }
                return Ok(code);
            }
            Event::Exit(code) => return Ok(code),
            Event::Stopped => return Ok(0),
        }
    }
}

fn load(filename: &str) -> Result<Program, Error> {
    match std::fs::read_to_string(filename) {
        Ok(source) => Ok(Program::from_source(&source)),
        Err(error) => match error.kind() {
            ErrorKind::NotFound => Err(error!(FileNotFound; filename)),
            _ => Err(error!(InternalError; error.to_string())),
        },
    }
}

enum InputLine {
    Line(String),
    Interrupt,
    Eof,
}

/// Line editor when attached to a terminal, plain stdin otherwise.
enum Input {
    Unopened,
    Terminal(Interface<DefaultTerminal>),
    Piped,
}

impl Input {
    fn new() -> Input {
        Input::Unopened
    }

    fn read_line(&mut self) -> std::io::Result<InputLine> {
        if let Input::Unopened = self {
            *self = match Interface::new("modify") {
                Ok(interface) => {
                    interface.set_report_signal(Signal::Interrupt, true);
                    Input::Terminal(interface)
                }
                Err(_) => Input::Piped,
            };
        }
        if let Input::Terminal(interface) = self {
            match interface.read_line() {
                Ok(ReadResult::Input(string)) => return Ok(InputLine::Line(string)),
                Ok(ReadResult::Signal(Signal::Interrupt)) => {
                    interface.set_buffer("")?;
                    return Ok(InputLine::Interrupt);
                }
                Ok(ReadResult::Signal(_)) | Ok(ReadResult::Eof) => return Ok(InputLine::Eof),
                Err(_) => *self = Input::Piped,
            }
        }
        let mut string = String::new();
        if std::io::stdin().lock().read_line(&mut string)? == 0 {
            return Ok(InputLine::Eof);
        }
        if string.ends_with('\n') {
            string.pop();
            if string.ends_with('\r') {
                string.pop();
            }
        }
        Ok(InputLine::Line(string))
    }
}
