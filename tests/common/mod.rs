use modify::mach::{Event, Runtime};

#[allow(dead_code)]
pub fn runtime(lines: &[&str]) -> Runtime {
    Runtime::from_source(&lines.join("\n"))
}

#[allow(dead_code)]
pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000).0
}

/// Output so far and the exit code, `None` while waiting for input.
#[allow(dead_code)]
pub fn exec_status(runtime: &mut Runtime) -> (String, Option<i32>) {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> (String, Option<i32>) {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => return (s, Some(0)),
            Event::Exit(code) => return (s, Some(*code)),
            Event::Errors(errors) => {
                let mut code = 1;
                for error in errors.iter() {
                    if error.is_interrupt() {
                        code = 0;
                    }
                    s.push_str(&format!("{}\n", error));
                }
                return (s, Some(code));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    return (s, None);
                }
            }
            Event::Print(ps) => s.push_str(ps),
            Event::Trace(ts) => s.push_str(&format!("[ {} ]\n", ts)),
            Event::Input => return (s, None),
        }
        prev_running = matches!(event, Event::Running);
    }
}
