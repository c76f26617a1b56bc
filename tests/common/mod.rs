use std::sync::{Arc, Mutex};

use hostdeck::exec::{CommandResult, CommandRunner, CommandSpec, Invocation};

/// Command-runner stub: records every spec it is handed and answers with a
/// fixed exit status, so tests can assert on the exact argument vectors
/// without touching the host.
pub struct RecordingRunner {
    exit_status: i32,
    calls: Arc<Mutex<Vec<CommandSpec>>>,
}

impl RecordingRunner {
    pub fn with_status(exit_status: i32) -> (Self, Arc<Mutex<Vec<CommandSpec>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        (
            RecordingRunner {
                exit_status,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, spec: &CommandSpec) -> CommandResult {
        self.calls.lock().unwrap().push(spec.clone());
        CommandResult {
            exit_status: self.exit_status,
            output: None,
        }
    }

    fn capture(&self, spec: &CommandSpec) -> CommandResult {
        self.calls.lock().unwrap().push(spec.clone());
        CommandResult {
            exit_status: self.exit_status,
            output: Some(String::new()),
        }
    }
}

pub fn argv_of(spec: &CommandSpec) -> Vec<String> {
    match &spec.invocation {
        Invocation::Argv { program, args } => {
            let mut out = vec![program.clone()];
            out.extend(args.iter().cloned());
            out
        }
        Invocation::ShellLine(line) => vec![line.clone()],
    }
}
