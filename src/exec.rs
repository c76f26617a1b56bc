use std::process::Command;

use tracing::{debug, warn};

/// Exit status reported when the requested executable cannot be found.
/// Matches the shell convention so callers treat it like any other failure.
pub const COMMAND_NOT_FOUND: i32 = 127;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Program and arguments as discrete tokens, no shell interpretation.
    Argv { program: String, args: Vec<String> },
    /// A raw line handed to `sh -c`. Only the custom-command escape hatch
    /// and free-form informational queries go through here.
    ShellLine(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub invocation: Invocation,
    pub elevated: bool,
}

impl CommandSpec {
    pub fn argv(program: &str, args: &[&str]) -> Self {
        CommandSpec {
            invocation: Invocation::Argv {
                program: program.to_string(),
                args: args.iter().map(|a| a.to_string()).collect(),
            },
            elevated: false,
        }
    }

    pub fn shell(line: &str) -> Self {
        CommandSpec {
            invocation: Invocation::ShellLine(line.to_string()),
            elevated: false,
        }
    }

    pub fn elevated(mut self) -> Self {
        self.elevated = true;
        self
    }

    /// Human-readable rendering for log lines and failure messages.
    pub fn display(&self) -> String {
        match &self.invocation {
            Invocation::Argv { program, args } => {
                if args.is_empty() {
                    program.clone()
                } else {
                    format!("{program} {}", args.join(" "))
                }
            }
            Invocation::ShellLine(line) => line.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub exit_status: i32,
    pub output: Option<String>,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.exit_status == 0
    }

    pub fn not_found(&self) -> bool {
        self.exit_status == COMMAND_NOT_FOUND
    }
}

/// Synchronous external-process boundary. Implementations must never panic
/// and must report missing executables through the exit status.
pub trait CommandRunner {
    /// Run with inherited stdio. Used for interactive tools (sudo prompts)
    /// and listings that stream straight to the operator.
    fn run(&self, spec: &CommandSpec) -> CommandResult;

    /// Run capturing stdout. Used for read-only informational queries.
    fn capture(&self, spec: &CommandSpec) -> CommandResult;
}

pub struct HostRunner {
    elevation_command: String,
}

impl HostRunner {
    pub fn new(elevation_command: &str) -> Self {
        HostRunner {
            elevation_command: elevation_command.to_string(),
        }
    }

    fn build(&self, spec: &CommandSpec) -> Command {
        let mut tokens: Vec<String> = Vec::new();
        if spec.elevated {
            tokens.push(self.elevation_command.clone());
        }
        match &spec.invocation {
            Invocation::Argv { program, args } => {
                tokens.push(program.clone());
                tokens.extend(args.iter().cloned());
            }
            Invocation::ShellLine(line) => {
                tokens.extend(["sh".to_string(), "-c".to_string(), line.clone()]);
            }
        }
        let mut command = Command::new(&tokens[0]);
        command.args(&tokens[1..]);
        command
    }
}

impl CommandRunner for HostRunner {
    fn run(&self, spec: &CommandSpec) -> CommandResult {
        debug!(command = %spec.display(), elevated = spec.elevated, "running command");
        let status = self.build(spec).status();
        let exit_status = match status {
            Ok(status) => status.code().unwrap_or(-1),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => COMMAND_NOT_FOUND,
            Err(err) => {
                warn!(command = %spec.display(), %err, "command failed to spawn");
                -1
            }
        };
        CommandResult {
            exit_status,
            output: None,
        }
    }

    fn capture(&self, spec: &CommandSpec) -> CommandResult {
        debug!(command = %spec.display(), elevated = spec.elevated, "capturing command");
        match self.build(spec).output() {
            Ok(output) => CommandResult {
                exit_status: output.status.code().unwrap_or(-1),
                output: Some(String::from_utf8_lossy(&output.stdout).trim().to_string()),
            },
            Err(err) => {
                let exit_status = if err.kind() == std::io::ErrorKind::NotFound {
                    COMMAND_NOT_FOUND
                } else {
                    warn!(command = %spec.display(), %err, "command failed to spawn");
                    -1
                };
                CommandResult {
                    exit_status,
                    output: None,
                }
            }
        }
    }
}

/// PATH probe for a named executable.
pub fn command_exists(program: &str) -> bool {
    let Ok(path) = std::env::var("PATH") else {
        return false;
    };
    for dir in std::env::split_paths(&path) {
        let candidate = dir.join(program);
        if candidate.is_file() {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(command: &Command) -> Vec<String> {
        let mut out = vec![command.get_program().to_string_lossy().to_string()];
        out.extend(
            command
                .get_args()
                .map(|a| a.to_string_lossy().to_string()),
        );
        out
    }

    #[test]
    fn argv_spec_builds_discrete_tokens() {
        let runner = HostRunner::new("sudo");
        let spec = CommandSpec::argv("pacman", &["-S", "--noconfirm", "ripgrep"]);
        assert_eq!(
            tokens(&runner.build(&spec)),
            vec!["pacman", "-S", "--noconfirm", "ripgrep"]
        );
    }

    #[test]
    fn elevated_spec_is_prefixed() {
        let runner = HostRunner::new("sudo");
        let spec = CommandSpec::argv("userdel", &["-r", "guest"]).elevated();
        assert_eq!(
            tokens(&runner.build(&spec)),
            vec!["sudo", "userdel", "-r", "guest"]
        );
    }

    #[test]
    fn elevation_command_is_configurable() {
        let runner = HostRunner::new("doas");
        let spec = CommandSpec::argv("pacman", &["-Syu"]).elevated();
        assert_eq!(tokens(&runner.build(&spec))[0], "doas");
    }

    #[test]
    fn shell_spec_goes_through_sh() {
        let runner = HostRunner::new("sudo");
        let spec = CommandSpec::shell("echo hello | wc -c");
        assert_eq!(
            tokens(&runner.build(&spec)),
            vec!["sh", "-c", "echo hello | wc -c"]
        );
    }

    #[test]
    fn missing_executable_reports_not_found_status() {
        let runner = HostRunner::new("sudo");
        let spec = CommandSpec::argv("hostdeck-no-such-binary", &[]);
        let result = runner.capture(&spec);
        assert_eq!(result.exit_status, COMMAND_NOT_FOUND);
        assert!(result.not_found());
    }

    #[test]
    fn capture_returns_stdout() {
        let runner = HostRunner::new("sudo");
        let result = runner.capture(&CommandSpec::shell("echo captured"));
        assert!(result.success());
        assert_eq!(result.output.as_deref(), Some("captured"));
    }

    #[test]
    fn command_exists_finds_the_shell() {
        assert!(command_exists("sh"));
        assert!(!command_exists("hostdeck-no-such-binary"));
    }

    #[test]
    fn display_joins_argv() {
        let spec = CommandSpec::argv("apt", &["remove", "-y", "vim"]);
        assert_eq!(spec.display(), "apt remove -y vim");
        assert_eq!(CommandSpec::shell("uname -a").display(), "uname -a");
    }
}
