use std::io::{BufRead, Write};

use color_eyre::Result;

use crate::exec::CommandSpec;
use crate::session::Session;

/// The one shell escape hatch: the entered line reaches `sh -c` verbatim.
/// Every structured action elsewhere uses the argument-vector path.
pub fn run_custom_command<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    session.console.panel("Run Custom Command")?;
    session
        .console
        .notice("The line below is handed to the shell exactly as typed.")?;
    let line = session
        .console
        .prompt_line("Enter a custom command to execute")?;

    let result = session.runner.run(&CommandSpec::shell(&line));
    if result.not_found() {
        session.console.error("Command not found.")?;
    } else if !result.success() {
        session
            .console
            .error(&format!("Command exited with status {}.", result.exit_status))?;
    }
    Ok(())
}
