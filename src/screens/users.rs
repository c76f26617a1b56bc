use std::io::{BufRead, Write};

use color_eyre::Result;

use crate::admin;
use crate::session::Session;

/// Add or remove an OS user. No privilege pre-check: the command is
/// attempted and a failed exit status is reported, so sudo can still
/// prompt for credentials mid-action.
pub fn user_management<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    session.console.panel("User Management")?;
    let choice = session
        .console
        .prompt_choice("(a)dd or (r)emove a user?", &["a", "r"])?;

    match choice.as_str() {
        "a" => {
            let username = session.console.prompt_line("Enter username to add")?;
            let result = admin::add_user(session.runner.as_ref(), &username);
            if result.success() {
                session
                    .console
                    .success(&format!("User {username} added."))?;
            } else {
                session
                    .console
                    .error("Failed to add user. Ensure you have proper permissions.")?;
            }
        }
        _ => {
            let username = session.console.prompt_line("Enter username to remove")?;
            let result = admin::remove_user(session.runner.as_ref(), &username);
            if result.success() {
                session
                    .console
                    .success(&format!("User {username} removed."))?;
            } else {
                session
                    .console
                    .error("Failed to remove user. Ensure you have proper permissions.")?;
            }
        }
    }
    Ok(())
}
