use crate::exec::{CommandResult, CommandRunner, CommandSpec};

/// Create a user with a home directory, then set the password interactively.
/// The password step only runs once the account exists.
pub fn add_user(runner: &dyn CommandRunner, username: &str) -> CommandResult {
    let created = runner.run(&CommandSpec::argv("useradd", &["-m", username]).elevated());
    if !created.success() {
        return created;
    }
    runner.run(&CommandSpec::argv("passwd", &[username]).elevated())
}

/// Remove a user together with their home directory.
pub fn remove_user(runner: &dyn CommandRunner, username: &str) -> CommandResult {
    runner.run(&CommandSpec::argv("userdel", &["-r", username]).elevated())
}
