use std::io::{BufRead, Write};

use color_eyre::Result;
use comfy_table::{Attribute, Cell};

use crate::console::styled_table;
use crate::pkg::{PackageAdapter, PackageManager, PkgOutcome};
use crate::session::Session;

const SUB_MENU: [(&str, &str); 5] = [
    ("1", "List Installed Packages"),
    ("2", "Install a Package"),
    ("3", "Remove a Package"),
    ("4", "Update System"),
    ("5", "Return to Main Menu"),
];

pub fn manage_packages<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let Some(manager) = PackageManager::detect_with(session.pkg_probe) else {
        session
            .console
            .error("No supported package manager detected.")?;
        return Ok(());
    };

    session
        .console
        .panel(&format!("{} Package Management", manager.name()))?;
    let mut table = styled_table();
    table.set_header(vec![
        Cell::new("Option").add_attribute(Attribute::Bold),
        Cell::new("Description").add_attribute(Attribute::Bold),
    ]);
    for (key, description) in SUB_MENU {
        table.add_row([key, description]);
    }
    session.console.print_table(&table)?;

    let choice = session
        .console
        .prompt_choice("Select an option", &["1", "2", "3", "4", "5"])?;
    match choice.as_str() {
        "1" => {
            let outcome = {
                let adapter = PackageAdapter::new(session.runner.as_ref());
                adapter.list_installed(Some(manager))
            };
            if !outcome.succeeded() {
                session.console.error(&format!(
                    "Failed to list installed packages using {}.",
                    manager.name()
                ))?;
            }
        }
        "2" => {
            let package = session.console.prompt_line("Enter package name to install")?;
            let outcome = {
                let adapter = PackageAdapter::new(session.runner.as_ref());
                adapter.install(Some(manager), &package)
            };
            report_package_action(session, outcome, ("install", "installed"), &package, manager)?;
        }
        "3" => {
            let package = session.console.prompt_line("Enter package name to remove")?;
            let outcome = {
                let adapter = PackageAdapter::new(session.runner.as_ref());
                adapter.remove(Some(manager), &package)
            };
            report_package_action(session, outcome, ("remove", "removed"), &package, manager)?;
        }
        "4" => {
            let outcome = {
                let adapter = PackageAdapter::new(session.runner.as_ref());
                adapter.update(Some(manager))
            };
            report_update(session, outcome, manager)?;
        }
        _ => {}
    }
    Ok(())
}

/// The dedicated "System Updates" menu entry: same update action, no
/// sub-menu in between.
pub fn system_update<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    session.console.heading("System Updates")?;
    let Some(manager) = PackageManager::detect_with(session.pkg_probe) else {
        session
            .console
            .error("No supported package manager detected.")?;
        return Ok(());
    };
    let outcome = {
        let adapter = PackageAdapter::new(session.runner.as_ref());
        adapter.update(Some(manager))
    };
    report_update(session, outcome, manager)
}

fn report_package_action<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    outcome: PkgOutcome,
    (verb, past): (&str, &str),
    package: &str,
    manager: PackageManager,
) -> Result<()> {
    if outcome.succeeded() {
        session.console.success(&format!(
            "Successfully {past} {package} using {}.",
            manager.name()
        ))?;
    } else {
        session.console.error(&format!(
            "Failed to {verb} {package} using {}.",
            manager.name()
        ))?;
    }
    Ok(())
}

fn report_update<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    outcome: PkgOutcome,
    manager: PackageManager,
) -> Result<()> {
    if outcome.succeeded() {
        session
            .console
            .success(&format!("System updated using {}.", manager.name()))?;
    } else {
        session
            .console
            .error(&format!("System update failed using {}.", manager.name()))?;
    }
    Ok(())
}
