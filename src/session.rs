use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use color_eyre::Result;
use comfy_table::{Attribute, Cell};
use tracing::warn;

use crate::config::Config;
use crate::console::{Console, styled_table};
use crate::exec::{CommandRunner, HostRunner};
use crate::screens;
use crate::telemetry::collector::Collector;

pub const FAREWELL: &str = "Exiting... goodbye!";

/// The closed set of main-menu selections. Display order equals selection
/// order; the prompt accepts exactly these keys, so dispatch can never see
/// an unknown selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    SystemInfo = 0,
    DiskUsage,
    NetworkInfo,
    Processes,
    Temperatures,
    ManagePackages,
    SystemUpdate,
    UserManagement,
    CustomCommand,
    FilterProcesses,
    Exit,
}

impl Selection {
    pub const ALL: [Selection; 11] = [
        Selection::SystemInfo,
        Selection::DiskUsage,
        Selection::NetworkInfo,
        Selection::Processes,
        Selection::Temperatures,
        Selection::ManagePackages,
        Selection::SystemUpdate,
        Selection::UserManagement,
        Selection::CustomCommand,
        Selection::FilterProcesses,
        Selection::Exit,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Selection::SystemInfo => "1",
            Selection::DiskUsage => "2",
            Selection::NetworkInfo => "3",
            Selection::Processes => "4",
            Selection::Temperatures => "5",
            Selection::ManagePackages => "6",
            Selection::SystemUpdate => "7",
            Selection::UserManagement => "8",
            Selection::CustomCommand => "9",
            Selection::FilterProcesses => "10",
            Selection::Exit => "11",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Selection::SystemInfo => "View System Information",
            Selection::DiskUsage => "Disk Usage",
            Selection::NetworkInfo => "Network Information",
            Selection::Processes => "Processes Information",
            Selection::Temperatures => "Temperature Monitoring",
            Selection::ManagePackages => "Manage Packages",
            Selection::SystemUpdate => "System Updates",
            Selection::UserManagement => "User Management",
            Selection::CustomCommand => "Run Custom Command",
            Selection::FilterProcesses => "Filter Processes",
            Selection::Exit => "Exit",
        }
    }

    pub fn parse(input: &str) -> Option<Selection> {
        let entered = input.trim();
        Selection::ALL
            .into_iter()
            .find(|selection| selection.key() == entered)
    }
}

pub struct MenuOption<R: BufRead, W: Write> {
    pub selection: Selection,
    pub handler: fn(&mut Session<R, W>) -> Result<()>,
}

/// The screen registry: built once at startup, fixed order, never mutated.
pub fn menu<R: BufRead, W: Write>() -> Vec<MenuOption<R, W>> {
    Selection::ALL
        .into_iter()
        .map(|selection| MenuOption {
            selection,
            handler: handler_for::<R, W>(selection),
        })
        .collect()
}

fn handler_for<R: BufRead, W: Write>(selection: Selection) -> fn(&mut Session<R, W>) -> Result<()> {
    match selection {
        Selection::SystemInfo => screens::system::system_info::<R, W>,
        Selection::DiskUsage => screens::system::disk_usage::<R, W>,
        Selection::NetworkInfo => screens::system::network_info::<R, W>,
        Selection::Processes => screens::processes::top_processes::<R, W>,
        Selection::Temperatures => screens::system::temperatures::<R, W>,
        Selection::ManagePackages => screens::packages::manage_packages::<R, W>,
        Selection::SystemUpdate => screens::packages::system_update::<R, W>,
        Selection::UserManagement => screens::users::user_management::<R, W>,
        Selection::CustomCommand => screens::custom::run_custom_command::<R, W>,
        Selection::FilterProcesses => screens::processes::filter_processes::<R, W>,
        Selection::Exit => exit_screen::<R, W>,
    }
}

fn exit_screen<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    session.running = false;
    session.console.error(FAREWELL)?;
    Ok(())
}

/// One interactive session: owns the console, the telemetry collector, the
/// command runner, and the current loop state. Mutated only in response to
/// validated input events.
pub struct Session<R: BufRead, W: Write> {
    pub console: Console<R, W>,
    pub collector: Collector,
    pub runner: Box<dyn CommandRunner + Send>,
    /// Executable probe used for package-manager detection; swapped out in
    /// tests.
    pub pkg_probe: fn(&str) -> bool,
    pub config: Config,
    running: bool,
}

impl Session<BufReader<Stdin>, Stdout> {
    pub fn stdio(config: Config) -> Self {
        let runner = HostRunner::new(&config.general.elevation_command);
        Session::new(
            config,
            Console::stdio(),
            Box::new(runner),
            crate::exec::command_exists,
        )
    }
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        config: Config,
        console: Console<R, W>,
        runner: Box<dyn CommandRunner + Send>,
        pkg_probe: fn(&str) -> bool,
    ) -> Self {
        Session {
            console,
            collector: Collector::new(),
            runner,
            pkg_probe,
            config,
            running: true,
        }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Menu → selection → screen → acknowledgment, until the exit option.
    /// Screen failures are converted to on-screen messages here; they never
    /// terminate the loop.
    pub fn run(&mut self) -> Result<()> {
        let options = menu::<R, W>();
        while self.running {
            self.console.clear()?;
            self.render_menu()?;

            let selection = match self.read_selection() {
                Ok(selection) => selection,
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                    // Closed input is treated like leaving the session.
                    self.console.blank()?;
                    self.console.error(FAREWELL)?;
                    break;
                }
                Err(err) => return Err(err.into()),
            };

            self.console.clear()?;
            let option = &options[selection as usize];
            if let Err(err) = (option.handler)(self) {
                warn!(screen = option.selection.label(), %err, "screen failed");
                self.console
                    .error(&format!("{} failed: {err:#}", option.selection.label()))?;
            }

            if self.running {
                self.console.blank()?;
                self.console.pause()?;
            }
        }
        Ok(())
    }

    fn render_menu(&mut self) -> io::Result<()> {
        self.console
            .panel("hostdeck \u{2014} interactive host dashboard")?;
        let mut table = styled_table();
        table.set_header(vec![
            Cell::new("Option").add_attribute(Attribute::Bold),
            Cell::new("Description").add_attribute(Attribute::Bold),
        ]);
        for selection in Selection::ALL {
            table.add_row([selection.key(), selection.label()]);
        }
        self.console.print_table(&table)?;
        self.console.notice("Ctrl+C quits at any time.")?;
        Ok(())
    }

    fn read_selection(&mut self) -> io::Result<Selection> {
        loop {
            let entered = self.console.prompt_line("Enter your choice (1-11)")?;
            if let Some(selection) = Selection::parse(&entered) {
                return Ok(selection);
            }
            self.console.error("Invalid selection.")?;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::exec::{CommandResult, CommandSpec};

    struct NullRunner;

    impl CommandRunner for NullRunner {
        fn run(&self, _spec: &CommandSpec) -> CommandResult {
            CommandResult {
                exit_status: 0,
                output: None,
            }
        }

        fn capture(&self, _spec: &CommandSpec) -> CommandResult {
            CommandResult {
                exit_status: 0,
                output: Some(String::new()),
            }
        }
    }

    fn scripted_session(input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        Session::new(
            Config::default(),
            Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new()),
            Box::new(NullRunner),
            |_| false,
        )
    }

    fn output_of(session: Session<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        let (_, output) = session.into_console().into_parts();
        String::from_utf8_lossy(&output).to_string()
    }

    #[test]
    fn every_key_parses_to_its_selection() {
        for selection in Selection::ALL {
            assert_eq!(Selection::parse(selection.key()), Some(selection));
        }
        assert_eq!(Selection::parse(" 4 "), Some(Selection::Processes));
    }

    #[test]
    fn out_of_range_input_does_not_parse() {
        for input in ["0", "12", "99", "abc", "", "1.5", "-1"] {
            assert_eq!(Selection::parse(input), None, "input {input:?}");
        }
    }

    #[test]
    fn keys_are_one_through_eleven_in_order() {
        let keys: Vec<&str> = Selection::ALL.iter().map(|s| s.key()).collect();
        let expected: Vec<String> = (1..=11).map(|n| n.to_string()).collect();
        assert_eq!(keys, expected);
        assert_eq!(*Selection::ALL.last().unwrap(), Selection::Exit);
    }

    #[test]
    fn registry_maps_every_selection_once() {
        let options = menu::<Cursor<Vec<u8>>, Vec<u8>>();
        assert_eq!(options.len(), 11);
        for (index, option) in options.iter().enumerate() {
            assert_eq!(option.selection as usize, index);
        }
    }

    #[test]
    fn exit_selection_prints_farewell_and_stops() {
        let mut session = scripted_session("11\n");
        session.run().unwrap();
        assert!(output_of(session).contains(FAREWELL));
    }

    #[test]
    fn invalid_selection_reprompts_without_dispatch() {
        let mut session = scripted_session("0\nquit\n11\n");
        session.run().unwrap();
        let output = output_of(session);
        assert!(output.contains("Invalid selection."));
        assert!(output.contains(FAREWELL));
    }

    #[test]
    fn closed_input_exits_cleanly() {
        let mut session = scripted_session("");
        session.run().unwrap();
        assert!(output_of(session).contains(FAREWELL));
    }
}
