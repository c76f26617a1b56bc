use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};

/// Line-oriented presentation layer: panels, tables, styled messages, and
/// the prompts the session loop and screens read from. Generic over the
/// streams so the whole session can run against scripted input in tests.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Console::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    pub fn clear(&mut self) -> io::Result<()> {
        execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Single-cell rounded box, the menu-header treatment.
    pub fn panel(&mut self, text: &str) -> io::Result<()> {
        let mut table = styled_table();
        table.add_row([Cell::new(text).add_attribute(Attribute::Bold)]);
        writeln!(self.output, "{table}")
    }

    pub fn heading(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text.green().bold())
    }

    pub fn success(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text.green().bold())
    }

    pub fn error(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text.red().bold())
    }

    pub fn notice(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text.yellow())
    }

    pub fn print_table(&mut self, table: &Table) -> io::Result<()> {
        writeln!(self.output, "{table}")
    }

    /// Closed-choice prompt: anything outside `choices` is rejected and
    /// re-prompted, never silently accepted.
    pub fn prompt_choice(&mut self, label: &str, choices: &[&str]) -> io::Result<String> {
        loop {
            write!(self.output, "{label} [{}]: ", choices.join("/"))?;
            self.output.flush()?;
            let entered = self.read_line()?;
            let entered = entered.trim();
            if choices.contains(&entered) {
                return Ok(entered.to_string());
            }
            self.error("Invalid selection.")?;
        }
    }

    /// Free-form prompt; blank input is re-prompted.
    pub fn prompt_line(&mut self, label: &str) -> io::Result<String> {
        loop {
            write!(self.output, "{label}: ")?;
            self.output.flush()?;
            let entered = self.read_line()?;
            let entered = entered.trim();
            if !entered.is_empty() {
                return Ok(entered.to_string());
            }
        }
    }

    /// The acknowledgment pause between a screen and the next menu render.
    pub fn pause(&mut self) -> io::Result<()> {
        write!(
            self.output,
            "{}",
            "Press Enter to return to the menu...".yellow()
        )?;
        self.output.flush()?;
        match self.read_line() {
            Ok(_) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => Ok(()),
            Err(err) => Err(err),
        }
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut buffer = String::new();
        let read = self.input.read_line(&mut buffer)?;
        if read == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Table with the shared rounded preset; screens add headers and rows.
pub fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}
