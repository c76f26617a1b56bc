use std::io::{BufRead, Write};

use color_eyre::Result;
use comfy_table::{Attribute, Cell};

use crate::console::styled_table;
use crate::session::Session;
use crate::telemetry::snapshot::ProcessRecord;

pub fn top_processes<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    session.console.heading("Processes Information")?;
    let limit = session.config.general.top_process_count;
    let records = session.collector.processes_by_memory(limit);
    let table = process_table(&records, true);
    session.console.print_table(&table)?;
    Ok(())
}

pub fn filter_processes<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let keyword = session
        .console
        .prompt_line("Enter a keyword to filter processes")?;
    let records = session.collector.processes_matching(&keyword);
    if records.is_empty() {
        session.console.error("No matching processes found.")?;
        return Ok(());
    }
    session
        .console
        .heading(&format!("Processes matching \"{keyword}\""))?;
    let table = process_table(&records, false);
    session.console.print_table(&table)?;
    Ok(())
}

fn process_table(records: &[ProcessRecord], with_memory: bool) -> comfy_table::Table {
    let mut table = styled_table();
    let mut header = vec![
        Cell::new("PID").add_attribute(Attribute::Bold),
        Cell::new("Name").add_attribute(Attribute::Bold),
    ];
    if with_memory {
        header.push(Cell::new("Memory Usage (%)").add_attribute(Attribute::Bold));
    }
    table.set_header(header);
    for record in records {
        let mut row = vec![record.pid.to_string(), record.name.clone()];
        if with_memory {
            row.push(format!("{:.2}%", record.memory_percent));
        }
        table.add_row(row);
    }
    table
}
