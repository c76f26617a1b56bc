use std::io::{BufRead, Write};

use color_eyre::Result;
use comfy_table::{Attribute, Cell, CellAlignment, Color};

use crate::console::styled_table;
use crate::format::format_gib;
use crate::session::Session;
use crate::telemetry::snapshot::SystemSnapshot;

pub fn system_info<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let snapshot = SystemSnapshot::capture(&mut session.collector, session.runner.as_ref());

    session.console.heading("System Information")?;
    let mut table = styled_table();
    for (property, value) in snapshot.rows() {
        table.add_row([
            Cell::new(property)
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Right),
            Cell::new(value),
        ]);
    }
    session.console.print_table(&table)?;
    Ok(())
}

pub fn disk_usage<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    session.console.heading("Disk Usage")?;
    let Some(disk) = session.collector.root_disk() else {
        session
            .console
            .notice("Usage for the root filesystem is unavailable.")?;
        return Ok(());
    };

    let mut table = styled_table();
    table.set_header(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new("Used").add_attribute(Attribute::Bold),
        Cell::new("Free").add_attribute(Attribute::Bold),
        Cell::new("Usage").add_attribute(Attribute::Bold),
    ]);
    table.add_row([
        format_gib(disk.total_bytes),
        format_gib(disk.used_bytes),
        format_gib(disk.available_bytes),
        format!("{:.1}%", disk.percent_used()),
    ]);
    session.console.print_table(&table)?;
    Ok(())
}

pub fn network_info<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    session.console.heading("Network Information")?;
    let info = session.collector.network_info();

    let mut table = styled_table();
    table.set_header(vec![
        Cell::new("Hostname").add_attribute(Attribute::Bold),
        Cell::new("IP Address").add_attribute(Attribute::Bold),
    ]);
    table.add_row([info.hostname.clone(), info.address.clone()]);
    session.console.print_table(&table)?;

    if !info.interfaces.is_empty() {
        let mut table = styled_table();
        table.set_header(vec![
            Cell::new("Interface").add_attribute(Attribute::Bold),
            Cell::new("Received").add_attribute(Attribute::Bold),
            Cell::new("Transmitted").add_attribute(Attribute::Bold),
        ]);
        for interface in &info.interfaces {
            table.add_row([
                interface.name.clone(),
                crate::format::format_bytes(interface.received),
                crate::format::format_bytes(interface.transmitted),
            ]);
        }
        session.console.print_table(&table)?;
    }
    Ok(())
}

pub fn temperatures<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    session.console.heading("Temperature Monitoring")?;
    let readings = session.collector.temperatures();
    if readings.is_empty() {
        session.console.error("No temperature sensors found.")?;
        return Ok(());
    }
    for reading in &readings {
        session.console.line(&format!(
            "{}: {:.1}\u{b0}C",
            reading.display_name(),
            reading.celsius
        ))?;
    }
    Ok(())
}
