use crate::libs::formatter::{format_time, normalize_entry};
use anyhow::Result;
use clap::Args;
use std::io::{self, Write};

#[derive(Debug, Args)]
pub struct FormatArgs {
    #[arg(required = true, help = "Raw values, e.g. 0130")]
    values: Vec<String>,
    #[arg(short, long, help = "Clear values that do not hold exactly four digits")]
    commit: bool,
}

/// Writes the formatted form of each value, one per line.
///
/// Output goes to `out` as is, whatever the debug mode or log filter.
pub fn write_formatted<W: Write>(out: &mut W, values: &[String], commit: bool) -> io::Result<()> {
    for value in values {
        let formatted = if commit { normalize_entry(value) } else { format_time(value) };
        writeln!(out, "{}", formatted)?;
    }
    Ok(())
}

pub fn cmd(format_args: FormatArgs) -> Result<()> {
    let stdout = io::stdout();
    write_formatted(&mut stdout.lock(), &format_args.values, format_args.commit)?;
    Ok(())
}
