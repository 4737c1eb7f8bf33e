//! One-shot summation of durations given on the command line.

use crate::{
    libs::{config::Config, messages::Message, slots::EntrySlots, view::View},
    msg_bail_anyhow,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SumArgs {
    #[arg(required = true, help = "Durations as HH:MM or HHMM, e.g. 01:30 0045")]
    entries: Vec<String>,
    #[arg(long, help = "Print the total as JSON")]
    json: bool,
    #[arg(short, long, help = "Show the table of entries before the total")]
    table: bool,
}

pub fn cmd(sum_args: SumArgs) -> Result<()> {
    let output = Config::read_or_default().output_or_default();
    let mut slots = EntrySlots::from_values(sum_args.entries);
    let raw = slots.values().to_vec();

    let Ok(total) = slots.submit() else {
        msg_bail_anyhow!(Message::NoValidEntries);
    };

    if sum_args.table || output.show_entries {
        println!("{}", Message::EntriesHeader);
        View::entries(&raw);
    }

    if sum_args.json || output.json {
        View::json(&total)?;
    } else {
        println!("{}", Message::TotalHeader);
        View::total(&total);
    }

    Ok(())
}
