use super::formatter::normalize_entry;
use super::messages::Message;
use super::summary::{parse_entry, TotalResult};
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Table of the form fields: raw input, the value it commits to and the
    /// minutes it contributes (`-` when it is excluded from the total).
    pub fn entries_table(entries: &[String]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["#", "INPUT", "HH:MM", "MINUTES"]);
        for (index, entry) in entries.iter().enumerate() {
            let normalized = normalize_entry(entry);
            let minutes = match parse_entry(&normalized) {
                Some(duration) => duration.num_minutes().to_string(),
                None => Message::EntryExcluded.to_string(),
            };
            let normalized = if normalized.is_empty() { Message::EntryExcluded.to_string() } else { normalized };
            table.add_row(row![index + 1, entry, normalized, minutes]);
        }

        table
    }

    pub fn total_table(total: &TotalResult) -> Table {
        let mut table = Table::new();

        table.add_row(row!["HH:MM", "DECIMAL"]);
        table.add_row(row![total.hhmm, total.decimal]);

        table
    }

    pub fn entries(entries: &[String]) {
        Self::entries_table(entries).printstd();
    }

    pub fn total(total: &TotalResult) {
        Self::total_table(total).printstd();
    }

    pub fn json(total: &TotalResult) -> serde_json::Result<()> {
        println!("{}", serde_json::to_string_pretty(total)?);
        Ok(())
    }
}
