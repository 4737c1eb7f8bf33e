//! Display implementation for application messages.
//!
//! Every piece of user-facing text is produced here, so wording stays
//! consistent between the one-shot commands and the interactive form.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TOTAL MESSAGES ===
            Message::TotalHeader => "Total".to_string(),
            Message::TotalHhmm(hhmm) => format!("HH:MM: {}", hhmm),
            Message::TotalDecimal(decimal) => format!("Decimal: {}", decimal),
            Message::NoValidEntries => {
                "No field contains a value in valid HH:MM format (for example, 0015 becomes 00:15)".to_string()
            }

            // === ENTRY MESSAGES ===
            Message::EntriesHeader => "Entries".to_string(),
            Message::EntryExcluded => "-".to_string(),

            // === FORM MESSAGES ===
            Message::FormTitle => "Calchora".to_string(),
            Message::FormHint => "Type four digits per field, e.g. 0130 for 01:30".to_string(),
            Message::PromptEntry(slot) => format!("Time for field {} (HHMM)", slot),
            Message::PromptSelectAction => "Select an action".to_string(),
            Message::PromptSelectSlotToRemove => "Select a field to remove".to_string(),
            Message::SlotLabel(slot, value) => {
                if value.is_empty() {
                    format!("Field {}", slot)
                } else {
                    format!("Field {} ({})", slot, value)
                }
            }
            Message::MenuEditSlot(slot, value) => {
                if value.is_empty() {
                    format!("Edit field {}", slot)
                } else {
                    format!("Edit field {} ({})", slot, value)
                }
            }
            Message::MenuAddSlot => "Add field".to_string(),
            Message::MenuRemoveSlot => "Remove field".to_string(),
            Message::MenuCalculate => "Calculate".to_string(),
            Message::MenuClear => "Clear all fields".to_string(),
            Message::FormCleared(count) => format!("Form cleared, {} empty fields", count),
            Message::MenuQuit => "Quit".to_string(),
            Message::SlotAdded(slot) => format!("Field {} added", slot),
            Message::SlotRemoved(slot) => format!("Field {} removed", slot),
            Message::SlotCleared(slot) => format!("Field {} cleared: four digits are required", slot),
            Message::SlotFormatted(slot, value) => format!("Field {}: {}", slot, value),
            Message::SlotError(error) => format!("Field error: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigReadFailed(error) => format!("Failed to read config, using defaults: {}", error),
            Message::ConfigModuleForm => "Form settings".to_string(),
            Message::ConfigModuleOutput => "Output settings".to_string(),
            Message::PromptSelectModules => "Select settings to configure".to_string(),
            Message::PromptInitialSlots => "Number of fields the form starts with".to_string(),
            Message::PromptAutoAdvance => "Move to the next field after four digits?".to_string(),
            Message::PromptJsonOutput => "Print totals as JSON by default?".to_string(),
            Message::PromptShowEntries => "Show the entries table with every total?".to_string(),

            // === DEBUG MESSAGES ===
            Message::DebugModeEnabled(filter) => format!("Debug logging enabled ({})", filter),
        };

        write!(f, "{}", text)
    }
}
