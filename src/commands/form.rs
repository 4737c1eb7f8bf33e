//! Interactive form command.
//!
//! Presents the entry slots as a menu: any field can be edited, fields can be
//! added or removed, and the total is calculated on demand. Each edit goes
//! through the keystroke policy and is committed right away, which is the
//! terminal equivalent of typing into a field and leaving it. When a field is
//! completed and auto-advance is on, the next field is prompted after the
//! committed value has been printed.
//!
//! Committed values and totals are written straight to stdout; the `msg_*`
//! macros are only used for prompts, hints and diagnostics.

use crate::{
    libs::{
        config::{Config, OutputConfig},
        messages::Message,
        slots::EntrySlots,
        summary::TotalResult,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct FormArgs {
    #[arg(short, long, help = "Number of fields the form starts with")]
    slots: Option<usize>,
    #[arg(long, help = "Stay on a field after four digits have been entered")]
    no_advance: bool,
}

/// An entry of the form menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Edit(usize),
    Add,
    Remove,
    Calculate,
    Clear,
    Quit,
}

/// Builds the menu for the current slots.
///
/// Removing is only offered while more than one field exists.
pub fn menu(slots: &EntrySlots) -> Vec<(FormAction, Message)> {
    let mut items: Vec<(FormAction, Message)> = slots
        .values()
        .iter()
        .enumerate()
        .map(|(index, value)| (FormAction::Edit(index), Message::MenuEditSlot(index + 1, value.clone())))
        .collect();

    items.push((FormAction::Add, Message::MenuAddSlot));
    if slots.len() > 1 {
        items.push((FormAction::Remove, Message::MenuRemoveSlot));
    }
    items.push((FormAction::Calculate, Message::MenuCalculate));
    items.push((FormAction::Clear, Message::MenuClear));
    items.push((FormAction::Quit, Message::MenuQuit));
    items
}

pub fn cmd(form_args: FormArgs) -> Result<()> {
    let config = Config::read_or_default();
    let form_config = config.form_or_default();
    let output = config.output_or_default();

    let initial_slots = form_args.slots.unwrap_or(form_config.slots);
    let mut slots = EntrySlots::new(initial_slots);
    let auto_advance = form_config.auto_advance && !form_args.no_advance;
    tracing::debug!(slots = slots.len(), auto_advance, "starting form");

    msg_print!(Message::FormTitle, true);
    msg_info!(Message::FormHint);

    let mut cursor = 0;
    loop {
        let items = menu(&slots);
        let labels: Vec<String> = items.iter().map(|(_, label)| label.to_string()).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectAction.to_string())
            .items(&labels)
            .default(cursor.min(labels.len() - 1))
            .interact()?;
        cursor = selection;

        match items[selection].0 {
            FormAction::Edit(index) => {
                cursor = edit(&mut slots, index, auto_advance)?;
            }
            FormAction::Add => {
                let index = slots.add();
                msg_success!(Message::SlotAdded(index + 1));
                cursor = index;
            }
            FormAction::Remove => {
                let index = select_slot(&slots, Message::PromptSelectSlotToRemove)?;
                match slots.remove(index) {
                    Ok(_) => msg_success!(Message::SlotRemoved(index + 1)),
                    Err(error) => msg_error!(Message::SlotError(error.to_string())),
                }
                cursor = 0;
            }
            FormAction::Calculate => match slots.submit() {
                Ok(total) => show_total(&slots, &total, &output)?,
                Err(_) => msg_error!(Message::NoValidEntries, true),
            },
            FormAction::Clear => {
                slots.clear(initial_slots);
                msg_success!(Message::FormCleared(slots.len()));
                cursor = 0;
            }
            FormAction::Quit => return Ok(()),
        }
    }
}

/// Edits the field at `index` and, with auto-advance, the fields after it.
///
/// Returns the index of the last edited field.
fn edit(slots: &mut EntrySlots, mut index: usize, auto_advance: bool) -> Result<usize> {
    loop {
        let current = slots.get(index).unwrap_or_default().to_string();
        let raw: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEntry(index + 1).to_string())
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()?;

        let update = slots.input(index, &raw)?;
        let committed = slots.blur(index)?;
        if !committed.is_empty() {
            println!("{}", Message::SlotFormatted(index + 1, committed.to_string()));
        } else if !update.value.is_empty() {
            msg_warning!(Message::SlotCleared(index + 1));
        }

        match update.focus {
            Some(next) if auto_advance => index = next,
            _ => return Ok(index),
        }
    }
}

fn select_slot(slots: &EntrySlots, prompt: Message) -> Result<usize> {
    let labels: Vec<String> = slots
        .values()
        .iter()
        .enumerate()
        .map(|(index, value)| Message::SlotLabel(index + 1, value.clone()).to_string())
        .collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(selection)
}

fn show_total(slots: &EntrySlots, total: &TotalResult, output: &OutputConfig) -> Result<()> {
    if output.show_entries {
        println!("\n{}\n", Message::EntriesHeader);
        View::entries(slots.values());
    }

    if output.json {
        View::json(total)?;
    } else {
        println!("\n{}\n", Message::TotalHeader);
        println!("{}", Message::TotalHhmm(total.hhmm.clone()));
        println!("{}", Message::TotalDecimal(total.decimal.clone()));
    }
    Ok(())
}
