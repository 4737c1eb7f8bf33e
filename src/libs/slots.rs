//! Entry slots backing the form.
//!
//! A form holds an ordered list of input slots. Slots are identified by
//! their index; adding or removing one shifts the indices of everything
//! after it. The list is never empty.
//!
//! Each slot goes through the formatting policies of
//! [`formatter`](crate::libs::formatter):
//!
//! - [`EntrySlots::input`] applies the keystroke policy and reports when the
//!   focus should move on to the next slot,
//! - [`EntrySlots::blur`] applies the commit policy to one slot,
//! - [`EntrySlots::submit`] commits every slot and sums the result.
//!
//! ```rust
//! use calchora::libs::slots::EntrySlots;
//!
//! let mut slots = EntrySlots::new(2);
//! let update = slots.input(0, "0130")?;
//! assert_eq!(update.focus, Some(1));
//! slots.input(1, "45")?;
//!
//! let total = slots.submit()?;
//! assert_eq!(total.hhmm, "1:30");
//! assert_eq!(slots.values(), ["01:30", ""]);
//! # Ok::<(), calchora::libs::slots::SlotError>(())
//! ```

use crate::libs::formatter::{is_complete, normalize_entry, sanitize_keystroke};
use crate::libs::summary::{sum_times, TotalResult};
use thiserror::Error;

/// Number of slots a new form starts with.
pub const DEFAULT_SLOTS: usize = 3;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SlotError {
    #[error("slot {index} does not exist (the form has {len} slots)")]
    OutOfRange { index: usize, len: usize },

    #[error("the last remaining slot cannot be removed")]
    LastSlot,

    #[error("no field contains a value in valid HH:MM format")]
    NoValidEntries,
}

pub type Result<T> = std::result::Result<T, SlotError>;

/// Outcome of a keystroke in one slot.
///
/// `focus` is a request for the shell: once the updated value has been
/// shown, move on to that slot. It is only set when the slot has just been
/// completed and a following slot exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotUpdate {
    pub value: String,
    pub focus: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySlots {
    values: Vec<String>,
}

impl Default for EntrySlots {
    fn default() -> Self {
        Self::new(DEFAULT_SLOTS)
    }
}

impl EntrySlots {
    /// Creates `count` empty slots, at least one.
    pub fn new(count: usize) -> Self {
        Self {
            values: vec![String::new(); count.max(1)],
        }
    }

    /// Builds a form from existing raw values, one slot per value.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Self::new(1);
        }
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: a form keeps at least one slot.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Appends an empty slot and returns its index.
    pub fn add(&mut self) -> usize {
        self.values.push(String::new());
        self.values.len() - 1
    }

    /// Inserts an empty slot at `index`, shifting later slots down.
    pub fn insert(&mut self, index: usize) -> Result<()> {
        if index > self.values.len() {
            return Err(self.out_of_range(index));
        }
        self.values.insert(index, String::new());
        Ok(())
    }

    /// Removes the slot at `index` and returns its value.
    pub fn remove(&mut self, index: usize) -> Result<String> {
        self.check(index)?;
        if self.values.len() == 1 {
            return Err(SlotError::LastSlot);
        }
        Ok(self.values.remove(index))
    }

    /// Resets the form to `count` empty slots, at least one.
    pub fn clear(&mut self, count: usize) {
        self.values = vec![String::new(); count.max(1)];
    }

    /// Stores `raw` in the slot as is.
    pub fn set(&mut self, index: usize, raw: &str) -> Result<()> {
        self.check(index)?;
        self.values[index] = raw.to_string();
        Ok(())
    }

    /// Applies a keystroke to the slot: digits only, at most four.
    pub fn input(&mut self, index: usize, raw: &str) -> Result<SlotUpdate> {
        self.check(index)?;
        let value = sanitize_keystroke(raw);
        let focus = (is_complete(&value) && index + 1 < self.values.len()).then_some(index + 1);
        self.values[index] = value.clone();
        Ok(SlotUpdate { value, focus })
    }

    /// Commits the slot: four digits become `HH:MM`, anything else is cleared.
    pub fn blur(&mut self, index: usize) -> Result<&str> {
        self.check(index)?;
        self.values[index] = normalize_entry(&self.values[index]);
        Ok(&self.values[index])
    }

    /// Commits every slot and sums the result.
    ///
    /// On success the slots hold their normalized values. When no slot holds
    /// a valid time the slots are left as they were.
    pub fn submit(&mut self) -> Result<TotalResult> {
        let normalized: Vec<String> = self.values.iter().map(|value| normalize_entry(value)).collect();
        let total = sum_times(&normalized).ok_or(SlotError::NoValidEntries)?;
        self.values = normalized;
        Ok(total)
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.values.len() {
            Ok(())
        } else {
            Err(self.out_of_range(index))
        }
    }

    fn out_of_range(&self, index: usize) -> SlotError {
        SlotError::OutOfRange {
            index,
            len: self.values.len(),
        }
    }
}
