//! # Calchora - duration calculator
//!
//! A command-line utility that sums durations entered as `HH:MM` (or as bare
//! digits like `0130`) and reports the total as hours and minutes and as
//! decimal hours.
//!
//! ## Features
//!
//! - **Formatting**: four digits become a canonical `HH:MM`, minutes clamped to 59
//! - **Summation**: invalid entries are skipped, valid ones are added up
//! - **Interactive Form**: fields can be added, removed and edited before calculating
//! - **Output**: tables or JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use calchora::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
