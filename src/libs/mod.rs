//! Core library modules of calchora.
//!
//! - **Formatting and summation**: [`formatter`], [`summary`]
//! - **Form state**: [`slots`]
//! - **Infrastructure**: [`config`], [`data_storage`], [`messages`], [`view`]
//!
//! ## Usage
//!
//! ```rust
//! use calchora::libs::summary::sum_times;
//!
//! let total = sum_times(&["0100", "0200"]).unwrap();
//! assert_eq!(total.hhmm, "3:00");
//! assert_eq!(total.decimal, "3.00");
//! ```

pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod slots;
pub mod summary;
pub mod view;
