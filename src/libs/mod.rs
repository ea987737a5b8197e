//! Core library modules for fieldlog.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fieldlog::libs::storage::{FileStore, Journal};
//! use fieldlog::libs::summary::MonthlySummary;
//! use chrono::Local;
//!
//! let journal = Journal::open(FileStore::new())?;
//! let summary = MonthlySummary::compute(journal.entries(), journal.extras(), Local::now().date_naive());
//! println!("{} this month", summary.field);
//! # Ok::<(), fieldlog::libs::storage::StorageError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod entry;
pub mod image;
pub mod messages;
pub mod period;
pub mod profile;
pub mod report;
pub mod secret;
pub mod storage;
pub mod summary;
pub mod time;
pub mod view;
