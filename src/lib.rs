//! # fieldlog - field service time logging
//!
//! A command-line utility for recording daily field service time, studies and
//! extra credits, with monthly summaries and a shareable report.
//!
//! ## Features
//!
//! - **Daily Log**: Hours, minutes, studies and a note per day
//! - **Extra Credits**: Time for secondary activities counted separately
//! - **Monthly Summary**: Totals, goal progress and a three-month trend
//! - **Report Sharing**: Fixed-format message handed off to WhatsApp
//! - **Text Generation**: Note polishing and monthly insights via Gemini
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fieldlog::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
