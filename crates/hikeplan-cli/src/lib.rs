//! Hike planner CLI library.
//!
//! Runs the notification pipeline from a terminal, either against the live
//! providers or with a dry-run mail sender that prints the email instead.

pub mod commands;
pub mod dry_run;
pub mod output;
