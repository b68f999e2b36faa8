use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use clap::Parser;

use crate::prelude::*;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Charging query JSON document.
    pub input: PathBuf,

    /// Where to write the resulting charging schedule JSON document.
    pub output: PathBuf,

    /// Also print the charging plan as a table.
    #[clap(long, env = "PRINT_TABLE")]
    pub table: bool,

    /// Validate the starting time against this local time instead of the wall clock.
    ///
    /// For example: `2030-01-01T12:00:00`.
    #[clap(long, env = "CHARGING_NOW")]
    pub now: Option<NaiveDateTime>,

    #[clap(long, default_value = "warn", env = "LOG_LEVEL")]
    pub log_level: Level,
}

impl Args {
    pub fn now(&self) -> NaiveDateTime {
        self.now.unwrap_or_else(|| Local::now().naive_local())
    }
}
