#![allow(unused_imports)]

pub use tracing::{Level, debug, info, instrument, trace, warn};

pub type Result<T = (), E = anyhow::Error> = anyhow::Result<T, E>;
