//! Library side of the `crqa` command line tool.

pub mod logging;
pub mod pipeline;
