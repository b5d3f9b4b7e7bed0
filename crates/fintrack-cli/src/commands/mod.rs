//! Command handlers, one module per subcommand.

pub mod add;
pub mod init;
pub mod misc;
pub mod normalize;
pub mod report;
