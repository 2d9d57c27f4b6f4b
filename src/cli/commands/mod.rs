//! One module per subcommand.

pub mod add;
pub mod find;
pub mod gen;
pub mod get;
pub mod init;
pub mod rm;
