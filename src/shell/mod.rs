mod command;
mod session;

pub use command::{HELP, ShellCommand};
pub use session::Shell;
