mod args;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command, InitArgs, ScanArgs};
pub use exit_status::ExitStatus;
pub use run::run as run_cli;
