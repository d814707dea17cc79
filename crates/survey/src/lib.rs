pub mod cli;
pub mod cmd;
pub mod config;
pub mod frontend;
pub mod functions;
pub mod logging;
pub mod messages;

pub use config::RunOptions;
pub use frontend::TerminalFrontend;
pub use functions::{builtin_registry, register_builtins};
