//! Figureboard Application
//!
//! The interactive console shell: configuration, menu, prompt reading
//! and the command loop driving the figure registry.

mod config;
mod error;
mod menu;
mod prompt;
mod shell;

pub use config::{AppConfig, CONFIG_ENV_VAR};
pub use error::{ShellError, ShellResult};
pub use menu::{Menu, MenuCommand, MenuEntry};
pub use prompt::Prompter;
pub use shell::{ExitReason, Shell};
