//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use folio_config::Config;
use folio_store::{Session, Store};

use crate::cli::args::Commands;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config file found).
    pub config: Config,
    /// Store opened lazily on first use.
    store: Option<Store>,
}

impl CommandContext {
    /// Loads the context appropriate for the given command.
    ///
    /// `init` must work even when an existing config file is invalid, so
    /// it skips configuration parsing.
    pub fn load_for(command: &Commands) -> Result<Self, ExitCode> {
        match command {
            Commands::Init(_) => Self::load_cwd_only(),
            _ => Self::load(),
        }
    }

    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self {
            cwd,
            config,
            store: None,
        })
    }

    /// Loads only the current directory, skipping configuration parsing.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
            store: None,
        })
    }

    /// Returns a mutable store, opening the data file if needed.
    pub fn store(&mut self) -> Result<&mut Store, ExitCode> {
        if self.store.is_none() {
            match Store::open(&self.config.data_path) {
                Ok(store) => self.store = Some(store),
                Err(e) => {
                    eprintln!("error: failed to open data file: {e}");
                    return Err(ExitCode::FAILURE);
                }
            }
        }
        Ok(self.store.as_mut().expect("store just set"))
    }

    /// Builds the session for a command invocation.
    ///
    /// The configured admin identity gets admin rights; `--as-viewer`
    /// downgrades to a read-only session.
    pub fn session(&self, as_viewer: bool) -> Session {
        if as_viewer {
            Session::viewer(&self.config.admin_email)
        } else {
            Session::admin(&self.config.admin_email)
        }
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
