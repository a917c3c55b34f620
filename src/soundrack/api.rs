//! # API Facade
//!
//! [`CatalogApi`] is the single entry point for catalog operations. It owns
//! the asset root and the configuration, performs one fresh scan per
//! operation (no index survives a call), and dispatches to the command
//! layer.
//!
//! The facade returns structured [`CmdResult`] values and never touches
//! stdout or stderr; translating results and errors into terminal output is
//! the CLI client's job, and any other front end (a bot dispatcher, a web
//! handler) gets the same types to work with.

use crate::catalog::scan::scan;
use crate::commands;
use crate::config::CatalogConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};

pub struct CatalogApi {
    root: PathBuf,
    config: CatalogConfig,
}

impl CatalogApi {
    pub fn new(root: PathBuf, config: CatalogConfig) -> Self {
        Self { root, config }
    }

    /// Construct with the configuration stored in the root itself.
    pub fn open(root: PathBuf) -> Result<Self> {
        let config = CatalogConfig::load(&root)?;
        Ok(Self::new(root, config))
    }

    /// Resolve `identifier` to a concrete clip. `track` is the 1-based
    /// track number within a group; `None` means the first track.
    pub fn play(&self, identifier: &str, track: Option<usize>) -> Result<CmdResult> {
        let index = scan(&self.root, &self.config.scan_options())?;
        commands::play::run(&index, identifier, track.unwrap_or(1))
    }

    /// Produce the catalog listing, top-level only or fully expanded.
    pub fn list(&self, expand_all: bool) -> Result<CmdResult> {
        let index = scan(&self.root, &self.config.scan_options())?;
        commands::list::run(&index, &self.config.list_options(expand_all))
    }

    /// Get or set configuration stored in the asset root. A successful set
    /// also applies to this instance, so later calls see the new values.
    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.root, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
