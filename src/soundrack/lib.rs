//! # Soundrack Architecture
//!
//! Soundrack is a **UI-agnostic catalog library** for directories of named
//! audio clips. The shipped binary is a thin CLI client; the same core is
//! meant to sit behind any command dispatcher (a chat bot, a hotkey
//! daemon) that needs to turn a user-typed name into a playable file path.
//!
//! ## The Layers
//!
//! ```text
//! CLI (main.rs, args.rs)       argument parsing, terminal output,
//!                              exit codes — the only I/O-aware layer
//! API facade (api.rs)          owns root + config, one fresh scan
//!                              per operation, dispatches to commands
//! Commands (commands/*.rs)     business logic per operation, returns
//!                              CmdResult with user-facing messages
//! Catalog core (catalog/*.rs)  scan / resolve / render over an
//!                              immutable CatalogIndex snapshot
//! ```
//!
//! ## Key Principle: the index is a value
//!
//! Every operation scans the asset root fresh and consumes the resulting
//! [`catalog::CatalogIndex`] immediately. Nothing caches an index across
//! calls, so there is no staleness to invalidate and no shared mutable
//! state to lock; `resolve` and `render` are pure functions over the
//! snapshot and are tested against hand-built indices without touching a
//! real directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`catalog`]: Scanner, resolver, and renderer over the index
//! - [`commands`]: Business logic for each command
//! - [`model`]: Core data types (`Clip`, `Group`, `CatalogEntry`)
//! - [`config`]: Per-root configuration (extensions, sort policy)
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
