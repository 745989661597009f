//! Rosterman - a single-screen student roster manager.
//!
//! One list screen over one SQLite table. The persistence contract is four
//! operations (list, insert, update, delete-by-id) behind the
//! [`store::StudentStore`] trait; the screen keeps an in-memory mirror of
//! the list ([`domain::Roster`]) that it re-renders in full after every
//! mutation.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from an optional TOML file
//! - [`domain`] - Student records, the roster mirror, field validation
//! - [`error`] - Error types for the crate
//! - [`db`] - Diesel pool, schema, and embedded migrations
//! - [`store`] - The four-operation store contract and its backends
//! - [`screen`] - Screen controller, table rendering, prompts
//! - [`cli`] - Command definitions and the interactive loop

pub mod cli;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod screen;
pub mod store;
