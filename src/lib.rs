//! rx-latest library
//!
//! This crate provides the core functionality for the `rx-latest` binary,
//! which prints the filename of the newest reindexer server RPM published in
//! the package repository.
//!
//! ## Overview
//!
//! - [`models`] - Track selectors and parsed package candidates
//! - [`listing`] - Fetches the repository index and extracts package entries
//! - [`resolver`] - Orders candidates by version and picks the newest
//! - [`cli`] - Command-line interface
//! - [`config`] - Resolver settings (listing URL, timeout, user agent)
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! ```no_run
//! use rx_latest::{config::ResolverConfig, errors::AppResult, resolver};
//!
//! # async fn example() -> AppResult<()> {
//! let name = resolver::resolve_latest(&ResolverConfig::default(), "4").await?;
//! println!("{name}");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod listing;
pub mod logging;
pub mod models;
pub mod resolver;
