//! # wordup
//!
//! Command-line front end for `wordup-core`: generates
//! "correct horse battery staple" passphrases and converts them to and from
//! compact numeric text.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `gen [ENCODING ...]` | Random passphrase sized to `--size` bits |
//! | `expand <encoding> <text>` | Encoded text back to words |
//! | `encode <encoding> <words>...` | Words to encoded text |
//!
//! ## Design Principles
//!
//! - **Thin glue**: all codec behaviour lives in `wordup-core`
//! - **Clean stdout**: results on stdout, logs on stderr
//! - **No secrets logged**: only word counts and bit widths are traced

pub mod args;
pub mod commands;
pub mod config;
pub mod error;
pub mod trace;

pub use args::{parse_args, Command, Invocation, Options};
pub use commands::run;
pub use config::Config;
pub use error::CliError;
