//! Declarative command-line argument specification and parsing.
//!
//! A [`Specification`] declares the recognized options (`-x`, optionally
//! `--xyz`, optionally taking a parameter) and the trailing positional
//! arguments. [`Specification::parse`] wraps a raw token list in a
//! [`ParsedArguments`] view that answers flag, parameter and positional
//! queries, and [`Specification::render_help`] formats aligned usage text.
//!
//! - [`Specification`] — the declared options, positionals and help text
//!   fragments, built through [`OptionBuilder`] and [`PositionalBuilder`].
//! - [`OptionSpec`] / [`PositionalSpec`] — the declared entities.
//! - [`ParsedArguments`] — immutable query view over the tokens.
//! - [`ParserConfig`] — opt-in parameter pattern enforcement and the help
//!   output stream.
//!
//! Declaration mistakes fail immediately with a [`DeclarationError`].
//! Queries never fail on bad user input; they fall back to `None` or a
//! caller-supplied default.
//!
//! # Example
//!
//! ```
//! use argspec_core::*;
//!
//! let mut spec = Specification::new();
//! spec.set_command_name("convert");
//! spec.declare_option("f", Some("format"))
//!     .unwrap()
//!     .with_parameter("fmt")
//!     .unwrap()
//!     .with_description("output format");
//! spec.with_verbose_flag().unwrap();
//! spec.declare_positional("input").unwrap().variadic().unwrap();
//!
//! let args = spec.parse(["-v", "--format", "json", "a.md", "b.md"]);
//! assert!(args.is_verbose());
//! assert_eq!(args.option_parameter("format"), Some("json"));
//! assert_eq!(args.positional_args(), vec!["a.md", "b.md"]);
//!
//! assert!(spec.render_help(None).starts_with("usage: convert -f <fmt> [-v] <input>..."));
//! ```

mod config;
mod error;
mod parsed;
pub mod sink;
mod spec;
pub mod tokens;
mod types;
mod usage;

pub use config::{HelpStream, ParserConfig};
pub use error::{ConfigError, DeclarationError, QueryError, Result};
pub use parsed::ParsedArguments;
pub use spec::{OptionBuilder, PositionalBuilder, Specification};
pub use types::{OptionSpec, ParameterPattern, PositionalSpec};
