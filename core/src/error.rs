//! Error types for specification declaration, strict queries and
//! configuration loading.
//!
//! Declaration errors are programmer errors: they abort construction of a
//! [`Specification`](crate::Specification) and are never recovered from
//! internally. Query-time problems caused by user input are soft and
//! resolve to defaults; [`QueryError`] only backs the strict accessors.

use thiserror::Error;

/// Errors raised while declaring options and positional arguments.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeclarationError {
    /// Short option name is empty or whitespace-only.
    #[error("option name cannot be blank")]
    BlankOptionName,
    /// An option with the same short name (or a long name equal to it)
    /// already exists.
    #[error("option already declared: {0}")]
    DuplicateOption(String),
    /// The long name is already owned by another option.
    #[error("long option '{long}' already used by option -{owner}")]
    DuplicateLongOption {
        /// The contested long name.
        long: String,
        /// Short name of the option that owns it.
        owner: String,
    },
    /// Parameter name is empty or whitespace-only.
    #[error("parameter name of option -{0} cannot be blank")]
    BlankParameterName(String),
    /// The parameter validation pattern does not compile.
    #[error("invalid parameter pattern '{pattern}': {source}")]
    InvalidPattern {
        /// Pattern source as given by the caller.
        pattern: String,
        /// Underlying compile error.
        #[source]
        source: regex::Error,
    },
    /// Positional argument name is empty or whitespace-only.
    #[error("positional argument name cannot be blank")]
    BlankPositionalName,
    /// Another positional argument is already variadic.
    #[error("positional argument <{0}> is already variadic")]
    DuplicateVariadic(String),
}

/// Errors surfaced by the strict query accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No option with this short or long name was declared.
    #[error("option not declared: {0}")]
    UndeclaredOption(String),
    /// The option exists but takes no parameter.
    #[error("option -{0} does not take a parameter")]
    NotParameterized(String),
    /// The parameter value does not match the option's declared pattern.
    /// Only raised when pattern enforcement is enabled.
    #[error("parameter '{value}' of option -{option} does not match pattern '{pattern}'")]
    PatternMismatch {
        /// Short name of the option.
        option: String,
        /// The rejected value.
        value: String,
        /// Pattern source.
        pattern: String,
    },
}

/// Errors that can occur while loading or saving a [`ParserConfig`](crate::ParserConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Convenience alias for declaration results.
pub type Result<T> = std::result::Result<T, DeclarationError>;
