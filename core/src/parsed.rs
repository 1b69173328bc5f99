//! Query view over a raw token list.
//!
//! [`ParsedArguments`] keeps the tokens exactly as received and answers
//! every query by re-scanning them against the declared options. Nothing
//! is cached, so a view can be queried any number of times in any order.
//!
//! Token grammar:
//!
//! - `-short` and `--long` name a declared option; nothing else does
//!   (no flag bundling, no `--name=value`, no `--` sentinel).
//! - A parameterized option takes the token right after it.
//! - Positional values are the trailing run of tokens after the last
//!   recognized option and its parameter.
//! - One enclosing pair of double quotes, or else single quotes, is
//!   stripped from returned values.

use std::fmt;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::QueryError;
use crate::spec::Specification;
use crate::tokens::{is_blank, parse_integer, to_path, unwrap_token, value_at};
use crate::types::OptionSpec;

/// Immutable view over parsed tokens, bound to the [`Specification`] that
/// interprets them.
///
/// # Examples
///
/// ```
/// use argspec_core::Specification;
///
/// let mut spec = Specification::new();
/// spec.declare_option("o", Some("output")).unwrap().with_parameter("file").unwrap();
/// spec.with_verbose_flag().unwrap();
/// spec.declare_positional("input").unwrap().variadic().unwrap();
///
/// let args = spec.parse(["-v", "--output", "out.txt", "a.txt", "'b c.txt'"]);
/// assert!(args.is_verbose());
/// assert_eq!(args.option_parameter("o"), Some("out.txt"));
/// assert_eq!(args.positional_args(), vec!["a.txt", "b c.txt"]);
/// ```
#[derive(Debug, Clone)]
pub struct ParsedArguments<'s> {
    spec: &'s Specification,
    tokens: Vec<String>,
}

impl<'s> ParsedArguments<'s> {
    pub(crate) fn new(spec: &'s Specification, tokens: Vec<String>) -> Self {
        debug!(token_count = tokens.len(), "Parsed arguments");
        Self { spec, tokens }
    }

    /// The specification used to interpret the tokens.
    pub fn specification(&self) -> &'s Specification {
        self.spec
    }

    /// Raw tokens, absent entries replaced by empty strings.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if no tokens were given.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn has_token_at(&self, index: usize) -> bool {
        index < self.tokens.len()
    }

    /// Index of the first token naming `option`.
    pub fn index_of_option(&self, option: &OptionSpec) -> Option<usize> {
        self.tokens.iter().position(|t| option.matches_token(t))
    }

    /// Index of the first token naming the option declared as `name`.
    /// Returns `None` for undeclared options.
    pub fn option_index(&self, name: &str) -> Option<usize> {
        self.spec
            .find_option(name)
            .and_then(|option| self.index_of_option(option))
    }

    /// Returns `true` if the declared option `name` appears in the tokens.
    pub fn has_option(&self, name: &str) -> bool {
        self.option_index(name).is_some()
    }

    /// The declared option named by the token at `index`.
    pub fn option_at(&self, index: usize) -> Option<&'s OptionSpec> {
        let spec = self.spec;
        self.tokens
            .get(index)
            .and_then(|token| spec.option_for_token(token))
    }

    pub fn is_option_at(&self, index: usize) -> bool {
        self.option_at(index).is_some()
    }

    /// Trimmed, unquoted token at `index`; see [`token_at`](Self::token_at).
    pub fn token(&self, index: isize) -> Option<&str> {
        self.token_at(index, true)
    }

    /// Token at `index`, counting from the end when negative.
    ///
    /// Returns `None` when the index is out of range or the token is empty
    /// (after trimming, if `trim` is set). Otherwise one layer of quotes is
    /// stripped.
    ///
    /// # Examples
    ///
    /// ```
    /// use argspec_core::Specification;
    ///
    /// let spec = Specification::new();
    /// let args = spec.parse(["a", " ", "\"c\""]);
    ///
    /// assert_eq!(args.token(0), Some("a"));
    /// assert_eq!(args.token(-1), Some("c"));
    /// assert_eq!(args.token(1), None);
    /// assert_eq!(args.token_at(1, false), Some(" "));
    /// assert_eq!(args.token(3), None);
    /// assert_eq!(args.token(-4), None);
    /// ```
    pub fn token_at(&self, index: isize, trim: bool) -> Option<&str> {
        let position = if index < 0 {
            self.tokens.len().checked_sub(index.unsigned_abs())?
        } else {
            index.unsigned_abs()
        };
        self.token_at_position(position, trim)
    }

    /// [`token_at`](Self::token_at) with a fallback for missing or blank
    /// tokens.
    pub fn token_or<'a>(&'a self, index: isize, trim: bool, default: &'a str) -> &'a str {
        self.token_at(index, trim).unwrap_or(default)
    }

    fn token_at_position(&self, position: usize, trim: bool) -> Option<&str> {
        let token = self.tokens.get(position)?;
        let token = if trim { token.trim() } else { token.as_str() };
        if token.is_empty() {
            return None;
        }
        Some(unwrap_token(token))
    }

    /// Parameter value of option `name`.
    ///
    /// Resolves to `None` when the option is undeclared, takes no
    /// parameter, is absent, has nothing after it, or (with pattern
    /// enforcement on) its value does not match the declared pattern.
    /// Use [`try_option_parameter`](Self::try_option_parameter) to tell
    /// these apart.
    pub fn option_parameter(&self, name: &str) -> Option<&str> {
        match self.try_option_parameter(name) {
            Ok(value) => value,
            Err(QueryError::UndeclaredOption(_)) => {
                warn!(option = name, "Parameter requested for undeclared option");
                None
            }
            Err(_) => None,
        }
    }

    /// [`option_parameter`](Self::option_parameter) with a fallback.
    pub fn option_parameter_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.option_parameter(name).unwrap_or(default)
    }

    /// Strict form of [`option_parameter`](Self::option_parameter).
    ///
    /// `Ok(None)` means the option is declared and parameterized but absent
    /// from the tokens or missing its value.
    ///
    /// # Errors
    ///
    /// - [`QueryError::UndeclaredOption`] if no option is named `name`.
    /// - [`QueryError::NotParameterized`] if the option takes no parameter.
    /// - [`QueryError::PatternMismatch`] if pattern enforcement is enabled
    ///   and the value does not match.
    pub fn try_option_parameter(&self, name: &str) -> Result<Option<&str>, QueryError> {
        let option = self
            .spec
            .find_option(name)
            .ok_or_else(|| QueryError::UndeclaredOption(name.to_string()))?;
        if !option.is_parameterized() {
            return Err(QueryError::NotParameterized(option.short.clone()));
        }
        let Some(index) = self.index_of_option(option) else {
            return Ok(None);
        };
        let Some(value) = self.token_at_position(index + 1, true) else {
            return Ok(None);
        };

        if self.spec.config.enforce_parameter_patterns {
            if let Some(pattern) = option.parameter_pattern() {
                if !pattern.is_match(value) {
                    debug!(
                        option = %option.short,
                        value,
                        pattern = pattern.as_str(),
                        "Parameter rejected by pattern"
                    );
                    return Err(QueryError::PatternMismatch {
                        option: option.short.clone(),
                        value: value.to_string(),
                        pattern: pattern.as_str().to_string(),
                    });
                }
            }
        }

        Ok(Some(value))
    }

    /// Parameter of option `name` as an integer, or `default`.
    pub fn option_parameter_as_int(&self, name: &str, default: i64) -> i64 {
        parse_integer(self.option_parameter(name), default)
    }

    /// Parameter of option `name` as a path, or `default`.
    pub fn option_parameter_as_path(&self, name: &str, default: Option<PathBuf>) -> Option<PathBuf> {
        to_path(self.option_parameter(name)).or(default)
    }

    /// Trailing positional values, in order.
    ///
    /// Tokens are scanned from the end. Anything that is not a declared
    /// option is collected; the first declared option stops the scan. If
    /// that option is parameterized, the value collected last belonged to
    /// it and is dropped. Values between options earlier on the line are
    /// never reached.
    ///
    /// # Examples
    ///
    /// ```
    /// use argspec_core::Specification;
    ///
    /// let mut spec = Specification::new();
    /// spec.declare_option("o", None).unwrap().with_parameter("out").unwrap();
    /// spec.declare_option("f", None).unwrap();
    ///
    /// let args = spec.parse(["-f", "x", "-o", "p", "a", "b"]);
    /// assert_eq!(args.positional_args(), vec!["a", "b"]);
    ///
    /// let args = spec.parse(["-o", "p", "-x", "a"]);
    /// assert_eq!(args.positional_args(), vec!["-x", "a"]);
    /// ```
    pub fn positional_args(&self) -> Vec<&str> {
        let mut values = Vec::new();

        for (index, token) in self.tokens.iter().enumerate().rev() {
            let option = if token.starts_with('-') {
                self.spec.option_for_token(token)
            } else {
                None
            };

            let Some(option) = option else {
                values.push(unwrap_token(token));
                continue;
            };

            let dropped = option.is_parameterized() && values.pop().is_some();
            debug!(
                boundary = index,
                option = %option.short,
                dropped_parameter = dropped,
                "Positional scan reached option"
            );
            break;
        }

        values.reverse();
        values
    }

    /// Positional value at `index`.
    pub fn positional_arg(&self, index: usize) -> Option<&str> {
        let index = isize::try_from(index).ok()?;
        value_at(&self.positional_args(), index).copied()
    }

    /// Returns `true` if a non-blank positional value exists at `index`.
    pub fn is_positional_arg_present(&self, index: usize) -> bool {
        self.positional_arg(index).is_some_and(|v| !is_blank(v))
    }

    /// Non-blank positional values as paths. Existence is not checked.
    pub fn positional_args_as_paths(&self) -> Vec<PathBuf> {
        self.positional_args()
            .into_iter()
            .filter(|v| !is_blank(v))
            .map(PathBuf::from)
            .collect()
    }

    /// Positional value at `index` as a path, unless blank.
    pub fn positional_arg_as_path(&self, index: usize) -> Option<PathBuf> {
        self.positional_arg(index)
            .filter(|v| !is_blank(v))
            .map(PathBuf::from)
    }

    /// Returns `true` if `-v` (or its long form) is present.
    pub fn is_verbose(&self) -> bool {
        self.has_option("v")
    }

    /// Returns `true` if `-q` (or its long form) is present.
    pub fn is_quiet(&self) -> bool {
        self.has_option("q")
    }

    /// Returns `true` if `-h` (or its long form) is present.
    pub fn is_help(&self) -> bool {
        self.has_option("h")
    }

    /// Options not marked optional that do not appear in the tokens.
    ///
    /// Parsing never enforces presence; this is a report for callers that
    /// want to.
    pub fn missing_required_options(&self) -> Vec<&'s OptionSpec> {
        self.spec
            .options
            .iter()
            .filter(|o| !o.is_optional() && self.index_of_option(o).is_none())
            .collect()
    }
}

impl fmt::Display for ParsedArguments<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParsedArguments [{}]", self.tokens.join(" ").trim())
    }
}
