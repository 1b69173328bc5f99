//! Declared option and positional argument types.
//!
//! Both types are created and mutated only through the builders on
//! [`Specification`](crate::Specification), which enforce declaration-time
//! invariants. Read access is public.

use regex::Regex;
use serde::{Serialize, Serializer};

/// A compiled validation pattern attached to an option parameter.
///
/// The source is kept verbatim for display and serialization. Matching is
/// against the whole value.
#[derive(Debug, Clone)]
pub struct ParameterPattern {
    source: String,
    anchored: Regex,
}

impl ParameterPattern {
    pub(crate) fn compile(source: &str) -> std::result::Result<Self, regex::Error> {
        // Validate the pattern as given before wrapping it.
        Regex::new(source)?;
        let anchored = Regex::new(&format!("^(?:{source})$"))?;
        Ok(Self {
            source: source.to_string(),
            anchored,
        })
    }

    /// Returns the pattern as declared.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns `true` if the whole value matches the pattern.
    pub fn is_match(&self, value: &str) -> bool {
        self.anchored.is_match(value)
    }
}

impl Serialize for ParameterPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

/// A declared flag-style option.
///
/// Matched on the command line as `-short` or `--long`. When a parameter
/// name is set, the token following the option is its value.
#[derive(Debug, Clone, Serialize)]
pub struct OptionSpec {
    pub(crate) short: String,
    pub(crate) long: Option<String>,
    pub(crate) parameter: Option<String>,
    pub(crate) pattern: Option<ParameterPattern>,
    pub(crate) optional: bool,
    pub(crate) description: Option<String>,
}

impl OptionSpec {
    pub(crate) fn new(short: &str) -> Self {
        Self {
            short: short.to_string(),
            long: None,
            parameter: None,
            pattern: None,
            optional: false,
            description: None,
        }
    }

    /// Short name, without the leading hyphen.
    pub fn short_name(&self) -> &str {
        &self.short
    }

    /// Long name, without the leading hyphens.
    pub fn long_name(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// Name of the parameter this option consumes, if any.
    pub fn parameter_name(&self) -> Option<&str> {
        self.parameter.as_deref()
    }

    /// Validation pattern recorded for the parameter.
    pub fn parameter_pattern(&self) -> Option<&ParameterPattern> {
        self.pattern.as_ref()
    }

    /// Returns `true` if the option consumes the following token.
    pub fn is_parameterized(&self) -> bool {
        self.parameter.is_some()
    }

    /// Returns `true` if the option is marked optional in usage text.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns `true` if `name` equals the short or the long name.
    pub fn has_name(&self, name: &str) -> bool {
        self.short == name || self.long.as_deref() == Some(name)
    }

    /// Returns `true` if `token` is exactly `-short` or `--long`.
    ///
    /// # Examples
    ///
    /// ```
    /// use argspec_core::Specification;
    ///
    /// let mut spec = Specification::new();
    /// spec.declare_option("v", Some("verbose")).unwrap();
    /// let option = spec.find_option("v").unwrap();
    ///
    /// assert!(option.matches_token("-v"));
    /// assert!(option.matches_token("--verbose"));
    /// assert!(!option.matches_token("--v"));
    /// assert!(!option.matches_token("-verbose"));
    /// ```
    pub fn matches_token(&self, token: &str) -> bool {
        if let Some(short) = token.strip_prefix('-') {
            if short == self.short {
                return true;
            }
        }
        match (token.strip_prefix("--"), self.long.as_deref()) {
            (Some(long), Some(own)) => long == own,
            _ => false,
        }
    }
}

impl std::fmt::Display for OptionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "option -{}", self.short)
    }
}

/// A declared trailing positional argument slot.
#[derive(Debug, Clone, Serialize)]
pub struct PositionalSpec {
    pub(crate) name: String,
    pub(crate) optional: bool,
    pub(crate) variadic: bool,
    pub(crate) description: Option<String>,
}

impl PositionalSpec {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            optional: false,
            variadic: false,
            description: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Returns `true` if this slot may take more than one value.
    pub fn is_variadic(&self) -> bool {
        self.variadic
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
