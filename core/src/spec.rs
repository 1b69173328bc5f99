//! The [`Specification`] aggregate and its declaration builders.
//!
//! Options and positional arguments are declared through short-lived
//! builder handles. A handle borrows the specification mutably and refers
//! to its entity by index, so every chained call sees (and validates
//! against) the whole aggregate. [`OptionBuilder::done`] and
//! [`PositionalBuilder::done`] hand the specification back.
//!
//! # Example
//!
//! ```
//! use argspec_core::{DeclarationError, Specification};
//!
//! fn build() -> Result<Specification, DeclarationError> {
//!     let mut spec = Specification::new();
//!     spec.declare_option("o", Some("output"))?
//!         .with_parameter("file")?
//!         .with_description("where to write")
//!         .done()
//!         .with_verbose_flag()?;
//!     spec.declare_positional("input")?.variadic()?;
//!     Ok(spec)
//! }
//!
//! let spec = build().unwrap();
//! assert_eq!(spec.options().len(), 2);
//! assert!(spec.positionals()[0].is_variadic());
//! ```

use serde::Serialize;
use tracing::debug;

use crate::config::ParserConfig;
use crate::error::{DeclarationError, Result};
use crate::parsed::ParsedArguments;
use crate::tokens::{strip_hyphens, trim_to_none};
use crate::types::{OptionSpec, ParameterPattern, PositionalSpec};

/// Declared options, positional arguments and help text fragments.
///
/// Options and positionals keep declaration order, which drives usage
/// rendering. A completed specification is read-only during parsing and
/// can be shared by any number of [`ParsedArguments`] views.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Specification {
    pub(crate) command_name: Option<String>,
    pub(crate) options: Vec<OptionSpec>,
    pub(crate) positionals: Vec<PositionalSpec>,
    pub(crate) header_text: Option<String>,
    pub(crate) usage_text: Option<String>,
    pub(crate) footer_text: Option<String>,
    pub(crate) config: ParserConfig,
}

impl Specification {
    /// Creates an empty specification with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an option, or returns the existing one with the same short
    /// name.
    ///
    /// A blank `long` is ignored. Re-declaring a short name is idempotent
    /// as long as `long` is absent or agrees with the existing option; an
    /// existing option without a long name receives it.
    ///
    /// # Errors
    ///
    /// - [`DeclarationError::BlankOptionName`] if `short` is blank.
    /// - [`DeclarationError::DuplicateOption`] if `short` is already used
    ///   as a long name, or the existing option has a different long name.
    /// - [`DeclarationError::DuplicateLongOption`] if another option uses
    ///   `long` as its short or long name.
    pub fn declare_option(&mut self, short: &str, long: Option<&str>) -> Result<OptionBuilder<'_>> {
        let short = trim_to_none(short).ok_or(DeclarationError::BlankOptionName)?;
        let long = long.and_then(trim_to_none);

        if let Some(index) = self.options.iter().position(|o| o.short == short) {
            let existing_long = self.options[index].long.clone();
            let builder = OptionBuilder { spec: self, index };
            return match (long, existing_long) {
                (None, _) => Ok(builder),
                (Some(requested), Some(existing)) if requested == existing => Ok(builder),
                (Some(_), Some(_)) => Err(DeclarationError::DuplicateOption(short.to_string())),
                (Some(requested), None) => builder.with_long_name(requested),
            };
        }

        if self.is_declared_long_option(short) {
            return Err(DeclarationError::DuplicateOption(short.to_string()));
        }
        if let Some(requested) = long {
            if let Some(owner) = self.options.iter().find(|o| o.has_name(requested)) {
                return Err(DeclarationError::DuplicateLongOption {
                    long: requested.to_string(),
                    owner: owner.short.clone(),
                });
            }
        }

        let mut option = OptionSpec::new(short);
        option.long = long.map(String::from);
        debug!(short = %option.short, long = ?option.long, "Declared option");
        self.options.push(option);
        let index = self.options.len() - 1;
        Ok(OptionBuilder { spec: self, index })
    }

    /// Declares a positional argument after the existing ones.
    ///
    /// # Errors
    ///
    /// Returns [`DeclarationError::BlankPositionalName`] if `name` is blank.
    pub fn declare_positional(&mut self, name: &str) -> Result<PositionalBuilder<'_>> {
        let name = trim_to_none(name).ok_or(DeclarationError::BlankPositionalName)?;
        debug!(name, position = self.positionals.len(), "Declared positional argument");
        self.positionals.push(PositionalSpec::new(name));
        let index = self.positionals.len() - 1;
        Ok(PositionalBuilder { spec: self, index })
    }

    /// Adds the optional `-v/--verbose` flag.
    pub fn with_verbose_flag(&mut self) -> Result<&mut Self> {
        Ok(self
            .declare_option("v", Some("verbose"))?
            .optional()
            .with_description("be more chatty")
            .done())
    }

    /// Adds the optional `-q/--quiet` flag.
    pub fn with_quiet_flag(&mut self) -> Result<&mut Self> {
        Ok(self
            .declare_option("q", Some("quiet"))?
            .optional()
            .with_description("be as quiet as possible")
            .done())
    }

    /// Adds the optional `-h/--help` flag.
    pub fn with_help_flag(&mut self) -> Result<&mut Self> {
        Ok(self
            .declare_option("h", Some("help"))?
            .optional()
            .with_description("show the help information")
            .done())
    }

    /// Sets the command name shown in the computed usage line.
    pub fn set_command_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.command_name = Some(name.into());
        self
    }

    /// Sets text shown above the usage line.
    pub fn set_header_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.header_text = Some(text.into());
        self
    }

    /// Replaces the computed usage block with `usage: <text>`.
    pub fn set_usage_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.usage_text = Some(text.into());
        self
    }

    /// Sets text shown below the description table.
    pub fn set_footer_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.footer_text = Some(text.into());
        self
    }

    pub fn with_config(&mut self, config: ParserConfig) -> &mut Self {
        self.config = config;
        self
    }

    pub fn command_name(&self) -> Option<&str> {
        self.command_name.as_deref()
    }

    pub fn header_text(&self) -> Option<&str> {
        self.header_text.as_deref()
    }

    pub fn usage_text(&self) -> Option<&str> {
        self.usage_text.as_deref()
    }

    pub fn footer_text(&self) -> Option<&str> {
        self.footer_text.as_deref()
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Declared options in declaration order.
    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    /// Declared positional arguments in declaration order.
    pub fn positionals(&self) -> &[PositionalSpec] {
        &self.positionals
    }

    /// Finds an option by short or long name. A leading `-` or `--` is
    /// ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use argspec_core::Specification;
    ///
    /// let mut spec = Specification::new();
    /// spec.with_quiet_flag().unwrap();
    ///
    /// assert!(spec.find_option("q").is_some());
    /// assert!(spec.find_option("quiet").is_some());
    /// assert!(spec.find_option("--quiet").is_some());
    /// assert!(spec.find_option("x").is_none());
    /// ```
    pub fn find_option(&self, name: &str) -> Option<&OptionSpec> {
        let name = strip_hyphens(name);
        self.options.iter().find(|o| o.has_name(name))
    }

    /// Finds an option by long name only.
    pub fn find_long_option(&self, long: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.long.as_deref() == Some(long))
    }

    /// Returns `true` if an option with this short name exists.
    pub fn is_declared_option(&self, short: &str) -> bool {
        self.options.iter().any(|o| o.short == short)
    }

    /// Returns `true` if an option with this long name exists.
    pub fn is_declared_long_option(&self, long: &str) -> bool {
        self.find_long_option(long).is_some()
    }

    /// Returns the option whose `-short` or `--long` form equals `token`.
    pub fn option_for_token(&self, token: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.matches_token(token))
    }

    /// Wraps raw tokens in a query view bound to this specification.
    pub fn parse<I>(&self, tokens: I) -> ParsedArguments<'_>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(|t| t.as_ref().to_string()).collect();
        ParsedArguments::new(self, tokens)
    }

    /// Like [`parse`](Self::parse), substituting an empty string for each
    /// absent token.
    pub fn parse_nullable<I, S>(&self, tokens: I) -> ParsedArguments<'_>
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let tokens: Vec<String> = tokens
            .into_iter()
            .map(|t| t.map(|s| s.as_ref().to_string()).unwrap_or_default())
            .collect();
        ParsedArguments::new(self, tokens)
    }

    /// Describes the specification as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Handle for configuring a declared option.
///
/// Returned by [`Specification::declare_option`]. Chained calls mutate the
/// option in place inside the specification.
#[derive(Debug)]
pub struct OptionBuilder<'a> {
    spec: &'a mut Specification,
    index: usize,
}

impl<'a> OptionBuilder<'a> {
    fn entry(&mut self) -> &mut OptionSpec {
        &mut self.spec.options[self.index]
    }

    /// The option as declared so far.
    pub fn option(&self) -> &OptionSpec {
        &self.spec.options[self.index]
    }

    /// Position of the option in declaration order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Sets the long name. A blank name leaves the option unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DeclarationError::DuplicateLongOption`] if another option
    /// uses the name as its short or long name.
    pub fn with_long_name(mut self, long: &str) -> Result<Self> {
        let Some(long) = trim_to_none(long) else {
            return Ok(self);
        };
        let owner = self
            .spec
            .options
            .iter()
            .enumerate()
            .find(|(i, o)| *i != self.index && o.has_name(long));
        if let Some((_, owner)) = owner {
            return Err(DeclarationError::DuplicateLongOption {
                long: long.to_string(),
                owner: owner.short.clone(),
            });
        }
        let entry = self.entry();
        entry.long = Some(long.to_string());
        debug!(short = %entry.short, long, "Set long option name");
        Ok(self)
    }

    /// Makes the option consume the following token as its parameter.
    ///
    /// # Errors
    ///
    /// Returns [`DeclarationError::BlankParameterName`] if `name` is blank.
    pub fn with_parameter(mut self, name: &str) -> Result<Self> {
        let Some(name) = trim_to_none(name) else {
            return Err(DeclarationError::BlankParameterName(self.option().short.clone()));
        };
        self.entry().parameter = Some(name.to_string());
        Ok(self)
    }

    /// Records a validation pattern for the parameter.
    ///
    /// The pattern is compiled immediately. It only affects queries when
    /// [`ParserConfig::enforce_parameter_patterns`] is set.
    ///
    /// # Errors
    ///
    /// Returns [`DeclarationError::InvalidPattern`] if `pattern` does not
    /// compile.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        let compiled = ParameterPattern::compile(pattern).map_err(|source| {
            DeclarationError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;
        self.entry().pattern = Some(compiled);
        Ok(self)
    }

    /// Marks the option optional.
    pub fn optional(self) -> Self {
        self.set_optional(true)
    }

    pub fn set_optional(mut self, optional: bool) -> Self {
        self.entry().optional = optional;
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.entry().description = Some(description.to_string());
        self
    }

    /// Returns to the owning specification.
    pub fn done(self) -> &'a mut Specification {
        self.spec
    }
}

/// Handle for configuring a declared positional argument.
#[derive(Debug)]
pub struct PositionalBuilder<'a> {
    spec: &'a mut Specification,
    index: usize,
}

impl<'a> PositionalBuilder<'a> {
    fn entry(&mut self) -> &mut PositionalSpec {
        &mut self.spec.positionals[self.index]
    }

    pub fn positional(&self) -> &PositionalSpec {
        &self.spec.positionals[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Lets this slot take more than one value.
    ///
    /// # Errors
    ///
    /// Returns [`DeclarationError::DuplicateVariadic`] if another
    /// positional is already variadic.
    pub fn variadic(mut self) -> Result<Self> {
        let existing = self
            .spec
            .positionals
            .iter()
            .enumerate()
            .find(|(i, p)| *i != self.index && p.variadic);
        if let Some((_, existing)) = existing {
            return Err(DeclarationError::DuplicateVariadic(existing.name.clone()));
        }
        let entry = self.entry();
        entry.variadic = true;
        debug!(name = %entry.name, "Marked positional argument variadic");
        Ok(self)
    }

    pub fn optional(mut self) -> Self {
        self.entry().optional = true;
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.entry().description = Some(description.to_string());
        self
    }

    /// Returns to the owning specification.
    pub fn done(self) -> &'a mut Specification {
        self.spec
    }
}
