//! Usage line and help text rendering.
//!
//! All layout is derived from the current declarations on every call; the
//! description column width is never cached.
//!
//! Layout:
//!
//! ```text
//! usage: cp [-f] -o <file> <src>...
//!
//! -f, --force          overwrite files
//! -o, --output <file>  target file
//!                      must be writable
//!
//! <src>...             files to copy
//! ```

use crate::spec::Specification;
use crate::tokens::trim_to_none;
use crate::types::{OptionSpec, PositionalSpec};

/// Gap between the widest label and the description column.
const COLUMN_GAP: usize = 2;

impl Specification {
    /// Renders the one-line synopsis: command name, options in declaration
    /// order (bracketed when optional), then positionals (`...` when
    /// variadic).
    ///
    /// # Examples
    ///
    /// ```
    /// use argspec_core::Specification;
    ///
    /// let mut spec = Specification::new();
    /// spec.declare_option("n", None).unwrap().with_parameter("count").unwrap().optional();
    /// spec.declare_option("x", None).unwrap();
    /// spec.declare_positional("file").unwrap().variadic().unwrap();
    ///
    /// assert_eq!(spec.render_usage_line(Some("tool")), "tool [-n <count>] -x <file>...");
    /// assert_eq!(spec.render_usage_line(None), "[-n <count>] -x <file>...");
    /// ```
    pub fn render_usage_line(&self, command: Option<&str>) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(command) = command.and_then(trim_to_none) {
            parts.push(command.to_string());
        }

        for option in &self.options {
            let mut part = format!("-{}", option.short);
            if let Some(parameter) = &option.parameter {
                part.push_str(&format!(" <{parameter}>"));
            }
            if option.optional {
                part = format!("[{part}]");
            }
            parts.push(part);
        }

        parts.extend(self.positionals.iter().map(positional_label));
        parts.join(" ")
    }

    /// Renders the aligned description table: options first, then a blank
    /// line, then positionals.
    ///
    /// Every label is padded to the widest label plus two spaces. Further
    /// lines of a multi-line description are indented to the same column.
    pub fn render_help_body(&self) -> String {
        let width = self.column_width();
        let mut entries: Vec<String> = self
            .options
            .iter()
            .map(|o| render_entry(&option_label(o), o.description.as_deref(), width))
            .collect();

        if !self.options.is_empty() && !self.positionals.is_empty() {
            entries.push(String::new());
        }

        entries.extend(
            self.positionals
                .iter()
                .map(|p| render_entry(&positional_label(p), p.description.as_deref(), width)),
        );
        entries.join("\n")
    }

    /// Renders `usage: <usage line>` followed by a blank line and the
    /// description table.
    pub fn render_usage_text(&self, command: Option<&str>) -> String {
        let line = self.render_usage_line(command);
        let body = self.render_help_body();
        if body.is_empty() {
            format!("usage: {line}")
        } else {
            format!("usage: {line}\n\n{body}")
        }
    }

    /// Renders the full help text.
    ///
    /// Sections, each present only when set: `message` and a blank line,
    /// the header, the usage block (the explicit usage text if one was
    /// set, otherwise computed with the configured command name), the
    /// footer. The result is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use argspec_core::Specification;
    ///
    /// let mut spec = Specification::new();
    /// spec.set_command_name("greet").set_footer_text("bye");
    /// spec.declare_positional("name").unwrap().with_description("who to greet");
    ///
    /// assert_eq!(
    ///     spec.render_help(Some("missing name")),
    ///     "missing name\n\nusage: greet <name>\n\n<name>  who to greet\nbye"
    /// );
    /// ```
    pub fn render_help(&self, message: Option<&str>) -> String {
        let mut out = String::new();

        if let Some(message) = message.and_then(trim_to_none) {
            out.push_str(message);
            out.push_str("\n\n");
        }

        if let Some(header) = &self.header_text {
            out.push_str(header);
            out.push('\n');
        }

        match &self.usage_text {
            Some(usage) => {
                out.push_str("usage: ");
                out.push_str(usage);
            }
            None => out.push_str(&self.render_usage_text(self.command_name.as_deref())),
        }

        if let Some(footer) = &self.footer_text {
            out.push('\n');
            out.push_str(footer);
        }

        out.trim().to_string()
    }

    fn column_width(&self) -> usize {
        let options = self.options.iter().map(|o| option_label(o).chars().count());
        let positionals = self
            .positionals
            .iter()
            .map(|p| positional_label(p).chars().count());
        COLUMN_GAP + options.chain(positionals).max().unwrap_or(0)
    }
}

fn option_label(option: &OptionSpec) -> String {
    let mut label = format!("-{}", option.short);
    if let Some(long) = &option.long {
        label.push_str(&format!(", --{long}"));
    }
    if let Some(parameter) = &option.parameter {
        label.push_str(&format!(" <{parameter}>"));
    }
    label
}

fn positional_label(positional: &PositionalSpec) -> String {
    if positional.variadic {
        format!("<{}>...", positional.name)
    } else {
        format!("<{}>", positional.name)
    }
}

fn render_entry(label: &str, description: Option<&str>, width: usize) -> String {
    let mut entry = format!("{label:<width$}");
    let indent = " ".repeat(width);
    for (i, line) in description.unwrap_or_default().split('\n').enumerate() {
        if i > 0 {
            entry.push('\n');
            entry.push_str(&indent);
        }
        entry.push_str(line);
    }
    entry
}
