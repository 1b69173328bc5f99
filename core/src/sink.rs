//! Process I/O glue.
//!
//! The engine itself never reads process arguments or writes to streams;
//! these helpers connect it to the running program.

use std::io::{self, Write};

use crate::config::HelpStream;
use crate::parsed::ParsedArguments;
use crate::spec::Specification;

/// Writes the rendered help text and a trailing newline to `writer`.
pub fn write_help<W: Write>(spec: &Specification, message: Option<&str>, mut writer: W) -> io::Result<()> {
    writeln!(writer, "{}", spec.render_help(message))
}

/// Prints the rendered help text to `stream`, or to the stream configured
/// on the specification when `stream` is `None`.
pub fn print_help(spec: &Specification, message: Option<&str>, stream: Option<HelpStream>) -> io::Result<()> {
    match stream.unwrap_or(spec.config().help_stream) {
        HelpStream::Stdout => write_help(spec, message, io::stdout().lock()),
        HelpStream::Stderr => write_help(spec, message, io::stderr().lock()),
    }
}

/// Parses the arguments of the current process, without the program name.
pub fn parse_process_args(spec: &Specification) -> ParsedArguments<'_> {
    spec.parse(std::env::args().skip(1))
}
