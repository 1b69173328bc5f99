use std::path::PathBuf;

use argspec_core::{DeclarationError, HelpStream, ParserConfig, QueryError, Specification, sink};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn archive_spec() -> Result<Specification, DeclarationError> {
    let mut spec = Specification::new();
    spec.set_command_name("archive")
        .set_header_text("archive - bundle files");
    spec.declare_option("o", Some("output"))?
        .with_parameter("file")?
        .with_description("archive to write");
    spec.declare_option("l", Some("level"))?
        .with_parameter("n")?
        .with_pattern("[0-9]")?
        .optional()
        .with_description("compression level\n0 stores, 9 is smallest");
    spec.declare_option("f", None)?
        .optional()
        .with_description("overwrite an existing archive");
    spec.with_verbose_flag()?.with_quiet_flag()?.with_help_flag()?;
    spec.declare_positional("base")?
        .with_description("directory the entries are relative to");
    spec.declare_positional("entries")?
        .variadic()?
        .optional()
        .with_description("files to add");
    Ok(spec)
}

// ---------------------------------------------------------------------------
// Declaration invariants
// ---------------------------------------------------------------------------

#[test]
fn test_duplicate_short_name_with_other_long_name_fails() {
    let mut spec = Specification::new();
    spec.declare_option("x", Some("extract")).unwrap();
    let err = spec.declare_option("x", Some("exclude")).unwrap_err();
    assert_eq!(err, DeclarationError::DuplicateOption("x".to_string()));
}

#[test]
fn test_duplicate_long_name_fails() {
    let mut spec = Specification::new();
    spec.declare_option("x", Some("extract")).unwrap();
    let err = spec.declare_option("e", Some("extract")).unwrap_err();
    assert!(matches!(err, DeclarationError::DuplicateLongOption { ref owner, .. } if owner == "x"));
}

#[test]
fn test_duplicate_variadic_fails() {
    let mut spec = Specification::new();
    spec.declare_positional("a").unwrap().variadic().unwrap();
    let err = spec.declare_positional("b").unwrap().variadic().unwrap_err();
    assert_eq!(err, DeclarationError::DuplicateVariadic("a".to_string()));
}

#[test]
fn test_error_messages() {
    let mut spec = Specification::new();
    spec.declare_option("x", Some("extract")).unwrap();
    let err = spec.declare_option("e", Some("extract")).unwrap_err();
    assert_eq!(err.to_string(), "long option 'extract' already used by option -x");

    let err = spec
        .declare_option("n", None)
        .unwrap()
        .with_pattern("(")
        .unwrap_err();
    assert!(err.to_string().starts_with("invalid parameter pattern '('"));
}

#[test]
fn test_verbose_preset_twice_keeps_single_option() {
    let mut spec = Specification::new();
    spec.with_verbose_flag().unwrap();
    spec.with_verbose_flag().unwrap();
    assert_eq!(spec.options().len(), 1);
    assert_eq!(spec.options()[0].long_name(), Some("verbose"));
    assert_eq!(spec.options()[0].description(), Some("be more chatty"));
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

#[test]
fn test_full_command_line() {
    let spec = archive_spec().unwrap();
    let args = spec.parse([
        "-v",
        "--output",
        "'out dir/backup.tar'",
        "-l",
        "9",
        "src",
        "\"a.txt\"",
        "b.txt",
    ]);

    assert!(args.is_verbose());
    assert!(!args.is_quiet());
    assert!(!args.has_option("f"));
    assert_eq!(args.option_parameter("output"), Some("out dir/backup.tar"));
    assert_eq!(
        args.option_parameter_as_path("o", None),
        Some(PathBuf::from("out dir/backup.tar"))
    );
    assert_eq!(args.option_parameter_as_int("level", 6), 9);
    assert_eq!(args.positional_args(), vec!["src", "a.txt", "b.txt"]);
    assert_eq!(args.positional_arg(0), Some("src"));
    assert_eq!(
        args.positional_args_as_paths(),
        vec![
            PathBuf::from("src"),
            PathBuf::from("a.txt"),
            PathBuf::from("b.txt")
        ]
    );
    assert!(args.missing_required_options().is_empty());
}

#[test]
fn test_tokens_between_options_are_not_positional() {
    let spec = archive_spec().unwrap();
    let args = spec.parse(["-f", "stray", "-o", "out.tar", "base", "one"]);
    assert_eq!(args.positional_args(), vec!["base", "one"]);
    assert_eq!(args.token(1), Some("stray"));
}

#[test]
fn test_quote_round_trip() {
    let spec = archive_spec().unwrap();
    for value in ["plain", "with space", "", "-dash"] {
        for quoted in [format!("\"{value}\""), format!("'{value}'")] {
            let args = spec.parse(["-o", quoted.as_str(), quoted.as_str()]);
            assert_eq!(args.token(-1).unwrap_or(""), value);
            assert_eq!(args.positional_args(), vec![value]);
            assert_eq!(args.option_parameter("o").unwrap_or(""), value);
        }
    }
}

#[test]
fn test_mismatched_quotes_are_verbatim() {
    let spec = Specification::new();
    let args = spec.parse(["\"left", "right'", "'mixed\""]);
    assert_eq!(args.token(0), Some("\"left"));
    assert_eq!(args.token(1), Some("right'"));
    assert_eq!(args.token(2), Some("'mixed\""));
    assert_eq!(args.positional_args(), vec!["\"left", "right'", "'mixed\""]);
}

#[test]
fn test_missing_parameter_defaults() {
    let spec = archive_spec().unwrap();
    let args = spec.parse(["-o"]);
    assert_eq!(args.option_parameter("o"), None);
    assert_eq!(args.option_parameter_or("o", "default.tar"), "default.tar");
    assert_eq!(args.try_option_parameter("o"), Ok(None));
}

#[test]
fn test_undeclared_option_is_soft_but_distinguishable() {
    let spec = archive_spec().unwrap();
    let args = spec.parse(["-z", "value"]);
    assert_eq!(args.option_parameter("z"), None);
    assert_eq!(
        args.try_option_parameter("z"),
        Err(QueryError::UndeclaredOption("z".to_string()))
    );
    assert!(!args.has_option("z"));
}

#[test]
fn test_pattern_enforcement_is_opt_in() {
    let mut spec = archive_spec().unwrap();
    let args = spec.parse(["-l", "high"]);
    assert_eq!(args.option_parameter("l"), Some("high"));
    assert_eq!(args.option_parameter_as_int("l", 6), 6);

    spec.with_config(ParserConfig::from_yaml_str("enforce_parameter_patterns: true").unwrap());
    let args = spec.parse(["-l", "high"]);
    assert_eq!(args.option_parameter("l"), None);
    let args = spec.parse(["-l", "7"]);
    assert_eq!(args.option_parameter("l"), Some("7"));
}

#[test]
fn test_missing_required_options_report() {
    let spec = archive_spec().unwrap();
    let args = spec.parse(["base"]);
    let missing: Vec<&str> = args
        .missing_required_options()
        .iter()
        .map(|o| o.short_name())
        .collect();
    assert_eq!(missing, vec!["o"]);
}

#[test]
fn test_empty_input() {
    let spec = archive_spec().unwrap();
    let args = spec.parse(Vec::<&str>::new());
    assert!(args.is_empty());
    assert!(args.positional_args().is_empty());
    assert_eq!(args.positional_arg(0), None);
    assert!(!args.is_verbose());
}

#[test]
fn test_views_share_one_specification() {
    let spec = archive_spec().unwrap();
    let first = spec.parse(["-q"]);
    let second = spec.parse(["-v", "x"]);
    assert!(first.is_quiet());
    assert!(second.is_verbose());
    assert_eq!(second.positional_args(), vec!["x"]);
    assert!(std::ptr::eq(first.specification(), second.specification()));
}

// ---------------------------------------------------------------------------
// Help rendering
// ---------------------------------------------------------------------------

#[test]
fn test_rendered_help() {
    let spec = archive_spec().unwrap();
    let expected = [
        "archive - bundle files",
        "usage: archive -o <file> [-l <n>] [-f] [-v] [-q] [-h] <base> <entries>...",
        "",
        "-o, --output <file>  archive to write",
        "-l, --level <n>      compression level",
        "                     0 stores, 9 is smallest",
        "-f                   overwrite an existing archive",
        "-v, --verbose        be more chatty",
        "-q, --quiet          be as quiet as possible",
        "-h, --help           show the help information",
        "",
        "<base>               directory the entries are relative to",
        "<entries>...         files to add",
    ]
    .join("\n");
    assert_eq!(spec.render_help(None), expected);
}

#[test]
fn test_write_help_to_buffer() {
    let mut spec = archive_spec().unwrap();
    spec.set_usage_text("archive [options] <base> <entries>...")
        .set_footer_text("report bugs to the maintainers");

    let mut out = Vec::new();
    sink::write_help(&spec, Some("missing <base>"), &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "missing <base>\n\narchive - bundle files\nusage: archive [options] <base> <entries>...\nreport bugs to the maintainers\n"
    );
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn test_config_file_drives_specification() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("argspec.yml");
    std::fs::write(&path, "help_stream: stderr\nenforce_parameter_patterns: true\n").unwrap();

    let mut spec = archive_spec().unwrap();
    spec.with_config(ParserConfig::load(&path).unwrap());
    assert_eq!(spec.config().help_stream, HelpStream::Stderr);
    assert!(spec.config().enforce_parameter_patterns);
}

#[test]
fn test_specification_json_description() {
    let spec = archive_spec().unwrap();
    let json: serde_json::Value = serde_json::from_str(&spec.to_json().unwrap()).unwrap();
    assert_eq!(json["command_name"], "archive");
    assert_eq!(json["options"].as_array().unwrap().len(), 6);
    assert_eq!(json["positionals"][1]["variadic"], true);
    assert_eq!(json["options"][1]["pattern"], "[0-9]");
}
