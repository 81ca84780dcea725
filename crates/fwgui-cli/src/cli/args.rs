//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};
use fwgui_compiler::SectionName;

/// Project file (positional, required).
pub fn project_path_arg() -> Arg {
    Arg::new("project_path")
        .value_name("PROJECT")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Project JSON file")
}

/// Sections to build (-s/--section, repeatable).
pub fn section_arg() -> Arg {
    Arg::new("section")
        .short('s')
        .long("section")
        .value_name("SECTION")
        .action(ArgAction::Append)
        .value_parser(|s: &str| s.parse::<SectionName>().map_err(|e| e.to_string()))
        .help("Section to build (repeatable, all sections by default)")
}

/// Output directory (-o/--output).
pub fn output_dir_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Write each section to <DIR>/<SECTION>.h instead of stdout")
}

/// Build configuration file (--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Formatting options as JSON (indent, bytesPerLine)")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Document orientation (--orientation).
pub fn orientation_arg() -> Arg {
    Arg::new("orientation")
        .long("orientation")
        .value_name("ORIENTATION")
        .default_value("portrait")
        .value_parser(["portrait", "landscape"])
        .help("Document orientation")
}

/// Page name (-p/--page).
pub fn page_arg() -> Arg {
    Arg::new("page")
        .short('p')
        .long("page")
        .value_name("NAME")
        .required(true)
        .help("Page to analyze")
}

/// Log verbosity (-v, repeatable).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for info, -vv for debug)")
}
