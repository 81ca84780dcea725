//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch to command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use fwgui_compiler::SectionName;
use fwgui_core::Orientation;

use super::ColorChoice;
use crate::commands::build::BuildArgs;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::rects::RectsArgs;

pub struct BuildParams {
    pub project_path: PathBuf,
    pub sections: Option<Vec<SectionName>>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub strict: bool,
    pub color: ColorChoice,
}

impl BuildParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            project_path: project_path(m),
            sections: m
                .get_many::<SectionName>("section")
                .map(|values| values.copied().collect()),
            output: m.get_one::<PathBuf>("output").cloned(),
            config: m.get_one::<PathBuf>("config").cloned(),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<BuildParams> for BuildArgs {
    fn from(p: BuildParams) -> Self {
        Self {
            project_path: p.project_path,
            sections: p.sections,
            output: p.output,
            config: p.config,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub project_path: PathBuf,
    pub strict: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            project_path: project_path(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            project_path: p.project_path,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub project_path: PathBuf,
    pub orientation: Orientation,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            project_path: project_path(m),
            orientation: m
                .get_one::<String>("orientation")
                .and_then(|s| s.parse().ok())
                .unwrap_or(Orientation::Portrait),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            project_path: p.project_path,
            orientation: p.orientation,
            color: p.color.should_colorize(),
        }
    }
}

pub struct RectsParams {
    pub project_path: PathBuf,
    pub page: String,
}

impl RectsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            project_path: project_path(m),
            page: m.get_one::<String>("page").cloned().unwrap_or_default(),
        }
    }
}

impl From<RectsParams> for RectsArgs {
    fn from(p: RectsParams) -> Self {
        Self {
            project_path: p.project_path,
            page: p.page,
        }
    }
}

/// Required by every command, so clap guarantees it is present.
fn project_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("project_path")
        .cloned()
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
