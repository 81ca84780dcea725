//! Firmware GUI packer: turns a project into C sections for the v1 firmware.
//!
//! This crate provides the build pipeline:
//! - `page` - widget trees and transparent page regions
//! - `serialize` - widgets, styles, and fonts as relocatable object graphs
//! - `emit` - packing, the bootloader workaround, and C text helpers
//! - `build` - section orchestration
//! - `diagnostics` - unresolved references and data warnings

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod bitmap;
mod build;
pub mod config;
pub mod diagnostics;
pub mod emit;
pub mod page;
pub mod section;
pub mod serialize;

pub use bitmap::{BitmapData, BitmapError, BitmapLoader, InlineBitmapLoader};
pub use build::{BuildOutput, build};
pub use config::BuildConfig;
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use emit::EmitError;
pub use section::{ParseSectionError, SectionName};

/// Errors that abort a build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Bitmap(#[from] BitmapError),
}
