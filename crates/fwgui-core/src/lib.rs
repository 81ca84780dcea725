#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Project model for the legacy firmware GUI build pipeline.
//!
//! Three layers:
//! - **Deserialization layer**: 1:1 mapping of the project JSON (pages, widgets,
//!   styles, fonts, bitmaps, variables, actions)
//! - **Resolution layer**: style inheritance, RGB565 colors, box shorthands
//! - **Evaluation layer**: the [`DataContext`] used to expand lists and selects
//!
//! The model is read-only input for the packer; nothing here writes projects back.

mod colors;
mod data;
mod geometry;
mod project;
mod style;
mod widget;

#[cfg(test)]
mod lib_tests;

pub use colors::Colors;
pub use data::{DataContext, StaticData};
pub use geometry::Rect;
pub use project::{
    Action, Bitmap, Font, GlobalVariable, Glyph, Orientation, Page, PageFrame, PageLayout,
    Project, ScreenOrientation,
};
pub use style::{
    HorizontalAlign, ResolvedStyle, Sides, SidesParseError, Style, VerticalAlign, rgb565,
};
pub use widget::{
    BarGraphOrientation, BarGraphWidget, BitmapWidget, ButtonWidget, ContainerWidget,
    DisplayDataWidget, InlineStyle, ListGraphWidget, ListType, ListWidget, MultilineTextWidget,
    RectangleWidget, SelectWidget, StyleRef, TextWidget, ToggleButtonWidget, UpDownWidget,
    UserWidgetWidget, Widget, WidgetKind, YtGraphWidget,
};

/// Errors raised while loading a project file.
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("invalid project JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a project from its JSON representation.
pub fn parse_project(json: &str) -> Result<Project, ProjectError> {
    Ok(serde_json::from_str(json)?)
}
