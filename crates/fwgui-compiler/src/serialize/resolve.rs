//! Symbolic reference resolution.
//!
//! Names resolve to 1-based positions in the project collections. Index 0
//! means "none": it is what an unset reference packs as, and also what a
//! reference packs as when it cannot be resolved (with a diagnostic) or when
//! its position does not fit a byte (silently).

use fwgui_core::StyleRef;

use super::context::Context;
use crate::diagnostics::DiagnosticKind;

/// 1-based position of `name` in `names`, 0 when beyond 255.
pub(crate) fn item_index<'n>(names: impl IntoIterator<Item = &'n str>, name: &str) -> Option<u8> {
    let position = names.into_iter().position(|n| n == name)?;
    Some(u8::try_from(position + 1).unwrap_or(0))
}

/// Empty names count as unset.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl Context<'_> {
    fn lookup<'n>(
        &mut self,
        kind: DiagnosticKind,
        property: &str,
        names: impl IntoIterator<Item = &'n str>,
        name: &str,
    ) -> u8 {
        match item_index(names, name) {
            Some(index) => index,
            None => {
                self.report(kind, property, Some(name));
                0
            }
        }
    }

    pub(crate) fn style_index(&mut self, property: &str, style: &StyleRef) -> u8 {
        let project = self.project;
        match style.name() {
            Some(name) => self.lookup(
                DiagnosticKind::UnresolvedStyle,
                property,
                project.styles.iter().map(|s| s.name.as_str()),
                name,
            ),
            // Inline style without a parent.
            None => {
                self.report(DiagnosticKind::UnresolvedStyle, property, None);
                0
            }
        }
    }

    pub(crate) fn optional_style(&mut self, property: &str, style: Option<&StyleRef>) -> u8 {
        match style.filter(|s| s.is_set()) {
            Some(style) => self.style_index(property, style),
            None => 0,
        }
    }

    /// Index of the style named `default`, 0 when there is none.
    pub(crate) fn default_style_index(&self) -> u8 {
        item_index(self.project.styles.iter().map(|s| s.name.as_str()), "default").unwrap_or(0)
    }

    pub(crate) fn optional_font(&mut self, property: &str, name: Option<&str>) -> u8 {
        let project = self.project;
        non_empty(name).map_or(0, |name| {
            self.lookup(
                DiagnosticKind::UnresolvedFont,
                property,
                project.fonts.iter().map(|f| f.name.as_str()),
                name,
            )
        })
    }

    pub(crate) fn optional_bitmap(&mut self, property: &str, name: Option<&str>) -> u8 {
        let project = self.project;
        non_empty(name).map_or(0, |name| {
            self.lookup(
                DiagnosticKind::UnresolvedBitmap,
                property,
                project.bitmaps.iter().map(|b| b.name.as_str()),
                name,
            )
        })
    }

    pub(crate) fn optional_action(&mut self, property: &str, name: Option<&str>) -> u8 {
        let project = self.project;
        non_empty(name).map_or(0, |name| {
            self.lookup(
                DiagnosticKind::UnresolvedAction,
                property,
                project.actions.iter().map(|a| a.name.as_str()),
                name,
            )
        })
    }

    pub(crate) fn optional_variable(&mut self, property: &str, name: Option<&str>) -> u8 {
        let project = self.project;
        non_empty(name).map_or(0, |name| {
            self.lookup(
                DiagnosticKind::UnresolvedVariable,
                property,
                project.global_variables.iter().map(|v| v.name.as_str()),
                name,
            )
        })
    }

    /// Position among the pages used as user widgets.
    pub(crate) fn optional_page_layout(&mut self, property: &str, name: Option<&str>) -> u8 {
        let project = self.project;
        non_empty(name).map_or(0, |name| {
            self.lookup(
                DiagnosticKind::UnresolvedPageLayout,
                property,
                project.user_widget_pages().map(|p| p.name.as_str()),
                name,
            )
        })
    }
}
