//! Style table.

use fwgui_core::{HorizontalAlign, Style, VerticalAlign};
use indexmap::IndexSet;

use super::context::Context;
use crate::emit::{Field, ObjectId};

pub const STYLE_FLAGS_BORDER: u16 = 1 << 0;
pub const STYLE_FLAGS_HORZ_ALIGN_LEFT: u16 = 0 << 1;
pub const STYLE_FLAGS_HORZ_ALIGN_RIGHT: u16 = 1 << 1;
pub const STYLE_FLAGS_HORZ_ALIGN_CENTER: u16 = 2 << 1;
pub const STYLE_FLAGS_VERT_ALIGN_TOP: u16 = 0 << 3;
pub const STYLE_FLAGS_VERT_ALIGN_BOTTOM: u16 = 1 << 3;
pub const STYLE_FLAGS_VERT_ALIGN_CENTER: u16 = 2 << 3;
pub const STYLE_FLAGS_BLINK: u16 = 1 << 5;

impl Context<'_> {
    /// `u8 font, u16 flags, u16 background, u16 color, u16 border color,
    /// u8 padding left, u8 padding top`
    pub(crate) fn style(&mut self, style: &Style, colors: &mut IndexSet<u16>) -> ObjectId {
        let project = self.project;
        let resolved = project.resolve_style(style);

        let font = self.optional_font("fontName", resolved.font_name);

        let mut flags = 0;
        if resolved.border_size.left > 0 {
            flags |= STYLE_FLAGS_BORDER;
        }
        flags |= match resolved.align_horizontal {
            HorizontalAlign::Left => STYLE_FLAGS_HORZ_ALIGN_LEFT,
            HorizontalAlign::Right => STYLE_FLAGS_HORZ_ALIGN_RIGHT,
            HorizontalAlign::Center => STYLE_FLAGS_HORZ_ALIGN_CENTER,
        };
        flags |= match resolved.align_vertical {
            VerticalAlign::Top => STYLE_FLAGS_VERT_ALIGN_TOP,
            VerticalAlign::Bottom => STYLE_FLAGS_VERT_ALIGN_BOTTOM,
            VerticalAlign::Center => STYLE_FLAGS_VERT_ALIGN_CENTER,
        };
        if resolved.blink {
            flags |= STYLE_FLAGS_BLINK;
        }

        colors.insert(resolved.background_color);
        colors.insert(resolved.color);
        colors.insert(resolved.border_color);

        let s = [
            Field::UInt8(font),
            Field::UInt16(flags),
            Field::UInt16(resolved.background_color),
            Field::UInt16(resolved.color),
            Field::UInt16(resolved.border_color),
            Field::u8(resolved.padding.left),
            Field::u8(resolved.padding.top),
        ]
        .into_iter()
        .collect();
        self.graph.add_struct(s)
    }

    /// Root struct holding the list of every project style.
    pub(crate) fn style_table(&mut self, colors: &mut IndexSet<u16>) -> ObjectId {
        let project = self.project;
        let items = project
            .styles
            .iter()
            .map(|style| self.at(format!("styles[{}]", style.name), |cx| cx.style(style, colors)))
            .collect();
        self.graph.add_struct([Field::ObjectList(items)].into_iter().collect())
    }
}
