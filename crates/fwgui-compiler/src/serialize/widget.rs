//! Widget structs and their kind-specific payloads.
//!
//! Every widget packs as
//!
//! ```text
//! u8 type, u8 data, u8 action, i16 x, i16 y, u16 width, u16 height,
//! u8 style, ptr specific
//! ```
//!
//! Pages pack as containers whose payload additionally lists the page's
//! transparent rectangles and the close-if-touched-outside flag.

use fwgui_core::{BarGraphOrientation, ListType, PageFrame, Rect, StyleRef, Widget, WidgetKind};

use super::context::Context;
use super::resolve::non_empty;
use crate::diagnostics::DiagnosticKind;
use crate::emit::{Field, ObjectId, Struct};
use crate::page;

pub const WIDGET_TYPE_CONTAINER: u8 = 1;
pub const WIDGET_TYPE_LIST: u8 = 2;
pub const WIDGET_TYPE_SELECT: u8 = 3;
pub const WIDGET_TYPE_DISPLAY_DATA: u8 = 4;
pub const WIDGET_TYPE_TEXT: u8 = 5;
pub const WIDGET_TYPE_MULTILINE_TEXT: u8 = 6;
pub const WIDGET_TYPE_RECTANGLE: u8 = 7;
pub const WIDGET_TYPE_BITMAP: u8 = 8;
pub const WIDGET_TYPE_BUTTON: u8 = 9;
pub const WIDGET_TYPE_TOGGLE_BUTTON: u8 = 10;
pub const WIDGET_TYPE_BUTTON_GROUP: u8 = 11;
pub const WIDGET_TYPE_BAR_GRAPH: u8 = 13;
pub const WIDGET_TYPE_USER_WIDGET: u8 = 14;
pub const WIDGET_TYPE_YT_GRAPH: u8 = 15;
pub const WIDGET_TYPE_UP_DOWN: u8 = 16;
pub const WIDGET_TYPE_LIST_GRAPH: u8 = 17;

pub fn type_code(kind: &WidgetKind) -> u8 {
    match kind {
        WidgetKind::Container(_) => WIDGET_TYPE_CONTAINER,
        WidgetKind::List(_) => WIDGET_TYPE_LIST,
        WidgetKind::Select(_) => WIDGET_TYPE_SELECT,
        WidgetKind::DisplayData(_) => WIDGET_TYPE_DISPLAY_DATA,
        WidgetKind::Text(_) => WIDGET_TYPE_TEXT,
        WidgetKind::MultilineText(_) => WIDGET_TYPE_MULTILINE_TEXT,
        WidgetKind::Rectangle(_) => WIDGET_TYPE_RECTANGLE,
        WidgetKind::Bitmap(_) => WIDGET_TYPE_BITMAP,
        WidgetKind::Button(_) => WIDGET_TYPE_BUTTON,
        WidgetKind::ToggleButton(_) => WIDGET_TYPE_TOGGLE_BUTTON,
        WidgetKind::ButtonGroup => WIDGET_TYPE_BUTTON_GROUP,
        WidgetKind::BarGraph(_) => WIDGET_TYPE_BAR_GRAPH,
        WidgetKind::UserWidget(_) => WIDGET_TYPE_USER_WIDGET,
        WidgetKind::YtGraph(_) => WIDGET_TYPE_YT_GRAPH,
        WidgetKind::UpDown(_) => WIDGET_TYPE_UP_DOWN,
        WidgetKind::ListGraph(_) => WIDGET_TYPE_LIST_GRAPH,
    }
}

pub const LIST_TYPE_VERTICAL: u8 = 1;
pub const LIST_TYPE_HORIZONTAL: u8 = 2;

fn bar_graph_orientation(orientation: BarGraphOrientation) -> u8 {
    match orientation {
        BarGraphOrientation::LeftRight => 1,
        BarGraphOrientation::RightLeft => 2,
        BarGraphOrientation::TopBottom => 3,
        BarGraphOrientation::BottomTop => 4,
    }
}

/// Unescape widget text the way a JSON string literal is read; text that is
/// not a valid literal body is kept as written.
pub fn unescape_text(text: &str) -> String {
    serde_json::from_str::<String>(&format!("\"{text}\"")).unwrap_or_else(|_| text.to_string())
}

fn header(kind: u8, data: u8, action: u8, rect: Rect, style: u8, specific: Option<ObjectId>) -> Struct {
    [
        Field::UInt8(kind),
        Field::UInt8(data),
        Field::UInt8(action),
        Field::i16(rect.left),
        Field::i16(rect.top),
        Field::u16(rect.width),
        Field::u16(rect.height),
        Field::UInt8(style),
        Field::ObjectPtr(specific),
    ]
    .into_iter()
    .collect()
}

impl Context<'_> {
    pub(crate) fn widget(&mut self, widget: &Widget) -> ObjectId {
        let data = self.optional_variable("data", widget.data.as_deref());
        let action = self.optional_action("action", widget.action.as_deref());
        let style = self.widget_style(widget.style.as_ref());
        let specific = self.specific(widget, style);

        let s = header(type_code(&widget.kind), data, action, widget.rect(), style, specific);
        self.graph.add_struct(s)
    }

    /// Style index of a widget or page; the `default` style when unset.
    fn widget_style(&mut self, style: Option<&StyleRef>) -> u8 {
        match style.filter(|s| s.is_set()) {
            Some(style) => self.style_index("style", style),
            None => self.default_style_index(),
        }
    }

    /// Object list of `widgets`, each under `widgets[i]`.
    pub(crate) fn widget_list(&mut self, widgets: &[Widget]) -> Field {
        let items = widgets
            .iter()
            .enumerate()
            .map(|(i, child)| self.at(format!("widgets[{i}]"), |cx| cx.widget(child)))
            .collect();
        Field::ObjectList(items)
    }

    /// A page packed as a container.
    pub(crate) fn page(&mut self, frame: &PageFrame<'_>) -> ObjectId {
        let children = self.widget_list(frame.widgets);

        let rects = page::transparent_rectangles(frame, self.data)
            .into_iter()
            .map(|r| {
                let s = [Field::i16(r.left), Field::i16(r.top), Field::u16(r.width), Field::u16(r.height)]
                    .into_iter()
                    .collect();
                self.graph.add_struct(s)
            })
            .collect();

        let specific = [
            children,
            Field::ObjectList(rects),
            Field::flag(frame.close_page_if_touched_outside),
        ]
        .into_iter()
        .collect();
        let specific = self.graph.add_struct(specific);

        let style = self.widget_style(frame.style);
        let s = header(WIDGET_TYPE_CONTAINER, 0, 0, frame.rect, style, Some(specific));
        self.graph.add_struct(s)
    }

    fn text(&mut self, text: Option<&str>, default: &str) -> Field {
        let value = non_empty(text).map_or_else(|| default.to_string(), unescape_text);
        self.graph.string_field(&value)
    }

    fn specific(&mut self, widget: &Widget, style: u8) -> Option<ObjectId> {
        let fields: Vec<Field> = match &widget.kind {
            WidgetKind::Container(w) => vec![self.widget_list(&w.widgets)],
            WidgetKind::Select(w) => vec![self.widget_list(&w.widgets)],
            WidgetKind::List(w) => {
                let list_type = match w.list_type {
                    ListType::Vertical => LIST_TYPE_VERTICAL,
                    ListType::Horizontal => LIST_TYPE_HORIZONTAL,
                };
                let item = match w.item_widget.as_deref() {
                    Some(item) => Some(self.at("itemWidget", |cx| cx.widget(item))),
                    None => {
                        self.report(DiagnosticKind::MissingListItemWidget, "itemWidget", None);
                        None
                    }
                };
                vec![Field::UInt8(list_type), Field::ObjectPtr(item)]
            }
            WidgetKind::DisplayData(w) => {
                let focus = match self.optional_style("focusStyle", w.focus_style.as_ref()) {
                    0 => style,
                    focus => focus,
                };
                vec![Field::UInt8(focus)]
            }
            WidgetKind::Text(w) => vec![
                self.text(w.text.as_deref(), ""),
                Field::UInt8(u8::from(w.ignore_luminocity)),
            ],
            WidgetKind::MultilineText(w) => vec![self.text(w.text.as_deref(), "")],
            WidgetKind::Rectangle(w) => {
                let flags = u8::from(w.invert_colors) | (u8::from(w.ignore_luminocity) << 1);
                vec![Field::UInt8(flags)]
            }
            WidgetKind::Bitmap(w) => vec![Field::UInt8(
                self.optional_bitmap("bitmap", w.bitmap.as_deref()),
            )],
            WidgetKind::Button(w) => vec![
                self.text(w.text.as_deref(), ""),
                Field::UInt8(self.optional_variable("enabled", w.enabled.as_deref())),
                Field::UInt8(self.optional_style("disabledStyle", w.disabled_style.as_ref())),
            ],
            WidgetKind::ToggleButton(w) => vec![
                self.text(w.text1.as_deref(), ""),
                self.text(w.text2.as_deref(), ""),
            ],
            WidgetKind::ButtonGroup => return None,
            WidgetKind::BarGraph(w) => vec![
                Field::UInt8(bar_graph_orientation(w.orientation)),
                Field::UInt8(self.optional_style("textStyle", w.text_style.as_ref())),
                Field::UInt8(self.optional_variable("line1Data", w.line1_data.as_deref())),
                Field::UInt8(self.optional_style("line1Style", w.line1_style.as_ref())),
                Field::UInt8(self.optional_variable("line2Data", w.line2_data.as_deref())),
                Field::UInt8(self.optional_style("line2Style", w.line2_style.as_ref())),
            ],
            WidgetKind::YtGraph(w) => vec![
                Field::UInt8(self.optional_style("y1Style", w.y1_style.as_ref())),
                Field::UInt8(self.optional_variable("y2Data", w.y2_data.as_deref())),
                Field::UInt8(self.optional_style("y2Style", w.y2_style.as_ref())),
            ],
            WidgetKind::UpDown(w) => vec![
                Field::UInt8(self.optional_style("buttonsStyle", w.buttons_style.as_ref())),
                self.text(w.down_button_text.as_deref(), "<"),
                self.text(w.up_button_text.as_deref(), ">"),
            ],
            WidgetKind::ListGraph(w) => vec![
                Field::UInt8(self.optional_variable("dwellData", w.dwell_data.as_deref())),
                Field::UInt8(self.optional_variable("y1Data", w.y1_data.as_deref())),
                Field::UInt8(self.optional_style("y1Style", w.y1_style.as_ref())),
                Field::UInt8(self.optional_variable("y2Data", w.y2_data.as_deref())),
                Field::UInt8(self.optional_style("y2Style", w.y2_style.as_ref())),
                Field::UInt8(self.optional_variable("cursorData", w.cursor_data.as_deref())),
                Field::UInt8(self.optional_style("cursorStyle", w.cursor_style.as_ref())),
            ],
            WidgetKind::UserWidget(w) => vec![Field::UInt8(self.optional_page_layout(
                "userWidgetPageName",
                w.user_widget_page_name.as_deref(),
            ))],
        };

        Some(self.graph.add_struct(fields.into_iter().collect()))
    }
}
