//! Widget definitions.
//!
//! Widget kinds form a closed set keyed by the JSON `"type"` property. Each
//! kind carries only the properties its firmware payload needs.

use serde::Deserialize;

use crate::geometry::Rect;

/// A widget placed on a page or inside another widget.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    #[serde(default)]
    pub left: i32,
    #[serde(default)]
    pub top: i32,
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub height: i32,
    /// Global variable the widget displays or edits.
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub style: Option<StyleRef>,
    #[serde(flatten)]
    pub kind: WidgetKind,
}

impl Widget {
    /// Box relative to the parent widget or page.
    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }

    /// Containers, lists and selects only position their children.
    pub fn is_opaque(&self) -> bool {
        !matches!(
            self.kind,
            WidgetKind::Container(_) | WidgetKind::List(_) | WidgetKind::Select(_)
        )
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.name()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum WidgetKind {
    Container(ContainerWidget),
    List(ListWidget),
    Select(SelectWidget),
    DisplayData(DisplayDataWidget),
    Text(TextWidget),
    MultilineText(MultilineTextWidget),
    Rectangle(RectangleWidget),
    Bitmap(BitmapWidget),
    Button(ButtonWidget),
    ToggleButton(ToggleButtonWidget),
    ButtonGroup,
    BarGraph(BarGraphWidget),
    #[serde(rename = "YTGraph")]
    YtGraph(YtGraphWidget),
    UpDown(UpDownWidget),
    ListGraph(ListGraphWidget),
    UserWidget(UserWidgetWidget),
}

impl WidgetKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Container(_) => "Container",
            Self::List(_) => "List",
            Self::Select(_) => "Select",
            Self::DisplayData(_) => "DisplayData",
            Self::Text(_) => "Text",
            Self::MultilineText(_) => "MultilineText",
            Self::Rectangle(_) => "Rectangle",
            Self::Bitmap(_) => "Bitmap",
            Self::Button(_) => "Button",
            Self::ToggleButton(_) => "ToggleButton",
            Self::ButtonGroup => "ButtonGroup",
            Self::BarGraph(_) => "BarGraph",
            Self::YtGraph(_) => "YTGraph",
            Self::UpDown(_) => "UpDown",
            Self::ListGraph(_) => "ListGraph",
            Self::UserWidget(_) => "UserWidget",
        }
    }
}

/// Reference to a project style.
///
/// Either the style name, or an inline style object; inline styles resolve to
/// the style they inherit from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StyleRef {
    Named(String),
    Inline(InlineStyle),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineStyle {
    #[serde(default)]
    pub inherit_from: Option<String>,
}

impl StyleRef {
    /// Name to look up in the project styles.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            Self::Inline(inline) => inline.inherit_from.as_deref(),
        }
    }

    /// An empty name counts as no style at all.
    pub fn is_set(&self) -> bool {
        match self {
            Self::Named(name) => !name.is_empty(),
            Self::Inline(_) => true,
        }
    }
}

impl From<&str> for StyleRef {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerWidget {
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListWidget {
    #[serde(default)]
    pub list_type: ListType,
    #[serde(default)]
    pub item_widget: Option<Box<Widget>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectWidget {
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayDataWidget {
    #[serde(default)]
    pub focus_style: Option<StyleRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextWidget {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub ignore_luminocity: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultilineTextWidget {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectangleWidget {
    #[serde(default)]
    pub invert_colors: bool,
    #[serde(default)]
    pub ignore_luminocity: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BitmapWidget {
    #[serde(default)]
    pub bitmap: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonWidget {
    #[serde(default)]
    pub text: Option<String>,
    /// Variable deciding whether the button is enabled.
    #[serde(default)]
    pub enabled: Option<String>,
    #[serde(default)]
    pub disabled_style: Option<StyleRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleButtonWidget {
    #[serde(default)]
    pub text1: Option<String>,
    #[serde(default)]
    pub text2: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BarGraphOrientation {
    LeftRight,
    RightLeft,
    TopBottom,
    #[default]
    BottomTop,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarGraphWidget {
    #[serde(default)]
    pub orientation: BarGraphOrientation,
    #[serde(default)]
    pub text_style: Option<StyleRef>,
    #[serde(default)]
    pub line1_data: Option<String>,
    #[serde(default)]
    pub line1_style: Option<StyleRef>,
    #[serde(default)]
    pub line2_data: Option<String>,
    #[serde(default)]
    pub line2_style: Option<StyleRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YtGraphWidget {
    #[serde(default)]
    pub y1_style: Option<StyleRef>,
    #[serde(default)]
    pub y2_data: Option<String>,
    #[serde(default)]
    pub y2_style: Option<StyleRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpDownWidget {
    #[serde(default)]
    pub buttons_style: Option<StyleRef>,
    #[serde(default)]
    pub down_button_text: Option<String>,
    #[serde(default)]
    pub up_button_text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListGraphWidget {
    #[serde(default)]
    pub dwell_data: Option<String>,
    #[serde(default)]
    pub y1_data: Option<String>,
    #[serde(default)]
    pub y1_style: Option<StyleRef>,
    #[serde(default)]
    pub y2_data: Option<String>,
    #[serde(default)]
    pub y2_style: Option<StyleRef>,
    #[serde(default)]
    pub cursor_data: Option<String>,
    #[serde(default)]
    pub cursor_style: Option<StyleRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWidgetWidget {
    #[serde(default)]
    pub user_widget_page_name: Option<String>,
}
