use indoc::indoc;

use crate::{
    DataContext, Orientation, Rect, ScreenOrientation, StaticData, WidgetKind, parse_project,
};

const SAMPLE_PROJECT: &str = indoc! {r##"
    {
        "pages": [
            {
                "name": "Main",
                "width": 480,
                "height": 272,
                "closePageIfTouchedOutside": true,
                "widgets": [
                    { "type": "Text", "left": 10, "top": 20, "width": 100, "height": 30, "text": "Hello" },
                    { "type": "Container", "widgets": [] }
                ],
                "portrait": {
                    "width": 272,
                    "height": 480,
                    "widgets": []
                }
            },
            { "name": "Header", "usedAsUserWidget": true, "widgets": [] },
            { "name": "Settings", "width": 480, "height": 272 }
        ],
        "styles": [
            { "name": "default", "color": "#ffffff" }
        ],
        "fonts": [
            { "name": "Small", "ascent": 10, "descent": 2, "screenOrientation": "portrait" }
        ],
        "bitmaps": [
            { "name": "Logo", "image": "logo.raw" }
        ],
        "globalVariables": [ { "name": "temperature" } ],
        "actions": [ { "name": "open_settings" } ],
        "data": {
            "items": [1, 2, 3],
            "mode": 2,
            "flag": true
        }
    }
"##};

#[test]
fn parse_sample_project() {
    let project = parse_project(SAMPLE_PROJECT).unwrap();

    assert_eq!(project.pages.len(), 3);
    assert_eq!(project.styles.len(), 1);
    assert_eq!(project.fonts[0].bpp, 1);
    assert_eq!(project.fonts[0].screen_orientation, ScreenOrientation::Portrait);
    assert_eq!(project.bitmaps[0].image.as_deref(), Some("logo.raw"));
    assert_eq!(project.global_variables[0].name, "temperature");
    assert_eq!(project.actions[0].name, "open_settings");
}

#[test]
fn screen_and_user_widget_pages_are_split() {
    let project = parse_project(SAMPLE_PROJECT).unwrap();

    let screens: Vec<_> = project.screen_pages().map(|p| p.name.as_str()).collect();
    let user_widgets: Vec<_> = project
        .user_widget_pages()
        .map(|p| p.name.as_str())
        .collect();

    assert_eq!(screens, ["Main", "Settings"]);
    assert_eq!(user_widgets, ["Header"]);
}

#[test]
fn frame_for_uses_orientation_override() {
    let project = parse_project(SAMPLE_PROJECT).unwrap();
    let main = project.page("Main").unwrap();

    let portrait = main.frame_for(Orientation::Portrait);
    assert_eq!(portrait.rect, Rect::new(0, 0, 272, 480));
    assert!(portrait.widgets.is_empty());
    assert!(portrait.close_page_if_touched_outside);

    let landscape = main.frame_for(Orientation::Landscape);
    assert_eq!(landscape.rect, Rect::new(0, 0, 480, 272));
    assert_eq!(landscape.widgets.len(), 2);
}

#[test]
fn widget_kinds_are_tagged_by_type() {
    let project = parse_project(SAMPLE_PROJECT).unwrap();
    let widgets = &project.pages[0].widgets;

    let WidgetKind::Text(text) = &widgets[0].kind else {
        panic!("expected a text widget, got {}", widgets[0].type_name());
    };
    assert_eq!(text.text.as_deref(), Some("Hello"));
    assert_eq!(widgets[0].rect(), Rect::new(10, 20, 100, 30));
    assert!(widgets[0].is_opaque());
    assert!(!widgets[1].is_opaque());
}

#[test]
fn unknown_widget_type_is_rejected() {
    let json = r#"{ "pages": [ { "name": "P", "widgets": [ { "type": "Gauge" } ] } ] }"#;

    let err = parse_project(json).unwrap_err();
    assert!(err.to_string().starts_with("invalid project JSON"));
}

#[test]
fn static_data_context() {
    let project = parse_project(SAMPLE_PROJECT).unwrap();
    let data: &dyn DataContext = &project.data;

    assert_eq!(data.array_len("items"), Some(3));
    assert_eq!(data.array_len("mode"), None);
    assert_eq!(data.enum_value("mode"), Some(2));
    assert_eq!(data.enum_value("flag"), Some(1));
    assert_eq!(data.enum_value("missing"), None);
}

#[test]
fn static_data_from_iterator() {
    let data: StaticData = [("rows".to_string(), serde_json::json!([0, 0]))]
        .into_iter()
        .collect();

    assert_eq!(data.array_len("rows"), Some(2));
    assert!(data.get("cols").is_none());
}

#[test]
fn orientation_round_trips_through_str() {
    assert_eq!("portrait".parse::<Orientation>(), Ok(Orientation::Portrait));
    assert_eq!(Orientation::Landscape.to_string(), "landscape");
    assert!("sideways".parse::<Orientation>().is_err());
}

#[test]
fn rect_geometry() {
    let rect = Rect::new(10, 20, 30, 40);

    assert_eq!(rect.right(), 40);
    assert_eq!(rect.bottom(), 60);
    assert_eq!(rect.area(), 1200);
    assert_eq!(rect.offset(5, -5), Rect::new(15, 15, 30, 40));
    assert!(rect.contains_point(10, 20));
    assert!(!rect.contains_point(40, 20));
    assert!(rect.intersects(&Rect::new(39, 59, 10, 10)));
    assert!(!rect.intersects(&Rect::new(40, 20, 10, 10)));
    assert!(Rect::new(0, 0, 0, 0).is_degenerate());
    assert!(!Rect::new(0, 0, 0, 5).is_degenerate());
    assert_eq!(rect.to_string(), "{10, 20, 30, 40}");
}
