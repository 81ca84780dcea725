use fwgui_core::{Project, Rect, StaticData, parse_project};
use indoc::indoc;
use serde_json::json;

use super::{WidgetTree, transparent_rectangles};

fn project(json: &str) -> Project {
    parse_project(json).unwrap()
}

fn rects(tree: &WidgetTree<'_>) -> Vec<(Rect, bool)> {
    tree.iter().map(|n| (n.rect, n.opaque)).collect()
}

#[test]
fn container_offsets_children() {
    let project = project(indoc! {r#"
        {
          "pages": [{
            "name": "main", "left": 5, "top": 7, "width": 100, "height": 100,
            "widgets": [{
              "type": "Container", "left": 10, "top": 10, "width": 50, "height": 50,
              "widgets": [
                { "type": "Text", "left": 5, "top": 5, "width": 10, "height": 10 }
              ]
            }]
          }]
        }
    "#});
    let page = &project.pages[0];

    let tree = WidgetTree::build(&page.frame(), &project.data);

    assert_eq!(
        rects(&tree),
        [
            (Rect::new(5, 7, 100, 100), false),
            (Rect::new(15, 17, 50, 50), false),
            (Rect::new(20, 22, 10, 10), true),
        ]
    );

    let root = tree.node(tree.root());
    assert!(root.widget.is_none());
    assert_eq!(root.children.len(), 1);
    let container = tree.node(root.children[0]);
    assert_eq!(container.parent, Some(tree.root()));
    assert_eq!(container.widget.map(|w| w.type_name()), Some("Container"));
}

const LIST_PAGE: &str = r#"
    {
      "pages": [{
        "name": "main", "width": 200, "height": 200,
        "widgets": [{
          "type": "List", "listType": "LIST_TYPE", "data": "rows",
          "left": 0, "top": 10, "width": 200, "height": 100,
          "itemWidget": { "type": "Text", "width": 40, "height": 20 }
        }]
      }],
      "data": { "rows": [1, 2, 3] }
    }
"#;

#[test]
fn vertical_list_repeats_item_downwards() {
    let project = project(&LIST_PAGE.replace("LIST_TYPE", "vertical"));

    let tree = WidgetTree::build(&project.pages[0].frame(), &project.data);
    let items: Vec<Rect> = tree.opaque_rects().collect();

    assert_eq!(
        items,
        [
            Rect::new(0, 10, 40, 20),
            Rect::new(0, 30, 40, 20),
            Rect::new(0, 50, 40, 20),
        ]
    );
}

#[test]
fn horizontal_list_repeats_item_rightwards() {
    let project = project(&LIST_PAGE.replace("LIST_TYPE", "horizontal"));

    let tree = WidgetTree::build(&project.pages[0].frame(), &project.data);
    let items: Vec<Rect> = tree.opaque_rects().collect();

    assert_eq!(
        items,
        [
            Rect::new(0, 10, 40, 20),
            Rect::new(40, 10, 40, 20),
            Rect::new(80, 10, 40, 20),
        ]
    );
}

#[test]
fn list_positions_saturate() {
    let json = LIST_PAGE
        .replace("LIST_TYPE", "vertical")
        .replace(r#""width": 40, "height": 20"#, r#""width": 40, "height": 2000000000"#);
    let project = project(&json);

    let tree = WidgetTree::build(&project.pages[0].frame(), &project.data);
    let tops: Vec<i32> = tree.opaque_rects().map(|r| r.top).collect();

    assert_eq!(tops, [10, 2_000_000_010, i32::MAX]);
}

#[test]
fn list_without_array_has_no_items() {
    let project = project(&LIST_PAGE.replace("LIST_TYPE", "vertical"));
    let empty = StaticData::new();
    let scalar: StaticData = [("rows".to_string(), json!(4))].into_iter().collect();

    for data in [&empty, &scalar] {
        let tree = WidgetTree::build(&project.pages[0].frame(), data);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.opaque_rects().count(), 0);
    }
}

#[test]
fn select_places_chosen_child() {
    let project = project(indoc! {r#"
        {
          "pages": [{
            "name": "main", "width": 100, "height": 100,
            "widgets": [{
              "type": "Select", "data": "mode", "left": 10, "top": 10, "width": 50, "height": 50,
              "widgets": [
                { "type": "Text", "width": 10, "height": 10 },
                { "type": "Rectangle", "left": 5, "width": 20, "height": 20 }
              ]
            }]
          }]
        }
    "#});
    let frame = project.pages[0].frame();

    let pick = |value: serde_json::Value| {
        let data: StaticData = [("mode".to_string(), value)].into_iter().collect();
        let tree = WidgetTree::build(&frame, &data);
        tree.opaque_rects().collect::<Vec<_>>()
    };

    assert_eq!(pick(json!(0)), [Rect::new(10, 10, 10, 10)]);
    assert_eq!(pick(json!(1)), [Rect::new(15, 10, 20, 20)]);
    assert!(pick(json!(2)).is_empty());
    assert!(pick(json!(-1)).is_empty());
    assert!(pick(json!("one")).is_empty());
}

#[test]
fn page_transparent_rectangles() {
    let project = project(indoc! {r#"
        {
          "pages": [{
            "name": "main", "width": 100, "height": 100,
            "widgets": [
              { "type": "Container", "width": 100, "height": 100, "widgets": [
                { "type": "DisplayData", "left": 25, "top": 25, "width": 50, "height": 50 }
              ]}
            ]
          }]
        }
    "#});

    let rects = transparent_rectangles(&project.pages[0].frame(), &project.data);

    assert_eq!(
        rects,
        [
            Rect::new(0, 0, 100, 25),
            Rect::new(0, 25, 25, 75),
            Rect::new(25, 75, 75, 25),
            Rect::new(75, 25, 25, 50),
        ]
    );
}
