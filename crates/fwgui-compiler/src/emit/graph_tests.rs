use fwgui_core::Colors;

use super::*;

/// root { u8 7, list [a, b], ptr null, str "hi" }
fn small_graph() -> (ObjectGraph, ObjectId) {
    let mut graph = ObjectGraph::new();
    let a = graph.add_struct([Field::UInt16(0x0102)].into_iter().collect());
    let b = graph.add_struct([Field::i16(-2)].into_iter().collect());
    let hi = graph.string_field("hi");

    let mut root = Struct::new();
    root.add_field(Field::UInt8(7));
    root.add_field(Field::ObjectList(vec![a, b]));
    root.add_field(Field::ObjectPtr(None));
    root.add_field(hi);
    let root = graph.add_struct(root);

    (graph, root)
}

fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

/// Every stored pointer equals the position where its target's bytes begin.
fn assert_offsets_consistent(graph: &ObjectGraph, layout: &Layout, packed: &[u8]) {
    assert_eq!(packed.len(), layout.size());

    for &id in layout.objects() {
        let base = layout.offset(id).unwrap() as usize;
        let object = graph.get(id).unwrap();

        if let Object::String(bytes) = object {
            assert_eq!(&packed[base..base + bytes.len()], bytes.as_slice());
        }

        for (at, field) in match object {
            Object::Struct(s) => s.field_offsets().collect::<Vec<_>>(),
            Object::String(_) => Vec::new(),
        } {
            let pos = base + at;
            match field {
                Field::String(target) | Field::ObjectPtr(Some(target)) => {
                    assert_eq!(Some(read_u16(packed, pos)), layout.offset(*target));
                }
                Field::ObjectPtr(None) => assert_eq!(read_u16(packed, pos), 0),
                Field::ObjectList(items) => {
                    assert_eq!(packed[pos] as usize, items.len());
                    let first = read_u16(packed, pos + 1) as usize;
                    let mut expected = first;
                    for item in items {
                        assert_eq!(layout.offset(*item), Some(expected as u16));
                        expected += graph.get(*item).unwrap().size();
                    }
                }
                Field::UInt8(_) | Field::UInt16(_) | Field::Int16(_) => {}
            }
        }
    }
}

#[test]
fn field_sizes() {
    let mut graph = ObjectGraph::new();
    let s = graph.add_string("");

    assert_eq!(Field::UInt8(1).size(), 1);
    assert_eq!(Field::UInt16(1).size(), 2);
    assert_eq!(Field::Int16(-1).size(), 2);
    assert_eq!(Field::String(s).size(), 2);
    assert_eq!(Field::ObjectPtr(None).size(), 2);
    assert_eq!(Field::ObjectList(vec![]).size(), 3);
}

#[test]
fn primitive_encoding() {
    assert_eq!(pack_u16(0x1234), [0x34, 0x12]);
    assert_eq!(pack_i16(-1), [0xff, 0xff]);
    assert_eq!(pack_i16(-300), [0xd4, 0xfe]);
    assert_eq!(Field::u8(300), Field::UInt8(44));
    assert_eq!(encode_string("Hi"), [b'H', b'i', 0]);
    assert_eq!(encode_string("25°C"), [b'2', b'5', 0xb0, b'C', 0]);
    assert_eq!(encode_string("→"), [b'?', 0]);
}

#[test]
fn pack_small_graph() {
    let (graph, root) = small_graph();
    let layout = graph.finish(root).unwrap();
    let packed = graph.pack(&layout);

    assert_eq!(
        packed,
        [7, 2, 8, 0, 0, 0, 12, 0, 2, 1, 254, 255, b'h', b'i', 0]
    );
    assert_offsets_consistent(&graph, &layout, &packed);
}

#[test]
fn discovery_is_breadth_first() {
    let mut graph = ObjectGraph::new();
    let leaf = graph.add_string("leaf");
    let deep = graph.add_struct([Field::String(leaf)].into_iter().collect());
    let first = graph.add_struct([Field::ObjectPtr(Some(deep))].into_iter().collect());
    let second = graph.add_struct([Field::UInt8(2)].into_iter().collect());
    let root = graph.add_struct(
        [Field::ObjectPtr(Some(first)), Field::ObjectPtr(Some(second))]
            .into_iter()
            .collect(),
    );

    let layout = graph.finish(root).unwrap();
    assert_eq!(layout.objects(), [root, first, second, deep, leaf]);
    assert_offsets_consistent(&graph, &layout, &graph.pack(&layout));
}

#[test]
fn nested_lists_keep_offsets_consistent() {
    let mut graph = ObjectGraph::new();
    let mut rows = Vec::new();
    for row in 0..3 {
        let mut cells = Vec::new();
        for col in 0..row + 1 {
            let label = graph.string_field(&format!("r{row}c{col}"));
            cells.push(graph.add_struct([Field::u8(col), label].into_iter().collect()));
        }
        let title = graph.string_field(&format!("row {row}"));
        rows.push(graph.add_struct([title, Field::ObjectList(cells)].into_iter().collect()));
    }
    let root = graph.add_struct([Field::ObjectList(rows), Field::UInt16(9)].into_iter().collect());

    let layout = graph.finish(root).unwrap();
    let packed = graph.pack(&layout);

    assert_offsets_consistent(&graph, &layout, &packed);
}

#[test]
fn empty_list_packs_as_zero() {
    let mut graph = ObjectGraph::new();
    let root = graph.add_struct([Field::ObjectList(Vec::new())].into_iter().collect());

    assert_eq!(graph.pack_from(root).unwrap(), [0x00, 0x00, 0x00]);
}

#[test]
fn empty_struct_has_size_zero() {
    let mut graph = ObjectGraph::new();
    let root = graph.add_struct(Struct::new());

    let layout = graph.finish(root).unwrap();
    assert_eq!(layout.size(), 0);
    assert!(graph.pack(&layout).is_empty());
}

#[test]
fn unreachable_objects_are_not_packed() {
    let mut graph = ObjectGraph::new();
    let orphan = graph.add_string("orphan");
    let root = graph.add_struct([Field::UInt8(1)].into_iter().collect());

    let layout = graph.finish(root).unwrap();
    assert_eq!(layout.offset(orphan), None);
    assert_eq!(graph.pack(&layout), [1]);
}

#[test]
fn offsets_beyond_16_bits_are_rejected() {
    let mut graph = ObjectGraph::new();
    let big = graph.string_field(&"x".repeat(70_000));
    let small = graph.string_field("y");
    let root = graph.add_struct([big, small].into_iter().collect());

    let err = graph.finish(root).unwrap_err();
    assert_eq!(err, EmitError::DocumentTooLarge(70_005));
    assert_eq!(
        err.to_string(),
        "document too large: object at offset 70005 (max 65535)"
    );
}

#[test]
fn dump_small_graph() {
    let (graph, root) = small_graph();
    let layout = graph.finish(root).unwrap();

    insta::assert_snapshot!(dump(&graph, &layout, Colors::OFF), @r#"
    [objects]
    0000 struct 8 bytes
      +0   u8   7
      +1   list 2 -> 0008
      +4   ptr  null
      +6   str  -> 000c
    0008 struct 2 bytes
      +0   u16  258
    000a struct 2 bytes
      +0   i16  -2
    000c string "hi"

    [size]
    15 bytes
    "#);
}
