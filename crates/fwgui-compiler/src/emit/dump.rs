//! Human-readable object table of a packed document.

use std::fmt::Write as _;

use fwgui_core::Colors;

use super::field::Field;
use super::graph::{Layout, Object, ObjectGraph};

/// Dump every reachable object with its offset, size and fields.
pub fn dump(graph: &ObjectGraph, layout: &Layout, colors: Colors) -> String {
    let c = colors;
    let mut out = String::new();

    writeln!(out, "{}[objects]{}", c.blue, c.reset).unwrap();
    for &id in layout.objects() {
        let offset = layout.offset(id).unwrap_or(0);
        match graph.get(id) {
            Some(Object::Struct(s)) => {
                writeln!(
                    out,
                    "{}{offset:04x}{} struct {}{} bytes{}",
                    c.green,
                    c.reset,
                    c.dim,
                    s.size(),
                    c.reset
                )
                .unwrap();
                for (at, field) in s.field_offsets() {
                    writeln!(out, "  {}+{at:<3}{} {}", c.dim, c.reset, describe(field, layout)).unwrap();
                }
            }
            Some(Object::String(bytes)) => {
                let text: String = bytes
                    .iter()
                    .take_while(|&&b| b != 0)
                    .map(|&b| char::from(b))
                    .collect();
                writeln!(out, "{}{offset:04x}{} string {text:?}", c.green, c.reset).unwrap();
            }
            None => {}
        }
    }

    out.push('\n');
    writeln!(out, "{}[size]{}", c.blue, c.reset).unwrap();
    writeln!(out, "{} bytes", layout.size()).unwrap();
    out
}

fn describe(field: &Field, layout: &Layout) -> String {
    let target = |id| layout.offset(id).unwrap_or(0);
    match field {
        Field::UInt8(v) => format!("u8   {v}"),
        Field::UInt16(v) => format!("u16  {v}"),
        Field::Int16(v) => format!("i16  {v}"),
        Field::String(id) => format!("str  -> {:04x}", target(*id)),
        Field::ObjectPtr(Some(id)) => format!("ptr  -> {:04x}", target(*id)),
        Field::ObjectPtr(None) => "ptr  null".to_string(),
        Field::ObjectList(items) => match items.first() {
            Some(first) => format!("list {} -> {:04x}", items.len(), target(*first)),
            None => "list 0".to_string(),
        },
    }
}
