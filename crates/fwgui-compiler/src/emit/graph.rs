//! Relocatable object graph.
//!
//! Objects live in an arena and reference each other by [`ObjectId`]. A
//! struct can only point at objects that were added before it, so the graph
//! is acyclic by construction. Packing is two passes:
//!
//! 1. [`ObjectGraph::finish`] discovers reachable objects breadth-first from
//!    the root and assigns offsets by prefix sum in discovery order.
//! 2. [`ObjectGraph::pack`] concatenates object bodies in the same order, so
//!    every stored offset is the position where its target's bytes begin.

use std::collections::HashSet;

use super::error::EmitError;
use super::field::{Field, encode_string};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u32);

impl ObjectId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "obj{}", self.0)
    }
}

/// Ordered fields packed inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Struct {
    fields: Vec<Field>,
}

impl Struct {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn size(&self) -> usize {
        self.fields.iter().map(Field::size).sum()
    }

    /// Fields with their byte offset inside the struct.
    pub fn field_offsets(&self) -> impl Iterator<Item = (usize, &Field)> {
        self.fields.iter().scan(0, |offset, field| {
            let at = *offset;
            *offset += field.size();
            Some((at, field))
        })
    }
}

impl FromIterator<Field> for Struct {
    fn from_iter<T: IntoIterator<Item = Field>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    Struct(Struct),
    /// Encoded bytes including the trailing NUL.
    String(Vec<u8>),
}

impl Object {
    pub fn size(&self) -> usize {
        match self {
            Self::Struct(s) => s.size(),
            Self::String(bytes) => bytes.len(),
        }
    }

    pub fn fields(&self) -> &[Field] {
        match self {
            Self::Struct(s) => s.fields(),
            Self::String(_) => &[],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ObjectGraph {
    objects: Vec<Object>,
}

impl ObjectGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn add_struct(&mut self, s: Struct) -> ObjectId {
        debug_assert!(
            s.fields()
                .iter()
                .flat_map(Field::references)
                .all(|id| id.index() < self.objects.len()),
            "struct references an object outside the graph"
        );
        self.push(Object::Struct(s))
    }

    pub fn add_string(&mut self, value: &str) -> ObjectId {
        self.push(Object::String(encode_string(value)))
    }

    /// Add a string object and return the field pointing at it.
    pub fn string_field(&mut self, value: &str) -> Field {
        Field::String(self.add_string(value))
    }

    pub fn get(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(id.index())
    }

    fn push(&mut self, object: Object) -> ObjectId {
        let id = ObjectId(self.objects.len() as u32);
        self.objects.push(object);
        id
    }

    /// Discover objects reachable from `root` and assign their offsets.
    pub fn finish(&self, root: ObjectId) -> Result<Layout, EmitError> {
        let mut seen = HashSet::from([root]);
        let mut order = vec![root];
        let mut frontier = vec![root];

        while !frontier.is_empty() {
            let mut discovered = Vec::new();
            for id in &frontier {
                let Some(object) = self.get(*id) else {
                    continue;
                };
                for field in object.fields() {
                    for &target in field.references() {
                        if seen.insert(target) {
                            discovered.push(target);
                        }
                    }
                }
            }
            order.extend_from_slice(&discovered);
            frontier = discovered;
        }

        let mut offsets = vec![None; self.objects.len()];
        let mut offset = 0usize;
        for &id in &order {
            let at = u16::try_from(offset).map_err(|_| EmitError::DocumentTooLarge(offset))?;
            if let Some(slot) = offsets.get_mut(id.index()) {
                *slot = Some(at);
            }
            offset += self.get(id).map_or(0, Object::size);
        }

        Ok(Layout {
            order,
            offsets,
            size: offset,
        })
    }

    /// Concatenate object bodies in layout order.
    pub fn pack(&self, layout: &Layout) -> Vec<u8> {
        let mut out = Vec::with_capacity(layout.size);
        let offset_of = |id: ObjectId| layout.offset(id).unwrap_or(0);

        for &id in &layout.order {
            match self.get(id) {
                Some(Object::Struct(s)) => {
                    for field in s.fields() {
                        field.encode(&mut out, offset_of);
                    }
                }
                Some(Object::String(bytes)) => out.extend_from_slice(bytes),
                None => {}
            }
        }

        out
    }

    /// Finish and pack in one step.
    pub fn pack_from(&self, root: ObjectId) -> Result<Vec<u8>, EmitError> {
        let layout = self.finish(root)?;
        Ok(self.pack(&layout))
    }
}

/// Object offsets assigned by [`ObjectGraph::finish`].
#[derive(Debug, Clone)]
pub struct Layout {
    order: Vec<ObjectId>,
    offsets: Vec<Option<u16>>,
    size: usize,
}

impl Layout {
    /// Reachable objects in discovery order.
    pub fn objects(&self) -> &[ObjectId] {
        &self.order
    }

    pub fn offset(&self, id: ObjectId) -> Option<u16> {
        self.offsets.get(id.index()).copied().flatten()
    }

    /// Total packed size in bytes.
    pub fn size(&self) -> usize {
        self.size
    }
}
