//! Position-resolved widget tree of a page.
//!
//! Containers place every child, lists repeat their item template once per
//! element of the bound array, selects place the child picked by the bound
//! enum value. Nodes are stored in pre-order.

use fwgui_core::{DataContext, ListType, PageFrame, Rect, Widget, WidgetKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub struct TreeNode<'a> {
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Absolute page coordinates.
    pub rect: Rect,
    /// `None` for the page root.
    pub widget: Option<&'a Widget>,
    pub opaque: bool,
}

#[derive(Debug, Clone)]
pub struct WidgetTree<'a> {
    nodes: Vec<TreeNode<'a>>,
}

impl<'a> WidgetTree<'a> {
    pub fn build(frame: &PageFrame<'a>, data: &dyn DataContext) -> Self {
        let mut builder = TreeBuilder {
            data,
            nodes: Vec::new(),
        };

        let root = builder.push(None, frame.rect, None);
        for widget in frame.widgets {
            builder.visit(root, widget, frame.rect.left, frame.rect.top);
        }

        Self {
            nodes: builder.nodes,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &TreeNode<'a> {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = &TreeNode<'a>> {
        self.nodes.iter()
    }

    pub fn opaque_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.nodes.iter().filter(|n| n.opaque).map(|n| n.rect)
    }
}

struct TreeBuilder<'a, 'd> {
    data: &'d dyn DataContext,
    nodes: Vec<TreeNode<'a>>,
}

impl<'a> TreeBuilder<'a, '_> {
    fn push(&mut self, parent: Option<NodeId>, rect: Rect, widget: Option<&'a Widget>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(TreeNode {
            parent,
            children: Vec::new(),
            rect,
            widget,
            opaque: widget.is_some_and(Widget::is_opaque),
        });
        if let Some(parent) = parent {
            self.nodes[parent.index()].children.push(id);
        }
        id
    }

    fn visit(&mut self, parent: NodeId, widget: &'a Widget, x: i32, y: i32) {
        let mut x = x.saturating_add(widget.left);
        let mut y = y.saturating_add(widget.top);
        let rect = Rect::new(x, y, widget.width, widget.height);
        let id = self.push(Some(parent), rect, Some(widget));

        match &widget.kind {
            WidgetKind::Container(container) => {
                for child in &container.widgets {
                    self.visit(id, child, x, y);
                }
            }
            WidgetKind::List(list) => {
                let Some(item) = list.item_widget.as_deref() else {
                    return;
                };
                let count = widget
                    .data
                    .as_deref()
                    .and_then(|name| self.data.array_len(name))
                    .unwrap_or(0);
                for _ in 0..count {
                    self.visit(id, item, x, y);
                    match list.list_type {
                        ListType::Vertical => y = y.saturating_add(item.height),
                        ListType::Horizontal => x = x.saturating_add(item.width),
                    }
                }
            }
            WidgetKind::Select(select) => {
                let selected = widget
                    .data
                    .as_deref()
                    .and_then(|name| self.data.enum_value(name))
                    .and_then(|value| usize::try_from(value).ok())
                    .and_then(|index| select.widgets.get(index));
                if let Some(child) = selected {
                    self.visit(id, child, x, y);
                }
            }
            _ => {}
        }
    }
}
