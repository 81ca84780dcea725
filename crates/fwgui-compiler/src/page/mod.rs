//! Page layout analysis.
//!
//! Widget trees resolve data-bound lists and selects into positioned boxes;
//! the transparency grid turns the opaque boxes into the free regions the
//! firmware repaints behind a page.

mod grid;
mod tree;

#[cfg(test)]
mod tree_tests;

use fwgui_core::{DataContext, PageFrame, Rect};

pub use grid::TransparencyGrid;
pub use tree::{NodeId, TreeNode, WidgetTree};

/// Regions of `frame` not covered by any opaque widget.
pub fn transparent_rectangles(frame: &PageFrame<'_>, data: &dyn DataContext) -> Vec<Rect> {
    let tree = WidgetTree::build(frame, data);
    let mut grid = TransparencyGrid::new(frame.rect);
    for rect in tree.opaque_rects() {
        grid.add_opaque_rect(rect);
    }
    grid.transparent_rectangles()
}
