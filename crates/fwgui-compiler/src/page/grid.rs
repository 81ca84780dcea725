//! Transparent region decomposition.
//!
//! The grid is a list of columns, each split into the same rows. Adding an
//! opaque rectangle cuts columns and rows at its edges and marks every cell
//! inside it. Cells are never merged on insertion; adjacent free cells are
//! only combined when the rectangles are extracted.

use fwgui_core::Rect;

#[derive(Debug, Clone)]
struct Row {
    y: i32,
    height: i32,
    opaque: bool,
}

#[derive(Debug, Clone)]
struct Column {
    x: i32,
    width: i32,
    rows: Vec<Row>,
}

#[derive(Debug, Clone)]
pub struct TransparencyGrid {
    cols: Vec<Column>,
}

impl TransparencyGrid {
    pub fn new(page: Rect) -> Self {
        Self {
            cols: vec![Column {
                x: page.left,
                width: page.width,
                rows: vec![Row {
                    y: page.top,
                    height: page.height,
                    opaque: false,
                }],
            }],
        }
    }

    /// Number of (columns, rows) cells currently in the grid.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols.len(), self.cols.first().map_or(0, |c| c.rows.len()))
    }

    pub fn add_opaque_rect(&mut self, rect: Rect) {
        if rect.is_degenerate() {
            return;
        }

        self.cut_column(rect.left);
        self.cut_column(rect.right());
        self.cut_row(rect.top);
        self.cut_row(rect.bottom());

        for col in &mut self.cols {
            if col.x < rect.left || col.x + col.width > rect.right() {
                continue;
            }
            for row in &mut col.rows {
                if row.y >= rect.top && row.y + row.height <= rect.bottom() {
                    row.opaque = true;
                }
            }
        }
    }

    /// Split the column strictly containing `x`.
    fn cut_column(&mut self, x: i32) {
        let Some(i) = self.cols.iter().position(|c| x <= c.x || x < c.x + c.width) else {
            return;
        };
        let col = &mut self.cols[i];
        if x <= col.x {
            return;
        }

        let mut right = col.clone();
        right.x = x;
        right.width = col.x + col.width - x;
        col.width = x - col.x;
        self.cols.insert(i + 1, right);
    }

    /// Split the row strictly containing `y`, in every column.
    fn cut_row(&mut self, y: i32) {
        for col in &mut self.cols {
            let Some(i) = col.rows.iter().position(|r| y <= r.y || y < r.y + r.height) else {
                continue;
            };
            let row = &mut col.rows[i];
            if y <= row.y {
                continue;
            }

            let mut below = row.clone();
            below.y = y;
            below.height = row.y + row.height - y;
            row.height = y - row.y;
            col.rows.insert(i + 1, below);
        }
    }

    fn is_free(&self, col: usize, row: usize) -> bool {
        self.cols[col].rows.get(row).is_some_and(|r| !r.opaque)
    }

    fn mark(&mut self, col: usize, row: usize) {
        if let Some(r) = self.cols[col].rows.get_mut(row) {
            r.opaque = true;
        }
    }

    /// Grow the free cell at (`col_start`, `row_start`) right, then down.
    fn max_rect_at(&mut self, col_start: usize, row_start: usize) -> Rect {
        let mut col_end = col_start;
        while col_end + 1 < self.cols.len() && self.is_free(col_end + 1, row_start) {
            col_end += 1;
            self.mark(col_end, row_start);
        }

        let mut row_end = row_start;
        let row_count = self.cols[col_start].rows.len();
        while row_end + 1 < row_count
            && (col_start..=col_end).all(|c| self.is_free(c, row_end + 1))
        {
            row_end += 1;
            for c in col_start..=col_end {
                self.mark(c, row_end);
            }
        }

        let first_col = &self.cols[col_start];
        let last_col = &self.cols[col_end];
        let first_row = &first_col.rows[row_start];
        let last_row = &last_col.rows[row_end];

        Rect::new(
            first_col.x,
            first_row.y,
            last_col.x + last_col.width - first_col.x,
            last_row.y + last_row.height - first_row.y,
        )
    }

    /// Extract the free area as non-overlapping rectangles.
    ///
    /// Scans columns left to right and rows top to bottom; consumes the grid.
    pub fn transparent_rectangles(mut self) -> Vec<Rect> {
        let mut rects = Vec::new();
        for col in 0..self.cols.len() {
            for row in 0..self.cols[col].rows.len() {
                if self.is_free(col, row) {
                    self.mark(col, row);
                    rects.push(self.max_rect_at(col, row));
                }
            }
        }
        rects
    }
}
