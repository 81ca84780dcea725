//! Document root: user widget layouts followed by screen pages.

use fwgui_core::Orientation;

use super::context::Context;
use crate::emit::{Field, ObjectId};

impl Context<'_> {
    /// `list customWidgets, list pages`
    pub(crate) fn document(&mut self, orientation: Orientation) -> ObjectId {
        let project = self.project;

        let custom_widgets = project
            .user_widget_pages()
            .map(|page| {
                let frame = page.frame_for(orientation);
                self.at(format!("pages[{}]", page.name), |cx| {
                    let children = cx.widget_list(frame.widgets);
                    cx.graph.add_struct([children].into_iter().collect())
                })
            })
            .collect();

        let pages = project
            .screen_pages()
            .map(|page| {
                let frame = page.frame_for(orientation);
                self.at(format!("pages[{}]", page.name), |cx| cx.page(&frame))
            })
            .collect();

        self.graph.add_struct(
            [Field::ObjectList(custom_widgets), Field::ObjectList(pages)]
                .into_iter()
                .collect(),
        )
    }
}
