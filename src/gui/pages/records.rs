// src/gui/pages/records.rs
use crate::{
    config::{options::PageKind, state::GuiState},
    error::Result,
    progress::Progress,
    query::record_book,
    store::RecordRelation,
    table,
};

use super::{Page, PageView};

pub struct RecordsPage;
pub static PAGE: RecordsPage = RecordsPage;

impl Page for RecordsPage {
    fn kind(&self) -> PageKind { PageKind::Records }
    fn label(&self) -> &'static str { "Records" }

    fn build(&self, rel: &RecordRelation, _gui: &GuiState, _progress: &mut dyn Progress) -> Result<PageView> {
        let book = record_book(rel);
        Ok(PageView {
            table: table::records_table(&book),
            secondary: Some((
                s!("Top performances by game score"),
                table::games_table(&book.top_performances),
            )),
            ..PageView::default()
        })
    }
}
