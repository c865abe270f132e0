// src/gui/router.rs
use crate::config::options::PageKind::{ self, * };
use super::pages::{ self, Page };

pub static PAGES: &[&'static dyn Page] = &[
    &pages::finder::PAGE,
    &pages::profile::PAGE,
    &pages::versus::PAGE,
    &pages::streaks::PAGE,
    &pages::records::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: &PageKind) -> &'static dyn Page {
    match kind {
        GameFinder => &pages::finder::PAGE,
        Profile    => &pages::profile::PAGE,
        Versus     => &pages::versus::PAGE,
        Streaks    => &pages::streaks::PAGE,
        Records    => &pages::records::PAGE,
    }
}

pub fn index_of(kind: PageKind) -> usize {
    PAGES.iter().position(|p| p.kind() == kind).unwrap_or(0)
}
