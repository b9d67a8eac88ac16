use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

pub(crate) mod batting;
pub(crate) mod bowling;
pub(crate) mod match_results;
pub(crate) mod rows;
pub(crate) mod squads;
pub(crate) mod tables;

/// Turns one fetched, parsed page into records. Extraction never fails: a
/// page without the expected markup simply yields no records.
pub trait PageExtractor {
    type Record;

    fn extract(&self, document: &Html) -> Vec<Self::Record>;
}

pub(crate) static BODY_ROWS: Lazy<Selector> = Lazy::new(|| Selector::parse("tbody tr").unwrap());
pub(crate) static CELLS: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());
pub(crate) static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());

/// Text content with whitespace runs collapsed, the way a browser renders a
/// single table cell.
pub(crate) fn element_text(element: ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn first_text(scope: ElementRef, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .find(|el| el.id() != scope.id())
        .map(element_text)
        .filter(|text| !text.is_empty())
}

pub(crate) fn row_cells(row: ElementRef) -> Vec<String> {
    row.select(&CELLS).map(element_text).collect()
}
