use super::{row_cells, PageExtractor, BODY_ROWS, CELLS, LINK};
use crate::domain::MatchRecord;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Node, Selector};

static RESULTS_TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table.ds-w-full").unwrap());

/// Reads the season results listing: one row per match, with a link to its
/// scorecard in the seventh column.
pub struct MatchResultsExtractor {
    pub base_url: String,
}

impl MatchResultsExtractor {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn scorecard_link(&self, cell: ElementRef) -> String {
        match cell.select(&LINK).next().and_then(|a| a.value().attr("href")) {
            Some(href) if href.starts_with("http://") || href.starts_with("https://") => {
                href.to_string()
            }
            Some(href) => format!("{}{}", self.base_url.trim_end_matches('/'), href),
            None => String::new(),
        }
    }
}

const LINE_BREAKS: &[&str] = &["div", "p", "br"];

/// The ground cell stacks the venue over extra lines; only the first rendered
/// line is kept. Inline nodes on that line are joined, and the line ends at
/// the first block boundary after some text.
fn ground_name(cell: ElementRef) -> String {
    let mut line = String::new();
    let mut block = None;

    for node in cell.descendants().skip(1) {
        match node.value() {
            Node::Element(element) if LINE_BREAKS.contains(&element.name()) => {
                if !line.trim().is_empty() {
                    break;
                }
            }
            Node::Text(text) => {
                let owner = node
                    .ancestors()
                    .take_while(|ancestor| ancestor.id() != cell.id())
                    .filter_map(ElementRef::wrap)
                    .find(|ancestor| LINE_BREAKS.contains(&ancestor.value().name()))
                    .map(|ancestor| ancestor.id());
                if line.trim().is_empty() {
                    block = owner;
                } else if owner != block {
                    break;
                }
                line.push_str(text);
            }
            _ => {}
        }
    }

    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl PageExtractor for MatchResultsExtractor {
    type Record = MatchRecord;

    fn extract(&self, document: &Html) -> Vec<MatchRecord> {
        let Some(table) = document.select(&RESULTS_TABLE).next() else {
            return Vec::new();
        };

        table
            .select(&BODY_ROWS)
            .filter_map(|row| {
                let cells: Vec<ElementRef> = row.select(&CELLS).collect();
                if cells.len() < 7 {
                    return None;
                }

                let text = row_cells(row);
                Some(MatchRecord {
                    date: text[5].clone(),
                    team1: text[0].clone(),
                    team2: text[1].clone(),
                    winner: text[2].clone(),
                    margin: text[3].clone(),
                    ground: ground_name(cells[4]),
                    scorecard: self.scorecard_link(cells[6]),
                })
            })
            .collect()
    }
}
