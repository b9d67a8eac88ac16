use super::{first_text, row_cells, BODY_ROWS, CELLS};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static SCORECARD_CLASS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table.ci-scorecard-table").unwrap());
static SCORECARD_TESTID: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table[data-testid*='scorecard']").unwrap());
static ANY_TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").unwrap());
static TEAM_TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.ds-text-title-xs").unwrap());
static HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("h3").unwrap());

const BOWLING_WORDS: &[&str] = &["over", "bowl", "wicket", "economy"];

/// One table-selection strategy. Probes are tried in order and the first one
/// that finds anything wins.
pub type TableProbe = for<'a> fn(&'a Html) -> Vec<ElementRef<'a>>;

pub const BATTING_PROBES: &[TableProbe] = &[
    first_of_class_groups,
    first_of_testid_groups,
    wide_tables,
];

pub const BOWLING_PROBES: &[TableProbe] = &[
    second_of_class_groups,
    second_of_testid_groups,
    bowling_shaped_tables,
];

pub fn select_tables<'a>(document: &'a Html, probes: &[TableProbe]) -> Vec<ElementRef<'a>> {
    probes
        .iter()
        .map(|probe| probe(document))
        .find(|tables| !tables.is_empty())
        .unwrap_or_default()
}

fn first_of_class_groups(document: &Html) -> Vec<ElementRef<'_>> {
    nth_of_groups(document.select(&SCORECARD_CLASS), 0)
}

fn first_of_testid_groups(document: &Html) -> Vec<ElementRef<'_>> {
    nth_of_groups(document.select(&SCORECARD_TESTID), 0)
}

fn second_of_class_groups(document: &Html) -> Vec<ElementRef<'_>> {
    nth_of_groups(document.select(&SCORECARD_CLASS), 1)
}

fn second_of_testid_groups(document: &Html) -> Vec<ElementRef<'_>> {
    nth_of_groups(document.select(&SCORECARD_TESTID), 1)
}

/// Fallback for batting: any table whose first body row is wide enough.
fn wide_tables(document: &Html) -> Vec<ElementRef<'_>> {
    document
        .select(&ANY_TABLE)
        .filter(|table| first_row_width(*table) >= 7)
        .collect()
}

/// Fallback for bowling: wide tables that also talk about overs or wickets.
fn bowling_shaped_tables(document: &Html) -> Vec<ElementRef<'_>> {
    document
        .select(&ANY_TABLE)
        .filter(|table| first_row_width(*table) >= 10)
        .filter(|table| {
            let text = table.text().collect::<String>().to_lowercase();
            BOWLING_WORDS.iter().any(|word| text.contains(word))
        })
        .collect()
}

fn first_row_width(table: ElementRef) -> usize {
    table
        .select(&BODY_ROWS)
        .next()
        .map(|row| row.select(&CELLS).count())
        .unwrap_or(0)
}

/// An innings renders its batting and bowling tables under one `div`; the
/// first table of each group is batting, the second bowling.
pub fn group_by_container<'a>(
    tables: impl Iterator<Item = ElementRef<'a>>,
) -> Vec<Vec<ElementRef<'a>>> {
    let mut groups: Vec<(Option<ElementRef<'a>>, Vec<ElementRef<'a>>)> = Vec::new();

    for table in tables {
        let container = closest_div(table);
        match groups.iter().position(|(key, _)| *key == container) {
            Some(i) => groups[i].1.push(table),
            None => groups.push((container, vec![table])),
        }
    }

    groups.into_iter().map(|(_, members)| members).collect()
}

fn nth_of_groups<'a>(tables: impl Iterator<Item = ElementRef<'a>>, n: usize) -> Vec<ElementRef<'a>> {
    group_by_container(tables)
        .into_iter()
        .filter_map(|group| group.get(n).copied())
        .collect()
}

fn closest_div(element: ElementRef) -> Option<ElementRef> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| ancestor.value().name() == "div")
}

fn previous_element(element: ElementRef) -> Option<ElementRef> {
    element.prev_siblings().find_map(ElementRef::wrap)
}

fn parent_element(element: ElementRef) -> Option<ElementRef> {
    element.parent().and_then(ElementRef::wrap)
}

type TeamProbe = fn(ElementRef) -> Option<String>;

const TEAM_PROBES: &[TeamProbe] = &[
    container_title,
    container_heading,
    preceding_title,
    parent_preceding_title,
];

fn container_title(table: ElementRef) -> Option<String> {
    closest_div(table).and_then(|div| first_text(div, &TEAM_TITLE))
}

fn container_heading(table: ElementRef) -> Option<String> {
    closest_div(table).and_then(|div| first_text(div, &HEADING))
}

fn preceding_title(table: ElementRef) -> Option<String> {
    previous_element(table).and_then(|prev| first_text(prev, &TEAM_TITLE))
}

fn parent_preceding_title(table: ElementRef) -> Option<String> {
    parent_element(table)
        .and_then(previous_element)
        .and_then(|prev| first_text(prev, &TEAM_TITLE))
}

/// Best-effort name of the side a table belongs to, `Team <n>` when no
/// nearby heading carries one. `index` is the table's 0-based position
/// among the selected tables.
pub fn team_name(table: ElementRef, index: usize) -> String {
    TEAM_PROBES
        .iter()
        .find_map(|probe| probe(table))
        .unwrap_or_else(|| format!("Team {}", index + 1))
}

/// Body rows of a table as cell texts.
pub fn body_rows(table: ElementRef) -> Vec<Vec<String>> {
    table.select(&BODY_ROWS).map(row_cells).collect()
}
