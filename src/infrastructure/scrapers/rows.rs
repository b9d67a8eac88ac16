use once_cell::sync::Lazy;
use regex::Regex;

/// First-cell fragments that mark a summary row rather than a player.
const BOILERPLATE: &[&str] = &["extras", "total", "did not bat", "fall of wickets", "bowler"];

/// Column abbreviations a repeated bowling header row carries in its first cell.
const BOWLING_HEADER_LABELS: &[&str] = &["O", "M", "R", "W"];

static LEADING_INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[+-]?\d").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    TooFewCells,
    EmptyLabel,
    Boilerplate,
    HeaderRow,
    NotNumeric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClass {
    Player,
    Skip(SkipReason),
}

/// The acceptance rules for one kind of scorecard table.
#[derive(Debug, Clone, Copy)]
pub struct RowRule {
    pub min_cells: usize,
    pub numeric_cell: usize,
    pub header_check: bool,
}

impl RowRule {
    pub const BATTING: RowRule = RowRule {
        min_cells: 6,
        numeric_cell: 2,
        header_check: false,
    };

    pub const BOWLING: RowRule = RowRule {
        min_cells: 10,
        numeric_cell: 1,
        header_check: true,
    };

    pub fn classify(&self, cells: &[String]) -> RowClass {
        if cells.len() < self.min_cells {
            return RowClass::Skip(SkipReason::TooFewCells);
        }

        let label = cells[0].as_str();
        if label.is_empty() {
            return RowClass::Skip(SkipReason::EmptyLabel);
        }

        let lowered = label.to_lowercase();
        if BOILERPLATE.iter().any(|marker| lowered.contains(marker)) {
            return RowClass::Skip(SkipReason::Boilerplate);
        }

        if self.header_check {
            let second = cells[1].as_str();
            if BOWLING_HEADER_LABELS.contains(&label) || second.is_empty() || second == "O" {
                return RowClass::Skip(SkipReason::HeaderRow);
            }
        }

        if !parses_as_int(&cells[self.numeric_cell]) {
            return RowClass::Skip(SkipReason::NotNumeric);
        }

        RowClass::Player
    }

    /// Keeps the player rows in order and numbers them from 1. Skipped rows
    /// never consume a position.
    pub fn number_players(&self, rows: Vec<Vec<String>>) -> Vec<(u32, Cells)> {
        rows.into_iter()
            .filter(|cells| self.classify(cells) == RowClass::Player)
            .zip(1..)
            .map(|(cells, pos)| (pos, Cells(cells)))
            .collect()
    }
}

/// True when the text starts with an integer, ignoring anything after it:
/// `"23*"` and `"4.2"` qualify, `"-"` and `""` do not.
pub fn parses_as_int(text: &str) -> bool {
    LEADING_INT.is_match(text)
}

/// The cells of an accepted row, with defaults for ragged tails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cells(pub Vec<String>);

impl Cells {
    /// Raw cell text, or an empty string when the row is too short.
    pub fn raw(&self, index: usize) -> String {
        self.0.get(index).cloned().unwrap_or_default()
    }

    /// Cell text, or `default` when the cell is missing or blank.
    pub fn or(&self, index: usize, default: &str) -> String {
        match self.0.get(index) {
            Some(text) if !text.is_empty() => text.clone(),
            _ => default.to_string(),
        }
    }

    pub fn last(&self) -> String {
        self.0.last().cloned().unwrap_or_default()
    }
}
