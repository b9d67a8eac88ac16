use super::{first_text, PageExtractor, LINK};
use crate::domain::SquadRecord;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static SQUAD_SECTION: Lazy<Selector> = Lazy::new(|| Selector::parse(".ds-mb-4").unwrap());
static PLAYER_CARD: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.ds-px-4.ds-py-3").unwrap());
static PLAYER_ROLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.ds-text-tight-s").unwrap());
static TEAM_HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse(".ds-p-0 h1").unwrap());

const UNKNOWN_TEAM: &str = "UNKNOWN TEAM";

pub struct SquadExtractor;

impl PageExtractor for SquadExtractor {
    type Record = SquadRecord;

    fn extract(&self, document: &Html) -> Vec<SquadRecord> {
        let Some(section) = document.select(&SQUAD_SECTION).next() else {
            return Vec::new();
        };

        let team = document
            .select(&TEAM_HEADING)
            .next()
            .map(super::element_text)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_TEAM.to_string());

        section
            .select(&PLAYER_CARD)
            .filter_map(|card| {
                let name = first_text(card, &LINK)?;
                let role = first_text(card, &PLAYER_ROLE)?;
                Some(SquadRecord {
                    team: team.clone(),
                    name,
                    role,
                })
            })
            .collect()
    }
}
