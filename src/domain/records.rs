use serde::{Deserialize, Serialize};

/// One row of the season results listing. Also the input of the scorecard
/// flows, so every field tolerates being absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchRecord {
    pub date: String,
    pub team1: String,
    pub team2: String,
    pub winner: String,
    pub margin: String,
    pub ground: String,
    pub scorecard: String,
}

impl MatchRecord {
    pub fn title(&self) -> String {
        format!("{} Vs {}", self.team1, self.team2)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingRecord {
    #[serde(rename = "match")]
    pub match_title: String,
    pub team_innings: String,
    pub batting_pos: u32,
    pub batsman_name: String,
    pub dismissal: String,
    pub runs: String,
    pub balls: String,
    #[serde(rename = "4s")]
    pub fours: String,
    #[serde(rename = "6s")]
    pub sixes: String,
    #[serde(rename = "SR")]
    pub strike_rate: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BowlingRecord {
    #[serde(rename = "match")]
    pub match_title: String,
    pub bowling_against: String,
    pub bowling_pos: u32,
    pub bowler_name: String,
    pub overs: String,
    pub maidens: String,
    pub runs_conceded: String,
    pub wickets: String,
    pub economy: String,
    pub dots: String,
    #[serde(rename = "4s")]
    pub fours: String,
    #[serde(rename = "6s")]
    pub sixes: String,
    pub wides: String,
    pub no_balls: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadRecord {
    pub team: String,
    pub name: String,
    pub role: String,
}

/// A squad page address: the team's URL slug and its squad id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadTeam {
    pub name: String,
    pub id: String,
}

impl SquadTeam {
    pub fn squad_url(&self, base_url: &str, series: &str) -> String {
        format!(
            "{}/series/{}/{}-squad-{}/series-squads",
            base_url.trim_end_matches('/'),
            series,
            self.name,
            self.id
        )
    }
}
