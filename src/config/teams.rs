use crate::domain::SquadTeam;

/// Series slug shared by every squad page of the 2024 men's T20 World Cup.
pub const SQUAD_SERIES: &str = "icc-men-s-t20-world-cup-2024-1411166";

const SQUADS: &[(&str, &str)] = &[
    ("india", "1431601"),
    ("pakistan", "1431583"),
    ("england", "1431671"),
    ("australia", "1431715"),
    ("south-africa", "1431579"),
    ("new-zealand", "1431626"),
    ("west-indies", "1432115"),
    ("sri-lanka", "1431628"),
    ("bangladesh", "1431604"),
    ("afghanistan", "1431575"),
    ("canada", "1431914"),
    ("usa", "1431916"),
    ("scotland", "1431918"),
    ("ireland", "1431920"),
    ("netherlands", "1431922"),
    ("namibia", "1431924"),
    ("uganda", "1431926"),
    ("papua-new-guinea", "1431928"),
    ("oman", "1431930"),
];

pub fn t20_world_cup_2024() -> Vec<SquadTeam> {
    SQUADS
        .iter()
        .map(|(name, id)| SquadTeam {
            name: name.to_string(),
            id: id.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_squad_url_from_slug_and_id() {
        let teams = t20_world_cup_2024();
        assert_eq!(teams.len(), 19);

        let url = teams[0].squad_url("https://www.espncricinfo.com", SQUAD_SERIES);
        assert_eq!(
            url,
            "https://www.espncricinfo.com/series/icc-men-s-t20-world-cup-2024-1411166/india-squad-1431601/series-squads"
        );
    }
}
