use crate::player::{Player, Team};

struct Entry {
    id: u64,
    first_name: &'static str,
    last_name: &'static str,
    position: &'static str,
    height: &'static str,
    weight: &'static str,
    jersey_number: &'static str,
    image_url: &'static str,
    college: &'static str,
    team: (u64, &'static str, &'static str, &'static str),
}

// Durant and Dončić share id 220 in the source data. Consumers must not key
// anything by player id alone.
const ALL_STARS: [Entry; 5] = [
    Entry {
        id: 115,
        first_name: "Stephen",
        last_name: "Curry",
        position: "PG",
        height: "6-2",
        weight: "185",
        jersey_number: "30",
        image_url: "/steph.png",
        college: "Davidson",
        team: (10, "Golden State", "Warriors", "GSW"),
    },
    Entry {
        id: 237,
        first_name: "LeBron",
        last_name: "James",
        position: "SF",
        height: "6-9",
        weight: "250",
        jersey_number: "23",
        image_url: "/lebron.png",
        college: "St. Vincent-St. Mary HS (OH)",
        team: (14, "Los Angeles", "Lakers", "LAL"),
    },
    Entry {
        id: 220,
        first_name: "Kevin",
        last_name: "Durant",
        position: "SF",
        height: "6-10",
        weight: "240",
        jersey_number: "35",
        image_url: "/kevin_durant.png",
        college: "Texas",
        team: (26, "Phoenix", "Suns", "PHX"),
    },
    Entry {
        id: 220,
        first_name: "Luka",
        last_name: "Dončić",
        position: "PG",
        height: "6-7",
        weight: "230",
        jersey_number: "77",
        image_url: "/luka.png",
        college: "None (International)",
        team: (8, "Dallas", "Mavericks", "DAL"),
    },
    Entry {
        id: 203,
        first_name: "Nikola",
        last_name: "Jokić",
        position: "C",
        height: "6-11",
        weight: "284",
        jersey_number: "15",
        image_url: "/nikola.png",
        college: "None (International)",
        team: (9, "Denver", "Nuggets", "DEN"),
    },
];

impl From<&Entry> for Player {
    fn from(entry: &Entry) -> Self {
        let (team_id, city, name, abbreviation) = entry.team;
        Player {
            id: entry.id,
            first_name: entry.first_name.to_string(),
            last_name: entry.last_name.to_string(),
            position: entry.position.to_string(),
            height: entry.height.to_string(),
            weight: entry.weight.to_string(),
            jersey_number: entry.jersey_number.to_string(),
            image_url: Some(entry.image_url.to_string()),
            college: Some(entry.college.to_string()),
            team: Team {
                id: team_id,
                city: city.to_string(),
                name: name.to_string(),
                abbreviation: abbreviation.to_string(),
                full_name: format!("{} {}", city, name),
            },
        }
    }
}

/// Hardcoded All-Star roster, used whenever the players API is not consulted.
pub fn fallback_all_stars() -> Vec<Player> {
    ALL_STARS.iter().map(Player::from).collect()
}
