use serde::{Deserialize, Serialize};

pub type PlayerId = u64;
pub type TeamId = u64;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub city: String,
    pub name: String,
    pub abbreviation: String,
    pub full_name: String,
}

/// A player record as served by the players API.
///
/// The live API leaves some of the descriptive fields as `null` for older or
/// less documented players, these are read as empty strings so that a record
/// always has something to display.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, deserialize_with = "deser::string_or_null")]
    pub position: String,
    #[serde(default, deserialize_with = "deser::string_or_null")]
    pub height: String,
    #[serde(default, deserialize_with = "deser::string_or_null")]
    pub weight: String,
    #[serde(default, deserialize_with = "deser::string_or_null")]
    pub jersey_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
    pub team: Team,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PageMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<u64>,
    pub per_page: u32,
}

/// One page of the `players` listing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlayerPage {
    pub data: Vec<Player>,
    pub meta: PageMeta,
}

/// Envelope used by the single entity endpoint.
#[derive(Deserialize)]
pub(crate) struct PlayerEnvelope {
    pub(crate) data: Player,
}

mod deser {
    use serde::{Deserialize, Deserializer};

    pub(super) fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
    }
}

#[cfg(any(test, feature = "proptest"))]
mod arbitrary {
    use super::*;
    use proptest::prelude::*;

    impl Arbitrary for Team {
        type Parameters = ();
        type Strategy = BoxedStrategy<Team>;

        fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
            (0..64u64, "[A-Z][a-z]{2,10}", "[A-Z][a-z]{2,10}", "[A-Z]{3}")
                .prop_map(|(id, city, name, abbreviation)| Team {
                    full_name: format!("{} {}", city, name),
                    id,
                    city,
                    name,
                    abbreviation,
                })
                .boxed()
        }
    }

    impl Arbitrary for Player {
        type Parameters = ();
        type Strategy = BoxedStrategy<Player>;

        fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
            (
                0..1_000u64,
                "[A-Z][a-z]{2,10}",
                "[A-Z][a-z]{2,12}",
                prop::sample::select(vec!["PG", "SG", "SF", "PF", "C"]),
                0..100u8,
                any::<Team>(),
            )
                .prop_map(
                    |(id, first_name, last_name, position, jersey_number, team)| Player {
                        id,
                        first_name,
                        last_name,
                        position: position.to_string(),
                        height: "6-6".to_string(),
                        weight: "220".to_string(),
                        jersey_number: jersey_number.to_string(),
                        image_url: None,
                        college: None,
                        team,
                    },
                )
                .boxed()
        }
    }
}
