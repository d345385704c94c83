use serde::{Deserialize, Serialize};

/// Serde helpers for Discord snowflake ids.
///
/// Ids are written as decimal strings so they survive JavaScript's number precision,
/// and read from either a decimal string or an integer.
pub mod snowflake {
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        String(String),
        Int(u64),
    }

    pub fn serialize<S: Serializer>(id: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&id.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        match StringOrInt::deserialize(deserializer)? {
            StringOrInt::Int(id) => Ok(id),
            StringOrInt::String(s) => s
                .trim()
                .parse::<u64>()
                .map_err(|_| de::Error::custom(format!("invalid snowflake id '{}'", s))),
        }
    }

    /// Same as the parent module for optional ids; `null` maps to `None`.
    pub mod option {
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            id: &Option<u64>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match id {
                Some(id) => serializer.serialize_str(&id.to_string()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<u64>, D::Error> {
            #[derive(Deserialize)]
            struct Wrapper(#[serde(with = "super")] u64);

            Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|Wrapper(id)| id))
        }
    }
}

/// A guild the logged-in user administers, as kept in their session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GuildDto {
    #[serde(with = "snowflake")]
    pub id: u64,
    pub name: String,
    /// Raw icon hash as returned by Discord.
    pub icon: Option<String>,
    pub icon_url: Option<String>,
    pub approximate_member_count: Option<u64>,
}
