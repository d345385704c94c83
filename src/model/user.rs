use serde::{Deserialize, Serialize};

use crate::model::discord::snowflake;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserDto {
    #[serde(with = "snowflake")]
    pub discord_id: u64,
    pub name: String,
    pub avatar_url: Option<String>,
    pub is_owner: bool,
}
