use serde::{Deserialize, Serialize};

use crate::model::{discord::GuildDto, user::UserDto};

/// Overview shown on the dashboard landing page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DashboardDto {
    pub user: UserDto,
    /// Number of guilds the user administers.
    pub guild_count: u64,
    /// Sum of the approximate member counts of those guilds.
    pub total_members: u64,
    /// Giveaways not yet ended across those guilds.
    pub active_giveaways: u64,
    /// First few guilds, in the order Discord returned them.
    pub guilds: Vec<GuildDto>,
}
