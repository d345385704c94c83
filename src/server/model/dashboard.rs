use crate::{
    model::{dashboard::DashboardDto, discord::GuildDto},
    server::model::user::User,
};

/// Number of guilds listed on the dashboard overview.
pub const DASHBOARD_GUILD_PREVIEW: usize = 6;

/// Overview of the guilds a user administers.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub user: User,
    pub guild_count: u64,
    pub total_members: u64,
    pub active_giveaways: u64,
    pub guilds: Vec<GuildDto>,
}

impl DashboardSummary {
    pub fn into_dto(self) -> DashboardDto {
        DashboardDto {
            user: self.user.into_dto(),
            guild_count: self.guild_count,
            total_members: self.total_members,
            active_giveaways: self.active_giveaways,
            guilds: self.guilds,
        }
    }
}
