use sea_orm::DatabaseConnection;

use crate::{
    model::discord::GuildDto,
    server::{
        data::giveaway::GiveawayRepository,
        error::AppError,
        model::{
            dashboard::{DashboardSummary, DASHBOARD_GUILD_PREVIEW},
            user::User,
        },
    },
};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Summarizes the guilds from the user's session.
    ///
    /// Guilds without an approximate member count contribute zero members.
    pub async fn summary(
        &self,
        user: User,
        guilds: Vec<GuildDto>,
    ) -> Result<DashboardSummary, AppError> {
        let giveaway_repo = GiveawayRepository::new(self.db);

        let guild_ids: Vec<u64> = guilds.iter().map(|guild| guild.id).collect();
        let active_giveaways = giveaway_repo.count_active_for_guilds(&guild_ids).await?;

        let total_members = guilds
            .iter()
            .map(|guild| guild.approximate_member_count.unwrap_or(0))
            .sum();

        Ok(DashboardSummary {
            user,
            guild_count: guilds.len() as u64,
            total_members,
            active_giveaways,
            guilds: guilds.into_iter().take(DASHBOARD_GUILD_PREVIEW).collect(),
        })
    }
}
