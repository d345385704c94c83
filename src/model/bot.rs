use serde::{Deserialize, Serialize};

/// Live statistics reported by the bot process.
///
/// Every field defaults to zero so a partial payload still decodes.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BotStatsDto {
    pub servers: u64,
    pub members: u64,
    pub commands: u64,
    pub active_giveaways: u64,
    /// Seconds since the bot started.
    pub uptime: u64,
    pub cogs: u64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LimitParams {
    pub limit: Option<u64>,
}
