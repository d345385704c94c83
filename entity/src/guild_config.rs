use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_config")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guild_id: String,
    pub guild_name: Option<String>,
    pub guild_icon: Option<String>,
    pub prefix: String,
    pub language: String,
    pub log_channel_id: Option<String>,
    pub mod_log_channel_id: Option<String>,
    pub message_log_channel_id: Option<String>,
    pub voice_log_channel_id: Option<String>,
    pub member_log_channel_id: Option<String>,
    pub welcome_enabled: bool,
    pub welcome_channel_id: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub welcome_message: String,
    pub welcome_dm_enabled: bool,
    #[sea_orm(column_type = "Text")]
    pub welcome_dm_message: String,
    pub leave_enabled: bool,
    pub leave_channel_id: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub leave_message: String,
    pub auto_role_id: Option<String>,
    pub muted_role_id: Option<String>,
    pub auto_mod_enabled: bool,
    pub bad_words_enabled: bool,
    pub bad_words_action: String,
    pub invites_enabled: bool,
    pub invites_action: String,
    pub caps_enabled: bool,
    pub caps_percentage: i32,
    pub caps_min_length: i32,
    pub giveaway_channel_id: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub custom_commands: Option<String>,
    pub total_warns: i32,
    pub total_kicks: i32,
    pub total_bans: i32,
    pub total_mutes: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
