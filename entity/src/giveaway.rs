use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "giveaway")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub message_id: String,
    pub guild_id: String,
    pub channel_id: String,
    pub prize: String,
    pub winners: i32,
    pub entrants: i32,
    pub host_id: String,
    pub host_name: Option<String>,
    pub end_time: Option<DateTimeUtc>,
    pub ended: bool,
    pub required_role_id: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
