//! Topic database model

use sqlx::FromRow;

/// Database model for the topics table
#[derive(Debug, Clone, FromRow)]
pub struct TopicModel {
    pub id: i64,
    pub name: String,
    pub user_id: i64,
}
