//! Event database model

use chrono::NaiveDate;
use sqlx::FromRow;

/// Database model for events table
#[derive(Debug, Clone, FromRow)]
pub struct EventModel {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub description: String,
    pub location: String,
    pub image: Option<String>,
    pub registration_link: Option<String>,
    pub repeat_interval_days: Option<i64>,
}
