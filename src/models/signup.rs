//! Signup record entity model
//!
//! This module contains the SeaORM entity model for the prelaunch_signups
//! table. A row represents one completed signup; rows are created once and
//! never updated or deleted by this service.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// One completed signup
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "prelaunch_signups")]
pub struct Model {
    /// Unique identifier for the signup (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Full name as entered on the form
    pub name: String,

    /// Contact email; unique across all records
    pub email: String,

    /// Industry sector, free text (already resolved from any "Other" override)
    pub industry: String,

    /// Job title
    pub job_title: String,

    /// Company or organisation name
    pub organisation: String,

    /// Phone number, stored as given
    pub phone: String,

    /// Optional free-text interest statement
    pub interest: Option<String>,

    /// Timestamp when the signup was recorded
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
