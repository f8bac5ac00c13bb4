//! # Signup Repository
//!
//! This module contains the repository implementation for signup records.
//! The store only ever needs two operations: find one record by email and
//! insert one record. Duplicate-key failures from `insert` are surfaced as
//! plain [`sea_orm::DbErr`] values so the caller can translate them.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::models::signup::{
    ActiveModel as SignupActiveModel, Column as SignupColumn, Entity as Signup,
    Model as SignupModel,
};

/// Field values for a new signup record
#[derive(Debug, Clone)]
pub struct NewSignup {
    pub name: String,
    pub email: String,
    pub industry: String,
    pub job_title: String,
    pub organisation: String,
    pub phone: String,
    pub interest: Option<String>,
}

/// Narrow interface over the relational store: one read, one write.
#[async_trait]
pub trait SignupStore: Send + Sync {
    /// Find an existing signup record with the given email, if any.
    async fn find_by_email(&self, email: &str) -> Result<Option<SignupModel>, DbErr>;

    /// Insert a new signup record. A duplicate email surfaces as a
    /// unique-violation [`DbErr`].
    async fn insert(&self, signup: NewSignup) -> Result<SignupModel, DbErr>;
}

/// SeaORM-backed repository for signup records
pub struct SignupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SignupRepository<'a> {
    /// Create a new SignupRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SignupStore for SignupRepository<'_> {
    async fn find_by_email(&self, email: &str) -> Result<Option<SignupModel>, DbErr> {
        Signup::find()
            .filter(SignupColumn::Email.eq(email))
            .one(self.db)
            .await
    }

    async fn insert(&self, signup: NewSignup) -> Result<SignupModel, DbErr> {
        let record = SignupActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(signup.name),
            email: Set(signup.email),
            industry: Set(signup.industry),
            job_title: Set(signup.job_title),
            organisation: Set(signup.organisation),
            phone: Set(signup.phone),
            interest: Set(signup.interest),
            created_at: Set(Utc::now().into()),
        };

        record.insert(self.db).await
    }
}
