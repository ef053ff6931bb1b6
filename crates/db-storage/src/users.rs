// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

use crate::localized::Language;
use crate::schema::users;
use chrono::{DateTime, Utc};
use database::{DbConnection, Result};
use diesel::prelude::*;
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

diesel_newtype! {
    #[derive(Copy)]
    UserId(i64) => diesel::sql_types::BigInt
}

/// Length of the plain API tokens handed out to guests
const API_TOKEN_LENGTH: usize = 48;

/// Generates a random alphanumeric API token
pub fn generate_api_token() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(API_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

#[derive(Debug, Clone, Queryable, Identifiable)]
#[diesel(table_name = users)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub language_preference: String,
    pub api_token: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// The language the user asked to be addressed in
    pub fn language(&self) -> Language {
        Language::from_tag(&self.language_preference)
    }

    #[tracing::instrument(err, skip_all)]
    pub fn get(conn: &mut DbConnection, id: UserId) -> Result<User> {
        let user = users::table.filter(users::id.eq(id)).get_result(conn)?;

        Ok(user)
    }

    #[tracing::instrument(err, skip_all)]
    pub fn get_by_api_token(conn: &mut DbConnection, api_token: &str) -> Result<User> {
        let user = users::table
            .filter(users::api_token.eq(api_token))
            .get_result(conn)?;

        Ok(user)
    }

    #[tracing::instrument(err, skip_all)]
    pub fn get_by_email(conn: &mut DbConnection, email: &str) -> Result<User> {
        let user = users::table
            .filter(users::email.eq(email))
            .get_result(conn)?;

        Ok(user)
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub language_preference: String,
    pub api_token: String,
}

impl NewUser {
    #[tracing::instrument(err, skip_all)]
    pub fn insert(self, conn: &mut DbConnection) -> Result<User> {
        let query = self.insert_into(users::table);
        let user = query.get_result(conn)?;

        Ok(user)
    }
}
