// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

use crate::schema::guestbook_messages;
use crate::users::UserId;
use chrono::{DateTime, Utc};
use database::{DbConnection, Paginate, Result};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

diesel_newtype! {
    #[derive(Copy)]
    GuestbookMessageId(i64) => diesel::sql_types::BigInt
}

/// Sort order for the public guestbook listing
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSort {
    #[default]
    Latest,
    Oldest,
}

/// A congratulation entry, visible once approved by the couple
#[derive(Debug, Clone, Queryable, Identifiable)]
#[diesel(table_name = guestbook_messages)]
pub struct GuestbookMessage {
    pub id: GuestbookMessageId,
    pub user_id: Option<UserId>,
    pub guest_name: String,
    pub message: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GuestbookMessage {
    #[tracing::instrument(err, skip_all)]
    pub fn get_approved(
        conn: &mut DbConnection,
        id: GuestbookMessageId,
    ) -> Result<GuestbookMessage> {
        let message = guestbook_messages::table
            .filter(guestbook_messages::id.eq(id))
            .filter(guestbook_messages::is_approved.eq(true))
            .get_result(conn)?;

        Ok(message)
    }

    /// Returns a page of approved messages with the total count
    #[tracing::instrument(err, skip_all)]
    pub fn get_all_approved_paginated(
        conn: &mut DbConnection,
        sort: MessageSort,
        per_page: i64,
        page: i64,
    ) -> Result<(Vec<GuestbookMessage>, i64)> {
        let query = guestbook_messages::table
            .filter(guestbook_messages::is_approved.eq(true))
            .into_boxed();

        let query = match sort {
            MessageSort::Latest => query.order(guestbook_messages::created_at.desc()),
            MessageSort::Oldest => query.order(guestbook_messages::created_at.asc()),
        };

        let query = query.paginate_by(per_page, page);

        let messages_with_total = query.load_and_count(conn)?;

        Ok(messages_with_total)
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = guestbook_messages)]
pub struct NewGuestbookMessage {
    pub user_id: Option<UserId>,
    pub guest_name: String,
    pub message: String,
    pub is_approved: bool,
}

impl NewGuestbookMessage {
    #[tracing::instrument(err, skip_all)]
    pub fn insert(self, conn: &mut DbConnection) -> Result<GuestbookMessage> {
        let query = self.insert_into(guestbook_messages::table);
        let message = query.get_result(conn)?;

        Ok(message)
    }
}
