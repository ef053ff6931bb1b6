// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

use crate::events::EventId;
use crate::schema::media;
use crate::users::UserId;
use chrono::{DateTime, Utc};
use database::{DbConnection, Paginate, Result};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

diesel_newtype! {
    #[derive(Copy)]
    MediaId(i64) => diesel::sql_types::BigInt
}

/// Coarse media category derived from the stored mime type
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn mime_prefix(self) -> &'static str {
        match self {
            MediaKind::Image => "image/",
            MediaKind::Video => "video/",
        }
    }
}

/// An uploaded photo or video shown in the gallery once approved
#[derive(Debug, Clone, Queryable, Identifiable)]
#[diesel(table_name = media)]
pub struct Media {
    pub id: MediaId,
    pub user_id: Option<UserId>,
    pub event_id: Option<EventId>,
    pub filename: String,
    pub file_path: String,
    pub file_type: String,
    pub file_size: i64,
    pub caption: Option<String>,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Media {
    pub fn kind(&self) -> Option<MediaKind> {
        if self.file_type.starts_with(MediaKind::Image.mime_prefix()) {
            Some(MediaKind::Image)
        } else if self.file_type.starts_with(MediaKind::Video.mime_prefix()) {
            Some(MediaKind::Video)
        } else {
            None
        }
    }

    #[tracing::instrument(err, skip_all)]
    pub fn get_approved(conn: &mut DbConnection, id: MediaId) -> Result<Media> {
        let media = media::table
            .filter(media::id.eq(id))
            .filter(media::is_approved.eq(true))
            .get_result(conn)?;

        Ok(media)
    }

    /// Returns a page of approved media, newest first, with the total count
    #[tracing::instrument(err, skip_all)]
    pub fn get_all_approved_paginated(
        conn: &mut DbConnection,
        event_id: Option<EventId>,
        kind: Option<MediaKind>,
        per_page: i64,
        page: i64,
    ) -> Result<(Vec<Media>, i64)> {
        let mut query = media::table
            .filter(media::is_approved.eq(true))
            .into_boxed();

        if let Some(event_id) = event_id {
            query = query.filter(media::event_id.eq(event_id));
        }

        if let Some(kind) = kind {
            query = query.filter(media::file_type.ilike(format!("{}%", kind.mime_prefix())));
        }

        let query = query
            .order(media::created_at.desc())
            .paginate_by(per_page, page);

        let media_with_total = query.load_and_count(conn)?;

        Ok(media_with_total)
    }

    #[tracing::instrument(err, skip_all)]
    pub fn approved_count_for_event(conn: &mut DbConnection, event_id: EventId) -> Result<i64> {
        let count = media::table
            .filter(media::event_id.eq(event_id))
            .filter(media::is_approved.eq(true))
            .count()
            .get_result(conn)?;

        Ok(count)
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = media)]
pub struct NewMedia {
    pub user_id: Option<UserId>,
    pub event_id: Option<EventId>,
    pub filename: String,
    pub file_path: String,
    pub file_type: String,
    pub file_size: i64,
    pub caption: Option<String>,
    pub is_approved: bool,
}

impl NewMedia {
    #[tracing::instrument(err, skip_all)]
    pub fn insert(self, conn: &mut DbConnection) -> Result<Media> {
        let query = self.insert_into(media::table);
        let media = query.get_result(conn)?;

        Ok(media)
    }

    /// Inserts all rows of a registration in one transaction
    #[tracing::instrument(err, skip_all)]
    pub fn insert_batch(conn: &mut DbConnection, batch: Vec<NewMedia>) -> Result<Vec<Media>> {
        let media = conn.transaction(|conn| {
            batch
                .into_iter()
                .map(|new_media| new_media.insert_into(media::table).get_result(conn))
                .collect::<QueryResult<Vec<Media>>>()
        })?;

        Ok(media)
    }
}
