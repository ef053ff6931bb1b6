// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

//! Guestbook endpoints
//!
//! Messages are posted by authenticated guests and stay hidden until they
//! are approved.
use super::request::PagePaginationQuery;
use super::response::{ApiError, ApiResponse, DefaultApiResult};
use actix_web::web::{Data, Json, Path, Query, ReqData};
use actix_web::{get, post};
use chrono::{DateTime, Utc};
use database::{DatabaseError, Db};
use db_storage::guestbook::{GuestbookMessage, GuestbookMessageId, MessageSort, NewGuestbookMessage};
use db_storage::users::User;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct GuestbookQuery {
    #[serde(default)]
    pub sort: MessageSort,
}

/// An approved guestbook message
#[derive(Debug, Serialize)]
pub struct MessageResource {
    pub id: GuestbookMessageId,
    pub guest_name: String,
    pub message: String,
    pub posted_at: DateTime<Utc>,
}

impl MessageResource {
    fn from_db(message: GuestbookMessage) -> Self {
        Self {
            id: message.id,
            guest_name: message.guest_name,
            message: message.message,
            posted_at: message.created_at,
        }
    }
}

/// A freshly posted, not yet approved message
#[derive(Debug, Serialize)]
pub struct PostedMessage {
    pub id: GuestbookMessageId,
    pub guest_name: String,
    pub message: String,
    pub is_approved: bool,
    pub posted_at: DateTime<Utc>,
}

/// Body of *POST /guestbook*
#[derive(Debug, Validate, Deserialize)]
pub struct PostMessageBody {
    #[validate(length(min = 1, max = 255))]
    pub guest_name: String,
    #[validate(length(min = 1, max = 1000))]
    pub message: String,
}

/// API Endpoint *GET /guestbook*
///
/// Returns a page of approved messages, latest first unless asked otherwise.
#[get("/guestbook")]
pub async fn get_messages(
    db: Data<Db>,
    query: Query<GuestbookQuery>,
    pagination: Query<PagePaginationQuery>,
) -> DefaultApiResult<Vec<MessageResource>> {
    let GuestbookQuery { sort } = query.into_inner();
    let PagePaginationQuery { per_page, page } = pagination.into_inner();

    let (messages, total) = crate::block(move || {
        let mut conn = db.get_conn()?;

        GuestbookMessage::get_all_approved_paginated(&mut conn, sort, per_page, page)
    })
    .await??;

    let messages = messages.into_iter().map(MessageResource::from_db).collect();

    Ok(ApiResponse::new(messages).with_page_pagination(per_page, page, total))
}

/// API Endpoint *GET /guestbook/{message_id}*
#[get("/guestbook/{message_id}")]
pub async fn get_message(
    db: Data<Db>,
    message_id: Path<GuestbookMessageId>,
) -> DefaultApiResult<MessageResource> {
    let message = crate::block(move || -> Result<GuestbookMessage, ApiError> {
        let mut conn = db.get_conn()?;

        GuestbookMessage::get_approved(&mut conn, message_id.into_inner()).map_err(|e| match e {
            DatabaseError::NotFound => {
                ApiError::not_found().with_message("Message not found or not approved")
            }
            e => e.into(),
        })
    })
    .await??;

    Ok(ApiResponse::new(MessageResource::from_db(message)))
}

/// API Endpoint *POST /guestbook*
///
/// Stores a new message for the requesting guest. The message stays hidden
/// from the listing until it is approved.
#[post("/guestbook")]
pub async fn post_message(
    db: Data<Db>,
    current_user: ReqData<User>,
    body: Json<PostMessageBody>,
) -> DefaultApiResult<PostedMessage> {
    let body = body.into_inner();
    body.validate()?;

    let current_user = current_user.into_inner();

    let message = crate::block(move || {
        let mut conn = db.get_conn()?;

        NewGuestbookMessage {
            user_id: Some(current_user.id),
            guest_name: body.guest_name,
            message: body.message,
            is_approved: false,
        }
        .insert(&mut conn)
    })
    .await??;

    Ok(ApiResponse::created(PostedMessage {
        id: message.id,
        guest_name: message.guest_name,
        message: message.message,
        is_approved: message.is_approved,
        posted_at: message.created_at,
    })
    .with_message("Your message has been submitted and will be visible once approved."))
}
