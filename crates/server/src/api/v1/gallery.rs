// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

//! Shared gallery endpoints
//!
//! Uploads are registered rather than streamed: the body carries the file
//! metadata, the response carries the minted storage keys the bytes are
//! uploaded against. Fresh entries stay hidden until they are approved.
use super::request::{PagePaginationQuery, RequestLanguage};
use super::response::{
    ApiError, ApiResponse, DefaultApiResult, ValidationErrorEntry, CODE_INVALID_LENGTH,
    CODE_INVALID_VALUE,
};
use actix_web::web::{Data, Json, Path, Query, ReqData};
use actix_web::{get, post};
use chrono::{DateTime, Utc};
use database::{DatabaseError, Db, DbConnection};
use db_storage::events::{Event, EventId};
use db_storage::localized::Language;
use db_storage::media::{Media, MediaId, MediaKind, NewMedia};
use db_storage::users::User;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// MIME types accepted into the gallery
const ALLOWED_FILE_TYPES: [&str; 6] = [
    "image/jpeg",
    "image/png",
    "image/gif",
    "video/mp4",
    "video/quicktime",
    "video/x-msvideo",
];

/// Maximum number of files per registration
const MAX_FILES_PER_REQUEST: usize = 10;

#[derive(Debug, Deserialize)]
pub struct GalleryQuery {
    pub event_id: Option<EventId>,
    #[serde(rename = "type")]
    pub kind: Option<MediaKind>,
}

/// An approved gallery entry in the listing
#[derive(Debug, Serialize)]
pub struct MediaResource {
    pub id: MediaId,
    pub event_id: Option<EventId>,
    pub filename: String,
    pub file_path: String,
    pub file_type: String,
    pub file_size: i64,
    pub caption: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

impl MediaResource {
    fn from_db(media: Media) -> Self {
        Self {
            id: media.id,
            event_id: media.event_id,
            filename: media.filename,
            file_path: media.file_path,
            file_type: media.file_type,
            file_size: media.file_size,
            caption: media.caption,
            uploaded_at: media.created_at,
        }
    }
}

/// A single gallery entry with uploader and event context
#[derive(Debug, Serialize)]
pub struct MediaDetails {
    pub id: MediaId,
    pub filename: String,
    pub file_path: String,
    pub file_type: String,
    pub file_size: i64,
    pub caption: Option<String>,
    pub uploaded_by: String,
    pub event: Option<MediaEventSummary>,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct MediaEventSummary {
    pub id: EventId,
    pub name: String,
}

impl MediaDetails {
    fn from_db(
        media: Media,
        uploader: Option<User>,
        event: Option<Event>,
        language: Language,
    ) -> Self {
        let uploaded_by = uploader
            .map(|user| user.name)
            .unwrap_or_else(|| "Anonymous".to_owned());

        let event = event.map(|event| MediaEventSummary {
            id: event.id,
            name: event.name().resolve(language).to_owned(),
        });

        Self {
            id: media.id,
            filename: media.filename,
            file_path: media.file_path,
            file_type: media.file_type,
            file_size: media.file_size,
            caption: media.caption,
            uploaded_by,
            event,
            uploaded_at: media.created_at,
        }
    }
}

/// Body of *POST /gallery*
#[derive(Debug, Validate, Deserialize)]
pub struct PostGalleryBody {
    pub event_id: Option<EventId>,
    #[validate(length(max = 500))]
    pub caption: Option<String>,
    #[validate]
    pub files: Vec<FileMetadata>,
}

/// Metadata of one file in a registration
#[derive(Debug, Validate, Deserialize)]
pub struct FileMetadata {
    #[validate(length(min = 1, max = 255))]
    pub filename: String,
    #[validate(custom = "validate_file_type")]
    pub file_type: String,
    // 1 byte up to 50 MiB
    #[validate(range(min = 1, max = 52_428_800))]
    pub file_size: i64,
}

fn validate_file_type(file_type: &str) -> Result<(), ValidationError> {
    if ALLOWED_FILE_TYPES.contains(&file_type) {
        Ok(())
    } else {
        let mut error = ValidationError::new("invalid_value");
        error.message =
            Some("Only JPEG, PNG and GIF images or MP4, MOV and AVI videos are accepted".into());
        Err(error)
    }
}

/// A freshly registered, not yet approved gallery entry
#[derive(Debug, Serialize)]
pub struct RegisteredFile {
    pub id: MediaId,
    pub filename: String,
    pub file_path: String,
    pub file_type: String,
    pub file_size: i64,
    pub caption: Option<String>,
    pub is_approved: bool,
    pub uploaded_at: DateTime<Utc>,
}

impl RegisteredFile {
    fn from_db(media: Media) -> Self {
        Self {
            id: media.id,
            filename: media.filename,
            file_path: media.file_path,
            file_type: media.file_type,
            file_size: media.file_size,
            caption: media.caption,
            is_approved: media.is_approved,
            uploaded_at: media.created_at,
        }
    }
}

/// Mints the storage key the file's bytes are uploaded against
///
/// The original filename only contributes its extension, clients cannot
/// choose where their upload is stored.
fn mint_storage_key(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((_, extension)) if !extension.is_empty() => {
            format!("media/{}.{}", Uuid::new_v4(), extension)
        }
        _ => format!("media/{}", Uuid::new_v4()),
    }
}

/// API Endpoint *GET /gallery*
///
/// Returns a page of approved gallery entries, newest first, optionally
/// filtered by event and media kind.
#[get("/gallery")]
pub async fn get_gallery(
    db: Data<Db>,
    query: Query<GalleryQuery>,
    pagination: Query<PagePaginationQuery>,
) -> DefaultApiResult<Vec<MediaResource>> {
    let GalleryQuery { event_id, kind } = query.into_inner();
    let PagePaginationQuery { per_page, page } = pagination.into_inner();

    let (media, total) = crate::block(move || -> Result<_, ApiError> {
        let mut conn = db.get_conn()?;

        if let Some(event_id) = event_id {
            verify_event_exists(&mut conn, event_id)?;
        }

        let media_with_total =
            Media::get_all_approved_paginated(&mut conn, event_id, kind, per_page, page)?;

        Ok(media_with_total)
    })
    .await??;

    let media = media.into_iter().map(MediaResource::from_db).collect();

    Ok(ApiResponse::new(media).with_page_pagination(per_page, page, total))
}

/// API Endpoint *GET /gallery/{media_id}*
///
/// Returns a single approved gallery entry with its uploader name and event.
#[get("/gallery/{media_id}")]
pub async fn get_media(
    db: Data<Db>,
    language: RequestLanguage,
    media_id: Path<MediaId>,
) -> DefaultApiResult<MediaDetails> {
    let RequestLanguage(language) = language;

    let (media, uploader, event) = crate::block(move || -> Result<_, ApiError> {
        let mut conn = db.get_conn()?;

        let media = Media::get_approved(&mut conn, media_id.into_inner()).map_err(|e| match e {
            DatabaseError::NotFound => {
                ApiError::not_found().with_message("Media not found or not approved")
            }
            e => e.into(),
        })?;

        let uploader = media
            .user_id
            .map(|user_id| User::get(&mut conn, user_id))
            .transpose()?;

        let event = media
            .event_id
            .map(|event_id| Event::get(&mut conn, event_id))
            .transpose()?;

        Ok((media, uploader, event))
    })
    .await??;

    Ok(ApiResponse::new(MediaDetails::from_db(
        media, uploader, event, language,
    )))
}

/// API Endpoint *POST /gallery*
///
/// Registers up to [`MAX_FILES_PER_REQUEST`] files for the requesting guest.
/// The entries are stored unapproved and answer with their minted storage
/// keys.
#[post("/gallery")]
pub async fn post_gallery(
    db: Data<Db>,
    current_user: ReqData<User>,
    body: Json<PostGalleryBody>,
) -> DefaultApiResult<Vec<RegisteredFile>> {
    let body = body.into_inner();
    body.validate()?;

    if body.files.is_empty() || body.files.len() > MAX_FILES_PER_REQUEST {
        return Err(ApiError::unprocessable_entities([
            ValidationErrorEntry::new(
                "files",
                CODE_INVALID_LENGTH,
                Some("Between 1 and 10 files can be registered per request"),
            ),
        ]));
    }

    let current_user = current_user.into_inner();
    let PostGalleryBody {
        event_id,
        caption,
        files,
    } = body;

    let media = crate::block(move || -> Result<_, ApiError> {
        let mut conn = db.get_conn()?;

        if let Some(event_id) = event_id {
            verify_event_exists(&mut conn, event_id)?;
        }

        let batch = files
            .into_iter()
            .map(|file| {
                let file_path = mint_storage_key(&file.filename);

                NewMedia {
                    user_id: Some(current_user.id),
                    event_id,
                    filename: file.filename,
                    file_path,
                    file_type: file.file_type,
                    file_size: file.file_size,
                    caption: caption.clone(),
                    is_approved: false,
                }
            })
            .collect();

        let media = NewMedia::insert_batch(&mut conn, batch)?;

        Ok(media)
    })
    .await??;

    let files = media.into_iter().map(RegisteredFile::from_db).collect();

    Ok(ApiResponse::created(files)
        .with_message("Files registered successfully. They will be visible once approved."))
}

/// Answers the common 422 when a filter or registration names a missing event
fn verify_event_exists(conn: &mut DbConnection, event_id: EventId) -> Result<(), ApiError> {
    Event::get(conn, event_id).map_err(|e| match e {
        DatabaseError::NotFound => ApiError::unprocessable_entities([ValidationErrorEntry::new(
            "event_id",
            CODE_INVALID_VALUE,
            Some("The selected event does not exist"),
        )]),
        e => e.into(),
    })?;

    Ok(())
}
