// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

//! RSVP endpoints
use super::request::RequestLanguage;
use super::response::{
    ApiError, ApiResponse, DefaultApiResult, ValidationErrorEntry, CODE_INVALID_VALUE,
};
use actix_web::web::{Data, Json, Path, ReqData};
use actix_web::{get, post};
use chrono::{DateTime, Utc};
use database::{DatabaseError, Db};
use db_storage::events::{Event, EventId};
use db_storage::localized::Language;
use db_storage::rsvps::{NewRsvp, Rsvp, RsvpId, RsvpStatus};
use db_storage::users::{User, UserId};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Body of *POST /rsvp*
#[derive(Debug, Validate, Deserialize)]
pub struct PostRsvpBody {
    pub event_id: EventId,
    #[validate(range(min = 1, max = 10))]
    pub guest_count: i32,
    #[validate(length(max = 1000))]
    pub dietary_restrictions: Option<String>,
    #[validate(length(max = 1000))]
    pub special_requests: Option<String>,
    #[validate(custom = "validate_submitted_status")]
    pub status: RsvpStatus,
}

/// Submissions must take a stance, `pending` only exists as the column default
fn validate_submitted_status(status: &RsvpStatus) -> Result<(), ValidationError> {
    match status {
        RsvpStatus::Confirmed | RsvpStatus::Declined => Ok(()),
        RsvpStatus::Pending => {
            let mut error = ValidationError::new("invalid_value");
            error.message =
                Some("An RSVP must be submitted as either confirmed or declined".into());
            Err(error)
        }
    }
}

/// A stored RSVP as echoed back after submission
#[derive(Debug, Serialize)]
pub struct RsvpResource {
    pub id: RsvpId,
    pub user_id: UserId,
    pub event_id: EventId,
    pub guest_count: i32,
    pub dietary_restrictions: Option<String>,
    pub special_requests: Option<String>,
    pub status: RsvpStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RsvpResource {
    fn from_db(rsvp: Rsvp) -> Self {
        Self {
            id: rsvp.id,
            user_id: rsvp.user_id,
            event_id: rsvp.event_id,
            guest_count: rsvp.guest_count,
            dietary_restrictions: rsvp.dietary_restrictions,
            special_requests: rsvp.special_requests,
            status: rsvp.status,
            created_at: rsvp.created_at,
            updated_at: rsvp.updated_at,
        }
    }
}

/// An RSVP in the guest's listing, joined with the event it answers
#[derive(Debug, Serialize)]
pub struct RsvpEntry {
    pub id: RsvpId,
    pub event: RsvpEventSummary,
    pub guest_count: i32,
    pub dietary_restrictions: Option<String>,
    pub special_requests: Option<String>,
    pub status: RsvpStatus,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct RsvpEventSummary {
    pub id: EventId,
    pub name: String,
    pub event_date: DateTime<Utc>,
}

impl RsvpEntry {
    fn from_db(rsvp: Rsvp, event: Event, language: Language) -> Self {
        let name = event.name().resolve(language).to_owned();

        Self {
            id: rsvp.id,
            event: RsvpEventSummary {
                id: event.id,
                name,
                event_date: event.event_date,
            },
            guest_count: rsvp.guest_count,
            dietary_restrictions: rsvp.dietary_restrictions,
            special_requests: rsvp.special_requests,
            status: rsvp.status,
            submitted_at: rsvp.created_at,
        }
    }
}

/// API Endpoint *POST /rsvp*
///
/// Submits or updates the requesting guest's RSVP for an event. A first
/// submission answers 201, changing an existing answer 200. The event must
/// exist but may be inactive, guests can still change their answer after an
/// event was withdrawn from the listing.
#[post("/rsvp")]
pub async fn post_rsvp(
    db: Data<Db>,
    current_user: ReqData<User>,
    body: Json<PostRsvpBody>,
) -> DefaultApiResult<RsvpResource> {
    let body = body.into_inner();
    body.validate()?;

    let current_user = current_user.into_inner();

    let (rsvp, created) = crate::block(move || -> Result<_, ApiError> {
        let mut conn = db.get_conn()?;

        Event::get(&mut conn, body.event_id).map_err(|e| match e {
            DatabaseError::NotFound => {
                ApiError::unprocessable_entities([ValidationErrorEntry::new(
                    "event_id",
                    CODE_INVALID_VALUE,
                    Some("The selected event does not exist"),
                )])
            }
            e => e.into(),
        })?;

        let (rsvp, created) = NewRsvp {
            user_id: current_user.id,
            event_id: body.event_id,
            guest_count: body.guest_count,
            dietary_restrictions: body.dietary_restrictions,
            special_requests: body.special_requests,
            status: body.status,
        }
        .upsert(&mut conn)?;

        Ok((rsvp, created))
    })
    .await??;

    let resource = RsvpResource::from_db(rsvp);

    let response = if created {
        ApiResponse::created(resource).with_message("RSVP submitted successfully")
    } else {
        ApiResponse::new(resource).with_message("RSVP updated successfully")
    };

    Ok(response)
}

/// API Endpoint *GET /rsvp/{guest_id}*
///
/// Lists the RSVPs of a guest together with the active events they answer,
/// oldest first. Guests can only read their own list.
#[get("/rsvp/{guest_id}")]
pub async fn get_rsvps(
    db: Data<Db>,
    current_user: ReqData<User>,
    language: RequestLanguage,
    guest_id: Path<UserId>,
) -> DefaultApiResult<Vec<RsvpEntry>> {
    let RequestLanguage(language) = language;
    let current_user = current_user.into_inner();

    if guest_id.into_inner() != current_user.id {
        return Err(ApiError::forbidden());
    }

    let rsvps = crate::block(move || {
        let mut conn = db.get_conn()?;

        Rsvp::get_all_for_user_with_event(&mut conn, current_user.id)
    })
    .await??;

    let entries = rsvps
        .into_iter()
        .map(|(rsvp, event)| RsvpEntry::from_db(rsvp, event, language))
        .collect();

    Ok(ApiResponse::new(entries))
}

#[cfg(test)]
mod test {
    use super::*;

    fn body(guest_count: i32, status: RsvpStatus) -> PostRsvpBody {
        PostRsvpBody {
            event_id: EventId::from(1),
            guest_count,
            dietary_restrictions: None,
            special_requests: None,
            status,
        }
    }

    #[test]
    fn guest_count_bounds_are_inclusive() {
        assert!(body(1, RsvpStatus::Confirmed).validate().is_ok());
        assert!(body(10, RsvpStatus::Confirmed).validate().is_ok());
        assert!(body(0, RsvpStatus::Confirmed).validate().is_err());
        assert!(body(11, RsvpStatus::Confirmed).validate().is_err());
    }

    #[test]
    fn pending_cannot_be_submitted() {
        assert!(body(2, RsvpStatus::Declined).validate().is_ok());
        assert!(body(2, RsvpStatus::Pending).validate().is_err());
    }

    #[test]
    fn overlong_free_text_is_rejected() {
        let mut body = body(2, RsvpStatus::Confirmed);
        body.dietary_restrictions = Some("x".repeat(1001));

        assert!(body.validate().is_err());
    }
}
