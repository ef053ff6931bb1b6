// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

//! Wedding event endpoints
use super::request::RequestLanguage;
use super::response::{ApiError, ApiResponse, DefaultApiResult};
use actix_web::get;
use actix_web::web::{Data, Path};
use chrono::{DateTime, Utc};
use database::{DatabaseError, Db};
use db_storage::events::{Event, EventId};
use db_storage::localized::Language;
use db_storage::media::Media;
use db_storage::rsvps::Rsvp;
use serde::Serialize;

/// A wedding event with its bilingual columns resolved to one language
#[derive(Debug, Serialize)]
pub struct EventResource {
    pub id: EventId,
    pub name: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub venue_name: String,
    pub venue_address: String,
    pub dress_code: Option<String>,
    pub is_active: bool,
}

impl EventResource {
    fn from_db(event: Event, language: Language) -> Self {
        let name = event.name().resolve(language).to_owned();
        let description = event.description().resolve(language).to_owned();
        let dress_code = event
            .dress_code()
            .map(|dress_code| dress_code.resolve(language).to_owned());

        Self {
            id: event.id,
            name,
            description,
            event_date: event.event_date,
            venue_name: event.venue_name,
            venue_address: event.venue_address,
            dress_code,
            is_active: event.is_active,
        }
    }
}

/// [`EventResource`] with attendance and gallery counters
#[derive(Debug, Serialize)]
pub struct EventDetails {
    #[serde(flatten)]
    pub event: EventResource,
    /// Total number of guests across confirmed RSVPs
    pub rsvp_count: i64,
    /// Number of approved gallery entries for this event
    pub media_count: i64,
}

/// API Endpoint *GET /events*
///
/// Returns all active events ordered by their date.
#[get("/events")]
pub async fn get_events(
    db: Data<Db>,
    language: RequestLanguage,
) -> DefaultApiResult<Vec<EventResource>> {
    let RequestLanguage(language) = language;

    let events = crate::block(move || {
        let mut conn = db.get_conn()?;

        Event::get_all_active(&mut conn)
    })
    .await??;

    let events = events
        .into_iter()
        .map(|event| EventResource::from_db(event, language))
        .collect();

    Ok(ApiResponse::new(events))
}

/// API Endpoint *GET /events/{event_id}*
///
/// Returns a single active event with its RSVP and gallery counters.
/// Responds with 404 when the event is missing or inactive.
#[get("/events/{event_id}")]
pub async fn get_event(
    db: Data<Db>,
    language: RequestLanguage,
    event_id: Path<EventId>,
) -> DefaultApiResult<EventDetails> {
    let RequestLanguage(language) = language;

    let (event, rsvp_count, media_count) = crate::block(move || -> Result<_, ApiError> {
        let mut conn = db.get_conn()?;
        let event_id = event_id.into_inner();

        let event = Event::get_active(&mut conn, event_id).map_err(|e| match e {
            DatabaseError::NotFound => ApiError::not_found().with_message("Event not found"),
            e => e.into(),
        })?;

        let rsvp_count = Rsvp::confirmed_guest_count(&mut conn, event_id)?;
        let media_count = Media::approved_count_for_event(&mut conn, event_id)?;

        Ok((event, rsvp_count, media_count))
    })
    .await??;

    Ok(ApiResponse::new(EventDetails {
        event: EventResource::from_db(event, language),
        rsvp_count,
        media_count,
    }))
}

#[cfg(test)]
mod test {
    use super::*;
    use test_util::assert_eq_json;

    fn wedding_ceremony() -> Event {
        let event_date = DateTime::parse_from_rfc3339("2025-12-18T18:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        Event {
            id: EventId::from(1),
            name_en: "Wedding Ceremony".into(),
            name_bn: "বিবাহ অনুষ্ঠান".into(),
            description_en: "The main wedding ceremony".into(),
            description_bn: "মূল বিবাহ অনুষ্ঠান".into(),
            event_date,
            venue_name: "Dhaka Regency".into(),
            venue_address: "Airport Road, Dhaka".into(),
            dress_code_en: Some("Traditional".into()),
            dress_code_bn: Some("ঐতিহ্যবাহী".into()),
            is_active: true,
            created_at: event_date,
            updated_at: event_date,
        }
    }

    #[test]
    fn resource_resolves_bengali() {
        let resource = EventResource::from_db(wedding_ceremony(), Language::Bengali);

        assert_eq_json!(
            resource,
            {
                "id": 1,
                "name": "বিবাহ অনুষ্ঠান",
                "description": "মূল বিবাহ অনুষ্ঠান",
                "event_date": "2025-12-18T18:00:00Z",
                "venue_name": "Dhaka Regency",
                "venue_address": "Airport Road, Dhaka",
                "dress_code": "ঐতিহ্যবাহী",
                "is_active": true
            }
        );
    }

    #[test]
    fn details_flatten_the_resource() {
        let details = EventDetails {
            event: EventResource::from_db(wedding_ceremony(), Language::English),
            rsvp_count: 42,
            media_count: 7,
        };

        assert_eq_json!(
            details,
            {
                "id": 1,
                "name": "Wedding Ceremony",
                "description": "The main wedding ceremony",
                "event_date": "2025-12-18T18:00:00Z",
                "venue_name": "Dhaka Regency",
                "venue_address": "Airport Road, Dhaka",
                "dress_code": "Traditional",
                "is_active": true,
                "rsvp_count": 42,
                "media_count": 7
            }
        );
    }
}
