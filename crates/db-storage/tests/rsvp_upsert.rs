// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

use biyebari_db_storage::rsvps::{NewRsvp, Rsvp, RsvpStatus};
use biyebari_db_storage::users::{generate_api_token, NewUser, User};
use database::DbConnection;
use pretty_assertions::assert_eq;
use serial_test::serial;

use crate::common::make_event;

mod common;

fn make_user(conn: &mut DbConnection, name: &str, email: &str) -> User {
    NewUser {
        name: name.into(),
        email: email.into(),
        phone: None,
        language_preference: "en".into(),
        api_token: generate_api_token(),
    }
    .insert(conn)
    .unwrap()
}

#[tokio::test]
#[serial]
async fn upsert_creates_then_overwrites_in_place() {
    let db_ctx = test_util::database::DatabaseContext::new(true).await;

    let mut conn = db_ctx.db.get_conn().unwrap();

    let user = make_user(&mut conn, "Rahim Ahmed", "rahim@example.org");
    let event = make_event(&mut conn, "Wedding Ceremony", "বিবাহ অনুষ্ঠান", 20);

    let (first, created) = NewRsvp {
        user_id: user.id,
        event_id: event.id,
        guest_count: 2,
        dietary_restrictions: Some("vegetarian".into()),
        special_requests: None,
        status: RsvpStatus::Confirmed,
    }
    .upsert(&mut conn)
    .unwrap();

    assert!(created);
    assert_eq!(first.guest_count, 2);
    assert_eq!(first.status, RsvpStatus::Confirmed);

    // A resubmission for the same (user, event) pair overwrites every
    // submitted field, including clearing the dietary restrictions
    let (second, created) = NewRsvp {
        user_id: user.id,
        event_id: event.id,
        guest_count: 4,
        dietary_restrictions: None,
        special_requests: Some("wheelchair access".into()),
        status: RsvpStatus::Declined,
    }
    .upsert(&mut conn)
    .unwrap();

    assert!(!created);
    assert_eq!(second.id, first.id);
    assert_eq!(second.guest_count, 4);
    assert_eq!(second.dietary_restrictions, None);
    assert_eq!(second.special_requests.as_deref(), Some("wheelchair access"));
    assert_eq!(second.status, RsvpStatus::Declined);
    assert_eq!(second.created_at, first.created_at);

    let stored = Rsvp::get_by_user_and_event(&mut conn, user.id, event.id)
        .unwrap()
        .unwrap();

    assert_eq!(stored.id, first.id);
    assert_eq!(stored.guest_count, 4);
}

#[tokio::test]
#[serial]
async fn duplicate_insert_is_rejected() {
    let db_ctx = test_util::database::DatabaseContext::new(true).await;

    let mut conn = db_ctx.db.get_conn().unwrap();

    let user = make_user(&mut conn, "Karim Chowdhury", "karim@example.org");
    let event = make_event(&mut conn, "Reception", "বৌভাত", 21);

    let new_rsvp = NewRsvp {
        user_id: user.id,
        event_id: event.id,
        guest_count: 1,
        dietary_restrictions: None,
        special_requests: None,
        status: RsvpStatus::Confirmed,
    };

    let first = new_rsvp.clone().try_insert(&mut conn).unwrap();
    assert!(first.is_some());

    let second = new_rsvp.try_insert(&mut conn).unwrap();
    assert!(second.is_none());
}

#[tokio::test]
#[serial]
async fn confirmed_guest_count_ignores_declined() {
    let db_ctx = test_util::database::DatabaseContext::new(true).await;

    let mut conn = db_ctx.db.get_conn().unwrap();

    let event = make_event(&mut conn, "Gaye Holud", "গায়ে হলুদ", 19);
    let other_event = make_event(&mut conn, "Mehendi", "মেহেদি অনুষ্ঠান", 18);

    let attendees = [
        ("Rahim Ahmed", "rahim@example.org", 2, RsvpStatus::Confirmed),
        ("Karim Chowdhury", "karim@example.org", 3, RsvpStatus::Confirmed),
        ("Fatema Begum", "fatema@example.org", 5, RsvpStatus::Declined),
    ];

    for (name, email, guest_count, status) in attendees {
        let user = make_user(&mut conn, name, email);

        NewRsvp {
            user_id: user.id,
            event_id: event.id,
            guest_count,
            dietary_restrictions: None,
            special_requests: None,
            status,
        }
        .try_insert(&mut conn)
        .unwrap();
    }

    let count = Rsvp::confirmed_guest_count(&mut conn, event.id).unwrap();
    assert_eq!(count, 5);

    // No answers yet for the other event
    let count = Rsvp::confirmed_guest_count(&mut conn, other_event.id).unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
#[serial]
async fn listing_skips_deactivated_events() {
    use biyebari_db_storage::events::UpdateEvent;
    use chrono::Utc;

    let db_ctx = test_util::database::DatabaseContext::new(true).await;

    let mut conn = db_ctx.db.get_conn().unwrap();

    let user = make_user(&mut conn, "Fatema Begum", "fatema@example.org");
    let mehendi = make_event(&mut conn, "Mehendi", "মেহেদি অনুষ্ঠান", 18);
    let reception = make_event(&mut conn, "Reception", "বৌভাত", 21);

    for event_id in [mehendi.id, reception.id] {
        NewRsvp {
            user_id: user.id,
            event_id,
            guest_count: 1,
            dietary_restrictions: None,
            special_requests: None,
            status: RsvpStatus::Confirmed,
        }
        .try_insert(&mut conn)
        .unwrap();
    }

    let answers = Rsvp::get_all_for_user_with_event(&mut conn, user.id).unwrap();
    assert_eq!(answers.len(), 2);

    UpdateEvent {
        is_active: Some(false),
        updated_at: Some(Utc::now()),
        ..Default::default()
    }
    .apply(&mut conn, mehendi.id)
    .unwrap();

    let answers = Rsvp::get_all_for_user_with_event(&mut conn, user.id).unwrap();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].1.id, reception.id);
}
