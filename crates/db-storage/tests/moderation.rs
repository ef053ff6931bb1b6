// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

use biyebari_db_storage::guestbook::{GuestbookMessage, MessageSort, NewGuestbookMessage};
use biyebari_db_storage::media::{Media, MediaKind, NewMedia};
use database::{DatabaseError, DbConnection};
use pretty_assertions::assert_eq;
use serial_test::serial;

use crate::common::make_event;

mod common;

fn make_media(
    conn: &mut DbConnection,
    event_id: Option<biyebari_db_storage::events::EventId>,
    filename: &str,
    file_type: &str,
    is_approved: bool,
) -> Media {
    NewMedia {
        user_id: None,
        event_id,
        filename: filename.into(),
        file_path: format!("gallery/{filename}"),
        file_type: file_type.into(),
        file_size: 1024,
        caption: None,
        is_approved,
    }
    .insert(conn)
    .unwrap()
}

#[tokio::test]
#[serial]
async fn gallery_only_shows_approved_media() {
    let db_ctx = test_util::database::DatabaseContext::new(true).await;

    let mut conn = db_ctx.db.get_conn().unwrap();

    let wedding = make_event(&mut conn, "Wedding Ceremony", "বিবাহ অনুষ্ঠান", 20);

    let stage = make_media(&mut conn, Some(wedding.id), "stage.jpg", "image/jpeg", true);
    let pending = make_media(&mut conn, None, "pending.jpg", "image/jpeg", false);
    let entrance = make_media(&mut conn, None, "entrance.mp4", "video/mp4", true);

    let (media, total) = Media::get_all_approved_paginated(&mut conn, None, None, 20, 1).unwrap();

    assert_eq!(total, 2);
    // Newest first
    let ids = media.iter().map(|m| m.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![entrance.id, stage.id]);

    // The unapproved upload is hidden from the detail lookup as well
    let result = Media::get_approved(&mut conn, pending.id);
    assert!(matches!(result, Err(DatabaseError::NotFound)));

    let media = Media::get_approved(&mut conn, stage.id).unwrap();
    assert_eq!(media.kind(), Some(MediaKind::Image));
}

#[tokio::test]
#[serial]
async fn gallery_filters_by_event_and_kind() {
    let db_ctx = test_util::database::DatabaseContext::new(true).await;

    let mut conn = db_ctx.db.get_conn().unwrap();

    let wedding = make_event(&mut conn, "Wedding Ceremony", "বিবাহ অনুষ্ঠান", 20);
    let reception = make_event(&mut conn, "Reception", "বৌভাত", 21);

    let stage = make_media(&mut conn, Some(wedding.id), "stage.jpg", "image/jpeg", true);
    make_media(&mut conn, Some(reception.id), "dinner.jpg", "image/png", true);
    let toast = make_media(&mut conn, Some(wedding.id), "toast.mp4", "video/mp4", true);
    make_media(&mut conn, Some(wedding.id), "hidden.jpg", "image/jpeg", false);

    let (media, total) =
        Media::get_all_approved_paginated(&mut conn, Some(wedding.id), None, 20, 1).unwrap();
    assert_eq!(total, 2);
    assert_eq!(media.len(), 2);

    let (media, total) =
        Media::get_all_approved_paginated(&mut conn, None, Some(MediaKind::Image), 20, 1).unwrap();
    assert_eq!(total, 2);
    assert!(media.iter().all(|m| m.kind() == Some(MediaKind::Image)));

    let (media, total) =
        Media::get_all_approved_paginated(&mut conn, Some(wedding.id), Some(MediaKind::Video), 20, 1)
            .unwrap();
    assert_eq!(total, 1);
    assert_eq!(media[0].id, toast.id);

    let count = Media::approved_count_for_event(&mut conn, wedding.id).unwrap();
    assert_eq!(count, 2);
    assert_eq!(stage.kind(), Some(MediaKind::Image));
}

#[tokio::test]
#[serial]
async fn gallery_pages_carry_the_full_total() {
    let db_ctx = test_util::database::DatabaseContext::new(true).await;

    let mut conn = db_ctx.db.get_conn().unwrap();

    for n in 0..3 {
        make_media(&mut conn, None, &format!("photo{n}.jpg"), "image/jpeg", true);
    }

    let (page_one, total) = Media::get_all_approved_paginated(&mut conn, None, None, 2, 1).unwrap();
    assert_eq!(total, 3);
    assert_eq!(page_one.len(), 2);

    let (page_two, total) = Media::get_all_approved_paginated(&mut conn, None, None, 2, 2).unwrap();
    assert_eq!(total, 3);
    assert_eq!(page_two.len(), 1);

    // The page past the end is simply empty
    let (page_three, total) =
        Media::get_all_approved_paginated(&mut conn, None, None, 2, 3).unwrap();
    assert_eq!(total, 0);
    assert_eq!(page_three.len(), 0);
}

#[tokio::test]
#[serial]
async fn guestbook_only_shows_approved_messages() {
    let db_ctx = test_util::database::DatabaseContext::new(true).await;

    let user = db_ctx.create_test_user(1).unwrap();

    let mut conn = db_ctx.db.get_conn().unwrap();

    let blessings = NewGuestbookMessage {
        user_id: Some(user.id),
        guest_name: "Rahim Ahmed".into(),
        message: "দোয়া ও শুভকামনা রইল!".into(),
        is_approved: true,
    }
    .insert(&mut conn)
    .unwrap();

    let congrats = NewGuestbookMessage {
        user_id: None,
        guest_name: "Nadia".into(),
        message: "Congratulations to you both!".into(),
        is_approved: true,
    }
    .insert(&mut conn)
    .unwrap();

    let pending = NewGuestbookMessage {
        user_id: None,
        guest_name: "Spammer".into(),
        message: "Cheap watches".into(),
        is_approved: false,
    }
    .insert(&mut conn)
    .unwrap();

    let (latest, total) =
        GuestbookMessage::get_all_approved_paginated(&mut conn, MessageSort::Latest, 20, 1)
            .unwrap();
    assert_eq!(total, 2);
    let ids = latest.iter().map(|m| m.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![congrats.id, blessings.id]);

    let (oldest, _) =
        GuestbookMessage::get_all_approved_paginated(&mut conn, MessageSort::Oldest, 20, 1)
            .unwrap();
    let ids = oldest.iter().map(|m| m.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![blessings.id, congrats.id]);

    let result = GuestbookMessage::get_approved(&mut conn, pending.id);
    assert!(matches!(result, Err(DatabaseError::NotFound)));
}
