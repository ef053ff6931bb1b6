// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

use biyebari_db_storage::accommodations::Accommodation;
use biyebari_db_storage::content::Content;
use biyebari_db_storage::events::Event;
use biyebari_db_storage::seed::DEMO_API_TOKENS;
use biyebari_db_storage::transportation::Transportation;
use biyebari_db_storage::users::User;
use pretty_assertions::assert_eq;
use serial_test::serial;

#[tokio::test]
#[serial]
async fn seeding_twice_changes_nothing() {
    let db_ctx = test_util::database::DatabaseContext::new(true).await;

    db_ctx.seed_demo_data().unwrap();
    db_ctx.seed_demo_data().unwrap();

    let mut conn = db_ctx.db.get_conn().unwrap();

    let events = Event::get_all_active(&mut conn).unwrap();
    assert_eq!(events.len(), 4);
    assert!(events.iter().any(|event| event.name_bn == "বিবাহ অনুষ্ঠান"));

    let home = Content::get_section(&mut conn, "home").unwrap();
    assert_eq!(home.len(), 4);

    let sections = Content::get_sections(&mut conn).unwrap();
    assert_eq!(
        sections,
        vec![
            "about".to_owned(),
            "contact".to_owned(),
            "home".to_owned(),
            "travel-guide".to_owned(),
        ]
    );

    let all = Accommodation::get_all(&mut conn, false).unwrap();
    assert_eq!(all.len(), 2);

    // Only the highly rated hotel counts as recommended
    let recommended = Accommodation::get_all(&mut conn, true).unwrap();
    assert_eq!(recommended.len(), 1);
    assert_eq!(recommended[0].name, "Hotel Sarina Dhaka");

    let routes = Transportation::get_all(&mut conn, None).unwrap();
    assert_eq!(routes.len(), 2);

    let airport = Transportation::get_all(&mut conn, Some("airport")).unwrap();
    assert_eq!(airport.len(), 1);
    assert_eq!(airport[0].route_name, "Airport Shuttle");
}

#[tokio::test]
#[serial]
async fn demo_guests_keep_their_fixed_tokens() {
    let db_ctx = test_util::database::DatabaseContext::new(true).await;

    db_ctx.seed_demo_data().unwrap();

    let mut conn = db_ctx.db.get_conn().unwrap();

    let rahim = User::get_by_email(&mut conn, "rahim@example.com").unwrap();
    assert_eq!(rahim.api_token, DEMO_API_TOKENS[0]);
    assert_eq!(rahim.language_preference, "bn");

    let by_token = User::get_by_api_token(&mut conn, DEMO_API_TOKENS[1]).unwrap();
    assert_eq!(by_token.email, "karim@example.com");
}
