// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

use biyebari_db_storage::content::{Content, NewContent};
use biyebari_db_storage::localized::Language;
use database::DbConnection;
use pretty_assertions::assert_eq;
use serial_test::serial;

fn make_content(conn: &mut DbConnection, section: &str, key: &str, en: &str, bn: &str) {
    NewContent {
        section: section.into(),
        key: key.into(),
        content_en: en.into(),
        content_bn: bn.into(),
    }
    .try_insert(conn)
    .unwrap();
}

#[tokio::test]
#[serial]
async fn sections_keep_insertion_order() {
    let db_ctx = test_util::database::DatabaseContext::new(true).await;

    let mut conn = db_ctx.db.get_conn().unwrap();

    make_content(
        &mut conn,
        "home",
        "welcome_title",
        "Welcome to our wedding",
        "আমাদের বিয়েতে স্বাগতম",
    );
    make_content(&mut conn, "home", "couple_names", "Ayesha & Tanvir", "আয়েশা ও তানভীর");
    make_content(&mut conn, "contact", "email", "hello@biyebari.example", "");

    let rows = Content::get_section(&mut conn, "home").unwrap();

    let keys = rows.iter().map(|row| row.key.as_str()).collect::<Vec<_>>();
    assert_eq!(keys, vec!["welcome_title", "couple_names"]);

    let sections = Content::get_sections(&mut conn).unwrap();
    assert_eq!(sections, vec!["contact".to_owned(), "home".to_owned()]);
}

#[tokio::test]
#[serial]
async fn lookup_by_section_and_key_resolves_both_languages() {
    let db_ctx = test_util::database::DatabaseContext::new(true).await;

    let mut conn = db_ctx.db.get_conn().unwrap();

    make_content(
        &mut conn,
        "home",
        "welcome_title",
        "Welcome to our wedding",
        "আমাদের বিয়েতে স্বাগতম",
    );
    make_content(&mut conn, "contact", "email", "hello@biyebari.example", "");

    let row = Content::get_by_section_and_key(&mut conn, "home", "welcome_title").unwrap();
    assert_eq!(row.text().resolve(Language::English), "Welcome to our wedding");
    assert_eq!(row.text().resolve(Language::Bengali), "আমাদের বিয়েতে স্বাগতম");

    // A missing Bengali variant stays empty, there is no fallback
    let row = Content::get_by_section_and_key(&mut conn, "contact", "email").unwrap();
    assert_eq!(row.text().resolve(Language::Bengali), "");

    let missing = Content::get_by_section_and_key(&mut conn, "home", "no_such_key");
    assert!(matches!(missing, Err(database::DatabaseError::NotFound)));
}

#[tokio::test]
#[serial]
async fn duplicate_section_key_pairs_are_skipped() {
    let db_ctx = test_util::database::DatabaseContext::new(true).await;

    let mut conn = db_ctx.db.get_conn().unwrap();

    let first = NewContent {
        section: "home".into(),
        key: "welcome_title".into(),
        content_en: "Welcome to our wedding".into(),
        content_bn: "আমাদের বিয়েতে স্বাগতম".into(),
    }
    .try_insert(&mut conn)
    .unwrap();

    assert!(first.is_some());

    let second = NewContent {
        section: "home".into(),
        key: "welcome_title".into(),
        content_en: "A different title".into(),
        content_bn: String::new(),
    }
    .try_insert(&mut conn)
    .unwrap();

    assert!(second.is_none());

    // The stored row is untouched
    let row = Content::get_by_section_and_key(&mut conn, "home", "welcome_title").unwrap();
    assert_eq!(row.content_en, "Welcome to our wedding");
}
