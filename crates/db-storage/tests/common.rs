// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

use biyebari_db_storage::events::{Event, NewEvent};
use chrono::{TimeZone as _, Utc};
use database::DbConnection;

/// Creates an active event on the given December 2025 day
pub fn make_event(conn: &mut DbConnection, name_en: &str, name_bn: &str, day: u32) -> Event {
    NewEvent {
        name_en: name_en.into(),
        name_bn: name_bn.into(),
        description_en: format!("{name_en} with family and friends"),
        description_bn: String::new(),
        event_date: Utc.with_ymd_and_hms(2025, 12, day, 11, 0, 0).unwrap(),
        venue_name: "Dhaka Ladies Club".into(),
        venue_address: "Eskaton Garden Road, Dhaka".into(),
        dress_code_en: None,
        dress_code_bn: None,
        is_active: true,
    }
    .insert(conn)
    .unwrap()
}
