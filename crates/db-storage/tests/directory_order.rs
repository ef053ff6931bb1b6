// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

use biyebari_db_storage::accommodations::{Accommodation, NewAccommodation};
use biyebari_db_storage::transportation::{NewTransportation, Transportation};
use biyebari_db_storage::utils::Jsonb;
use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use serial_test::serial;

fn utc(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
}

#[tokio::test]
#[serial]
async fn accommodations_sort_by_rating_then_name_with_unrated_last() {
    let db_ctx = test_util::database::DatabaseContext::new(true).await;
    let mut conn = db_ctx.db.get_conn().unwrap();

    for (name, rating) in [
        ("Lakeshore Banani", Some(4)),
        ("Uttara Rest House", None),
        ("Hotel 71", Some(2)),
        ("Amari Dhaka", Some(4)),
    ] {
        NewAccommodation {
            name: name.into(),
            description: "A place to stay".into(),
            contact_info: "+880 2-0000000".into(),
            booking_url: None,
            price_range_min: None,
            price_range_max: None,
            rating,
            amenities: None,
        }
        .insert(&mut conn)
        .unwrap();
    }

    let all = Accommodation::get_all(&mut conn, false).unwrap();
    let names = all.iter().map(|a| a.name.as_str()).collect::<Vec<_>>();

    assert_eq!(
        names,
        vec![
            "Amari Dhaka",
            "Lakeshore Banani",
            "Hotel 71",
            "Uttara Rest House",
        ]
    );

    let recommended = Accommodation::get_all(&mut conn, true).unwrap();
    let names = recommended.iter().map(|a| a.name.as_str()).collect::<Vec<_>>();

    assert_eq!(names, vec!["Amari Dhaka", "Lakeshore Banani"]);
}

#[tokio::test]
#[serial]
async fn routes_sort_by_departure_and_filter_ignores_case() {
    let db_ctx = test_util::database::DatabaseContext::new(true).await;
    let mut conn = db_ctx.db.get_conn().unwrap();

    let routes = [
        ("Airport Shuttle", "2025-12-20T08:30:00+06:00"),
        ("Old Dhaka Heritage Loop", "2025-12-20T07:45:00+06:00"),
        ("Banani - Airport Express", "2025-12-20T09:15:00+06:00"),
    ];

    for (route_name, departure) in routes {
        NewTransportation {
            route_name: route_name.into(),
            pickup_locations: Jsonb(vec!["Gulshan 1 Circle".into()]),
            departure_time: utc(departure),
            arrival_time: utc("2025-12-20T10:00:00+06:00"),
            driver_contact: "+880 1711-000000".into(),
            capacity: 14,
        }
        .insert(&mut conn)
        .unwrap();
    }

    let all = Transportation::get_all(&mut conn, None).unwrap();
    let names = all.iter().map(|t| t.route_name.as_str()).collect::<Vec<_>>();

    assert_eq!(
        names,
        vec![
            "Old Dhaka Heritage Loop",
            "Airport Shuttle",
            "Banani - Airport Express",
        ]
    );

    let airport = Transportation::get_all(&mut conn, Some("AIRPORT")).unwrap();
    let names = airport
        .iter()
        .map(|t| t.route_name.as_str())
        .collect::<Vec<_>>();

    assert_eq!(names, vec!["Airport Shuttle", "Banani - Airport Express"]);
}
