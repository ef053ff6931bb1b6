// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

//! Demo dataset for local development
//!
//! Installed by the `seed` subcommand. Every insert is guarded by a lookup
//! on the records natural key, so running the command twice leaves the
//! database unchanged.

use crate::accommodations::NewAccommodation;
use crate::content::NewContent;
use crate::events::NewEvent;
use crate::schema::{accommodations, events, transportation};
use crate::transportation::NewTransportation;
use crate::users::{NewUser, User};
use crate::utils::Jsonb;
use anyhow::Result;
use chrono::{DateTime, Utc};
use database::{DbConnection, OptionalExt};
use diesel::prelude::*;

/// Fixed API tokens of the seeded demo guests, handy for local curl sessions
pub const DEMO_API_TOKENS: [&str; 3] = [
    "demo-token-rahim",
    "demo-token-karim",
    "demo-token-fatema",
];

const DEMO_USERS: [(&str, &str, Option<&str>, &str); 3] = [
    ("Rahim Ahmed", "rahim@example.com", Some("+8801712345678"), "bn"),
    ("Karim Chowdhury", "karim@example.com", None, "en"),
    ("Fatema Begum", "fatema@example.com", Some("+8801911223344"), "bn"),
];

const DEMO_CONTENT: [(&str, &str, &str, &str); 8] = [
    (
        "home",
        "welcome_title",
        "Welcome to our wedding",
        "আমাদের বিয়েতে স্বাগতম",
    ),
    (
        "home",
        "welcome_message",
        "We are delighted to invite you to celebrate with us in Dhaka this December.",
        "এই ডিসেম্বরে ঢাকায় আমাদের সাথে আনন্দ ভাগ করে নিতে আপনাকে সাদর আমন্ত্রণ জানাই।",
    ),
    ("home", "couple_names", "Ayesha & Tanvir", "আয়েশা ও তানভীর"),
    ("home", "wedding_date", "20 December 2025", "২০ ডিসেম্বর ২০২৫"),
    (
        "about",
        "story",
        "We met at university in Dhaka and have been inseparable ever since.",
        "ঢাকা বিশ্ববিদ্যালয়ে আমাদের প্রথম দেখা, তারপর থেকে আমরা অবিচ্ছেদ্য।",
    ),
    ("contact", "phone", "+880 1712-345678", "+৮৮০ ১৭১২-৩৪৫৬৭৮"),
    // No Bengali variant on purpose, clients receive an empty string
    ("contact", "email", "hello@biyebari.example", ""),
    (
        "travel-guide",
        "visa_info",
        "Most visitors can obtain a visa on arrival at Hazrat Shahjalal International Airport.",
        "অধিকাংশ দর্শনার্থী হযরত শাহজালাল আন্তর্জাতিক বিমানবন্দরে অন অ্যারাইভাল ভিসা পেতে পারেন।",
    ),
];

#[tracing::instrument(err, skip_all)]
pub fn seed_demo_data(conn: &mut DbConnection) -> Result<()> {
    seed_users(conn)?;
    seed_events(conn)?;
    seed_content(conn)?;
    seed_accommodations(conn)?;
    seed_transportation(conn)?;

    Ok(())
}

fn seed_users(conn: &mut DbConnection) -> Result<()> {
    for ((name, email, phone, language), api_token) in DEMO_USERS.into_iter().zip(DEMO_API_TOKENS)
    {
        if User::get_by_email(conn, email).optional()?.is_some() {
            continue;
        }

        let user = NewUser {
            name: name.into(),
            email: email.into(),
            phone: phone.map(Into::into),
            language_preference: language.into(),
            api_token: api_token.into(),
        }
        .insert(conn)?;

        log::info!("seeded demo user {} <{}>", user.name, user.email);
    }

    Ok(())
}

fn seed_events(conn: &mut DbConnection) -> Result<()> {
    for event in demo_events()? {
        let already_there: i64 = events::table
            .filter(events::name_en.eq(&event.name_en))
            .count()
            .get_result(conn)?;

        if already_there == 0 {
            event.insert(conn)?;
        }
    }

    Ok(())
}

fn demo_events() -> Result<Vec<NewEvent>> {
    Ok(vec![
        NewEvent {
            name_en: "Mehendi".into(),
            name_bn: "মেহেদি অনুষ্ঠান".into(),
            description_en: "An evening of henna artistry, music and sweets at the bride's home."
                .into(),
            description_bn: "কনের বাড়িতে মেহেদি, গান আর মিষ্টিমুখের এক সন্ধ্যা।".into(),
            event_date: dhaka_time("2025-12-18T16:00:00")?,
            venue_name: "Rahman Family Residence".into(),
            venue_address: "House 12, Road 5, Dhanmondi, Dhaka".into(),
            dress_code_en: Some("Green and yellow".into()),
            dress_code_bn: Some("সবুজ ও হলুদ পোশাক".into()),
            is_active: true,
        },
        NewEvent {
            name_en: "Gaye Holud".into(),
            name_bn: "গায়ে হলুদ".into(),
            description_en: "The traditional turmeric ceremony with both families.".into(),
            description_bn: "দুই পরিবারের অংশগ্রহণে ঐতিহ্যবাহী হলুদ অনুষ্ঠান।".into(),
            event_date: dhaka_time("2025-12-19T18:00:00")?,
            venue_name: "Dhanmondi Community Hall".into(),
            venue_address: "Road 27, Dhanmondi, Dhaka".into(),
            dress_code_en: Some("Traditional yellow".into()),
            dress_code_bn: Some("হলুদ রঙের ঐতিহ্যবাহী পোশাক".into()),
            is_active: true,
        },
        NewEvent {
            name_en: "Wedding Ceremony".into(),
            name_bn: "বিবাহ অনুষ্ঠান".into(),
            description_en: "The akd and wedding ceremony, followed by lunch.".into(),
            description_bn: "আক্‌দ ও বিবাহ অনুষ্ঠান, শেষে মধ্যাহ্নভোজ।".into(),
            event_date: dhaka_time("2025-12-20T11:00:00")?,
            venue_name: "Dhaka Ladies Club".into(),
            venue_address: "Eskaton Garden Road, Dhaka".into(),
            dress_code_en: Some("Formal or traditional".into()),
            dress_code_bn: Some("আনুষ্ঠানিক বা ঐতিহ্যবাহী পোশাক".into()),
            is_active: true,
        },
        NewEvent {
            name_en: "Reception".into(),
            name_bn: "বৌভাত".into(),
            description_en: "The reception dinner hosted by the groom's family.".into(),
            description_bn: "বরপক্ষের আয়োজনে বৌভাতের নৈশভোজ।".into(),
            event_date: dhaka_time("2025-12-21T19:00:00")?,
            venue_name: "International Convention City Bashundhara".into(),
            venue_address: "Purbachal Express Highway, Dhaka".into(),
            dress_code_en: None,
            dress_code_bn: None,
            is_active: true,
        },
    ])
}

fn seed_content(conn: &mut DbConnection) -> Result<()> {
    for (section, key, content_en, content_bn) in DEMO_CONTENT {
        NewContent {
            section: section.into(),
            key: key.into(),
            content_en: content_en.into(),
            content_bn: content_bn.into(),
        }
        .try_insert(conn)?;
    }

    Ok(())
}

fn seed_accommodations(conn: &mut DbConnection) -> Result<()> {
    let demo = vec![
        NewAccommodation {
            name: "Hotel Sarina Dhaka".into(),
            description: "Business hotel in Banani, a short drive from all venues.".into(),
            contact_info: "+880 2-9891742".into(),
            booking_url: Some("https://www.sarinahotel.com".into()),
            price_range_min: Some(90.0),
            price_range_max: Some(150.0),
            rating: Some(5),
            amenities: Some(Jsonb(vec![
                "wifi".into(),
                "breakfast".into(),
                "airport shuttle".into(),
                "pool".into(),
            ])),
        },
        NewAccommodation {
            name: "Green Leaf Guest House".into(),
            description: "Simple, friendly guest house in Dhanmondi near the Mehendi venue.".into(),
            contact_info: "+880 1819-887766".into(),
            booking_url: None,
            price_range_min: Some(30.0),
            price_range_max: Some(45.0),
            rating: Some(3),
            amenities: Some(Jsonb(vec!["wifi".into(), "breakfast".into()])),
        },
    ];

    for accommodation in demo {
        let already_there: i64 = accommodations::table
            .filter(accommodations::name.eq(&accommodation.name))
            .count()
            .get_result(conn)?;

        if already_there == 0 {
            accommodation.insert(conn)?;
        }
    }

    Ok(())
}

fn seed_transportation(conn: &mut DbConnection) -> Result<()> {
    let demo = vec![
        NewTransportation {
            route_name: "Airport Shuttle".into(),
            pickup_locations: Jsonb(vec![
                "Hazrat Shahjalal International Airport, Terminal 1".into(),
                "Hazrat Shahjalal International Airport, Terminal 2".into(),
            ]),
            departure_time: dhaka_time("2025-12-20T08:30:00")?,
            arrival_time: dhaka_time("2025-12-20T09:30:00")?,
            driver_contact: "Mokbul, +880 1711-000111".into(),
            capacity: 14,
        },
        NewTransportation {
            route_name: "Gulshan Loop".into(),
            pickup_locations: Jsonb(vec![
                "Gulshan 1 Circle".into(),
                "Gulshan 2 Circle".into(),
                "Banani Road 11".into(),
            ]),
            departure_time: dhaka_time("2025-12-20T09:00:00")?,
            arrival_time: dhaka_time("2025-12-20T10:15:00")?,
            driver_contact: "Shafiq, +880 1712-000222".into(),
            capacity: 30,
        },
    ];

    for route in demo {
        let already_there: i64 = transportation::table
            .filter(transportation::route_name.eq(&route.route_name))
            .count()
            .get_result(conn)?;

        if already_there == 0 {
            route.insert(conn)?;
        }
    }

    Ok(())
}

/// Parses a local Dhaka wall clock time (UTC+6) into a UTC timestamp
fn dhaka_time(local: &str) -> Result<DateTime<Utc>> {
    let with_offset = format!("{local}+06:00");
    let parsed = DateTime::parse_from_rfc3339(&with_offset)?;

    Ok(parsed.with_timezone(&Utc))
}
