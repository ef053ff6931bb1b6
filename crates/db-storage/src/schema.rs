// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

table! {
    use crate::sql_types::*;

    accommodations (id) {
        id -> Int8,
        name -> Varchar,
        description -> Text,
        contact_info -> Varchar,
        booking_url -> Nullable<Varchar>,
        price_range_min -> Nullable<Float8>,
        price_range_max -> Nullable<Float8>,
        rating -> Nullable<Int4>,
        amenities -> Nullable<Jsonb>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

table! {
    use crate::sql_types::*;

    content (id) {
        id -> Int8,
        section -> Varchar,
        key -> Varchar,
        content_en -> Text,
        content_bn -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

table! {
    use crate::sql_types::*;

    events (id) {
        id -> Int8,
        name_en -> Varchar,
        name_bn -> Varchar,
        description_en -> Text,
        description_bn -> Text,
        event_date -> Timestamptz,
        venue_name -> Varchar,
        venue_address -> Varchar,
        dress_code_en -> Nullable<Varchar>,
        dress_code_bn -> Nullable<Varchar>,
        is_active -> Bool,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

table! {
    use crate::sql_types::*;

    guestbook_messages (id) {
        id -> Int8,
        user_id -> Nullable<Int8>,
        guest_name -> Varchar,
        message -> Text,
        is_approved -> Bool,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

table! {
    use crate::sql_types::*;

    media (id) {
        id -> Int8,
        user_id -> Nullable<Int8>,
        event_id -> Nullable<Int8>,
        filename -> Varchar,
        file_path -> Varchar,
        file_type -> Varchar,
        file_size -> Int8,
        caption -> Nullable<Text>,
        is_approved -> Bool,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

table! {
    use crate::sql_types::*;

    refinery_schema_history (version) {
        version -> Int4,
        name -> Nullable<Varchar>,
        applied_on -> Nullable<Varchar>,
        checksum -> Nullable<Varchar>,
    }
}

table! {
    use crate::sql_types::*;

    rsvps (id) {
        id -> Int8,
        user_id -> Int8,
        event_id -> Int8,
        guest_count -> Int4,
        dietary_restrictions -> Nullable<Text>,
        special_requests -> Nullable<Text>,
        status -> Rsvp_status,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

table! {
    use crate::sql_types::*;

    transportation (id) {
        id -> Int8,
        route_name -> Varchar,
        pickup_locations -> Jsonb,
        departure_time -> Timestamptz,
        arrival_time -> Timestamptz,
        driver_contact -> Varchar,
        capacity -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

table! {
    use crate::sql_types::*;

    users (id) {
        id -> Int8,
        name -> Varchar,
        email -> Varchar,
        phone -> Nullable<Varchar>,
        language_preference -> Varchar,
        api_token -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

joinable!(media -> events (event_id));
joinable!(media -> users (user_id));
joinable!(rsvps -> events (event_id));
joinable!(rsvps -> users (user_id));
joinable!(guestbook_messages -> users (user_id));

allow_tables_to_appear_in_same_query!(
    accommodations,
    content,
    events,
    guestbook_messages,
    media,
    refinery_schema_history,
    rsvps,
    transportation,
    users,
);
