// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

use crate::migrations::type_polyfills::datetime;
use barrel::backend::Pg;
use barrel::{types, Migration};

fn timestamps(table: &mut barrel::Table) {
    table.add_column("created_at", types::custom("TIMESTAMPTZ DEFAULT now()"));
    table.add_column("updated_at", types::custom("TIMESTAMPTZ DEFAULT now()"));
}

pub fn migration() -> String {
    let mut migr = Migration::new();

    // Created before the rsvps table which references it
    migr.inject_custom("CREATE TYPE rsvp_status AS ENUM ('pending', 'confirmed', 'declined')");

    migr.create_table("users", |table| {
        table.add_column("id", types::custom("BIGSERIAL").primary(true));
        table.add_column("name", types::varchar(255).nullable(false));
        table.add_column("email", types::varchar(255).unique(true).nullable(false));
        table.add_column("phone", types::varchar(255).nullable(true));
        table.add_column("language_preference", types::varchar(35).nullable(false));
        table.add_column("api_token", types::varchar(255).unique(true).nullable(false));
        timestamps(table);
    });

    migr.create_table("events", |table| {
        table.add_column("id", types::custom("BIGSERIAL").primary(true));
        table.add_column("name_en", types::varchar(255).nullable(false));
        table.add_column("name_bn", types::varchar(255).nullable(false));
        table.add_column("description_en", types::text().nullable(false));
        table.add_column("description_bn", types::text().nullable(false));
        table.add_column("event_date", datetime().nullable(false));
        table.add_column("venue_name", types::varchar(255).nullable(false));
        table.add_column("venue_address", types::varchar(255).nullable(false));
        table.add_column("dress_code_en", types::varchar(255).nullable(true));
        table.add_column("dress_code_bn", types::varchar(255).nullable(true));
        table.add_column("is_active", types::boolean().default(true));
        timestamps(table);
    });

    migr.create_table("rsvps", |table| {
        table.add_column("id", types::custom("BIGSERIAL").primary(true));
        table.add_column(
            "user_id",
            types::custom("BIGINT REFERENCES users(id) ON DELETE CASCADE"),
        );
        table.add_column(
            "event_id",
            types::custom("BIGINT REFERENCES events(id) ON DELETE CASCADE"),
        );
        table.add_column("guest_count", types::integer().default(1));
        table.add_column("dietary_restrictions", types::text().nullable(true));
        table.add_column("special_requests", types::text().nullable(true));
        table.add_column("status", types::custom("rsvp_status DEFAULT 'pending'"));
        timestamps(table);

        // One answer per guest and event
        table.inject_custom("UNIQUE (user_id, event_id)");
    });

    migr.create_table("content", |table| {
        table.add_column("id", types::custom("BIGSERIAL").primary(true));
        table.add_column("section", types::varchar(255).nullable(false));
        table.add_column("key", types::varchar(255).nullable(false));
        table.add_column("content_en", types::text().nullable(false));
        table.add_column("content_bn", types::text().nullable(false));
        timestamps(table);

        table.inject_custom("UNIQUE (section, key)");
    });

    migr.create_table("accommodations", |table| {
        table.add_column("id", types::custom("BIGSERIAL").primary(true));
        table.add_column("name", types::varchar(255).nullable(false));
        table.add_column("description", types::text().nullable(false));
        table.add_column("contact_info", types::varchar(255).nullable(false));
        table.add_column("booking_url", types::varchar(255).nullable(true));
        table.add_column("price_range_min", types::double().nullable(true));
        table.add_column("price_range_max", types::double().nullable(true));
        table.add_column("rating", types::integer().nullable(true));
        table.add_column("amenities", types::custom("JSONB").nullable(true));
        timestamps(table);
    });

    migr.create_table("transportation", |table| {
        table.add_column("id", types::custom("BIGSERIAL").primary(true));
        table.add_column("route_name", types::varchar(255).nullable(false));
        table.add_column("pickup_locations", types::custom("JSONB"));
        table.add_column("departure_time", datetime().nullable(false));
        table.add_column("arrival_time", datetime().nullable(false));
        table.add_column("driver_contact", types::varchar(255).nullable(false));
        table.add_column("capacity", types::integer().nullable(false));
        timestamps(table);
    });

    migr.create_table("media", |table| {
        table.add_column("id", types::custom("BIGSERIAL").primary(true));
        table.add_column(
            "user_id",
            types::custom("BIGINT REFERENCES users(id) ON DELETE SET NULL").nullable(true),
        );
        table.add_column(
            "event_id",
            types::custom("BIGINT REFERENCES events(id) ON DELETE SET NULL").nullable(true),
        );
        table.add_column("filename", types::varchar(255).nullable(false));
        table.add_column("file_path", types::varchar(512).nullable(false));
        table.add_column("file_type", types::varchar(255).nullable(false));
        table.add_column("file_size", types::custom("BIGINT"));
        table.add_column("caption", types::text().nullable(true));
        table.add_column("is_approved", types::boolean().default(false));
        timestamps(table);
    });

    migr.create_table("guestbook_messages", |table| {
        table.add_column("id", types::custom("BIGSERIAL").primary(true));
        table.add_column(
            "user_id",
            types::custom("BIGINT REFERENCES users(id) ON DELETE SET NULL").nullable(true),
        );
        table.add_column("guest_name", types::varchar(255).nullable(false));
        table.add_column("message", types::text().nullable(false));
        table.add_column("is_approved", types::boolean().default(false));
        timestamps(table);
    });

    migr.inject_custom("CREATE INDEX rsvps_event_id_idx ON rsvps (event_id)");
    migr.inject_custom("CREATE INDEX media_event_id_idx ON media (event_id)");

    migr.make::<Pg>()
}
