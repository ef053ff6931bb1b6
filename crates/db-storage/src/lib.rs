// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

//! Contains the database ORM and database migrations for the wedding API.
//! Builds upon biyebari-database.

#[macro_use]
extern crate diesel;

#[macro_use]
mod macros;
mod schema;

pub mod accommodations;
pub mod content;
pub mod events;
pub mod guestbook;
pub mod localized;
pub mod media;
pub mod migrations;
pub mod rsvps;
pub mod seed;
pub mod transportation;
pub mod users;
pub mod utils;

// SQL types reexport for schema.rs
pub mod sql_types {
    pub use super::rsvps::RsvpStatusType as Rsvp_status;
    pub use diesel::sql_types::*;
}
