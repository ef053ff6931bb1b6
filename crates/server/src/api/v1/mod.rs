// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

//! REST API v1
//!
//! Current endpoints. See their respective function:
//! - `/health` ([GET](health::health))
//! - `/content-sections` ([GET](content::get_sections))
//! - `/content/{section}` ([GET](content::get_section))
//! - `/content/{section}/{key}` ([GET](content::get_by_key))
//! - `/events` ([GET](events::get_events))
//! - `/events/{event_id}` ([GET](events::get_event))
//! - `/accommodations` ([GET](accommodations::get_accommodations))
//! - `/accommodations/{accommodation_id}` ([GET](accommodations::get_accommodation))
//! - `/transportation` ([GET](transportation::get_routes))
//! - `/transportation/{route_id}` ([GET](transportation::get_route))
//! - `/gallery` ([GET](gallery::get_gallery), [POST](gallery::post_gallery))
//! - `/gallery/{media_id}` ([GET](gallery::get_media))
//! - `/guestbook` ([GET](guestbook::get_messages), [POST](guestbook::post_message))
//! - `/guestbook/{message_id}` ([GET](guestbook::get_message))
//! - `/users/me` ([GET](users::get_me))
//! - `/rsvp` ([POST](rsvps::post_rsvp))
//! - `/rsvp/{guest_id}` ([GET](rsvps::get_rsvps))

pub mod accommodations;
pub mod content;
pub mod events;
pub mod gallery;
pub mod guestbook;
pub mod health;
pub mod middleware;
pub mod request;
pub mod response;
pub mod rsvps;
pub mod transportation;
pub mod users;
