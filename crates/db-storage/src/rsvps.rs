// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

use crate::events::{Event, EventId};
use crate::schema::{events, rsvps};
use crate::users::UserId;
use chrono::{DateTime, Utc};
use database::{DbConnection, Result};
use diesel::prelude::*;

diesel_newtype! {
    #[derive(Copy)]
    RsvpId(i64) => diesel::sql_types::BigInt
}

sql_enum!(
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "lowercase")]
    RsvpStatus,
    "rsvp_status",
    RsvpStatusType,
    {
        Pending = b"pending",
        Confirmed = b"confirmed",
        Declined = b"declined",
    }
);

/// A guest's attendance record for one event
///
/// At most one row exists per (user, event) pair, enforced by a unique
/// constraint. Re-submissions overwrite the row in place, no history is kept.
#[derive(Debug, Clone, Queryable, Identifiable)]
#[diesel(table_name = rsvps)]
pub struct Rsvp {
    pub id: RsvpId,
    pub user_id: UserId,
    pub event_id: EventId,
    pub guest_count: i32,
    pub dietary_restrictions: Option<String>,
    pub special_requests: Option<String>,
    pub status: RsvpStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Rsvp {
    #[tracing::instrument(err, skip_all)]
    pub fn get_by_user_and_event(
        conn: &mut DbConnection,
        user_id: UserId,
        event_id: EventId,
    ) -> Result<Option<Rsvp>> {
        let query = rsvps::table.filter(
            rsvps::user_id
                .eq(user_id)
                .and(rsvps::event_id.eq(event_id)),
        );

        let rsvp = query.first(conn).optional()?;

        Ok(rsvp)
    }

    /// Returns the user's RSVPs together with their events, oldest first
    ///
    /// RSVPs pointing at inactive events are filtered out.
    #[tracing::instrument(err, skip_all)]
    pub fn get_all_for_user_with_event(
        conn: &mut DbConnection,
        user_id: UserId,
    ) -> Result<Vec<(Rsvp, Event)>> {
        let query = rsvps::table
            .inner_join(events::table)
            .filter(rsvps::user_id.eq(user_id).and(events::is_active.eq(true)))
            .order(rsvps::created_at.asc());

        let rsvps = query.load(conn)?;

        Ok(rsvps)
    }

    /// Sum of the confirmed guest counts for the event
    #[tracing::instrument(err, skip_all)]
    pub fn confirmed_guest_count(conn: &mut DbConnection, event_id: EventId) -> Result<i64> {
        let query = rsvps::table
            .filter(
                rsvps::event_id
                    .eq(event_id)
                    .and(rsvps::status.eq(RsvpStatus::Confirmed)),
            )
            .select(diesel::dsl::sum(rsvps::guest_count));

        let sum: Option<i64> = query.get_result(conn)?;

        Ok(sum.unwrap_or(0))
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = rsvps)]
pub struct NewRsvp {
    pub user_id: UserId,
    pub event_id: EventId,
    pub guest_count: i32,
    pub dietary_restrictions: Option<String>,
    pub special_requests: Option<String>,
    pub status: RsvpStatus,
}

impl NewRsvp {
    /// Tries to insert the RSVP, returning `None` when the (user, event)
    /// pair already has one
    #[tracing::instrument(err, skip_all)]
    pub fn try_insert(self, conn: &mut DbConnection) -> Result<Option<Rsvp>> {
        let query = self.insert_into(rsvps::table);

        let result = query.get_result(conn);

        match result {
            Ok(rsvp) => Ok(Some(rsvp)),
            Err(diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                ..,
            )) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Creates the RSVP or overwrites the existing one for the (user, event)
    /// pair in place
    ///
    /// Returns the stored row and whether it was newly created. A first
    /// submission losing the race against a concurrent one is retried as an
    /// update, the caller never sees the unique-constraint violation.
    #[tracing::instrument(err, skip_all)]
    pub fn upsert(self, conn: &mut DbConnection) -> Result<(Rsvp, bool)> {
        let user_id = self.user_id;
        let event_id = self.event_id;

        let update = UpdateRsvp {
            guest_count: self.guest_count,
            dietary_restrictions: self.dietary_restrictions.clone(),
            special_requests: self.special_requests.clone(),
            status: self.status,
            updated_at: Utc::now(),
        };

        if Rsvp::get_by_user_and_event(conn, user_id, event_id)?.is_some() {
            return Ok((update.apply(conn, user_id, event_id)?, false));
        }

        match self.try_insert(conn)? {
            Some(rsvp) => Ok((rsvp, true)),
            None => Ok((update.apply(conn, user_id, event_id)?, false)),
        }
    }
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = rsvps, treat_none_as_null = true)]
pub struct UpdateRsvp {
    pub guest_count: i32,
    pub dietary_restrictions: Option<String>,
    pub special_requests: Option<String>,
    pub status: RsvpStatus,
    pub updated_at: DateTime<Utc>,
}

impl UpdateRsvp {
    /// Applies the changes to the RSVP of the given (user, event) pair
    #[tracing::instrument(err, skip_all)]
    pub fn apply(
        self,
        conn: &mut DbConnection,
        user_id: UserId,
        event_id: EventId,
    ) -> Result<Rsvp> {
        let query = diesel::update(rsvps::table)
            .filter(
                rsvps::user_id
                    .eq(user_id)
                    .and(rsvps::event_id.eq(event_id)),
            )
            .set(self)
            .returning(rsvps::all_columns);

        let rsvp = query.get_result(conn)?;

        Ok(rsvp)
    }
}
