// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

use crate::localized::Localized;
use crate::schema::events;
use chrono::{DateTime, Utc};
use database::{DbConnection, Result};
use diesel::prelude::*;

diesel_newtype! {
    #[derive(Copy)]
    EventId(i64) => diesel::sql_types::BigInt
}

/// A wedding event such as the mehendi night or the reception
///
/// Inactive events are invisible to guests; every read path filters on
/// `is_active`. Only the write side of RSVP submission accepts any state.
#[derive(Debug, Clone, Queryable, Identifiable)]
#[diesel(table_name = events)]
pub struct Event {
    pub id: EventId,
    pub name_en: String,
    pub name_bn: String,
    pub description_en: String,
    pub description_bn: String,
    pub event_date: DateTime<Utc>,
    pub venue_name: String,
    pub venue_address: String,
    pub dress_code_en: Option<String>,
    pub dress_code_bn: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    pub fn name(&self) -> Localized<'_> {
        Localized::new(&self.name_en, &self.name_bn)
    }

    pub fn description(&self) -> Localized<'_> {
        Localized::new(&self.description_en, &self.description_bn)
    }

    pub fn dress_code(&self) -> Option<Localized<'_>> {
        self.dress_code_en
            .as_deref()
            .map(|en| Localized::new(en, self.dress_code_bn.as_deref().unwrap_or_default()))
    }

    /// Returns the event regardless of its active state
    #[tracing::instrument(err, skip_all)]
    pub fn get(conn: &mut DbConnection, event_id: EventId) -> Result<Event> {
        let event = events::table
            .filter(events::id.eq(event_id))
            .get_result(conn)?;

        Ok(event)
    }

    /// Returns the event only if it is active
    ///
    /// An inactive event yields `NotFound`, callers cannot distinguish
    /// "never existed" from "deactivated".
    #[tracing::instrument(err, skip_all)]
    pub fn get_active(conn: &mut DbConnection, event_id: EventId) -> Result<Event> {
        let event = events::table
            .filter(events::id.eq(event_id).and(events::is_active.eq(true)))
            .get_result(conn)?;

        Ok(event)
    }

    /// Returns all active events ordered by their date
    #[tracing::instrument(err, skip_all)]
    pub fn get_all_active(conn: &mut DbConnection) -> Result<Vec<Event>> {
        let query = events::table
            .filter(events::is_active.eq(true))
            .order(events::event_date.asc());

        let events = query.load(conn)?;

        Ok(events)
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = events)]
pub struct NewEvent {
    pub name_en: String,
    pub name_bn: String,
    pub description_en: String,
    pub description_bn: String,
    pub event_date: DateTime<Utc>,
    pub venue_name: String,
    pub venue_address: String,
    pub dress_code_en: Option<String>,
    pub dress_code_bn: Option<String>,
    pub is_active: bool,
}

impl NewEvent {
    #[tracing::instrument(err, skip_all)]
    pub fn insert(self, conn: &mut DbConnection) -> Result<Event> {
        let query = self.insert_into(events::table);
        let event = query.get_result(conn)?;

        Ok(event)
    }
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = events)]
pub struct UpdateEvent {
    pub name_en: Option<String>,
    pub name_bn: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub venue_name: Option<String>,
    pub venue_address: Option<String>,
    pub is_active: Option<bool>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl UpdateEvent {
    #[tracing::instrument(err, skip_all)]
    pub fn apply(self, conn: &mut DbConnection, event_id: EventId) -> Result<Event> {
        let query = diesel::update(events::table)
            .filter(events::id.eq(event_id))
            .set(self)
            .returning(events::all_columns);

        let event = query.get_result(conn)?;

        Ok(event)
    }
}
