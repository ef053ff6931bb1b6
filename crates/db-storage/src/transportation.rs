// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

use crate::schema::transportation;
use crate::utils::Jsonb;
use chrono::{DateTime, Utc};
use database::{DbConnection, Result};
use diesel::prelude::*;

diesel_newtype! {
    #[derive(Copy)]
    TransportationId(i64) => diesel::sql_types::BigInt
}

/// A shuttle route between pickup points and the venues
#[derive(Debug, Clone, Queryable, Identifiable)]
#[diesel(table_name = transportation)]
pub struct Transportation {
    pub id: TransportationId,
    pub route_name: String,
    pub pickup_locations: Jsonb<Vec<String>>,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub driver_contact: String,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transportation {
    #[tracing::instrument(err, skip_all)]
    pub fn get(conn: &mut DbConnection, id: TransportationId) -> Result<Transportation> {
        let transportation = transportation::table
            .filter(transportation::id.eq(id))
            .get_result(conn)?;

        Ok(transportation)
    }

    /// Returns routes in departure order, optionally narrowed by a
    /// case-insensitive route name match
    #[tracing::instrument(err, skip_all)]
    pub fn get_all(conn: &mut DbConnection, route: Option<&str>) -> Result<Vec<Transportation>> {
        let mut query = transportation::table.into_boxed();

        if let Some(route) = route {
            query = query.filter(transportation::route_name.ilike(format!("%{route}%")));
        }

        let routes = query
            .order(transportation::departure_time.asc())
            .load(conn)?;

        Ok(routes)
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = transportation)]
pub struct NewTransportation {
    pub route_name: String,
    pub pickup_locations: Jsonb<Vec<String>>,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub driver_contact: String,
    pub capacity: i32,
}

impl NewTransportation {
    #[tracing::instrument(err, skip_all)]
    pub fn insert(self, conn: &mut DbConnection) -> Result<Transportation> {
        let query = self.insert_into(transportation::table);
        let transportation = query.get_result(conn)?;

        Ok(transportation)
    }
}
