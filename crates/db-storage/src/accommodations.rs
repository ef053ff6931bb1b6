// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

use crate::schema::accommodations;
use crate::utils::Jsonb;
use chrono::{DateTime, Utc};
use database::{DbConnection, Result};
use diesel::prelude::*;

diesel_newtype! {
    #[derive(Copy)]
    AccommodationId(i64) => diesel::sql_types::BigInt
}

/// Rating at or above which an accommodation counts as recommended
const RECOMMENDED_MIN_RATING: i32 = 4;

/// A hotel or guest house suggested to travelling guests
///
/// Monolingual by design, hotel names are not translated.
#[derive(Debug, Clone, Queryable, Identifiable)]
#[diesel(table_name = accommodations)]
pub struct Accommodation {
    pub id: AccommodationId,
    pub name: String,
    pub description: String,
    pub contact_info: String,
    pub booking_url: Option<String>,
    pub price_range_min: Option<f64>,
    pub price_range_max: Option<f64>,
    pub rating: Option<i32>,
    pub amenities: Option<Jsonb<Vec<String>>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Accommodation {
    #[tracing::instrument(err, skip_all)]
    pub fn get(conn: &mut DbConnection, id: AccommodationId) -> Result<Accommodation> {
        let accommodation = accommodations::table
            .filter(accommodations::id.eq(id))
            .get_result(conn)?;

        Ok(accommodation)
    }

    /// Returns accommodations, best rated first, unrated last
    #[tracing::instrument(err, skip_all)]
    pub fn get_all(conn: &mut DbConnection, recommended_only: bool) -> Result<Vec<Accommodation>> {
        let mut query = accommodations::table.into_boxed();

        if recommended_only {
            query = query.filter(accommodations::rating.ge(RECOMMENDED_MIN_RATING));
        }

        let accommodations = query
            .order((
                accommodations::rating.desc().nulls_last(),
                accommodations::name.asc(),
            ))
            .load(conn)?;

        Ok(accommodations)
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = accommodations)]
pub struct NewAccommodation {
    pub name: String,
    pub description: String,
    pub contact_info: String,
    pub booking_url: Option<String>,
    pub price_range_min: Option<f64>,
    pub price_range_max: Option<f64>,
    pub rating: Option<i32>,
    pub amenities: Option<Jsonb<Vec<String>>>,
}

impl NewAccommodation {
    #[tracing::instrument(err, skip_all)]
    pub fn insert(self, conn: &mut DbConnection) -> Result<Accommodation> {
        let query = self.insert_into(accommodations::table);
        let accommodation = query.get_result(conn)?;

        Ok(accommodation)
    }
}
