// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

//! Accommodation directory endpoints
use super::response::{ApiResponse, DefaultApiResult};
use actix_web::get;
use actix_web::web::{Data, Path, Query};
use chrono::{DateTime, Utc};
use database::Db;
use db_storage::accommodations::{Accommodation, AccommodationId};
use db_storage::utils::Jsonb;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AccommodationsQuery {
    /// Restrict the listing to well rated entries
    #[serde(default)]
    pub recommended_only: bool,
}

#[derive(Debug, Serialize)]
pub struct AccommodationResource {
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
}

impl AccommodationResource {
    fn from_db(accommodation: Accommodation) -> Self {
        Self {
            id: accommodation.id,
            name: accommodation.name,
            description: accommodation.description,
            contact_info: accommodation.contact_info,
            booking_url: accommodation.booking_url,
            price_range_min: accommodation.price_range_min,
            price_range_max: accommodation.price_range_max,
            rating: accommodation.rating,
            amenities: accommodation.amenities,
            created_at: accommodation.created_at,
        }
    }
}

/// API Endpoint *GET /accommodations*
///
/// Lists accommodations, best rated first. With `recommended_only=true` only
/// well rated entries are returned.
#[get("/accommodations")]
pub async fn get_accommodations(
    db: Data<Db>,
    query: Query<AccommodationsQuery>,
) -> DefaultApiResult<Vec<AccommodationResource>> {
    let recommended_only = query.into_inner().recommended_only;

    let accommodations = crate::block(move || {
        let mut conn = db.get_conn()?;

        Accommodation::get_all(&mut conn, recommended_only)
    })
    .await??;

    let accommodations = accommodations
        .into_iter()
        .map(AccommodationResource::from_db)
        .collect();

    Ok(ApiResponse::new(accommodations))
}

/// API Endpoint *GET /accommodations/{accommodation_id}*
#[get("/accommodations/{accommodation_id}")]
pub async fn get_accommodation(
    db: Data<Db>,
    accommodation_id: Path<AccommodationId>,
) -> DefaultApiResult<AccommodationResource> {
    let accommodation = crate::block(move || {
        let mut conn = db.get_conn()?;

        Accommodation::get(&mut conn, accommodation_id.into_inner())
    })
    .await??;

    Ok(ApiResponse::new(AccommodationResource::from_db(
        accommodation,
    )))
}
