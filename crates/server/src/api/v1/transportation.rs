// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

//! Shuttle transportation endpoints
use super::response::{ApiResponse, DefaultApiResult};
use actix_web::get;
use actix_web::web::{Data, Path, Query};
use chrono::{DateTime, Utc};
use database::Db;
use db_storage::transportation::{Transportation, TransportationId};
use db_storage::utils::Jsonb;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct TransportationQuery {
    /// Case-insensitive substring filter on the route name
    pub route: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TransportationResource {
    pub id: TransportationId,
    pub route_name: String,
    pub pickup_locations: Jsonb<Vec<String>>,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub driver_contact: String,
    pub capacity: i32,
}

impl TransportationResource {
    fn from_db(route: Transportation) -> Self {
        Self {
            id: route.id,
            route_name: route.route_name,
            pickup_locations: route.pickup_locations,
            departure_time: route.departure_time,
            arrival_time: route.arrival_time,
            driver_contact: route.driver_contact,
            capacity: route.capacity,
        }
    }
}

/// API Endpoint *GET /transportation*
///
/// Lists shuttle routes in departure order, optionally narrowed by a route
/// name filter.
#[get("/transportation")]
pub async fn get_routes(
    db: Data<Db>,
    query: Query<TransportationQuery>,
) -> DefaultApiResult<Vec<TransportationResource>> {
    let TransportationQuery { route } = query.into_inner();

    let routes = crate::block(move || {
        let mut conn = db.get_conn()?;

        Transportation::get_all(&mut conn, route.as_deref())
    })
    .await??;

    let routes = routes
        .into_iter()
        .map(TransportationResource::from_db)
        .collect();

    Ok(ApiResponse::new(routes))
}

/// API Endpoint *GET /transportation/{route_id}*
#[get("/transportation/{route_id}")]
pub async fn get_route(
    db: Data<Db>,
    route_id: Path<TransportationId>,
) -> DefaultApiResult<TransportationResource> {
    let route = crate::block(move || {
        let mut conn = db.get_conn()?;

        Transportation::get(&mut conn, route_id.into_inner())
    })
    .await??;

    Ok(ApiResponse::new(TransportationResource::from_db(route)))
}
