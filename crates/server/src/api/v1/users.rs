// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

//! User related API structs and Endpoints
use super::response::ApiResponse;
use actix_web::get;
use actix_web::web::ReqData;
use db_storage::users::{User, UserId};
use serde::Serialize;

/// Private profile of the requesting guest
///
/// The API token never leaves the database.
#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub language_preference: String,
}

impl UserProfile {
    fn from_db(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            language_preference: user.language_preference,
        }
    }
}

/// API Endpoint *GET /users/me*
///
/// Returns the [`UserProfile`] of the requesting guest.
#[get("/users/me")]
pub async fn get_me(current_user: ReqData<User>) -> ApiResponse<UserProfile> {
    ApiResponse::new(UserProfile::from_db(current_user.into_inner()))
}
