// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

//! Success response types for REST APIv1
//!
//! These all implement the [`Responder`] trait.
//! Every body is wrapped in the common envelope carrying the `success` flag, an optional
//! human readable `message` and, for listings, the `pagination` object.

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder};
use serde::Serialize;
use std::borrow::Cow;

/// Page based pagination state of a listing
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Pagination {
    current_page: i64,
    last_page: i64,
    per_page: i64,
    total: i64,
}

impl Pagination {
    pub fn new(per_page: i64, page: i64, total: i64) -> Self {
        let last_page = {
            let quotient = total / per_page;
            let remainder = total % per_page;
            if remainder > 0 {
                quotient + 1
            } else {
                quotient
            }
        };

        Self {
            current_page: page,
            // An empty listing still has one (empty) page
            last_page: last_page.max(1),
            per_page,
            total,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiResponse<T: Serialize> {
    status: StatusCode,
    message: Option<Cow<'static, str>>,
    pagination: Option<Pagination>,
    data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a new 200 OK [`ApiResponse`]
    pub fn new(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            message: None,
            pagination: None,
            data,
        }
    }

    /// Creates a new 201 Created [`ApiResponse`]
    pub fn created(data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            message: None,
            pagination: None,
            data,
        }
    }

    /// Attach a human readable message to the envelope
    pub fn with_message<M>(mut self, message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        self.message = Some(message.into());

        self
    }

    /// Transforms [`ApiResponse`] to also return the page based pagination state
    pub fn with_page_pagination(mut self, per_page: i64, page: i64, total: i64) -> Self {
        self.pagination = Some(Pagination::new(per_page, page, total));

        self
    }
}

/// The serialized representation of an [`ApiResponse`]
#[derive(Serialize)]
struct Envelope<'a, T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    data: &'a T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pagination: Option<Pagination>,
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &actix_web::HttpRequest) -> HttpResponse {
        let envelope = Envelope {
            success: true,
            message: self.message.as_deref(),
            data: &self.data,
            pagination: self.pagination,
        };

        match serde_json::to_string(&envelope) {
            Ok(body) => {
                let mut response = HttpResponse::build(self.status);
                response.content_type(mime::APPLICATION_JSON);

                response.body(body)
            }
            Err(err) => {
                HttpResponse::from_error(actix_web::error::JsonPayloadError::Serialize(err))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::body;
    use actix_web::test::TestRequest;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn pagination_rounds_up_partial_pages() {
        let pagination = Pagination::new(20, 2, 41);

        assert_eq!(pagination.current_page, 2);
        assert_eq!(pagination.last_page, 3);
        assert_eq!(pagination.per_page, 20);
        assert_eq!(pagination.total, 41);
    }

    #[test]
    fn pagination_of_empty_listing_has_one_page() {
        let pagination = Pagination::new(20, 1, 0);

        assert_eq!(pagination.last_page, 1);
    }

    #[actix_rt::test]
    async fn envelope_with_pagination() {
        let response = ApiResponse::new(vec!["a", "b"]).with_page_pagination(20, 1, 2);

        let http_response = response.respond_to(&TestRequest::default().to_http_request());
        assert_eq!(http_response.status(), StatusCode::OK);

        let bytes = body::to_bytes(http_response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(
            body,
            json!({
                "success": true,
                "data": ["a", "b"],
                "pagination": {
                    "current_page": 1,
                    "last_page": 1,
                    "per_page": 20,
                    "total": 2
                }
            })
        );
    }

    #[actix_rt::test]
    async fn created_envelope_carries_message() {
        let response = ApiResponse::created(7).with_message("Created the thing");

        let http_response = response.respond_to(&TestRequest::default().to_http_request());
        assert_eq!(http_response.status(), StatusCode::CREATED);

        let bytes = body::to_bytes(http_response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(
            body,
            json!({
                "success": true,
                "message": "Created the thing",
                "data": 7
            })
        );
    }
}
