// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

//! Response header middleware
//!
//! Mirrors the request id assigned by the tracing middleware into the
//! response and stamps every response with the `Content-Language` the
//! bilingual endpoints rendered, so guests and caches can tell the English
//! and Bengali variants apart.
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{self, HeaderName, HeaderValue};
use actix_web::{Error, HttpMessage};
use db_storage::localized::Language;
use std::future::{ready, Future, Ready};
use std::pin::Pin;
use tracing_actix_web::RequestId;

#[derive(Clone)]
pub struct Headers;

impl<S, B> Transform<S, ServiceRequest> for Headers
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = HeadersMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(HeadersMiddleware { service }))
    }
}

pub struct HeadersMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for HeadersMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<ServiceResponse<B>, Error>>>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let request_id = req.extensions().get::<RequestId>().cloned();
        let language = Language::from_accept_language(
            req.headers()
                .get(header::ACCEPT_LANGUAGE)
                .and_then(|value| value.to_str().ok()),
        );
        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;
            if let Some(request_id) = request_id {
                if !res.headers().contains_key("x-request-id") {
                    res.headers_mut().insert(
                        HeaderName::from_static("x-request-id"),
                        HeaderValue::from_str(&request_id.to_string())?,
                    );
                }
            }
            if !res.headers().contains_key(header::CONTENT_LANGUAGE) {
                res.headers_mut().insert(
                    header::CONTENT_LANGUAGE,
                    HeaderValue::from_static(language.short_code()),
                );
            }
            Ok(res)
        })
    }
}
