// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

//! Request language negotiation
use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest};
use db_storage::localized::Language;
use std::convert::Infallible;
use std::future::{ready, Ready};

/// The content language requested by a guest
///
/// Extracted from the `Accept-Language` header. The exact tag `bn` selects
/// Bengali, everything else (including an absent header) selects English.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLanguage(pub Language);

impl FromRequest for RequestLanguage {
    type Error = Infallible;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let accept_language = req
            .headers()
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok());

        ready(Ok(Self(Language::from_accept_language(accept_language))))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::test::TestRequest;
    use pretty_assertions::assert_eq;

    #[actix_rt::test]
    async fn bengali_is_selected_on_exact_match() {
        let req = TestRequest::default()
            .insert_header((header::ACCEPT_LANGUAGE, "bn"))
            .to_http_request();

        let RequestLanguage(language) = RequestLanguage::extract(&req).await.unwrap();

        assert_eq!(language, Language::Bengali);
    }

    #[actix_rt::test]
    async fn other_tags_select_english() {
        for header_value in ["en", "bn-BD", "de-DE,de;q=0.9", "*"] {
            let req = TestRequest::default()
                .insert_header((header::ACCEPT_LANGUAGE, header_value))
                .to_http_request();

            let RequestLanguage(language) = RequestLanguage::extract(&req).await.unwrap();

            assert_eq!(language, Language::English);
        }
    }

    #[actix_rt::test]
    async fn missing_header_selects_english() {
        let req = TestRequest::default().to_http_request();

        let RequestLanguage(language) = RequestLanguage::extract(&req).await.unwrap();

        assert_eq!(language, Language::English);
    }
}
