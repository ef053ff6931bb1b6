// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

//! Localized site content endpoints
use super::request::RequestLanguage;
use super::response::{ApiError, ApiResponse, DefaultApiResult};
use actix_web::get;
use actix_web::web::{Data, Path};
use database::{DatabaseError, Db};
use db_storage::content::Content;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Sections a guest may request content for
///
/// Anything outside this list is rejected before touching storage.
pub const ALLOWED_SECTIONS: [&str; 9] = [
    "home",
    "about",
    "events",
    "accommodations",
    "transportation",
    "gallery",
    "contact",
    "faq",
    "travel-guide",
];

/// A section's key to text mapping
///
/// Serializes as a JSON object whose keys appear in the order the rows were
/// created, which is the order the original authors laid the section out in.
#[derive(Debug)]
pub struct SectionMapping(Vec<(String, String)>);

impl Serialize for SectionMapping {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;

        for (key, text) in &self.0 {
            map.serialize_entry(key, text)?;
        }

        map.end()
    }
}

#[derive(Debug, Serialize)]
pub struct SectionContent {
    section: String,
    language: &'static str,
    content: SectionMapping,
}

#[derive(Debug, Serialize)]
pub struct KeyContent {
    section: String,
    key: String,
    language: &'static str,
    content: String,
}

/// API Endpoint *GET /content/{section}*
///
/// Returns all content rows of the section as a key to text mapping, resolved
/// to the requested language.
#[get("/content/{section}")]
pub async fn get_section(
    db: Data<Db>,
    language: RequestLanguage,
    section: Path<String>,
) -> DefaultApiResult<SectionContent> {
    let RequestLanguage(language) = language;
    let section = section.into_inner();

    if !ALLOWED_SECTIONS.contains(&section.as_str()) {
        return Err(ApiError::bad_request().with_message("Invalid section requested"));
    }

    let rows = {
        let section = section.clone();

        crate::block(move || {
            let mut conn = db.get_conn()?;

            Content::get_section(&mut conn, &section)
        })
        .await??
    };

    if rows.is_empty() {
        return Err(ApiError::not_found().with_message("Content not found for this section"));
    }

    let content = SectionMapping(
        rows.into_iter()
            .map(|row| {
                let text = row.text().resolve(language).to_owned();
                (row.key, text)
            })
            .collect(),
    );

    Ok(ApiResponse::new(SectionContent {
        section,
        language: language.short_code(),
        content,
    }))
}

/// API Endpoint *GET /content/{section}/{key}*
///
/// Returns a single content value resolved to the requested language.
#[get("/content/{section}/{key}")]
pub async fn get_by_key(
    db: Data<Db>,
    language: RequestLanguage,
    path: Path<(String, String)>,
) -> DefaultApiResult<KeyContent> {
    let RequestLanguage(language) = language;
    let (section, key) = path.into_inner();

    let row = {
        let section = section.clone();
        let key = key.clone();

        crate::block(move || -> Result<Content, ApiError> {
            let mut conn = db.get_conn()?;

            Content::get_by_section_and_key(&mut conn, &section, &key).map_err(|e| match e {
                DatabaseError::NotFound => {
                    ApiError::not_found().with_message("Content not found")
                }
                e => e.into(),
            })
        })
        .await??
    };

    let content = row.text().resolve(language).to_owned();

    Ok(ApiResponse::new(KeyContent {
        section,
        key,
        language: language.short_code(),
        content,
    }))
}

/// API Endpoint *GET /content-sections*
///
/// Lists the distinct sections currently present in storage.
#[get("/content-sections")]
pub async fn get_sections(db: Data<Db>) -> DefaultApiResult<Vec<String>> {
    let sections = crate::block(move || {
        let mut conn = db.get_conn()?;

        Content::get_sections(&mut conn)
    })
    .await??;

    Ok(ApiResponse::new(sections))
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn section_mapping_keeps_insertion_order() {
        let mapping = SectionMapping(vec![
            ("welcome_title".into(), "Welcome to our Wedding".into()),
            ("couple_names".into(), "Rahim & Fatema".into()),
            ("countdown_title".into(), "Days until the big day".into()),
        ]);

        let json = serde_json::to_string(&mapping).unwrap();

        assert_eq!(
            json,
            r#"{"welcome_title":"Welcome to our Wedding","couple_names":"Rahim & Fatema","countdown_title":"Days until the big day"}"#
        );
    }

    #[test]
    fn travel_guide_is_an_allowed_section() {
        assert!(ALLOWED_SECTIONS.contains(&"travel-guide"));
        assert!(!ALLOWED_SECTIONS.contains(&"admin"));
    }
}
