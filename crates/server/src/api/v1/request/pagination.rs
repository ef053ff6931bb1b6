// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

//! Pagination Query types
use serde::Deserialize;

/// Page-based pagination query
#[derive(Debug, Deserialize)]
pub struct PagePaginationQuery {
    #[serde(
        default = "default_pagination_per_page",
        deserialize_with = "deserialize_pagination_per_page"
    )]
    pub per_page: i64,
    #[serde(
        default = "default_pagination_page",
        deserialize_with = "deserialize_pagination_page"
    )]
    pub page: i64,
}

fn default_pagination_per_page() -> i64 {
    20
}

/// Enforce the per_page setting to be within 1..=100
fn deserialize_pagination_per_page<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let per_page = i64::deserialize(deserializer)?;
    if (1..=100).contains(&per_page) {
        Ok(per_page)
    } else {
        Err(serde::de::Error::custom("per_page must be between 1 and 100"))
    }
}

fn default_pagination_page() -> i64 {
    1
}

/// Enforce the page setting to be at least 1
fn deserialize_pagination_page<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let page = i64::deserialize(deserializer)?;
    if page >= 1 {
        Ok(page)
    } else {
        Err(serde::de::Error::custom("page must be at least 1"))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::web::Query;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_apply_when_query_is_empty() {
        let Query(query) = Query::<PagePaginationQuery>::from_query("").unwrap();

        assert_eq!(query.per_page, 20);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn explicit_values_are_taken() {
        let Query(query) = Query::<PagePaginationQuery>::from_query("per_page=50&page=3").unwrap();

        assert_eq!(query.per_page, 50);
        assert_eq!(query.page, 3);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(Query::<PagePaginationQuery>::from_query("per_page=101").is_err());
        assert!(Query::<PagePaginationQuery>::from_query("per_page=0").is_err());
        assert!(Query::<PagePaginationQuery>::from_query("page=0").is_err());
    }
}
