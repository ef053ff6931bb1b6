// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

use crate::localized::Localized;
use crate::schema::content;
use chrono::{DateTime, Utc};
use database::{DbConnection, Result};
use diesel::prelude::*;

diesel_newtype! {
    #[derive(Copy)]
    ContentId(i64) => diesel::sql_types::BigInt
}

/// A unit of localizable static site content, addressed by (section, key)
///
/// Rows are seeded administratively, the API never mutates them.
#[derive(Debug, Clone, Queryable, Identifiable)]
#[diesel(table_name = content)]
pub struct Content {
    pub id: ContentId,
    pub section: String,
    pub key: String,
    pub content_en: String,
    pub content_bn: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Content {
    pub fn text(&self) -> Localized<'_> {
        Localized::new(&self.content_en, &self.content_bn)
    }

    /// Returns all rows of a section in insertion order
    #[tracing::instrument(err, skip_all)]
    pub fn get_section(conn: &mut DbConnection, section: &str) -> Result<Vec<Content>> {
        let query = content::table
            .filter(content::section.eq(section))
            .order(content::id.asc());

        let rows = query.load(conn)?;

        Ok(rows)
    }

    #[tracing::instrument(err, skip_all)]
    pub fn get_by_section_and_key(
        conn: &mut DbConnection,
        section: &str,
        key: &str,
    ) -> Result<Content> {
        let query = content::table.filter(
            content::section
                .eq(section)
                .and(content::key.eq(key)),
        );

        let row = query.get_result(conn)?;

        Ok(row)
    }

    /// Distinct section names present in storage
    #[tracing::instrument(err, skip_all)]
    pub fn get_sections(conn: &mut DbConnection) -> Result<Vec<String>> {
        let query = content::table
            .select(content::section)
            .distinct()
            .order(content::section.asc());

        let sections = query.load(conn)?;

        Ok(sections)
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = content)]
pub struct NewContent {
    pub section: String,
    pub key: String,
    pub content_en: String,
    pub content_bn: String,
}

impl NewContent {
    /// Tries to insert the row, returning `None` when the (section, key)
    /// pair is already present
    #[tracing::instrument(err, skip_all)]
    pub fn try_insert(self, conn: &mut DbConnection) -> Result<Option<Content>> {
        let query = self.insert_into(content::table);

        let result = query.get_result(conn);

        match result {
            Ok(row) => Ok(Some(row)),
            Err(diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                ..,
            )) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
