// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

//! Request extractor types shared by the endpoint modules

mod language;
mod pagination;

pub use language::RequestLanguage;
pub use pagination::PagePaginationQuery;
