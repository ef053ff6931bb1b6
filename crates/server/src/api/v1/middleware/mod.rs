// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

//! Actix middleware implementations
pub mod headers;
pub mod token_auth;
