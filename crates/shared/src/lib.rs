// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

//! Shared settings types for the biyebari wedding API.
//! Split into its own crate so the database crate can consume the
//! `[database]` section without depending on the server.

pub mod settings;
