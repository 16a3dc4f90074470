// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod advanced_registration;
pub mod cancel;
pub mod comments;
pub mod config;
pub mod forms;
pub mod games;
pub mod notice;
pub mod profile;
pub mod registration;
pub mod routes;
pub mod timer;
pub mod validation;
pub mod validation_service;

#[cfg(test)]
pub(crate) mod testing;
