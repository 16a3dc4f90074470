// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod advanced_registration;
pub mod error;
pub mod invoice;
pub mod products;
pub mod redirect;
pub mod registration;
pub mod user_profile;
