// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

/// A plain-text message the user must acknowledge before continuing
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notice(String);

impl Notice {
	pub fn new(message: impl Into<String>) -> Self {
		Self(message.into())
	}

	pub fn message(&self) -> &str {
		let Self(message) = self;
		message
	}
}

impl fmt::Display for Notice {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.message())
	}
}
