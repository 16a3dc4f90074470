// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::games::FavoriteSelected;
use crate::notice::Notice;

pub const DEFAULT_PROFILE_USERNAME: &str = "alejandro";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserProfile {
	username: String,
	is_logged_in: bool,
	favorite_game: String,
}

impl Default for UserProfile {
	fn default() -> Self {
		Self {
			username: String::from(DEFAULT_PROFILE_USERNAME),
			is_logged_in: false,
			favorite_game: String::new(),
		}
	}
}

impl UserProfile {
	pub fn username(&self) -> &str {
		&self.username
	}

	pub fn is_logged_in(&self) -> bool {
		self.is_logged_in
	}

	/// Empty until a game has been picked
	pub fn favorite_game(&self) -> &str {
		&self.favorite_game
	}

	/// Replaces the favorite with the newly selected game
	pub fn record_favorite(&mut self, selected: FavoriteSelected) {
		log::debug!("Saving favorite game {}", selected.0);
		let FavoriteSelected(name) = selected;
		self.favorite_game = name;
	}

	pub fn greet(&self) -> Notice {
		Notice::new("Esto es una alerta ")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::games::GamesList;

	#[test]
	fn selecting_a_game_overwrites_the_favorite() {
		let games = GamesList::default();
		let mut profile = UserProfile::default();
		assert_eq!(profile.favorite_game(), "");

		profile.record_favorite(games.select_favorite("Elden ring"));
		profile.record_favorite(games.select_favorite("GTA 5"));
		assert_eq!(profile.favorite_game(), "GTA 5");
	}

	#[test]
	fn greeting_leaves_the_profile_alone() {
		let profile = UserProfile::default();
		let before = profile.clone();
		assert_eq!(profile.greet(), Notice::new("Esto es una alerta "));
		assert_eq!(profile, before);
		assert_eq!(profile.username(), DEFAULT_PROFILE_USERNAME);
		assert!(!profile.is_logged_in());
	}
}
