// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub const DEFAULT_GAMES_USERNAME: &str = "AlejajandroUsuario";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameListItem {
	pub id: u32,
	pub name: String,
}

/// Sent from the games list to whoever shows it when a game is picked
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FavoriteSelected(pub String);

#[derive(Clone, Debug)]
pub struct GamesList {
	username: String,
	games: Vec<GameListItem>,
}

impl Default for GamesList {
	fn default() -> Self {
		Self::new(String::from(DEFAULT_GAMES_USERNAME))
	}
}

impl GamesList {
	pub fn new(username: String) -> Self {
		let games = [(1, "GTA 5"), (2, "The witcher"), (3, "Elden ring")]
			.into_iter()
			.map(|(id, name)| GameListItem {
				id,
				name: String::from(name),
			})
			.collect();
		Self { username, games }
	}

	pub fn username(&self) -> &str {
		&self.username
	}

	pub fn games(&self) -> &[GameListItem] {
		&self.games
	}

	/// Produces the notification for the owner. The name is passed along as given, listed or not.
	pub fn select_favorite(&self, name: &str) -> FavoriteSelected {
		log::debug!("Game clicked: {}", name);
		FavoriteSelected(String::from(name))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn holds_three_games_in_order() {
		let list = GamesList::default();
		let names: Vec<(u32, &str)> = list.games().iter().map(|game| (game.id, game.name.as_str())).collect();
		assert_eq!(names, [(1, "GTA 5"), (2, "The witcher"), (3, "Elden ring")]);
		assert_eq!(list.username(), DEFAULT_GAMES_USERNAME);
	}

	#[test]
	fn selection_passes_the_name_through_unchecked() {
		let list = GamesList::new(String::from("alejandro"));
		assert_eq!(list.select_favorite("GTA 5"), FavoriteSelected(String::from("GTA 5")));
		assert_eq!(list.select_favorite("Tetris"), FavoriteSelected(String::from("Tetris")));
		assert_eq!(list.games().len(), 3);
	}
}
