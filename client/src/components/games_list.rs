// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use registro_shared::games::{FavoriteSelected, GamesList};
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Prop)]
pub struct GamesListProps {
	username: String,
	/// Receives the game picked by the user; the owner decides what to do with it
	favorite_signal: RcSignal<Option<FavoriteSelected>>,
}

#[component]
pub fn GamesListView<G: Html>(ctx: Scope<'_>, props: GamesListProps) -> View<G> {
	let games_list = create_ref(ctx, GamesList::new(props.username));
	let favorite_signal = create_ref(ctx, props.favorite_signal);
	let heading = format!("Juegos de {}", games_list.username());

	let game_views = View::new_fragment(
		games_list
			.games()
			.iter()
			.map(|game| {
				let game_name = game.name.clone();
				let link_text = game.name.clone();
				view! {
					ctx,
					li {
						a(
							class="click",
							on:click=move |_event: WebEvent| {
								favorite_signal.set(Some(games_list.select_favorite(&game_name)));
							}
						) {
							(link_text)
						}
					}
				}
			})
			.collect(),
	);

	view! {
		ctx,
		div(class="games_list") {
			h2 { (heading) }
			ul { (game_views) }
		}
	}
}
