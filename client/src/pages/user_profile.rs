// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::comments::CommentsView;
use crate::components::games_list::GamesListView;
use crate::page_utils::show_notice;
use registro_shared::games::FavoriteSelected;
use registro_shared::profile::UserProfile;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn UserProfileView<G: Html>(ctx: Scope<'_>) -> View<G> {
	let profile_signal = create_signal(ctx, UserProfile::default());
	let favorite_signal: RcSignal<Option<FavoriteSelected>> = create_rc_signal(None);

	// The games list only reports picks; recording them is up to the profile.
	create_effect(ctx, {
		let favorite_signal = favorite_signal.clone();
		move || {
			if let Some(selected) = (*favorite_signal.get()).clone() {
				profile_signal.modify().record_favorite(selected);
			}
		}
	});

	let profile = profile_signal.get_untracked();
	let username = String::from(profile.username());
	let heading = format!("Perfil de {}", username);
	let session_status = if profile.is_logged_in() {
		"Sesión iniciada"
	} else {
		"Sesión no iniciada"
	};
	let favorite_game_signal = create_memo(ctx, move || profile_signal.get().favorite_game().to_owned());

	let greet_handler = move |_event: WebEvent| show_notice(&profile_signal.get_untracked().greet());

	view! {
		ctx,
		h1 { (heading) }
		p(class="session_status") { (session_status) }
		(
			if favorite_game_signal.get().is_empty() {
				view! {
					ctx,
					p(class="favorite_game") { "Todavía no has elegido un juego favorito." }
				}
			} else {
				view! {
					ctx,
					p(class="favorite_game") { "Tu juego favorito: " (*favorite_game_signal.get()) }
				}
			}
		)
		button(type="button", on:click=greet_handler) { "Saludar" }
		GamesListView(username=username, favorite_signal=favorite_signal)
		CommentsView
	}
}
