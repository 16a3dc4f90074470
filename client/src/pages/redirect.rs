// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::page_utils::current_path;
use registro_shared::routes::{Route, RouteResolution};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate;

/// Sends the root and any unknown location on to the page it resolves to
#[component]
pub fn RedirectView<G: Html>(ctx: Scope) -> View<G> {
	let path = current_path();
	let target = match Route::resolve(&path) {
		RouteResolution::RedirectTo(route) => route,
		RouteResolution::Render(route) => {
			log::warn!("Router fell through for declared path {}", path);
			route
		}
	};
	log::debug!("Redirecting from {} to {}", path, target.path());

	spawn_local_scoped(ctx, async move {
		navigate(target.path());
	});

	view! { ctx, }
}
