// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::Display;
use sycamore::prelude::*;

/// Renders a page-level error in place of the application
pub fn error_message_view<G: Html, T: Display>(ctx: Scope<'_>, message: String, error: Option<T>) -> View<G> {
	let error_display = error.map(|error| error.to_string());

	view! {
		ctx,
		div(id="app_error") {
			(message)
			(
				if let Some(details) = error_display.clone() {
					view! {
						ctx,
						br {}
						(details)
					}
				} else {
					view! { ctx, }
				}
			)
		}
	}
}
