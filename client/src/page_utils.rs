// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use registro_shared::notice::Notice;
use web_sys::window;

pub fn set_page_title(new_title: &str) {
	if let Some(window) = window() {
		if let Some(document) = window.document() {
			document.set_title(new_title);
		}
	}
}

/// The path part of the current location, or an empty string if it can't be read
pub fn current_path() -> String {
	window()
		.and_then(|window| window.location().pathname().ok())
		.unwrap_or_default()
}

/// Shows a notice in a blocking browser alert
pub fn show_notice(notice: &Notice) {
	let Some(window) = window() else {
		log::warn!("No window available to show notice: {}", notice);
		return;
	};
	if let Err(error) = window.alert_with_message(notice.message()) {
		log::error!("Failed to show notice \"{}\": {:?}", notice, error);
	}
}
