// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use registro_shared::registration::RegisteredUsers;
use sycamore::prelude::*;

mod app;
mod components;
mod config;
mod page_utils;
mod pages;
mod services;
mod timer;
use app::App;
use pages::error::error_message_view;
use services::AppServices;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	let config = match config::load_config() {
		Ok(config) => config,
		Err(error) => {
			log::error!("Failed to load configuration: {:?}", error);
			sycamore::render(|ctx| {
				error_message_view(
					ctx,
					String::from("Unable to load/operate: The application configuration is invalid"),
					Some(error),
				)
			});
			return;
		}
	};

	let services = AppServices::new(&config);
	sycamore::render(|ctx| {
		provide_context(ctx, services);
		provide_context(ctx, create_rc_signal(RegisteredUsers::default()));

		view! { ctx, App }
	});
}
