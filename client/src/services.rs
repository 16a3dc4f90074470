// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::timer::BrowserTimer;
use registro_shared::config::AppConfig;
use registro_shared::timer::Timer;
use registro_shared::validation_service::FormValidationService;
use std::rc::Rc;
use std::time::Duration;

/// Application-wide services, provided as context at the root of the view tree
#[derive(Clone)]
pub struct AppServices {
	pub validation: FormValidationService,
	pub submit_delay: Duration,
}

impl AppServices {
	pub fn new(config: &AppConfig) -> Self {
		let timer: Rc<dyn Timer> = Rc::new(BrowserTimer);
		Self {
			validation: FormValidationService::new(config, timer),
			submit_delay: config.submit_delay(),
		}
	}
}
