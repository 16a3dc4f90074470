// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::AppConfig;
use crate::forms::{AsyncValidator, TakenPredicate};
use crate::timer::Timer;
use crate::validation::ValidationError;
use std::rc::Rc;
use std::time::Duration;

/// Hands out the async availability checks for registration fields.
///
/// Nothing is contacted: each check waits out the configured delay, then asks a predicate whether the value is
/// taken. By default the only taken values are the ones listed in the configuration, which is usually none.
#[derive(Clone)]
pub struct FormValidationService {
	timer: Rc<dyn Timer>,
	delay: Duration,
	username_taken: TakenPredicate,
	email_taken: TakenPredicate,
}

impl FormValidationService {
	pub fn new(config: &AppConfig, timer: Rc<dyn Timer>) -> Self {
		let taken_usernames = config.taken_usernames().to_vec();
		let taken_emails = config.taken_emails().to_vec();
		Self {
			timer,
			delay: config.check_delay(),
			username_taken: Rc::new(move |username: &str| taken_usernames.iter().any(|taken| taken == username)),
			email_taken: Rc::new(move |email: &str| taken_emails.iter().any(|taken| taken.eq_ignore_ascii_case(email))),
		}
	}

	pub fn with_username_policy(mut self, is_taken: impl Fn(&str) -> bool + 'static) -> Self {
		self.username_taken = Rc::new(is_taken);
		self
	}

	pub fn with_email_policy(mut self, is_taken: impl Fn(&str) -> bool + 'static) -> Self {
		self.email_taken = Rc::new(is_taken);
		self
	}

	pub fn timer(&self) -> Rc<dyn Timer> {
		Rc::clone(&self.timer)
	}

	pub fn username_availability_validator(&self) -> AsyncValidator {
		AsyncValidator::new(
			ValidationError::UsernameTaken,
			self.delay,
			self.timer(),
			Rc::clone(&self.username_taken),
		)
	}

	pub fn email_uniqueness_validator(&self) -> AsyncValidator {
		AsyncValidator::new(
			ValidationError::EmailTaken,
			self.delay,
			self.timer(),
			Rc::clone(&self.email_taken),
		)
	}
}
