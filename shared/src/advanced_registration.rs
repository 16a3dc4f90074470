// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::forms::{CheckOutcome, FormControl, FormField, FormGroup, PendingCheck};
use crate::notice::Notice;
use crate::timer::Timer;
use crate::validation::{FieldValue, Validator};
use crate::validation_service::FormValidationService;
use futures::future::{Abortable, LocalBoxFuture};
use serde::Serialize;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const PASSWORD_MIN_LENGTH: usize = 8;

const SUBMISSION_SLOT: &str = "submission";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AdvancedField {
	Username,
	Email,
	Password,
	Terms,
}

impl FormField for AdvancedField {
	const ALL: &'static [Self] = &[Self::Username, Self::Email, Self::Password, Self::Terms];

	fn name(self) -> &'static str {
		match self {
			Self::Username => "username",
			Self::Email => "email",
			Self::Password => "password",
			Self::Terms => "terminos",
		}
	}
}

/// What the advanced form submits
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AdvancedRegistration {
	pub username: String,
	pub email: String,
	#[serde(skip_serializing)]
	pub password: String,
	pub terms_accepted: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct SubmissionTicket(u64);

/// A simulated submission in flight
pub struct PendingSubmission {
	ticket: SubmissionTicket,
	registration: AdvancedRegistration,
	delay: Abortable<LocalBoxFuture<'static, ()>>,
}

impl PendingSubmission {
	pub fn registration(&self) -> &AdvancedRegistration {
		&self.registration
	}

	/// Waits out the submission delay. Resolves to nothing if the form was discarded first.
	pub async fn wait(self) -> Option<SubmissionComplete> {
		let Self {
			ticket,
			registration,
			delay,
		} = self;
		delay.await.ok()?;
		Some(SubmissionComplete { ticket, registration })
	}
}

impl fmt::Debug for PendingSubmission {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PendingSubmission")
			.field("ticket", &self.ticket)
			.field("registration", &self.registration)
			.finish_non_exhaustive()
	}
}

/// A submission whose delay has elapsed, to be handed back to the form
#[derive(Debug)]
pub struct SubmissionComplete {
	ticket: SubmissionTicket,
	registration: AdvancedRegistration,
}

#[derive(Clone)]
pub struct AdvancedRegistrationForm {
	form: FormGroup<AdvancedField>,
	timer: Rc<dyn Timer>,
	submit_delay: Duration,
	submitting: Option<SubmissionTicket>,
	next_submission: u64,
}

impl AdvancedRegistrationForm {
	pub fn new(validation: &FormValidationService, submit_delay: Duration) -> Self {
		let form = FormGroup::new(vec![
			(
				AdvancedField::Username,
				FormControl::text(vec![Validator::Required, Validator::MinLength(USERNAME_MIN_LENGTH)])
					.with_async_validator(validation.username_availability_validator()),
			),
			(
				AdvancedField::Email,
				FormControl::text(vec![Validator::Required, Validator::Email])
					.with_async_validator(validation.email_uniqueness_validator()),
			),
			(
				AdvancedField::Password,
				FormControl::text(vec![Validator::Required, Validator::MinLength(PASSWORD_MIN_LENGTH)]),
			),
			(AdvancedField::Terms, FormControl::checkbox(vec![Validator::RequiredTrue])),
		]);
		Self {
			form,
			timer: validation.timer(),
			submit_delay,
			submitting: None,
			next_submission: 0,
		}
	}

	/// Sets a field's value. Returns the async check the caller must drive to completion, if one started.
	pub fn set_value(&mut self, field: AdvancedField, value: FieldValue) -> Option<PendingCheck<AdvancedField>> {
		self.form.set_value(field, value)
	}

	pub fn set_text(&mut self, field: AdvancedField, value: impl Into<String>) -> Option<PendingCheck<AdvancedField>> {
		self.set_value(field, FieldValue::Text(value.into()))
	}

	pub fn set_terms_accepted(&mut self, accepted: bool) {
		// The terms checkbox has no async check.
		let _ = self.set_value(AdvancedField::Terms, FieldValue::Flag(accepted));
	}

	pub fn apply_check(&mut self, outcome: CheckOutcome<AdvancedField>) -> bool {
		self.form.apply_check(outcome)
	}

	pub fn mark_touched(&mut self, field: AdvancedField) {
		self.form.mark_touched(field);
	}

	pub fn text(&self, field: AdvancedField) -> &str {
		self.form.text(field)
	}

	pub fn terms_accepted(&self) -> bool {
		self.form.flag(AdvancedField::Terms)
	}

	pub fn is_field_invalid(&self, field: AdvancedField) -> bool {
		self.form.is_field_invalid(field)
	}

	/// Looks the field up by name; unknown names are never invalid
	pub fn is_field_invalid_by_name(&self, name: &str) -> bool {
		AdvancedField::from_name(name).is_some_and(|field| self.is_field_invalid(field))
	}

	pub fn is_field_pending(&self, field: AdvancedField) -> bool {
		self.form.is_field_pending(field)
	}

	/// Looks the field up by name; unknown names are never pending
	pub fn is_field_pending_by_name(&self, name: &str) -> bool {
		AdvancedField::from_name(name).is_some_and(|field| self.is_field_pending(field))
	}

	pub fn error_message(&self, field: AdvancedField) -> Option<String> {
		self.form.error_message(field)
	}

	pub fn is_submitting(&self) -> bool {
		self.submitting.is_some()
	}

	/// Every rule passed, every check has come back favorable, and nothing is being submitted
	pub fn can_submit(&self) -> bool {
		self.form.is_valid() && !self.form.is_pending() && !self.is_submitting()
	}

	/// Starts the simulated submission, or does nothing at all if the form cannot be submitted right now
	pub fn submit(&mut self) -> Option<PendingSubmission> {
		if !self.can_submit() {
			return None;
		}

		let ticket = SubmissionTicket(self.next_submission);
		self.next_submission += 1;
		self.submitting = Some(ticket);

		let registration = AdvancedRegistration {
			username: self.text(AdvancedField::Username).to_owned(),
			email: self.text(AdvancedField::Email).to_owned(),
			password: self.text(AdvancedField::Password).to_owned(),
			terms_accepted: self.terms_accepted(),
		};
		let delay = self
			.form
			.tasks()
			.guard(SUBMISSION_SLOT, self.timer.sleep(self.submit_delay));
		Some(PendingSubmission {
			ticket,
			registration,
			delay,
		})
	}

	/// Ends the submission that `completed` belongs to and returns the success notice.
	///
	/// Returns nothing when that submission is no longer the one in flight.
	pub fn finish_submission(&mut self, completed: SubmissionComplete) -> Option<Notice> {
		if self.submitting != Some(completed.ticket) {
			log::warn!("Ignoring completion of a submission that is no longer in flight");
			return None;
		}
		self.submitting = None;
		self.form.tasks().release(SUBMISSION_SLOT);

		match serde_json::to_string(&completed.registration) {
			Ok(registration_json) => log::info!("Registration completed: {}", registration_json),
			Err(error) => log::warn!("Failed to serialize completed registration for logging: {}", error),
		}
		Some(Notice::new("¡Registro completado exitosamente!"))
	}
}
