// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::cancel::CancelScope;
use crate::timer::Timer;
use crate::validation::{run_validators, FieldValue, ValidationError, Validator};
use futures::future::{Abortable, LocalBoxFuture};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Decides whether a value is already in use
pub type TakenPredicate = Rc<dyn Fn(&str) -> bool>;

/// A check that reports its verdict on a value only after a delay has elapsed
#[derive(Clone)]
pub struct AsyncValidator {
	error: ValidationError,
	delay: Duration,
	timer: Rc<dyn Timer>,
	is_taken: TakenPredicate,
}

impl AsyncValidator {
	/// Creates a validator that fails with `error` whenever `is_taken` accepts the value
	pub fn new(error: ValidationError, delay: Duration, timer: Rc<dyn Timer>, is_taken: TakenPredicate) -> Self {
		Self {
			error,
			delay,
			timer,
			is_taken,
		}
	}

	/// Starts the delay immediately; the verdict is computed once it elapses
	pub fn check(&self, value: String) -> LocalBoxFuture<'static, Option<ValidationError>> {
		let sleep = self.timer.sleep(self.delay);
		let is_taken = Rc::clone(&self.is_taken);
		let error = self.error.clone();
		Box::pin(async move {
			sleep.await;
			is_taken(&value).then_some(error)
		})
	}
}

impl fmt::Debug for AsyncValidator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AsyncValidator")
			.field("error", &self.error)
			.field("delay", &self.delay)
			.finish_non_exhaustive()
	}
}

/// Identifies one run of a control's async check so late verdicts from older runs can be told apart
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CheckTicket(u64);

#[derive(Clone, Debug, Eq, PartialEq)]
enum CheckState {
	/// No async verdict applies: there is no async validator, or the sync rules already fail
	Idle,
	Pending(CheckTicket),
	Resolved(Option<ValidationError>),
}

/// State of a single form field
#[derive(Clone, Debug)]
pub struct FormControl {
	value: FieldValue,
	validators: Vec<Validator>,
	async_validator: Option<AsyncValidator>,
	touched: bool,
	errors: Vec<ValidationError>,
	check: CheckState,
	next_ticket: u64,
}

impl FormControl {
	fn new(value: FieldValue, validators: Vec<Validator>) -> Self {
		let errors = run_validators(&validators, &value);
		Self {
			value,
			validators,
			async_validator: None,
			touched: false,
			errors,
			check: CheckState::Idle,
			next_ticket: 0,
		}
	}

	pub fn text(validators: Vec<Validator>) -> Self {
		Self::new(FieldValue::Text(String::new()), validators)
	}

	pub fn checkbox(validators: Vec<Validator>) -> Self {
		Self::new(FieldValue::Flag(false), validators)
	}

	pub fn with_async_validator(mut self, validator: AsyncValidator) -> Self {
		self.async_validator = Some(validator);
		self
	}

	pub fn value(&self) -> &FieldValue {
		&self.value
	}

	pub fn is_touched(&self) -> bool {
		self.touched
	}

	pub fn is_pending(&self) -> bool {
		matches!(self.check, CheckState::Pending(_))
	}

	/// Passes its sync rules and, when it has an async validator, has a favorable verdict
	pub fn is_valid(&self) -> bool {
		if !self.errors.is_empty() {
			return false;
		}
		match (&self.check, &self.async_validator) {
			(CheckState::Resolved(error), _) => error.is_none(),
			(CheckState::Idle, None) => true,
			(CheckState::Idle, Some(_)) | (CheckState::Pending(_), _) => false,
		}
	}

	/// Known to fail; a control awaiting its verdict is neither valid nor invalid
	pub fn is_invalid(&self) -> bool {
		!self.is_pending() && !self.is_valid()
	}

	/// Sync failures first, then the async verdict
	pub fn errors(&self) -> Vec<ValidationError> {
		let mut errors = self.errors.clone();
		if let CheckState::Resolved(Some(error)) = &self.check {
			errors.push(error.clone());
		}
		errors
	}

	pub fn first_error(&self) -> Option<ValidationError> {
		self.errors().into_iter().next()
	}

	pub fn mark_touched(&mut self) {
		self.touched = true;
	}

	/// Replaces the value and revalidates. Returns the async check to run, if one is due.
	fn set_value(&mut self, value: FieldValue) -> Option<(CheckTicket, LocalBoxFuture<'static, Option<ValidationError>>)> {
		self.errors = run_validators(&self.validators, &value);
		self.value = value;
		self.check = CheckState::Idle;

		if !self.errors.is_empty() {
			return None;
		}
		let validator = self.async_validator.as_ref()?;
		let ticket = CheckTicket(self.next_ticket);
		self.next_ticket += 1;
		self.check = CheckState::Pending(ticket);
		Some((ticket, validator.check(self.value.as_text().to_owned())))
	}

	/// Applies an async verdict. Verdicts for anything but the current run are ignored.
	fn resolve(&mut self, ticket: CheckTicket, error: Option<ValidationError>) -> bool {
		if self.check != CheckState::Pending(ticket) {
			return false;
		}
		self.check = CheckState::Resolved(error);
		true
	}

	fn reset(&mut self) {
		self.value = self.value.cleared();
		self.touched = false;
		self.errors = run_validators(&self.validators, &self.value);
		self.check = CheckState::Idle;
	}
}

/// The fields of one form
pub trait FormField: Copy + Eq + fmt::Debug + 'static {
	const ALL: &'static [Self];

	/// The name the presentation layer refers to the field by
	fn name(self) -> &'static str;

	fn from_name(name: &str) -> Option<Self> {
		Self::ALL.iter().copied().find(|field| field.name() == name)
	}
}

/// The verdict of a finished async check, to be applied back to the form that started it
#[derive(Debug, Eq, PartialEq)]
pub struct CheckOutcome<F> {
	pub field: F,
	pub ticket: CheckTicket,
	pub error: Option<ValidationError>,
}

/// An async check started by a value change. Resolves to nothing if the form cancelled it in the meantime.
pub struct PendingCheck<F> {
	field: F,
	ticket: CheckTicket,
	future: Abortable<LocalBoxFuture<'static, Option<ValidationError>>>,
}

impl<F: FormField> PendingCheck<F> {
	pub fn field(&self) -> F {
		self.field
	}

	pub async fn run(self) -> Option<CheckOutcome<F>> {
		let Self { field, ticket, future } = self;
		let error = future.await.ok()?;
		Some(CheckOutcome { field, ticket, error })
	}
}

impl<F: fmt::Debug> fmt::Debug for PendingCheck<F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PendingCheck")
			.field("field", &self.field)
			.field("ticket", &self.ticket)
			.finish_non_exhaustive()
	}
}

/// A collection of controls keyed by field, validated together
#[derive(Clone, Debug)]
pub struct FormGroup<F: FormField> {
	controls: Vec<(F, FormControl)>,
	tasks: Rc<CancelScope>,
}

impl<F: FormField> FormGroup<F> {
	pub fn new(controls: Vec<(F, FormControl)>) -> Self {
		Self {
			controls,
			tasks: Rc::new(CancelScope::default()),
		}
	}

	pub(crate) fn tasks(&self) -> &CancelScope {
		&self.tasks
	}

	pub fn control(&self, field: F) -> Option<&FormControl> {
		self.controls
			.iter()
			.find(|(control_field, _)| *control_field == field)
			.map(|(_, control)| control)
	}

	fn control_mut(&mut self, field: F) -> Option<&mut FormControl> {
		self.controls
			.iter_mut()
			.find(|(control_field, _)| *control_field == field)
			.map(|(_, control)| control)
	}

	pub fn text(&self, field: F) -> &str {
		self.control(field).map(|control| control.value().as_text()).unwrap_or_default()
	}

	pub fn flag(&self, field: F) -> bool {
		self.control(field).is_some_and(|control| control.value().as_flag())
	}

	/// Sets a field's value, cancelling the field's outstanding check. Returns the new check, if one is due.
	pub fn set_value(&mut self, field: F, value: FieldValue) -> Option<PendingCheck<F>> {
		let started = self.control_mut(field)?.set_value(value);
		match started {
			Some((ticket, future)) => Some(PendingCheck {
				field,
				ticket,
				future: self.tasks.guard(field.name(), future),
			}),
			None => {
				self.tasks.cancel(field.name());
				None
			}
		}
	}

	pub fn mark_touched(&mut self, field: F) {
		if let Some(control) = self.control_mut(field) {
			control.mark_touched();
		}
	}

	/// Applies a finished check. Returns false when the verdict was stale and has been dropped.
	pub fn apply_check(&mut self, outcome: CheckOutcome<F>) -> bool {
		let CheckOutcome { field, ticket, error } = outcome;
		let applied = self
			.control_mut(field)
			.is_some_and(|control| control.resolve(ticket, error));
		if applied {
			self.tasks.release(field.name());
		} else {
			log::warn!("Ignoring a stale check result for field {}", field.name());
		}
		applied
	}

	pub fn is_valid(&self) -> bool {
		self.controls.iter().all(|(_, control)| control.is_valid())
	}

	pub fn is_pending(&self) -> bool {
		self.controls.iter().any(|(_, control)| control.is_pending())
	}

	/// The field has been interacted with and currently fails validation
	pub fn is_field_invalid(&self, field: F) -> bool {
		self.control(field)
			.is_some_and(|control| control.is_touched() && control.is_invalid())
	}

	pub fn is_field_pending(&self, field: F) -> bool {
		self.control(field).is_some_and(FormControl::is_pending)
	}

	/// The message to surface for a field, once the field qualifies as invalid
	pub fn error_message(&self, field: F) -> Option<String> {
		if !self.is_field_invalid(field) {
			return None;
		}
		self.control(field)
			.and_then(FormControl::first_error)
			.map(|error| error.to_string())
	}

	/// Clears every value back to empty and untouched, cancelling outstanding checks
	pub fn reset(&mut self) {
		for (field, control) in self.controls.iter_mut() {
			self.tasks.cancel(field.name());
			control.reset();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::ManualTimer;
	use futures::executor::block_on;

	#[derive(Clone, Copy, Debug, Eq, PartialEq)]
	enum Field {
		Handle,
		Accept,
	}

	impl FormField for Field {
		const ALL: &'static [Self] = &[Self::Handle, Self::Accept];

		fn name(self) -> &'static str {
			match self {
				Self::Handle => "handle",
				Self::Accept => "accept",
			}
		}
	}

	fn form_with_taken(timer: &ManualTimer, taken: &'static str) -> FormGroup<Field> {
		let validator = AsyncValidator::new(
			ValidationError::UsernameTaken,
			Duration::from_millis(300),
			Rc::new(timer.clone()),
			Rc::new(move |value: &str| value == taken),
		);
		FormGroup::new(vec![
			(
				Field::Handle,
				FormControl::text(vec![Validator::Required, Validator::MinLength(3)]).with_async_validator(validator),
			),
			(Field::Accept, FormControl::checkbox(vec![Validator::RequiredTrue])),
		])
	}

	fn text(value: &str) -> FieldValue {
		FieldValue::Text(String::from(value))
	}

	#[test]
	fn untouched_fields_are_never_reported_invalid() {
		let mut form = form_with_taken(&ManualTimer::default(), "taken");
		assert!(!form.is_valid());
		assert!(!form.is_field_invalid(Field::Handle));
		form.mark_touched(Field::Handle);
		assert!(form.is_field_invalid(Field::Handle));
		assert_eq!(form.error_message(Field::Handle), Some(ValidationError::Required.to_string()));
	}

	#[test]
	fn async_check_waits_for_sync_rules() {
		let timer = ManualTimer::default();
		let mut form = form_with_taken(&timer, "taken");
		assert!(form.set_value(Field::Handle, text("ab")).is_none());
		assert!(!form.is_field_pending(Field::Handle));
		assert!(timer.armed_delays().is_empty());
	}

	#[test]
	fn pending_until_the_delay_elapses() {
		let timer = ManualTimer::default();
		let mut form = form_with_taken(&timer, "taken");
		let check = form.set_value(Field::Handle, text("free")).expect("a check should start");
		assert_eq!(check.field(), Field::Handle);
		assert_eq!(timer.armed_delays(), vec![Duration::from_millis(300)]);
		assert!(form.is_field_pending(Field::Handle));
		form.mark_touched(Field::Handle);
		assert!(!form.is_field_invalid(Field::Handle));

		timer.fire_all();
		let outcome = block_on(check.run()).expect("check was not cancelled");
		assert!(form.apply_check(outcome));
		assert!(!form.is_field_pending(Field::Handle));
		assert!(form.control(Field::Handle).is_some_and(FormControl::is_valid));
	}

	#[test]
	fn taken_value_resolves_invalid() {
		let timer = ManualTimer::default();
		let mut form = form_with_taken(&timer, "taken");
		form.mark_touched(Field::Handle);
		let check = form.set_value(Field::Handle, text("taken")).expect("a check should start");
		timer.fire_all();
		let outcome = block_on(check.run()).expect("check was not cancelled");
		assert_eq!(outcome.error, Some(ValidationError::UsernameTaken));
		form.apply_check(outcome);
		assert!(form.is_field_invalid(Field::Handle));
		assert_eq!(
			form.error_message(Field::Handle),
			Some(ValidationError::UsernameTaken.to_string())
		);
	}

	#[test]
	fn a_new_value_cancels_the_previous_check() {
		let timer = ManualTimer::default();
		let mut form = form_with_taken(&timer, "taken");
		let first = form.set_value(Field::Handle, text("first")).expect("a check should start");
		let second = form.set_value(Field::Handle, text("second")).expect("a check should start");
		timer.fire_all();
		assert!(block_on(first.run()).is_none());
		assert!(block_on(second.run()).is_some());
	}

	#[test]
	fn stale_verdicts_are_ignored() {
		let timer = ManualTimer::default();
		let mut form = form_with_taken(&timer, "taken");
		let first = form.set_value(Field::Handle, text("first")).expect("a check should start");
		timer.fire_all();
		let stale = block_on(first.run()).expect("check was not cancelled");

		let _second = form.set_value(Field::Handle, text("second")).expect("a check should start");
		assert!(!form.apply_check(stale));
		assert!(form.is_field_pending(Field::Handle));
	}

	#[test]
	fn dropping_the_form_cancels_its_checks() {
		let timer = ManualTimer::default();
		let mut form = form_with_taken(&timer, "taken");
		let check = form.set_value(Field::Handle, text("free")).expect("a check should start");
		drop(form);
		timer.fire_all();
		assert!(block_on(check.run()).is_none());
	}

	#[test]
	fn clones_share_outstanding_work() {
		let timer = ManualTimer::default();
		let mut form = form_with_taken(&timer, "taken");
		let check = form.set_value(Field::Handle, text("free")).expect("a check should start");
		let copy = form.clone();
		drop(form);
		timer.fire_all();
		let outcome = block_on(check.run()).expect("a clone still owns the check");
		let mut copy = copy;
		assert!(copy.apply_check(outcome));
	}

	#[test]
	fn reset_clears_values_and_cancels_checks() {
		let timer = ManualTimer::default();
		let mut form = form_with_taken(&timer, "taken");
		form.mark_touched(Field::Handle);
		let check = form.set_value(Field::Handle, text("free")).expect("a check should start");
		form.set_value(Field::Accept, FieldValue::Flag(true));
		form.reset();
		timer.fire_all();

		assert!(block_on(check.run()).is_none());
		assert_eq!(form.text(Field::Handle), "");
		assert!(!form.flag(Field::Accept));
		assert!(!form.is_field_pending(Field::Handle));
		assert!(!form.control(Field::Handle).is_some_and(FormControl::is_touched));
	}

	#[test]
	fn field_names_round_trip() {
		assert_eq!(Field::from_name("accept"), Some(Field::Accept));
		assert_eq!(Field::from_name("missing"), None);
	}
}
