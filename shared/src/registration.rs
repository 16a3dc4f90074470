// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::forms::{FormControl, FormField, FormGroup};
use crate::notice::Notice;
use crate::validation::{FieldValue, Validator};
use serde::Serialize;

pub const NAME_MIN_LENGTH: usize = 3;
pub const PASSWORD_MIN_LENGTH: usize = 6;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegistrationField {
	Name,
	Email,
	Password,
	ConfirmPassword,
}

impl FormField for RegistrationField {
	const ALL: &'static [Self] = &[Self::Name, Self::Email, Self::Password, Self::ConfirmPassword];

	fn name(self) -> &'static str {
		match self {
			Self::Name => "nombre",
			Self::Email => "email",
			Self::Password => "password",
			Self::ConfirmPassword => "confirmPassword",
		}
	}
}

/// A completed basic registration
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RegistrationRecord {
	pub name: String,
	pub email: String,
	#[serde(skip_serializing)]
	pub password: String,
}

/// Every record registered during this session, in registration order
#[derive(Clone, Debug, Default)]
pub struct RegisteredUsers {
	records: Vec<RegistrationRecord>,
}

impl RegisteredUsers {
	pub fn records(&self) -> &[RegistrationRecord] {
		&self.records
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	fn push(&mut self, record: RegistrationRecord) {
		self.records.push(record);
		match serde_json::to_string(&self.records) {
			Ok(records_json) => log::info!("Registered users: {}", records_json),
			Err(error) => log::warn!("Failed to serialize registered users for logging: {}", error),
		}
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
	/// Some field fails its rules; nothing happened
	Invalid,
	/// The passwords differ; nothing changed and the notice must be shown
	PasswordMismatch(Notice),
	Registered(RegistrationRecord),
}

#[derive(Clone, Debug)]
pub struct RegistrationForm {
	form: FormGroup<RegistrationField>,
	success_message: Option<String>,
}

impl Default for RegistrationForm {
	fn default() -> Self {
		Self::new()
	}
}

impl RegistrationForm {
	pub fn new() -> Self {
		let form = FormGroup::new(vec![
			(
				RegistrationField::Name,
				FormControl::text(vec![Validator::Required, Validator::MinLength(NAME_MIN_LENGTH)]),
			),
			(
				RegistrationField::Email,
				FormControl::text(vec![Validator::Required, Validator::Email]),
			),
			(
				RegistrationField::Password,
				FormControl::text(vec![Validator::Required, Validator::MinLength(PASSWORD_MIN_LENGTH)]),
			),
			(
				RegistrationField::ConfirmPassword,
				FormControl::text(vec![Validator::Required]),
			),
		]);
		Self {
			form,
			success_message: None,
		}
	}

	pub fn set_text(&mut self, field: RegistrationField, value: impl Into<String>) {
		// None of these fields carries an async check, so there is never one to drive.
		let _ = self.form.set_value(field, FieldValue::Text(value.into()));
	}

	pub fn text(&self, field: RegistrationField) -> &str {
		self.form.text(field)
	}

	pub fn mark_touched(&mut self, field: RegistrationField) {
		self.form.mark_touched(field);
	}

	pub fn is_valid(&self) -> bool {
		self.form.is_valid()
	}

	pub fn is_field_invalid(&self, field: RegistrationField) -> bool {
		self.form.is_field_invalid(field)
	}

	pub fn error_message(&self, field: RegistrationField) -> Option<String> {
		self.form.error_message(field)
	}

	/// The greeting left behind by the last successful registration
	pub fn success_message(&self) -> Option<&str> {
		self.success_message.as_deref()
	}

	/// Registers the entered user into `users` when every rule passes and both passwords match
	pub fn submit(&mut self, users: &mut RegisteredUsers) -> SubmitOutcome {
		if !self.form.is_valid() {
			return SubmitOutcome::Invalid;
		}

		let password = self.text(RegistrationField::Password);
		if password != self.text(RegistrationField::ConfirmPassword) {
			return SubmitOutcome::PasswordMismatch(Notice::new("Las contraseñas no coinciden"));
		}

		let record = RegistrationRecord {
			name: self.text(RegistrationField::Name).to_owned(),
			email: self.text(RegistrationField::Email).to_owned(),
			password: password.to_owned(),
		};
		self.success_message = Some(format!("¡Bienvenido, {}!", record.name));
		users.push(record.clone());
		self.form.reset();
		SubmitOutcome::Registered(record)
	}
}
