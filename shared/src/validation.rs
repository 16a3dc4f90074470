// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

const EMAIL_MAX_LENGTH: usize = 254;
const EMAIL_LOCAL_PART_MAX_LENGTH: usize = 64;

/// The value held by a single form control
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldValue {
	Text(String),
	Flag(bool),
}

impl FieldValue {
	/// The text value, or an empty string for a flag
	pub fn as_text(&self) -> &str {
		match self {
			Self::Text(text) => text,
			Self::Flag(_) => "",
		}
	}

	pub fn as_flag(&self) -> bool {
		matches!(self, Self::Flag(true))
	}

	/// Whether the value counts as "not entered" for the length and format rules
	pub fn is_empty(&self) -> bool {
		match self {
			Self::Text(text) => text.is_empty(),
			Self::Flag(_) => false,
		}
	}

	/// The value a control of the same kind holds after a reset
	pub fn cleared(&self) -> Self {
		match self {
			Self::Text(_) => Self::Text(String::new()),
			Self::Flag(_) => Self::Flag(false),
		}
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValidationError {
	Required,
	RequiredTrue,
	MinLength { required: usize, actual: usize },
	Email,
	UsernameTaken,
	EmailTaken,
}

impl fmt::Display for ValidationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Required => write!(f, "Este campo es obligatorio"),
			Self::RequiredTrue => write!(f, "Debes aceptar los términos y condiciones"),
			Self::MinLength { required, actual } => {
				write!(f, "Debe tener al menos {} caracteres (tiene {})", required, actual)
			}
			Self::Email => write!(f, "Introduce un email válido"),
			Self::UsernameTaken => write!(f, "Este nombre de usuario no está disponible"),
			Self::EmailTaken => write!(f, "Este email ya está registrado"),
		}
	}
}

/// A synchronous rule applied to a control's value.
///
/// `MinLength` and `Email` accept an empty value; rejecting empty input is the job of `Required`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Validator {
	Required,
	RequiredTrue,
	MinLength(usize),
	Email,
}

impl Validator {
	pub fn check(&self, value: &FieldValue) -> Option<ValidationError> {
		match self {
			Self::Required => value.is_empty().then_some(ValidationError::Required),
			Self::RequiredTrue => (!value.as_flag()).then_some(ValidationError::RequiredTrue),
			Self::MinLength(required) => {
				if value.is_empty() {
					return None;
				}
				let actual = value.as_text().chars().count();
				(actual < *required).then_some(ValidationError::MinLength {
					required: *required,
					actual,
				})
			}
			Self::Email => {
				if value.is_empty() || is_valid_email(value.as_text()) {
					None
				} else {
					Some(ValidationError::Email)
				}
			}
		}
	}
}

/// Runs every validator against the value, collecting the failures in order
pub fn run_validators(validators: &[Validator], value: &FieldValue) -> Vec<ValidationError> {
	validators.iter().filter_map(|validator| validator.check(value)).collect()
}

fn email_regex() -> &'static Regex {
	static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
	EMAIL_REGEX.get_or_init(|| {
		Regex::new(
			r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
		)
		.expect("email pattern is a valid regex")
	})
}

/// Checks an address against the HTML form email rules.
///
/// The pattern only admits ASCII, so byte lengths equal character counts for anything it accepts.
pub fn is_valid_email(value: &str) -> bool {
	if value.is_empty() || value.len() > EMAIL_MAX_LENGTH {
		return false;
	}
	match value.find('@') {
		Some(at_index) if at_index <= EMAIL_LOCAL_PART_MAX_LENGTH => email_regex().is_match(value),
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn text(value: &str) -> FieldValue {
		FieldValue::Text(String::from(value))
	}

	#[rstest]
	#[case("user@example.com")]
	#[case("first.last@sub.example.org")]
	#[case("a+tag@localhost")]
	#[case("o'brien@example.ie")]
	fn accepts_well_formed_emails(#[case] email: &str) {
		assert!(is_valid_email(email), "{email} should be accepted");
	}

	#[rstest]
	#[case("invalid-email")]
	#[case("@example.com")]
	#[case("user@")]
	#[case("user@-example.com")]
	#[case("user@example-.com")]
	#[case("two..dots@example.com")]
	#[case("spaces in@example.com")]
	#[case("ñandú@example.com")]
	fn rejects_malformed_emails(#[case] email: &str) {
		assert!(!is_valid_email(email), "{email} should be rejected");
	}

	#[test]
	fn rejects_overlong_local_part() {
		let local = "a".repeat(65);
		assert!(!is_valid_email(&format!("{local}@example.com")));
		let local = "a".repeat(64);
		assert!(is_valid_email(&format!("{local}@example.com")));
	}

	#[test]
	fn rejects_overlong_address() {
		let label = "a".repeat(60);
		let address = format!("user@{label}.{label}.{label}.{label}.{label}.com");
		assert!(address.len() > EMAIL_MAX_LENGTH);
		assert!(!is_valid_email(&address));
	}

	#[test]
	fn length_and_format_rules_leave_empty_values_to_required() {
		assert_eq!(Validator::MinLength(3).check(&text("")), None);
		assert_eq!(Validator::Email.check(&text("")), None);
		assert_eq!(Validator::Required.check(&text("")), Some(ValidationError::Required));
	}

	#[test]
	fn min_length_counts_characters() {
		assert_eq!(Validator::MinLength(3).check(&text("ñoñ")), None);
		assert_eq!(
			Validator::MinLength(3).check(&text("ab")),
			Some(ValidationError::MinLength { required: 3, actual: 2 })
		);
	}

	#[test]
	fn required_true_needs_a_checked_flag() {
		assert_eq!(
			Validator::RequiredTrue.check(&FieldValue::Flag(false)),
			Some(ValidationError::RequiredTrue)
		);
		assert_eq!(Validator::RequiredTrue.check(&FieldValue::Flag(true)), None);
		assert_eq!(Validator::Required.check(&FieldValue::Flag(false)), None);
	}

	#[test]
	fn collects_failures_in_declaration_order() {
		let validators = [Validator::Required, Validator::MinLength(6), Validator::Email];
		assert_eq!(
			run_validators(&validators, &text("bad")),
			vec![ValidationError::MinLength { required: 6, actual: 3 }, ValidationError::Email]
		);
	}
}
