// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use knuffel::Decode;
use miette::{IntoDiagnostic, Result};
use std::time::Duration;

const DEFAULT_CHECK_DELAY_MS: u64 = 1000;
const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;

#[derive(Debug, Decode, Default)]
pub struct AppConfig {
	#[knuffel(child, unwrap(argument))]
	check_delay_ms: Option<u64>,
	#[knuffel(child, unwrap(argument))]
	submit_delay_ms: Option<u64>,
	#[knuffel(child, unwrap(arguments), default)]
	taken_usernames: Vec<String>,
	#[knuffel(child, unwrap(arguments), default)]
	taken_emails: Vec<String>,
}

impl AppConfig {
	/// How long an availability or uniqueness check takes to report back
	pub fn check_delay(&self) -> Duration {
		Duration::from_millis(self.check_delay_ms.unwrap_or(DEFAULT_CHECK_DELAY_MS))
	}

	/// How long the simulated advanced registration submission takes
	pub fn submit_delay(&self) -> Duration {
		Duration::from_millis(self.submit_delay_ms.unwrap_or(DEFAULT_SUBMIT_DELAY_MS))
	}

	pub fn taken_usernames(&self) -> &[String] {
		&self.taken_usernames
	}

	pub fn taken_emails(&self) -> &[String] {
		&self.taken_emails
	}
}

pub fn parse_config(file_name: &str, contents: &str) -> Result<AppConfig> {
	let config = knuffel::parse(file_name, contents).into_diagnostic()?;
	Ok(config)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_document_uses_defaults() {
		let config = parse_config("config.kdl", "").expect("empty config parses");
		assert_eq!(config.check_delay(), Duration::from_millis(1000));
		assert_eq!(config.submit_delay(), Duration::from_millis(2000));
		assert!(config.taken_usernames().is_empty());
		assert!(config.taken_emails().is_empty());
	}

	#[test]
	fn reads_every_node() {
		let contents = r#"
check-delay-ms 250
submit-delay-ms 500
taken-usernames "admin" "root"
taken-emails "admin@example.com"
"#;
		let config = parse_config("config.kdl", contents).expect("config parses");
		assert_eq!(config.check_delay(), Duration::from_millis(250));
		assert_eq!(config.submit_delay(), Duration::from_millis(500));
		assert_eq!(config.taken_usernames(), ["admin", "root"]);
		assert_eq!(config.taken_emails(), ["admin@example.com"]);
	}

	#[test]
	fn rejects_malformed_values() {
		assert!(parse_config("config.kdl", "check-delay-ms \"soon\"").is_err());
	}
}
