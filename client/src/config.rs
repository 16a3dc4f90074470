// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use miette::Result;
use registro_shared::config::{parse_config, AppConfig};

const CONFIG_FILE_NAME: &str = "config.kdl";
const CONFIG_CONTENTS: &str = include_str!("../config.kdl");

/// Reads the configuration compiled into the client
pub fn load_config() -> Result<AppConfig> {
	parse_config(CONFIG_FILE_NAME, CONFIG_CONTENTS)
}
