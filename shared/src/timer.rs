// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use futures::future::LocalBoxFuture;
use std::time::Duration;

/// Source of the fixed delays behind the simulated checks and submissions.
///
/// The delay must be armed when `sleep` is called, not when the returned future is first polled.
pub trait Timer {
	fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}
