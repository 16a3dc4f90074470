// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;
use registro_shared::timer::Timer;
use std::time::Duration;

/// Delays backed by the browser's setTimeout
pub struct BrowserTimer;

impl Timer for BrowserTimer {
	fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
		let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
		TimeoutFuture::new(millis).boxed_local()
	}
}
