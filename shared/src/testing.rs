// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::timer::Timer;
use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// A timer whose delays only elapse when the test says so.
#[derive(Clone, Default)]
pub struct ManualTimer {
	armed: Rc<RefCell<Vec<(Duration, oneshot::Sender<()>)>>>,
}

impl ManualTimer {
	/// Elapses every armed delay, returning how many there were
	pub fn fire_all(&self) -> usize {
		let armed: Vec<_> = self.armed.borrow_mut().drain(..).collect();
		let count = armed.len();
		for (_, sender) in armed {
			let _ = sender.send(());
		}
		count
	}

	pub fn armed_delays(&self) -> Vec<Duration> {
		self.armed.borrow().iter().map(|(duration, _)| *duration).collect()
	}
}

impl Timer for ManualTimer {
	fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
		let (sender, receiver) = oneshot::channel();
		self.armed.borrow_mut().push((duration, sender));
		Box::pin(async move {
			let _ = receiver.await;
		})
	}
}
