// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use futures::future::{AbortHandle, Abortable};
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;

/// Tracks the outstanding deferred work of one form, one task per named slot.
///
/// Guarding a new task in an occupied slot aborts the task it replaces. Dropping the scope aborts everything still
/// outstanding, so a form is shared between clones through an `Rc<CancelScope>` and work only stops once the last
/// clone is gone.
#[derive(Debug, Default)]
pub struct CancelScope {
	tasks: RefCell<HashMap<&'static str, AbortHandle>>,
}

impl CancelScope {
	pub fn guard<Fut: Future>(&self, slot: &'static str, future: Fut) -> Abortable<Fut> {
		let (handle, registration) = AbortHandle::new_pair();
		if let Some(replaced) = self.tasks.borrow_mut().insert(slot, handle) {
			replaced.abort();
		}
		Abortable::new(future, registration)
	}

	pub fn cancel(&self, slot: &'static str) {
		if let Some(handle) = self.tasks.borrow_mut().remove(slot) {
			handle.abort();
		}
	}

	pub fn cancel_all(&self) {
		for (_, handle) in self.tasks.borrow_mut().drain() {
			handle.abort();
		}
	}

	/// Forgets a slot's task once it has run to completion
	pub fn release(&self, slot: &'static str) {
		self.tasks.borrow_mut().remove(slot);
	}
}

impl Drop for CancelScope {
	fn drop(&mut self) {
		self.cancel_all();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use futures::executor::block_on;
	use futures::future::ready;

	#[test]
	fn replacing_a_slot_aborts_the_previous_task() {
		let scope = CancelScope::default();
		let first = scope.guard("username", ready(1));
		let second = scope.guard("username", ready(2));
		assert!(block_on(first).is_err());
		assert_eq!(block_on(second).ok(), Some(2));
	}

	#[test]
	fn slots_are_independent() {
		let scope = CancelScope::default();
		let username = scope.guard("username", ready("a"));
		let email = scope.guard("email", ready("b"));
		scope.cancel("username");
		assert!(block_on(username).is_err());
		assert_eq!(block_on(email).ok(), Some("b"));
	}

	#[test]
	fn dropping_the_scope_aborts_outstanding_tasks() {
		let scope = CancelScope::default();
		let task = scope.guard("submit", ready(()));
		drop(scope);
		assert!(block_on(task).is_err());
	}

	#[test]
	fn released_tasks_survive_the_scope() {
		let scope = CancelScope::default();
		let task = scope.guard("submit", ready(()));
		scope.release("submit");
		drop(scope);
		assert!(block_on(task).is_ok());
	}
}
