// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// The comments shown on a profile page, oldest first
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CommentThread {
	comments: Vec<String>,
}

impl CommentThread {
	pub fn comments(&self) -> &[String] {
		&self.comments
	}

	/// Adds a comment with surrounding whitespace removed. Blank comments are rejected.
	pub fn add(&mut self, text: &str) -> bool {
		let text = text.trim();
		if text.is_empty() {
			return false;
		}
		self.comments.push(String::from(text));
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keeps_comments_in_order() {
		let mut thread = CommentThread::default();
		assert!(thread.add("Primer comentario"));
		assert!(thread.add("  segundo  "));
		assert_eq!(thread.comments(), ["Primer comentario", "segundo"]);
	}

	#[test]
	fn rejects_blank_comments() {
		let mut thread = CommentThread::default();
		assert!(!thread.add(""));
		assert!(!thread.add(" \t "));
		assert!(thread.comments().is_empty());
	}
}
