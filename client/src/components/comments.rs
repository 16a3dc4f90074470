// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use registro_shared::comments::CommentThread;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn CommentsView<G: Html>(ctx: Scope<'_>) -> View<G> {
	let thread_signal = create_signal(ctx, CommentThread::default());
	let draft_signal = create_signal(ctx, String::new());
	let comments = create_memo(ctx, || thread_signal.get().comments().to_vec());

	let comment_submit_handler = move |event: WebEvent| {
		event.prevent_default();
		let added = thread_signal.modify().add(&draft_signal.get());
		if added {
			draft_signal.set(String::new());
		}
	};

	view! {
		ctx,
		div(class="comments") {
			h2 { "Comentarios" }
			ul {
				Indexed(
					iterable=comments,
					view=|ctx, comment| view! { ctx, li { (comment) } }
				)
			}
			form(on:submit=comment_submit_handler) {
				input(type="text", placeholder="Escribe un comentario", bind:value=draft_signal)
				button(type="submit") { "Comentar" }
			}
		}
	}
}
