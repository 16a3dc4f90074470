// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Prop)]
pub struct TextFieldProps<'a> {
	id: &'static str,
	label_text: &'static str,
	input_type: &'static str,
	value: &'a Signal<String>,
	/// Set whenever the input loses focus
	blurred: &'a Signal<bool>,
	error: &'a ReadSignal<Option<String>>,
	pending: &'a ReadSignal<bool>,
}

#[component]
pub fn TextField<'a, G: Html>(ctx: Scope<'a>, props: TextFieldProps<'a>) -> View<G> {
	let TextFieldProps {
		id,
		label_text,
		input_type,
		value,
		blurred,
		error,
		pending,
	} = props;
	let error_class_signal = create_memo(ctx, move || if error.get().is_some() { "error" } else { "" });

	view! {
		ctx,
		div(class="input_with_message") {
			label(for=id) { (label_text) }
			input(
				id=id,
				type=input_type,
				class=*error_class_signal.get(),
				bind:value=value,
				on:blur=move |_event: WebEvent| blurred.set(true)
			)
			(
				if *pending.get() {
					view! {
						ctx,
						span(class="input_pending") { "Comprobando..." }
					}
				} else {
					view! { ctx, }
				}
			)
			(
				if let Some(message) = (*error.get()).clone() {
					view! {
						ctx,
						span(class="input_error") { (message) }
					}
				} else {
					view! { ctx, }
				}
			)
		}
	}
}
