// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::text_field::TextField;
use crate::page_utils::show_notice;
use crate::services::AppServices;
use registro_shared::advanced_registration::{AdvancedField, AdvancedRegistrationForm};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Clone, Copy)]
struct FieldSignals<'a> {
	value: &'a Signal<String>,
	blurred: &'a Signal<bool>,
	error: &'a ReadSignal<Option<String>>,
	pending: &'a ReadSignal<bool>,
}

/// Wires an input's signals to one text field of the form, driving the field's async checks as the value changes
fn bind_field<'a>(
	ctx: Scope<'a>,
	form: &'a Signal<AdvancedRegistrationForm>,
	field: AdvancedField,
) -> FieldSignals<'a> {
	let value = create_signal(ctx, String::new());
	let blurred = create_signal(ctx, false);

	create_effect(ctx, move || {
		let text = (*value.get()).clone();
		let check = form.modify().set_text(field, text);
		if let Some(check) = check {
			spawn_local_scoped(ctx, async move {
				if let Some(outcome) = check.run().await {
					form.modify().apply_check(outcome);
				}
			});
		}
	});
	create_effect(ctx, move || {
		if *blurred.get() {
			form.modify().mark_touched(field);
		}
	});
	let error = create_memo(ctx, move || form.get().error_message(field));
	let pending = create_memo(ctx, move || form.get().is_field_pending(field));

	FieldSignals {
		value,
		blurred,
		error,
		pending,
	}
}

#[component]
pub fn AdvancedRegistrationView<G: Html>(ctx: Scope<'_>) -> View<G> {
	let services: &AppServices = use_context(ctx);
	let form = create_signal(
		ctx,
		AdvancedRegistrationForm::new(&services.validation, services.submit_delay),
	);

	let username = bind_field(ctx, form, AdvancedField::Username);
	let email = bind_field(ctx, form, AdvancedField::Email);
	let password = bind_field(ctx, form, AdvancedField::Password);

	let terms_signal = create_signal(ctx, false);
	create_effect(ctx, move || {
		let accepted = *terms_signal.get();
		form.modify().set_terms_accepted(accepted);
	});
	let terms_blur_handler = move |_event: WebEvent| form.modify().mark_touched(AdvancedField::Terms);
	let terms_error_signal = create_memo(ctx, move || form.get().error_message(AdvancedField::Terms));

	let submit_disabled_signal = create_memo(ctx, move || !form.get().can_submit());
	let submitting_signal = create_memo(ctx, move || form.get().is_submitting());

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();
		if !form.get_untracked().can_submit() {
			return;
		}

		let submission = form.modify().submit();
		let Some(submission) = submission else {
			return;
		};
		spawn_local_scoped(ctx, async move {
			let Some(completed) = submission.wait().await else {
				return;
			};
			let notice = form.modify().finish_submission(completed);
			if let Some(notice) = notice {
				show_notice(&notice);
			}
		});
	};

	view! {
		ctx,
		h1 { "Registro avanzado" }
		form(id="registro_avanzado", on:submit=form_submission_handler) {
			TextField(
				id="registro_avanzado_username",
				label_text="Nombre de usuario: ",
				input_type="text",
				value=username.value,
				blurred=username.blurred,
				error=username.error,
				pending=username.pending
			)
			TextField(
				id="registro_avanzado_email",
				label_text="Email: ",
				input_type="email",
				value=email.value,
				blurred=email.blurred,
				error=email.error,
				pending=email.pending
			)
			TextField(
				id="registro_avanzado_password",
				label_text="Contraseña: ",
				input_type="password",
				value=password.value,
				blurred=password.blurred,
				error=password.error,
				pending=password.pending
			)
			div(class="input_with_message") {
				input(
					id="registro_avanzado_terminos",
					type="checkbox",
					bind:checked=terms_signal,
					on:blur=terms_blur_handler
				)
				label(for="registro_avanzado_terminos") { "Acepto los términos y condiciones" }
				(
					if let Some(message) = (*terms_error_signal.get()).clone() {
						view! {
							ctx,
							span(class="input_error") { (message) }
						}
					} else {
						view! { ctx, }
					}
				)
			}
			button(type="submit", disabled=*submit_disabled_signal.get()) {
				(if *submitting_signal.get() { "Enviando..." } else { "Registrarse" })
			}
		}
	}
}
