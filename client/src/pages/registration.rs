// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::text_field::TextField;
use crate::page_utils::show_notice;
use registro_shared::registration::{RegisteredUsers, RegistrationField, RegistrationForm, SubmitOutcome};
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Clone, Copy)]
struct FieldSignals<'a> {
	value: &'a Signal<String>,
	blurred: &'a Signal<bool>,
	error: &'a ReadSignal<Option<String>>,
}

/// Wires an input's signals to one field of the form
fn bind_field<'a>(ctx: Scope<'a>, form: &'a Signal<RegistrationForm>, field: RegistrationField) -> FieldSignals<'a> {
	let value = create_signal(ctx, String::new());
	let blurred = create_signal(ctx, false);

	create_effect(ctx, move || {
		let text = (*value.get()).clone();
		form.modify().set_text(field, text);
	});
	create_effect(ctx, move || {
		if *blurred.get() {
			form.modify().mark_touched(field);
		}
	});
	let error = create_memo(ctx, move || form.get().error_message(field));

	FieldSignals { value, blurred, error }
}

#[component]
pub fn RegistrationView<G: Html>(ctx: Scope<'_>) -> View<G> {
	let users: &RcSignal<RegisteredUsers> = use_context(ctx);
	let form = create_signal(ctx, RegistrationForm::new());

	let name = bind_field(ctx, form, RegistrationField::Name);
	let email = bind_field(ctx, form, RegistrationField::Email);
	let password = bind_field(ctx, form, RegistrationField::Password);
	let confirm_password = bind_field(ctx, form, RegistrationField::ConfirmPassword);
	// No field here has an async check.
	let never_pending = create_signal(ctx, false);

	let form_invalid_signal = create_memo(ctx, || !form.get().is_valid());
	let success_message_signal = create_memo(ctx, || form.get().success_message().map(String::from));
	let registered_count_signal = create_memo(ctx, move || users.get().len().to_string());
	let registered_names_signal = create_memo(ctx, move || {
		users
			.get()
			.records()
			.iter()
			.map(|record| format!("{} ({})", record.name, record.email))
			.collect::<Vec<String>>()
	});

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		let outcome = {
			let mut users = users.modify();
			form.modify().submit(&mut users)
		};

		match outcome {
			SubmitOutcome::Registered(record) => {
				log::info!("Registered {}", record.name);
				for field in [name, email, password, confirm_password] {
					field.value.set(String::new());
				}
			}
			SubmitOutcome::PasswordMismatch(notice) => show_notice(&notice),
			SubmitOutcome::Invalid => (),
		}
	};

	view! {
		ctx,
		h1 { "Registro de usuario" }
		form(id="registro", on:submit=form_submission_handler) {
			TextField(
				id="registro_nombre",
				label_text="Nombre: ",
				input_type="text",
				value=name.value,
				blurred=name.blurred,
				error=name.error,
				pending=never_pending
			)
			TextField(
				id="registro_email",
				label_text="Email: ",
				input_type="email",
				value=email.value,
				blurred=email.blurred,
				error=email.error,
				pending=never_pending
			)
			TextField(
				id="registro_password",
				label_text="Contraseña: ",
				input_type="password",
				value=password.value,
				blurred=password.blurred,
				error=password.error,
				pending=never_pending
			)
			TextField(
				id="registro_confirm_password",
				label_text="Confirmar contraseña: ",
				input_type="password",
				value=confirm_password.value,
				blurred=confirm_password.blurred,
				error=confirm_password.error,
				pending=never_pending
			)
			button(type="submit", disabled=*form_invalid_signal.get()) { "Registrarse" }
		}
		(
			if let Some(message) = (*success_message_signal.get()).clone() {
				view! {
					ctx,
					p(class="success_message") { (message) }
				}
			} else {
				view! { ctx, }
			}
		)
		p(id="registro_count") { "Usuarios registrados: " (*registered_count_signal.get()) }
		ul(id="registro_usuarios") {
			Indexed(
				iterable=registered_names_signal,
				view=|ctx, registered| view! { ctx, li { (registered) } }
			)
		}
	}
}
