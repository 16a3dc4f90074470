// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::page_utils::set_page_title;
use crate::pages::advanced_registration::AdvancedRegistrationView;
use crate::pages::invoice::InvoiceView;
use crate::pages::products::ProductsView;
use crate::pages::redirect::RedirectView;
use crate::pages::registration::RegistrationView;
use crate::pages::user_profile::UserProfileView;
use registro_shared::routes::Route;
use sycamore::prelude::*;
use sycamore_router::{HistoryIntegration, Route as RouterRoute, Router};

#[derive(RouterRoute)]
enum AppRoutes {
	#[to("/registro")]
	Registration,
	#[to("/productos")]
	Products,
	#[to("/factura")]
	Invoice,
	#[to("/registro-avanzado")]
	AdvancedRegistration,
	#[to("/perfil-usuario")]
	UserProfile,
	#[not_found]
	Unmatched,
}

impl AppRoutes {
	fn page(&self) -> Option<Route> {
		match self {
			Self::Registration => Some(Route::Registration),
			Self::Products => Some(Route::Products),
			Self::Invoice => Some(Route::Invoice),
			Self::AdvancedRegistration => Some(Route::AdvancedRegistration),
			Self::UserProfile => Some(Route::UserProfile),
			Self::Unmatched => None,
		}
	}
}

fn page_view<G: Html>(ctx: Scope<'_>, page: Route) -> View<G> {
	log::debug!("Activating page {}", page.path());
	set_page_title(page.title());

	match page {
		Route::Registration => view! { ctx, RegistrationView },
		Route::Products => view! { ctx, ProductsView },
		Route::Invoice => view! { ctx, InvoiceView },
		Route::AdvancedRegistration => view! { ctx, AdvancedRegistrationView },
		Route::UserProfile => view! { ctx, UserProfileView },
	}
}

fn navigation_view<G: Html>(ctx: Scope<'_>) -> View<G> {
	let links = View::new_fragment(
		Route::ALL
			.into_iter()
			.map(|route| {
				view! {
					ctx,
					li { a(href=route.path()) { (route.title()) } }
				}
			})
			.collect(),
	);

	view! {
		ctx,
		nav(id="main_nav") {
			ul { (links) }
		}
	}
}

#[component]
pub fn App<G: Html>(ctx: Scope<'_>) -> View<G> {
	view! {
		ctx,
		Router(
			integration=HistoryIntegration::new(),
			view=|ctx, route: &ReadSignal<AppRoutes>| {
				view! {
					ctx,
					(navigation_view(ctx))
					main {
						(
							match route.get().page() {
								Some(page) => page_view(ctx, page),
								None => view! { ctx, RedirectView },
							}
						)
					}
				}
			}
		)
	}
}
