// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// The pages of the application, one per path
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Route {
	#[default]
	Registration,
	Products,
	Invoice,
	AdvancedRegistration,
	UserProfile,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RouteResolution {
	Render(Route),
	RedirectTo(Route),
}

impl Route {
	pub const ALL: [Self; 5] = [
		Self::Registration,
		Self::Products,
		Self::Invoice,
		Self::AdvancedRegistration,
		Self::UserProfile,
	];

	pub fn path(self) -> &'static str {
		match self {
			Self::Registration => "/registro",
			Self::Products => "/productos",
			Self::Invoice => "/factura",
			Self::AdvancedRegistration => "/registro-avanzado",
			Self::UserProfile => "/perfil-usuario",
		}
	}

	/// Link text for the navigation bar
	pub fn title(self) -> &'static str {
		match self {
			Self::Registration => "Registro",
			Self::Products => "Productos",
			Self::Invoice => "Factura",
			Self::AdvancedRegistration => "Registro avanzado",
			Self::UserProfile => "Perfil de usuario",
		}
	}

	/// Maps a location path to its page. The root and any unknown path lead to the default page.
	pub fn resolve(path: &str) -> RouteResolution {
		let path = path.split(['?', '#']).next().unwrap_or_default();
		let path = path.trim_end_matches('/');
		match Self::ALL.into_iter().find(|route| route.path() == path) {
			Some(route) => RouteResolution::Render(route),
			None => RouteResolution::RedirectTo(Self::default()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("/registro", Route::Registration)]
	#[case("/productos", Route::Products)]
	#[case("/factura", Route::Invoice)]
	#[case("/registro-avanzado", Route::AdvancedRegistration)]
	#[case("/perfil-usuario", Route::UserProfile)]
	#[case("/perfil-usuario/", Route::UserProfile)]
	#[case("/factura?id=3", Route::Invoice)]
	fn declared_paths_render_their_page(#[case] path: &str, #[case] route: Route) {
		assert_eq!(Route::resolve(path), RouteResolution::Render(route));
	}

	#[rstest]
	#[case("")]
	#[case("/")]
	#[case("/no-existe")]
	#[case("/registro/extra")]
	fn other_paths_redirect_to_registration(#[case] path: &str) {
		assert_eq!(Route::resolve(path), RouteResolution::RedirectTo(Route::Registration));
	}

	#[test]
	fn every_route_resolves_to_itself() {
		for route in Route::ALL {
			assert_eq!(Route::resolve(route.path()), RouteResolution::Render(route));
		}
	}
}
