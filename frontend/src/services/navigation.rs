//! Navigation between views.

use leptos_router::{use_navigate, NavigateOptions};
use std::rc::Rc;

use crate::types::Route;

/// Something that can move the user to another view.
pub trait Navigator {
    fn navigate(&self, route: &Route);
}

/// Navigator backed by the leptos router and `window.location`.
///
/// Task routes are pushed through the router. Going back home reloads
/// the page so every component starts from a clean state.
#[derive(Clone)]
pub struct BrowserNavigator {
    push: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl BrowserNavigator {
    /// Must be called inside a `<Router>`.
    pub fn from_router() -> Self {
        let navigate = use_navigate();
        Self {
            push: Rc::new(move |path, options| navigate(path, options)),
        }
    }
}

impl Navigator for BrowserNavigator {
    fn navigate(&self, route: &Route) {
        let path = route.to_path();
        log::debug!("🧭 Navigating to {}", path);

        match route {
            Route::Home => reload_to(&path),
            Route::TaskStatus { .. } => (self.push)(&path, NavigateOptions::default()),
        }
    }
}

fn reload_to(path: &str) {
    let Some(window) = web_sys::window() else {
        log::error!("No window available, cannot navigate to {}", path);
        return;
    };
    if let Err(e) = window.location().set_href(path) {
        log::error!("Navigation to {} failed: {:?}", path, e);
    }
}
