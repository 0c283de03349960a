// File: src/context.rs
// Purpose: Explicitly constructed navigation state for an application

use crate::config::NavigatorConfig;
use crate::coordinator::NavigationCoordinator;
use crate::deeplink::DeepLinkTranslator;
use crate::error::Result;
use crate::feature::{RoutableFeature, RouteRegistrar};
use crate::registry::RouteRegistry;
use crate::route::Route;
use crate::view::RouteView;
use maud::Markup;

/// Everything navigation needs, owned in one place
///
/// Create one at startup and pass it to whatever owns navigation; there is
/// no global instance. Tests build their own and call [`reset`] between
/// cases.
///
/// [`reset`]: NavigationContext::reset
///
/// # Examples
///
/// ```
/// use maud::html;
/// use rhtmx_navigator::{NavigationContext, NavigatorConfig};
///
/// let mut nav: NavigationContext = NavigationContext::new(NavigatorConfig::default());
/// nav.registry_mut()
///     .register("/hotel/details", || html! { h1 { "Hotel" } })
///     .unwrap();
///
/// let route = nav.open_url("bookify://hotel/details?id=101").unwrap();
/// assert_eq!(route.int("id"), Some(101));
/// assert_eq!(nav.current_destination().unwrap().into_string(), "<h1>Hotel</h1>");
/// ```
#[derive(Debug)]
pub struct NavigationContext<V = Markup> {
    config: NavigatorConfig,
    translator: DeepLinkTranslator,
    registry: RouteRegistry<V>,
    coordinator: NavigationCoordinator,
}

impl<V> NavigationContext<V> {
    pub fn new(config: NavigatorConfig) -> Self {
        Self {
            translator: DeepLinkTranslator::with_config(config.deeplink.clone()),
            config,
            registry: RouteRegistry::new(),
            coordinator: NavigationCoordinator::new(),
        }
    }

    /// Builds a context from `./navigator.toml`
    pub fn from_default_config() -> anyhow::Result<Self> {
        Ok(Self::new(NavigatorConfig::load_default()?))
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn translator(&self) -> &DeepLinkTranslator {
        &self.translator
    }

    pub fn registry(&self) -> &RouteRegistry<V> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut RouteRegistry<V> {
        &mut self.registry
    }

    pub fn coordinator(&self) -> &NavigationCoordinator {
        &self.coordinator
    }

    /// Registers the routes of every feature
    pub fn register_features(&mut self, features: &[&dyn RoutableFeature<V>]) -> Result<usize> {
        RouteRegistrar::register_all(&mut self.registry, features)
    }

    /// Translates a deep link and, when it is navigable, navigates to it
    pub fn open_url(&self, url: &str) -> Option<Route> {
        let route = self.translator.translate_str(url)?;
        self.coordinator.navigate(route.clone());
        Some(route)
    }

    /// Clears the registry and the current route
    pub fn reset(&mut self) {
        self.registry.clear();
        self.coordinator.reset();
    }
}

impl<V: RouteView> NavigationContext<V> {
    /// Destination view for `route`, or the not-found view
    pub fn destination(&self, route: &Route) -> V {
        self.coordinator.destination_view(&self.registry, route)
    }

    /// Destination view for the current route, if any
    pub fn current_destination(&self) -> Option<V> {
        self.coordinator
            .current_route()
            .map(|route| self.destination(&route))
    }
}

impl<V> Default for NavigationContext<V> {
    fn default() -> Self {
        Self::new(NavigatorConfig::default())
    }
}
