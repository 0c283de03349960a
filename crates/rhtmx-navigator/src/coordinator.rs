// File: src/coordinator.rs
// Purpose: Observable "current route" cell

use crate::registry::RouteRegistry;
use crate::route::{PresentationStyle, Route, RouteParams};
use crate::view::RouteView;
use tokio::sync::watch;
use tracing::debug;

/// Receiver that yields on every navigation
pub type RouteWatcher = watch::Receiver<Option<Route>>;

/// Holds the last navigation intent and notifies observers
///
/// There is no history: each navigation replaces the current route, even
/// when it equals the previous one.
///
/// # Examples
///
/// ```
/// use rhtmx_navigator::{NavigationCoordinator, PresentationStyle, Route};
///
/// let coordinator = NavigationCoordinator::new();
/// let watcher = coordinator.subscribe();
///
/// coordinator.navigate_to("/settings", None, PresentationStyle::Sheet);
///
/// assert!(watcher.has_changed().unwrap());
/// assert_eq!(coordinator.current_route().unwrap().path(), "/settings");
/// ```
#[derive(Debug)]
pub struct NavigationCoordinator {
    current: watch::Sender<Option<Route>>,
}

impl NavigationCoordinator {
    pub fn new() -> Self {
        let (current, _rx) = watch::channel(None);
        Self { current }
    }

    /// Replaces the current route
    pub fn navigate(&self, route: Route) {
        debug!(
            "Navigating to {} ({}, {})",
            route.path(),
            route.source(),
            route.presentation()
        );
        self.current.send_replace(Some(route));
    }

    /// Builds an in-app route and navigates to it
    pub fn navigate_to(
        &self,
        path: impl Into<String>,
        params: Option<RouteParams>,
        presentation: PresentationStyle,
    ) {
        let route = Route::new(path).with_presentation(presentation);
        let route = match params {
            Some(params) => route.with_params(params),
            None => route,
        };
        self.navigate(route);
    }

    /// Snapshot of the current route
    pub fn current_route(&self) -> Option<Route> {
        self.current.borrow().clone()
    }

    /// Subscribe to route changes
    ///
    /// The receiver can call `changed().await` to wait for the next
    /// navigation, or `has_changed()` to poll.
    pub fn subscribe(&self) -> RouteWatcher {
        self.current.subscribe()
    }

    /// Clears the current route (used in tests)
    pub fn reset(&self) {
        self.current.send_replace(None);
    }

    /// Builds the destination view for `route`, or a not-found view
    pub fn destination_view<V>(&self, registry: &RouteRegistry<V>, route: &Route) -> V
    where
        V: RouteView,
    {
        registry
            .resolve(route.path())
            .unwrap_or_else(|| V::not_found(route.path()))
    }
}

impl Default for NavigationCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
