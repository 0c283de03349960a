// File: src/registry.rs
// Purpose: Path to view-factory table

use crate::error::{NavError, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Deferred view construction, invoked fresh on every resolve
pub type RouteFactory<V> = Arc<dyn Fn() -> V + Send + Sync>;

/// Wraps a closure as a [`RouteFactory`]
pub fn route_factory<V, F>(f: F) -> RouteFactory<V>
where
    F: Fn() -> V + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Table from exact route path to view factory
///
/// Mutation takes `&mut self`, so a registry has a single writer at any
/// time. To share one across threads wrap it in a lock; the factories are
/// `Send + Sync` so the registry itself is too.
///
/// # Examples
///
/// ```
/// use rhtmx_navigator::RouteRegistry;
///
/// let mut registry = RouteRegistry::new();
/// registry.register("/about", || "About".to_string()).unwrap();
///
/// assert_eq!(registry.resolve("/about"), Some("About".to_string()));
/// assert_eq!(registry.resolve("/unregistered"), None);
///
/// // Double registration keeps the first factory
/// assert!(registry.register("/about", || "Other".to_string()).is_err());
/// registry.register_with("/about", true, || "Replaced".to_string()).unwrap();
/// assert_eq!(registry.resolve("/about"), Some("Replaced".to_string()));
/// ```
pub struct RouteRegistry<V> {
    routes: HashMap<String, RouteFactory<V>>,
}

impl<V> RouteRegistry<V> {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Registers a factory, refusing to replace an existing one
    pub fn register<F>(&mut self, path: impl Into<String>, factory: F) -> Result<()>
    where
        F: Fn() -> V + Send + Sync + 'static,
    {
        self.register_with(path, false, factory)
    }

    /// Registers a factory; with `overwrite` an existing entry is replaced
    pub fn register_with<F>(&mut self, path: impl Into<String>, overwrite: bool, factory: F) -> Result<()>
    where
        F: Fn() -> V + Send + Sync + 'static,
    {
        self.register_factory(path, Arc::new(factory), overwrite)
    }

    /// Registers an already-wrapped factory
    ///
    /// A rejected registration leaves the existing entry untouched and
    /// returns [`NavError::DuplicateRoute`].
    pub fn register_factory(
        &mut self,
        path: impl Into<String>,
        factory: RouteFactory<V>,
        overwrite: bool,
    ) -> Result<()> {
        let path = path.into();
        if path.is_empty() {
            return Err(NavError::EmptyPath);
        }

        if !overwrite && self.routes.contains_key(&path) {
            warn!("Route '{}' already registered; pass overwrite to replace it", path);
            return Err(NavError::DuplicateRoute(path));
        }

        debug!("Registered route {}", path);
        self.routes.insert(path, factory);
        Ok(())
    }

    /// Builds the view registered for `path`
    pub fn resolve(&self, path: &str) -> Option<V> {
        match self.routes.get(path) {
            Some(factory) => Some(factory()),
            None => {
                debug!("No view registered for {}", path);
                None
            }
        }
    }

    /// Removes one route, returning whether it existed
    pub fn remove(&mut self, path: &str) -> bool {
        self.routes.remove(path).is_some()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.routes.contains_key(path)
    }

    /// Registered paths in sorted order (handy for debugging)
    pub fn all_paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.routes.keys().cloned().collect();
        paths.sort();
        paths
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Removes everything (test isolation, hot reload)
    pub fn clear(&mut self) {
        self.routes.clear();
    }
}

impl<V> Default for RouteRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for RouteRegistry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteRegistry")
            .field("paths", &self.all_paths())
            .finish()
    }
}
