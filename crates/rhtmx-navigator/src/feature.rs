// File: src/feature.rs
// Purpose: Feature modules that contribute their own routes

use crate::error::Result;
use crate::registry::{RouteFactory, RouteRegistry};
use tracing::debug;

/// A feature module that owns a set of routes
///
/// # Examples
///
/// ```
/// use rhtmx_navigator::{route_factory, RoutableFeature, RouteFactory, RouteRegistrar, RouteRegistry};
///
/// struct Profile;
///
/// impl RoutableFeature<String> for Profile {
///     fn routes(&self) -> Vec<(String, RouteFactory<String>)> {
///         vec![
///             ("/profile".to_string(), route_factory(|| "Profile".to_string())),
///             ("/profile/edit".to_string(), route_factory(|| "Edit profile".to_string())),
///         ]
///     }
/// }
///
/// let mut registry: RouteRegistry<String> = RouteRegistry::new();
/// let count = RouteRegistrar::register_all(&mut registry, &[&Profile]).unwrap();
/// assert_eq!(count, 2);
/// assert_eq!(registry.all_paths(), vec!["/profile", "/profile/edit"]);
/// ```
pub trait RoutableFeature<V> {
    /// Name used in logs
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn routes(&self) -> Vec<(String, RouteFactory<V>)>;
}

/// Registers the routes of many features into one registry
pub struct RouteRegistrar;

impl RouteRegistrar {
    /// Registers every feature's routes without overwriting
    ///
    /// Stops at the first rejected registration and returns its error;
    /// routes registered before it stay in place. On success returns the
    /// number of routes added.
    pub fn register_all<V>(
        registry: &mut RouteRegistry<V>,
        features: &[&dyn RoutableFeature<V>],
    ) -> Result<usize> {
        let mut count = 0;

        for feature in features {
            let routes = feature.routes();
            let added = routes.len();

            for (path, factory) in routes {
                registry.register_factory(path, factory, false)?;
            }

            debug!("Registered {} routes for {}", added, feature.name());
            count += added;
        }

        Ok(count)
    }
}
