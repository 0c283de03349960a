//! # RHTMX Navigator
//!
//! Client-side navigation for RHTMX applications:
//! - Typed route parameters (`ParamValue`) with a lossless wire form
//! - Immutable navigation intents (`Route`) with soft-typed accessors
//! - Deep-link translation with type inference for query values
//! - A path → view-factory registry
//! - An observable "current route" cell (`NavigationCoordinator`)
//!
//! Paths are exact-match keys: there are no dynamic segments or wildcards.
//!
//! ## State Ownership
//!
//! Nothing is global. A [`NavigationContext`] is built at startup and passed
//! to whoever drives navigation. Registry mutation takes `&mut self`;
//! the current-route cell is a `tokio::sync::watch` channel, so observers
//! on other tasks see every navigation.
//!
//! ## Example
//!
//! ```
//! use rhtmx_navigator::{NavigationContext, PresentationStyle, Route, RouteSource};
//!
//! let mut nav: NavigationContext<String> = NavigationContext::default();
//! nav.registry_mut()
//!     .register("/hotel/details", || "Hotel details".to_string())
//!     .unwrap();
//!
//! let route = nav
//!     .open_url("bookify://hotel/details?id=101&name=OceanView&rating=4.9&active=true")
//!     .unwrap();
//!
//! assert_eq!(route.path(), "/hotel/details");
//! assert_eq!(route.int("id"), Some(101));
//! assert_eq!(route.string("name"), Some("OceanView".to_string()));
//! assert_eq!(route.double("rating"), Some(4.9));
//! assert_eq!(route.bool("active"), Some(true));
//! assert_eq!(route.source(), RouteSource::Deeplink);
//! assert_eq!(route.presentation(), PresentationStyle::Push);
//!
//! assert_eq!(nav.current_destination(), Some("Hotel details".to_string()));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
mod context;
mod coordinator;
mod deeplink;
pub mod error;
mod feature;
mod param;
pub mod registry;
pub mod route;
mod view;

pub use config::{DeepLinkConfig, NavigatorConfig};
pub use context::NavigationContext;
pub use coordinator::{NavigationCoordinator, RouteWatcher};
pub use deeplink::{infer_param, DeepLinkTranslator};
pub use error::{NavError, Result};
pub use feature::{RoutableFeature, RouteRegistrar};
pub use param::ParamValue;
pub use registry::{route_factory, RouteFactory, RouteRegistry};
pub use route::{PresentationStyle, Route, RouteParams, RouteSource};
pub use view::RouteView;
