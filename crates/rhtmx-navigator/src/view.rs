// File: src/view.rs
// Purpose: View types the navigator can render destinations into

use maud::{html, Markup};

/// A view produced by a route factory
///
/// The only thing the navigator needs from a view type is a stand-in for
/// paths that have nothing registered.
pub trait RouteView {
    fn not_found(path: &str) -> Self;
}

impl RouteView for Markup {
    fn not_found(path: &str) -> Self {
        html! {
            div.route-not-found role="alert" {
                "Route not found: " (path)
            }
        }
    }
}

impl RouteView for String {
    fn not_found(path: &str) -> Self {
        format!("Route not found: {}", path)
    }
}
