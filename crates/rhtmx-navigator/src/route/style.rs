use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a navigation intent came from
///
/// Serialized as `"inApp"` / `"deeplink"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RouteSource {
    /// Navigation requested by application code
    #[default]
    InApp,
    /// Navigation translated from an external URL
    Deeplink,
}

impl RouteSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteSource::InApp => "inApp",
            RouteSource::Deeplink => "deeplink",
        }
    }
}

impl fmt::Display for RouteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the destination of a route should be shown
///
/// The navigator only carries this hint; the host UI decides what a push
/// or a sheet looks like.
///
/// # Examples
///
/// ```
/// use rhtmx_navigator::PresentationStyle;
///
/// assert_eq!(PresentationStyle::default(), PresentationStyle::Push);
/// assert_eq!(PresentationStyle::FullScreen.as_str(), "fullScreen");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PresentationStyle {
    /// Pushed onto the current navigation stack
    #[default]
    Push,
    /// Partial-height sheet over the current view
    Sheet,
    /// Cover that hides the current view entirely
    FullScreen,
    /// Modal dialog
    Modal,
}

impl PresentationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresentationStyle::Push => "push",
            PresentationStyle::Sheet => "sheet",
            PresentationStyle::FullScreen => "fullScreen",
            PresentationStyle::Modal => "modal",
        }
    }
}

impl fmt::Display for PresentationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
