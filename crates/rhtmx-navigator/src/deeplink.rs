// File: src/deeplink.rs
// Purpose: Translate external URLs into routes

use crate::config::DeepLinkConfig;
use crate::param::ParamValue;
use crate::route::{PresentationStyle, Route, RouteParams, RouteSource};
use std::borrow::Cow;
use tracing::{debug, warn};
use url::Url;

const BOOL_WORDS: [&str; 6] = ["true", "false", "yes", "no", "1", "0"];
const TRUE_WORDS: [&str; 3] = ["true", "yes", "1"];

/// Turns deep-link URLs into [`Route`]s
///
/// The URL host names the route and the URL path is appended to it:
/// `bookify://hotel/details?id=101` becomes `/hotel/details` with an
/// integer `id` parameter. Deep links always arrive with
/// [`RouteSource::Deeplink`] and [`PresentationStyle::Push`].
///
/// A URL without a host is not navigable and yields `None`.
///
/// # Examples
///
/// ```
/// use rhtmx_navigator::DeepLinkTranslator;
///
/// let translator = DeepLinkTranslator::new();
/// let route = translator.translate_str("bookify://profile?vip=yes").unwrap();
/// assert_eq!(route.path(), "/profile");
/// assert_eq!(route.bool("vip"), Some(true));
///
/// assert!(translator.translate_str("bookify://").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeepLinkTranslator {
    config: DeepLinkConfig,
}

impl DeepLinkTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DeepLinkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DeepLinkConfig {
        &self.config
    }

    /// Parses `url` and translates it; unparsable text is ignored
    pub fn translate_str(&self, url: &str) -> Option<Route> {
        match Url::parse(url) {
            Ok(parsed) => self.translate(&parsed),
            Err(e) => {
                debug!("Ignoring unparsable deep link {:?}: {}", url, e);
                None
            }
        }
    }

    /// Translates a parsed URL into a route, or `None` if it is not navigable
    pub fn translate(&self, url: &Url) -> Option<Route> {
        if !self.config.enabled {
            debug!("Deep links disabled, ignoring {}", url);
            return None;
        }

        if !self.config.accepts_scheme(url.scheme()) {
            warn!("Ignoring deep link with unaccepted scheme '{}': {}", url.scheme(), url);
            return None;
        }

        let host = match url.host_str().filter(|host| !host.is_empty()) {
            Some(host) => host,
            None => {
                debug!("Ignoring deep link without host: {}", url);
                return None;
            }
        };

        let mut route = Route::new(route_path(host, url.path()))
            .with_source(RouteSource::Deeplink)
            .with_presentation(PresentationStyle::Push);

        if url.query().is_some() {
            let params: RouteParams = url
                .query_pairs()
                .filter_map(|(name, raw)| infer_param(&raw).map(|value| (name.into_owned(), value)))
                .collect();
            route = route.with_params(params);
        }

        debug!("Deep link {} -> {}", url, route.path());
        Some(route)
    }
}

/// Infers a typed value from a raw query-string value
///
/// The value is trimmed, and the lower-cased copy decides the type:
/// integer, then float, then one of `true/false/yes/no/1/0`. Anything else
/// is kept as a string with its original casing. Blank values give `None`.
///
/// # Examples
///
/// ```
/// use rhtmx_navigator::{infer_param, ParamValue};
///
/// assert_eq!(infer_param(" 42 "), Some(ParamValue::Int(42)));
/// assert_eq!(infer_param("4.9"), Some(ParamValue::Double(4.9)));
/// assert_eq!(infer_param("No"), Some(ParamValue::Bool(false)));
/// assert_eq!(infer_param("OceanView"), Some(ParamValue::from("OceanView")));
/// assert_eq!(infer_param("   "), None);
/// ```
pub fn infer_param(raw: &str) -> Option<ParamValue> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let lowered = trimmed.to_lowercase();

    if let Ok(int) = lowered.parse::<i64>() {
        return Some(ParamValue::Int(int));
    }

    if let Ok(double) = lowered.parse::<f64>() {
        return Some(ParamValue::Double(double));
    }

    if BOOL_WORDS.contains(&lowered.as_str()) {
        return Some(ParamValue::Bool(TRUE_WORDS.contains(&lowered.as_str())));
    }

    Some(ParamValue::String(trimmed.to_string()))
}

/// `/host` plus the URL path, unless that path is empty or just `/`
fn route_path(host: &str, url_path: &str) -> String {
    let mut path = format!("/{}", percent_decode(host));

    let extra = percent_decode(url_path);
    if !extra.is_empty() && extra != "/" {
        path.push_str(&extra);
    }

    path
}

fn percent_decode(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}
