//! Route module: navigation intents and their typed parameters
//!
//! A [`Route`] is built once per navigation and never mutated afterwards.
//! The builder methods consume `self` and hand back a new value, so the
//! only way to change a route is to construct another one.

mod style;

pub use style::{PresentationStyle, RouteSource};

use crate::error::{NavError, Result};
use crate::param::ParamValue;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use std::any::{Any, TypeId};
use std::collections::BTreeMap;

/// Named parameters carried by a route
pub type RouteParams = BTreeMap<String, ParamValue>;

/// An immutable navigation intent
///
/// Equality and hashing cover all four fields. For list or map identity use
/// [`Route::id`], which is the path alone.
///
/// # Examples
///
/// ```
/// use rhtmx_navigator::{PresentationStyle, Route, RouteSource};
///
/// let route = Route::new("/booking")
///     .with_param("id", 555)
///     .with_param("confirmed", true)
///     .with_presentation(PresentationStyle::Sheet);
///
/// assert_eq!(route.int("id"), Some(555));
/// assert_eq!(route.bool("confirmed"), Some(true));
/// assert_eq!(route.source(), RouteSource::InApp);
/// assert_eq!(route.string("id"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    #[serde(deserialize_with = "non_empty_path")]
    path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    params: Option<RouteParams>,
    source: RouteSource,
    presentation: PresentationStyle,
}

impl Route {
    /// Creates an in-app, pushed route with no parameters
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: None,
            source: RouteSource::default(),
            presentation: PresentationStyle::default(),
        }
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Replaces the parameter map
    pub fn with_params(mut self, params: RouteParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Adds one parameter; a repeated key keeps the last value
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params
            .get_or_insert_with(RouteParams::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_source(mut self, source: RouteSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_presentation(mut self, presentation: PresentationStyle) -> Self {
        self.presentation = presentation;
        self
    }

    // ========================================================================
    // Fields
    // ========================================================================

    /// Identity key for collections: the path alone
    pub fn id(&self) -> &str {
        &self.path
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> Option<&RouteParams> {
        self.params.as_ref()
    }

    pub fn source(&self) -> RouteSource {
        self.source
    }

    pub fn presentation(&self) -> PresentationStyle {
        self.presentation
    }

    /// Raw parameter lookup
    pub fn param(&self, key: &str) -> Option<&ParamValue> {
        self.params.as_ref()?.get(key)
    }

    // ========================================================================
    // Typed Accessors
    // ========================================================================

    /// Reads a parameter as `T`
    ///
    /// - Scalar variants come back only when `T` is their own type
    ///   (`String`, `i64`, `f64`, `bool`).
    /// - `Object` payloads are deserialized into `T` as JSON.
    /// - Anything else, including a failed object decode, is `None`.
    ///
    /// Integer `0` and `1` also read as `false` / `true`, which keeps
    /// `?flag=1` usable through [`Route::bool`] after deep-link inference
    /// has stored it as an integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_navigator::{ParamValue, Route};
    /// use std::collections::HashMap;
    ///
    /// let route = Route::new("/hotel/details")
    ///     .with_param("hotel", ParamValue::json(&HashMap::from([("id", "H001")])).unwrap());
    ///
    /// let hotel: Option<HashMap<String, String>> = route.value("hotel");
    /// assert_eq!(hotel.unwrap()["id"], "H001");
    /// ```
    pub fn value<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned + 'static,
    {
        let param = self.param(key)?;
        let wanted = TypeId::of::<T>();

        let scalar: Box<dyn Any> = match param {
            ParamValue::Object(bytes) => return serde_json::from_slice(bytes).ok(),
            ParamValue::String(s) if wanted == TypeId::of::<String>() => Box::new(s.clone()),
            ParamValue::Int(i) if wanted == TypeId::of::<i64>() => Box::new(*i),
            ParamValue::Double(d) if wanted == TypeId::of::<f64>() => Box::new(*d),
            ParamValue::Bool(b) if wanted == TypeId::of::<bool>() => Box::new(*b),
            ParamValue::Int(i @ (0 | 1)) if wanted == TypeId::of::<bool>() => Box::new(*i == 1),
            _ => return None,
        };

        scalar.downcast::<T>().ok().map(|boxed| *boxed)
    }

    pub fn string(&self, key: &str) -> Option<String> {
        self.value(key)
    }

    pub fn int(&self, key: &str) -> Option<i64> {
        self.value(key)
    }

    pub fn double(&self, key: &str) -> Option<f64> {
        self.value(key)
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        self.value(key)
    }

    /// Same as [`Route::value`], named for object payloads
    pub fn decode<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned + 'static,
    {
        self.value(key)
    }

    // ========================================================================
    // Wire Form
    // ========================================================================

    /// Serializes to `{path, params?, source, presentation}` JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| NavError::Encoding(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(NavError::from)
    }
}

fn non_empty_path<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let path = String::deserialize(deserializer)?;
    if path.is_empty() {
        return Err(de::Error::custom("route path must not be empty"));
    }
    Ok(path)
}
