//! Populating a record from the data of a request.
//!
//! Every non-ignored field is looked up by its param name in, in order:
//! 1. the path captures of the matched route
//! 2. the query string
//! 3. the JSON body, when the content type is `application/json`
//! 4. the url-encoded body
//! 5. the scalar fields of a multipart form
//!
//! The first source holding the key wins. Fields found nowhere keep their
//! default value. A value that does not coerce to the field's kind fails the
//! whole bind.

mod macros;

use crate::coerce::{Value, ValueKind};
use crate::request::Request;

use std::borrow::Cow;

use serde_json::{Map, Value as JsonValue};

/// Binding metadata of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name in the record.
    pub field: &'static str,
    /// Key looked up in the request.
    pub param: &'static str,
    pub kind: ValueKind,
    pub ignored: bool,
}

impl FieldSpec {
    pub const fn new(field: &'static str, kind: ValueKind) -> Self {
        Self {
            field,
            param: field,
            kind,
            ignored: false,
        }
    }

    pub const fn rename(mut self, param: &'static str) -> Self {
        self.param = param;
        self
    }

    pub const fn ignore(mut self) -> Self {
        self.ignored = true;
        self
    }
}

/// A record that can be filled by [`bind`].
///
/// Usually implemented with [`bindable!`](crate::bindable).
pub trait Bindable: Default {
    fn field_specs() -> &'static [FieldSpec];

    /// Stores `value` into `field`; returns `false` if it does not fit.
    fn assign(&mut self, field: &str, value: Value) -> bool;
}

#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error("Invalid JSON")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Failed to parse \"{param}\". Invalid content")]
    InvalidField { param: &'static str },
}

impl BindError {
    /// The param name of the failing field, if any.
    pub fn param(&self) -> Option<&'static str> {
        match self {
            Self::InvalidJson(_) => None,
            Self::InvalidField { param } => Some(*param),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Path,
    Query,
    Json,
    Posted,
    Form,
}

/// Binds `R` from `req`, including the path captures published on it by
/// [`HttpRouter::dispatch`](crate::HttpRouter::dispatch).
pub fn bind<R: Bindable>(req: &Request) -> Result<R, BindError> {
    let sources = Sources::new(req).map_err(|e| {
        tracing::debug!(path = req.path(), error = %e, "binding failed");
        e
    })?;

    let mut record = R::default();

    for spec in R::field_specs() {
        if spec.ignored {
            continue;
        }

        let (source, raw) = match sources.lookup(spec.param) {
            Some(found) => found,
            None => continue,
        };
        tracing::trace!(field = spec.field, param = spec.param, ?source, "field resolved");

        let assigned = match spec.kind.coerce(&raw) {
            Ok(value) => record.assign(spec.field, value),
            Err(_) => false,
        };
        if !assigned {
            tracing::debug!(path = req.path(), param = spec.param, ?source, "binding failed");
            return Err(BindError::InvalidField { param: spec.param });
        }
    }

    Ok(record)
}

struct Sources<'a> {
    req: &'a Request,
    json: Option<Map<String, JsonValue>>,
}

impl<'a> Sources<'a> {
    fn new(req: &'a Request) -> Result<Self, BindError> {
        let json = if req.is_json() && !req.body().is_empty() {
            match serde_json::from_slice::<JsonValue>(req.body()) {
                Ok(JsonValue::Object(map)) => Some(map),
                Ok(_) => None,
                Err(e) => return Err(BindError::InvalidJson(e)),
            }
        } else {
            None
        };
        Ok(Self { req, json })
    }

    fn lookup(&self, key: &str) -> Option<(Source, Cow<'a, str>)> {
        let req = self.req;
        if let Some(v) = req.params().get(key) {
            return Some((Source::Path, Cow::Borrowed(v)));
        }
        if let Some(v) = req.query().get(key) {
            return Some((Source::Query, Cow::Borrowed(v)));
        }
        if let Some(v) = self.json.as_ref().and_then(|map| map.get(key)) {
            if let Some(raw) = json_text(v) {
                return Some((Source::Json, Cow::Owned(raw)));
            }
        }
        if let Some(v) = req.posted().get(key) {
            return Some((Source::Posted, Cow::Borrowed(v)));
        }
        if let Some(v) = req.form().get_text(key) {
            return Some((Source::Form, Cow::Borrowed(v)));
        }
        None
    }
}

/// The raw text of a JSON field; `null` reads as absent.
fn json_text(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Array(_) | JsonValue::Object(_) => Some(value.to_string()),
    }
}
