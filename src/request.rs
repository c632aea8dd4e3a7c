//! The read-only view of an incoming request that routing and binding need.

use crate::bind::{bind, BindError, Bindable};
use crate::params::Params;

use http::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use http::request::Parts;
use http::Method;

pub const APPLICATION_JSON: &str = "application/json";
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Decoded `key=value` pairs of a query string or url-encoded body.
///
/// Lookups return the first occurrence of a key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    pairs: Vec<(String, String)>,
}

impl QueryMap {
    pub fn parse(input: &[u8]) -> Self {
        let pairs = url::form_urlencoded::parse(input)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find_map(|(k, v)| if k == key { Some(v.as_str()) } else { None })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> std::iter::FromIterator<(K, V)> for QueryMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let pairs = iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { pairs }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFile {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    Text(String),
    File(FormFile),
}

/// Fields of a decoded `multipart/form-data` body.
///
/// Decoding the multipart body is left to the transport; it hands the
/// result over with [`Request::with_form`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    fields: Vec<(String, FormField)>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields
            .push((name.into(), FormField::Text(value.into())));
        self
    }

    pub fn file(mut self, name: impl Into<String>, file: FormFile) -> Self {
        self.fields.push((name.into(), FormField::File(file)));
        self
    }

    pub fn get(&self, name: &str) -> Option<&FormField> {
        self.fields
            .iter()
            .find_map(|(n, f)| if n == name { Some(f) } else { None })
    }

    /// The scalar value of `name`; file fields read as absent.
    pub fn get_text(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            FormField::Text(s) => Some(s),
            FormField::File(_) => None,
        }
    }

    pub fn get_file(&self, name: &str) -> Option<&FormFile> {
        match self.get(name)? {
            FormField::File(f) => Some(f),
            FormField::Text(_) => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormField)> + '_ {
        self.fields.iter().map(|(n, f)| (n.as_str(), f))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    path: String,
    query: QueryMap,
    headers: HeaderMap,
    body: Vec<u8>,
    posted: QueryMap,
    form: Form,
    params: Params,
}

impl Request {
    /// `target` is a path with an optional `?query`.
    pub fn new(method: Method, target: &str) -> Self {
        let (path, query) = match target.find('?') {
            Some(i) => (&target[..i], &target[i + 1..]),
            None => (target, ""),
        };
        Self {
            method,
            path: path.to_owned(),
            query: QueryMap::parse(query.as_bytes()),
            headers: HeaderMap::new(),
            body: Vec::new(),
            posted: QueryMap::default(),
            form: Form::default(),
            params: Params::empty(),
        }
    }

    pub fn from_parts(parts: Parts, body: Vec<u8>) -> Self {
        let query = parts.uri.query().unwrap_or("");
        let mut req = Self {
            method: parts.method,
            path: parts.uri.path().to_owned(),
            query: QueryMap::parse(query.as_bytes()),
            headers: parts.headers,
            body: Vec::new(),
            posted: QueryMap::default(),
            form: Form::default(),
            params: Params::empty(),
        };
        req.set_body(body);
        req
    }

    /// Sets the body and its `Content-Type`.
    ///
    /// A content type that is not a valid header value is dropped.
    pub fn with_body(mut self, content_type: &str, body: impl Into<Vec<u8>>) -> Self {
        match HeaderValue::from_str(content_type) {
            Ok(value) => {
                self.headers.insert(CONTENT_TYPE, value);
            }
            Err(_) => {
                self.headers.remove(CONTENT_TYPE);
            }
        }
        self.set_body(body.into());
        self
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        let is_content_type = name == CONTENT_TYPE;
        self.headers.insert(name, value);
        if is_content_type {
            let body = std::mem::take(&mut self.body);
            self.set_body(body);
        }
        self
    }

    pub fn with_form(mut self, form: Form) -> Self {
        self.form = form;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &QueryMap {
        &self.query
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE)?.to_str().ok()
    }

    pub fn is_json(&self) -> bool {
        self.media_type_is(APPLICATION_JSON)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Parameters of an `application/x-www-form-urlencoded` body.
    pub fn posted(&self) -> &QueryMap {
        &self.posted
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Path captures of the route that matched this request.
    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn set_params(&mut self, params: Params) {
        self.params = params;
    }

    pub fn bind<R: Bindable>(&self) -> Result<R, BindError> {
        bind(self)
    }
}

impl Request {
    fn set_body(&mut self, body: Vec<u8>) {
        self.posted = if self.media_type_is(FORM_URLENCODED) {
            QueryMap::parse(&body)
        } else {
            QueryMap::default()
        };
        self.body = body;
    }

    fn media_type_is(&self, expected: &str) -> bool {
        match self.content_type() {
            Some(ct) => {
                let media_type = ct.split(';').next().unwrap_or("").trim();
                media_type.eq_ignore_ascii_case(expected)
            }
            None => false,
        }
    }
}
