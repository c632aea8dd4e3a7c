use http::header::{HeaderMap, HeaderValue, IntoHeaderName, CONTENT_TYPE};
use http::StatusCode;
use serde::Serialize;

/// The output side handed to a handler.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

impl Response {
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    pub fn set_status(&mut self, status: StatusCode) -> &mut Self {
        self.status = status;
        self
    }

    pub fn add_header<K: IntoHeaderName>(&mut self, name: K, value: HeaderValue) -> &mut Self {
        self.headers.append(name, value);
        self
    }

    pub fn set_content_type(&mut self, content_type: &'static str) -> &mut Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        self
    }

    /// Appends to the body.
    pub fn write(&mut self, data: impl AsRef<[u8]>) -> &mut Self {
        self.body.extend_from_slice(data.as_ref());
        self
    }

    /// Replaces the body with `value` as JSON, status 200.
    pub fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<&mut Self, serde_json::Error> {
        self.json_with_status(value, StatusCode::OK)
    }

    pub fn json_with_status<T: Serialize + ?Sized>(
        &mut self,
        value: &T,
        status: StatusCode,
    ) -> Result<&mut Self, serde_json::Error> {
        let body = serde_json::to_vec(value)?;
        self.body = body;
        self.status = status;
        Ok(self.set_content_type(crate::request::APPLICATION_JSON))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_http(self) -> http::Response<Vec<u8>> {
        let mut res = http::Response::new(self.body);
        *res.status_mut() = self.status;
        *res.headers_mut() = self.headers;
        res
    }
}
