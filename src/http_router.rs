mod router_macro;

use crate::router::{Captures, Router, RouterError};

use std::collections::HashMap;

pub use http::Method;

/// Methods that can be routed.
pub const METHODS: [Method; 4] = [Method::GET, Method::POST, Method::PUT, Method::DELETE];

/// One [`Router`] per method.
///
/// Tables are meant to be filled once at startup and then shared read-only.
#[derive(Debug)]
pub struct HttpRouter<T> {
    method_map: HashMap<Method, Router<T>>,
}

impl<T> Default for HttpRouter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HttpRouter<T> {
    pub fn new() -> Self {
        Self {
            method_map: HashMap::new(),
        }
    }

    pub fn find<'s, 'p>(&'s self, method: &Method, path: &'p str) -> Option<(&'s T, Captures<'p>)>
    where
        's: 'p,
    {
        self.method_map.get(method)?.find(path)
    }

    /// Panics if the method is not routable or the pattern is invalid.
    pub fn insert(&mut self, method: Method, pattern: &str, data: T) -> &mut Self {
        if let Err(e) = self.try_insert(method, pattern, data) {
            panic!("{}", e);
        }
        self
    }

    pub fn try_insert(
        &mut self,
        method: Method,
        pattern: &str,
        data: T,
    ) -> Result<&mut Self, RouterError> {
        if !is_routable(&method) {
            return Err(RouterError::new("method is not routable", pattern));
        }
        self.access_router(method).try_insert(pattern, data)?;
        Ok(self)
    }

    pub fn router(&self, method: &Method) -> Option<&Router<T>> {
        self.method_map.get(method)
    }
}

impl<T> HttpRouter<T> {
    fn access_router(&mut self, method: Method) -> &mut Router<T> {
        self.method_map.entry(method).or_insert_with(Router::new)
    }
}

pub fn is_routable(method: &Method) -> bool {
    METHODS.contains(method)
}
