use crate::http_router::{HttpRouter, Method};
use crate::params::Params;
use crate::request::Request;
use crate::response::Response;

use std::error::Error as StdError;

pub type BoxError = Box<dyn StdError + Send + Sync>;

pub trait Handler {
    fn call(&self, req: &Request, res: &mut Response) -> Result<(), BoxError>;
}

pub type BoxHandler = Box<dyn Handler + Send + Sync>;

impl Handler for BoxHandler {
    fn call(&self, req: &Request, res: &mut Response) -> Result<(), BoxError> {
        Handler::call(&**self, req, res)
    }
}

impl<F, E> Handler for F
where
    F: Fn(&Request, &mut Response) -> Result<(), E>,
    E: Into<BoxError>,
{
    fn call(&self, req: &Request, res: &mut Response) -> Result<(), BoxError> {
        (self)(req, res).map_err(Into::into)
    }
}

impl HttpRouter<BoxHandler> {
    /// Registers `h`. See [`Router`](crate::Router) for the order patterns are tried in.
    pub fn route(
        &mut self,
        method: Method,
        pattern: &str,
        h: impl Handler + Send + Sync + 'static,
    ) -> &mut Self {
        self.insert(method, pattern, Box::new(h))
    }
}

impl<H: Handler> HttpRouter<H> {
    /// Finds the handler for `req`, publishes the captures on it and calls the handler.
    ///
    /// Returns `None` when no route matches; nothing is written to `res` then.
    pub fn dispatch(&self, req: &mut Request, res: &mut Response) -> Option<Result<(), BoxError>> {
        req.set_params(Params::empty());

        let (handler, params) = match self.find(req.method(), req.path()) {
            Some((h, caps)) => (h, Params::from(&caps)),
            None => {
                tracing::trace!(method = %req.method(), path = req.path(), "no route matched");
                return None;
            }
        };
        tracing::trace!(
            method = %req.method(),
            path = req.path(),
            captures = params.len(),
            "route matched"
        );

        req.set_params(params);
        Some(handler.call(req, res))
    }
}

macro_rules! define_method {
    ($name:tt, $method:tt) => {
        pub fn $name(&mut self, pattern: &str, h: impl Handler + Send + Sync + 'static) -> &mut Self {
            self.route(Method::$method, pattern, h)
        }
    };
}

impl HttpRouter<BoxHandler> {
    define_method!(get, GET);
    define_method!(post, POST);
    define_method!(put, PUT);
    define_method!(delete, DELETE);
}
