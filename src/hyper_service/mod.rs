#![forbid(unsafe_code)]

mod config;
mod service;
mod service_macro;

pub use self::config::ServiceConfig;
pub use self::service::RouterService;

use std::future::Future;
use std::pin::Pin;

type HyperRequest = hyper::Request<hyper::Body>;
type HyperResponse = hyper::Response<hyper::Body>;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
