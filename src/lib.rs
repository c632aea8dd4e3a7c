//! Request routing with typed captures, and binding of request data into records.
//!
//! ```
//! use switchyard::{bindable, BoxError, BoxHandler, HttpRouter, Method, Request, Response};
//!
//! #[derive(Debug, Default)]
//! struct Share {
//!     id: u64,
//!     author: i64,
//! }
//!
//! bindable! {
//!     Share {
//!         id: u64,
//!         author: i64 => "author_id",
//!     }
//! }
//!
//! fn get_share(req: &Request, res: &mut Response) -> Result<(), BoxError> {
//!     let share: Share = req.bind()?;
//!     res.write(format!("share {} by {}", share.id, share.author));
//!     Ok(())
//! }
//!
//! let mut router: HttpRouter<BoxHandler> = HttpRouter::new();
//! router.get("/api/v1/shares/:id:ulong", get_share);
//!
//! let mut req = Request::new(Method::GET, "/api/v1/shares/42?author_id=7");
//! let mut res = Response::new();
//! router.dispatch(&mut req, &mut res).unwrap().unwrap();
//! assert_eq!(res.body(), b"share 42 by 7");
//! ```

#![forbid(unsafe_code)]

pub mod bind;
pub mod coerce;

mod handler;
mod http_router;
mod params;
mod request;
mod response;
mod router;

#[cfg(feature = "hyper-service")]
mod hyper_service;

pub use crate::bind::{bind, BindError, Bindable, FieldSpec};
pub use crate::coerce::{Value, ValueKind};
pub use crate::handler::{BoxError, BoxHandler, Handler};
pub use crate::http_router::{is_routable, HttpRouter, Method, METHODS};
pub use crate::params::Params;
pub use crate::request::{Form, FormField, FormFile, QueryMap, Request};
pub use crate::response::Response;
pub use crate::router::{Captures, Pattern, Router, RouterError, Segment};

#[cfg(feature = "hyper-service")]
pub use crate::hyper_service::{RouterService, ServiceConfig};
