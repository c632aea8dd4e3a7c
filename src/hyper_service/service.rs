use super::{BoxFuture, HyperRequest, HyperResponse, ServiceConfig};
use crate::bind::BindError;
use crate::handler::{BoxHandler, Handler};
use crate::http_router::HttpRouter;
use crate::request::Request;
use crate::response::Response;

use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};

use hyper::body::HttpBody;
use hyper::service::Service;
use hyper::{Body, StatusCode};

struct Shared<H> {
    router: HttpRouter<H>,
    default: H,
}

/// Serves an [`HttpRouter`] of handlers over hyper.
///
/// Requests no route matches go to the default handler.
pub struct RouterService<H = BoxHandler> {
    shared: Arc<Shared<H>>,
    config: ServiceConfig,
}

impl<H> Clone for RouterService<H> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            config: self.config.clone(),
        }
    }
}

impl<H> Service<HyperRequest> for RouterService<H>
where
    H: Handler + Send + Sync + 'static,
{
    type Response = HyperResponse;
    type Error = hyper::Error;
    type Future = BoxFuture<'static, Result<HyperResponse, hyper::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: HyperRequest) -> Self::Future {
        let shared = Arc::clone(&self.shared);
        let config = self.config.clone();

        Box::pin(async move {
            let (parts, body) = req.into_parts();

            let body = match collect_body(body, config.max_body_size).await? {
                Some(body) => body,
                None => {
                    tracing::warn!(
                        method = %parts.method,
                        path = parts.uri.path(),
                        limit = config.max_body_size,
                        "request body too large"
                    );
                    let mut res = Response::new();
                    res.set_status(StatusCode::PAYLOAD_TOO_LARGE);
                    return Ok(into_hyper(res));
                }
            };

            let mut req = Request::from_parts(parts, body);
            let mut res = Response::new();

            let ret = match shared.router.dispatch(&mut req, &mut res) {
                Some(ret) => ret,
                None => shared.default.call(&req, &mut res),
            };

            if let Err(e) = ret {
                res = error_response(&req, &*e, &config);
            }

            Ok::<_, hyper::Error>(into_hyper(res))
        })
    }
}

impl<H> RouterService<H> {
    pub fn new(default: H) -> Self {
        Self::from_router(HttpRouter::new(), default)
    }

    pub fn from_router(router: HttpRouter<H>, default: H) -> Self {
        Self {
            shared: Arc::new(Shared { router, default }),
            config: ServiceConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn router(&self) -> &HttpRouter<H> {
        &self.shared.router
    }
}

impl HttpRouter<BoxHandler> {
    pub fn with_default(self, default: impl Handler + Send + Sync + 'static) -> RouterService {
        RouterService::from_router(self, Box::new(default))
    }

    /// Serves with a plain `404 Not Found` for unmatched requests.
    pub fn into_service(self) -> RouterService {
        self.with_default(not_found)
    }
}

fn not_found(_: &Request, res: &mut Response) -> Result<(), Infallible> {
    res.set_status(StatusCode::NOT_FOUND)
        .set_content_type("text/plain; charset=utf-8")
        .write("404 Not Found");
    Ok(())
}

fn error_response(
    req: &Request,
    err: &(dyn std::error::Error + Send + Sync + 'static),
    config: &ServiceConfig,
) -> Response {
    let mut res = Response::new();
    match err.downcast_ref::<BindError>() {
        Some(e) => {
            tracing::debug!(path = req.path(), error = %e, "rejecting request");
            res.set_status(StatusCode::BAD_REQUEST);
            if config.expose_bind_errors {
                res.set_content_type("text/plain; charset=utf-8")
                    .write(e.to_string());
            }
        }
        None => {
            tracing::error!(method = %req.method(), path = req.path(), error = %err, "handler failed");
            res.set_status(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
    res
}

/// `Ok(None)` once the body grows past `limit`.
async fn collect_body(mut body: Body, limit: usize) -> Result<Option<Vec<u8>>, hyper::Error> {
    let mut buf = Vec::new();
    while let Some(chunk) = body.data().await {
        let chunk = chunk?;
        if buf.len() + chunk.len() > limit {
            return Ok(None);
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(Some(buf))
}

fn into_hyper(res: Response) -> HyperResponse {
    res.into_http().map(Body::from)
}
