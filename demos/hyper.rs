use switchyard::{bindable, router_service, BoxError, Request, Response};

use std::convert::Infallible as Never;
use std::net::SocketAddr;

use hyper::service::make_service_fn;
use hyper::StatusCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, serde::Serialize)]
struct Share {
    id: u64,
    author: i64,
    title: String,
}

bindable! {
    Share {
        id: u64,
        author: i64 => "author_id",
        title: String,
    }
}

fn not_found(req: &Request, res: &mut Response) -> Result<(), Never> {
    tracing::info!(method = %req.method(), path = req.path(), "not found");
    res.set_status(StatusCode::NOT_FOUND).write("404 Not Found");
    Ok(())
}

fn hello(req: &Request, res: &mut Response) -> Result<(), Never> {
    let name = req.params().get("name").unwrap_or("nobody");
    res.write(format!("hello, {}!", name));
    Ok(())
}

fn file(req: &Request, res: &mut Response) -> Result<(), Never> {
    let path = req.params().get("filepath").unwrap_or_default();
    res.write(format!("access file: {}", path));
    Ok(())
}

fn show_share(req: &Request, res: &mut Response) -> Result<(), BoxError> {
    let share: Share = req.bind()?;
    res.json(&share)?;
    Ok(())
}

fn create_share(req: &Request, res: &mut Response) -> Result<(), BoxError> {
    let share: Share = req.bind()?;
    res.json_with_status(&share, StatusCode::CREATED)?;
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let router = router_service! {
        GET "/hello/:name" => hello,
        GET "/api/v1/file/*filepath" => file,
        GET "/api/v1/shares/:id:ulong" => show_share,
        POST "/api/v1/shares" => create_share;
        _ => not_found
    };

    let make = make_service_fn(move |_| {
        let svc = router.clone();
        async move { Ok::<_, Never>(svc) }
    });

    let addr: SocketAddr = ([127, 0, 0, 1], 3000).into();

    let server = hyper::Server::bind(&addr).serve(make);

    println!("Server is listening on: http://{}", addr);
    println!("hello: http://{}/hello/world", addr);
    println!("api: http://{}/api/v1/file/path/to/public/file", addr);
    println!("share: http://{}/api/v1/shares/42?author_id=7", addr);
    println!("404: http://{}/other/path", addr);
    println!();

    if let Err(e) = server.await {
        tracing::error!(error = %e, "server error");
    }
}
