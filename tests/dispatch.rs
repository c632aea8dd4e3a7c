use switchyard::{bindable, BoxError, BoxHandler, HttpRouter, Method, Request, Response};

use http::header::{HeaderValue, CONTENT_TYPE};
use http::StatusCode;
use serde_json::json;

#[derive(Debug, Default, serde::Serialize)]
struct Comment {
    share_id: u64,
    author: i64,
    body: String,
}

bindable! {
    Comment {
        share_id: u64,
        author: i64 => "author_id",
        body: String,
    }
}

fn create_comment(req: &Request, res: &mut Response) -> Result<(), BoxError> {
    let comment: Comment = req.bind()?;
    res.json_with_status(&comment, StatusCode::CREATED)?;
    Ok(())
}

fn show_file(req: &Request, res: &mut Response) -> Result<(), BoxError> {
    let path = req.params().get("path").unwrap_or_default();
    res.set_content_type("text/plain").write("file: ").write(path);
    Ok(())
}

fn about(req: &Request, res: &mut Response) -> Result<(), BoxError> {
    assert!(req.params().is_empty());
    res.add_header("x-page", HeaderValue::from_static("about"))
        .write("about");
    Ok(())
}

fn router() -> HttpRouter<BoxHandler> {
    let mut router: HttpRouter<BoxHandler> = HttpRouter::new();
    router
        .post("/shares/:share_id:ulong/comments", create_comment)
        .get("/files/*path", show_file)
        .get("/files/about", about);
    router
}

#[test]
fn dispatch_binds_captures() {
    let router = router();

    let mut req = Request::new(Method::POST, "/shares/42/comments?author_id=7")
        .with_body("application/json", r#"{"body": "nice", "share_id": 1}"#);
    let mut res = Response::new();
    router.dispatch(&mut req, &mut res).unwrap().unwrap();

    assert_eq!(req.params().get("share_id"), Some("42"));
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(
        res.headers().get(CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
    assert_eq!(body, json!({"share_id": 42, "author": 7, "body": "nice"}));
}

#[test]
fn dispatch_bind_failure() {
    let router = router();

    let mut req = Request::new(Method::POST, "/shares/42/comments?author_id=x");
    let mut res = Response::new();
    let err = router.dispatch(&mut req, &mut res).unwrap().unwrap_err();

    let err = err.downcast_ref::<switchyard::BindError>().unwrap();
    assert_eq!(err.param(), Some("author_id"));
    assert!(res.body().is_empty());
}

#[test]
fn dispatch_static_first() {
    let router = router();

    let mut req = Request::new(Method::GET, "/files/about");
    let mut res = Response::new();
    router.dispatch(&mut req, &mut res).unwrap().unwrap();
    assert_eq!(res.body(), b"about");
    assert_eq!(res.headers().get("x-page").unwrap(), "about");

    let mut req = Request::new(Method::GET, "/files/docs/readme.md");
    let mut res = Response::new();
    router.dispatch(&mut req, &mut res).unwrap().unwrap();
    assert_eq!(res.body(), b"file: docs/readme.md");
}

#[test]
fn dispatch_no_match() {
    let router = router();

    let mut res = Response::new();
    for (method, path) in [
        (Method::GET, "/shares/42/comments"),
        (Method::POST, "/shares/abc/comments"),
        (Method::GET, "/files/"),
        (Method::PATCH, "/files/about"),
    ]
    .iter()
    {
        let mut req = Request::new(method.clone(), *path);
        assert!(router.dispatch(&mut req, &mut res).is_none());
    }
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.body().is_empty());
}

#[test]
fn dispatch_resets_params() {
    let router = router();

    let mut req = Request::new(Method::GET, "/files/a/b");
    let mut res = Response::new();
    router.dispatch(&mut req, &mut res).unwrap().unwrap();
    assert_eq!(req.params().get("path"), Some("a/b"));

    req.set_params(vec![("stale", "1")].into_iter().collect());
    let mut req = req.clone();
    assert!(router.dispatch(&mut req, &mut res).is_some());
    assert!(req.params().get("stale").is_none());
}

#[test]
fn json_round_trip() {
    let value = json!({
        "id": 1,
        "tags": ["a", "b"],
        "nested": {"ok": true, "ratio": 0.5, "none": null},
        "text": "quote \" and unicode \u{e9}",
    });

    let mut res = Response::new();
    res.write("discarded");
    res.json(&value).unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let parsed: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
    assert_eq!(parsed, value);

    let http_res = res.into_http();
    assert_eq!(http_res.headers()[CONTENT_TYPE], "application/json");
}
