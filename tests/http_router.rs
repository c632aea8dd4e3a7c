use switchyard::{http_router, is_routable, HttpRouter, Method};

#[test]
fn http_router_macro() {
    let router: HttpRouter<i32> = http_router! {
        GET "/u/:uid/p/:pid" => 1i32,
        POST "/u/:uid/p" => 2,
        GET "/v1/info" => 3,
        PUT "/v1/info" => 4,
        DELETE "/v1/u/:uid:ulong" => 5,
        GET "/static/*file" => 6,
    };

    assert_eq!(*router.find(&Method::GET, "/u/asd/p/qwe").unwrap().0, 1);
    assert_eq!(*router.find(&Method::POST, "/u/asd/p").unwrap().0, 2);
    assert_eq!(*router.find(&Method::GET, "/v1/info").unwrap().0, 3);
    assert_eq!(*router.find(&Method::PUT, "/v1/info").unwrap().0, 4);
    assert_eq!(*router.find(&Method::DELETE, "/v1/u/9").unwrap().0, 5);

    let (data, caps) = router.find(&Method::GET, "/static/css/site.css").unwrap();
    assert_eq!(*data, 6);
    assert_eq!(caps.get("file"), Some("css/site.css"));

    assert!(router.find(&Method::POST, "/v1/info").is_none());
    assert!(router.find(&Method::DELETE, "/v1/u/me").is_none());
    assert!(router.find(&Method::HEAD, "/v1/info").is_none());
}

#[test]
fn http_router_methods() {
    assert!(is_routable(&Method::GET));
    assert!(is_routable(&Method::DELETE));
    assert!(!is_routable(&Method::PATCH));

    let mut router: HttpRouter<i32> = HttpRouter::new();
    let err = router.try_insert(Method::PATCH, "/u", 1).unwrap_err();
    assert_eq!(err.message(), "method is not routable");
    assert!(router.router(&Method::PATCH).is_none());

    assert!(router.try_insert(Method::GET, "/u/:", 1).is_err());
    assert!(router.try_insert(Method::GET, "/u/:id", 1).is_ok());
    assert_eq!(router.router(&Method::GET).unwrap().len(), 1);
}
