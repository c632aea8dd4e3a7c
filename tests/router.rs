use switchyard::{Pattern, Router};

#[test]
fn router_common() {
    let mut router: Router<usize> = Router::new();
    router
        .insert("/user/:user_id/post/:post_id:ulong", 1)
        .insert("/user/:user_id/profile", 2)
        .insert("/user/:user_id/file/*path", 3)
        .insert("/user/:user_id", 4)
        .insert("/explore", 5)
        .insert("/pan/*", 6);

    let cases: &[(_, _, &[(&str, &str)])] = &[
        (
            "/user/asd/post/123",
            1,
            &[("user_id", "asd"), ("post_id", "123")],
        ),
        ("/user/asd/profile", 2, &[("user_id", "asd")]),
        (
            "/user/asd/file/home/asd/.bashrc",
            3,
            &[("user_id", "asd"), ("path", "home/asd/.bashrc")],
        ),
        ("/user/asd/", 4, &[("user_id", "asd")]),
        ("/explore", 5, &[]),
        ("/explore/", 5, &[]),
        ("/pan/home/asd", 6, &[]),
    ];

    for &(url, data, captures) in cases.iter() {
        let ret = router.find(url).unwrap();
        assert_eq!(*ret.0, data, "url = {:?}", url);
        assert_eq!(&*ret.1, captures, "url = {:?}", url);
    }

    assert!(router.find("/user/asd/post/abc").is_none());
    assert!(router.find("/user").is_none());
    // an anonymous wildcard also accepts an empty remainder
    assert_eq!(*router.find("/pan").unwrap().0, 6);
}

#[test]
fn router_single() {
    let mut router: Router<usize> = Router::new();
    router.insert("/hello/:name", 1);

    assert_eq!(*router.find("/hello/world").unwrap().0, 1);
    assert!(router.find("/hello/world/asd").is_none());
    assert!(router.find("/hello").is_none());
}

#[test]
fn router_static_before_dynamic() {
    let mut router: Router<usize> = Router::new();
    router.insert("/users/:name", 1);
    router.insert("/users/*rest", 2);
    router.insert("/users/me", 3);

    let (data, caps) = router.find("/users/me").unwrap();
    assert_eq!(*data, 3);
    assert!(caps.is_empty());

    assert_eq!(*router.find("/users/you").unwrap().0, 1);
}

#[test]
fn router_first_match_wins() {
    let mut router: Router<usize> = Router::new();
    router.insert("/u/:id:long", 1);
    router.insert("/u/:name", 2);

    assert_eq!(*router.find("/u/-42").unwrap().0, 1);
    assert_eq!(*router.find("/u/bob").unwrap().0, 2);

    let mut router: Router<usize> = Router::new();
    router.insert("/u/:name", 2);
    router.insert("/u/:id:long", 1);

    // registration order decides among overlapping patterns
    assert_eq!(*router.find("/u/-42").unwrap().0, 2);
}

#[test]
fn router_reorder_disjoint() {
    let patterns = [("/a/:id:ulong", 1), ("/b/*rest", 2), ("/a/:id/:slug", 3)];
    let paths = [("/a/7", 1), ("/b/x/y", 2), ("/a/7/hello", 3)];

    let mut forward: Router<usize> = Router::new();
    for &(p, d) in patterns.iter() {
        forward.insert(p, d);
    }
    let mut backward: Router<usize> = Router::new();
    for &(p, d) in patterns.iter().rev() {
        backward.insert(p, d);
    }

    for &(path, expected) in paths.iter() {
        assert_eq!(*forward.find(path).unwrap().0, expected);
        assert_eq!(*backward.find(path).unwrap().0, expected);
    }
}

#[test]
fn router_static_overwrite() {
    let mut router: Router<usize> = Router::new();
    router.insert("/about", 1);
    router.insert("/about/", 2);

    assert_eq!(router.len(), 1);
    assert_eq!(*router.find("/about").unwrap().0, 2);
}

#[test]
fn router_invalid_pattern() {
    let mut router: Router<usize> = Router::new();
    assert!(router.try_insert("/u/:", 1).is_err());
    assert!(router.try_insert("/u/:id:decimal", 1).is_err());
    assert!(router.try_insert("/u/*rest/p", 1).is_err());
    assert!(router.try_insert("/u/:id/p/:id", 1).is_err());
    assert!(router.is_empty());

    assert!(router.try_insert("/u/:id/p/:pid", 1).is_ok());
    assert_eq!(router.dynamic_patterns().count(), 1);
}

#[test]
#[should_panic(expected = "capture name can not be empty")]
fn router_insert_panics() {
    let mut router: Router<usize> = Router::new();
    router.insert("/u/:/p", 1);
}

#[test]
fn pattern_typed_capture() {
    let pattern = Pattern::parse("/api/v1/shares/:id:ulong").unwrap();

    let caps = pattern.matches("/api/v1/shares/42").unwrap();
    assert_eq!(&*caps, &[("id", "42")]);
    assert_eq!(caps.parse::<u64>("id").unwrap().unwrap(), 42);

    assert!(pattern.matches("/api/v1/shares/abc").is_none());
    assert!(pattern.matches("/api/v1/shares/-1").is_none());
    assert!(pattern.matches("/api/v1/shares").is_none());
}

#[test]
fn pattern_wildcard() {
    let pattern = Pattern::parse("/files/*path").unwrap();

    let caps = pattern.matches("/files/a/b/c").unwrap();
    assert_eq!(caps.get("path"), Some("a/b/c"));

    assert!(pattern.matches("/files/").is_none());
    assert!(pattern.matches("/files").is_none());
    assert!(pattern.matches("/other/a").is_none());

    let anonymous = Pattern::parse("/files/*").unwrap();
    assert!(anonymous.matches("/files/a/b").unwrap().is_empty());
}

#[test]
fn pattern_static_equality() {
    let patterns = ["/", "/a", "/a/b", "/a/b/", "a/b", "/a//b", "/b/a"];
    let paths = ["/", "", "/a", "/a/", "/a/b", "a/b", "/a/b/c", "/a//b", "/b/a"];

    for &p in patterns.iter() {
        let pattern = Pattern::parse(p).unwrap();
        assert!(pattern.is_static());
        for &q in paths.iter() {
            let expected = p.trim_matches('/') == q.trim_matches('/');
            assert_eq!(
                pattern.matches(q).is_some(),
                expected,
                "pattern = {:?}, path = {:?}",
                p,
                q
            );
        }
    }
}
