/// Builds an [`HttpRouter`](crate::HttpRouter) from `METHOD "pattern" => data` entries,
/// registered in the order written.
#[macro_export]
macro_rules! http_router {
    {@entry $router:expr, GET, $pattern:expr, $data:expr} => {
        $router.insert($crate::Method::GET, $pattern, $data)
    };
    {@entry $router:expr, POST, $pattern:expr, $data:expr} => {
        $router.insert($crate::Method::POST, $pattern, $data)
    };
    {@entry $router:expr, PUT, $pattern:expr, $data:expr} => {
        $router.insert($crate::Method::PUT, $pattern, $data)
    };
    {@entry $router:expr, DELETE, $pattern:expr, $data:expr} => {
        $router.insert($crate::Method::DELETE, $pattern, $data)
    };

    {$($method:tt $pattern:expr => $data:expr),+ $(,)?} => {{
        let mut __router = $crate::HttpRouter::new();
        $($crate::http_router!(@entry __router, $method, $pattern, $data);)+
        __router
    }};
}
