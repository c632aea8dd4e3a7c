/// Registers handlers like [`http_router!`](crate::http_router) and, with a
/// trailing `; _ => default`, turns the router into a [`RouterService`](crate::RouterService).
#[macro_export]
macro_rules! router_service {
    {@entry $router:expr, GET, $pattern:expr, $data:expr} => {
        $router.get($pattern, $data)
    };
    {@entry $router:expr, POST, $pattern:expr, $data:expr} => {
        $router.post($pattern, $data)
    };
    {@entry $router:expr, PUT, $pattern:expr, $data:expr} => {
        $router.put($pattern, $data)
    };
    {@entry $router:expr, DELETE, $pattern:expr, $data:expr} => {
        $router.delete($pattern, $data)
    };

    {$($method:tt $pattern:expr => $data:expr),+ ; _ => $default:expr} => {{
        let mut __router: $crate::HttpRouter<$crate::BoxHandler> = $crate::HttpRouter::new();
        $($crate::router_service!(@entry __router, $method, $pattern, $data);)+
        __router.with_default($default)
    }};

    {$($method:tt $pattern:expr => $data:expr),+ $(,)?} => {{
        let mut __router: $crate::HttpRouter<$crate::BoxHandler> = $crate::HttpRouter::new();
        $($crate::router_service!(@entry __router, $method, $pattern, $data);)+
        __router
    }};
}
