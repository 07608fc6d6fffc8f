//! Pluggable route-sets
//!
//! A subsystem owns its routes and state and is mounted under a URL
//! prefix; the page core knows nothing about it beyond the prefix.

use axum::Router;

/// A group of routes registered under a shared URL prefix
pub trait RouteSet: Send + Sync {
    /// The prefix this route-set is mounted under (e.g. `/products`)
    fn prefix(&self) -> &'static str;

    /// Build the subsystem's router, state already applied
    fn routes(&self) -> Router;
}

/// Mount every route-set under its prefix
pub fn mount_route_sets(mut router: Router, route_sets: &[Box<dyn RouteSet>]) -> Router {
    for route_set in route_sets {
        router = router.nest_service(route_set.prefix(), route_set.routes());
    }

    router
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use tower::ServiceExt;

    use super::*;

    struct PingRoutes;

    impl RouteSet for PingRoutes {
        fn prefix(&self) -> &'static str {
            "/ping"
        }

        fn routes(&self) -> Router {
            Router::new().route("/", get(|| async { "pong" }))
        }
    }

    #[tokio::test]
    async fn test_mount_under_prefix() {
        let route_sets: Vec<Box<dyn RouteSet>> = vec![Box::new(PingRoutes)];
        let app = mount_route_sets(Router::new(), &route_sets);

        let response = app
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
