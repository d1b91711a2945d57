//! Navigation targets and their path rendering.

/// Everything a screen can ask the router to do. The payload-carrying
/// variants are one-shot: the destination screen consumes the value when
/// the transition happens and the route itself is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Catalog,
    Checkout { product: String },
    OrderDetail(String),
    OrderSuccess { order_id: Option<String> },
}

impl Route {
    /// Path form of the target, with identifiers substituted verbatim.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Catalog => "/products".to_string(),
            Route::Checkout { .. } => "/checkout".to_string(),
            Route::OrderDetail(order_id) => format!("/orders/{}", order_id),
            Route::OrderSuccess { .. } => "/order-success".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_routes_render_fixed_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Catalog.path(), "/products");
        assert_eq!(
            Route::Checkout {
                product: "Desk lamp".to_string()
            }
            .path(),
            "/checkout"
        );
        assert_eq!(
            Route::OrderSuccess { order_id: None }.path(),
            "/order-success"
        );
    }

    #[test]
    fn detail_path_carries_the_exact_reference() {
        let route = Route::OrderDetail("12345".to_string());
        assert_eq!(route.path(), "/orders/12345");

        let route = Route::OrderDetail("ORD-1001".to_string());
        assert_eq!(route.path(), "/orders/ORD-1001");
    }
}
