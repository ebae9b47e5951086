// storefront_app/src/web/routes.rs

use actix_web::web;

// Placeholder for a simple health check handler function.
// In a real deployment, this might check DB connectivity or other critical services.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// This function is called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1") // Base path for API version 1
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Checkout Routes
      .service(
        web::scope("/checkout").route(
          "",
          web::post().to(crate::web::handlers::checkout_handlers::start_checkout_handler),
        ),
      )
      // Order Routes (back-office)
      .service(
        web::scope("/orders")
          .route(
            "",
            web::get().to(crate::web::handlers::order_handlers::list_orders_handler),
          )
          .route(
            "/{order_id}",
            web::get().to(crate::web::handlers::order_handlers::get_order_handler),
          )
          .route(
            "/{order_id}/transitions",
            web::get().to(crate::web::handlers::order_handlers::list_transitions_handler),
          )
          .route(
            "/{order_id}/status",
            web::post().to(crate::web::handlers::order_handlers::change_status_handler),
          )
          .route(
            "/{order_id}/advance",
            web::post().to(crate::web::handlers::order_handlers::advance_order_handler),
          ),
      )
      // Product Routes
      .service(
        web::scope("/products")
          .route(
            "",
            web::get().to(crate::web::handlers::product_handlers::list_products_handler),
          )
          .route(
            "/{product_id}",
            web::get().to(crate::web::handlers::product_handlers::get_product_handler),
          )
          .route(
            "/{product_id}/stock",
            web::post().to(crate::web::handlers::product_handlers::adjust_stock_handler),
          ),
      )
      // Webhook Routes
      // The {source} path parameter identifies the sending gateway.
      .service(
        web::scope("/webhooks").route(
          "/{source}",
          web::post().to(crate::web::handlers::webhook_handlers::payment_webhook_handler),
        ),
      ),
  );
}
