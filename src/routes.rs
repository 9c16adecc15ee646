// src/routes.rs

use axum::{
    middleware as axum_middleware,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{config::AppState, docs, handlers, middleware::scope::request_scope};

/// Monta o router completo: `/api/v1` + health + documento OpenAPI.
pub fn router(app_state: AppState) -> Router {
    let seller_routes = Router::new()
        .route("/", get(handlers::sellers::list_sellers).post(handlers::sellers::create_seller))
        .route(
            "/{id}",
            get(handlers::sellers::get_seller)
                .patch(handlers::sellers::update_seller)
                .delete(handlers::sellers::delete_seller),
        );

    let locality_routes = Router::new()
        .route(
            "/",
            get(handlers::localities::list_localities).post(handlers::localities::create_locality),
        )
        .route("/reportSellers", get(handlers::localities::report_sellers))
        .route("/reportCarries", get(handlers::localities::report_carries))
        .route("/{id}", get(handlers::localities::get_locality));

    let warehouse_routes = Router::new()
        .route(
            "/",
            get(handlers::warehouses::list_warehouses).post(handlers::warehouses::create_warehouse),
        )
        .route(
            "/{id}",
            get(handlers::warehouses::get_warehouse)
                .patch(handlers::warehouses::update_warehouse)
                .delete(handlers::warehouses::delete_warehouse),
        );

    let employee_routes = Router::new()
        .route(
            "/",
            get(handlers::employees::list_employees).post(handlers::employees::create_employee),
        )
        .route("/reportInboundOrders", get(handlers::employees::report_inbound_orders))
        .route(
            "/reportInboundOrders/{id}",
            get(handlers::employees::report_inbound_orders_by_id),
        )
        .route(
            "/{id}",
            get(handlers::employees::get_employee)
                .patch(handlers::employees::update_employee)
                .delete(handlers::employees::delete_employee),
        );

    let buyer_routes = Router::new()
        .route("/", get(handlers::buyers::list_buyers).post(handlers::buyers::create_buyer))
        .route("/reportPurchaseOrder", get(handlers::buyers::report_purchase_orders))
        .route(
            "/{id}",
            get(handlers::buyers::get_buyer)
                .patch(handlers::buyers::update_buyer)
                .delete(handlers::buyers::delete_buyer),
        );

    let carry_routes = Router::new()
        .route("/", get(handlers::carries::list_carries).post(handlers::carries::create_carry))
        .route("/{id}", get(handlers::carries::get_carry));

    let product_routes = Router::new()
        .route("/", get(handlers::products::list_products).post(handlers::products::create_product))
        .route("/reportRecords", get(handlers::products::report_records))
        .route(
            "/{id}",
            get(handlers::products::get_product)
                .patch(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        );

    let product_record_routes = Router::new()
        .route(
            "/",
            get(handlers::product_records::list_product_records)
                .post(handlers::product_records::create_product_record),
        )
        .route("/{id}", get(handlers::product_records::get_product_record));

    let product_batch_routes = Router::new()
        .route(
            "/",
            get(handlers::product_batches::list_product_batches)
                .post(handlers::product_batches::create_product_batch),
        )
        .route("/{id}", get(handlers::product_batches::get_product_batch));

    let section_routes = Router::new()
        .route("/", get(handlers::sections::list_sections).post(handlers::sections::create_section))
        .route("/reportProducts", get(handlers::sections::report_products))
        .route(
            "/{id}",
            get(handlers::sections::get_section)
                .patch(handlers::sections::update_section)
                .delete(handlers::sections::delete_section),
        );

    let purchase_order_routes = Router::new()
        .route(
            "/",
            get(handlers::purchase_orders::list_purchase_orders)
                .post(handlers::purchase_orders::create_purchase_order),
        )
        .route("/reportPurchaseOrder", get(handlers::purchase_orders::report_by_buyer))
        .route("/{id}", get(handlers::purchase_orders::get_purchase_order));

    let inbound_order_routes = Router::new()
        .route(
            "/",
            get(handlers::inbound_orders::list_inbound_orders)
                .post(handlers::inbound_orders::create_inbound_order),
        )
        .route("/{id}", get(handlers::inbound_orders::get_inbound_order));

    let api_v1 = Router::new()
        .nest("/sellers", seller_routes)
        .nest("/localities", locality_routes)
        .nest("/warehouses", warehouse_routes)
        .nest("/employees", employee_routes)
        .nest("/buyers", buyer_routes)
        .nest("/carries", carry_routes)
        .nest("/products", product_routes)
        .nest("/productRecords", product_record_routes)
        .nest("/productBatches", product_batch_routes)
        .nest("/sections", section_routes)
        .nest("/purchase_orders", purchase_order_routes)
        .nest("/inboundOrders", inbound_order_routes);

    // Combina tudo no router principal
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .nest("/api/v1", api_v1)
        .layer(axum_middleware::from_fn_with_state(app_state.clone(), request_scope))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
