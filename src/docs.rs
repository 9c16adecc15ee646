// src/docs.rs

use axum::{extract::State, Json};
use utoipa::{openapi::server::Server, OpenApi};

use crate::{config::AppState, handlers, models};

#[derive(OpenApi)]
#[openapi(
    info(title = "Warehouse API", description = "Gestão de armazéns, estoque e pedidos"),
    paths(
        // --- Sellers ---
        handlers::sellers::list_sellers,
        handlers::sellers::get_seller,
        handlers::sellers::create_seller,
        handlers::sellers::update_seller,
        handlers::sellers::delete_seller,

        // --- Localities ---
        handlers::localities::list_localities,
        handlers::localities::get_locality,
        handlers::localities::create_locality,
        handlers::localities::report_sellers,
        handlers::localities::report_carries,

        // --- Warehouses ---
        handlers::warehouses::list_warehouses,
        handlers::warehouses::get_warehouse,
        handlers::warehouses::create_warehouse,
        handlers::warehouses::update_warehouse,
        handlers::warehouses::delete_warehouse,

        // --- Employees ---
        handlers::employees::list_employees,
        handlers::employees::get_employee,
        handlers::employees::create_employee,
        handlers::employees::update_employee,
        handlers::employees::delete_employee,
        handlers::employees::report_inbound_orders,
        handlers::employees::report_inbound_orders_by_id,

        // --- Buyers ---
        handlers::buyers::list_buyers,
        handlers::buyers::get_buyer,
        handlers::buyers::create_buyer,
        handlers::buyers::update_buyer,
        handlers::buyers::delete_buyer,
        handlers::buyers::report_purchase_orders,

        // --- Carries ---
        handlers::carries::list_carries,
        handlers::carries::get_carry,
        handlers::carries::create_carry,

        // --- Products ---
        handlers::products::list_products,
        handlers::products::get_product,
        handlers::products::create_product,
        handlers::products::update_product,
        handlers::products::delete_product,
        handlers::products::report_records,

        // --- Product records / batches ---
        handlers::product_records::list_product_records,
        handlers::product_records::get_product_record,
        handlers::product_records::create_product_record,
        handlers::product_batches::list_product_batches,
        handlers::product_batches::get_product_batch,
        handlers::product_batches::create_product_batch,

        // --- Sections ---
        handlers::sections::list_sections,
        handlers::sections::get_section,
        handlers::sections::create_section,
        handlers::sections::update_section,
        handlers::sections::delete_section,
        handlers::sections::report_products,

        // --- Orders ---
        handlers::purchase_orders::list_purchase_orders,
        handlers::purchase_orders::get_purchase_order,
        handlers::purchase_orders::create_purchase_order,
        handlers::purchase_orders::report_by_buyer,
        handlers::inbound_orders::list_inbound_orders,
        handlers::inbound_orders::get_inbound_order,
        handlers::inbound_orders::create_inbound_order,
    ),
    components(
        schemas(
            // --- Entidades ---
            models::seller::Seller,
            models::seller::SellerPatch,
            models::locality::Locality,
            models::warehouse::Warehouse,
            models::warehouse::WarehousePatch,
            models::employee::Employee,
            models::employee::EmployeePatch,
            models::buyer::Buyer,
            models::buyer::BuyerPatch,
            models::carry::Carry,
            models::product::Product,
            models::product::ProductPatch,
            models::product_record::ProductRecord,
            models::product_batch::ProductBatch,
            models::section::Section,
            models::section::SectionPatch,
            models::purchase_order::PurchaseOrder,
            models::inbound_order::InboundOrder,

            // --- Relatórios ---
            models::locality::ReportSellers,
            models::locality::ReportCarries,
            models::employee::EmployeeWithInboundOrders,
            models::buyer::PurchaseOrdersByBuyer,
            models::product::ReportRecord,
            models::section::ProductsBySection,

            // --- Payloads ---
            handlers::sellers::CreateSellerPayload,
            handlers::localities::CreateLocalityPayload,
            handlers::warehouses::CreateWarehousePayload,
            handlers::employees::CreateEmployeePayload,
            handlers::buyers::CreateBuyerPayload,
            handlers::carries::CreateCarryPayload,
            handlers::products::CreateProductPayload,
            handlers::product_records::CreateProductRecordPayload,
            handlers::product_batches::CreateProductBatchPayload,
            handlers::sections::CreateSectionPayload,
            handlers::purchase_orders::CreatePurchaseOrderPayload,
            handlers::inbound_orders::CreateInboundOrderPayload,
        )
    ),
    tags(
        (name = "Sellers", description = "Vendedores"),
        (name = "Localities", description = "Localidades e relatórios por localidade"),
        (name = "Warehouses", description = "Armazéns"),
        (name = "Employees", description = "Funcionários e ordens de entrada por funcionário"),
        (name = "Buyers", description = "Compradores e pedidos por comprador"),
        (name = "Carries", description = "Transportadoras"),
        (name = "Products", description = "Produtos e registros por produto"),
        (name = "Product Records", description = "Registros de preço"),
        (name = "Product Batches", description = "Lotes de produtos"),
        (name = "Sections", description = "Seções e produtos por seção"),
        (name = "Purchase Orders", description = "Pedidos de compra"),
        (name = "Inbound Orders", description = "Ordens de entrada")
    )
)]
pub struct ApiDoc;

/// Documento OpenAPI com o servidor apontando para `host`.
pub fn api_doc(host: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![Server::new(format!("http://{host}"))]);
    doc
}

pub async fn openapi_json(State(app_state): State<AppState>) -> Json<utoipa::openapi::OpenApi> {
    Json(api_doc(&app_state.api_host))
}
