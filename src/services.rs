pub mod buyer_service;
pub mod carry_service;
pub mod employee_service;
pub mod inbound_order_service;
pub mod locality_service;
pub mod product_batch_service;
pub mod product_record_service;
pub mod product_service;
pub mod purchase_order_service;
pub mod section_service;
pub mod seller_service;
pub mod warehouse_service;

pub use buyer_service::BuyerService;
pub use carry_service::CarryService;
pub use employee_service::EmployeeService;
pub use inbound_order_service::InboundOrderService;
pub use locality_service::LocalityService;
pub use product_batch_service::ProductBatchService;
pub use product_record_service::ProductRecordService;
pub use product_service::ProductService;
pub use purchase_order_service::PurchaseOrderService;
pub use section_service::SectionService;
pub use seller_service::SellerService;
pub use warehouse_service::WarehouseService;
