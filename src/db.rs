pub mod buyer_repo;
pub mod carry_repo;
pub mod employee_repo;
pub mod inbound_order_repo;
pub mod locality_repo;
pub mod product_batch_repo;
pub mod product_record_repo;
pub mod product_repo;
pub mod purchase_order_repo;
pub mod section_repo;
pub mod seller_repo;
pub mod warehouse_repo;

pub use buyer_repo::{BuyerRepository, PgBuyerRepository};
pub use carry_repo::{CarryRepository, PgCarryRepository};
pub use employee_repo::{EmployeeRepository, PgEmployeeRepository};
pub use inbound_order_repo::{InboundOrderRepository, PgInboundOrderRepository};
pub use locality_repo::{LocalityRepository, PgLocalityRepository};
pub use product_batch_repo::{PgProductBatchRepository, ProductBatchRepository};
pub use product_record_repo::{PgProductRecordRepository, ProductRecordRepository};
pub use product_repo::{PgProductRepository, ProductRepository};
pub use purchase_order_repo::{PgPurchaseOrderRepository, PurchaseOrderRepository};
pub use section_repo::{PgSectionRepository, SectionRepository};
pub use seller_repo::{PgSellerRepository, SellerRepository};
pub use warehouse_repo::{PgWarehouseRepository, WarehouseRepository};
