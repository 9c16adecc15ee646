// src/config.rs

use std::{env, net::SocketAddr, path::PathBuf, str::FromStr, sync::Arc, time::Duration};

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    db::{
        BuyerRepository, CarryRepository, EmployeeRepository, InboundOrderRepository,
        LocalityRepository, PgBuyerRepository, PgCarryRepository, PgEmployeeRepository,
        PgInboundOrderRepository, PgLocalityRepository, PgProductBatchRepository,
        PgProductRecordRepository, PgProductRepository, PgPurchaseOrderRepository,
        PgSectionRepository, PgSellerRepository, PgWarehouseRepository, ProductBatchRepository,
        ProductRecordRepository, ProductRepository, PurchaseOrderRepository, SectionRepository,
        SellerRepository, WarehouseRepository,
    },
    services::{
        BuyerService, CarryService, EmployeeService, InboundOrderService, LocalityService,
        ProductBatchService, ProductRecordService, ProductService, PurchaseOrderService,
        SectionService, SellerService, WarehouseService,
    },
};

// ---
// Configuração lida do ambiente (.env é carregado antes, se existir)
// ---
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub host: String,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    pub request_timeout: Duration,
    pub log_sink_capacity: usize,
    pub log_sink_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL deve ser definida")?;

        Ok(Self {
            database_url,
            bind_addr: parse_var("BIND_ADDR", "0.0.0.0:8080")?,
            host: env::var("HOST").unwrap_or_else(|_| "localhost:8080".to_string()),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", "5")?,
            db_acquire_timeout: Duration::from_secs(parse_var("DB_ACQUIRE_TIMEOUT_SECS", "3")?),
            request_timeout: Duration::from_secs(parse_var("REQUEST_TIMEOUT_SECS", "30")?),
            log_sink_capacity: parse_var("LOG_SINK_CAPACITY", "1000")?,
            log_sink_path: env::var("LOG_SINK_PATH").ok().filter(|p| !p.is_empty()).map(PathBuf::from),
        })
    }

    pub async fn connect(&self) -> anyhow::Result<PgPool> {
        let pool = PgPoolOptions::new()
            .max_connections(self.db_max_connections)
            .acquire_timeout(self.db_acquire_timeout)
            .connect(&self.database_url)
            .await
            .context("falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");
        Ok(pool)
    }
}

fn parse_var<T>(name: &str, default: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    parse_value(name, &raw)
}

fn parse_value<T>(name: &str, raw: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| anyhow::anyhow!("valor inválido para {name} ({raw:?}): {e}"))
}

// ---
// Um repositório por recurso, atrás do trait (Postgres em produção, memória nos testes)
// ---
#[derive(Clone)]
pub struct Repositories {
    pub sellers: Arc<dyn SellerRepository>,
    pub localities: Arc<dyn LocalityRepository>,
    pub warehouses: Arc<dyn WarehouseRepository>,
    pub employees: Arc<dyn EmployeeRepository>,
    pub buyers: Arc<dyn BuyerRepository>,
    pub carries: Arc<dyn CarryRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub product_records: Arc<dyn ProductRecordRepository>,
    pub product_batches: Arc<dyn ProductBatchRepository>,
    pub sections: Arc<dyn SectionRepository>,
    pub purchase_orders: Arc<dyn PurchaseOrderRepository>,
    pub inbound_orders: Arc<dyn InboundOrderRepository>,
}

impl Repositories {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            sellers: Arc::new(PgSellerRepository::new(pool.clone())),
            localities: Arc::new(PgLocalityRepository::new(pool.clone())),
            warehouses: Arc::new(PgWarehouseRepository::new(pool.clone())),
            employees: Arc::new(PgEmployeeRepository::new(pool.clone())),
            buyers: Arc::new(PgBuyerRepository::new(pool.clone())),
            carries: Arc::new(PgCarryRepository::new(pool.clone())),
            products: Arc::new(PgProductRepository::new(pool.clone())),
            product_records: Arc::new(PgProductRecordRepository::new(pool.clone())),
            product_batches: Arc::new(PgProductBatchRepository::new(pool.clone())),
            sections: Arc::new(PgSectionRepository::new(pool.clone())),
            purchase_orders: Arc::new(PgPurchaseOrderRepository::new(pool.clone())),
            inbound_orders: Arc::new(PgInboundOrderRepository::new(pool)),
        }
    }
}

// ---
// Estado compartilhado pelos handlers
// ---
#[derive(Clone)]
pub struct AppState {
    pub seller_service: SellerService,
    pub locality_service: LocalityService,
    pub warehouse_service: WarehouseService,
    pub employee_service: EmployeeService,
    pub buyer_service: BuyerService,
    pub carry_service: CarryService,
    pub product_service: ProductService,
    pub product_record_service: ProductRecordService,
    pub product_batch_service: ProductBatchService,
    pub section_service: SectionService,
    pub purchase_order_service: PurchaseOrderService,
    pub inbound_order_service: InboundOrderService,

    pub request_timeout: Duration,
    pub api_host: String,
}

impl AppState {
    /// Monta o gráfico de dependências: repositórios -> serviços.
    pub fn new(repos: Repositories, request_timeout: Duration, api_host: impl Into<String>) -> Self {
        Self {
            seller_service: SellerService::new(repos.sellers),
            locality_service: LocalityService::new(repos.localities),
            warehouse_service: WarehouseService::new(repos.warehouses),
            employee_service: EmployeeService::new(repos.employees),
            buyer_service: BuyerService::new(repos.buyers),
            carry_service: CarryService::new(repos.carries),
            product_service: ProductService::new(repos.products),
            product_record_service: ProductRecordService::new(repos.product_records),
            product_batch_service: ProductBatchService::new(repos.product_batches),
            section_service: SectionService::new(repos.sections),
            purchase_order_service: PurchaseOrderService::new(repos.purchase_orders),
            inbound_order_service: InboundOrderService::new(repos.inbound_orders),
            request_timeout,
            api_host: api_host.into(),
        }
    }

    pub fn from_pool(pool: PgPool, config: &Config) -> Self {
        Self::new(Repositories::postgres(pool), config.request_timeout, config.host.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_values_are_parsed() {
        let n: u32 = parse_value("DB_MAX_CONNECTIONS", " 12 ").unwrap();
        assert_eq!(n, 12);

        let addr: SocketAddr = parse_value("BIND_ADDR", "127.0.0.1:9000").unwrap();
        assert_eq!(addr.port(), 9000);
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = parse_value::<u64>("REQUEST_TIMEOUT_SECS", "soon").unwrap_err();
        assert!(err.to_string().contains("REQUEST_TIMEOUT_SECS"));
    }
}
