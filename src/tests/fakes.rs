// src/tests/fakes.rs
//
// Banco em memória que implementa todos os traits de repositório. Emula o que
// o Postgres faria de relevante: ids sequenciais, FKs (com o pai nomeado),
// chaves únicas e o "ON DELETE SET NULL" de products.seller_id.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard},
};

use async_trait::async_trait;

use crate::{
    common::{
        db_utils::non_empty,
        error::{Referenced, StorageError},
        scope::RequestScope,
    },
    config::Repositories,
    db::{
        BuyerRepository, CarryRepository, EmployeeRepository, InboundOrderRepository,
        LocalityRepository, ProductBatchRepository, ProductRecordRepository, ProductRepository,
        PurchaseOrderRepository, SectionRepository, SellerRepository, WarehouseRepository,
    },
    models::{
        buyer::{Buyer, PurchaseOrdersByBuyer},
        carry::Carry,
        employee::{Employee, EmployeeWithInboundOrders},
        inbound_order::InboundOrder,
        locality::{Locality, ReportCarries, ReportSellers},
        product::{Product, ReportRecord},
        product_batch::ProductBatch,
        product_record::ProductRecord,
        purchase_order::PurchaseOrder,
        section::{ProductsBySection, Section},
        seller::Seller,
        warehouse::Warehouse,
    },
};

#[derive(Default)]
pub struct Tables {
    next_id: i64,
    /// Quando definido, toda operação falha com este erro.
    pub fault: Option<StorageError>,
    pub writes: usize,

    pub localities: BTreeMap<String, Locality>,
    pub sellers: BTreeMap<i64, Seller>,
    pub warehouses: BTreeMap<i64, Warehouse>,
    pub employees: BTreeMap<i64, Employee>,
    pub buyers: BTreeMap<i64, Buyer>,
    pub carries: BTreeMap<i64, Carry>,
    pub products: BTreeMap<i64, Product>,
    pub product_records: BTreeMap<i64, ProductRecord>,
    pub product_batches: BTreeMap<i64, ProductBatch>,
    pub sections: BTreeMap<i64, Section>,
    pub purchase_orders: BTreeMap<i64, PurchaseOrder>,
    pub inbound_orders: BTreeMap<i64, InboundOrder>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn write(&mut self) {
        self.writes += 1;
    }
}

#[derive(Clone, Default)]
pub struct MemStore {
    inner: Arc<Mutex<Tables>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repositories(&self) -> Repositories {
        Repositories {
            sellers: Arc::new(self.clone()),
            localities: Arc::new(self.clone()),
            warehouses: Arc::new(self.clone()),
            employees: Arc::new(self.clone()),
            buyers: Arc::new(self.clone()),
            carries: Arc::new(self.clone()),
            products: Arc::new(self.clone()),
            product_records: Arc::new(self.clone()),
            product_batches: Arc::new(self.clone()),
            sections: Arc::new(self.clone()),
            purchase_orders: Arc::new(self.clone()),
            inbound_orders: Arc::new(self.clone()),
        }
    }

    /// Acesso direto às tabelas para montar cenários e inspecionar o resultado.
    pub fn tables(&self) -> MutexGuard<'_, Tables> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn open(&self, scope: &RequestScope) -> Result<MutexGuard<'_, Tables>, StorageError> {
        scope.check()?;
        let tables = self.tables();
        if let Some(fault) = tables.fault.clone() {
            return Err(fault);
        }
        Ok(tables)
    }

    // --- Seeds ---

    pub fn seed_locality(&self, id: &str, name: &str) -> Locality {
        let locality = Locality {
            id: id.to_string(),
            locality_name: name.to_string(),
            province_name: "San Luis".to_string(),
            country_name: "Argentina".to_string(),
        };
        self.tables().localities.insert(locality.id.clone(), locality.clone());
        locality
    }

    pub fn seed_seller(&self, cid: i64, locality_id: &str) -> Seller {
        let mut t = self.tables();
        let seller = Seller {
            id: t.next_id(),
            cid,
            company_name: format!("Company {cid}"),
            address: "Rua A, 10".to_string(),
            telephone: "555-0101".to_string(),
            locality_id: locality_id.to_string(),
        };
        t.sellers.insert(seller.id, seller.clone());
        seller
    }

    pub fn seed_warehouse(&self, code: &str, locality_id: &str) -> Warehouse {
        let mut t = self.tables();
        let warehouse = Warehouse {
            id: t.next_id(),
            warehouse_code: code.to_string(),
            address: "Av. Central, 1000".to_string(),
            telephone: "555-0202".to_string(),
            minimum_capacity: 10,
            minimum_temperature: -5.0,
            locality_id: locality_id.to_string(),
        };
        t.warehouses.insert(warehouse.id, warehouse.clone());
        warehouse
    }

    pub fn seed_employee(&self, card: &str, warehouse_id: i64) -> Employee {
        let mut t = self.tables();
        let employee = Employee {
            id: t.next_id(),
            card_number_id: card.to_string(),
            first_name: "Ana".to_string(),
            last_name: "Souza".to_string(),
            warehouse_id,
        };
        t.employees.insert(employee.id, employee.clone());
        employee
    }

    pub fn seed_buyer(&self, card: &str) -> Buyer {
        let mut t = self.tables();
        let buyer = Buyer {
            id: t.next_id(),
            card_number_id: card.to_string(),
            first_name: "Bruno".to_string(),
            last_name: "Lima".to_string(),
        };
        t.buyers.insert(buyer.id, buyer.clone());
        buyer
    }

    pub fn seed_product(&self, code: &str, seller_id: Option<i64>) -> Product {
        let mut t = self.tables();
        let product = Product {
            id: t.next_id(),
            description: "Maçãs".to_string(),
            product_code: code.to_string(),
            expiration_rate: 1.5,
            freezing_rate: 2.0,
            height: 10.0,
            length: 20.0,
            width: 30.0,
            net_weight: 4.5,
            recommended_freezing_temperature: -18.0,
            product_type_id: 1,
            seller_id,
        };
        t.products.insert(product.id, product.clone());
        product
    }

    pub fn seed_section(&self, number: i32, warehouse_id: i64) -> Section {
        let mut t = self.tables();
        let section = Section {
            id: t.next_id(),
            section_number: number,
            current_temperature: -10.0,
            minimum_temperature: -20.0,
            current_capacity: 50,
            minimum_capacity: 10,
            maximum_capacity: 100,
            warehouse_id,
            product_type_id: 1,
        };
        t.sections.insert(section.id, section.clone());
        section
    }

    pub fn seed_batch(&self, number: i32, quantity: i32, product_id: i64, section_id: i64) -> ProductBatch {
        let mut t = self.tables();
        let batch = ProductBatch {
            id: t.next_id(),
            batch_number: number,
            current_quantity: quantity,
            current_temperature: -12.0,
            due_date: chrono::NaiveDate::from_ymd_opt(2030, 6, 1).unwrap(),
            initial_quantity: quantity,
            manufacturing_date: chrono::NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            manufacturing_hour: 8,
            minimum_temperature: -20.0,
            product_id,
            section_id,
        };
        t.product_batches.insert(batch.id, batch.clone());
        batch
    }

    pub fn seed_record(&self, product_id: i64) -> ProductRecord {
        let mut t = self.tables();
        let record = ProductRecord {
            id: t.next_id(),
            last_update_date: chrono::NaiveDate::from_ymd_opt(2030, 2, 1).unwrap(),
            purchase_price: 10.0,
            sale_price: 12.0,
            product_id,
        };
        t.product_records.insert(record.id, record.clone());
        record
    }
}

fn missing(parent: Referenced) -> StorageError {
    StorageError::ForeignKeyMissing(parent)
}

fn duplicate(constraint: &str) -> StorageError {
    StorageError::DuplicateKey { constraint: Some(constraint.to_string()) }
}

fn found<T: Clone>(row: Option<&T>) -> Result<T, StorageError> {
    row.cloned().ok_or(StorageError::NotFound)
}

// ---
// Sellers
// ---
#[async_trait]
impl SellerRepository for MemStore {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Seller>, StorageError> {
        Ok(self.open(scope)?.sellers.values().cloned().collect())
    }

    async fn get(&self, scope: &RequestScope, id: i64) -> Result<Seller, StorageError> {
        found(self.open(scope)?.sellers.get(&id))
    }

    async fn exists(&self, scope: &RequestScope, cid: i64) -> Result<bool, StorageError> {
        Ok(self.open(scope)?.sellers.values().any(|s| s.cid == cid))
    }

    async fn save(&self, scope: &RequestScope, seller: &Seller) -> Result<i64, StorageError> {
        let mut t = self.open(scope)?;
        if t.sellers.values().any(|s| s.cid == seller.cid) {
            return Err(duplicate("sellers_cid_key"));
        }
        if !t.localities.contains_key(&seller.locality_id) {
            return Err(missing(Referenced::Locality));
        }
        let id = t.next_id();
        t.sellers.insert(id, Seller { id, ..seller.clone() });
        t.write();
        Ok(id)
    }

    async fn update(&self, scope: &RequestScope, seller: &Seller) -> Result<(), StorageError> {
        let mut t = self.open(scope)?;
        if !t.localities.contains_key(&seller.locality_id) {
            return Err(missing(Referenced::Locality));
        }
        if t.sellers.contains_key(&seller.id) {
            t.sellers.insert(seller.id, seller.clone());
            t.write();
        }
        Ok(())
    }

    async fn delete(&self, scope: &RequestScope, id: i64) -> Result<(), StorageError> {
        let mut t = self.open(scope)?;
        if t.sellers.remove(&id).is_none() {
            return Err(StorageError::NotFound);
        }
        for product in t.products.values_mut() {
            if product.seller_id == Some(id) {
                product.seller_id = None;
            }
        }
        t.write();
        Ok(())
    }
}

// ---
// Localities
// ---
#[async_trait]
impl LocalityRepository for MemStore {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Locality>, StorageError> {
        Ok(self.open(scope)?.localities.values().cloned().collect())
    }

    async fn get(&self, scope: &RequestScope, id: &str) -> Result<Locality, StorageError> {
        found(self.open(scope)?.localities.get(id))
    }

    async fn exists(&self, scope: &RequestScope, id: &str) -> Result<bool, StorageError> {
        Ok(self.open(scope)?.localities.contains_key(id))
    }

    async fn save(&self, scope: &RequestScope, locality: &Locality) -> Result<String, StorageError> {
        let mut t = self.open(scope)?;
        if t.localities.contains_key(&locality.id) {
            return Err(duplicate("localities_pkey"));
        }
        t.localities.insert(locality.id.clone(), locality.clone());
        t.write();
        Ok(locality.id.clone())
    }

    async fn report_sellers_all(&self, scope: &RequestScope) -> Result<Vec<ReportSellers>, StorageError> {
        let t = self.open(scope)?;
        Ok(t.localities
            .values()
            .map(|l| ReportSellers {
                locality_id: l.id.clone(),
                locality_name: l.locality_name.clone(),
                sellers_count: t.sellers.values().filter(|s| s.locality_id == l.id).count() as i64,
            })
            .collect())
    }

    async fn report_sellers_by_id(
        &self,
        scope: &RequestScope,
        id: &str,
    ) -> Result<Vec<ReportSellers>, StorageError> {
        let all = LocalityRepository::report_sellers_all(self, scope).await?;
        non_empty(all.into_iter().filter(|r| r.locality_id == id).collect())
    }

    async fn report_carries_all(&self, scope: &RequestScope) -> Result<Vec<ReportCarries>, StorageError> {
        let t = self.open(scope)?;
        Ok(t.localities
            .values()
            .map(|l| ReportCarries {
                locality_id: l.id.clone(),
                locality_name: l.locality_name.clone(),
                carries_count: t.carries.values().filter(|c| c.locality_id == l.id).count() as i64,
            })
            .collect())
    }

    async fn report_carries_by_id(
        &self,
        scope: &RequestScope,
        id: &str,
    ) -> Result<Vec<ReportCarries>, StorageError> {
        let all = LocalityRepository::report_carries_all(self, scope).await?;
        non_empty(all.into_iter().filter(|r| r.locality_id == id).collect())
    }
}

// ---
// Warehouses
// ---
#[async_trait]
impl WarehouseRepository for MemStore {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Warehouse>, StorageError> {
        Ok(self.open(scope)?.warehouses.values().cloned().collect())
    }

    async fn get(&self, scope: &RequestScope, id: i64) -> Result<Warehouse, StorageError> {
        found(self.open(scope)?.warehouses.get(&id))
    }

    async fn exists(&self, scope: &RequestScope, warehouse_code: &str) -> Result<bool, StorageError> {
        Ok(self.open(scope)?.warehouses.values().any(|w| w.warehouse_code == warehouse_code))
    }

    async fn save(&self, scope: &RequestScope, warehouse: &Warehouse) -> Result<i64, StorageError> {
        let mut t = self.open(scope)?;
        if !t.localities.contains_key(&warehouse.locality_id) {
            return Err(missing(Referenced::Locality));
        }
        let id = t.next_id();
        t.warehouses.insert(id, Warehouse { id, ..warehouse.clone() });
        t.write();
        Ok(id)
    }

    async fn update(&self, scope: &RequestScope, warehouse: &Warehouse) -> Result<(), StorageError> {
        let mut t = self.open(scope)?;
        if t.warehouses.contains_key(&warehouse.id) {
            t.warehouses.insert(warehouse.id, warehouse.clone());
            t.write();
        }
        Ok(())
    }

    async fn delete(&self, scope: &RequestScope, id: i64) -> Result<(), StorageError> {
        let mut t = self.open(scope)?;
        if !t.warehouses.contains_key(&id) {
            return Err(StorageError::NotFound);
        }
        let referenced = t.employees.values().any(|e| e.warehouse_id == id)
            || t.sections.values().any(|s| s.warehouse_id == id);
        if referenced {
            return Err(missing(Referenced::Warehouse));
        }
        t.warehouses.remove(&id);
        t.write();
        Ok(())
    }
}

// ---
// Employees
// ---
#[async_trait]
impl EmployeeRepository for MemStore {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Employee>, StorageError> {
        Ok(self.open(scope)?.employees.values().cloned().collect())
    }

    async fn get(&self, scope: &RequestScope, id: i64) -> Result<Employee, StorageError> {
        found(self.open(scope)?.employees.get(&id))
    }

    async fn exists(&self, scope: &RequestScope, card_number_id: &str) -> Result<bool, StorageError> {
        Ok(self.open(scope)?.employees.values().any(|e| e.card_number_id == card_number_id))
    }

    async fn save(&self, scope: &RequestScope, employee: &Employee) -> Result<i64, StorageError> {
        let mut t = self.open(scope)?;
        if !t.warehouses.contains_key(&employee.warehouse_id) {
            return Err(missing(Referenced::Warehouse));
        }
        let id = t.next_id();
        t.employees.insert(id, Employee { id, ..employee.clone() });
        t.write();
        Ok(id)
    }

    async fn update(&self, scope: &RequestScope, employee: &Employee) -> Result<(), StorageError> {
        let mut t = self.open(scope)?;
        if !t.warehouses.contains_key(&employee.warehouse_id) {
            return Err(missing(Referenced::Warehouse));
        }
        if t.employees.contains_key(&employee.id) {
            t.employees.insert(employee.id, employee.clone());
            t.write();
        }
        Ok(())
    }

    async fn delete(&self, scope: &RequestScope, id: i64) -> Result<(), StorageError> {
        let mut t = self.open(scope)?;
        if !t.employees.contains_key(&id) {
            return Err(StorageError::NotFound);
        }
        if t.inbound_orders.values().any(|o| o.employee_id == id) {
            return Err(missing(Referenced::Employee));
        }
        t.employees.remove(&id);
        t.write();
        Ok(())
    }

    async fn report_inbound_orders_all(
        &self,
        scope: &RequestScope,
    ) -> Result<Vec<EmployeeWithInboundOrders>, StorageError> {
        let t = self.open(scope)?;
        Ok(t.employees
            .values()
            .map(|e| EmployeeWithInboundOrders {
                id: e.id,
                card_number_id: e.card_number_id.clone(),
                first_name: e.first_name.clone(),
                last_name: e.last_name.clone(),
                warehouse_id: e.warehouse_id,
                inbound_orders_count: t.inbound_orders.values().filter(|o| o.employee_id == e.id).count()
                    as i64,
            })
            .collect())
    }

    async fn report_inbound_orders_by_id(
        &self,
        scope: &RequestScope,
        id: i64,
    ) -> Result<Vec<EmployeeWithInboundOrders>, StorageError> {
        let all = EmployeeRepository::report_inbound_orders_all(self, scope).await?;
        non_empty(all.into_iter().filter(|r| r.id == id).collect())
    }
}

// ---
// Buyers
// ---
#[async_trait]
impl BuyerRepository for MemStore {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Buyer>, StorageError> {
        Ok(self.open(scope)?.buyers.values().cloned().collect())
    }

    async fn get(&self, scope: &RequestScope, id: i64) -> Result<Buyer, StorageError> {
        found(self.open(scope)?.buyers.get(&id))
    }

    async fn exists(&self, scope: &RequestScope, card_number_id: &str) -> Result<bool, StorageError> {
        Ok(self.open(scope)?.buyers.values().any(|b| b.card_number_id == card_number_id))
    }

    async fn save(&self, scope: &RequestScope, buyer: &Buyer) -> Result<i64, StorageError> {
        let mut t = self.open(scope)?;
        let id = t.next_id();
        t.buyers.insert(id, Buyer { id, ..buyer.clone() });
        t.write();
        Ok(id)
    }

    async fn update(&self, scope: &RequestScope, buyer: &Buyer) -> Result<(), StorageError> {
        let mut t = self.open(scope)?;
        if t.buyers.contains_key(&buyer.id) {
            t.buyers.insert(buyer.id, buyer.clone());
            t.write();
        }
        Ok(())
    }

    async fn delete(&self, scope: &RequestScope, id: i64) -> Result<(), StorageError> {
        let mut t = self.open(scope)?;
        if !t.buyers.contains_key(&id) {
            return Err(StorageError::NotFound);
        }
        if t.purchase_orders.values().any(|o| o.buyer_id == id) {
            return Err(missing(Referenced::Buyer));
        }
        t.buyers.remove(&id);
        t.write();
        Ok(())
    }

    async fn report_purchase_orders_all(
        &self,
        scope: &RequestScope,
    ) -> Result<Vec<PurchaseOrdersByBuyer>, StorageError> {
        let t = self.open(scope)?;
        Ok(t.buyers
            .values()
            .map(|b| PurchaseOrdersByBuyer {
                buyer_id: b.id,
                card_number_id: b.card_number_id.clone(),
                first_name: b.first_name.clone(),
                last_name: b.last_name.clone(),
                orders_count: t.purchase_orders.values().filter(|o| o.buyer_id == b.id).count() as i64,
            })
            .collect())
    }

    async fn report_purchase_orders_by_id(
        &self,
        scope: &RequestScope,
        id: i64,
    ) -> Result<Vec<PurchaseOrdersByBuyer>, StorageError> {
        let all = BuyerRepository::report_purchase_orders_all(self, scope).await?;
        non_empty(all.into_iter().filter(|r| r.buyer_id == id).collect())
    }
}

// ---
// Carries
// ---
#[async_trait]
impl CarryRepository for MemStore {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Carry>, StorageError> {
        Ok(self.open(scope)?.carries.values().cloned().collect())
    }

    async fn get(&self, scope: &RequestScope, id: i64) -> Result<Carry, StorageError> {
        found(self.open(scope)?.carries.get(&id))
    }

    async fn exists(&self, scope: &RequestScope, cid: &str) -> Result<bool, StorageError> {
        Ok(self.open(scope)?.carries.values().any(|c| c.cid == cid))
    }

    async fn save(&self, scope: &RequestScope, carry: &Carry) -> Result<i64, StorageError> {
        let mut t = self.open(scope)?;
        if !t.localities.contains_key(&carry.locality_id) {
            return Err(missing(Referenced::Locality));
        }
        let id = t.next_id();
        t.carries.insert(id, Carry { id, ..carry.clone() });
        t.write();
        Ok(id)
    }
}

// ---
// Products
// ---
#[async_trait]
impl ProductRepository for MemStore {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Product>, StorageError> {
        Ok(self.open(scope)?.products.values().cloned().collect())
    }

    async fn get(&self, scope: &RequestScope, id: i64) -> Result<Product, StorageError> {
        found(self.open(scope)?.products.get(&id))
    }

    async fn exists(&self, scope: &RequestScope, product_code: &str) -> Result<bool, StorageError> {
        Ok(self.open(scope)?.products.values().any(|p| p.product_code == product_code))
    }

    async fn save(&self, scope: &RequestScope, product: &Product) -> Result<i64, StorageError> {
        let mut t = self.open(scope)?;
        if let Some(seller_id) = product.seller_id {
            if !t.sellers.contains_key(&seller_id) {
                return Err(missing(Referenced::Seller));
            }
        }
        let id = t.next_id();
        t.products.insert(id, Product { id, ..product.clone() });
        t.write();
        Ok(id)
    }

    async fn update(&self, scope: &RequestScope, product: &Product) -> Result<(), StorageError> {
        let mut t = self.open(scope)?;
        if let Some(seller_id) = product.seller_id {
            if !t.sellers.contains_key(&seller_id) {
                return Err(missing(Referenced::Seller));
            }
        }
        if t.products.contains_key(&product.id) {
            t.products.insert(product.id, product.clone());
            t.write();
        }
        Ok(())
    }

    async fn delete(&self, scope: &RequestScope, id: i64) -> Result<(), StorageError> {
        let mut t = self.open(scope)?;
        if !t.products.contains_key(&id) {
            return Err(StorageError::NotFound);
        }
        let referenced = t.product_records.values().any(|r| r.product_id == id)
            || t.product_batches.values().any(|b| b.product_id == id);
        if referenced {
            return Err(missing(Referenced::Product));
        }
        t.products.remove(&id);
        t.write();
        Ok(())
    }

    async fn report_records_all(&self, scope: &RequestScope) -> Result<Vec<ReportRecord>, StorageError> {
        let t = self.open(scope)?;
        Ok(t.products
            .values()
            .map(|p| ReportRecord {
                product_id: p.id,
                description: p.description.clone(),
                records_count: t.product_records.values().filter(|r| r.product_id == p.id).count() as i64,
            })
            .collect())
    }

    async fn report_records_by_id(
        &self,
        scope: &RequestScope,
        id: i64,
    ) -> Result<Vec<ReportRecord>, StorageError> {
        let all = ProductRepository::report_records_all(self, scope).await?;
        non_empty(all.into_iter().filter(|r| r.product_id == id).collect())
    }
}

// ---
// Product records
// ---
#[async_trait]
impl ProductRecordRepository for MemStore {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<ProductRecord>, StorageError> {
        Ok(self.open(scope)?.product_records.values().cloned().collect())
    }

    async fn get(&self, scope: &RequestScope, id: i64) -> Result<ProductRecord, StorageError> {
        found(self.open(scope)?.product_records.get(&id))
    }

    async fn save(&self, scope: &RequestScope, record: &ProductRecord) -> Result<i64, StorageError> {
        let mut t = self.open(scope)?;
        if !t.products.contains_key(&record.product_id) {
            return Err(missing(Referenced::Product));
        }
        let id = t.next_id();
        t.product_records.insert(id, ProductRecord { id, ..record.clone() });
        t.write();
        Ok(id)
    }
}

// ---
// Product batches
// ---
#[async_trait]
impl ProductBatchRepository for MemStore {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<ProductBatch>, StorageError> {
        Ok(self.open(scope)?.product_batches.values().cloned().collect())
    }

    async fn get(&self, scope: &RequestScope, id: i64) -> Result<ProductBatch, StorageError> {
        found(self.open(scope)?.product_batches.get(&id))
    }

    async fn exists(&self, scope: &RequestScope, batch_number: i32) -> Result<bool, StorageError> {
        Ok(self.open(scope)?.product_batches.values().any(|b| b.batch_number == batch_number))
    }

    async fn save(&self, scope: &RequestScope, batch: &ProductBatch) -> Result<i64, StorageError> {
        let mut t = self.open(scope)?;
        if !t.products.contains_key(&batch.product_id) {
            return Err(missing(Referenced::Product));
        }
        if !t.sections.contains_key(&batch.section_id) {
            return Err(missing(Referenced::Section));
        }
        let id = t.next_id();
        t.product_batches.insert(id, ProductBatch { id, ..batch.clone() });
        t.write();
        Ok(id)
    }
}

// ---
// Sections
// ---
#[async_trait]
impl SectionRepository for MemStore {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<Section>, StorageError> {
        Ok(self.open(scope)?.sections.values().cloned().collect())
    }

    async fn get(&self, scope: &RequestScope, id: i64) -> Result<Section, StorageError> {
        found(self.open(scope)?.sections.get(&id))
    }

    async fn exists(&self, scope: &RequestScope, section_number: i32) -> Result<bool, StorageError> {
        Ok(self.open(scope)?.sections.values().any(|s| s.section_number == section_number))
    }

    async fn save(&self, scope: &RequestScope, section: &Section) -> Result<i64, StorageError> {
        let mut t = self.open(scope)?;
        if !t.warehouses.contains_key(&section.warehouse_id) {
            return Err(missing(Referenced::Warehouse));
        }
        let id = t.next_id();
        t.sections.insert(id, Section { id, ..section.clone() });
        t.write();
        Ok(id)
    }

    async fn update(&self, scope: &RequestScope, section: &Section) -> Result<(), StorageError> {
        let mut t = self.open(scope)?;
        if !t.warehouses.contains_key(&section.warehouse_id) {
            return Err(missing(Referenced::Warehouse));
        }
        if t.sections.contains_key(&section.id) {
            t.sections.insert(section.id, section.clone());
            t.write();
        }
        Ok(())
    }

    async fn delete(&self, scope: &RequestScope, id: i64) -> Result<(), StorageError> {
        let mut t = self.open(scope)?;
        if !t.sections.contains_key(&id) {
            return Err(StorageError::NotFound);
        }
        if t.product_batches.values().any(|b| b.section_id == id) {
            return Err(missing(Referenced::Section));
        }
        t.sections.remove(&id);
        t.write();
        Ok(())
    }

    async fn report_products_all(
        &self,
        scope: &RequestScope,
    ) -> Result<Vec<ProductsBySection>, StorageError> {
        let t = self.open(scope)?;
        Ok(t.sections
            .values()
            .map(|s| ProductsBySection {
                section_id: s.id,
                section_number: s.section_number,
                products_count: t
                    .product_batches
                    .values()
                    .filter(|b| b.section_id == s.id)
                    .map(|b| i64::from(b.current_quantity))
                    .sum(),
            })
            .collect())
    }

    async fn report_products_by_id(
        &self,
        scope: &RequestScope,
        id: i64,
    ) -> Result<Vec<ProductsBySection>, StorageError> {
        let all = SectionRepository::report_products_all(self, scope).await?;
        non_empty(all.into_iter().filter(|r| r.section_id == id).collect())
    }
}

// ---
// Purchase orders
// ---
#[async_trait]
impl PurchaseOrderRepository for MemStore {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<PurchaseOrder>, StorageError> {
        Ok(self.open(scope)?.purchase_orders.values().cloned().collect())
    }

    async fn get(&self, scope: &RequestScope, id: i64) -> Result<PurchaseOrder, StorageError> {
        found(self.open(scope)?.purchase_orders.get(&id))
    }

    async fn exists(&self, scope: &RequestScope, order_number: &str) -> Result<bool, StorageError> {
        Ok(self.open(scope)?.purchase_orders.values().any(|o| o.order_number == order_number))
    }

    async fn save(&self, scope: &RequestScope, order: &PurchaseOrder) -> Result<i64, StorageError> {
        let mut t = self.open(scope)?;
        if !t.buyers.contains_key(&order.buyer_id) {
            return Err(missing(Referenced::Buyer));
        }
        if !t.product_records.contains_key(&order.product_record_id) {
            return Err(missing(Referenced::ProductRecord));
        }
        let id = t.next_id();
        t.purchase_orders.insert(id, PurchaseOrder { id, ..order.clone() });
        t.write();
        Ok(id)
    }
}

// ---
// Inbound orders
// ---
#[async_trait]
impl InboundOrderRepository for MemStore {
    async fn get_all(&self, scope: &RequestScope) -> Result<Vec<InboundOrder>, StorageError> {
        Ok(self.open(scope)?.inbound_orders.values().cloned().collect())
    }

    async fn get(&self, scope: &RequestScope, id: i64) -> Result<InboundOrder, StorageError> {
        found(self.open(scope)?.inbound_orders.get(&id))
    }

    async fn exists(&self, scope: &RequestScope, order_number: &str) -> Result<bool, StorageError> {
        Ok(self.open(scope)?.inbound_orders.values().any(|o| o.order_number == order_number))
    }

    async fn save(&self, scope: &RequestScope, order: &InboundOrder) -> Result<i64, StorageError> {
        let mut t = self.open(scope)?;
        if !t.employees.contains_key(&order.employee_id) {
            return Err(missing(Referenced::Employee));
        }
        if !t.warehouses.contains_key(&order.warehouse_id) {
            return Err(missing(Referenced::Warehouse));
        }
        if !t.product_batches.contains_key(&order.product_batch_id) {
            return Err(missing(Referenced::ProductBatch));
        }
        let id = t.next_id();
        t.inbound_orders.insert(id, InboundOrder { id, ..order.clone() });
        t.write();
        Ok(id)
    }
}
