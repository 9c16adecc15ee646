// src/tests/report_tests.rs

#[cfg(test)]
mod report_tests {
    use axum::http::{Method, StatusCode};
    use chrono::NaiveDate;

    use crate::{
        models::{inbound_order::InboundOrder, purchase_order::PurchaseOrder, product_record::ProductRecord},
        tests::{
            fakes::MemStore,
            support::{app, error_message, send},
        },
    };

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn products_by_section_sums_batch_quantities() {
        let store = MemStore::new();
        store.seed_locality("5700", "San Luis");
        let warehouse = store.seed_warehouse("WH-1", "5700");
        let first = store.seed_section(1, warehouse.id);
        let second = store.seed_section(2, warehouse.id);
        let product = store.seed_product("PRD-1", None);
        store.seed_batch(10, 30, product.id, first.id);
        store.seed_batch(11, 12, product.id, first.id);
        let app = app(&store);

        let (status, body) = send(&app, Method::GET, "/api/v1/sections/reportProducts", None).await;
        assert_eq!(status, StatusCode::OK);
        let rows = body["data"].as_array().unwrap();
        assert_eq!(rows.len(), 2);

        let row = |id: i64| rows.iter().find(|r| r["section_id"] == id).unwrap();
        assert_eq!(row(first.id)["products_count"], 42);
        assert_eq!(row(second.id)["products_count"], 0);

        let uri = format!("/api/v1/sections/reportProducts?id={}", first.id);
        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["section_number"], 1);

        let (status, body) =
            send(&app, Method::GET, "/api/v1/sections/reportProducts?id=999999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error_message(&body), "section not found");
    }

    #[tokio::test]
    async fn sellers_and_carries_by_locality() {
        let store = MemStore::new();
        store.seed_locality("5700", "San Luis");
        store.seed_locality("6700", "Luján");
        store.seed_seller(1, "5700");
        store.seed_seller(2, "5700");
        let app = app(&store);

        let (status, body) =
            send(&app, Method::GET, "/api/v1/localities/reportSellers?id=5700", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["locality_name"], "San Luis");
        assert_eq!(body["data"][0]["sellers_count"], 2);

        let (status, body) = send(&app, Method::GET, "/api/v1/localities/reportCarries", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"][0]["carries_count"], 0);

        let (status, body) =
            send(&app, Method::GET, "/api/v1/localities/reportCarries?id=0000", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error_message(&body), "locality not found");
    }

    #[tokio::test]
    async fn inbound_orders_by_employee_by_query_and_by_path() {
        let store = MemStore::new();
        store.seed_locality("5700", "San Luis");
        let warehouse = store.seed_warehouse("WH-1", "5700");
        let section = store.seed_section(1, warehouse.id);
        let product = store.seed_product("PRD-1", None);
        let batch = store.seed_batch(10, 5, product.id, section.id);
        let busy = store.seed_employee("EMP-1", warehouse.id);
        let idle = store.seed_employee("EMP-2", warehouse.id);

        {
            let mut tables = store.tables();
            for (n, id) in [(1, 900), (2, 901)] {
                tables.inbound_orders.insert(
                    id,
                    InboundOrder {
                        id,
                        order_date: day(2030, 1, n),
                        order_number: format!("ORD-{n}"),
                        employee_id: busy.id,
                        product_batch_id: batch.id,
                        warehouse_id: warehouse.id,
                    },
                );
            }
        }
        let app = app(&store);

        let (status, body) =
            send(&app, Method::GET, "/api/v1/employees/reportInboundOrders", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);

        let uri = format!("/api/v1/employees/reportInboundOrders?id={}", busy.id);
        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["inbound_orders_count"], 2);

        let uri = format!("/api/v1/employees/reportInboundOrders/{}", idle.id);
        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["inbound_orders_count"], 0);

        let (status, _) =
            send(&app, Method::GET, "/api/v1/employees/reportInboundOrders/424242", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn purchase_orders_by_buyer_and_records_by_product() {
        let store = MemStore::new();
        let buyer = store.seed_buyer("BUY-1");
        let product = store.seed_product("PRD-1", None);

        {
            let mut tables = store.tables();
            tables.product_records.insert(
                500,
                ProductRecord {
                    id: 500,
                    last_update_date: day(2030, 2, 1),
                    purchase_price: 10.0,
                    sale_price: 12.0,
                    product_id: product.id,
                },
            );
            tables.purchase_orders.insert(
                600,
                PurchaseOrder {
                    id: 600,
                    order_number: "PO-1".to_string(),
                    order_date: day(2030, 2, 2),
                    tracking_code: "TRK-1".to_string(),
                    buyer_id: buyer.id,
                    product_record_id: 500,
                    order_status_id: 1,
                },
            );
        }
        let app = app(&store);

        let uri = format!("/api/v1/buyers/reportPurchaseOrder?id={}", buyer.id);
        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["orders_count"], 1);
        assert_eq!(body["data"][0]["card_number_id"], "BUY-1");
        assert_eq!(body["data"][0]["buyer_id"], buyer.id);
        assert!(body["data"][0].get("id").is_none());

        let uri = format!("/api/v1/purchase_orders/reportPurchaseOrder?id={}", buyer.id);
        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["buyer_id"], buyer.id);
        assert_eq!(body["data"][0]["orders_count"], 1);

        let uri = format!("/api/v1/products/reportRecords?id={}", product.id);
        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["records_count"], 1);
        assert_eq!(body["data"][0]["description"], "Maçãs");

        let (status, body) =
            send(&app, Method::GET, "/api/v1/products/reportRecords?id=31337", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error_message(&body), "product not found");
    }

    #[tokio::test]
    async fn non_numeric_report_id_is_a_bad_request() {
        let store = MemStore::new();
        let app = app(&store);

        let (status, body) =
            send(&app, Method::GET, "/api/v1/sections/reportProducts?id=abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_message(&body), "invalid query parameter");
    }
}
