pub mod buyers;
pub mod carries;
pub mod employees;
pub mod inbound_orders;
pub mod localities;
pub mod product_batches;
pub mod product_records;
pub mod products;
pub mod purchase_orders;
pub mod sections;
pub mod sellers;
pub mod warehouses;

use serde::Deserialize;
use utoipa::IntoParams;

// ---
// Query dos relatórios: sem `id` = relatório de todos; com `id` = só aquele pai.
// ---
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportQuery {
    /// Id do registro pai; omitido devolve todos.
    pub id: Option<i64>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LocalityReportQuery {
    /// Código da localidade; omitido devolve todas.
    pub id: Option<String>,
}
