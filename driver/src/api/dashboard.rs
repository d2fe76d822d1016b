use serde::Deserialize;

use kernel::interface::query::DashboardQuery;
use kernel::prelude::entity::DashboardStats;
use kernel::KernelError;

use crate::api::RemoteApi;
use crate::error::ConvertError;

#[derive(Debug, Deserialize)]
struct StatsRow {
    active_rentals: i64,
    monthly_revenue: f64,
    available_equipment: i64,
}

impl From<StatsRow> for DashboardStats {
    fn from(value: StatsRow) -> Self {
        DashboardStats::new(
            value.active_rentals,
            value.monthly_revenue,
            value.available_equipment,
        )
    }
}

#[async_trait::async_trait]
impl DashboardQuery for RemoteApi {
    async fn stats(&self) -> error_stack::Result<DashboardStats, KernelError> {
        let row: StatsRow = self
            .client()
            .get(self.url("api/dashboard/stats/"))
            .send()
            .await
            .convert_error()?
            .error_for_status()
            .convert_error()?
            .json()
            .await
            .convert_error()?;
        Ok(DashboardStats::from(row))
    }
}
