use kernel::interface::query::{DashboardQuery, DependOnDashboardQuery};
use kernel::KernelError;

use crate::transfer::DashboardStatsDto;

#[async_trait::async_trait]
pub trait GetDashboardService: 'static + Sync + Send + DependOnDashboardQuery {
    async fn get_dashboard_stats(&self) -> error_stack::Result<DashboardStatsDto, KernelError> {
        let stats = self.dashboard_query().stats().await?;
        Ok(DashboardStatsDto::from(stats))
    }
}

impl<T> GetDashboardService for T where T: DependOnDashboardQuery {}
