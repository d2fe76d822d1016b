use crate::entity::DashboardStats;
use crate::KernelError;

#[async_trait::async_trait]
pub trait DashboardQuery: Sync + Send + 'static {
    async fn stats(&self) -> error_stack::Result<DashboardStats, KernelError>;
}

pub trait DependOnDashboardQuery: Sync + Send + 'static {
    type DashboardQuery: DashboardQuery;
    fn dashboard_query(&self) -> &Self::DashboardQuery;
}
