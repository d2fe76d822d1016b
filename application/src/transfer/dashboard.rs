use kernel::prelude::entity::DashboardStats;

#[derive(Debug, Clone)]
pub struct DashboardStatsDto {
    pub active_rentals: i64,
    pub monthly_revenue: f64,
    pub available_equipment: i64,
}

impl From<DashboardStats> for DashboardStatsDto {
    fn from(value: DashboardStats) -> Self {
        Self {
            active_rentals: *value.active_rentals(),
            monthly_revenue: *value.monthly_revenue(),
            available_equipment: *value.available_equipment(),
        }
    }
}
