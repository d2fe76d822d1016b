use vodca::References;

/// Headline numbers for the dashboard card.
#[derive(Debug, Clone, PartialEq, References)]
pub struct DashboardStats {
    active_rentals: i64,
    monthly_revenue: f64,
    available_equipment: i64,
}

impl DashboardStats {
    pub fn new(active_rentals: i64, monthly_revenue: f64, available_equipment: i64) -> Self {
        Self {
            active_rentals,
            monthly_revenue,
            available_equipment,
        }
    }
}
