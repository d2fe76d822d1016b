use crate::transfer::{CustomerDto, DashboardStatsDto, EquipmentDto, RentalDto};

/// Owned caches behind the customers, equipment and rentals tabs.
///
/// The shell that renders the tabs owns one instance and hands it out
/// by reference; nothing here is process-wide. A refresh replaces the
/// whole list with the remote answer.
#[derive(Debug, Default)]
pub struct SessionView {
    customers: Vec<CustomerDto>,
    equipment: Vec<EquipmentDto>,
    rentals: Vec<RentalDto>,
    stats: Option<DashboardStatsDto>,
}

impl SessionView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_customers(&mut self, customers: Vec<CustomerDto>) {
        self.customers = customers;
    }

    pub fn replace_equipment(&mut self, equipment: Vec<EquipmentDto>) {
        self.equipment = equipment;
    }

    pub fn replace_rentals(&mut self, rentals: Vec<RentalDto>) {
        self.rentals = rentals;
    }

    pub fn set_stats(&mut self, stats: DashboardStatsDto) {
        self.stats = Some(stats);
    }

    pub fn customers(&self) -> &[CustomerDto] {
        &self.customers
    }

    pub fn equipment(&self) -> &[EquipmentDto] {
        &self.equipment
    }

    pub fn rentals(&self) -> &[RentalDto] {
        &self.rentals
    }

    pub fn stats(&self) -> Option<&DashboardStatsDto> {
        self.stats.as_ref()
    }
}

#[cfg(test)]
mod test {
    use time::macros::datetime;

    use kernel::prelude::entity::RentalStatus;

    use super::SessionView;
    use crate::transfer::{DashboardStatsDto, RentalDto};

    fn rental(id: i64) -> RentalDto {
        RentalDto {
            id,
            customer_id: 1,
            customer_name: "customer".to_string(),
            equipment_id: 2,
            equipment_name: "scaffolding".to_string(),
            started_at: datetime!(2024-01-01 10:00 UTC),
            ended_at: None,
            total_amount: None,
            status: RentalStatus::Open,
            notes: None,
            created_at: datetime!(2024-01-01 09:00 UTC),
            updated_at: datetime!(2024-01-01 09:00 UTC),
        }
    }

    #[test]
    fn refresh_replaces_the_cached_list() {
        let mut view = SessionView::new();
        view.replace_rentals(vec![rental(1), rental(2)]);
        view.replace_rentals(vec![rental(3)]);

        let ids: Vec<i64> = view.rentals().iter().map(|rental| rental.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn stats_start_absent_until_first_refresh() {
        let mut view = SessionView::new();
        assert!(view.stats().is_none());

        view.set_stats(DashboardStatsDto {
            active_rentals: 4,
            monthly_revenue: 1280.5,
            available_equipment: 7,
        });
        assert_eq!(view.stats().unwrap().active_rentals, 4);
    }
}
