mod closure;
mod ended_at;
mod id;
mod notes;
mod reference;
mod started_at;
mod status;
mod total;

pub use self::{
    closure::*, ended_at::*, id::*, notes::*, reference::*, started_at::*, status::*, total::*,
};
use crate::entity::common::{CreatedAt, UpdatedAt};
use crate::entity::{CustomerId, EquipmentId};
use destructure::{Destructure, Mutation};
use time::OffsetDateTime;
use vodca::References;

#[derive(Debug, Clone, PartialEq, References, Destructure, Mutation)]
pub struct Rental {
    id: RentalId,
    customer: CustomerRef,
    equipment: EquipmentRef,
    started_at: StartedAt,
    ended_at: Option<EndedAt>,
    total_amount: Option<TotalAmount>,
    status: RentalStatus,
    notes: Option<RentalNotes>,
    created_at: CreatedAt<Rental>,
    updated_at: UpdatedAt<Rental>,
}

impl Rental {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: RentalId,
        customer: CustomerRef,
        equipment: EquipmentRef,
        started_at: StartedAt,
        ended_at: Option<EndedAt>,
        total_amount: Option<TotalAmount>,
        status: RentalStatus,
        notes: Option<RentalNotes>,
        created_at: CreatedAt<Rental>,
        updated_at: UpdatedAt<Rental>,
    ) -> Self {
        Self {
            id,
            customer,
            equipment,
            started_at,
            ended_at,
            total_amount,
            status,
            notes,
            created_at,
            updated_at,
        }
    }

    /// Still active and past its scheduled end instant.
    ///
    /// Open-ended rentals never expire, whatever `now` is.
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        self.status.is_active()
            && self
                .ended_at
                .as_ref()
                .is_some_and(|ended| now >= *ended.as_ref())
    }
}

/// Creation/full-update payload, identifier assigned remotely.
#[derive(Debug, Clone, PartialEq, References, Destructure)]
pub struct RentalDraft {
    customer_id: CustomerId,
    equipment_id: EquipmentId,
    started_at: StartedAt,
    ended_at: Option<EndedAt>,
    total_amount: Option<TotalAmount>,
    status: RentalStatus,
    notes: Option<RentalNotes>,
}

impl RentalDraft {
    pub fn new(
        customer_id: CustomerId,
        equipment_id: EquipmentId,
        started_at: StartedAt,
        ended_at: Option<EndedAt>,
        total_amount: Option<TotalAmount>,
        status: RentalStatus,
        notes: Option<RentalNotes>,
    ) -> Self {
        Self {
            customer_id,
            equipment_id,
            started_at,
            ended_at,
            total_amount,
            status,
            notes,
        }
    }
}

#[cfg(test)]
mod test {
    use time::macros::datetime;

    use crate::entity::{
        CreatedAt, CustomerId, CustomerName, CustomerRef, EndedAt, EquipmentId, EquipmentName,
        EquipmentRef, Rental, RentalId, RentalStatus, StartedAt, UpdatedAt,
    };

    fn rental(status: RentalStatus, ended_at: Option<EndedAt>) -> Rental {
        Rental::new(
            RentalId::new(1),
            CustomerRef::new(CustomerId::new(10), CustomerName::new("customer")),
            EquipmentRef::new(EquipmentId::new(20), EquipmentName::new("excavator")),
            StartedAt::new(datetime!(2024-01-01 10:00 UTC)),
            ended_at,
            None,
            status,
            None,
            CreatedAt::new(datetime!(2024-01-01 09:00 UTC)),
            UpdatedAt::new(datetime!(2024-01-01 09:00 UTC)),
        )
    }

    #[test]
    fn expires_once_end_instant_is_reached() {
        let target = rental(
            RentalStatus::Open,
            Some(EndedAt::new(datetime!(2024-01-02 10:00 UTC))),
        );
        assert!(!target.is_expired(datetime!(2024-01-02 09:59 UTC)));
        assert!(target.is_expired(datetime!(2024-01-02 10:00 UTC)));
        assert!(target.is_expired(datetime!(2024-01-03 10:00 UTC)));
    }

    #[test]
    fn open_ended_rental_never_expires() {
        let target = rental(RentalStatus::InProgress, None);
        assert!(!target.is_expired(datetime!(2099-01-01 00:00 UTC)));
    }

    #[test]
    fn terminal_rental_never_expires() {
        let ended = Some(EndedAt::new(datetime!(2024-01-02 10:00 UTC)));
        assert!(!rental(RentalStatus::Closed, ended.clone()).is_expired(datetime!(2024-02-01 00:00 UTC)));
        assert!(!rental(RentalStatus::Cancelled, ended).is_expired(datetime!(2024-02-01 00:00 UTC)));
    }
}
