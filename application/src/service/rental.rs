use kernel::interface::query::{DependOnEquipmentQuery, DependOnRentalQuery, EquipmentQuery, RentalQuery};
use kernel::interface::update::{DependOnRentalModifier, RentalModifier};
use kernel::prelude::entity::{
    CustomerId, EndedAt, EquipmentId, RentalClosure, RentalDraft, RentalId, RentalNotes, StartedAt,
    TotalAmount,
};
use kernel::prelude::pricing;
use kernel::KernelError;

use crate::transfer::{
    CloseRentalDto, CreateRentalDto, DeleteRentalDto, GetRentalDto, QuoteRentalDto, RentalDto,
    UpdateRentalDto,
};

#[async_trait::async_trait]
pub trait GetRentalService: 'static + Sync + Send + DependOnRentalQuery {
    async fn get_rentals(&self) -> error_stack::Result<Vec<RentalDto>, KernelError> {
        let rentals = self.rental_query().find_all().await?;
        Ok(rentals.into_iter().map(RentalDto::from).collect())
    }

    async fn get_rental(
        &self,
        dto: GetRentalDto,
    ) -> error_stack::Result<Option<RentalDto>, KernelError> {
        let id = RentalId::new(dto.id);
        let rental = self.rental_query().find_by_id(&id).await?;
        Ok(rental.map(RentalDto::from))
    }
}

impl<T> GetRentalService for T where T: DependOnRentalQuery {}

#[async_trait::async_trait]
pub trait CreateRentalService: 'static + Sync + Send + DependOnRentalModifier {
    /// Stores the rental as submitted. The total travels verbatim: a
    /// hand-edited value wins over the calculator's suggestion.
    async fn create_rental(
        &self,
        dto: CreateRentalDto,
    ) -> error_stack::Result<RentalDto, KernelError> {
        let draft = RentalDraft::new(
            CustomerId::new(dto.customer_id),
            EquipmentId::new(dto.equipment_id),
            StartedAt::new(dto.started_at),
            dto.ended_at.map(EndedAt::new),
            dto.total_amount.map(TotalAmount::new),
            dto.status,
            dto.notes.map(RentalNotes::new),
        );
        let rental = self.rental_modifier().create(&draft).await?;
        Ok(RentalDto::from(rental))
    }
}

impl<T> CreateRentalService for T where T: DependOnRentalModifier {}

#[async_trait::async_trait]
pub trait UpdateRentalService: 'static + Sync + Send + DependOnRentalModifier {
    async fn update_rental(
        &self,
        dto: UpdateRentalDto,
    ) -> error_stack::Result<RentalDto, KernelError> {
        let id = RentalId::new(dto.id);
        let draft = RentalDraft::new(
            CustomerId::new(dto.customer_id),
            EquipmentId::new(dto.equipment_id),
            StartedAt::new(dto.started_at),
            dto.ended_at.map(EndedAt::new),
            dto.total_amount.map(TotalAmount::new),
            dto.status,
            dto.notes.map(RentalNotes::new),
        );
        let rental = self.rental_modifier().update(&id, &draft).await?;
        Ok(RentalDto::from(rental))
    }
}

impl<T> UpdateRentalService for T where T: DependOnRentalModifier {}

#[async_trait::async_trait]
pub trait CloseRentalService: 'static + Sync + Send + DependOnRentalModifier {
    /// User-initiated closure. Without an explicit end instant the
    /// remote api records the current one.
    async fn close_rental(
        &self,
        dto: CloseRentalDto,
    ) -> error_stack::Result<RentalDto, KernelError> {
        let id = RentalId::new(dto.id);
        let closure = RentalClosure::manual(dto.ended_at.map(EndedAt::new));
        let rental = self.rental_modifier().close(&id, &closure).await?;
        Ok(RentalDto::from(rental))
    }
}

impl<T> CloseRentalService for T where T: DependOnRentalModifier {}

#[async_trait::async_trait]
pub trait DeleteRentalService: 'static + Sync + Send + DependOnRentalModifier {
    async fn delete_rental(&self, dto: DeleteRentalDto) -> error_stack::Result<(), KernelError> {
        let id = RentalId::new(dto.id);
        self.rental_modifier().delete(&id).await
    }
}

impl<T> DeleteRentalService for T where T: DependOnRentalModifier {}

#[async_trait::async_trait]
pub trait QuoteRentalService: 'static + Sync + Send + DependOnEquipmentQuery {
    /// Total suggestion for the editing workflow.
    ///
    /// Nothing is suggested while the selected equipment is unknown or
    /// the period is not chargeable yet; the form field stays empty.
    async fn quote_rental(
        &self,
        dto: QuoteRentalDto,
    ) -> error_stack::Result<Option<f64>, KernelError> {
        let id = EquipmentId::new(dto.equipment_id);
        let Some(equipment) = self.equipment_query().find_by_id(&id).await? else {
            return Ok(None);
        };
        let started_at = StartedAt::new(dto.started_at);
        let ended_at = dto.ended_at.map(EndedAt::new);
        let total = pricing::quote(&started_at, ended_at.as_ref(), Some(equipment.daily_rate()));
        Ok(total.map(Into::into))
    }
}

impl<T> QuoteRentalService for T where T: DependOnEquipmentQuery {}

#[cfg(test)]
mod test {
    use time::macros::datetime;

    use kernel::interface::query::{DependOnEquipmentQuery, EquipmentQuery};
    use kernel::prelude::entity::{
        DailyRate, Equipment, EquipmentId, EquipmentName, EquipmentStatus,
    };
    use kernel::KernelError;

    use super::QuoteRentalService;
    use crate::transfer::QuoteRentalDto;

    struct OneMachine;

    #[async_trait::async_trait]
    impl EquipmentQuery for OneMachine {
        async fn find_all(&self) -> error_stack::Result<Vec<Equipment>, KernelError> {
            unimplemented!("not exercised by quote tests")
        }

        async fn find_by_id(
            &self,
            id: &EquipmentId,
        ) -> error_stack::Result<Option<Equipment>, KernelError> {
            Ok((*id.as_ref() == 3).then(|| {
                Equipment::new(
                    EquipmentId::new(3),
                    EquipmentName::new("excavator"),
                    EquipmentStatus::Available,
                    DailyRate::new(240.0),
                )
            }))
        }
    }

    struct TestModule {
        equipment: OneMachine,
    }

    impl DependOnEquipmentQuery for TestModule {
        type EquipmentQuery = OneMachine;
        fn equipment_query(&self) -> &OneMachine {
            &self.equipment
        }
    }

    #[tokio::test]
    async fn suggests_total_for_known_equipment() {
        let module = TestModule {
            equipment: OneMachine,
        };
        let total = module
            .quote_rental(QuoteRentalDto {
                equipment_id: 3,
                started_at: datetime!(2024-01-01 10:00 UTC),
                ended_at: Some(datetime!(2024-01-01 13:30 UTC)),
            })
            .await
            .unwrap();
        assert_eq!(total, Some(35.0));
    }

    #[tokio::test]
    async fn unknown_equipment_suggests_nothing() {
        let module = TestModule {
            equipment: OneMachine,
        };
        let total = module
            .quote_rental(QuoteRentalDto {
                equipment_id: 99,
                started_at: datetime!(2024-01-01 10:00 UTC),
                ended_at: Some(datetime!(2024-01-01 13:30 UTC)),
            })
            .await
            .unwrap();
        assert_eq!(total, None);
    }

    #[tokio::test]
    async fn open_ended_period_suggests_nothing() {
        let module = TestModule {
            equipment: OneMachine,
        };
        let total = module
            .quote_rental(QuoteRentalDto {
                equipment_id: 3,
                started_at: datetime!(2024-01-01 10:00 UTC),
                ended_at: None,
            })
            .await
            .unwrap();
        assert_eq!(total, None);
    }
}
