use kernel::interface::query::{DependOnEquipmentQuery, EquipmentQuery};
use kernel::interface::update::{DependOnEquipmentModifier, EquipmentModifier};
use kernel::prelude::entity::{DailyRate, EquipmentDraft, EquipmentId, EquipmentName};
use kernel::KernelError;

use crate::transfer::{
    CreateEquipmentDto, DeleteEquipmentDto, EquipmentDto, GetEquipmentDto, UpdateEquipmentDto,
};

#[async_trait::async_trait]
pub trait GetEquipmentService: 'static + Sync + Send + DependOnEquipmentQuery {
    async fn get_equipment_list(&self) -> error_stack::Result<Vec<EquipmentDto>, KernelError> {
        let equipment = self.equipment_query().find_all().await?;
        Ok(equipment.into_iter().map(EquipmentDto::from).collect())
    }

    async fn get_equipment(
        &self,
        dto: GetEquipmentDto,
    ) -> error_stack::Result<Option<EquipmentDto>, KernelError> {
        let id = EquipmentId::new(dto.id);
        let equipment = self.equipment_query().find_by_id(&id).await?;
        Ok(equipment.map(EquipmentDto::from))
    }
}

impl<T> GetEquipmentService for T where T: DependOnEquipmentQuery {}

#[async_trait::async_trait]
pub trait CreateEquipmentService: 'static + Sync + Send + DependOnEquipmentModifier {
    async fn create_equipment(
        &self,
        dto: CreateEquipmentDto,
    ) -> error_stack::Result<EquipmentDto, KernelError> {
        let draft = EquipmentDraft::new(
            EquipmentName::new(dto.name),
            dto.status,
            DailyRate::new(dto.daily_rate),
        );
        let equipment = self.equipment_modifier().create(&draft).await?;
        Ok(EquipmentDto::from(equipment))
    }
}

impl<T> CreateEquipmentService for T where T: DependOnEquipmentModifier {}

#[async_trait::async_trait]
pub trait UpdateEquipmentService: 'static + Sync + Send + DependOnEquipmentModifier {
    async fn update_equipment(
        &self,
        dto: UpdateEquipmentDto,
    ) -> error_stack::Result<EquipmentDto, KernelError> {
        let id = EquipmentId::new(dto.id);
        let draft = EquipmentDraft::new(
            EquipmentName::new(dto.name),
            dto.status,
            DailyRate::new(dto.daily_rate),
        );
        let equipment = self.equipment_modifier().update(&id, &draft).await?;
        Ok(EquipmentDto::from(equipment))
    }
}

impl<T> UpdateEquipmentService for T where T: DependOnEquipmentModifier {}

#[async_trait::async_trait]
pub trait DeleteEquipmentService: 'static + Sync + Send + DependOnEquipmentModifier {
    async fn delete_equipment(
        &self,
        dto: DeleteEquipmentDto,
    ) -> error_stack::Result<(), KernelError> {
        let id = EquipmentId::new(dto.id);
        self.equipment_modifier().delete(&id).await
    }
}

impl<T> DeleteEquipmentService for T where T: DependOnEquipmentModifier {}
