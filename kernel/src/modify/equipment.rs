use crate::entity::{Equipment, EquipmentDraft, EquipmentId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait EquipmentModifier: 'static + Sync + Send {
    async fn create(&self, draft: &EquipmentDraft) -> error_stack::Result<Equipment, KernelError>;
    async fn update(
        &self,
        id: &EquipmentId,
        draft: &EquipmentDraft,
    ) -> error_stack::Result<Equipment, KernelError>;
    async fn delete(&self, id: &EquipmentId) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnEquipmentModifier: 'static + Sync + Send {
    type EquipmentModifier: EquipmentModifier;
    fn equipment_modifier(&self) -> &Self::EquipmentModifier;
}
