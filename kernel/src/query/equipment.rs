use crate::entity::{Equipment, EquipmentId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait EquipmentQuery: Sync + Send + 'static {
    async fn find_all(&self) -> error_stack::Result<Vec<Equipment>, KernelError>;
    async fn find_by_id(
        &self,
        id: &EquipmentId,
    ) -> error_stack::Result<Option<Equipment>, KernelError>;
}

pub trait DependOnEquipmentQuery: Sync + Send + 'static {
    type EquipmentQuery: EquipmentQuery;
    fn equipment_query(&self) -> &Self::EquipmentQuery;
}
