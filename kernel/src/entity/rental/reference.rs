use destructure::Destructure;
use vodca::References;

use crate::entity::{CustomerId, CustomerName, EquipmentId, EquipmentName};

/// Customer as delivered nested on a rental row.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct CustomerRef {
    id: CustomerId,
    name: CustomerName,
}

impl CustomerRef {
    pub fn new(id: CustomerId, name: CustomerName) -> Self {
        Self { id, name }
    }
}

/// Equipment as delivered nested on a rental row.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct EquipmentRef {
    id: EquipmentId,
    name: EquipmentName,
}

impl EquipmentRef {
    pub fn new(id: EquipmentId, name: EquipmentName) -> Self {
        Self { id, name }
    }
}
