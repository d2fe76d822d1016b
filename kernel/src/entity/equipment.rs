mod daily_rate;
mod id;
mod name;
mod status;

pub use self::{daily_rate::*, id::*, name::*, status::*};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, PartialEq, References, Destructure, Mutation)]
pub struct Equipment {
    id: EquipmentId,
    name: EquipmentName,
    status: EquipmentStatus,
    daily_rate: DailyRate,
}

impl Equipment {
    pub fn new(
        id: EquipmentId,
        name: EquipmentName,
        status: EquipmentStatus,
        daily_rate: DailyRate,
    ) -> Self {
        Self {
            id,
            name,
            status,
            daily_rate,
        }
    }
}

/// Creation/update payload, identifier assigned remotely.
#[derive(Debug, Clone, PartialEq, References, Destructure)]
pub struct EquipmentDraft {
    name: EquipmentName,
    status: EquipmentStatus,
    daily_rate: DailyRate,
}

impl EquipmentDraft {
    pub fn new(name: EquipmentName, status: EquipmentStatus, daily_rate: DailyRate) -> Self {
        Self {
            name,
            status,
            daily_rate,
        }
    }
}
