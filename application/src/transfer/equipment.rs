use kernel::prelude::entity::{DestructEquipment, Equipment, EquipmentStatus};

#[derive(Debug, Clone)]
pub struct EquipmentDto {
    pub id: i64,
    pub name: String,
    pub status: EquipmentStatus,
    pub daily_rate: f64,
}

impl From<Equipment> for EquipmentDto {
    fn from(value: Equipment) -> Self {
        let DestructEquipment {
            id,
            name,
            status,
            daily_rate,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            status,
            daily_rate: daily_rate.into(),
        }
    }
}

pub struct GetEquipmentDto {
    pub id: i64,
}

pub struct CreateEquipmentDto {
    pub name: String,
    pub status: EquipmentStatus,
    pub daily_rate: f64,
}

pub struct UpdateEquipmentDto {
    pub id: i64,
    pub name: String,
    pub status: EquipmentStatus,
    pub daily_rate: f64,
}

pub struct DeleteEquipmentDto {
    pub id: i64,
}
