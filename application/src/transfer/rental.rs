use kernel::prelude::entity::{
    DestructCustomerRef, DestructEquipmentRef, DestructRental, Rental, RentalStatus,
};
use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub struct RentalDto {
    pub id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub equipment_id: i64,
    pub equipment_name: String,
    pub started_at: OffsetDateTime,
    pub ended_at: Option<OffsetDateTime>,
    pub total_amount: Option<f64>,
    pub status: RentalStatus,
    pub notes: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<Rental> for RentalDto {
    fn from(value: Rental) -> Self {
        let DestructRental {
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
        } = value.into_destruct();
        let DestructCustomerRef {
            id: customer_id,
            name: customer_name,
        } = customer.into_destruct();
        let DestructEquipmentRef {
            id: equipment_id,
            name: equipment_name,
        } = equipment.into_destruct();
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            customer_name: customer_name.into(),
            equipment_id: equipment_id.into(),
            equipment_name: equipment_name.into(),
            started_at: started_at.into(),
            ended_at: ended_at.map(Into::into),
            total_amount: total_amount.map(Into::into),
            status,
            notes: notes.map(Into::into),
            created_at: *created_at.as_ref(),
            updated_at: *updated_at.as_ref(),
        }
    }
}

pub struct GetRentalDto {
    pub id: i64,
}

pub struct CreateRentalDto {
    pub customer_id: i64,
    pub equipment_id: i64,
    pub started_at: OffsetDateTime,
    pub ended_at: Option<OffsetDateTime>,
    pub total_amount: Option<f64>,
    pub status: RentalStatus,
    pub notes: Option<String>,
}

pub struct UpdateRentalDto {
    pub id: i64,
    pub customer_id: i64,
    pub equipment_id: i64,
    pub started_at: OffsetDateTime,
    pub ended_at: Option<OffsetDateTime>,
    pub total_amount: Option<f64>,
    pub status: RentalStatus,
    pub notes: Option<String>,
}

pub struct CloseRentalDto {
    pub id: i64,
    pub ended_at: Option<OffsetDateTime>,
}

pub struct DeleteRentalDto {
    pub id: i64,
}

/// Inputs of the editing workflow's automatic total suggestion.
pub struct QuoteRentalDto {
    pub equipment_id: i64,
    pub started_at: OffsetDateTime,
    pub ended_at: Option<OffsetDateTime>,
}
