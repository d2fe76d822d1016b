use kernel::prelude::entity::{Customer, DestructCustomer};
use time::{Date, OffsetDateTime};

#[derive(Debug, Clone)]
pub struct CustomerDto {
    pub id: i64,
    pub name: String,
    pub document: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub birth_date: Date,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<Customer> for CustomerDto {
    fn from(value: Customer) -> Self {
        let DestructCustomer {
            id,
            name,
            document,
            email,
            phone,
            address,
            birth_date,
            created_at,
            updated_at,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            document: document.into(),
            email: email.into(),
            phone: phone.into(),
            address: address.into(),
            birth_date: birth_date.into(),
            created_at: *created_at.as_ref(),
            updated_at: *updated_at.as_ref(),
        }
    }
}

pub struct GetCustomerDto {
    pub id: i64,
}

pub struct CreateCustomerDto {
    pub name: String,
    pub document: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub birth_date: Date,
}

pub struct UpdateCustomerDto {
    pub id: i64,
    pub name: String,
    pub document: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub birth_date: Date,
}

pub struct DeleteCustomerDto {
    pub id: i64,
}
