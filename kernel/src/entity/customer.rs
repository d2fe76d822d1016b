mod address;
mod birth_date;
mod document;
mod email;
mod id;
mod name;
mod phone;

pub use self::{address::*, birth_date::*, document::*, email::*, id::*, name::*, phone::*};
use crate::entity::common::{CreatedAt, UpdatedAt};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Customer {
    id: CustomerId,
    name: CustomerName,
    document: CustomerDocument,
    email: EmailAddress,
    phone: PhoneNumber,
    address: Address,
    birth_date: BirthDate,
    created_at: CreatedAt<Customer>,
    updated_at: UpdatedAt<Customer>,
}

impl Customer {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: CustomerId,
        name: CustomerName,
        document: CustomerDocument,
        email: EmailAddress,
        phone: PhoneNumber,
        address: Address,
        birth_date: BirthDate,
        created_at: CreatedAt<Customer>,
        updated_at: UpdatedAt<Customer>,
    ) -> Self {
        Self {
            id,
            name,
            document,
            email,
            phone,
            address,
            birth_date,
            created_at,
            updated_at,
        }
    }
}

/// Creation/update payload, identifier assigned remotely.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct CustomerDraft {
    name: CustomerName,
    document: CustomerDocument,
    email: EmailAddress,
    phone: PhoneNumber,
    address: Address,
    birth_date: BirthDate,
}

impl CustomerDraft {
    pub fn new(
        name: CustomerName,
        document: CustomerDocument,
        email: EmailAddress,
        phone: PhoneNumber,
        address: Address,
        birth_date: BirthDate,
    ) -> Self {
        Self {
            name,
            document,
            email,
            phone,
            address,
            birth_date,
        }
    }
}
