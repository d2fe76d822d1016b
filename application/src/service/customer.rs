use kernel::interface::query::{CustomerQuery, DependOnCustomerQuery};
use kernel::interface::update::{CustomerModifier, DependOnCustomerModifier};
use kernel::prelude::entity::{
    Address, BirthDate, CustomerDocument, CustomerDraft, CustomerId, CustomerName, EmailAddress,
    PhoneNumber,
};
use kernel::KernelError;

use crate::transfer::{
    CreateCustomerDto, CustomerDto, DeleteCustomerDto, GetCustomerDto, UpdateCustomerDto,
};

fn draft(
    name: String,
    document: String,
    email: String,
    phone: String,
    address: String,
    birth_date: time::Date,
) -> CustomerDraft {
    CustomerDraft::new(
        CustomerName::new(name),
        CustomerDocument::new(document),
        EmailAddress::new(email),
        PhoneNumber::new(phone),
        Address::new(address),
        BirthDate::new(birth_date),
    )
}

#[async_trait::async_trait]
pub trait GetCustomerService: 'static + Sync + Send + DependOnCustomerQuery {
    async fn get_customers(&self) -> error_stack::Result<Vec<CustomerDto>, KernelError> {
        let customers = self.customer_query().find_all().await?;
        Ok(customers.into_iter().map(CustomerDto::from).collect())
    }

    async fn get_customer(
        &self,
        dto: GetCustomerDto,
    ) -> error_stack::Result<Option<CustomerDto>, KernelError> {
        let id = CustomerId::new(dto.id);
        let customer = self.customer_query().find_by_id(&id).await?;
        Ok(customer.map(CustomerDto::from))
    }
}

impl<T> GetCustomerService for T where T: DependOnCustomerQuery {}

#[async_trait::async_trait]
pub trait CreateCustomerService: 'static + Sync + Send + DependOnCustomerModifier {
    async fn create_customer(
        &self,
        dto: CreateCustomerDto,
    ) -> error_stack::Result<CustomerDto, KernelError> {
        let draft = draft(
            dto.name,
            dto.document,
            dto.email,
            dto.phone,
            dto.address,
            dto.birth_date,
        );
        let customer = self.customer_modifier().create(&draft).await?;
        Ok(CustomerDto::from(customer))
    }
}

impl<T> CreateCustomerService for T where T: DependOnCustomerModifier {}

#[async_trait::async_trait]
pub trait UpdateCustomerService: 'static + Sync + Send + DependOnCustomerModifier {
    async fn update_customer(
        &self,
        dto: UpdateCustomerDto,
    ) -> error_stack::Result<CustomerDto, KernelError> {
        let id = CustomerId::new(dto.id);
        let draft = draft(
            dto.name,
            dto.document,
            dto.email,
            dto.phone,
            dto.address,
            dto.birth_date,
        );
        let customer = self.customer_modifier().update(&id, &draft).await?;
        Ok(CustomerDto::from(customer))
    }
}

impl<T> UpdateCustomerService for T where T: DependOnCustomerModifier {}

#[async_trait::async_trait]
pub trait DeleteCustomerService: 'static + Sync + Send + DependOnCustomerModifier {
    async fn delete_customer(
        &self,
        dto: DeleteCustomerDto,
    ) -> error_stack::Result<(), KernelError> {
        let id = CustomerId::new(dto.id);
        self.customer_modifier().delete(&id).await
    }
}

impl<T> DeleteCustomerService for T where T: DependOnCustomerModifier {}
