use crate::entity::{Customer, CustomerDraft, CustomerId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CustomerModifier: 'static + Sync + Send {
    async fn create(&self, draft: &CustomerDraft) -> error_stack::Result<Customer, KernelError>;
    async fn update(
        &self,
        id: &CustomerId,
        draft: &CustomerDraft,
    ) -> error_stack::Result<Customer, KernelError>;
    async fn delete(&self, id: &CustomerId) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnCustomerModifier: 'static + Sync + Send {
    type CustomerModifier: CustomerModifier;
    fn customer_modifier(&self) -> &Self::CustomerModifier;
}
