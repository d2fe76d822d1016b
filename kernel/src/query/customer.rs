use crate::entity::{Customer, CustomerId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CustomerQuery: Sync + Send + 'static {
    async fn find_all(&self) -> error_stack::Result<Vec<Customer>, KernelError>;
    async fn find_by_id(
        &self,
        id: &CustomerId,
    ) -> error_stack::Result<Option<Customer>, KernelError>;
}

pub trait DependOnCustomerQuery: Sync + Send + 'static {
    type CustomerQuery: CustomerQuery;
    fn customer_query(&self) -> &Self::CustomerQuery;
}
