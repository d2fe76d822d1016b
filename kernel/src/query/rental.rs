use crate::entity::{Rental, RentalId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait RentalQuery: Sync + Send + 'static {
    async fn find_all(&self) -> error_stack::Result<Vec<Rental>, KernelError>;
    async fn find_by_id(&self, id: &RentalId)
        -> error_stack::Result<Option<Rental>, KernelError>;
}

pub trait DependOnRentalQuery: Sync + Send + 'static {
    type RentalQuery: RentalQuery;
    fn rental_query(&self) -> &Self::RentalQuery;
}
