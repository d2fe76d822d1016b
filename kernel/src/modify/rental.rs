use crate::entity::{Rental, RentalClosure, RentalDraft, RentalId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait RentalModifier: 'static + Sync + Send {
    async fn create(&self, draft: &RentalDraft) -> error_stack::Result<Rental, KernelError>;
    async fn update(
        &self,
        id: &RentalId,
        draft: &RentalDraft,
    ) -> error_stack::Result<Rental, KernelError>;
    /// Moves the rental to closed. Closing an already terminal rental
    /// is rejected remotely and surfaces as [`KernelError::Rejected`].
    async fn close(
        &self,
        id: &RentalId,
        closure: &RentalClosure,
    ) -> error_stack::Result<Rental, KernelError>;
    async fn delete(&self, id: &RentalId) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnRentalModifier: 'static + Sync + Send {
    type RentalModifier: RentalModifier;
    fn rental_modifier(&self) -> &Self::RentalModifier;
}
