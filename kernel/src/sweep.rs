use time::OffsetDateTime;
use tracing::warn;

use crate::entity::RentalClosure;
use crate::modify::RentalModifier;
use crate::query::RentalQuery;
use crate::KernelError;

/// One expiry pass over the rental collection.
///
/// Implementations report how many rentals they moved to closed. The
/// pass must be idempotent: running it twice in a row closes nothing
/// the second time.
#[async_trait::async_trait]
pub trait ExpirySweep: 'static + Sync + Send {
    async fn sweep(&self, now: OffsetDateTime) -> error_stack::Result<u32, KernelError>;
}

pub trait DependOnExpirySweep: 'static + Sync + Send {
    type ExpirySweep: ExpirySweep;
    fn expiry_sweep(&self) -> &Self::ExpirySweep;
}

/// Client-side evaluation over the full rental list.
///
/// Issues one automatic close per expired rental, keeping the scheduled
/// end instant untouched. A failed close leaves that rental for the
/// next pass and never stops the remainder.
pub struct LocalSweep<Q, M> {
    query: Q,
    modifier: M,
}

impl<Q, M> LocalSweep<Q, M> {
    pub fn new(query: Q, modifier: M) -> Self {
        Self { query, modifier }
    }
}

#[async_trait::async_trait]
impl<Q: RentalQuery, M: RentalModifier> ExpirySweep for LocalSweep<Q, M> {
    async fn sweep(&self, now: OffsetDateTime) -> error_stack::Result<u32, KernelError> {
        let rentals = self.query.find_all().await?;
        let mut closed = 0;
        for rental in rentals.iter().filter(|rental| rental.is_expired(now)) {
            match self
                .modifier
                .close(rental.id(), &RentalClosure::automatic())
                .await
            {
                Ok(_) => closed += 1,
                Err(report) => {
                    warn!(
                        id = *rental.id().as_ref(),
                        "Automatic close failed, rental kept for the next pass: {report:?}"
                    );
                }
            }
        }
        Ok(closed)
    }
}

/// Runs the primary strategy and falls back on any failure.
///
/// Both sides answer the same contract, so callers cannot tell which
/// path produced the count.
pub struct FallbackSweep<P, S> {
    primary: P,
    secondary: S,
}

impl<P, S> FallbackSweep<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

#[async_trait::async_trait]
impl<P: ExpirySweep, S: ExpirySweep> ExpirySweep for FallbackSweep<P, S> {
    async fn sweep(&self, now: OffsetDateTime) -> error_stack::Result<u32, KernelError> {
        match self.primary.sweep(now).await {
            Ok(closed) => Ok(closed),
            Err(report) => {
                warn!("Batched expiry check failed, evaluating locally: {report:?}");
                self.secondary.sweep(now).await
            }
        }
    }
}
