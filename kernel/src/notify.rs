/// Outbound signal for reconciler results.
///
/// Fired at most once per pass, and only when at least one rental was
/// closed; whatever refresh the shell performs therefore happens once.
pub trait ExpiryObserver: 'static + Sync + Send {
    fn rentals_closed(&self, count: u32);
}

pub trait DependOnExpiryObserver: 'static + Sync + Send {
    type ExpiryObserver: ExpiryObserver;
    fn expiry_observer(&self) -> &Self::ExpiryObserver;
}
