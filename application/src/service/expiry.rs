use time::OffsetDateTime;
use tracing::{debug, info};
use uuid::Uuid;

use kernel::interface::notify::{DependOnExpiryObserver, ExpiryObserver};
use kernel::interface::sweep::{DependOnExpirySweep, ExpirySweep};
use kernel::KernelError;

/// Drives one reconciliation pass at a time.
///
/// The strategy composed behind [`DependOnExpirySweep`] decides whether
/// the remote batched check or the local evaluation runs; this service
/// only reports the outcome. The observer fires at most once per pass.
#[async_trait::async_trait]
pub trait ExpiryService: 'static + Sync + Send + DependOnExpirySweep + DependOnExpiryObserver {
    async fn run_expiry_pass(&self, now: OffsetDateTime) -> error_stack::Result<u32, KernelError> {
        let pass = Uuid::new_v4();
        let closed = self.expiry_sweep().sweep(now).await?;
        if closed > 0 {
            info!(%pass, closed, "Expired rentals closed automatically");
            self.expiry_observer().rentals_closed(closed);
        } else {
            debug!(%pass, "No rental past its end instant");
        }
        Ok(closed)
    }
}

impl<T> ExpiryService for T where T: DependOnExpirySweep + DependOnExpiryObserver {}

#[cfg(test)]
mod test {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};

    use error_stack::Report;
    use time::macros::datetime;
    use time::OffsetDateTime;

    use kernel::interface::notify::{DependOnExpiryObserver, ExpiryObserver};
    use kernel::interface::sweep::{DependOnExpirySweep, ExpirySweep};
    use kernel::KernelError;

    use super::ExpiryService;

    struct StubSweep {
        answer: Result<u32, KernelError>,
        calls: AtomicU32,
    }

    #[async_trait::async_trait]
    impl ExpirySweep for StubSweep {
        async fn sweep(&self, _: OffsetDateTime) -> error_stack::Result<u32, KernelError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.answer {
                Ok(closed) => Ok(*closed),
                Err(KernelError::Transport) => Err(Report::new(KernelError::Transport)),
                Err(_) => Err(Report::new(KernelError::Internal)),
            }
        }
    }

    #[derive(Clone, Default)]
    struct RecordingObserver {
        notified: Arc<Mutex<Vec<u32>>>,
    }

    impl ExpiryObserver for RecordingObserver {
        fn rentals_closed(&self, count: u32) {
            self.notified.lock().unwrap().push(count);
        }
    }

    struct TestModule {
        sweep: StubSweep,
        observer: RecordingObserver,
    }

    impl TestModule {
        fn new(answer: Result<u32, KernelError>) -> Self {
            Self {
                sweep: StubSweep {
                    answer,
                    calls: AtomicU32::new(0),
                },
                observer: RecordingObserver::default(),
            }
        }
    }

    impl DependOnExpirySweep for TestModule {
        type ExpirySweep = StubSweep;
        fn expiry_sweep(&self) -> &StubSweep {
            &self.sweep
        }
    }

    impl DependOnExpiryObserver for TestModule {
        type ExpiryObserver = RecordingObserver;
        fn expiry_observer(&self) -> &RecordingObserver {
            &self.observer
        }
    }

    const NOW: OffsetDateTime = datetime!(2024-06-01 12:00 UTC);

    #[tokio::test]
    async fn reports_batch_count_and_refreshes_once() {
        let module = TestModule::new(Ok(2));

        let closed = module.run_expiry_pass(NOW).await.unwrap();

        assert_eq!(closed, 2);
        let notified = module.observer.notified.lock().unwrap();
        assert_eq!(*notified, vec![2]);
    }

    #[tokio::test]
    async fn silent_when_nothing_expired() {
        let module = TestModule::new(Ok(0));

        let closed = module.run_expiry_pass(NOW).await.unwrap();

        assert_eq!(closed, 0);
        assert!(module.observer.notified.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_pass_propagates_without_notification() {
        let module = TestModule::new(Err(KernelError::Transport));

        let result = module.run_expiry_pass(NOW).await;

        assert!(result.is_err());
        assert!(module.observer.notified.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn each_pass_sweeps_exactly_once() {
        let module = TestModule::new(Ok(1));

        module.run_expiry_pass(NOW).await.unwrap();
        module.run_expiry_pass(NOW).await.unwrap();

        assert_eq!(module.sweep.calls.load(Ordering::SeqCst), 2);
    }
}
