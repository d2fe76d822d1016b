use tokio::sync::mpsc;
use tracing::warn;

use kernel::interface::notify::ExpiryObserver;

/// Forwards each positive reconciler result to the shell loop, which
/// reacts with one notification and one refresh.
#[derive(Clone)]
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<u32>,
}

impl ChannelObserver {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<u32>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl ExpiryObserver for ChannelObserver {
    fn rentals_closed(&self, count: u32) {
        if self.tx.send(count).is_err() {
            warn!(count, "Shell loop gone, notification dropped");
        }
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::notify::ExpiryObserver;

    use super::ChannelObserver;

    #[tokio::test]
    async fn forwards_each_result_once() {
        let (observer, mut rx) = ChannelObserver::new();
        observer.rentals_closed(2);

        assert_eq!(rx.recv().await, Some(2));
        assert!(rx.try_recv().is_err());
    }
}
