use brandwatch_domain::DashboardEvent;

/// Fan-out of dashboard events to currently connected subscribers.
///
/// Delivery is best effort: publishing never blocks and never fails, and an
/// event published while nobody is listening is dropped.
pub trait EventNotifier: Send + Sync {
    fn publish(&self, event: DashboardEvent);
}
