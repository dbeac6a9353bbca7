mod brand_repository;
mod checker_client;
mod clock;
mod domain_log_repository;
mod domain_repository;
mod event_notifier;
mod feed_transport;

pub use brand_repository::BrandRepository;
pub use checker_client::CheckerClient;
pub use clock::{Clock, SystemClock};
pub use domain_log_repository::DomainLogRepository;
pub use domain_repository::DomainRepository;
pub use event_notifier::EventNotifier;
pub use feed_transport::{FeedConnection, FeedTransport};
