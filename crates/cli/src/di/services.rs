use brandwatch_api::middleware::TokenAuthenticator;
use brandwatch_api::EventBroadcaster;
use brandwatch_application::ports::{
    CheckerClient, Clock, EventNotifier, FeedTransport, SystemClock,
};
use brandwatch_application::services::BroadcastCoalescer;
use brandwatch_domain::Config;
use brandwatch_infrastructure::checker::HttpCheckerClient;
use brandwatch_infrastructure::feed::WsFeedTransport;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Long-lived collaborators shared by the use cases, the web server and the jobs.
pub struct Services {
    pub events: Arc<EventBroadcaster>,
    pub notifier: Arc<dyn EventNotifier>,
    pub coalescer: Arc<BroadcastCoalescer>,
    pub clock: Arc<dyn Clock>,
    pub auth: Arc<TokenAuthenticator>,
    pub checker_client: Option<Arc<dyn CheckerClient>>,
    pub feed_transport: Option<Arc<dyn FeedTransport>>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let events = Arc::new(EventBroadcaster::new(
            config.broadcast.channel_capacity,
            Duration::from_secs(config.broadcast.keep_alive_secs),
        ));
        let notifier: Arc<dyn EventNotifier> = events.clone();

        let coalescer = Arc::new(BroadcastCoalescer::new(
            notifier.clone(),
            config.broadcast.flush_threshold,
            Duration::from_millis(config.broadcast.flush_window_ms),
        ));

        if config.auth.tokens.is_empty() {
            warn!("No auth tokens configured, protected endpoints will reject every request");
        }

        let checker_client: Option<Arc<dyn CheckerClient>> =
            match (&config.checker.bulk_check_url, &config.checker.api_key) {
                (Some(url), Some(key)) => {
                    info!(endpoint = %url, "Bulk check client enabled");
                    Some(Arc::new(HttpCheckerClient::new(
                        url,
                        key,
                        Duration::from_secs(config.checker.request_timeout_secs),
                    )?))
                }
                (Some(_), None) => {
                    warn!("checker.bulk_check_url is set without checker.api_key, bulk check disabled");
                    None
                }
                _ => None,
            };

        let feed_transport: Option<Arc<dyn FeedTransport>> = config
            .checker
            .feed_url
            .as_deref()
            .map(|url| {
                Arc::new(WsFeedTransport::new(
                    url,
                    Duration::from_secs(config.checker.connect_timeout_secs),
                )) as Arc<dyn FeedTransport>
            });

        Ok(Self {
            events,
            notifier,
            coalescer,
            clock: Arc::new(SystemClock),
            auth: Arc::new(TokenAuthenticator::new(&config.auth.tokens)),
            checker_client,
            feed_transport,
        })
    }
}
