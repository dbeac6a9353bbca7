mod ws_feed_transport;

pub use ws_feed_transport::WsFeedTransport;
