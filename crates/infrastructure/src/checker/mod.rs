mod http_checker_client;

pub use http_checker_client::HttpCheckerClient;
