pub mod checker_feed;
pub mod runner;

pub use checker_feed::CheckerFeedJob;
pub use runner::JobRunner;
