mod brand_resolver;
mod broadcast_coalescer;
mod dedup_index;
mod feed_link;

pub use brand_resolver::BrandResolver;
pub use broadcast_coalescer::BroadcastCoalescer;
pub use dedup_index::DedupIndex;
pub use feed_link::{FeedLink, LinkState};
