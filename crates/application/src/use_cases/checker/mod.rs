mod apply_feed_event;
mod bulk_check;
mod bulk_update_block_status;
mod list_checker_urls;
mod update_block_status;

pub use apply_feed_event::{ApplyFeedEventUseCase, FeedOutcome};
pub use bulk_check::BulkCheckUseCase;
pub use bulk_update_block_status::{
    BulkStatusOutcome, BulkUpdateBlockStatusUseCase, StatusUpdateFailure, StatusUpdateRequest,
};
pub use list_checker_urls::ListCheckerUrlsUseCase;
pub use update_block_status::UpdateBlockStatusUseCase;
