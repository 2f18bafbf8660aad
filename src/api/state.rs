use std::sync::Arc;

use crate::{
    data::ListingStore,
    services::{AssetStore, FeedbackSink, KeywordWeights},
};

/// Shared application state
///
/// The listing table and keyword table are immutable after startup, so the
/// read path is lock-free; the feedback sink serializes its own appends.
#[derive(Clone)]
pub struct AppState {
    pub listings: Arc<ListingStore>,
    pub keywords: Arc<KeywordWeights>,
    pub feedback: Arc<dyn FeedbackSink>,
    pub assets: Arc<AssetStore>,
}

impl AppState {
    /// Assembles the application state with the default keyword table
    pub fn new(
        listings: Arc<ListingStore>,
        feedback: Arc<dyn FeedbackSink>,
        assets: Arc<AssetStore>,
    ) -> Self {
        Self {
            listings,
            keywords: Arc::new(KeywordWeights::default()),
            feedback,
            assets,
        }
    }
}
