pub mod assets;
pub mod bonus;
pub mod feedback;
pub mod ranker;

pub use assets::AssetStore;
pub use bonus::KeywordWeights;
pub use feedback::{CsvFeedbackSink, FeedbackSink};
