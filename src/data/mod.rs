pub mod listings;

pub use listings::ListingStore;
