//! Startup loading of the restaurant listings dataset.

use std::io::Read;
use std::path::Path;

use anyhow::Context;

use crate::models::Listing;

/// In-memory table of restaurant listings
///
/// Loaded once at startup and read-only afterwards; every query works over
/// the same immutable rows, so no locking is needed on the read path.
#[derive(Debug, Default)]
pub struct ListingStore {
    listings: Vec<Listing>,
}

impl ListingStore {
    /// Loads the dataset from a CSV file.
    ///
    /// A missing file or a schema mismatch (missing column, unparsable cell)
    /// is a fatal startup error.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open dataset at {}", path.display()))?;
        Self::from_reader(file)
            .with_context(|| format!("Failed to load dataset from {}", path.display()))
    }

    /// Reads listings from CSV data with a header row.
    ///
    /// Rows with a zero price are skipped with a warning: the cost-efficiency
    /// formula divides by price, so a zero-price row is a data-quality defect
    /// the ranking must never see.
    pub fn from_reader<R: Read>(reader: R) -> anyhow::Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut listings = Vec::new();

        for row in csv_reader.deserialize::<Listing>() {
            let listing = row.context("Dataset schema mismatch")?;
            if listing.price == 0 {
                tracing::warn!(
                    restaurant = %listing.restaurant,
                    menu = %listing.menu,
                    "Skipping listing with zero price"
                );
                continue;
            }
            listings.push(listing);
        }

        Ok(Self { listings })
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Distinct regions in first-seen order, for the caller's region selector
    pub fn regions(&self) -> Vec<String> {
        let mut regions: Vec<String> = Vec::new();
        for listing in &self.listings {
            if !regions.contains(&listing.region) {
                regions.push(listing.region.clone());
            }
        }
        regions
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
