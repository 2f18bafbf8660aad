use serde::{Deserialize, Serialize};

/// One restaurant/menu/region offering from the dataset
///
/// Immutable after load; derived scores are computed into fresh
/// [`ScoredListing`] values per query, never written back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    /// Restaurant name
    pub restaurant: String,
    /// Menu item name
    pub menu: String,
    /// Region name, one of the fixed set present in the dataset
    pub region: String,
    /// Price in won; always positive (zero-price rows are rejected at load)
    pub price: u32,
    /// Review rating on a 0-5 scale
    pub rating: f64,
    /// Free-text review summary the bonus keywords are matched against
    pub summary: String,
}

/// Priority criterion selecting the ranking formula
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriorityMode {
    /// Rank by (rating + bonus) / price, scaled for display
    CostEfficiency,
    /// Rank by rating alone
    Taste,
    /// Rank by bonus score alone
    Portion,
}

/// Medal label distinguishing the top three rank positions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Returns the medal for a 1-based rank position, if it is on the podium
    pub fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }
}

/// A listing augmented with its per-query derived scores and rank position
///
/// Exists only transiently for one ranking operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredListing {
    pub listing: Listing,
    /// Additive keyword-presence score from the review summary
    pub bonus_score: f64,
    /// Priority-mode-dependent scalar the ordering was produced from
    pub final_score: f64,
    /// 1-based position in the descending final-score order
    pub rank: usize,
    pub medal: Option<Medal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medals_cover_exactly_the_podium() {
        assert_eq!(Medal::for_rank(1), Some(Medal::Gold));
        assert_eq!(Medal::for_rank(2), Some(Medal::Silver));
        assert_eq!(Medal::for_rank(3), Some(Medal::Bronze));
        assert_eq!(Medal::for_rank(4), None);
        assert_eq!(Medal::for_rank(0), None);
    }

    #[test]
    fn test_priority_mode_serialization() {
        let json = serde_json::to_string(&PriorityMode::CostEfficiency).unwrap();
        assert_eq!(json, "\"cost_efficiency\"");

        let mode: PriorityMode = serde_json::from_str("\"portion\"").unwrap();
        assert_eq!(mode, PriorityMode::Portion);
    }
}
