//! Filtering, scoring and ordering of listings for one recommendation query.

use std::cmp::Ordering;

use crate::models::{Listing, Medal, PriorityMode, ScoredListing};
use crate::services::bonus::KeywordWeights;

/// Display scale applied to cost-efficiency scores. Kept for compatibility
/// with historical score output; it does not affect relative ordering.
const COST_EFFICIENCY_SCALE: f64 = 1000.0;

/// Ranks the listings matching a menu/region query, best first.
///
/// Filters on exact, case-sensitive equality of both the menu and region
/// fields, attaches the keyword bonus from each review summary, computes the
/// final score for the selected priority mode and sorts descending. The sort
/// is stable, so listings with equal final scores keep their original
/// filtered order. Rank positions are 1-based and the top three carry medals.
///
/// An empty result is a valid outcome (no matches), not an error. The input
/// table is never mutated; scored rows are freshly constructed per call.
pub fn rank(
    listings: &[Listing],
    menu: &str,
    region: &str,
    priority: PriorityMode,
    keywords: &KeywordWeights,
) -> Vec<ScoredListing> {
    let mut scored: Vec<ScoredListing> = listings
        .iter()
        .filter(|listing| listing.menu == menu && listing.region == region)
        .map(|listing| score_listing(listing, priority, keywords))
        .collect();

    scored.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(Ordering::Equal)
    });

    for (index, entry) in scored.iter_mut().enumerate() {
        entry.rank = index + 1;
        entry.medal = Medal::for_rank(entry.rank);
    }

    scored
}

fn score_listing(
    listing: &Listing,
    priority: PriorityMode,
    keywords: &KeywordWeights,
) -> ScoredListing {
    let bonus_score = keywords.bonus(&listing.summary);

    // Bonus is always computed and carried, even in modes that ignore it.
    let final_score = match priority {
        PriorityMode::CostEfficiency => {
            (listing.rating + bonus_score) / f64::from(listing.price) * COST_EFFICIENCY_SCALE
        }
        PriorityMode::Taste => listing.rating,
        PriorityMode::Portion => bonus_score,
    };

    ScoredListing {
        listing: listing.clone(),
        bonus_score,
        final_score,
        rank: 0,
        medal: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(restaurant: &str, price: u32, rating: f64, summary: &str) -> Listing {
        Listing {
            restaurant: restaurant.to_string(),
            menu: "제육볶음".to_string(),
            region: "서울".to_string(),
            price,
            rating,
            summary: summary.to_string(),
        }
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_worked_example_scores() {
        let listings = vec![listing("백반집", 9000, 4.5, "양 많고 불향 가득")];
        let weights = KeywordWeights::default();

        let by_cost = rank(
            &listings,
            "제육볶음",
            "서울",
            PriorityMode::CostEfficiency,
            &weights,
        );
        assert_eq!(by_cost.len(), 1);
        assert!(approx_eq(by_cost[0].bonus_score, 0.5));
        assert!(approx_eq(by_cost[0].final_score, 0.5556));

        let by_taste = rank(&listings, "제육볶음", "서울", PriorityMode::Taste, &weights);
        assert!(approx_eq(by_taste[0].final_score, 4.5));
        assert!(approx_eq(by_taste[0].bonus_score, 0.5));

        let by_portion = rank(
            &listings,
            "제육볶음",
            "서울",
            PriorityMode::Portion,
            &weights,
        );
        assert!(approx_eq(by_portion[0].final_score, 0.5));
    }

    #[test]
    fn test_filter_requires_exact_match_on_both_fields() {
        let mut other_region = listing("부산집", 8000, 4.9, "");
        other_region.region = "부산".to_string();
        let mut other_menu = listing("냉면집", 8000, 4.9, "");
        other_menu.menu = "물냉면".to_string();
        let listings = vec![
            listing("서울집", 9000, 4.0, ""),
            other_region,
            other_menu,
        ];
        let weights = KeywordWeights::default();

        let ranked = rank(&listings, "제육볶음", "서울", PriorityMode::Taste, &weights);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].listing.restaurant, "서울집");
    }

    #[test]
    fn test_no_match_returns_empty_not_error() {
        let listings = vec![listing("서울집", 9000, 4.0, "")];
        let weights = KeywordWeights::default();

        let ranked = rank(&listings, "갈비탕", "서울", PriorityMode::Taste, &weights);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_taste_order_follows_rating_alone() {
        // High bonus on the low-rated listing must not affect taste ranking
        let listings = vec![
            listing("별로집", 5000, 3.0, "양 많고 불향 가득 햄 푸짐"),
            listing("맛집", 20000, 4.8, ""),
            listing("중간집", 9000, 4.1, "밑반찬"),
        ];
        let weights = KeywordWeights::default();

        let ranked = rank(&listings, "제육볶음", "서울", PriorityMode::Taste, &weights);
        let order: Vec<&str> = ranked
            .iter()
            .map(|entry| entry.listing.restaurant.as_str())
            .collect();
        assert_eq!(order, vec!["맛집", "중간집", "별로집"]);
    }

    #[test]
    fn test_portion_order_follows_bonus_alone() {
        let listings = vec![
            listing("평점만높은집", 5000, 5.0, ""),
            listing("푸짐한집", 20000, 3.0, "양 많고 불향 가득"),
            listing("반찬집", 9000, 4.0, "밑반찬 좋아요"),
        ];
        let weights = KeywordWeights::default();

        let ranked = rank(
            &listings,
            "제육볶음",
            "서울",
            PriorityMode::Portion,
            &weights,
        );
        let order: Vec<&str> = ranked
            .iter()
            .map(|entry| entry.listing.restaurant.as_str())
            .collect();
        assert_eq!(order, vec!["푸짐한집", "반찬집", "평점만높은집"]);
    }

    #[test]
    fn test_cost_efficiency_is_invariant_under_price_scaling() {
        let listings = vec![
            listing("가집", 7000, 4.2, "양 많고"),
            listing("나집", 12000, 4.8, "불향"),
            listing("다집", 9000, 3.9, "밑반찬"),
        ];
        let scaled: Vec<Listing> = listings
            .iter()
            .cloned()
            .map(|mut entry| {
                entry.price *= 3;
                entry
            })
            .collect();
        let weights = KeywordWeights::default();

        let base = rank(
            &listings,
            "제육볶음",
            "서울",
            PriorityMode::CostEfficiency,
            &weights,
        );
        let rescaled = rank(
            &scaled,
            "제육볶음",
            "서울",
            PriorityMode::CostEfficiency,
            &weights,
        );

        for (a, b) in base.iter().zip(rescaled.iter()) {
            assert_eq!(a.listing.restaurant, b.listing.restaurant);
            assert!(approx_eq(a.final_score / 3.0, b.final_score));
        }
    }

    #[test]
    fn test_equal_scores_keep_filtered_order() {
        let listings = vec![
            listing("먼저들어온집", 9000, 4.0, ""),
            listing("나중들어온집", 12000, 4.0, ""),
            listing("일등집", 9000, 4.7, ""),
        ];
        let weights = KeywordWeights::default();

        let ranked = rank(&listings, "제육볶음", "서울", PriorityMode::Taste, &weights);
        let order: Vec<&str> = ranked
            .iter()
            .map(|entry| entry.listing.restaurant.as_str())
            .collect();
        assert_eq!(order, vec!["일등집", "먼저들어온집", "나중들어온집"]);
    }

    #[test]
    fn test_rank_is_idempotent() {
        let listings = vec![
            listing("가집", 7000, 4.2, "양 많고"),
            listing("나집", 12000, 4.8, "불향"),
        ];
        let weights = KeywordWeights::default();

        let first = rank(
            &listings,
            "제육볶음",
            "서울",
            PriorityMode::CostEfficiency,
            &weights,
        );
        let second = rank(
            &listings,
            "제육볶음",
            "서울",
            PriorityMode::CostEfficiency,
            &weights,
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_ranks_and_medals_are_assigned_in_order() {
        let listings = vec![
            listing("일집", 9000, 4.9, ""),
            listing("이집", 9000, 4.5, ""),
            listing("삼집", 9000, 4.1, ""),
            listing("사집", 9000, 3.8, ""),
        ];
        let weights = KeywordWeights::default();

        let ranked = rank(&listings, "제육볶음", "서울", PriorityMode::Taste, &weights);
        let ranks: Vec<usize> = ranked.iter().map(|entry| entry.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
        assert_eq!(ranked[0].medal, Some(Medal::Gold));
        assert_eq!(ranked[1].medal, Some(Medal::Silver));
        assert_eq!(ranked[2].medal, Some(Medal::Bronze));
        assert_eq!(ranked[3].medal, None);
    }
}
