//! Custom assertion helpers for domain types

use domain_claims::{Claim, ClaimFilter, ClaimStatistics};

/// Asserts every claim in `results` satisfies `filter` (soundness)
pub fn assert_search_sound(filter: &ClaimFilter, results: &[Claim]) {
    for claim in results {
        assert!(
            filter.matches(claim),
            "claim {} in results does not satisfy the filter",
            claim.claim_id
        );
    }
}

/// Asserts `results` contains every claim of `source` that satisfies
/// `filter`, in the same relative order (completeness + stable order)
pub fn assert_search_complete(filter: &ClaimFilter, source: &[Claim], results: &[Claim]) {
    let expected: Vec<&Claim> = source.iter().filter(|c| filter.matches(c)).collect();
    assert_eq!(
        expected.len(),
        results.len(),
        "result count differs from matching source records"
    );
    for (expected, actual) in expected.iter().zip(results) {
        assert_eq!(
            expected.claim_id, actual.claim_id,
            "results are not in source order"
        );
    }
}

/// Asserts a statistics report is the all-zero report
pub fn assert_zero_statistics(stats: &ClaimStatistics) {
    assert_eq!(stats.total_claims, 0);
    assert!(stats.approval_rate.is_zero());
    assert!(stats.average_amount.is_zero());
    assert!(stats.average_processing_time.is_zero());
}
