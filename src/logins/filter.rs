//! Login Filter
//!
//! Service-name filtering over the loaded login list.

use super::record::LoginRecord;

/// Filter logins by case-insensitive substring match on the service name.
///
/// An empty query, or an empty input list, returns the full list unchanged.
/// The result is always derived from `all`, never from a previous filter
/// result, so repeating the same query yields the same records.
pub fn filter_by_service(all: &[LoginRecord], query: &str) -> Vec<LoginRecord> {
    if query.is_empty() || all.is_empty() {
        return all.to_vec();
    }

    let needle = query.to_lowercase();
    all.iter()
        .filter(|login| login.service_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_logins() -> Vec<LoginRecord> {
        vec![
            LoginRecord::new("1", "Gmail", "a@a.com", "p1"),
            LoginRecord::new("2", "GitHub", "b@b.com", "p2"),
            LoginRecord::new("3", "Spotify", "c@c.com", "p3"),
        ]
    }

    #[test]
    fn test_empty_query_returns_all() {
        let all = sample_logins();
        assert_eq!(filter_by_service(&all, ""), all);
    }

    #[test]
    fn test_empty_list_returns_empty() {
        assert_eq!(filter_by_service(&[], "gmail"), Vec::new());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let all = sample_logins();

        let results = filter_by_service(&all, "gm");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].service_name, "Gmail");

        let results = filter_by_service(&all, "GIT");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].service_name, "GitHub");
    }

    #[test]
    fn test_substring_match_anywhere() {
        let all = sample_logins();

        let results = filter_by_service(&all, "hub");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].service_name, "GitHub");
    }

    #[test]
    fn test_kept_and_dropped_records() {
        let all = sample_logins();
        let results = filter_by_service(&all, "gi");

        for login in &all {
            let matches = login.service_name.to_lowercase().contains("gi");
            assert_eq!(results.contains(login), matches);
        }
    }

    #[test]
    fn test_no_match_is_empty() {
        let all = sample_logins();
        assert_eq!(filter_by_service(&all, "zz"), Vec::new());
    }

    #[test]
    fn test_filter_is_idempotent_over_canonical_list() {
        let all = sample_logins();

        let first = filter_by_service(&all, "g");
        let second = filter_by_service(&all, "g");
        assert_eq!(first, second);

        // Narrowing queries still run against the full list, not the
        // previous result.
        let narrowed = filter_by_service(&all, "spo");
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0].service_name, "Spotify");
    }
}
