#[cfg(test)]
mod tests {
    use ideadash::app::documentation::{fetch_documentation, filter_entries, DocEntry};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fetch_returns_four_entries_in_order() {
        let docs = fetch_documentation();
        let titles: Vec<&str> = docs.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["App Idea Generator", "Documentation", "Navigation", "Index Page"]
        );
    }

    #[test]
    fn test_empty_term_returns_full_list_unchanged() {
        let docs = fetch_documentation();
        let filtered = filter_entries(&docs, "");
        assert_eq!(filtered, docs);
    }

    #[test]
    fn test_nav_matches_exactly_navigation() {
        let docs = fetch_documentation();
        let filtered = filter_entries(&docs, "nav");
        let titles: Vec<&str> = filtered.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["Navigation"]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let docs = fetch_documentation();
        assert_eq!(filter_entries(&docs, "NAV"), filter_entries(&docs, "nav"));
        assert_eq!(
            filter_entries(&docs, "GENERATE"),
            filter_entries(&docs, "generate")
        );
    }

    #[test]
    fn test_filter_matches_description_too() {
        let docs = fetch_documentation();
        // "entry point" appears only in the Index Page description
        let filtered = filter_entries(&docs, "entry point");
        let titles: Vec<&str> = filtered.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["Index Page"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let docs = fetch_documentation();
        let once = filter_entries(&docs, "documentation");
        let twice = filter_entries(&once, "documentation");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_preserves_source_order() {
        let docs = vec![
            DocEntry {
                title: "Beta".to_string(),
                description: "second".to_string(),
                examples: None,
                notes: None,
            },
            DocEntry {
                title: "Alpha".to_string(),
                description: "first".to_string(),
                examples: None,
                notes: None,
            },
        ];

        // Both match; order must stay Beta, Alpha
        let filtered = filter_entries(&docs, "");
        let titles: Vec<&str> = filtered.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["Beta", "Alpha"]);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let docs = fetch_documentation();
        assert!(filter_entries(&docs, "quantum chromodynamics").is_empty());
    }
}
