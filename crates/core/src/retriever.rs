use knowledge_common::RetrievalOutcome;
use tracing::debug;

/// Retrieves knowledge for a query.
///
/// Every query maps to exactly one result. The operation is synchronous,
/// holds no state, and cannot fail, so a single `Retriever` can be shared
/// across threads without coordination.
#[derive(Debug, Clone, Default)]
pub struct Retriever;

impl Retriever {
    pub fn new() -> Self {
        Self
    }

    /// Returns the ordered result sequence for `query`.
    ///
    /// The sequence always contains exactly one element: the query echoed
    /// into the fixed result template.
    pub fn retrieve(&self, query: &str) -> Vec<String> {
        debug!("Retrieving results for query ({} bytes)", query.len());
        vec![format!("Result for {}", query)]
    }

    /// Runs a retrieval and packages it with the query it answered.
    pub fn retrieve_outcome(&self, query: &str) -> RetrievalOutcome {
        RetrievalOutcome::new(query.to_string(), self.retrieve(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_retrieve_returns_single_result() {
        let retriever = Retriever::new();
        let results = retriever.retrieve("test");

        assert_eq!(results.len(), 1);
        assert!(results[0].contains("test"));
    }

    #[test]
    fn test_retrieve_echoes_query_into_template() {
        let retriever = Retriever::new();

        assert_eq!(retriever.retrieve("test"), vec!["Result for test"]);
        assert_eq!(retriever.retrieve(""), vec!["Result for "]);
    }

    #[test]
    fn test_retrieve_handles_unicode_queries() {
        let retriever = Retriever::new();
        let results = retriever.retrieve("日本語 クエリ");

        assert_eq!(results, vec!["Result for 日本語 クエリ"]);
    }

    #[test]
    fn test_retrieve_is_deterministic() {
        let retriever = Retriever::new();

        assert_eq!(retriever.retrieve("repeat"), retriever.retrieve("repeat"));
    }

    #[test]
    fn test_retrieve_outcome_carries_query_and_total() {
        let retriever = Retriever::new();
        let outcome = retriever.retrieve_outcome("rust");

        assert_eq!(outcome.query, "rust");
        assert_eq!(outcome.total, 1);
        assert_eq!(outcome.results, vec!["Result for rust"]);
    }

    proptest! {
        #[test]
        fn prop_retrieve_always_returns_one_result(query in ".*") {
            let retriever = Retriever::new();
            prop_assert_eq!(retriever.retrieve(&query).len(), 1);
        }

        #[test]
        fn prop_result_contains_query(query in ".*") {
            let retriever = Retriever::new();
            let results = retriever.retrieve(&query);
            prop_assert!(results[0].contains(&query));
        }

        #[test]
        fn prop_result_matches_template_exactly(query in ".*") {
            let retriever = Retriever::new();
            let results = retriever.retrieve(&query);
            prop_assert_eq!(&results[0], &format!("Result for {}", query));
        }

        #[test]
        fn prop_retrieve_is_idempotent(query in ".*") {
            let retriever = Retriever::new();
            prop_assert_eq!(retriever.retrieve(&query), retriever.retrieve(&query));
        }
    }
}
