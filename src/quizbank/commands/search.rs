use crate::commands::{CmdMessage, CmdResult, ListedQuestion, SearchOutcome};
use crate::error::Result;
use crate::store::QuestionStore;

/// Case-insensitive substring scan over the question text only.
///
/// A blank term means no search was performed; that is a different outcome
/// from a search that found nothing.
pub fn run<S: QuestionStore>(store: &mut S, term: &str) -> Result<CmdResult> {
    let term = term.trim();
    if term.is_empty() {
        let mut result = CmdResult::default().with_search(SearchOutcome::NotSearched);
        result.add_message(CmdMessage::info("Nothing to search for."));
        return Ok(result);
    }

    let table = store.load()?;
    let needle = term.to_lowercase();
    let matches: Vec<ListedQuestion> = table
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| r.question.question.to_lowercase().contains(&needle))
        .map(|(i, r)| ListedQuestion {
            index: i + 1,
            id: r.id,
            question: r.question.clone(),
        })
        .collect();

    if matches.is_empty() {
        let mut result = CmdResult::default().with_search(SearchOutcome::NoMatches);
        result.add_message(CmdMessage::warning("No matching questions found."));
        return Ok(result);
    }
    Ok(CmdResult::default().with_search(SearchOutcome::Matches(matches)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn blank_term_is_not_searched() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "   ").unwrap();
        assert!(matches!(result.search, Some(SearchOutcome::NotSearched)));
    }

    #[test]
    fn no_match_is_distinct_from_not_searched() {
        let mut fixture = StoreFixture::new().with_question("Web", "What is CSS?");
        let result = run(&mut fixture.store, "xyz-no-match").unwrap();
        assert!(matches!(result.search, Some(SearchOutcome::NoMatches)));
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn match_is_case_insensitive_and_question_only() {
        let mut fixture = StoreFixture::new()
            .with_question("Math", "Basic MATH: 2+2?")
            .with_question("Web", "What is css?")
            .with_question("math", "flexbox or grid?");

        let result = run(&mut fixture.store, "math").unwrap();
        let matches = match result.search {
            Some(SearchOutcome::Matches(m)) => m,
            other => panic!("expected matches, got {:?}", other),
        };
        // The third row has "math" only in its track, which does not count.
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].index, 1);
        assert_eq!(matches[0].question.question, "Basic MATH: 2+2?");
    }

    #[test]
    fn matches_keep_table_order_and_indexes() {
        let mut fixture = StoreFixture::new()
            .with_question("Web", "html basics")
            .with_question("Web", "advanced HTML")
            .with_question("Web", "css only");

        let result = run(&mut fixture.store, "html").unwrap();
        let matches = match result.search {
            Some(SearchOutcome::Matches(m)) => m,
            other => panic!("expected matches, got {:?}", other),
        };
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].index, 1);
        assert_eq!(matches[1].index, 2);
    }
}
