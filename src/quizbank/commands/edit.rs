use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QuizError, Result};
use crate::form::{FormPatch, QuestionForm};
use crate::store::QuestionStore;

/// Edit the question at a 1-based display index. The index is resolved
/// against a fresh load and captured as a record id before any field is
/// touched; unset patch fields keep the pre-filled values.
pub fn run<S: QuestionStore>(store: &mut S, index: usize, patch: FormPatch) -> Result<CmdResult> {
    let table = store.load()?;
    let record = index
        .checked_sub(1)
        .and_then(|i| table.by_position(i))
        .ok_or_else(|| QuizError::Api(format!("No question at index {}", index)))?;

    let mut form = QuestionForm::edit(record);
    form.apply(patch);
    let row = form.submit(store)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Question updated ({}): {}",
        index, row.question
    )));
    result.affected.push(row);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::QuestionStore;

    #[test]
    fn edits_the_row_at_the_given_index() {
        let mut fixture = StoreFixture::new()
            .with_question("Web", "first")
            .with_question("Web", "second");

        let patch = FormPatch {
            question: Some("second v2".to_string()),
            ..Default::default()
        };
        run(&mut fixture.store, 2, patch).unwrap();

        let table = fixture.store.load().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.by_position(0).unwrap().question.question, "first");
        assert_eq!(table.by_position(1).unwrap().question.question, "second v2");
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let mut fixture = StoreFixture::new().with_question("Web", "only");
        let err = run(&mut fixture.store, 5, FormPatch::default());
        assert!(matches!(err, Err(QuizError::Api(_))));

        let err = run(&mut fixture.store, 0, FormPatch::default());
        assert!(matches!(err, Err(QuizError::Api(_))));
    }

    #[test]
    fn failed_validation_leaves_the_table_unchanged() {
        let mut fixture = StoreFixture::new().with_question("Web", "keep me");
        let patch = FormPatch {
            question: Some(String::new()),
            ..Default::default()
        };
        let err = run(&mut fixture.store, 1, patch);
        assert!(matches!(err, Err(QuizError::Validation(_))));

        let table = fixture.store.load().unwrap();
        assert_eq!(table.by_position(0).unwrap().question.question, "keep me");
    }
}
