use crate::commands::{CmdMessage, CmdResult, ListedQuestion};
use crate::error::Result;
use crate::store::QuestionStore;

pub fn run<S: QuestionStore>(store: &mut S) -> Result<CmdResult> {
    let table = store.load()?;
    let listed: Vec<ListedQuestion> = table
        .records()
        .iter()
        .enumerate()
        .map(|(i, r)| ListedQuestion {
            index: i + 1,
            id: r.id,
            question: r.question.clone(),
        })
        .collect();

    let mut result = CmdResult::default().with_listed(listed);
    if result.listed.is_empty() {
        result.add_message(CmdMessage::info("No questions yet."));
    }
    Ok(result)
}
