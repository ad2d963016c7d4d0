use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::{FormDefaults, FormPatch, QuestionForm};
use crate::store::QuestionStore;

pub fn run<S: QuestionStore>(
    store: &mut S,
    mut defaults: FormDefaults,
    patch: FormPatch,
) -> Result<CmdResult> {
    // When no track is given, prefer the first track already in the table
    // over the configured default, matching the choice a track picker
    // would pre-select.
    if patch.track.is_none() {
        if let Some(first) = store.load()?.tracks().into_iter().next() {
            defaults.track = first;
        }
    }

    let mut form = QuestionForm::add(defaults);
    form.apply(patch);
    let row = form.submit(store)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Question added: {}",
        row.question
    )));
    result.affected.push(row);
    Ok(result)
}
