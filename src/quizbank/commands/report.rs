use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::QuestionStore;

#[derive(Debug, Clone)]
pub struct TrackCount {
    pub track: String,
    pub count: usize,
}

/// One (time, mark) point of the scatter summary, tagged with its track
/// and question text for hover-style labelling.
#[derive(Debug, Clone)]
pub struct ScatterPoint {
    pub track: String,
    pub question: String,
    pub time_seconds: u32,
    pub mark: f64,
}

/// Read-only aggregate view of the table: row counts grouped by track and
/// the (time, mark) scatter. No mutation, no caching of its own.
#[derive(Debug, Clone, Default)]
pub struct TrackSummary {
    pub counts: Vec<TrackCount>,
    pub points: Vec<ScatterPoint>,
}

pub fn run<S: QuestionStore>(store: &mut S) -> Result<CmdResult> {
    let table = store.load()?;

    let counts = table
        .tracks()
        .into_iter()
        .map(|track| TrackCount {
            count: table.rows().filter(|q| q.track == track).count(),
            track,
        })
        .collect();

    let points = table
        .rows()
        .map(|q| ScatterPoint {
            track: q.track.clone(),
            question: q.question.clone(),
            time_seconds: q.time_seconds,
            mark: q.mark,
        })
        .collect();

    Ok(CmdResult::default().with_summary(TrackSummary { counts, points }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{question, StoreFixture};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn counts_group_by_track_in_first_seen_order() {
        let mut fixture = StoreFixture::new()
            .with_question("Web", "one")
            .with_question("Data", "two")
            .with_question("Web", "three");
        let result = run(&mut fixture.store).unwrap();
        let summary = result.summary.unwrap();

        assert_eq!(summary.counts.len(), 2);
        assert_eq!(summary.counts[0].track, "Web");
        assert_eq!(summary.counts[0].count, 2);
        assert_eq!(summary.counts[1].track, "Data");
        assert_eq!(summary.counts[1].count, 1);
    }

    #[test]
    fn points_carry_time_mark_and_track() {
        let mut row = question("Web", "timed", ["a", "b", "", ""], "a");
        row.mark = 2.5;
        row.time_seconds = 45;
        let mut fixture = StoreFixture::new().with_row(row);

        let result = run(&mut fixture.store).unwrap();
        let summary = result.summary.unwrap();
        assert_eq!(summary.points.len(), 1);
        assert_eq!(summary.points[0].time_seconds, 45);
        assert_eq!(summary.points[0].mark, 2.5);
        assert_eq!(summary.points[0].track, "Web");
    }

    #[test]
    fn empty_table_yields_empty_summary() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store).unwrap();
        let summary = result.summary.unwrap();
        assert!(summary.counts.is_empty());
        assert!(summary.points.is_empty());
    }
}
