// Integration tests for the playback cursor

use algotrace::algorithms::problems::{run, Problem, RunRequest};
use algotrace::playback::Playback;
use algotrace::snapshot::Snapshot;

fn trace(problem: Problem) -> Vec<Snapshot> {
    run(RunRequest::sample(problem))
        .expect("sample runs")
        .snapshots
}

#[test]
fn test_starts_at_first_snapshot() {
    let playback = Playback::new(trace(Problem::Anagrams));
    assert_eq!(playback.cursor(), 0);
    assert!(playback.is_at_start());
    let current = playback.current().expect("current snapshot");
    assert!(current.action.is_initialize());
}

#[test]
fn test_next_and_prev_stop_at_bounds() {
    let mut playback = Playback::new(trace(Problem::SumList));
    let len = playback.len();

    assert!(!playback.prev());
    assert_eq!(playback.cursor(), 0);

    let mut moves = 0;
    while playback.next() {
        moves += 1;
    }
    assert_eq!(moves, len - 1);
    assert_eq!(playback.cursor(), len - 1);
    assert!(!playback.next());
    assert_eq!(playback.cursor(), len - 1);

    assert!(playback.prev());
    assert_eq!(playback.cursor(), len - 2);
}

#[test]
fn test_seek_clamps() {
    let mut playback = Playback::new(trace(Problem::ReverseList));
    let last = playback.len() - 1;

    assert_eq!(playback.seek(-5), 0);
    assert_eq!(playback.seek(3), 3);
    assert_eq!(playback.seek(10_000), last);
    assert_eq!(playback.seek(i64::MAX), last);

    // Seeking twice to the same place changes nothing
    assert_eq!(playback.seek(2), 2);
    let before = playback.current().cloned();
    assert_eq!(playback.seek(2), 2);
    assert_eq!(playback.current().cloned(), before);
}

#[test]
fn test_position_pairs_cursor_with_snapshot() {
    let mut playback = Playback::new(trace(Problem::MaxPathSum));
    playback.seek(4);
    let (cursor, snapshot) = playback.position();
    assert_eq!(cursor, 4);
    assert_eq!(snapshot.map(|s| s.index), Some(4));
}

#[test]
fn test_jump_and_rewind() {
    let mut playback = Playback::new(trace(Problem::BreadthFirstValues));
    playback.jump_to_end();
    assert!(playback.is_at_end());
    let last = playback.current().expect("last snapshot");
    assert!(last.action.is_terminal());

    playback.rewind();
    assert!(playback.is_at_start());
}

#[test]
fn test_load_resets_cursor() {
    let mut playback = Playback::new(trace(Problem::PairSum));
    playback.jump_to_end();

    let replacement = trace(Problem::MostFrequentChar);
    let len = replacement.len();
    playback.load(replacement);

    assert_eq!(playback.cursor(), 0);
    assert_eq!(playback.len(), len);
}

#[test]
fn test_empty_playback() {
    let mut playback = Playback::default();
    assert!(playback.is_empty());
    assert!(playback.current().is_none());
    assert!(!playback.next());
    assert!(!playback.prev());
    assert_eq!(playback.seek(3), 0);
}

#[test]
fn test_stepping_back_reads_recorded_state() {
    let snapshots = trace(Problem::Intersection);
    let mut playback = Playback::new(snapshots.clone());

    playback.seek(5);
    let forward = playback.current().cloned();
    playback.jump_to_end();
    playback.seek(5);
    assert_eq!(playback.current().cloned(), forward);
    assert_eq!(forward.as_ref(), snapshots.get(5));
}
