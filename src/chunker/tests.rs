use super::*;
use crate::config::ChunkSettings;
use crate::error::ConfigError;
use proptest::prelude::*;

fn ranges(plan: &ChunkPlan) -> Vec<(usize, usize)> {
    plan.iter().map(|e| (e.start_line, e.end_line)).collect()
}

#[test]
fn test_default_settings_on_thousand_lines() {
    let plan = plan(1000, 500, 5).unwrap();

    assert_eq!(plan.len(), 3);
    assert_eq!(ranges(&plan), vec![(1, 500), (476, 975), (951, 1000)]);
    assert_eq!(plan.entries[2].line_count, 50);
    assert_eq!(plan.entries[0].overlap_lines, 0);
    assert_eq!(plan.entries[1].overlap_lines, 25);
    assert_eq!(plan.entries[2].overlap_lines, 25);
}

#[test]
fn test_file_exactly_one_chunk_long() {
    let plan = plan(500, 500, 5).unwrap();

    assert_eq!(plan.len(), 1);
    let only = plan.entries[0];
    assert_eq!((only.start_line, only.end_line), (1, 500));
    assert_eq!(only.overlap_lines, 0);
    assert_eq!(only.line_count, 500);
}

#[test]
fn test_file_shorter_than_chunk() {
    let plan = plan(42, 500, 5).unwrap();

    assert_eq!(ranges(&plan), vec![(1, 42)]);
    assert_eq!(plan.entries[0].line_count, 42);
}

#[test]
fn test_empty_file_plans_no_chunks() {
    let plan = plan(0, 500, 5).unwrap();

    assert!(plan.is_empty());
    assert_eq!(plan.total_lines, 0);
}

#[test]
fn test_full_overlap_is_rejected() {
    assert_eq!(
        plan(1000, 100, 100),
        Err(ConfigError::NonAdvancing {
            chunk_size: 100,
            overlap_lines: 100,
        })
    );
}

#[test]
fn test_invalid_parameters_are_rejected() {
    assert_eq!(plan(10, 0, 5), Err(ConfigError::ZeroChunkSize));
    assert_eq!(
        plan(10, 10, 150),
        Err(ConfigError::OverlapOutOfRange { percent: 150 })
    );
}

#[test]
fn test_zero_percent_still_overlaps_one_line() {
    let plan = plan(25, 10, 0).unwrap();

    assert_eq!(ranges(&plan), vec![(1, 10), (10, 19), (19, 25)]);
    assert_eq!(plan.entries[1].overlap_lines, 1);
}

#[test]
fn test_final_window_ending_on_last_line_stops() {
    // 10 + 9 = 19: the second window ends exactly on the last line
    let plan = plan(19, 10, 10).unwrap();

    assert_eq!(ranges(&plan), vec![(1, 10), (10, 19)]);
}

#[test]
fn test_entry_range_is_zero_based() {
    let plan = plan(1000, 500, 5).unwrap();
    assert_eq!(plan.entries[1].range(), 475..975);
}

#[test]
fn test_plan_records_settings() {
    let settings = ChunkSettings::new(200, 10).unwrap();
    let plan = plan_chunks(1000, &settings);
    assert_eq!(plan.settings, settings);
}

fn valid_settings() -> impl Strategy<Value = ChunkSettings> {
    (1usize..400, 0u32..=100)
        .prop_filter_map("window must advance", |(size, percent)| {
            ChunkSettings::new(size, percent).ok()
        })
}

proptest! {
    #[test]
    fn prop_chunks_cover_every_line(total in 0usize..5000, settings in valid_settings()) {
        let plan = plan_chunks(total, &settings);

        let mut covered = vec![false; total];
        for entry in plan.iter() {
            prop_assert!(entry.start_line >= 1);
            prop_assert!(entry.end_line <= total);
            for line in entry.range() {
                covered[line] = true;
            }
        }
        prop_assert!(covered.iter().all(|c| *c));
    }

    #[test]
    fn prop_last_chunk_ends_at_last_line(total in 1usize..5000, settings in valid_settings()) {
        let plan = plan_chunks(total, &settings);

        let last = plan.entries.last().unwrap();
        prop_assert_eq!(last.end_line, total);
    }

    #[test]
    fn prop_overlap_reporting(total in 1usize..5000, settings in valid_settings()) {
        let plan = plan_chunks(total, &settings);

        prop_assert_eq!(plan.entries[0].overlap_lines, 0);
        for entry in plan.entries.iter().skip(1) {
            prop_assert_eq!(entry.overlap_lines, settings.overlap_lines());
        }
    }

    #[test]
    fn prop_entries_are_numbered_in_order(total in 0usize..5000, settings in valid_settings()) {
        let plan = plan_chunks(total, &settings);

        for (i, entry) in plan.iter().enumerate() {
            prop_assert_eq!(entry.number, i + 1);
            prop_assert_eq!(entry.line_count, entry.end_line - entry.start_line + 1);
            prop_assert!(entry.line_count <= settings.chunk_size());
        }
    }

    #[test]
    fn prop_stripping_overlap_reassembles_source(total in 0usize..3000, settings in valid_settings()) {
        let source: Vec<usize> = (0..total).collect();
        let plan = plan_chunks(total, &settings);

        let mut rebuilt = Vec::with_capacity(total);
        for entry in plan.iter() {
            let chunk = &source[entry.range()];
            rebuilt.extend_from_slice(&chunk[entry.overlap_lines..]);
        }
        prop_assert_eq!(rebuilt, source);
    }

    #[test]
    fn prop_plan_is_deterministic(total in 0usize..5000, settings in valid_settings()) {
        prop_assert_eq!(plan_chunks(total, &settings), plan_chunks(total, &settings));
    }
}
