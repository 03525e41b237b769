use std::time::Duration;

use crate::errors::MergeError;
use crate::merge::PageRequest;
use crate::merge::dispatch::{FanOut, FetchDispatcher};
use crate::merge::planner::{CountedSource, OffsetPlanner};
use crate::test_helpers::factory::Factory;

#[tokio::test]
async fn batches_keep_plan_index_and_trim_padding() {
    let sources = vec![
        Factory::memory_source().with_name("a").with_len(9).shared(),
        Factory::memory_source().with_name("b").with_len(33).shared(),
    ];
    let plans = OffsetPlanner::new(PageRequest::new(2, 10).with_padding(true)).plan(&[
        CountedSource::new("a", 9),
        CountedSource::new("b", 33),
    ]);

    let batches = FetchDispatcher::new(FanOut::new(None))
        .dispatch(&sources, plans)
        .await
        .expect("fetch phase should succeed");

    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].plan_index, 0);
    let payloads: Vec<&str> = batches[0].rows.iter().map(|r| r.payload.as_str()).collect();
    let expected: Vec<String> = (2..=11).map(|n| format!("b:{}", n)).collect();
    assert_eq!(payloads, expected);
    assert!(batches[0].rows.iter().all(|r| r.source_name == "b"));
}

#[tokio::test]
async fn slow_first_source_still_reports_index_zero() {
    let sources = vec![
        Factory::memory_source()
            .with_name("a")
            .with_len(4)
            .with_latency(Duration::from_millis(40))
            .shared(),
        Factory::memory_source().with_name("b").with_len(4).shared(),
    ];
    let plans = OffsetPlanner::new(PageRequest::new(1, 8)).plan(&[
        CountedSource::new("a", 4),
        CountedSource::new("b", 4),
    ]);

    let mut batches = FetchDispatcher::new(FanOut::new(None))
        .dispatch(&sources, plans)
        .await
        .expect("fetch phase should succeed");
    batches.sort_by_key(|b| b.plan_index);

    assert_eq!(batches[0].rows[0].source_name, "a");
    assert_eq!(batches[1].rows[0].source_name, "b");
}

#[tokio::test]
async fn failing_fetch_aborts_phase() {
    let sources = vec![
        Factory::memory_source().with_name("a").with_len(3).shared(),
        Factory::failing_source().with_name("b").with_count(5).shared(),
    ];
    let plans = OffsetPlanner::new(PageRequest::new(1, 8)).plan(&[
        CountedSource::new("a", 3),
        CountedSource::new("b", 5),
    ]);

    let err = FetchDispatcher::new(FanOut::new(None))
        .dispatch(&sources, plans)
        .await
        .expect_err("fetch phase should fail");

    assert!(matches!(err, MergeError::Fetch { .. }));
    assert_eq!(err.source_name(), Some("b"));
}
