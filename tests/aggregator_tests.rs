use pirate_log::aggregator::{CounterVector, Dump, SampleAggregator};
use pirate_log::parser::{PerfCtrDump, PerfCtrSample};
use pirate_log::utils::error::ConsistencyError;
use pretty_assertions::assert_eq;

fn raw(size: i32, target: &[u64], pirates: &[&[u64]]) -> PerfCtrDump {
    PerfCtrDump {
        t_sample: Some(PerfCtrSample {
            size,
            ctr: target.to_vec(),
        }),
        p_sample: pirates
            .iter()
            .map(|p| PerfCtrSample {
                size: 0,
                ctr: p.to_vec(),
            })
            .collect(),
    }
}

fn aggregate(samples: &[PerfCtrDump]) -> Vec<(i32, Dump)> {
    let mut agg = SampleAggregator::new();
    for s in samples {
        agg.ingest_raw(s).unwrap();
    }
    agg.finalize()
}

#[test]
fn test_ingestion_order_does_not_matter() {
    let a5 = raw(5, &[1, 2], &[&[10], &[20]]);
    let b3 = raw(3, &[3, 4], &[&[30], &[40]]);
    let c5 = raw(5, &[5, 6], &[&[50], &[60]]);
    let d3 = raw(3, &[7, 8], &[&[70], &[80]]);

    let interleaved = aggregate(&[a5.clone(), b3.clone(), c5.clone(), d3.clone()]);
    let grouped = aggregate(&[b3, d3, a5, c5]);

    assert_eq!(interleaved, grouped);
    assert_eq!(interleaved.len(), 2);

    let (size, bucket) = &interleaved[0];
    assert_eq!(*size, 3);
    assert_eq!(bucket.target.values(), &[10, 12]);
    assert_eq!(bucket.pirates[0].values(), &[100]);
    assert_eq!(bucket.pirates[1].values(), &[120]);

    let (size, bucket) = &interleaved[1];
    assert_eq!(*size, 5);
    assert_eq!(bucket.target.values(), &[6, 8]);
    assert_eq!(bucket.pirates[0].values(), &[60]);
    assert_eq!(bucket.pirates[1].values(), &[80]);
}

#[test]
fn test_finalize_sorted_ascending() {
    let samples: Vec<PerfCtrDump> = [4096, 512, 2048, 1024, 512, 0]
        .iter()
        .map(|&s| raw(s, &[1], &[]))
        .collect();

    let sizes: Vec<i32> = aggregate(&samples).into_iter().map(|(s, _)| s).collect();
    assert_eq!(sizes, vec![0, 512, 1024, 2048, 4096]);
}

#[test]
fn test_target_length_mismatch_keeps_bucket() {
    let mut agg = SampleAggregator::new();
    agg.ingest_raw(&raw(64, &[1, 2], &[&[3]])).unwrap();

    let err = agg.ingest_raw(&raw(64, &[1, 2, 3], &[&[3]])).unwrap_err();
    assert_eq!(
        err,
        ConsistencyError::TargetLength {
            size: 64,
            expected: 2,
            found: 3
        }
    );

    let bucket = agg.get(64).unwrap();
    assert_eq!(bucket.target.values(), &[1, 2]);
    assert_eq!(bucket.pirates[0].values(), &[3]);
}

#[test]
fn test_pirate_count_mismatch() {
    let mut agg = SampleAggregator::new();
    agg.ingest_raw(&raw(64, &[1], &[&[1], &[2]])).unwrap();

    let err = agg.ingest_raw(&raw(64, &[1], &[&[1]])).unwrap_err();
    assert!(matches!(
        err,
        ConsistencyError::PirateCount {
            expected: 2,
            found: 1,
            ..
        }
    ));
    assert_eq!(agg.get(64).unwrap().target.values(), &[1]);
}

#[test]
fn test_different_sizes_may_differ_in_shape() {
    let mut agg = SampleAggregator::new();
    agg.ingest_raw(&raw(1, &[1], &[])).unwrap();
    agg.ingest_raw(&raw(2, &[1, 2], &[])).unwrap();

    assert_eq!(agg.len(), 2);
}

#[test]
fn test_single_sample_bucket_is_copy() {
    let sample = raw(8, &[9, 9], &[&[1, 2, 3]]);
    let result = aggregate(&[sample.clone()]);

    assert_eq!(result, vec![(8, Dump::from_raw(&sample))]);
}

#[test]
fn test_counter_vector_add() {
    let a = CounterVector::new(vec![1, 1, 1]);
    let b = CounterVector::new(vec![2, 3, 4]);

    assert_eq!(a.add(&b).unwrap(), CounterVector::new(vec![3, 4, 5]));
    assert!(a.add(&CounterVector::new(vec![1])).is_err());
}
