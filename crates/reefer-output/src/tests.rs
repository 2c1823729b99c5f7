//! Tests for the CSV backend and the observer bridge.

use std::fs;

use reefer_core::{NodeId, SkuId, SkuParams, SkuTable};
use reefer_graph::TravelGraphBuilder;
use reefer_routing::NearestNeighbor;
use reefer_sim::SimBuilder;

use crate::{CsvWriter, SimOutputObserver};

fn two_sku_table() -> SkuTable {
    let mut t = SkuTable::new();
    t.push(SkuParams::new("strawberries", 72.0, 2.4)).unwrap();
    t.push(SkuParams::new("romaine", 168.0, 2.0)).unwrap();
    t
}

#[test]
fn run_writes_both_files_with_sku_columns() {
    let dir = tempfile::tempdir().unwrap();

    let mut b = TravelGraphBuilder::new(2);
    b.set_leg(NodeId(0), NodeId(1), 5).unwrap();
    let skus = two_sku_table();
    let mut model = SimBuilder::new(b.build(), skus.clone())
        .capacity(SkuId(0), 300)
        .capacity(SkuId(1), 220)
        .demand(NodeId(1), SkuId(0), 20)
        .demand(NodeId(1), SkuId(1), 15)
        .build(&NearestNeighbor)
        .unwrap();

    let writer = CsvWriter::new(dir.path(), &skus).unwrap();
    let mut observer = SimOutputObserver::new(writer);
    model.run_until_done(&mut observer).unwrap();
    assert!(observer.take_error().is_none());

    let minutes = fs::read_to_string(dir.path().join("minute_series.csv")).unwrap();
    let mut lines = minutes.lines();
    assert_eq!(
        lines.next().unwrap(),
        "minute,elapsed_minutes,life_strawberries,life_romaine"
    );
    // One sample per tick: the 5-minute-leg, 8-minute-service round trip
    // takes 22 ticks including the depart/deliver/return decision minutes.
    assert_eq!(minutes.lines().count() - 1, 22);

    let deliveries = fs::read_to_string(dir.path().join("deliveries.csv")).unwrap();
    let mut lines = deliveries.lines();
    let header = lines.next().unwrap();
    assert_eq!(
        header,
        "minute,node,qty_strawberries,qty_romaine,life_strawberries,life_romaine,\
         weighted_strawberries,weighted_romaine,total_weighted_min"
    );
    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].starts_with("6,1,20,15,"));
}

#[test]
fn finish_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let skus = two_sku_table();
    let mut writer = CsvWriter::new(dir.path(), &skus).unwrap();
    use crate::OutputWriter;
    writer.finish().unwrap();
    writer.finish().unwrap();
}
