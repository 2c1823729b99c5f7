//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `minute_series.csv`
//! - `deliveries.csv`
//!
//! Per-SKU columns are named from the run's `SkuTable`
//! (`life_strawberries`, `qty_romaine`, …).

use std::fs::File;
use std::path::Path;

use csv::Writer;

use reefer_core::SkuTable;

use crate::row::{DeliveryRow, MinuteRow};
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    minutes: Writer<File>,
    deliveries: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write header rows
    /// derived from `skus`.
    pub fn new(dir: &Path, skus: &SkuTable) -> OutputResult<Self> {
        let names: Vec<&str> = skus.iter().map(|(_, p)| p.name.as_str()).collect();

        let mut minutes = Writer::from_path(dir.join("minute_series.csv"))?;
        let mut header = vec!["minute".to_string(), "elapsed_minutes".to_string()];
        header.extend(names.iter().map(|n| format!("life_{n}")));
        minutes.write_record(&header)?;

        let mut deliveries = Writer::from_path(dir.join("deliveries.csv"))?;
        let mut header = vec!["minute".to_string(), "node".to_string()];
        header.extend(names.iter().map(|n| format!("qty_{n}")));
        header.extend(names.iter().map(|n| format!("life_{n}")));
        header.extend(names.iter().map(|n| format!("weighted_{n}")));
        header.push("total_weighted_min".to_string());
        deliveries.write_record(&header)?;

        Ok(Self {
            minutes,
            deliveries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_minute(&mut self, row: &MinuteRow) -> OutputResult<()> {
        let mut record = vec![row.minute.to_string(), row.elapsed_minutes.to_string()];
        record.extend(row.life_min.iter().map(|v| format!("{v:.3}")));
        self.minutes.write_record(&record)?;
        Ok(())
    }

    fn write_delivery(&mut self, row: &DeliveryRow) -> OutputResult<()> {
        let mut record = vec![row.minute.to_string(), row.node.to_string()];
        record.extend(row.delivered.iter().map(|v| v.to_string()));
        record.extend(row.life_min.iter().map(|v| format!("{v:.3}")));
        record.extend(row.weighted_min.iter().map(|v| format!("{v:.3}")));
        record.push(format!("{:.3}", row.total_weighted_min));
        self.deliveries.write_record(&record)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.minutes.flush()?;
        self.deliveries.flush()?;
        Ok(())
    }
}
