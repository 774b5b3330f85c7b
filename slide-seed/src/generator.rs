use std::io;
use std::path::Path;

use chrono::{Local, NaiveDate};
use log::{debug, info};
use rand::Rng;

use crate::error::SeedError;
use crate::record::SlideRecord;

/// Number of rows in the generated dataset.
pub const NUM_RECORDS: usize = 10_000;

/// Default output file name.
pub const OUTPUT_FILE: &str = "data.txt";

/// Accumulates sampled records and writes them out as headerless CSV,
/// one record per line.
#[derive(Debug)]
pub struct Generator {
    today: NaiveDate,
    pub(crate) records: Vec<SlideRecord>,
}

impl Default for Generator {
    fn default() -> Self {
        Generator::with_today(Local::now().date_naive())
    }
}

impl Generator {
    /// A generator that samples dates backwards from the given day rather
    /// than from the current date.
    #[must_use]
    pub fn with_today(today: NaiveDate) -> Self {
        Generator {
            today,
            records: Vec::new(),
        }
    }

    /// Appends `count` independently sampled records.
    pub fn generate<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        self.records.reserve(count);
        for _ in 0..count {
            self.records.push(SlideRecord::sample(rng, self.today));
        }
        debug!("generated {count} records");
    }

    #[must_use]
    pub fn records(&self) -> &[SlideRecord] {
        &self.records
    }

    /// Serializes the accumulated records to `writer` as headerless CSV.
    ///
    /// # Errors
    /// Errors when a record cannot be serialized or the underlying writer
    /// fails.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), SeedError> {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        self.write_records(writer)
    }

    /// Writes the accumulated records to the file at `path`, replacing any
    /// existing content.
    ///
    /// # Errors
    /// Errors when the output file cannot be opened or written.
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), SeedError> {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path.as_ref())?;
        self.write_records(writer)?;
        info!(
            "wrote {} records to {}",
            self.records.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    fn write_records<W: io::Write>(
        &self,
        mut writer: csv::Writer<W>,
    ) -> Result<(), SeedError> {
        for record in &self.records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}
