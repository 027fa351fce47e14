use std::fs::File;
use std::path::{Path, PathBuf};
use arrow::csv::WriterBuilder;
use arrow::json::LineDelimitedWriter;
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use tracing::info;
use crate::config::OutputFormat;
use crate::error::Result;
use crate::models::HarvestOutput;
use crate::storage::tables::{businesses_batch, photos_batch, reviews_batch};

pub const TABLE_NAMES: [&str; 3] = ["businesses", "reviews", "photos"];

/// Writes the three harvest tables into one directory in a single format.
pub struct TableWriter {
    dir: PathBuf,
    format: OutputFormat,
}

impl TableWriter {
    pub fn new(dir: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self { dir: dir.into(), format }
    }

    pub fn table_path(&self, table: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", table, self.format.extension()))
    }

    pub fn table_paths(&self) -> Vec<PathBuf> {
        TABLE_NAMES.iter().map(|table| self.table_path(table)).collect()
    }

    /// True when every table file from a previous run is present.
    pub fn is_complete(&self) -> bool {
        self.table_paths().iter().all(|path| path.exists())
    }

    /// Returns the written paths in `TABLE_NAMES` order.
    pub fn write_all(&self, output: &HarvestOutput) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(&self.dir)?;

        let batches = [
            businesses_batch(&output.businesses)?,
            reviews_batch(&output.reviews)?,
            photos_batch(&output.photos)?,
        ];

        let mut written = Vec::with_capacity(batches.len());
        for (table, batch) in TABLE_NAMES.iter().zip(batches.iter()) {
            let path = self.table_path(table);
            self.write_batch(&path, batch)?;
            info!(
                table = table,
                rows = batch.num_rows(),
                path = %path.display(),
                "Table written"
            );
            written.push(path);
        }

        Ok(written)
    }

    fn write_batch(&self, path: &Path, batch: &RecordBatch) -> Result<()> {
        let file = File::create(path)?;

        match self.format {
            OutputFormat::Csv => {
                let mut writer = WriterBuilder::new().with_header(true).build(file);
                writer.write(batch)?;
            }
            OutputFormat::Parquet => {
                let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
                writer.write(batch)?;
                writer.close()?;
            }
            OutputFormat::Json => {
                let mut writer = LineDelimitedWriter::new(file);
                writer.write(batch)?;
                writer.finish()?;
            }
        }

        Ok(())
    }
}
