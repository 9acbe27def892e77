use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Seek};
use std::path::Path;
use std::sync::Arc;

use arrow::compute::concat_batches;
use arrow::csv::reader::Format;
use arrow::csv::ReaderBuilder;
use arrow::datatypes::SchemaRef;
use arrow::error::ArrowError;
use arrow::ipc::reader::FileReader as IpcFileReader;
use arrow::record_batch::RecordBatch;
use bytes::Bytes;
use log::{debug, info};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ARROW_SCHEMA_META_KEY;
use parquet::file::reader::ChunkReader;

use super::{LoadError, TrajectoryTable};

/// Storage format of a trajectory table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageFormat {
    /// Apache Parquet
    Parquet,
    /// Arrow IPC file (Feather v2)
    ArrowIpc,
    /// Comma separated values with a header row
    Csv,
    /// Built from an in-memory record batch
    Memory,
}

impl StorageFormat {
    /// Detect the format from a file extension
    ///
    /// Unknown or missing extensions are treated as Parquet.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("arrow") | Some("feather") | Some("ipc") => Self::ArrowIpc,
            Some("csv") => Self::Csv,
            _ => Self::Parquet,
        }
    }
}

impl fmt::Display for StorageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Parquet => "parquet",
            Self::ArrowIpc => "arrow-ipc",
            Self::Csv => "csv",
            Self::Memory => "memory",
        };
        f.write_str(name)
    }
}

/// Decoded file contents before concatenation
struct Decoded {
    schema: SchemaRef,
    batches: Vec<RecordBatch>,
    key_value_metadata: HashMap<String, String>,
}

impl TrajectoryTable {
    /// Open a trajectory file, detecting the format from its extension
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        Self::open_with_format(path, StorageFormat::from_path(path))
    }

    /// Open a trajectory file with an explicit format
    pub fn open_with_format<P: AsRef<Path>>(
        path: P,
        format: StorageFormat,
    ) -> Result<Self, LoadError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(LoadError::NotAFile(path.to_path_buf()));
        }

        debug!("Opening {} as {}", path.display(), format);
        let file = File::open(path)?;
        let decoded = match format {
            StorageFormat::Parquet | StorageFormat::Memory => read_parquet(file)?,
            StorageFormat::ArrowIpc => read_ipc(file)?,
            StorageFormat::Csv => read_csv(file)?,
        };

        let mut table = Self::from_decoded(decoded, format)?;
        table.source_path = Some(path.to_path_buf());
        info!(
            "Loaded {} rows, {} columns from {}",
            table.num_rows(),
            table.batch.num_columns(),
            path.display()
        );
        Ok(table)
    }

    /// Load a Parquet file held in memory
    pub fn from_parquet_bytes(bytes: Bytes) -> Result<Self, LoadError> {
        let decoded = read_parquet(bytes)?;
        Self::from_decoded(decoded, StorageFormat::Parquet)
    }

    fn from_decoded(decoded: Decoded, format: StorageFormat) -> Result<Self, LoadError> {
        let batch = concat_batches(&decoded.schema, &decoded.batches)?;
        Ok(Self {
            batch,
            format,
            source_path: None,
            key_value_metadata: decoded.key_value_metadata,
        })
    }
}

fn read_parquet<R: ChunkReader + 'static>(reader: R) -> Result<Decoded, LoadError> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(reader)?;

    let mut key_value_metadata = HashMap::new();
    if let Some(kv_list) = builder.metadata().file_metadata().key_value_metadata() {
        // The embedded Arrow schema is already available as `schema()`
        for kv in kv_list.iter().filter(|kv| kv.key != ARROW_SCHEMA_META_KEY) {
            if let Some(value) = &kv.value {
                key_value_metadata.insert(kv.key.clone(), value.clone());
            }
        }
    }

    let schema = Arc::clone(builder.schema());
    let batches = builder
        .build()?
        .collect::<Result<Vec<_>, ArrowError>>()?;

    Ok(Decoded {
        schema,
        batches,
        key_value_metadata,
    })
}

fn read_ipc(file: File) -> Result<Decoded, LoadError> {
    let reader = IpcFileReader::try_new(BufReader::new(file), None)?;
    let schema = reader.schema();
    let key_value_metadata = schema.metadata().clone();
    let batches = reader.collect::<Result<Vec<_>, ArrowError>>()?;

    Ok(Decoded {
        schema,
        batches,
        key_value_metadata,
    })
}

fn read_csv(mut file: File) -> Result<Decoded, LoadError> {
    let (schema, _) = Format::default()
        .with_header(true)
        .infer_schema(&mut file, None)?;
    file.rewind()?;

    let schema = Arc::new(schema);
    let reader = ReaderBuilder::new(Arc::clone(&schema))
        .with_header(true)
        .build(BufReader::new(file))?;
    let batches = reader.collect::<Result<Vec<_>, ArrowError>>()?;

    Ok(Decoded {
        schema,
        batches,
        key_value_metadata: HashMap::new(),
    })
}
