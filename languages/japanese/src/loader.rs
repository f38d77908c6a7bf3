use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use giongo_core::error::DataSourceError;

use crate::frequency::FrequencyTable;

pub struct FrequencyLoader;

impl FrequencyLoader {
    /// Load frequency corpus from file path
    pub fn load_from_file(path: &Path) -> Result<FrequencyTable, DataSourceError> {
        tracing::info!("Loading frequency data from file: {}", path.display());
        let file = File::open(path).map_err(|source| DataSourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = FrequencyTable::from_reader(BufReader::new(file))?;
        tracing::info!("Loaded frequency data of length {}", table.len());
        Ok(table)
    }
}
