//! Reads the episode list (`season_episode,url` with a header row).

use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::errors::RecapError;
use crate::types::FetchRequest;

/// Reads every row of the CSV file at `path`, in file order.
///
/// Any problem with the file is fatal: the batch must not start on a partial
/// or unreadable list.
pub fn read_requests(path: impl AsRef<Path>) -> Result<Vec<FetchRequest>, RecapError> {
    let path = path.as_ref();
    let label = path.display().to_string();
    let file = File::open(path).map_err(|e| RecapError::Input {
        path: label.clone(),
        source: csv::Error::from(e),
    })?;
    read_requests_from(file).map_err(|e| match e {
        RecapError::Input { source, .. } => RecapError::Input {
            path: label,
            source,
        },
        other => other,
    })
}

/// Reads episode rows from any reader. Columns other than `season_episode`
/// and `url` are ignored.
pub fn read_requests_from<R: Read>(reader: R) -> Result<Vec<FetchRequest>, RecapError> {
    let mut csv_reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let requests = csv_reader
        .deserialize::<FetchRequest>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| RecapError::Input {
            path: "<reader>".to_string(),
            source,
        })?;
    debug!("Read {} episode rows", requests.len());
    Ok(requests)
}
