//! Shared helpers for bridging async HTTP responses to blocking writers.

use std::io::{self, Read};

use futures_util::TryStreamExt;
use tokio_util::io::{StreamReader, SyncIoBridge};

/// Convert an asynchronous HTTP response into a blocking reader.
pub(crate) fn to_sync_reader(response: reqwest::Response) -> Box<dyn Read + Send> {
    let stream = response.bytes_stream().map_err(io::Error::other);
    Box::new(SyncIoBridge::new(StreamReader::new(stream)))
}
