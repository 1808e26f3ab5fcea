//! Shared fixtures for Geofabrik download tests.
use std::{cell::Cell, io::Write};

use async_trait::async_trait;

use super::error::TransportError;
use super::source::ExtractSource;
use super::types::ExtractUrl;

/// Stub [`ExtractSource`] backed by an in-memory payload.
///
/// Counts how many times `fetch` runs so idempotency is observable.
#[derive(Debug)]
pub struct StubSource {
    payload: Vec<u8>,
    fetches: Cell<usize>,
}

impl StubSource {
    /// Construct a stub source serving `payload` for every URL.
    #[must_use]
    pub fn new(payload: Vec<u8>) -> Self {
        Self {
            payload,
            fetches: Cell::new(0),
        }
    }

    /// Number of fetches performed so far.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }
}

#[async_trait(?Send)]
impl ExtractSource for StubSource {
    async fn fetch(&self, url: &ExtractUrl, sink: &mut dyn Write) -> Result<u64, TransportError> {
        self.fetches.set(self.fetches.get() + 1);
        sink.write_all(&self.payload)
            .map_err(|source| TransportError::Network {
                url: url.as_ref().to_owned(),
                source,
            })?;
        let length = u64::try_from(self.payload.len()).expect("payload length should fit in u64");
        Ok(length)
    }
}

/// Run an async download scenario on a throwaway current-thread runtime.
pub fn block_on_for_tests<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build test runtime")
        .block_on(future)
}
