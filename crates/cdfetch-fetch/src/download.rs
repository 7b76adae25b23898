//! Atomic streaming downloads.
//!
//! A transfer writes the body to `<destination>.tmp`, reporting each chunk
//! to a [`ProgressObserver`], and publishes it with a single rename once the
//! body has been fully written and synced. Readers of the destination path
//! see either the previous file or the complete new one.

use crate::{ClientConfig, ProgressObserver};
use bytes::Bytes;
use cdfetch_types::DownloadTarget;
use futures::{Stream, StreamExt};
use reqwest::Client;
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

/// Boxed error from a body stream.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Why the network side of a transfer failed.
#[derive(Error, Debug)]
pub enum TransferFailure {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned HTTP {0}")]
    Status(u16),

    /// The body stream failed mid-transfer.
    #[error("body stream failed: {0}")]
    Body(#[source] BoxError),
}

/// Errors that can occur during a download. All are terminal; nothing is retried.
#[derive(Error, Debug)]
pub enum DownloadError {
    /// The temporary file could not be created.
    #[error("Failed to create temporary file '{path}': {source}")]
    FileCreate {
        /// The temporary file path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The request or body stream failed.
    #[error("Transfer from '{url}' failed: {failure}")]
    Transfer {
        /// The source URL.
        url: String,
        /// What went wrong.
        #[source]
        failure: TransferFailure,
    },

    /// Writing to the temporary file failed.
    #[error("Failed to write '{path}' after {written} bytes: {source}")]
    Write {
        /// The temporary file path.
        path: PathBuf,
        /// Bytes successfully written before the failure.
        written: u64,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The completed temporary file could not be renamed onto the destination.
    #[error("Failed to publish '{from}' to '{to}': {source}")]
    Publish {
        /// The temporary file path, which is left in place.
        from: PathBuf,
        /// The destination path, which is left untouched.
        to: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// What to do with the temporary file when a transfer fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartialPolicy {
    /// Leave `<destination>.tmp` on disk for inspection.
    #[default]
    Keep,
    /// Delete `<destination>.tmp` after a failed transfer.
    ///
    /// A file that was fully written but could not be published is kept
    /// either way, since it holds the complete download.
    Remove,
}

/// Options for [`Downloader`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DownloadOptions {
    /// Handling of the temporary file on failure.
    pub partial_policy: PartialPolicy,
}

/// Downloads a URL to a path with progress reporting and atomic publish.
#[derive(Debug, Clone)]
pub struct Downloader {
    client: Client,
    options: DownloadOptions,
}

impl Downloader {
    /// Creates a new downloader.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &ClientConfig, options: DownloadOptions) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: config.download_client()?,
            options,
        })
    }

    /// Creates a downloader with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(&ClientConfig::default(), DownloadOptions::default())
    }

    /// Returns the download options.
    #[must_use]
    pub const fn options(&self) -> &DownloadOptions {
        &self.options
    }

    /// Downloads `target.source_url()` to `target.destination()`.
    ///
    /// The temporary file is created before the request is sent. A single
    /// GET is issued; any non-2xx status fails the transfer. Returns the
    /// number of bytes published.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered. The destination is never
    /// modified unless the whole transfer succeeds.
    pub async fn download<O>(
        &self,
        target: &DownloadTarget,
        observer: &mut O,
    ) -> Result<u64, DownloadError>
    where
        O: ProgressObserver + ?Sized,
    {
        let file = create_temp(target).await?;
        let copied = self.fetch_into(file, target, observer).await;
        let result = finish_and_publish(copied, target, observer).await;
        self.settle(target, result).await
    }

    /// Streams an already-open body to `target.destination()`.
    ///
    /// Same contract as [`Self::download`] for callers that issue the
    /// request themselves. Stream errors are reported as
    /// [`DownloadError::Transfer`].
    ///
    /// # Errors
    ///
    /// Returns the first error encountered.
    pub async fn download_stream<S, E, O>(
        &self,
        body: S,
        target: &DownloadTarget,
        observer: &mut O,
    ) -> Result<u64, DownloadError>
    where
        S: Stream<Item = Result<Bytes, E>>,
        E: Into<BoxError>,
        O: ProgressObserver + ?Sized,
    {
        let file = create_temp(target).await?;
        let copied = copy_body(file, body, target, observer).await;
        let result = finish_and_publish(copied, target, observer).await;
        self.settle(target, result).await
    }

    async fn fetch_into<O>(
        &self,
        file: File,
        target: &DownloadTarget,
        observer: &mut O,
    ) -> Result<u64, DownloadError>
    where
        O: ProgressObserver + ?Sized,
    {
        let url = target.source_url();
        tracing::debug!(url, "requesting driver");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transfer_error(url, TransferFailure::Request(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(transfer_error(url, TransferFailure::Status(status.as_u16())));
        }

        copy_body(file, response.bytes_stream(), target, observer).await
    }

    /// Applies the partial policy to a failed transfer.
    async fn settle(
        &self,
        target: &DownloadTarget,
        result: Result<u64, DownloadError>,
    ) -> Result<u64, DownloadError> {
        if let Err(err) = &result {
            let temp = target.temp_path();
            let remove = self.options.partial_policy == PartialPolicy::Remove
                && !matches!(err, DownloadError::Publish { .. });

            if remove {
                if let Err(e) = fs::remove_file(&temp).await {
                    tracing::warn!(path = %temp.display(), error = %e, "failed to remove partial download");
                }
            } else {
                tracing::debug!(path = %temp.display(), error = %err, "leaving partial download in place");
            }
        }

        result
    }
}

async fn create_temp(target: &DownloadTarget) -> Result<File, DownloadError> {
    let path = target.temp_path();
    let result = File::create(&path).await;
    result.map_err(|source| DownloadError::FileCreate { path, source })
}

/// Writes every chunk to `file` then reports it, then syncs and closes the
/// file. Returns the number of bytes on disk.
///
/// Each chunk is flushed before it is observed, so a failed write is
/// reported before its bytes are counted.
async fn copy_body<S, E, O>(
    mut file: File,
    body: S,
    target: &DownloadTarget,
    observer: &mut O,
) -> Result<u64, DownloadError>
where
    S: Stream<Item = Result<Bytes, E>>,
    E: Into<BoxError>,
    O: ProgressObserver + ?Sized,
{
    let temp = target.temp_path();
    let write_error = |written: u64, source: std::io::Error| DownloadError::Write {
        path: temp.clone(),
        written,
        source,
    };

    let mut body = std::pin::pin!(body);
    let mut written: u64 = 0;

    while let Some(chunk) = body.next().await {
        let chunk = chunk
            .map_err(|e| transfer_error(target.source_url(), TransferFailure::Body(e.into())))?;
        file.write_all(&chunk)
            .await
            .map_err(|e| write_error(written, e))?;
        file.flush().await.map_err(|e| write_error(written, e))?;
        written += chunk.len() as u64;
        observer.observe(&chunk);
    }

    file.sync_all().await.map_err(|e| write_error(written, e))?;
    drop(file);
    Ok(written)
}

/// Ends the progress output, then renames a fully copied temp file onto the
/// destination.
async fn finish_and_publish<O>(
    copied: Result<u64, DownloadError>,
    target: &DownloadTarget,
    observer: &mut O,
) -> Result<u64, DownloadError>
where
    O: ProgressObserver + ?Sized,
{
    observer.finish();
    let written = copied?;

    let temp = target.temp_path();
    let destination = target.destination();
    fs::rename(&temp, destination)
        .await
        .map_err(|source| DownloadError::Publish {
            from: temp,
            to: destination.to_path_buf(),
            source,
        })?;

    tracing::info!(path = %destination.display(), bytes = written, "download published");
    Ok(written)
}

fn transfer_error(url: &str, failure: TransferFailure) -> DownloadError {
    DownloadError::Transfer {
        url: url.to_string(),
        failure,
    }
}
