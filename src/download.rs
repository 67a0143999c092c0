//! Artifact downloads with a single retry.
//!
//! A download streams into a temp file next to the destination and is moved
//! into place only once the whole body has arrived. If both the first attempt
//! and the retry fail, nothing is left at the destination.

use crate::config::DownloadConfig;
use crate::error::{ReleaseError, Result};
use crate::ui;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::NamedTempFile;

/// Marker in file names of detached signatures; their sizes are not reported
pub const SIGNATURE_MARKER: &str = ".asc";

/// Source of remote bytes
///
/// Implementations open `url` and hand back a reader over the response body.
/// Errors from either opening or reading count as a failed attempt.
pub trait Transport: Send + Sync {
    fn open(&self, url: &str) -> Result<Box<dyn Read + Send>>;
}

/// HTTP(S) transport backed by a `ureq` agent
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(user_agent: &str) -> Self {
        UreqTransport {
            agent: ureq::AgentBuilder::new().user_agent(user_agent).build(),
        }
    }
}

impl Transport for UreqTransport {
    fn open(&self, url: &str) -> Result<Box<dyn Read + Send>> {
        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| ReleaseError::transport(e.to_string()))?;

        Ok(Box::new(response.into_reader()))
    }
}

/// Downloads remote resources into a local directory
pub struct Downloader<T: Transport = UreqTransport> {
    transport: T,
    chunk_size: usize,
}

impl Downloader<UreqTransport> {
    /// Create an HTTP downloader from configuration
    pub fn new(config: &DownloadConfig) -> Self {
        Downloader {
            transport: UreqTransport::new(&config.user_agent),
            chunk_size: config.chunk_size.max(1),
        }
    }
}

impl<T: Transport> Downloader<T> {
    /// Create a downloader over any transport
    pub fn with_transport(transport: T, chunk_size: usize) -> Self {
        Downloader {
            transport,
            chunk_size: chunk_size.max(1),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch `url` into `dest_dir/name`.
    ///
    /// With `force_clean` unset an existing destination is kept and nothing is
    /// fetched. A failed fetch is retried once; a second failure is reported as
    /// [`ReleaseError::Download`] wrapping the last cause.
    ///
    /// # Returns
    /// * `Ok(PathBuf)` - Path of the destination file
    /// * `Err` - Both attempts failed; the destination has been removed
    pub fn download(
        &self,
        name: &str,
        url: &str,
        dest_dir: &Path,
        quiet: bool,
        force_clean: bool,
    ) -> Result<PathBuf> {
        if !quiet {
            ui::display_status(&format!("Downloading {}", url));
        }
        let started = Instant::now();
        let dest = dest_dir.join(name);
        let report_size = !quiet && !name.contains(SIGNATURE_MARKER);

        if !force_clean && dest.exists() {
            if report_size {
                println!("{}", ui::format_already_done(fs::metadata(&dest)?.len()));
            }
            return Ok(dest);
        }

        fs::create_dir_all(dest_dir)?;

        let bytes = match self.attempt(url, &dest) {
            Ok(bytes) => bytes,
            Err(first) => {
                ui::display_warning(&format!(
                    "Retrying download of url {} after exception: {}",
                    url, first
                ));
                self.attempt(url, &dest)
                    .map_err(|e| ReleaseError::Download {
                        url: url.to_string(),
                        source: Box::new(e),
                    })?
            }
        };

        if report_size {
            println!(
                "{}",
                ui::format_download_stats(bytes, started.elapsed().as_secs_f64())
            );
        }

        Ok(dest)
    }

    fn attempt(&self, url: &str, dest: &Path) -> Result<u64> {
        match self.stream_to(url, dest) {
            Ok(bytes) => Ok(bytes),
            Err(e) => {
                remove_partial(dest)?;
                Err(e)
            }
        }
    }

    fn stream_to(&self, url: &str, dest: &Path) -> Result<u64> {
        let dir = dest.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        let mut reader = self.transport.open(url)?;

        let mut chunk = vec![0u8; self.chunk_size];
        let mut total = 0u64;
        loop {
            let n = match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            tmp.write_all(&chunk[..n])?;
            total += n as u64;
        }
        tmp.flush()?;

        tmp.persist(dest).map_err(|e| ReleaseError::Io(e.error))?;
        Ok(total)
    }
}

/// Fetch `url` into `dest_dir/name` over HTTP with default settings
pub fn download(
    name: &str,
    url: &str,
    dest_dir: &Path,
    quiet: bool,
    force_clean: bool,
) -> Result<PathBuf> {
    Downloader::new(&DownloadConfig::default()).download(name, url, dest_dir, quiet, force_clean)
}

fn remove_partial(dest: &Path) -> Result<()> {
    match fs::remove_file(dest) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
