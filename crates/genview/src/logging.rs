use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file name inside the data directory
pub const LOG_FILE_NAME: &str = "genview.log";
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
const KEEP_SIZE: u64 = 1024 * 1024;
const ROTATION_MARKER: &[u8] = b"--- Log rotated (older entries removed) ---\n";

/// Append-only log file that trims itself to its newest `keep` bytes
/// whenever a write would push it past `max`.
struct RotatingFile {
    path: PathBuf,
    file: File,
    len: u64,
    max: u64,
    keep: u64,
}

impl RotatingFile {
    fn open(path: &Path, max: u64, keep: u64) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let len = file.metadata()?.len();
        let mut log = Self {
            path: path.to_path_buf(),
            file,
            len,
            max,
            keep,
        };
        if log.len > log.max {
            log.trim()?;
        }
        Ok(log)
    }

    /// Keep only whole lines from the last `keep` bytes
    fn trim(&mut self) -> io::Result<()> {
        self.file.flush()?;
        let content = fs::read(&self.path)?;
        let tail_start = content.len().saturating_sub(self.keep as usize);
        let tail = &content[tail_start..];
        let tail = match tail.iter().position(|&b| b == b'\n') {
            Some(i) if tail_start > 0 => &tail[i + 1..],
            _ => tail,
        };

        let mut rewritten = Vec::with_capacity(ROTATION_MARKER.len() + tail.len());
        rewritten.extend_from_slice(ROTATION_MARKER);
        rewritten.extend_from_slice(tail);
        fs::write(&self.path, &rewritten)?;

        self.file = OpenOptions::new().append(true).open(&self.path)?;
        self.len = rewritten.len() as u64;
        Ok(())
    }

    fn append(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.len + buf.len() as u64 > self.max {
            self.trim()?;
        }
        let written = self.file.write(buf)?;
        self.len += written as u64;
        Ok(written)
    }
}

/// Shared handle to the rotating log, usable as a `tracing` writer
#[derive(Clone)]
struct LogFile(Arc<Mutex<RotatingFile>>);

impl Write for LogFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .append(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .file
            .flush()
    }
}

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogFile;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Filter used when `RUST_LOG` is unset
pub fn default_filter(level: &str) -> String {
    format!("genview={level},genview_core=warn")
}

/// Send `tracing` output to `{data_dir}/genview.log`.
///
/// The file never grows much past 5 MB; older entries are dropped in favor
/// of the newest 1 MB. `RUST_LOG` takes precedence over `level`.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;
    let log_path = data_dir.join(LOG_FILE_NAME);
    let log = LogFile(Arc::new(Mutex::new(RotatingFile::open(
        &log_path,
        MAX_LOG_SIZE,
        KEEP_SIZE,
    )?)));

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(log).with_ansi(false))
        .try_init()?;

    tracing::info!(log_path = %log_path.display(), "logging to file");
    Ok(())
}
