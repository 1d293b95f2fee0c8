// File: crates/chart-core/src/sink.rs
// Summary: Save capability for finished reports; the builder never touches the filesystem itself.

use std::path::PathBuf;

use crate::error::ReportError;
use crate::report::ReportFile;

/// Accepts a named byte buffer with a MIME type and persists or delivers it.
pub trait ReportSink {
    fn save(&mut self, file: &ReportFile) -> Result<(), ReportError>;
}

/// Writes reports into a directory, one file per `file_name`.
#[derive(Clone, Debug)]
pub struct FileSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), written: Vec::new() }
    }

    /// Paths written so far, in save order.
    pub fn written(&self) -> &[PathBuf] { &self.written }
}

impl ReportSink for FileSink {
    fn save(&mut self, file: &ReportFile) -> Result<(), ReportError> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|source| ReportError::Io { path: self.dir.clone(), source })?;
        let path = self.dir.join(&file.file_name);
        std::fs::write(&path, &file.bytes).map_err(|source| ReportError::Io { path: path.clone(), source })?;
        tracing::info!(path = %path.display(), mime = file.mime_type, bytes = file.bytes.len(), "saved report");
        self.written.push(path);
        Ok(())
    }
}

/// Keeps saved reports in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    pub files: Vec<ReportFile>,
}

impl MemorySink {
    pub fn new() -> Self { Self::default() }
}

impl ReportSink for MemorySink {
    fn save(&mut self, file: &ReportFile) -> Result<(), ReportError> {
        self.files.push(file.clone());
        Ok(())
    }
}

/// Hand the report to `sink`. The buffer is consumed and dropped here whether or not the save succeeds.
pub fn export(file: ReportFile, sink: &mut dyn ReportSink) -> Result<(), ReportError> {
    sink.save(&file)
}
