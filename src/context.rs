//! Service context bundling the port trait objects.

use std::path::Path;

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::shell::LiveShellExecutor;
use crate::adapters::recording::{RecordingFileSystem, RecordingShellExecutor};
use crate::adapters::replaying::{ReplayingFileSystem, ReplayingShellExecutor};
use crate::cassette::config::CassetteConfig;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::ports::filesystem::FileSystem;
use crate::ports::shell::{ShellExecutor, ShellOutput};

/// Bundles the port trait objects the fetchers run against.
///
/// Constructors wire up different adapter implementations (live,
/// recording, replaying).
pub struct ServiceContext {
    /// Filesystem for the diagnostic log and tool presence checks.
    pub fs: Box<dyn FileSystem>,
    /// Executor for external tools.
    pub shell: Box<dyn ShellExecutor>,
}

impl ServiceContext {
    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn new(fs: Box<dyn FileSystem>, shell: Box<dyn ShellExecutor>) -> Self {
        Self { fs, shell }
    }

    /// Creates a live context backed by the real filesystem and processes.
    #[must_use]
    pub fn live() -> Self {
        Self::new(Box::new(LiveFileSystem), Box::new(LiveShellExecutor))
    }

    /// Creates a live context whose interactions are recorded to per-port
    /// cassettes under `root/<timestamp>/`.
    ///
    /// The returned session must be finished after the context is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette directory cannot be created.
    pub fn recording_at(root: &Path) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new(root)?;
        let ctx = Self::new(
            Box::new(RecordingFileSystem::new(Box::new(LiveFileSystem), session.fs.clone())),
            Box::new(RecordingShellExecutor::new(
                Box::new(LiveShellExecutor),
                session.shell.clone(),
            )),
        );
        Ok((ctx, session))
    }

    /// Creates a replaying context from a single cassette holding both ports.
    ///
    /// Each port gets its own replayer so per-port cursors are independent.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = CassetteConfig::read_cassette(path)?;
        Ok(Self::new(
            Box::new(ReplayingFileSystem::new(CassetteReplayer::new(&cassette))),
            Box::new(ReplayingShellExecutor::new(CassetteReplayer::new(&cassette))),
        ))
    }

    /// Creates a replaying context from per-port cassette files.
    ///
    /// Ports without a configured cassette file use a panicking adapter that
    /// fails with a clear message when called.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;

        Ok(Self::new(
            match replayers.fs {
                Some(r) => Box::new(ReplayingFileSystem::new(r)),
                None => Box::new(PanickingFileSystem),
            },
            match replayers.shell {
                Some(r) => Box::new(ReplayingShellExecutor::new(r)),
                None => Box::new(PanickingShellExecutor),
            },
        ))
    }
}

// --- Panicking adapters for unspecified ports ---

struct PanickingFileSystem;
impl FileSystem for PanickingFileSystem {
    fn write(
        &self,
        _path: &Path,
        _contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        panic!("FileSystem port not configured in CassetteConfig: no cassette loaded for fs");
    }
    fn exists(&self, _path: &Path) -> bool {
        panic!("FileSystem port not configured in CassetteConfig: no cassette loaded for fs");
    }
}

struct PanickingShellExecutor;
impl ShellExecutor for PanickingShellExecutor {
    fn run(
        &self,
        _command: &str,
    ) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>> {
        panic!("ShellExecutor port not configured in CassetteConfig: no cassette loaded for shell");
    }
    fn exec(
        &self,
        _program: &Path,
        _args: &[String],
    ) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>> {
        panic!("ShellExecutor port not configured in CassetteConfig: no cassette loaded for shell");
    }
}
