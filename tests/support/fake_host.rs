// ABOUTME: In-memory host used by pipeline and detector tests.
// ABOUTME: Records every command, file read and port probe for assertions.

use async_trait::async_trait;
use kubeprep::config::Config;
use kubeprep::exec::{CommandLine, CommandOutcome, CommandRunner};
use kubeprep::host::FileProbe;
use kubeprep::ports::{PortProbe, PortState};
use kubeprep::preflight::HostProbes;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub fn succeeded() -> CommandOutcome {
    CommandOutcome::Succeeded {
        stdout: String::new(),
        stderr: String::new(),
    }
}

pub fn faulted(code: i32) -> CommandOutcome {
    CommandOutcome::Faulted {
        code: Some(code),
        signal: None,
        stderr: "failed".to_string(),
    }
}

/// Command runner answering from a table keyed by the full command line.
/// Unlisted commands are reported as not found.
#[derive(Default)]
pub struct FakeRunner {
    outcomes: HashMap<String, CommandOutcome>,
    calls: Mutex<Vec<String>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, command: &str, outcome: CommandOutcome) -> Self {
        self.outcomes.insert(command.to_string(), outcome);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn was_called(&self, command: &str) -> bool {
        self.calls().iter().any(|c| c == command)
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, command: &CommandLine) -> CommandOutcome {
        let key = command.to_string();
        self.calls.lock().unwrap().push(key.clone());
        self.outcomes
            .get(&key)
            .cloned()
            .unwrap_or(CommandOutcome::NotFound)
    }
}

/// File probe backed by a set of existing paths and a table of file contents.
#[derive(Default)]
pub struct FakeFiles {
    existing: HashSet<PathBuf>,
    contents: HashMap<PathBuf, Result<String, io::ErrorKind>>,
    reads: Mutex<Vec<PathBuf>>,
}

impl FakeFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: &str) -> Self {
        self.existing.insert(PathBuf::from(path));
        self
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.existing.insert(PathBuf::from(path));
        self.contents
            .insert(PathBuf::from(path), Ok(content.to_string()));
        self
    }

    pub fn with_unreadable(mut self, path: &str, kind: io::ErrorKind) -> Self {
        self.existing.insert(PathBuf::from(path));
        self.contents.insert(PathBuf::from(path), Err(kind));
        self
    }

    pub fn reads(&self) -> Vec<PathBuf> {
        self.reads.lock().unwrap().clone()
    }
}

impl FileProbe for FakeFiles {
    fn exists(&self, path: &Path) -> bool {
        self.existing.contains(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.reads.lock().unwrap().push(path.to_path_buf());
        match self.contents.get(path) {
            Some(Ok(content)) => Ok(content.clone()),
            Some(Err(kind)) => Err(io::Error::from(*kind)),
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }
}

/// Port probe where listed ports accept connections, unanswered ports give no
/// verdict and every other port is refused.
#[derive(Default)]
pub struct FakePorts {
    listening: HashSet<u16>,
    unanswered: HashSet<u16>,
    probed: AtomicUsize,
}

impl FakePorts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listening(ports: &[u16]) -> Self {
        Self::new().with_listening(ports)
    }

    pub fn with_listening(mut self, ports: &[u16]) -> Self {
        self.listening.extend(ports.iter().copied());
        self
    }

    pub fn with_unanswered(mut self, ports: &[u16]) -> Self {
        self.unanswered.extend(ports.iter().copied());
        self
    }

    pub fn probed(&self) -> usize {
        self.probed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PortProbe for FakePorts {
    async fn port_state(&self, _host: &str, port: u16, _timeout: Duration) -> PortState {
        self.probed.fetch_add(1, Ordering::SeqCst);
        if self.unanswered.contains(&port) {
            PortState::Indeterminate
        } else if self.listening.contains(&port) {
            PortState::Listening
        } else {
            PortState::Refused
        }
    }
}

/// A complete fake host plus a config whose sysctl file lives in a temp dir.
pub struct FakeHost {
    pub runner: FakeRunner,
    pub files: FakeFiles,
    pub ports: FakePorts,
    pub config: Config,
    _dir: tempfile::TempDir,
}

impl FakeHost {
    /// Debian host with glibc, free ports, systemd and containerd.
    pub fn ready() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.sysctl.path = dir.path().join("k8s.conf");

        Self {
            runner: FakeRunner::new()
                .with("apt-get --version", succeeded())
                .with("dpkg -s libc6", succeeded())
                .with("sysctl --system", succeeded()),
            files: FakeFiles::new()
                .with_path("/run/systemd/system")
                .with_path("/var/run/containerd"),
            ports: FakePorts::new(),
            config,
            _dir: dir,
        }
    }

    pub fn sysctl_path(&self) -> PathBuf {
        self.config.sysctl.path.clone()
    }

    pub fn probes(&self) -> HostProbes<'_> {
        HostProbes {
            commands: &self.runner,
            files: &self.files,
            ports: &self.ports,
        }
    }
}
