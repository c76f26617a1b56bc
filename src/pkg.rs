use tracing::debug;

use crate::exec::{CommandRunner, CommandSpec};

/// Host package managers in probe priority order. The `none` kind from the
/// data model is rendered as `Option<PackageManager>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Pacman,
    Apt,
    Dnf,
    Yum,
}

pub const PROBE_ORDER: [PackageManager; 4] = [
    PackageManager::Pacman,
    PackageManager::Apt,
    PackageManager::Dnf,
    PackageManager::Yum,
];

impl PackageManager {
    pub fn name(self) -> &'static str {
        match self {
            PackageManager::Pacman => "pacman",
            PackageManager::Apt => "apt",
            PackageManager::Dnf => "dnf",
            PackageManager::Yum => "yum",
        }
    }

    /// First manager whose executable is on the search path, highest
    /// priority wins. Deterministic for a fixed set of present binaries.
    pub fn detect() -> Option<Self> {
        Self::detect_with(crate::exec::command_exists)
    }

    pub fn detect_with(probe: impl Fn(&str) -> bool) -> Option<Self> {
        let found = PROBE_ORDER.into_iter().find(|manager| probe(manager.name()));
        debug!(manager = ?found.map(PackageManager::name), "package manager probe");
        found
    }

    fn list_spec(self) -> CommandSpec {
        match self {
            PackageManager::Pacman => CommandSpec::argv("pacman", &["-Q"]),
            PackageManager::Apt => CommandSpec::argv("dpkg-query", &["-l"]),
            PackageManager::Dnf | PackageManager::Yum => {
                CommandSpec::argv(self.name(), &["list", "installed"])
            }
        }
    }

    fn install_spec(self, package: &str) -> CommandSpec {
        match self {
            PackageManager::Pacman => {
                CommandSpec::argv("pacman", &["-S", "--noconfirm", package]).elevated()
            }
            PackageManager::Apt => {
                CommandSpec::argv("apt-get", &["install", "-y", package]).elevated()
            }
            PackageManager::Dnf | PackageManager::Yum => {
                CommandSpec::argv(self.name(), &["install", "-y", package]).elevated()
            }
        }
    }

    fn remove_spec(self, package: &str) -> CommandSpec {
        match self {
            PackageManager::Pacman => {
                CommandSpec::argv("pacman", &["-Rns", "--noconfirm", package]).elevated()
            }
            PackageManager::Apt => CommandSpec::argv("apt", &["remove", "-y", package]).elevated(),
            PackageManager::Dnf | PackageManager::Yum => {
                CommandSpec::argv(self.name(), &["remove", "-y", package]).elevated()
            }
        }
    }

    /// Update is a sequence with `&&` semantics: later steps run only after
    /// earlier steps succeed.
    fn update_specs(self) -> Vec<CommandSpec> {
        match self {
            PackageManager::Pacman => {
                vec![CommandSpec::argv("pacman", &["-Syu", "--noconfirm"]).elevated()]
            }
            PackageManager::Apt => vec![
                CommandSpec::argv("apt", &["update"]).elevated(),
                CommandSpec::argv("apt", &["upgrade", "-y"]).elevated(),
            ],
            PackageManager::Dnf | PackageManager::Yum => vec![
                CommandSpec::argv(self.name(), &["update", "-y"]).elevated(),
                CommandSpec::argv(self.name(), &["upgrade", "-y"]).elevated(),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PkgOutcome {
    Completed { success: bool },
    /// No supported manager present; no command was attempted.
    Unsupported,
}

impl PkgOutcome {
    pub fn succeeded(self) -> bool {
        matches!(self, PkgOutcome::Completed { success: true })
    }
}

/// Uniform {list, install, remove, update} capability over the detected
/// manager. Output streams straight to the operator; success is decided by
/// exit status alone.
pub struct PackageAdapter<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> PackageAdapter<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        PackageAdapter { runner }
    }

    pub fn list_installed(&self, kind: Option<PackageManager>) -> PkgOutcome {
        let Some(manager) = kind else {
            return PkgOutcome::Unsupported;
        };
        let result = self.runner.run(&manager.list_spec());
        PkgOutcome::Completed {
            success: result.success(),
        }
    }

    pub fn install(&self, kind: Option<PackageManager>, package: &str) -> PkgOutcome {
        let Some(manager) = kind else {
            return PkgOutcome::Unsupported;
        };
        let result = self.runner.run(&manager.install_spec(package));
        PkgOutcome::Completed {
            success: result.success(),
        }
    }

    pub fn remove(&self, kind: Option<PackageManager>, package: &str) -> PkgOutcome {
        let Some(manager) = kind else {
            return PkgOutcome::Unsupported;
        };
        let result = self.runner.run(&manager.remove_spec(package));
        PkgOutcome::Completed {
            success: result.success(),
        }
    }

    pub fn update(&self, kind: Option<PackageManager>) -> PkgOutcome {
        let Some(manager) = kind else {
            return PkgOutcome::Unsupported;
        };
        for spec in manager.update_specs() {
            if !self.runner.run(&spec).success() {
                return PkgOutcome::Completed { success: false };
            }
        }
        PkgOutcome::Completed { success: true }
    }
}
