use sysinfo::System;

use crate::exec::CommandRunner;
use crate::format::{format_gib, format_uptime};
use crate::telemetry::collector::Collector;
use crate::telemetry::probes;

/// Point-in-time identity facts for the system-info screen. Captured fresh
/// on every request, never cached; every field degrades to an "Unknown ..."
/// sentinel on its own.
#[derive(Debug, Clone)]
pub struct SystemSnapshot {
    pub os_name: String,
    pub kernel: String,
    pub cpu_model: String,
    pub gpu_model: String,
    pub ram_total_bytes: u64,
    pub hostname: String,
    pub shell: String,
    pub uptime_secs: u64,
    pub theme: String,
    pub browser: String,
}

impl SystemSnapshot {
    pub fn capture(collector: &mut Collector, runner: &dyn CommandRunner) -> Self {
        collector.refresh();
        SystemSnapshot {
            os_name: System::name().unwrap_or_else(|| "Unknown OS".to_string()),
            kernel: System::kernel_version().unwrap_or_else(|| "Unknown Kernel".to_string()),
            cpu_model: collector
                .cpu_model()
                .unwrap_or_else(|| "Unknown CPU".to_string()),
            gpu_model: probes::gpu_model(runner).unwrap_or_else(|| "Unknown GPU".to_string()),
            ram_total_bytes: collector.memory_total(),
            hostname: System::host_name().unwrap_or_else(|| "Unknown Host".to_string()),
            shell: probes::login_shell().unwrap_or_else(|| "Unknown Shell".to_string()),
            uptime_secs: System::uptime(),
            theme: probes::desktop_theme(runner).unwrap_or_else(|| "Unknown Theme".to_string()),
            browser: probes::default_browser(runner)
                .unwrap_or_else(|| "Unknown Browser".to_string()),
        }
    }

    /// Display order for the property/value table.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("OS", self.os_name.clone()),
            ("Kernel", self.kernel.clone()),
            ("CPU", self.cpu_model.clone()),
            ("GPU", self.gpu_model.clone()),
            ("RAM", format_gib(self.ram_total_bytes)),
            ("Hostname", self.hostname.clone()),
            ("Shell", self.shell.clone()),
            ("Uptime", format_uptime(self.uptime_secs)),
            ("Theme", self.theme.clone()),
            ("Browser", self.browser.clone()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: String,
    pub memory_percent: f32,
}

#[derive(Debug, Clone)]
pub struct DiskUsage {
    pub mount_point: String,
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub available_bytes: u64,
}

impl DiskUsage {
    pub fn percent_used(&self) -> f64 {
        if self.total_bytes == 0 {
            return 0.0;
        }
        self.used_bytes as f64 / self.total_bytes as f64 * 100.0
    }
}

#[derive(Debug, Clone)]
pub struct InterfaceStats {
    pub name: String,
    pub received: u64,
    pub transmitted: u64,
}

#[derive(Debug, Clone)]
pub struct NetworkInfo {
    pub hostname: String,
    pub address: String,
    pub interfaces: Vec<InterfaceStats>,
}

#[derive(Debug, Clone)]
pub struct SensorReading {
    pub name: String,
    pub label: Option<String>,
    pub celsius: f32,
}

impl SensorReading {
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}
