use std::net::ToSocketAddrs;

use sysinfo::{Components, Disks, Networks, ProcessRefreshKind, ProcessesToUpdate, System};

use crate::telemetry::snapshot::{
    DiskUsage, InterfaceStats, NetworkInfo, ProcessRecord, SensorReading,
};

/// Point-in-time reader over the host. CPU, memory, and the process table
/// live on a persistent `System` (sysinfo needs consecutive refreshes for
/// usage deltas); disks, networks, and sensors are re-enumerated per query
/// so every screen sees current state.
pub struct Collector {
    sys: System,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_all();
        sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory().with_cpu(),
        );
        Collector { sys }
    }

    pub fn refresh(&mut self) {
        self.sys.refresh_memory();
        self.sys.refresh_cpu_all();
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory().with_cpu(),
        );
    }

    pub fn cpu_model(&self) -> Option<String> {
        self.sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty())
    }

    pub fn cpu_usage(&self) -> f32 {
        self.sys.global_cpu_usage()
    }

    pub fn memory_total(&self) -> u64 {
        self.sys.total_memory()
    }

    pub fn memory_used(&self) -> u64 {
        self.sys.used_memory()
    }

    pub fn process_count(&self) -> usize {
        self.sys.processes().len()
    }

    /// Process records ordered by memory share, largest first.
    pub fn processes_by_memory(&mut self, limit: usize) -> Vec<ProcessRecord> {
        self.refresh();
        let mut records = self.process_records();
        records.sort_by(|a, b| {
            b.memory_percent
                .partial_cmp(&a.memory_percent)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        records.truncate(limit);
        records
    }

    /// Case-insensitive name filter over the live process table.
    pub fn processes_matching(&mut self, keyword: &str) -> Vec<ProcessRecord> {
        self.refresh();
        let needle = keyword.to_lowercase();
        let mut records: Vec<ProcessRecord> = self
            .process_records()
            .into_iter()
            .filter(|record| record.name.to_lowercase().contains(&needle))
            .collect();
        records.sort_by_key(|record| record.pid);
        records
    }

    fn process_records(&self) -> Vec<ProcessRecord> {
        let total_memory = self.sys.total_memory().max(1);
        self.sys
            .processes()
            .iter()
            .map(|(pid, process)| ProcessRecord {
                pid: pid.as_u32(),
                name: process.name().to_string_lossy().to_string(),
                memory_percent: process.memory() as f32 / total_memory as f32 * 100.0,
            })
            .collect()
    }

    /// Usage of the filesystem mounted at `/`.
    pub fn root_disk(&self) -> Option<DiskUsage> {
        self.disks()
            .into_iter()
            .find(|disk| disk.mount_point == "/")
    }

    pub fn disks(&self) -> Vec<DiskUsage> {
        Disks::new_with_refreshed_list()
            .iter()
            .map(|disk| {
                let total = disk.total_space();
                let available = disk.available_space();
                DiskUsage {
                    mount_point: disk.mount_point().to_string_lossy().to_string(),
                    total_bytes: total,
                    used_bytes: total.saturating_sub(available),
                    available_bytes: available,
                }
            })
            .collect()
    }

    pub fn network_info(&self) -> NetworkInfo {
        let hostname = System::host_name().unwrap_or_else(|| "Unknown Host".to_string());
        let address = resolve_host(&hostname).unwrap_or_else(|| "Unknown Address".to_string());
        let mut interfaces: Vec<InterfaceStats> = Networks::new_with_refreshed_list()
            .iter()
            .map(|(name, data)| InterfaceStats {
                name: name.to_string(),
                received: data.total_received(),
                transmitted: data.total_transmitted(),
            })
            .collect();
        interfaces.sort_by(|a, b| a.name.cmp(&b.name));
        NetworkInfo {
            hostname,
            address,
            interfaces,
        }
    }

    /// Sensor readings; an empty list is a valid outcome on hosts without
    /// exposed thermal sensors.
    pub fn temperatures(&self) -> Vec<SensorReading> {
        Components::new_with_refreshed_list()
            .iter()
            .filter_map(|component| {
                component.temperature().map(|celsius| SensorReading {
                    name: component.label().to_string(),
                    label: None,
                    celsius,
                })
            })
            .collect()
    }

    pub fn uptime() -> u64 {
        System::uptime()
    }
}

fn resolve_host(hostname: &str) -> Option<String> {
    (hostname, 0)
        .to_socket_addrs()
        .ok()?
        .next()
        .map(|addr| addr.ip().to_string())
}
