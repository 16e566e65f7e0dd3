use color_eyre::Result;
use color_eyre::eyre::eyre;
use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System, Users};

use super::process::ProcessSample;

/// Process-information provider backed by sysinfo. Owned by the sampler
/// task for the whole run; `sample` is called once per refresh request.
pub struct Collector {
    sys: System,
    users: Users,
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
            ProcessRefreshKind::everything(),
        );
        let users = Users::new_with_refreshed_list();
        Collector { sys, users }
    }

    /// Polls the OS and returns a fresh batch, one sample per readable
    /// process. Processes sysinfo cannot read are skipped by the library
    /// itself; an empty enumeration is the provider-level failure.
    pub fn sample(&mut self) -> Result<Vec<ProcessSample>> {
        self.sys.refresh_memory();
        self.sys.refresh_cpu_all();
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::everything(),
        );

        let total_memory = self.sys.total_memory();
        if self.sys.processes().is_empty() {
            return Err(eyre!("failed to enumerate processes"));
        }

        let mut samples = Vec::with_capacity(self.sys.processes().len());
        for (pid, process) in self.sys.processes() {
            let mem_percent = if total_memory > 0 {
                (process.memory() as f64 / total_memory as f64 * 100.0) as f32
            } else {
                0.0
            };
            let user = process
                .user_id()
                .and_then(|uid| self.users.get_user_by_id(uid))
                .map(|u| u.name().to_string());

            samples.push(ProcessSample {
                pid: pid.as_u32(),
                name: process.name().to_string_lossy().to_string(),
                cpu_percent: process.cpu_usage(),
                mem_percent,
                // Task lists are only reported on some platforms; a
                // process always has at least its main thread.
                threads: process.tasks().map(|t| t.len() as u32).unwrap_or(1),
                status: process.status().to_string(),
                start_time: process.start_time(),
                user,
            });
        }

        Ok(samples)
    }
}
