use std::cmp::Ordering;

/// Snapshot of one process at poll time. Produced wholesale by the
/// collector once per poll and replaced by the next batch.
#[derive(Clone, Debug)]
pub struct ProcessSample {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f32,
    pub mem_percent: f32,
    pub threads: u32,
    pub status: String,
    pub start_time: u64,
    pub user: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Cpu,
    Memory,
    Threads,
}

impl SortMode {
    pub fn label(self) -> &'static str {
        match self {
            SortMode::Cpu => "CPU%",
            SortMode::Memory => "Memory%",
            SortMode::Threads => "Threads",
        }
    }

    pub fn from_str_config(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "memory" => SortMode::Memory,
            "threads" => SortMode::Threads,
            _ => SortMode::Cpu,
        }
    }
}

/// The scalar a sample contributes under the active sort mode.
pub fn metric_value(sample: &ProcessSample, mode: SortMode) -> f64 {
    match mode {
        SortMode::Cpu => sample.cpu_percent as f64,
        SortMode::Memory => sample.mem_percent as f64,
        SortMode::Threads => sample.threads as f64,
    }
}

/// Sorts a batch descending by the active metric. Stable, so equal values
/// keep their enumeration order across re-sorts.
pub fn sort_samples(samples: &mut [ProcessSample], mode: SortMode) {
    samples.sort_by(|a, b| {
        metric_value(b, mode)
            .partial_cmp(&metric_value(a, mode))
            .unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_sample(pid: u32, cpu: f32, mem: f32, threads: u32) -> ProcessSample {
        ProcessSample {
            pid,
            name: format!("proc_{pid}"),
            cpu_percent: cpu,
            mem_percent: mem,
            threads,
            status: "Run".to_string(),
            start_time: 1_700_000_000,
            user: Some("user".to_string()),
        }
    }

    #[test]
    fn metric_value_reads_the_active_field() {
        let s = make_sample(1, 12.5, 3.25, 42);
        assert_eq!(metric_value(&s, SortMode::Cpu), 12.5);
        assert_eq!(metric_value(&s, SortMode::Memory), 3.25);
        assert_eq!(metric_value(&s, SortMode::Threads), 42.0);
    }

    #[test]
    fn sort_is_descending_per_mode() {
        let mut batch = vec![
            make_sample(1, 5.0, 40.0, 2),
            make_sample(2, 50.0, 10.0, 8),
            make_sample(3, 20.0, 20.0, 99),
        ];

        sort_samples(&mut batch, SortMode::Cpu);
        let pids: Vec<u32> = batch.iter().map(|s| s.pid).collect();
        assert_eq!(pids, vec![2, 3, 1]);

        sort_samples(&mut batch, SortMode::Memory);
        let pids: Vec<u32> = batch.iter().map(|s| s.pid).collect();
        assert_eq!(pids, vec![1, 3, 2]);

        sort_samples(&mut batch, SortMode::Threads);
        let pids: Vec<u32> = batch.iter().map(|s| s.pid).collect();
        assert_eq!(pids, vec![3, 2, 1]);
    }

    #[test]
    fn unknown_config_string_falls_back_to_cpu() {
        assert_eq!(SortMode::from_str_config("memory"), SortMode::Memory);
        assert_eq!(SortMode::from_str_config("THREADS"), SortMode::Threads);
        assert_eq!(SortMode::from_str_config("bogus"), SortMode::Cpu);
    }
}
