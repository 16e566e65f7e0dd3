use crate::system::process::SortMode;

/// Truncates a process name to `max_len` characters, replacing the tail
/// with `...` when it does not fit.
pub fn truncate_name(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let keep: String = s.chars().take(max_len.saturating_sub(3)).collect();
    format!("{keep}...")
}

/// Formats a metric value for a bubble label: percentages for cpu/memory,
/// a plain count for threads.
pub fn format_metric(value: f64, mode: SortMode) -> String {
    match mode {
        SortMode::Cpu | SortMode::Memory => format!("{value:.1}%"),
        SortMode::Threads => format!("{}", value as u64),
    }
}
