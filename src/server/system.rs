//! Host process and resource reports for `ps` and `stats`

use std::time::Duration;

use sysinfo::{Process, System, MINIMUM_CPU_UPDATE_INTERVAL};
use tokio::time::sleep;

/// Rows shown by `ps`
pub const PROCESS_LIMIT: usize = 20;

/// Sampling window for `stats`
const STATS_INTERVAL: Duration = Duration::from_millis(500);

/// Process names are cut to this many characters
const NAME_WIDTH: usize = 25;

/// `ps`: the busiest processes, one per line
///
/// CPU usage needs two samples, so this waits one update interval.
pub async fn list_processes(limit: usize) -> String {
    let mut sys = System::new_all();
    sleep(MINIMUM_CPU_UPDATE_INTERVAL).await;
    sys.refresh_processes();

    let total_memory = sys.total_memory();
    let mut procs: Vec<&Process> = sys.processes().values().collect();
    procs.sort_by(|a, b| b.cpu_usage().total_cmp(&a.cpu_usage()));

    procs
        .into_iter()
        .take(limit)
        .map(|p| {
            format_process_row(
                p.pid().as_u32(),
                p.name(),
                p.cpu_usage(),
                percent(p.memory(), total_memory),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `stats`: overall CPU and memory usage
pub async fn system_stats() -> String {
    let mut sys = System::new();
    sys.refresh_cpu();
    sleep(STATS_INTERVAL.max(MINIMUM_CPU_UPDATE_INTERVAL)).await;
    sys.refresh_cpu();
    sys.refresh_memory();

    format_stats(
        sys.global_cpu_info().cpu_usage(),
        percent(sys.used_memory(), sys.total_memory()),
    )
}

fn format_process_row(pid: u32, name: &str, cpu: f32, mem: f32) -> String {
    let name: String = name.chars().take(NAME_WIDTH).collect();
    format!("{:6} {:<width$} CPU:{:5.1} MEM:{:5.1}", pid, name, cpu, mem, width = NAME_WIDTH)
}

fn format_stats(cpu: f32, mem: f32) -> String {
    format!("CPU: {:.1}% | Mem: {:.1}%", cpu, mem)
}

fn percent(part: u64, whole: u64) -> f32 {
    if whole == 0 {
        0.0
    } else {
        (part as f64 / whole as f64 * 100.0) as f32
    }
}
