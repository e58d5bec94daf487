//! `g env` – show the environment variables g reads.

use g_core::config::{ENV_GOROOT, ENV_HOME, ENV_MIRROR};

pub fn run_env() {
    for line in env_lines(|k| std::env::var(k).ok()) {
        println!("{line}");
    }
}

fn env_lines<F>(lookup: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    [ENV_HOME, ENV_MIRROR, ENV_GOROOT]
        .into_iter()
        .map(|k| format!("{}: {}", k, lookup(k).unwrap_or_default()))
        .collect()
}
