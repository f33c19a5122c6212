use ahash::AHashMap;

use std::{
    sync::LazyLock,
    sync::RwLock,
    time::{Duration, Instant},
};

static PROFILER_TABLE: LazyLock<RwLock<AHashMap<&'static str, Duration>>> =
    LazyLock::new(|| RwLock::new(AHashMap::new()));

/// Run `f`, add its wall time to the total for `tag`, and hand back both.
pub fn profile<T: FnOnce() -> X, X>(tag: &'static str, f: T) -> (X, Duration) {
    let start = Instant::now();
    let res = f();
    let time = start.elapsed();
    let mut table = PROFILER_TABLE
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let entry = table.entry(tag).or_default();
    *entry += time;
    (res, time)
}

pub fn total(tag: &str) -> Option<Duration> {
    let table = PROFILER_TABLE
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    table.get(tag).copied()
}

pub fn profile_log() {
    let table = PROFILER_TABLE
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let mut pairs: Vec<_> = table.iter().collect();
    pairs.sort_by(|(_, b), (_, a)| a.cmp(b));
    eprintln!("PROFILE RESULTS:");
    for (name, t) in pairs {
        eprintln!("    {:20} {:?}", name, t);
    }
}
