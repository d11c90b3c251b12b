use anyhow::Result;
use log::{info, warn};
use std::{thread, time::Duration};
use time::OffsetDateTime;

use crate::{
    history::{Action, History},
    notify::Notifier,
    schedule::Schedule,
    store::Store,
};

pub const CHECK_PERIOD: Duration = Duration::from_secs(30);
pub const STARTUP_DELAY: Duration = Duration::from_millis(1500);

pub fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Minute-resolution clock label; a reminder matches for the whole minute.
pub fn clock_label(now: OffsetDateTime) -> String {
    format!("{:02}:{:02}", now.hour(), now.minute())
}

/// One reminder pass. Iterates a snapshot of the schedule, delivers a
/// notification and a `lembrete` event for every entry due at `now`, and
/// removes fired single-shot entries from the live list by `created_at`.
/// Returns how many entries fired.
pub fn run_tick(
    schedule: &mut Schedule,
    history: &mut History,
    notifier: &mut dyn Notifier,
    now: OffsetDateTime,
) -> usize {
    if schedule.is_empty() {
        return 0;
    }

    let current = clock_label(now);
    let mut fired = 0;

    for med in schedule.snapshot() {
        if med.time != current {
            continue;
        }
        notifier.deliver("Hora do remédio", &med.label());
        history.record(Action::Reminded, &med.name, now);
        if !med.repeat {
            schedule.remove_by_created_at(med.created_at);
        }
        fired += 1;
    }

    fired
}

/// Foreground polling loop: one early pass to catch already-due reminders,
/// then one pass per period until the process is killed.
pub fn watch(store: &Store, notifier: &mut dyn Notifier) -> Result<()> {
    info!(
        "reminder checker running, polling every {}s",
        CHECK_PERIOD.as_secs()
    );
    thread::sleep(STARTUP_DELAY);
    loop {
        if let Err(err) = poll(store, notifier) {
            warn!("reminder pass failed: {err:#}");
        }
        thread::sleep(CHECK_PERIOD);
    }
}

fn poll(store: &Store, notifier: &mut dyn Notifier) -> Result<()> {
    let mut schedule = store.load_schedule();
    if schedule.is_empty() {
        return Ok(());
    }
    let mut history = store.load_history();

    let now = local_now();
    let fired = run_tick(&mut schedule, &mut history, notifier, now);
    if fired > 0 {
        info!("{fired} reminder(s) fired at {}", clock_label(now));
        store.save_schedule(&schedule)?;
        store.save_history(&history)?;
    }
    Ok(())
}
