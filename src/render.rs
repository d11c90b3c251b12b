use time::OffsetDateTime;

use crate::{history::Event, schedule::Schedule};

pub const HISTORY_DISPLAY_LIMIT: usize = 50;

pub fn schedule_lines(schedule: &Schedule) -> Vec<String> {
    if schedule.is_empty() {
        return vec!["Nenhum medicamento agendado.".to_owned()];
    }

    schedule
        .entries()
        .iter()
        .enumerate()
        .map(|(i, med)| {
            let mut line = format!("{}. {}", i + 1, med.name);
            if !med.dose.is_empty() {
                line.push_str(" — ");
                line.push_str(&med.dose);
            }
            line.push_str(" • ");
            line.push_str(&med.time);
            if med.repeat {
                line.push_str(" • diário");
            }
            line
        })
        .collect()
}

pub fn history_lines(events: &[Event]) -> Vec<String> {
    if events.is_empty() {
        return vec!["Nenhum evento registrado.".to_owned()];
    }

    events
        .iter()
        .take(HISTORY_DISPLAY_LIMIT)
        .map(|event| {
            format!(
                "{} — {} — {}",
                minute_stamp(event.at),
                event.action.as_str().to_uppercase(),
                event.med
            )
        })
        .collect()
}

// Timestamp truncated to minutes, matching the stored RFC 3339 prefix.
fn minute_stamp(at: OffsetDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        at.year(),
        u8::from(at.month()),
        at.day(),
        at.hour(),
        at.minute()
    )
}
