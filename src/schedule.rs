use anyhow::bail;
use serde::{Deserialize, Serialize};
use time::{
    OffsetDateTime, Time, format_description::BorrowedFormatItem, macros::format_description,
};

use crate::history::{Action, History};

const CLOCK_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    pub name: String,
    #[serde(default)]
    pub dose: String,
    pub time: String,
    pub repeat: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Medicine {
    pub fn new(
        name: &str,
        dose: &str,
        time: &str,
        repeat: bool,
        now: OffsetDateTime,
    ) -> anyhow::Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            bail!("Medicine name must not be empty");
        }

        let time = time.trim();
        if Time::parse(time, CLOCK_FORMAT).is_err() {
            bail!("Time must be a 24-hour HH:MM value, got {time:?}");
        }

        Ok(Self {
            name: name.to_owned(),
            dose: dose.trim().to_owned(),
            time: time.to_owned(),
            repeat,
            created_at: now,
        })
    }

    pub fn label(&self) -> String {
        if self.dose.is_empty() {
            self.name.clone()
        } else {
            format!("{} — {}", self.name, self.dose)
        }
    }
}

#[derive(Debug, Default)]
pub struct Schedule(Vec<Medicine>);

impl Schedule {
    pub fn new(meds: Vec<Medicine>) -> Self {
        Self(meds)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn entries(&self) -> &[Medicine] {
        &self.0
    }

    /// Copy for iteration while the live list is being mutated.
    pub fn snapshot(&self) -> Vec<Medicine> {
        self.0.clone()
    }

    pub fn add(&mut self, med: Medicine) {
        self.0.push(med);
    }

    /// Positions are 1-based, as printed by `list`.
    pub fn get(&self, position: usize) -> Option<&Medicine> {
        self.0.get(position.checked_sub(1)?)
    }

    pub fn remove_by_created_at(&mut self, id: OffsetDateTime) -> Option<Medicine> {
        let index = self.0.iter().position(|med| med.created_at == id)?;
        Some(self.0.remove(index))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Records a taken/skipped event for the entry at `position` and drops the
/// entry unless it repeats daily. Removal goes through `created_at`, never
/// through the position itself.
pub fn mark(
    schedule: &mut Schedule,
    history: &mut History,
    position: usize,
    action: Action,
    now: OffsetDateTime,
) -> Option<Medicine> {
    let med = schedule.get(position)?.clone();
    history.record(action, &med.name, now);
    if !med.repeat {
        schedule.remove_by_created_at(med.created_at);
    }
    Some(med)
}
