use anyhow::{Context, Result, bail};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::history::Event;

const CSV_HEADER: [&str; 3] = ["data", "ação", "medicamento"];

pub fn default_filename(now: OffsetDateTime) -> PathBuf {
    PathBuf::from(format!(
        "medcontrol_historico_{:04}-{:02}-{:02}.csv",
        now.year(),
        u8::from(now.month()),
        now.day()
    ))
}

/// Writes the full history to `path`. Refuses to produce a file for an
/// empty history.
pub fn export(events: &[Event], path: &Path) -> Result<()> {
    if events.is_empty() {
        bail!("History is empty, nothing to export");
    }
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    write_csv(events, file)
}

// Every cell quoted, quotes doubled, CRLF record ends.
fn write_csv<W: Write>(events: &[Event], out: W) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(out);

    writer
        .write_record(CSV_HEADER)
        .context("Failed to write CSV header")?;
    for event in events {
        let at = event
            .at
            .format(&Rfc3339)
            .context("Failed to format event timestamp")?;
        writer
            .write_record([at.as_str(), event.action.as_str(), &event.med])
            .context("Failed to write CSV row")?;
    }
    writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}
