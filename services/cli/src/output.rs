use brsr_core::error::AppError;
use brsr_core::ReportArtifacts;
use chrono::NaiveDate;
use serde::Serialize;
use std::io::{self, Write};

/// Full pipeline output stamped with the date it was produced.
#[derive(Debug, Serialize)]
pub(crate) struct ReportEnvelope {
    pub(crate) generated_on: NaiveDate,
    #[serde(flatten)]
    pub(crate) artifacts: ReportArtifacts,
}

pub(crate) fn write_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    render_json(&mut handle, value, pretty)?;
    handle.flush()?;
    Ok(())
}

fn render_json<W: Write, T: Serialize>(
    writer: &mut W,
    value: &T,
    pretty: bool,
) -> Result<(), AppError> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)?;
    } else {
        serde_json::to_writer(&mut *writer, value)?;
    }
    writeln!(writer)?;
    Ok(())
}
