use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::cli::OutputFormat;
use crate::controller::SceneRequest;
use crate::types::GeometryBuffer;

pub fn summary(request: &SceneRequest, buffer: &GeometryBuffer) -> String {
    format!(
        "{} level {}: {} vertices, {} shapes ({:?})",
        request.scene.name(),
        request.level,
        buffer.vertex_count(),
        buffer.shape_count(),
        buffer.topology(),
    )
}

pub fn write_json<W: Write>(buffer: &GeometryBuffer, writer: W) -> Result<()> {
    serde_json::to_writer(writer, buffer).context("Failed to serialize geometry as JSON")
}

pub fn write_raw<W: Write>(buffer: &GeometryBuffer, mut writer: W) -> Result<()> {
    let vertices = buffer.interleaved();
    writer
        .write_all(bytemuck::cast_slice(&vertices))
        .context("Failed to write raw vertex data")
}

/// Writes `buffer` in `format` to `output`, or to stdout when no path is given
pub fn export(
    format: OutputFormat,
    request: &SceneRequest,
    buffer: &GeometryBuffer,
    output: Option<&Path>,
) -> Result<()> {
    let mut writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .context(format!("Failed to create output file: {:?}", path))?;
            Box::new(BufWriter::new(file))
        }
        None if format == OutputFormat::Raw => bail!("raw output needs --output"),
        None => Box::new(io::stdout().lock()),
    };

    match format {
        OutputFormat::Summary => writeln!(writer, "{}", summary(request, buffer))?,
        OutputFormat::Json => write_json(buffer, &mut writer)?,
        OutputFormat::Raw => write_raw(buffer, &mut writer)?,
    }
    writer.flush().context("Failed to flush output")?;

    if let Some(path) = output {
        log::info!("Wrote {:?} output to {:?}", format, path);
    }
    Ok(())
}
