//! Persisting a result set to JSON or XML
//!
//! The format is inferred from the file extension. JSON holds the raw rows as
//! an array of arrays; XML wraps each row in an `item` element whose children
//! are named `field_0`, `field_1`, ... in column order.

use crate::{
    config::ExportConfig,
    core::store::{RowSet, format_value},
    error::{LookupError, Result},
    utils::fs::FileSystemUtils,
};
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use serde::Serialize;
use std::{fmt, path::Path};
use tracing::{debug, info, instrument, warn};

const XML_ROOT: &str = "results";
const XML_ITEM: &str = "item";
const XML_FIELD_PREFIX: &str = "field_";

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Supported export file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Xml,
}

impl ExportFormat {
    /// Infer export format from the text after the last `.` of the file name
    ///
    /// A bare `.json` or `.xml` counts as having that extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_lowercase())
            .and_then(|ext| match ext.as_str() {
                "json" => Some(ExportFormat::Json),
                "xml" => Some(ExportFormat::Xml),
                _ => None,
            })
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "JSON"),
            ExportFormat::Xml => write!(f, "XML"),
        }
    }
}

/// Writes result sets to disk
#[derive(Debug)]
pub struct Exporter {
    fs_utils: FileSystemUtils,
    json_indent: usize,
}

impl Exporter {
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            fs_utils: FileSystemUtils::new(),
            json_indent: config.json_indent,
        }
    }

    /// Serialize `rows` into `path`, choosing the format from its extension
    #[instrument(skip(self, rows))]
    pub fn export<P: AsRef<Path> + fmt::Debug>(&self, path: P, rows: &RowSet) -> Result<ExportFormat> {
        let path = path.as_ref();

        let Some(format) = ExportFormat::from_path(path) else {
            warn!("Refusing to export to {}: unsupported extension", path.display());
            return Err(LookupError::UnsupportedExtension);
        };

        let contents = match format {
            ExportFormat::Json => self.to_json(rows),
            ExportFormat::Xml => to_xml(rows),
        }
        .map_err(|e| LookupError::export(format!("Failed to encode {format} for {}", path.display()), e))?;

        debug!("Encoded {} row(s) as {} ({} bytes)", rows.len(), format, contents.len());

        self.fs_utils
            .write_file(path, &contents)
            .map_err(|e| LookupError::file_system("write", path, e))?;

        info!("Saved {} row(s) to {}", rows.len(), path.display());
        Ok(format)
    }

    /// Rows as an indented array of arrays
    pub fn to_json(&self, rows: &RowSet) -> std::result::Result<Vec<u8>, BoxError> {
        let indent = " ".repeat(self.json_indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());

        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        rows.rows.serialize(&mut serializer)?;
        Ok(buf)
    }
}

/// Rows as `<results><item><field_0>..</field_0></item></results>`
pub fn to_xml(rows: &RowSet) -> std::result::Result<Vec<u8>, BoxError> {
    let mut writer = Writer::new(Vec::new());

    if rows.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(XML_ROOT)))?;
        return Ok(writer.into_inner());
    }

    writer.write_event(Event::Start(BytesStart::new(XML_ROOT)))?;
    for row in rows {
        writer.write_event(Event::Start(BytesStart::new(XML_ITEM)))?;
        for (index, value) in row.iter().enumerate() {
            let name = format!("{XML_FIELD_PREFIX}{index}");
            writer.write_event(Event::Start(BytesStart::new(name.as_str())))?;
            writer.write_event(Event::Text(BytesText::new(&format_value(value))))?;
            writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
        }
        writer.write_event(Event::End(BytesEnd::new(XML_ITEM)))?;
    }
    writer.write_event(Event::End(BytesEnd::new(XML_ROOT)))?;

    Ok(writer.into_inner())
}
