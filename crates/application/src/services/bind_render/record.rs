use super::absolute_name;
use netpanel_domain::{DnsRecord, RecordDiagnostic, RecordKind};
use std::fmt::Write;

/// BIND limits a single TXT character-string to 255 bytes.
const TXT_CHUNK_LEN: usize = 255;

/// One rendered zone-file line, or the reasons the record was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedRecord {
    pub line: Option<String>,
    pub diagnostics: Vec<RecordDiagnostic>,
}

impl RenderedRecord {
    fn line(line: String) -> Self {
        Self {
            line: Some(line),
            diagnostics: Vec::new(),
        }
    }

    fn skipped(diagnostic: RecordDiagnostic) -> Self {
        Self {
            line: None,
            diagnostics: vec![diagnostic],
        }
    }
}

/// Render one record as a zone-file line.
///
/// Rendering is best-effort: a record missing a type-specific field, or of
/// an unsupported type, yields no line and a diagnostic.
pub fn render_record(record: &DnsRecord) -> RenderedRecord {
    let kind = match record.kind() {
        Ok(kind) => kind,
        Err(diagnostic) => return RenderedRecord::skipped(diagnostic),
    };

    let rdata = match &kind {
        RecordKind::A { address } | RecordKind::Aaaa { address } => address.clone(),
        RecordKind::Cname { target } | RecordKind::Ns { target } | RecordKind::Ptr { target } => {
            absolute_name(target)
        }
        RecordKind::Mx { priority, exchange } => {
            format!("{} {}", priority, absolute_name(exchange))
        }
        RecordKind::Txt { text } => quote_txt(text),
        RecordKind::Srv {
            priority,
            weight,
            port,
            target,
        } => format!("{} {} {} {}", priority, weight, port, absolute_name(target)),
    };

    let line = match record.ttl {
        Some(ttl) => format!("{} {} IN {} {}", record.owner(), ttl, kind.type_name(), rdata),
        None => format!("{} IN {} {}", record.owner(), kind.type_name(), rdata),
    };

    RenderedRecord::line(line)
}

/// Quote TXT data, escaping backslashes, double quotes and control
/// characters (as `\DDD`).
///
/// Text longer than one character-string is split into several quoted
/// strings on the same line.
fn quote_txt(text: &str) -> String {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if current.len() + c.len_utf8() > TXT_CHUNK_LEN {
            chunks.push(std::mem::take(&mut current));
        }
        current.push(c);
    }
    if !current.is_empty() || chunks.is_empty() {
        chunks.push(current);
    }

    chunks
        .iter()
        .map(|chunk| format!("\"{}\"", escape_txt(chunk)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_txt(chunk: &str) -> String {
    let mut escaped = String::with_capacity(chunk.len() + 2);
    for c in chunk.chars() {
        match c {
            '"' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            c if c.is_ascii_control() => {
                let _ = write!(escaped, "\\{:03}", c as u8);
            }
            c => escaped.push(c),
        }
    }
    escaped
}
