use std::fmt;

/// Typed resource record data, one variant per supported record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKind {
    A { address: String },
    Aaaa { address: String },
    Cname { target: String },
    Mx { priority: u16, exchange: String },
    Txt { text: String },
    Ns { target: String },
    Ptr { target: String },
    Srv { priority: u16, weight: u16, port: u16, target: String },
}

impl RecordKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            RecordKind::A { .. } => "A",
            RecordKind::Aaaa { .. } => "AAAA",
            RecordKind::Cname { .. } => "CNAME",
            RecordKind::Mx { .. } => "MX",
            RecordKind::Txt { .. } => "TXT",
            RecordKind::Ns { .. } => "NS",
            RecordKind::Ptr { .. } => "PTR",
            RecordKind::Srv { .. } => "SRV",
        }
    }
}

/// Reason a record was left out of a rendered zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordDiagnostic {
    MissingField {
        record_id: String,
        record_type: String,
        owner: String,
        field: &'static str,
    },
    UnsupportedType {
        record_id: String,
        record_type: String,
        owner: String,
    },
}

impl RecordDiagnostic {
    pub fn record_id(&self) -> &str {
        match self {
            RecordDiagnostic::MissingField { record_id, .. }
            | RecordDiagnostic::UnsupportedType { record_id, .. } => record_id,
        }
    }
}

impl fmt::Display for RecordDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordDiagnostic::MissingField {
                record_id,
                record_type,
                owner,
                field,
            } => write!(
                f,
                "{} record '{}' (id {}) skipped: missing {}",
                record_type, owner, record_id, field
            ),
            RecordDiagnostic::UnsupportedType {
                record_id,
                record_type,
                owner,
            } => write!(
                f,
                "record '{}' (id {}) skipped: unsupported type {}",
                owner, record_id, record_type
            ),
        }
    }
}
