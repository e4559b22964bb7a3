pub mod kind;
pub mod record;
pub mod record_type;

pub use kind::{RecordDiagnostic, RecordKind};
pub use record::DnsRecord;
pub use record_type::RecordType;
