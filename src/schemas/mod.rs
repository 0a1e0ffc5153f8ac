pub mod envelope;

pub use envelope::{decode_envelope, envelope_schema, validate_envelope};
