mod sample_emitter;
mod status_parser;

pub use sample_emitter::{EmitReport, SampleEmitter};
pub use status_parser::StatusParser;
