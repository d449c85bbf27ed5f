pub mod thing;

pub use thing::{Model as Thing, ThingDraft, ThingId};
