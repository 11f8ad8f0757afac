pub use controls::{ControlId, Controls};
pub use controls::control::{ControlPlugin, Normalized};
pub use controls::interval::{Interval, InternalInterval, IntervalControl, IntervalDeclaration, IntervalSettings};
pub use controls::kind::{ControlDeclaration, ControlKind, ControlSettings, ControlValue};
pub use controls::map::{ControlMap, ControlState};
pub use controls::number::{Bounds, NumberControl, NumberDeclaration, NumberSettings};
pub use error::Error;

// Re-exports
pub use knurl_core;
pub use serde_json;

mod error;
pub mod controls;
