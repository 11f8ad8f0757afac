pub mod control;
pub mod interval;
pub mod kind;
pub mod map;
pub mod number;
pub mod schema;

use interval::Interval;
use kind::{ControlSettings, ControlValue};
use map::ControlState;

pub type ControlId = u32;

/// Read access to a collection of registered controls.
pub trait Controls {
    fn ids(&self) -> &[ControlId];
    fn get(&self, id: impl Into<ControlId>) -> Option<&ControlState>;

    fn value(&self, id: impl Into<ControlId>) -> Option<&ControlValue> {
        self.get(id).map(ControlState::value)
    }

    fn settings(&self, id: impl Into<ControlId>) -> Option<&ControlSettings> {
        self.get(id).map(ControlState::settings)
    }

    fn interval(&self, id: impl Into<ControlId>) -> Option<Interval> {
        self.value(id).and_then(ControlValue::as_interval)
    }

    fn number(&self, id: impl Into<ControlId>) -> Option<f64> {
        self.value(id).and_then(ControlValue::as_number)
    }
}
