use std::fmt::Display;

use serde::Deserialize;
use serde_json::Value;

use crate::Error;

use super::{
    control::ControlPlugin,
    interval::{Interval, InternalInterval, IntervalControl, IntervalDeclaration, IntervalSettings},
    number::{NumberControl, NumberDeclaration, NumberSettings},
};

/// Tag selecting which plugin implementation handles a control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ControlKind {
    Interval,
    Number,
}

impl ControlKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "interval" => Some(Self::Interval),
            "number" => Some(Self::Number),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Interval => "interval",
            Self::Number => "number",
        }
    }

    /// Routes the raw shape check to the kind's validator.
    pub fn validate(&self, value: &Value, settings: &Value) -> bool {
        match self {
            Self::Interval => IntervalControl.validate(value, settings),
            Self::Number => NumberControl.validate(value, settings),
        }
    }
}

impl Display for ControlKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed control declaration, tagged by kind.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
#[non_exhaustive]
pub enum ControlDeclaration {
    Interval(IntervalDeclaration),
    Number(NumberDeclaration),
}

impl ControlDeclaration {
    pub fn kind(&self) -> ControlKind {
        match self {
            Self::Interval(_) => ControlKind::Interval,
            Self::Number(_) => ControlKind::Number,
        }
    }

    /// One-time derivation of settings from the declaration. The declared
    /// value comes back unchanged; sanitizing it is the host's move.
    pub fn normalize(self) -> (ControlValue, ControlSettings) {
        match self {
            Self::Interval(declaration) => {
                let normalized = IntervalControl.normalize(declaration);
                (
                    ControlValue::Interval(normalized.value),
                    ControlSettings::Interval(normalized.settings),
                )
            },

            Self::Number(declaration) => {
                let normalized = NumberControl.normalize(declaration);
                (
                    ControlValue::Number(normalized.value),
                    ControlSettings::Number(normalized.settings),
                )
            },
        }
    }

    pub(crate) fn bounds_are_ordered(&self) -> bool {
        match self {
            Self::Interval(declaration) => declaration.min <= declaration.max,
            Self::Number(declaration) => declaration.min <= declaration.max,
        }
    }
}

/// A control value, tagged by kind.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum ControlValue {
    Interval(Interval),
    Number(f64),
}

impl ControlValue {
    pub fn kind(&self) -> ControlKind {
        match self {
            Self::Interval(_) => ControlKind::Interval,
            Self::Number(_) => ControlKind::Number,
        }
    }

    pub fn as_interval(&self) -> Option<Interval> {
        match self {
            Self::Interval(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }
}

/// Settings of a registered control, tagged by kind.
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub enum ControlSettings {
    Interval(IntervalSettings),
    Number(NumberSettings),
}

impl ControlSettings {
    pub fn kind(&self) -> ControlKind {
        match self {
            Self::Interval(_) => ControlKind::Interval,
            Self::Number(_) => ControlKind::Number,
        }
    }

    /// Coerces a committed edit back to canonical form. Every field clamps
    /// to its own hints first, then the pairwise pass runs on that snapshot.
    pub fn sanitize(&self, value: &ControlValue) -> Result<ControlValue, Error> {
        match (self, value) {
            (Self::Interval(settings), ControlValue::Interval(value)) => {
                let keyed = IntervalControl.format(value);
                let keyed = InternalInterval {
                    min: settings.min.sanitize(keyed.min),
                    max: settings.max.sanitize(keyed.max),
                };

                Ok(ControlValue::Interval(IntervalControl.sanitize(&keyed, settings)))
            },

            (Self::Number(settings), ControlValue::Number(value)) => {
                Ok(ControlValue::Number(NumberControl.sanitize(value, settings)))
            },

            _ => Err(Error::KindMismatch {
                control: self.kind(),
                value: value.kind(),
            }),
        }
    }

    /// The declared seed value, reassembled from the per-field settings.
    pub fn initial_value(&self) -> ControlValue {
        match self {
            Self::Interval(settings) => {
                ControlValue::Interval([settings.min.initial_value, settings.max.initial_value])
            },

            Self::Number(settings) => ControlValue::Number(settings.initial_value),
        }
    }
}
