use serde::Deserialize;
use serde_json::Value;

use knurl_core::util::precision::{decimal_places, to_precision};

use super::{control::{ControlPlugin, Normalized}, schema};

/// Global hard limits shared by every numeric field of a control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const UNBOUNDED: Self = Self {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };

    pub fn new(min: f64, max: f64) -> Self {
        assert!(min <= max);

        Self {
            min,
            max,
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Per-field numeric metadata, derived once at registration and read-only
/// afterwards. `min` and `max` are the field's own clamping hints; `step`
/// and `pad` drive keyboard increments and display width in the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumberSettings {
    pub initial_value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub pad: usize,
}

impl NumberSettings {
    pub fn normalize(value: f64, bounds: &Bounds, step: Option<f64>) -> Self {
        let step = step.unwrap_or_else(|| infer_step(value, bounds));
        let pad = usize::clamp(decimal_places(step), 0, 2);

        Self {
            initial_value: value,
            min: bounds.min,
            max: bounds.max,
            step,
            pad,
        }
    }

    pub fn sanitize(&self, value: f64) -> f64 {
        f64::clamp(value, self.min, self.max)
    }
}

/// Derives settings for sibling fields, each seeded from its own value but
/// sharing one bounds declaration, then unifies display padding so the
/// fields line up.
pub fn normalize_keyed<const N: usize>(fields: [(f64, &Bounds); N]) -> [NumberSettings; N] {
    let mut settings = fields.map(|(value, bounds)| NumberSettings::normalize(value, bounds, None));

    let pad = settings.iter().map(|field| field.pad).max().unwrap_or(0);
    for field in settings.iter_mut() {
        field.pad = pad;
    }

    settings
}

// A hundredth of the bounds span, rounded to one significant digit. With a
// half-open or unbounded declaration the seed value stands in for the
// missing endpoint.
fn infer_step(value: f64, bounds: &Bounds) -> f64 {
    let span = if bounds.min.is_finite() && bounds.max.is_finite() {
        bounds.max - bounds.min
    } else if bounds.min.is_finite() {
        f64::abs(value - bounds.min)
    } else if bounds.max.is_finite() {
        f64::abs(bounds.max - value)
    } else {
        f64::max(f64::abs(value), 1.0)
    };

    let step = to_precision(span / 100.0, 1);
    if step == 0.0 {
        0.01
    } else {
        step
    }
}

fn unbounded_min() -> f64 {
    f64::NEG_INFINITY
}

fn unbounded_max() -> f64 {
    f64::INFINITY
}

/// Declaration of a single bounded scalar control.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct NumberDeclaration {
    pub value: f64,
    #[serde(default = "unbounded_min")]
    pub min: f64,
    #[serde(default = "unbounded_max")]
    pub max: f64,
    #[serde(default)]
    pub step: Option<f64>,
}

pub struct NumberControl;

impl ControlPlugin for NumberControl {
    type Value = f64;
    type Internal = f64;
    type Settings = NumberSettings;
    type Declaration = NumberDeclaration;

    fn validate(&self, value: &Value, settings: &Value) -> bool {
        schema::is_number(value)
            && settings.is_object()
            && ["min", "max", "step"].iter()
                .all(|field| settings.get(field).map_or(true, schema::is_number))
    }

    fn format(&self, value: &f64) -> f64 {
        *value
    }

    fn sanitize(&self, value: &f64, settings: &NumberSettings) -> f64 {
        settings.sanitize(*value)
    }

    fn normalize(&self, declaration: NumberDeclaration) -> Normalized<f64, NumberSettings> {
        let bounds = Bounds::new(declaration.min, declaration.max);

        Normalized {
            value: declaration.value,
            settings: NumberSettings::normalize(declaration.value, &bounds, declaration.step),
        }
    }
}
