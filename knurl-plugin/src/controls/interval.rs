use serde::Deserialize;
use serde_json::Value;

use super::{control::{ControlPlugin, Normalized}, number::{self, Bounds, NumberSettings}, schema};

/// External representation of an interval value, `[min, max]`.
pub type Interval = [f64; 2];

/// The same pair keyed by field name, the shape per-field settings are
/// looked up with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InternalInterval {
    pub min: f64,
    pub max: f64,
}

/// Declaration of a bounded interval control.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct IntervalDeclaration {
    pub value: Interval,
    pub min: f64,
    pub max: f64,
}

/// Persistent per-control record: the global bounds plus one settings
/// record per endpoint field, both seeded from the same bounds pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntervalSettings {
    pub bounds: Bounds,
    pub min: NumberSettings,
    pub max: NumberSettings,
}

pub struct IntervalControl;

impl ControlPlugin for IntervalControl {
    type Value = Interval;
    type Internal = InternalInterval;
    type Settings = IntervalSettings;
    type Declaration = IntervalDeclaration;

    fn validate(&self, value: &Value, settings: &Value) -> bool {
        schema::is_number_pair(value) && schema::is_bounds_object(settings)
    }

    fn format(&self, value: &Interval) -> InternalInterval {
        InternalInterval {
            min: value[0],
            max: value[1],
        }
    }

    fn sanitize(&self, value: &InternalInterval, settings: &IntervalSettings) -> Interval {
        let Bounds { min: lower, max: upper } = settings.bounds;

        // Both endpoints clamp against the incoming pair, never against each
        // other's clamped results; a second pass returns the same value.
        [
            f64::clamp(value.min, lower, f64::max(lower, value.max)),
            f64::clamp(value.max, f64::min(upper, value.min), upper),
        ]
    }

    fn normalize(&self, declaration: IntervalDeclaration) -> Normalized<Interval, IntervalSettings> {
        let bounds = Bounds::new(declaration.min, declaration.max);
        let seed = self.format(&declaration.value);
        let [min, max] = number::normalize_keyed([(seed.min, &bounds), (seed.max, &bounds)]);

        Normalized {
            value: declaration.value,
            settings: IntervalSettings {
                bounds,
                min,
                max,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_ulps_eq;
    use proptest::prelude::*;
    use serde_json::json;

    use crate::controls::control::ControlPlugin;

    use super::{InternalInterval, IntervalControl, IntervalDeclaration, IntervalSettings};

    fn settings(min: f64, max: f64) -> IntervalSettings {
        let declaration = IntervalDeclaration {
            value: [min, max],
            min,
            max,
        };

        IntervalControl.normalize(declaration).settings
    }

    #[test]
    fn swapped_endpoints_cross_over() {
        let value = InternalInterval { min: 7.0, max: 3.0 };
        assert_eq!(IntervalControl.sanitize(&value, &settings(0.0, 10.0)), [3.0, 7.0]);
    }

    #[test]
    fn overshooting_endpoints_stop_at_the_bounds() {
        let value = InternalInterval { min: -20.0, max: 20.0 };
        assert_eq!(IntervalControl.sanitize(&value, &settings(-10.0, 10.0)), [-10.0, 10.0]);
    }

    #[test]
    fn valid_pairs_are_fixed_points() {
        let value = InternalInterval { min: 4.0, max: 6.0 };
        assert_eq!(IntervalControl.sanitize(&value, &settings(0.0, 10.0)), [4.0, 6.0]);
    }

    #[test]
    fn format_keys_the_pair_by_field() {
        assert_eq!(
            IntervalControl.format(&[1.0, 2.0]),
            InternalInterval { min: 1.0, max: 2.0 },
        );
    }

    #[test]
    fn normalize_returns_the_declared_value_unchanged() {
        let normalized = IntervalControl.normalize(IntervalDeclaration {
            value: [7.0, 3.0],
            min: 0.0,
            max: 10.0,
        });

        assert_eq!(normalized.value, [7.0, 3.0]);
    }

    #[test]
    fn normalize_seeds_both_fields_from_the_same_bounds() {
        let normalized = IntervalControl.normalize(IntervalDeclaration {
            value: [2.0, 8.0],
            min: 0.0,
            max: 10.0,
        });

        let settings = normalized.settings;
        assert_eq!(settings.bounds.min, 0.0);
        assert_eq!(settings.bounds.max, 10.0);
        assert_eq!(settings.min.min, 0.0);
        assert_eq!(settings.min.max, 10.0);
        assert_eq!(settings.max.min, 0.0);
        assert_eq!(settings.max.max, 10.0);
        assert_ulps_eq!(settings.min.step, 0.1);
        assert_eq!(settings.min.initial_value, 2.0);
        assert_eq!(settings.max.initial_value, 8.0);
    }

    #[test]
    fn validates_declaration_shape() {
        let control = IntervalControl;
        let bounds = json!({"min": 0, "max": 10});

        assert!(control.validate(&json!([1, 2]), &bounds));
        assert!(!control.validate(&json!([1]), &bounds));
        assert!(!control.validate(&json!([1, 2, 3]), &bounds));
        assert!(!control.validate(&json!([1, "2"]), &bounds));
        assert!(!control.validate(&json!(null), &bounds));
        assert!(!control.validate(&json!([1, 2]), &json!({"min": 0})));
        assert!(!control.validate(&json!([1, 2]), &json!({"max": 10})));
        assert!(!control.validate(&json!([1, 2]), &json!(null)));
    }

    proptest! {
        #[test]
        fn sanitized_values_stay_inside_the_bounds(
            (lower, upper) in bounds(),
            min in value(),
            max in value(),
        ) {
            prop_assume!(min <= upper && max >= lower);

            let [new_min, new_max] =
                IntervalControl.sanitize(&InternalInterval { min, max }, &settings(lower, upper));

            prop_assert!(lower <= new_min);
            prop_assert!(new_min <= new_max);
            prop_assert!(new_max <= upper);
        }

        #[test]
        fn sanitize_is_idempotent(
            (lower, upper) in bounds(),
            min in value(),
            max in value(),
        ) {
            prop_assume!(min <= upper && max >= lower);

            let settings = settings(lower, upper);
            let first = IntervalControl.sanitize(&InternalInterval { min, max }, &settings);
            let second = IntervalControl.sanitize(&IntervalControl.format(&first), &settings);

            prop_assert_eq!(first, second);
        }

        #[test]
        fn normalize_round_trips_the_declared_value(
            (lower, upper) in bounds(),
            a in value(),
            b in value(),
        ) {
            let normalized = IntervalControl.normalize(IntervalDeclaration {
                value: [a, b],
                min: lower,
                max: upper,
            });

            prop_assert_eq!(
                IntervalControl.format(&normalized.value),
                InternalInterval { min: a, max: b },
            );
        }
    }

    fn bounds() -> impl Strategy<Value = (f64, f64)> {
        (value(), value()).prop_map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
    }

    fn value() -> impl Strategy<Value = f64> {
        -1.0e9..1.0e9
    }
}
