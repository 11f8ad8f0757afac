use serde_json::Value;

/// A normalized declaration: the declared value handed back unchanged,
/// paired with the settings record derived from it.
pub struct Normalized<V, S> {
    pub value: V,
    pub settings: S,
}

/// The contract every control kind implements.
///
/// `validate` gates a raw declaration before acceptance, `normalize` runs
/// once at registration, `sanitize` runs on every committed edit, and
/// `format` projects an external value into its field-keyed shape. All four
/// operations are pure.
pub trait ControlPlugin {
    type Value;
    type Internal;
    type Settings;
    type Declaration;

    fn validate(&self, value: &Value, settings: &Value) -> bool;
    fn format(&self, value: &Self::Value) -> Self::Internal;
    fn sanitize(&self, value: &Self::Internal, settings: &Self::Settings) -> Self::Value;
    fn normalize(&self, declaration: Self::Declaration) -> Normalized<Self::Value, Self::Settings>;
}
