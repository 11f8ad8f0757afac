use std::collections::HashMap;

use serde_json::Value;

use crate::Error;

use super::{
    kind::{ControlDeclaration, ControlKind, ControlSettings, ControlValue},
    ControlId, Controls,
};

/// Settings and last canonical value of one registered control.
pub struct ControlState {
    settings: ControlSettings,
    value: ControlValue,
}

impl ControlState {
    pub fn value(&self) -> &ControlValue {
        &self.value
    }

    pub fn settings(&self) -> &ControlSettings {
        &self.settings
    }
}

/// Host-side record of registered controls, addressed by id.
pub struct ControlMap {
    ids: Vec<ControlId>,
    map: HashMap<ControlId, ControlState>,
}

impl ControlMap {
    pub fn new() -> Self {
        Self {
            ids: Default::default(),
            map: Default::default(),
        }
    }

    /// Registers a control, normalizing its declaration exactly once. The
    /// stored value is canonical from the start.
    pub fn register(&mut self, id: impl Into<ControlId>, declaration: ControlDeclaration) {
        let id = id.into();
        assert!(!self.map.contains_key(&id), "Duplicate control id {id}");

        let (value, settings) = declaration.normalize();
        let value = settings.sanitize(&value)
            .expect("freshly normalized value matches its settings kind");
        log::trace!("registered control {id} at {value:?}");

        self.ids.push(id);
        self.map.insert(id, ControlState { settings, value });
    }

    /// Accepts a raw, still-untyped declaration, refusing it when the shape
    /// check fails or its bounds are out of order.
    pub fn register_raw(&mut self, id: impl Into<ControlId>, declaration: &Value) -> Result<(), Error> {
        let id = id.into();
        let kind = declaration.get("type")
            .and_then(Value::as_str)
            .and_then(ControlKind::from_name)
            .ok_or(Error::InvalidDeclaration)?;

        let value = declaration.get("value").unwrap_or(&Value::Null);
        if !kind.validate(value, declaration) {
            log::error!("rejected malformed {kind} declaration for control {id}");
            return Err(Error::InvalidDeclaration);
        }

        let declaration: ControlDeclaration = serde_json::from_value(declaration.clone())?;
        if !declaration.bounds_are_ordered() {
            log::error!("rejected {kind} declaration for control {id}: bounds out of order");
            return Err(Error::InvalidDeclaration);
        }

        self.register(id, declaration);
        Ok(())
    }

    /// Commits an edit: the value is sanitized against the control's
    /// settings and the canonical result is stored and returned.
    pub fn set(&mut self, id: impl Into<ControlId>, value: ControlValue) -> Result<&ControlValue, Error> {
        let id = id.into();
        let state = self.map.get_mut(&id).ok_or(Error::UnknownControlId(id))?;

        let value = state.settings.sanitize(&value)?;
        log::trace!("control {id} set to {value:?}");
        state.value = value;

        Ok(&state.value)
    }

    /// Puts a control back to its declared initial value.
    pub fn reset(&mut self, id: impl Into<ControlId>) -> Result<&ControlValue, Error> {
        let id = id.into();
        let initial = self.map.get(&id)
            .map(|state| state.settings().initial_value())
            .ok_or(Error::UnknownControlId(id))?;

        self.set(id, initial)
    }

    /// Drops a control and its settings.
    pub fn remove(&mut self, id: impl Into<ControlId>) -> Option<ControlState> {
        let id = id.into();
        self.ids.retain(|&existing| existing != id);
        self.map.remove(&id)
    }
}

impl Controls for ControlMap {
    fn ids(&self) -> &[ControlId] {
        &self.ids
    }

    fn get(&self, id: impl Into<ControlId>) -> Option<&ControlState> {
        self.map.get(&id.into())
    }
}
