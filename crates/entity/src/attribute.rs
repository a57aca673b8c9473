//! Per-entity bounded numeric attributes.
//!
//! Attributes are mutated only through setters that re-clamp the current
//! value into `[min, max]`. Bound updates themselves are checked: an
//! inverted range is an error, never silently accepted.

use strum::{EnumIter, IntoEnumIterator};

/// Identifiers of the standard living-entity attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum AttributeId {
    Health,
    Absorption,
    MovementSpeed,
    KnockbackResistance,
    FollowRange,
    AttackDamage,
}

impl AttributeId {
    pub const COUNT: usize = 6;

    fn index(self) -> usize {
        match self {
            AttributeId::Health => 0,
            AttributeId::Absorption => 1,
            AttributeId::MovementSpeed => 2,
            AttributeId::KnockbackResistance => 3,
            AttributeId::FollowRange => 4,
            AttributeId::AttackDamage => 5,
        }
    }

    /// Default `(min, max, default)` range for this attribute.
    fn default_range(self) -> (f32, f32, f32) {
        match self {
            AttributeId::Health => (0.0, 20.0, 20.0),
            AttributeId::Absorption => (0.0, f32::MAX, 0.0),
            AttributeId::MovementSpeed => (0.0, f32::MAX, 0.1),
            AttributeId::KnockbackResistance => (0.0, 1.0, 0.0),
            AttributeId::FollowRange => (0.0, 2048.0, 16.0),
            AttributeId::AttackDamage => (0.0, f32::MAX, 1.0),
        }
    }
}

/// Errors from attribute bound updates.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AttributeError {
    #[error("minimum {min} exceeds maximum {max} for {id:?}")]
    InvertedRange {
        id: AttributeId,
        min: f32,
        max: f32,
    },
}

/// One bounded numeric attribute.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Attribute {
    id: AttributeId,
    min: f32,
    max: f32,
    default: f32,
    current: f32,
}

impl Attribute {
    fn standard(id: AttributeId) -> Self {
        let (min, max, default) = id.default_range();
        Self {
            id,
            min,
            max,
            default,
            current: default,
        }
    }

    pub fn id(&self) -> AttributeId {
        self.id
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn min_value(&self) -> f32 {
        self.min
    }

    pub fn max_value(&self) -> f32 {
        self.max
    }

    pub fn default_value(&self) -> f32 {
        self.default
    }

    /// Sets the current value, re-clamped into `[min, max]`.
    pub fn set_value(&mut self, value: f32) {
        self.current = value.clamp(self.min, self.max);
    }

    /// Raises or lowers the maximum bound, re-clamping the current value.
    pub fn set_max_value(&mut self, max: f32) -> Result<(), AttributeError> {
        if max < self.min {
            return Err(AttributeError::InvertedRange {
                id: self.id,
                min: self.min,
                max,
            });
        }
        self.max = max;
        self.current = self.current.clamp(self.min, self.max);
        Ok(())
    }

    /// Lowers or raises the minimum bound, re-clamping the current value.
    pub fn set_min_value(&mut self, min: f32) -> Result<(), AttributeError> {
        if min > self.max {
            return Err(AttributeError::InvertedRange {
                id: self.id,
                min,
                max: self.max,
            });
        }
        self.min = min;
        self.current = self.current.clamp(self.min, self.max);
        Ok(())
    }

    /// Resets the current value to the attribute default.
    pub fn reset(&mut self) {
        self.current = self.default.clamp(self.min, self.max);
    }
}

/// The full attribute set of one entity, pre-populated with the standard
/// attributes at their default ranges.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AttributeMap {
    attributes: Vec<Attribute>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self {
            attributes: AttributeId::iter().map(Attribute::standard).collect(),
        }
    }

    pub fn get(&self, id: AttributeId) -> &Attribute {
        &self.attributes[id.index()]
    }

    pub fn get_mut(&mut self, id: AttributeId) -> &mut Attribute {
        &mut self.attributes[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }
}

impl Default for AttributeMap {
    fn default() -> Self {
        Self::new()
    }
}
