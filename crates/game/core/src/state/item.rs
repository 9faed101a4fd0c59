use crate::config::ItemSpec;

/// Read-only bonus data the player can wield. Items are never consumed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryItem {
    pub name: String,
    /// Added to the wielder's attack power.
    pub stat_boost: f32,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, stat_boost: f32) -> Self {
        Self {
            name: name.into(),
            stat_boost,
        }
    }

    pub fn from_spec(spec: &ItemSpec) -> Self {
        Self::new(spec.name.clone(), spec.stat_boost)
    }
}
