use crate::error::NavigatorError;
use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ItemId(String);

crate::impl_string_newtype!(ItemId);

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A point on the arc. `angle` is chosen by whoever lays out the compass and
/// is never derived from the item's position in the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigableItem {
    pub id: ItemId,
    pub label: String,
    pub angle: f64,
}

impl NavigableItem {
    pub fn new(id: impl Into<ItemId>, label: impl Into<String>, angle: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            angle,
        }
    }
}

/// Non-empty list of items with unique ids and finite angles.
#[derive(Debug, Clone, PartialEq, Deref)]
pub struct ItemList(Vec<NavigableItem>);

impl ItemList {
    pub fn new(items: Vec<NavigableItem>) -> Result<Self, NavigatorError> {
        if items.is_empty() {
            return Err(NavigatorError::EmptyItems);
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !item.angle.is_finite() {
                return Err(NavigatorError::NonFiniteAngle(item.id.clone()));
            }
            if !seen.insert(&item.id) {
                return Err(NavigatorError::DuplicateId(item.id.clone()));
            }
        }

        Ok(Self(items))
    }

    pub fn get(&self, id: &ItemId) -> Option<&NavigableItem> {
        self.0.iter().find(|item| &item.id == id)
    }

    pub fn position(&self, id: &ItemId) -> Option<usize> {
        self.0.iter().position(|item| &item.id == id)
    }

    pub fn first(&self) -> &NavigableItem {
        &self.0[0]
    }

    /// Item with the smallest angular distance to `angle`; ties go to the
    /// earlier item in the list.
    pub fn nearest(&self, angle: f64) -> &NavigableItem {
        self.0
            .iter()
            .min_by(|a, b| (a.angle - angle).abs().total_cmp(&(b.angle - angle).abs()))
            .unwrap_or_else(|| self.first())
    }
}
