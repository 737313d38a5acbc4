use crate::item::ItemId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum NavigatorError {
    #[error("a compass needs at least one item")]
    EmptyItems,
    #[error("item id '{0}' appears more than once")]
    DuplicateId(ItemId),
    #[error("item '{0}' has a non-finite angle")]
    NonFiniteAngle(ItemId),
}
