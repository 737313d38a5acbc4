use crate::config::Config;
use compass_core::{ItemId, Orientation};

#[derive(Debug, Clone)]
pub enum AppEvent {
    Show,
    Hide,
    ActiveSection(ItemId),
    Orientation(Orientation),
    /// A config revision that already parsed and validated.
    ConfigReload(Config),
}
