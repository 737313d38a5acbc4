use crate::gui::compass::{PANEL_HEIGHT, PANEL_WIDTH};
use compass_core::Orientation;
use gtk::prelude::*;
use gtk4 as gtk;
use gtk4_layer_shell::{Edge, Layer, LayerShell};

pub fn init_layer_shell(window: &gtk::ApplicationWindow, orientation: Orientation) {
    window.init_layer_shell();
    window.set_layer(Layer::Top);
    window.set_namespace(Some("compass"));
    window.set_keyboard_mode(gtk4_layer_shell::KeyboardMode::OnDemand);
    anchor(window, orientation);
}

/// Docks the panel on the edge its arc grows from: the left edge for the
/// primary arc, the top edge for the secondary one.
pub fn anchor(window: &gtk::ApplicationWindow, orientation: Orientation) {
    let (edges, (width, height)) = match orientation {
        Orientation::PrimaryArc => ([Edge::Left, Edge::Top, Edge::Bottom], (PANEL_WIDTH, -1)),
        Orientation::SecondaryArc => ([Edge::Top, Edge::Left, Edge::Right], (-1, PANEL_HEIGHT)),
    };

    for edge in [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom] {
        window.set_anchor(edge, edges.contains(&edge));
    }
    window.set_size_request(width, height);
    window.auto_exclusive_zone_enable();
}
