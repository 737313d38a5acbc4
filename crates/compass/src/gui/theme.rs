use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub arc: Srgba<f64>,
    pub arc_inner: Srgba<f64>,
    pub arc_dashed: Srgba<f64>,
    pub glow: Srgba<f64>,
    pub dot: Srgba<f64>,
    pub label: Srgba<f64>,
    pub label_active: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            arc: Self::lookup_color(
                context,
                "borders",
                Srgba::new(0.55, 0.6, 0.7, 0.8),
                Some(0.8),
            ),
            arc_inner: Self::lookup_color(
                context,
                "borders",
                Srgba::new(0.55, 0.6, 0.7, 0.4),
                Some(0.4),
            ),
            arc_dashed: Srgba::new(1.0, 1.0, 1.0, 0.08),
            glow: Self::lookup_color(
                context,
                "theme_selected_bg_color",
                Srgba::new(0.35, 0.75, 1.0, 1.0),
                None,
            ),
            dot: Self::lookup_color(
                context,
                "theme_unfocused_fg_color",
                Srgba::new(0.6, 0.6, 0.65, 0.9),
                Some(0.9),
            ),
            label: Self::lookup_color(
                context,
                "theme_unfocused_fg_color",
                Srgba::new(0.7, 0.7, 0.75, 1.0),
                None,
            ),
            label_active: Self::lookup_color(
                context,
                "theme_fg_color",
                Srgba::new(1.0, 1.0, 1.0, 1.0),
                None,
            ),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.compass-window {
    background-color: alpha(@theme_bg_color, 0.85);
}
.compass-drawing-area {
    background: none;
    background-color: transparent;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
