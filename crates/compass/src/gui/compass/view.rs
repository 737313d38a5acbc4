use super::{
    ACTIVE_DOT_RADIUS, CONNECTOR_ALPHA, CONNECTOR_WIDTH, DASH_PATTERN, DASHED_ARC_WIDTH,
    DOT_RADIUS, GLOW_ALPHA, GLOW_RADIUS_FACTOR, HUB_RADIUS, LABEL_FONT_SIZE, MIDDLE_ARC_WIDTH,
    NEEDLE_HALF_WIDTH, NEEDLE_LENGTH, NEEDLE_SHOULDER, OUTER_ARC_WIDTH, TRAIL_ALPHA,
};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use compass_core::geometry::{HorizontalAnchor, LabelAnchor, VerticalAnchor};
use compass_core::{ArcLayout, ItemMark, Navigator, Needle};
use palette::Srgba;
use std::f64::consts::PI;

fn set_color(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

struct MarkRenderer<'a> {
    mark: &'a ItemMark,
    anchor: LabelAnchor,
}

impl<'a> MarkRenderer<'a> {
    fn new(mark: &'a ItemMark, anchor: LabelAnchor) -> Self {
        Self { mark, anchor }
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        self.draw_connector(cr, colors)?;
        self.draw_label(cr, colors)?;
        self.draw_dot(cr, colors)
    }

    fn draw_connector(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let color = if self.mark.active {
            colors.glow
        } else {
            colors.arc
        };
        let (dot, label) = (self.mark.geometry.dot, self.mark.geometry.label);

        set_color(cr, Srgba::new(color.red, color.green, color.blue, CONNECTOR_ALPHA));
        cr.set_line_width(CONNECTOR_WIDTH);
        cr.move_to(dot.x, dot.y);
        cr.line_to(label.x, label.y);
        cr.stroke()
    }

    fn draw_label(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let text = &self.mark.label;
        set_color(
            cr,
            if self.mark.active {
                colors.label_active
            } else {
                colors.label
            },
        );
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
        cr.set_font_size(LABEL_FONT_SIZE);

        let ext = cr.text_extents(text)?;
        let anchor = self.mark.geometry.label;
        let x = match self.anchor.horizontal {
            HorizontalAnchor::Start => anchor.x,
            HorizontalAnchor::Middle => anchor.x - ext.width() / 2.0 - ext.x_bearing(),
        };
        // y_bearing is negative: distance from baseline up to the glyph tops
        let y = match self.anchor.vertical {
            VerticalAnchor::Middle => anchor.y - ext.height() / 2.0 - ext.y_bearing(),
            VerticalAnchor::Hanging => anchor.y - ext.y_bearing(),
        };

        cr.move_to(x, y);
        cr.show_text(text)
    }

    fn draw_dot(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let center = self.mark.geometry.dot;

        if self.mark.active {
            let glow = colors.glow;
            set_color(cr, Srgba::new(glow.red, glow.green, glow.blue, GLOW_ALPHA));
            cr.arc(
                center.x,
                center.y,
                ACTIVE_DOT_RADIUS * GLOW_RADIUS_FACTOR,
                0.0,
                2.0 * PI,
            );
            cr.fill()?;

            set_color(cr, glow);
            cr.arc(center.x, center.y, ACTIVE_DOT_RADIUS, 0.0, 2.0 * PI);
        } else {
            set_color(cr, colors.dot);
            cr.arc(center.x, center.y, DOT_RADIUS, 0.0, 2.0 * PI);
        }
        cr.fill()
    }
}

fn draw_arcs(cr: &Context, layout: &ArcLayout, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let (start, end) = layout.arc_span();
    let (pivot, radii) = (layout.pivot, layout.arc_radii);

    let strokes = [
        (radii.outer, OUTER_ARC_WIDTH, colors.arc, false),
        (radii.middle, MIDDLE_ARC_WIDTH, colors.arc_inner, false),
        (radii.dashed, DASHED_ARC_WIDTH, colors.arc_dashed, true),
    ];

    for (radius, width, color, dashed) in strokes {
        set_color(cr, color);
        cr.set_line_width(width);
        if dashed {
            cr.set_dash(&DASH_PATTERN, 0.0);
        }
        cr.new_path();
        cr.arc(pivot.x, pivot.y, radius, start, end);
        cr.stroke()?;
        cr.set_dash(&[], 0.0);
    }
    Ok(())
}

fn needle_path(cr: &Context) {
    cr.move_to(0.0, 0.0);
    cr.line_to(NEEDLE_SHOULDER, -NEEDLE_HALF_WIDTH);
    cr.line_to(NEEDLE_LENGTH, 0.0);
    cr.line_to(NEEDLE_SHOULDER, NEEDLE_HALF_WIDTH);
    cr.close_path();
}

fn draw_needle(cr: &Context, needle: &Needle, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let glow = colors.glow;
    cr.save()?;
    cr.translate(needle.pivot.x, needle.pivot.y);

    if let Some(trail) = needle.trail {
        cr.save()?;
        cr.rotate(trail);
        set_color(cr, Srgba::new(glow.red, glow.green, glow.blue, TRAIL_ALPHA));
        needle_path(cr);
        cr.fill()?;
        cr.restore()?;
    }

    cr.rotate(needle.rotation);
    set_color(cr, glow);
    needle_path(cr);
    cr.fill()?;

    cr.arc(0.0, 0.0, HUB_RADIUS, 0.0, 2.0 * PI);
    cr.fill()?;
    cr.restore()
}

/// Draws the whole compass for the navigator's current frame, letterboxed
/// into the widget the same way pointer input is normalised.
pub fn draw(cr: &Context, navigator: &Navigator, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let Some(viewport) = navigator.viewport() else {
        return Ok(());
    };
    let frame = navigator.frame();

    cr.save()?;
    cr.translate(viewport.offset.x, viewport.offset.y);
    cr.scale(viewport.scale, viewport.scale);
    cr.translate(-viewport.view_box.min_x, -viewport.view_box.min_y);

    draw_arcs(cr, &frame.layout, colors)?;
    for mark in &frame.marks {
        MarkRenderer::new(mark, frame.layout.label_anchor).draw(cr, colors)?;
    }
    draw_needle(cr, &frame.needle, colors)?;

    cr.restore()
}
