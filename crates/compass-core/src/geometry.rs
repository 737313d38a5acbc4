use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// Semantic half-span of the decorative arcs, in degrees either side of zero.
pub const ARC_HALF_SPAN: f64 = 90.0;
pub const DOT_RADIUS: f64 = 72.0;
pub const LABEL_OFFSET: f64 = 22.0;
pub const OUTER_ARC_RADIUS: f64 = 80.0;
pub const MIDDLE_ARC_RADIUS: f64 = 68.0;
pub const DASHED_ARC_RADIUS: f64 = 90.0;
pub const DOMAIN_LIMIT: f64 = 70.0;
pub const LABEL_FONT_SIZE: f64 = 11.5;
/// Average glyph advance as a fraction of the font size, for sizing labels
/// without a font at hand.
const GLYPH_ASPECT: f64 = 0.55;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Shortest distance from this point to the segment `a`..`b`.
    pub fn distance_to_segment(&self, a: Point, b: Point) -> f64 {
        let (abx, aby) = (b.x - a.x, b.y - a.y);
        let len_sq = abx * abx + aby * aby;
        if len_sq <= f64::EPSILON {
            return self.distance(a);
        }
        let t = (((self.x - a.x) * abx + (self.y - a.y) * aby) / len_sq).clamp(0.0, 1.0);
        self.distance(Point::new(a.x + t * abx, a.y + t * aby))
    }
}

/// Axis-aligned box in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Zero inside the box.
    pub fn distance(&self, point: Point) -> f64 {
        let dx = (self.min.x - point.x).max(point.x - self.max.x).max(0.0);
        let dy = (self.min.y - point.y).max(point.y - self.max.y).max(0.0);
        dx.hypot(dy)
    }
}

/// Inclusive range of semantic angles, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleRange {
    pub min: f64,
    pub max: f64,
}

impl AngleRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn contains(&self, angle: f64) -> bool {
        (self.min..=self.max).contains(&angle)
    }

    pub fn clamp(&self, angle: f64) -> f64 {
        angle.clamp(self.min, self.max)
    }

    /// Moves `angle` onto the full turn centred on this range, so that an
    /// `atan2` result just past the seam still clamps to the nearer end.
    pub fn unwrap(&self, angle: f64) -> f64 {
        let center = self.center();
        center + ((angle - center + 180.0).rem_euclid(360.0) - 180.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweep {
    Clockwise,
    CounterClockwise,
}

impl Sweep {
    /// Screen space is y-down, so a positive screen angle turns clockwise.
    pub fn sign(&self) -> f64 {
        match self {
            Self::Clockwise => 1.0,
            Self::CounterClockwise => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAnchor {
    Start,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAnchor {
    Middle,
    Hanging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelAnchor {
    pub horizontal: HorizontalAnchor,
    pub vertical: VerticalAnchor,
}

/// The logical coordinate space the widget is drawn in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }
}

/// Uniform "meet" fit of a [`ViewBox`] into a widget box, centred on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub view_box: ViewBox,
    pub scale: f64,
    pub offset: Point,
}

impl Viewport {
    /// Returns `None` while the widget has no usable size yet.
    pub fn fit(width: f64, height: f64, view_box: ViewBox) -> Option<Self> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !(usable(width) && usable(height) && usable(view_box.width) && usable(view_box.height))
        {
            return None;
        }

        let scale = (width / view_box.width).min(height / view_box.height);
        let offset = Point::new(
            (width - view_box.width * scale) / 2.0,
            (height - view_box.height * scale) / 2.0,
        );

        Some(Self {
            view_box,
            scale,
            offset,
        })
    }

    pub fn to_logical(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.offset.x) / self.scale + self.view_box.min_x,
            (screen.y - self.offset.y) / self.scale + self.view_box.min_y,
        )
    }

    pub fn to_screen(&self, logical: Point) -> Point {
        Point::new(
            (logical.x - self.view_box.min_x) * self.scale + self.offset.x,
            (logical.y - self.view_box.min_y) * self.scale + self.offset.y,
        )
    }
}

/// Where an item's marker and label sit for a given layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemGeometry {
    pub dot: Point,
    pub label: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcRadii {
    pub outer: f64,
    pub middle: f64,
    pub dashed: f64,
}

/// Everything that distinguishes one orientation from another. All geometry
/// goes through the same transform, parameterised by this record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcLayout {
    pub pivot: Point,
    pub sweep: Sweep,
    /// Degrees added to the signed semantic angle to reach screen space.
    pub rotation: f64,
    pub domain: AngleRange,
    pub view_box: ViewBox,
    pub dot_radius: f64,
    pub label_offset: f64,
    pub label_anchor: LabelAnchor,
    pub arc_radii: ArcRadii,
}

impl ArcLayout {
    /// Screen-space angle in degrees for a semantic angle.
    pub fn screen_degrees(&self, angle: f64) -> f64 {
        self.sweep.sign() * angle + self.rotation
    }

    pub fn angle_to_point(&self, angle: f64, radius: f64) -> Point {
        let rad = self.screen_degrees(angle).to_radians();
        Point::new(
            self.pivot.x + radius * rad.cos(),
            self.pivot.y + radius * rad.sin(),
        )
    }

    /// Inverse of [`Self::angle_to_point`], unclamped. The pivot itself has no
    /// direction and yields `None`.
    pub fn point_to_angle(&self, point: Point) -> Option<f64> {
        if !point.is_finite() {
            return None;
        }
        let (dx, dy) = (point.x - self.pivot.x, point.y - self.pivot.y);
        if dx.hypot(dy) <= f64::EPSILON {
            return None;
        }
        let screen = dy.atan2(dx).to_degrees();
        // sign is +-1, so multiplying undoes it
        let semantic = (screen - self.rotation) * self.sweep.sign();
        Some(self.domain.unwrap(semantic))
    }

    pub fn item_geometry(&self, angle: f64) -> ItemGeometry {
        ItemGeometry {
            dot: self.angle_to_point(angle, self.dot_radius),
            label: self.angle_to_point(angle, self.dot_radius + self.label_offset),
        }
    }

    /// Estimated box of `text` drawn at the label anchor for `angle`, following
    /// the layout's anchoring rules.
    pub fn label_bounds(&self, angle: f64, text: &str) -> Rect {
        let anchor = self.angle_to_point(angle, self.dot_radius + self.label_offset);
        let width = text.chars().count() as f64 * LABEL_FONT_SIZE * GLYPH_ASPECT;
        let height = LABEL_FONT_SIZE;

        let left = match self.label_anchor.horizontal {
            HorizontalAnchor::Start => anchor.x,
            HorizontalAnchor::Middle => anchor.x - width / 2.0,
        };
        let top = match self.label_anchor.vertical {
            VerticalAnchor::Middle => anchor.y - height / 2.0,
            VerticalAnchor::Hanging => anchor.y,
        };

        Rect {
            min: Point::new(left, top),
            max: Point::new(left + width, top + height),
        }
    }

    /// Rotation of the needle, in radians, for cairo.
    pub fn needle_rotation(&self, angle: f64) -> f64 {
        self.screen_degrees(angle).to_radians()
    }

    /// Screen-space start and end (radians, ascending) of the decorative arcs.
    pub fn arc_span(&self) -> (f64, f64) {
        let a = self.screen_degrees(ARC_HALF_SPAN).to_radians();
        let b = self.screen_degrees(-ARC_HALF_SPAN).to_radians();
        (a.min(b), a.max(b))
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    SerializeDisplay,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum Orientation {
    /// Vertical arc opening to the right of a pivot on the left edge.
    #[default]
    #[strum(to_string = "primary", serialize = "PrimaryArc", serialize = "right")]
    PrimaryArc,
    /// Horizontal arc hanging below a pivot on the top edge.
    #[strum(to_string = "secondary", serialize = "SecondaryArc", serialize = "top")]
    SecondaryArc,
}

impl Orientation {
    pub fn layout(&self) -> ArcLayout {
        let arc_radii = ArcRadii {
            outer: OUTER_ARC_RADIUS,
            middle: MIDDLE_ARC_RADIUS,
            dashed: DASHED_ARC_RADIUS,
        };
        let domain = AngleRange::new(-DOMAIN_LIMIT, DOMAIN_LIMIT);

        match self {
            Self::PrimaryArc => ArcLayout {
                pivot: Point::new(0.0, 100.0),
                sweep: Sweep::CounterClockwise,
                rotation: 0.0,
                domain,
                view_box: ViewBox::new(0.0, 0.0, 200.0, 200.0),
                dot_radius: DOT_RADIUS,
                label_offset: LABEL_OFFSET,
                label_anchor: LabelAnchor {
                    horizontal: HorizontalAnchor::Start,
                    vertical: VerticalAnchor::Middle,
                },
                arc_radii,
            },
            Self::SecondaryArc => ArcLayout {
                pivot: Point::new(100.0, 0.0),
                sweep: Sweep::CounterClockwise,
                rotation: 90.0,
                domain,
                view_box: ViewBox::new(0.0, -10.0, 200.0, 110.0),
                dot_radius: DOT_RADIUS,
                label_offset: LABEL_OFFSET,
                label_anchor: LabelAnchor {
                    horizontal: HorizontalAnchor::Middle,
                    vertical: VerticalAnchor::Hanging,
                },
                arc_radii,
            },
        }
    }
}
