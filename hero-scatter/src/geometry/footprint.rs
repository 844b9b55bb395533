use crate::entities::{CanvasSpec, SpriteSize};
use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::primitives::{Point, Rect};

/// Dimensions of the axis-aligned bounding box of a scaled and rotated sprite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Footprint {
    pub width: f64,
    pub height: f64,
}

impl Footprint {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// The bounding box as a rectangle centered at `center`.
    pub fn rect_at(&self, center: Point) -> Rect {
        let (dx, dy) = (self.width / 2.0, self.height / 2.0);
        Rect {
            x_min: center.x() - dx,
            y_min: center.y() - dy,
            x_max: center.x() + dx,
            y_max: center.y() + dy,
        }
    }
}

/// Computes the axis-aligned bounding box of a sprite scaled by `scale` and rotated by
/// `rotation` degrees about its center.
///
/// The box of a rectangle is symmetric under rotations of 180°, so `rotation` is
/// normalized into `[0, 180)` first.
pub fn rotated_footprint(size: &SpriteSize, scale: f64, rotation: f64) -> Footprint {
    let w = size.width as f64 * scale;
    let h = size.height as f64 * scale;
    let theta = rotation.rem_euclid(180.0).to_radians();
    let (sin, cos) = (theta.sin().abs(), theta.cos().abs());
    Footprint {
        width: w * cos + h * sin,
        height: w * sin + h * cos,
    }
}

/// Area of the intersection of two bounding boxes divided by the area of the smaller one.
/// Returns a value in `[0, 1]`, 0 if the boxes are disjoint or only touch.
///
/// Note: the bounding boxes stand in for the actual rotated sprites.
/// This can report overlap between rotated sprites which do not touch, or
/// understate the overlap of sprites whose corners interlock.
pub fn overlap_ratio(a: Footprint, center_a: Point, b: Footprint, center_b: Point) -> f64 {
    let rect_a = a.rect_at(center_a);
    let rect_b = b.rect_at(center_b);
    match Rect::intersection(rect_a, rect_b) {
        None => 0.0,
        Some(intersection) => {
            let min_area = f64::min(rect_a.area(), rect_b.area());
            if min_area > 0.0 {
                f64::min(intersection.area() / min_area, 1.0)
            } else {
                0.0
            }
        }
    }
}

/// Whether the bounding box centered at `center` lies entirely within the canvas.
/// Boxes flush with the edge of the canvas (within floating point tolerance) fit.
pub fn fits_within_canvas(footprint: Footprint, center: Point, canvas: &CanvasSpec) -> bool {
    canvas.rect().almost_relation_to(footprint.rect_at(center)) == GeoRelation::Surrounding
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use test_case::test_case;

    const SQUARE: SpriteSize = SpriteSize {
        width: 100,
        height: 100,
    };
    const WIDE: SpriteSize = SpriteSize {
        width: 200,
        height: 100,
    };

    #[test]
    fn unrotated_footprint_is_scaled_size() {
        let fp = rotated_footprint(&WIDE, 0.5, 0.0);
        assert_eq!(fp, Footprint { width: 100.0, height: 50.0 });
    }

    #[test_case(90.0; "quarter turn")]
    #[test_case(-90.0; "negative quarter turn")]
    #[test_case(270.0; "three quarter turn")]
    fn quarter_turn_swaps_dimensions(rotation: f64) {
        let fp = rotated_footprint(&WIDE, 1.0, rotation);
        assert!(approx_eq!(f64, fp.width, 100.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, fp.height, 200.0, epsilon = 1e-9));
    }

    #[test]
    fn diagonal_square_grows_by_sqrt2() {
        let fp = rotated_footprint(&SQUARE, 1.0, 45.0);
        let expected = 100.0 * std::f64::consts::SQRT_2;
        assert!(approx_eq!(f64, fp.width, expected, epsilon = 1e-9));
        assert!(approx_eq!(f64, fp.height, expected, epsilon = 1e-9));
    }

    #[test_case(30.0, -150.0; "opposite")]
    #[test_case(-30.0, 30.0; "mirrored")]
    #[test_case(10.0, 190.0; "half turn")]
    fn symmetric_rotations_share_footprint(r1: f64, r2: f64) {
        let a = rotated_footprint(&WIDE, 1.3, r1);
        let b = rotated_footprint(&WIDE, 1.3, r2);
        assert!(approx_eq!(f64, a.width, b.width, epsilon = 1e-9));
        assert!(approx_eq!(f64, a.height, b.height, epsilon = 1e-9));
    }

    #[test_case(Point(200.0, 0.0), 0.0; "separate")]
    #[test_case(Point(100.0, 0.0), 0.0; "touching")]
    #[test_case(Point(90.0, 0.0), 0.1; "ten percent")]
    #[test_case(Point(40.0, 0.0), 0.6; "sixty percent")]
    #[test_case(Point(0.0, 0.0), 1.0; "identical")]
    fn overlap_of_equal_squares(center_b: Point, expected: f64) {
        let fp = rotated_footprint(&SQUARE, 1.0, 0.0);
        let ratio = overlap_ratio(fp, Point(0.0, 0.0), fp, center_b);
        assert!(approx_eq!(f64, ratio, expected, epsilon = 1e-12));
    }

    #[test]
    fn overlap_is_relative_to_smaller_box() {
        let big = Footprint { width: 100.0, height: 100.0 };
        let small = Footprint { width: 10.0, height: 10.0 };
        //small box entirely inside the big one
        assert_eq!(overlap_ratio(big, Point(50.0, 50.0), small, Point(50.0, 50.0)), 1.0);
        //half of the small box inside
        let ratio = overlap_ratio(big, Point(50.0, 50.0), small, Point(100.0, 50.0));
        assert!(approx_eq!(f64, ratio, 0.5, epsilon = 1e-12));
        //symmetric
        assert_eq!(
            ratio,
            overlap_ratio(small, Point(100.0, 50.0), big, Point(50.0, 50.0))
        );
    }

    #[test]
    fn containment_in_canvas() {
        let canvas = CanvasSpec {
            width: 1440,
            height: 720,
        };
        let fp = Footprint { width: 200.0, height: 200.0 };
        assert!(fits_within_canvas(fp, Point(720.0, 360.0), &canvas));
        //flush with the top left corner
        assert!(fits_within_canvas(fp, Point(100.0, 100.0), &canvas));
        //flush with the bottom right corner
        assert!(fits_within_canvas(fp, Point(1340.0, 620.0), &canvas));
        assert!(!fits_within_canvas(fp, Point(99.0, 360.0), &canvas));
        assert!(!fits_within_canvas(fp, Point(720.0, 621.0), &canvas));
        //outside altogether
        assert!(!fits_within_canvas(fp, Point(-500.0, -500.0), &canvas));

        let too_tall = Footprint { width: 100.0, height: 800.0 };
        assert!(!fits_within_canvas(too_tall, canvas.center(), &canvas));
    }
}
