//! The universal `hit` entry point: picks the right test or resolver for a
//! pair of targets.

use tracing::debug;

use crate::config::HitOptions;
use crate::error::CollisionError;
use crate::shapes::{Body, Circle, Point, Rectangle, Shape};

use super::bounce::resolve_moving_circles_collision;
use super::detection::{circles_overlap, point_in_shape, rectangles_overlap};
use super::outcome::Collision;
use super::resolution::{resolve_circle_overlap, resolve_rectangle_overlap};

/// One side of a [`hit`] call.
#[derive(Debug)]
pub enum Target<'a> {
    Point(Point),
    Shape(&'a mut Shape),
    /// A collection owned by the caller, checked member by member.
    Group(&'a mut [Shape]),
}

impl Target<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Target::Point(_) => "point",
            Target::Shape(shape) => shape.kind(),
            Target::Group(_) => "group",
        }
    }
}

/// Tests two targets against each other, optionally separating them.
///
/// See [`hit_with`] for the routing rules.
pub fn hit<'a>(
    a: Target<'a>,
    b: Target<'a>,
    options: &HitOptions,
) -> Result<Option<Collision>, CollisionError> {
    hit_with(a, b, options, |_, _| {})
}

/// Tests two targets against each other and reports every collision to `extra`.
///
/// * Point and shape (either order): point test, never mutates.
/// * Circle and circle: overlap test unless `react`. When reacting, two
///   moving circles bounce off each other; otherwise the first circle is
///   pushed out of the second, bouncing according to
///   [`HitOptions::circle_bounce_mode`].
/// * Rectangle and rectangle: overlap test unless `react`, otherwise the
///   first rectangle is pushed out and the hit side is returned.
/// * Shape and group (either order): the shape is checked against each
///   member from last to first, `extra` receives each collision together
///   with the member, and the result of the final check (the first member)
///   is returned.
///
/// For a single pair `extra` is called once, with no member, if they collided.
/// Any other combination is [`CollisionError::IncompatibleShapes`].
pub fn hit_with<'a, F>(
    a: Target<'a>,
    b: Target<'a>,
    options: &HitOptions,
    mut extra: F,
) -> Result<Option<Collision>, CollisionError>
where
    F: FnMut(Collision, Option<&Shape>),
{
    match (a, b) {
        (Target::Shape(shape), Target::Group(group)) | (Target::Group(group), Target::Shape(shape)) => {
            debug!(kind = shape.kind(), members = group.len(), "shape vs group");
            let mut collision = None;
            for member in group.iter_mut().rev() {
                collision = shape_vs_shape(shape, member, options)?;
                if let Some(found) = collision {
                    extra(found, Some(&*member));
                }
            }
            Ok(collision)
        }
        (a, b) => {
            let collision = single_pair(a, b, options)?;
            if let Some(found) = collision {
                extra(found, None);
            }
            Ok(collision)
        }
    }
}

fn single_pair<'a>(
    a: Target<'a>,
    b: Target<'a>,
    options: &HitOptions,
) -> Result<Option<Collision>, CollisionError> {
    match (a, b) {
        (Target::Shape(a), Target::Shape(b)) => shape_vs_shape(a, b, options),
        (Target::Point(point), Target::Shape(shape)) | (Target::Shape(shape), Target::Point(point)) => {
            Ok(point_in_shape(point, shape).then_some(Collision::Hit))
        }
        (a, b) => Err(CollisionError::IncompatibleShapes {
            a: a.kind(),
            b: b.kind(),
        }),
    }
}

fn shape_vs_shape(
    a: &mut Shape,
    b: &mut Shape,
    options: &HitOptions,
) -> Result<Option<Collision>, CollisionError> {
    match (a, b) {
        (Shape::Circle(a), Shape::Circle(b)) => {
            Ok(circle_vs_circle(a, b, options)?.then_some(Collision::Hit))
        }
        (Shape::Rectangle(a), Shape::Rectangle(b)) => Ok(rectangle_vs_rectangle(a, b, options)),
        (a, b) => Err(CollisionError::IncompatibleShapes {
            a: a.kind(),
            b: b.kind(),
        }),
    }
}

fn circle_vs_circle(a: &mut Circle, b: &mut Circle, options: &HitOptions) -> Result<bool, CollisionError> {
    if !options.react {
        return Ok(circles_overlap(a, b));
    }
    // Moving circles always bounce apart, whatever the bounce flag says.
    if a.is_moving() && b.is_moving() {
        debug!("routing to moving circles collision");
        return resolve_moving_circles_collision(a, b);
    }
    let bounce = options.circle_bounce_mode.resolver_bounce(options.bounce);
    debug!(bounce, "routing to static circle resolution");
    Ok(resolve_circle_overlap(a, b, bounce))
}

fn rectangle_vs_rectangle(a: &mut Rectangle, b: &Rectangle, options: &HitOptions) -> Option<Collision> {
    if !options.react {
        return rectangles_overlap(a, b).then_some(Collision::Hit);
    }
    resolve_rectangle_overlap(a, b, options.bounce).map(Collision::Side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::outcome::Side;
    use crate::config::CircleBounceMode;
    use crate::math::vec2::Vec2;
    const EPSILON: f64 = 1e-9;

    fn circle(x: f64, y: f64, diameter: f64) -> Circle {
        Circle::new(Vec2::new(x, y), diameter).unwrap()
    }

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rectangle {
        Rectangle::new(Vec2::new(x, y), w, h).unwrap()
    }

    fn velocity_of(shape: &Shape) -> Vec2 {
        shape.velocity().unwrap()
    }

    #[test]
    fn test_point_vs_shape_either_order() {
        let mut box_shape: Shape = rect(0.0, 0.0, 10.0, 10.0).into();
        let options = HitOptions::default();

        let inside = hit(Target::Point(Vec2::new(5.0, 5.0)), Target::Shape(&mut box_shape), &options);
        assert_eq!(inside, Ok(Some(Collision::Hit)));

        let corner = hit(Target::Shape(&mut box_shape), Target::Point(Vec2::new(0.0, 0.0)), &options);
        assert_eq!(corner, Ok(None));
    }

    #[test]
    fn test_circles_without_react_only_probe() {
        let mut a: Shape = circle(0.0, 0.0, 10.0).with_velocity(Vec2::new(1.0, 0.0)).into();
        let mut b: Shape = circle(6.0, 0.0, 10.0).into();
        let result = hit(Target::Shape(&mut a), Target::Shape(&mut b), &HitOptions::default());
        assert_eq!(result, Ok(Some(Collision::Hit)));
        assert_eq!(a.position(), Vec2::ZERO);
        assert_eq!(velocity_of(&a), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_circle_vs_still_circle_bounces_directly() {
        let mut a: Shape = circle(0.0, 0.0, 10.0).with_velocity(Vec2::new(3.0, 0.0)).into();
        let mut b: Shape = circle(6.0, 0.0, 10.0).into();
        let result = hit(Target::Shape(&mut a), Target::Shape(&mut b), &HitOptions::reacting(true));
        assert_eq!(result, Ok(Some(Collision::Hit)));
        assert_eq!(a.position(), Vec2::new(-4.0, 0.0));
        assert!((velocity_of(&a).x - -3.0).abs() < EPSILON);
    }

    #[test]
    fn test_circle_vs_still_circle_slides_without_bounce() {
        let mut a: Shape = circle(0.0, 0.0, 10.0).with_velocity(Vec2::new(3.0, 0.0)).into();
        let mut b: Shape = circle(6.0, 0.0, 10.0).into();
        hit(Target::Shape(&mut a), Target::Shape(&mut b), &HitOptions::reacting(false)).unwrap();
        assert!((velocity_of(&a).x - 2.7).abs() < EPSILON);
    }

    #[test]
    fn test_inverted_bounce_mode_swaps_the_flag() {
        let options = HitOptions {
            circle_bounce_mode: CircleBounceMode::Inverted,
            ..HitOptions::reacting(true)
        };
        let mut a: Shape = circle(0.0, 0.0, 10.0).with_velocity(Vec2::new(3.0, 0.0)).into();
        let mut b: Shape = circle(6.0, 0.0, 10.0).into();
        hit(Target::Shape(&mut a), Target::Shape(&mut b), &options).unwrap();
        // bounce = true slides under the inverted mapping
        assert!((velocity_of(&a).x - 2.7).abs() < EPSILON);
    }

    #[test]
    fn test_two_moving_circles_exchange_momentum() {
        let mut a: Shape = circle(0.0, 0.0, 10.0).with_velocity(Vec2::new(2.0, 0.0)).into();
        let mut b: Shape = circle(8.0, 0.0, 10.0).with_velocity(Vec2::new(-3.0, 0.0)).into();
        // The bounce flag is ignored for two moving circles
        let result = hit(Target::Shape(&mut a), Target::Shape(&mut b), &HitOptions::reacting(false));
        assert_eq!(result, Ok(Some(Collision::Hit)));
        assert!((velocity_of(&a).x - -3.0).abs() < EPSILON);
        assert!((velocity_of(&b).x - 2.0).abs() < EPSILON);
        assert_eq!(b.position(), Vec2::new(9.0, 0.0));
    }

    #[test]
    fn test_rectangles_react_returns_side() {
        let mut a: Shape = rect(0.0, 0.0, 10.0, 10.0).with_velocity(Vec2::new(4.0, 1.0)).into();
        let mut b: Shape = rect(8.0, 2.0, 10.0, 10.0).into();

        let probe = hit(Target::Shape(&mut a), Target::Shape(&mut b), &HitOptions::default());
        assert_eq!(probe, Ok(Some(Collision::Hit)));

        let result = hit(Target::Shape(&mut a), Target::Shape(&mut b), &HitOptions::reacting(true));
        assert_eq!(result, Ok(Some(Collision::Side(Side::Right))));
        assert_eq!(a.position(), Vec2::new(-2.0, 0.0));
        assert_eq!(velocity_of(&a), Vec2::new(-4.0, 1.0));
    }

    #[test]
    fn test_rectangles_apart_return_none() {
        let mut a: Shape = rect(0.0, 0.0, 10.0, 10.0).into();
        let mut b: Shape = rect(50.0, 0.0, 10.0, 10.0).into();
        let result = hit(Target::Shape(&mut a), Target::Shape(&mut b), &HitOptions::reacting(false));
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_mixed_shapes_are_incompatible() {
        let mut a: Shape = circle(0.0, 0.0, 10.0).into();
        let mut b: Shape = rect(0.0, 0.0, 10.0, 10.0).into();
        let result = hit(Target::Shape(&mut a), Target::Shape(&mut b), &HitOptions::default());
        assert_eq!(
            result,
            Err(CollisionError::IncompatibleShapes { a: "circle", b: "rectangle" })
        );
    }

    #[test]
    fn test_points_and_groups_alone_are_incompatible() {
        let options = HitOptions::default();
        let result = hit(Target::Point(Vec2::ZERO), Target::Point(Vec2::ZERO), &options);
        assert!(matches!(result, Err(CollisionError::IncompatibleShapes { .. })));

        let mut group: Vec<Shape> = vec![rect(0.0, 0.0, 10.0, 10.0).into()];
        let result = hit(Target::Point(Vec2::new(1.0, 1.0)), Target::Group(&mut group), &options);
        assert_eq!(
            result,
            Err(CollisionError::IncompatibleShapes { a: "point", b: "group" })
        );
    }

    #[test]
    fn test_extra_called_once_for_single_pair() {
        let mut a: Shape = rect(0.0, 0.0, 10.0, 10.0).into();
        let mut b: Shape = rect(5.0, 0.0, 10.0, 10.0).into();
        let mut calls = Vec::new();
        hit_with(Target::Shape(&mut a), Target::Shape(&mut b), &HitOptions::default(), |c, member| {
            calls.push((c, member.is_some()));
        })
        .unwrap();
        assert_eq!(calls, vec![(Collision::Hit, false)]);
    }

    #[test]
    fn test_group_checked_in_reverse_order() {
        let mut player: Shape = rect(0.0, 0.0, 10.0, 10.0).into();
        let mut walls: Vec<Shape> = vec![
            rect(5.0, 0.0, 10.0, 10.0).into(),
            rect(100.0, 100.0, 10.0, 10.0).into(),
            rect(0.0, 5.0, 10.0, 10.0).into(),
        ];

        let mut hits = Vec::new();
        let result = hit_with(
            Target::Group(&mut walls),
            Target::Shape(&mut player),
            &HitOptions::default(),
            |c, member| hits.push((c, member.map(Body::position))),
        );

        assert_eq!(result, Ok(Some(Collision::Hit)));
        assert_eq!(
            hits,
            vec![
                (Collision::Hit, Some(Vec2::new(0.0, 5.0))),
                (Collision::Hit, Some(Vec2::new(5.0, 0.0))),
            ]
        );
    }

    #[test]
    fn test_group_result_is_first_member() {
        let mut ball: Shape = circle(0.0, 0.0, 10.0).into();
        let mut others: Vec<Shape> = vec![
            circle(100.0, 0.0, 10.0).into(),
            circle(4.0, 0.0, 10.0).into(),
        ];
        let result = hit(Target::Shape(&mut ball), Target::Group(&mut others), &HitOptions::default());
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_group_reaction_moves_shape_out_of_every_member() {
        let mut ball: Shape = circle(0.0, 0.0, 10.0).with_velocity(Vec2::new(1.0, 0.0)).into();
        let mut others: Vec<Shape> = vec![circle(6.0, 0.0, 10.0).into()];
        let result = hit(Target::Shape(&mut ball), Target::Group(&mut others), &HitOptions::reacting(false));
        assert_eq!(result, Ok(Some(Collision::Hit)));
        assert_eq!(ball.position(), Vec2::new(-4.0, 0.0));
        assert_eq!(others[0].position(), Vec2::new(6.0, 0.0));
    }

    #[test]
    fn test_group_with_mixed_member_fails() {
        let mut ball: Shape = circle(0.0, 0.0, 10.0).into();
        let mut others: Vec<Shape> = vec![rect(0.0, 0.0, 10.0, 10.0).into()];
        let result = hit(Target::Shape(&mut ball), Target::Group(&mut others), &HitOptions::default());
        assert!(matches!(result, Err(CollisionError::IncompatibleShapes { .. })));
    }
}
