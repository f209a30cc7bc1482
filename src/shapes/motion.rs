//! Small helpers for moving bodies and measuring between them.

use crate::config::DEGENERATE_EPSILON;

use super::Body;

/// Followers closer than this to the leader's center stop easing.
const EASE_THRESHOLD: f64 = 1.0;

/// Distance in pixels between the centers of two bodies.
pub fn distance(a: &impl Body, b: &impl Body) -> f64 {
    a.center().distance(b.center())
}

/// Angle in radians from `a`'s center to `b`'s center.
pub fn angle(a: &impl Body, b: &impl Body) -> f64 {
    (b.center() - a.center()).angle()
}

/// Adds the body's velocity to its position. Bodies without a velocity stay put.
pub fn advance(body: &mut impl Body) {
    if let Some(velocity) = body.velocity() {
        *body.position_mut() += velocity;
    }
}

/// Advances every body in the slice by its own velocity.
pub fn advance_all<B: Body>(bodies: &mut [B]) {
    for body in bodies.iter_mut() {
        advance(body);
    }
}

/// Moves `follower` a fraction `speed` of the way toward `leader`'s center.
///
/// Nothing happens once the centers are less than a pixel apart.
pub fn ease(follower: &mut impl Body, leader: &impl Body, speed: f64) {
    let v = leader.center() - follower.center();
    if v.magnitude() >= EASE_THRESHOLD {
        *follower.position_mut() += v * speed;
    }
}

/// Moves `follower` a fixed `speed` pixels toward `leader`'s center.
///
/// The follower stops once it is closer than one step away, and coincident
/// centers leave it where it is.
pub fn follow(follower: &mut impl Body, leader: &impl Body, speed: f64) {
    let v = leader.center() - follower.center();
    if v.magnitude() < speed {
        return;
    }
    if let Some(direction) = v.try_normalize(DEGENERATE_EPSILON) {
        *follower.position_mut() += direction * speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    use crate::shapes::{Circle, Rectangle, Shape};
    use std::f64::consts::PI;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_distance_between_centers() {
        let a = Rectangle::new(Vec2::new(0.0, 0.0), 2.0, 2.0).unwrap();
        let b = Circle::new(Vec2::new(3.0, 4.0), 2.0).unwrap();
        assert!((distance(&a, &b) - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_angle_between_centers() {
        let a = Rectangle::new(Vec2::new(0.0, 0.0), 2.0, 2.0).unwrap();
        let below = Rectangle::new(Vec2::new(0.0, 10.0), 2.0, 2.0).unwrap();
        assert!((angle(&a, &below) - PI / 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_advance() {
        let mut c = Circle::new(Vec2::new(1.0, 1.0), 2.0)
            .unwrap()
            .with_velocity(Vec2::new(2.0, -1.0));
        advance(&mut c);
        assert_eq!(c.position, Vec2::new(3.0, 0.0));

        let mut still = Rectangle::new(Vec2::new(1.0, 1.0), 2.0, 2.0).unwrap();
        advance(&mut still);
        assert_eq!(still.position, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_advance_all() {
        let mut shapes: Vec<Shape> = vec![
            Circle::new(Vec2::ZERO, 2.0).unwrap().with_velocity(Vec2::new(1.0, 2.0)).into(),
            Rectangle::new(Vec2::new(5.0, 5.0), 2.0, 2.0).unwrap().into(),
        ];
        advance_all(&mut shapes);
        assert_eq!(shapes[0].position(), Vec2::new(1.0, 2.0));
        assert_eq!(shapes[1].position(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_ease_moves_a_fraction_of_the_gap() {
        let mut follower = Rectangle::new(Vec2::new(0.0, 0.0), 2.0, 2.0).unwrap();
        let leader = Rectangle::new(Vec2::new(10.0, 20.0), 2.0, 2.0).unwrap();
        ease(&mut follower, &leader, 0.5);
        assert!((follower.position.x - 5.0).abs() < EPSILON);
        assert!((follower.position.y - 10.0).abs() < EPSILON);
    }

    #[test]
    fn test_ease_stops_within_a_pixel() {
        let mut follower = Circle::new(Vec2::new(0.0, 0.0), 4.0).unwrap();
        let leader = Circle::new(Vec2::new(0.5, 0.5), 4.0).unwrap();
        ease(&mut follower, &leader, 0.3);
        assert_eq!(follower.position, Vec2::ZERO);
    }

    #[test]
    fn test_follow_moves_at_fixed_speed() {
        let mut follower = Circle::new(Vec2::new(0.0, 0.0), 2.0).unwrap();
        let leader = Circle::new(Vec2::new(30.0, 40.0), 2.0).unwrap();
        follow(&mut follower, &leader, 5.0);
        assert!((follower.position.x - 3.0).abs() < EPSILON);
        assert!((follower.position.y - 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_follow_stops_within_one_step() {
        let mut follower = Circle::new(Vec2::new(0.0, 0.0), 2.0).unwrap();
        let leader = Circle::new(Vec2::new(3.0, 0.0), 2.0).unwrap();
        follow(&mut follower, &leader, 5.0);
        assert_eq!(follower.position, Vec2::ZERO);
    }

    #[test]
    fn test_follow_with_coincident_centers_stays_put() {
        let mut follower = Circle::new(Vec2::new(4.0, 4.0), 2.0).unwrap();
        let leader = Circle::new(Vec2::new(4.0, 4.0), 2.0).unwrap();
        follow(&mut follower, &leader, 0.0);
        assert_eq!(follower.position, Vec2::new(4.0, 4.0));
        assert!(follower.position.is_finite());
    }
}
