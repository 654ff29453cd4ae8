use glam::Vec2;
use rand::Rng;

use crate::arena::Aabb;
use crate::{AiProfile, Arena, Config, Difficulty, GameRng};

/// Which side of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Error for unrecognized side identifiers at the string boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSideError(pub String);

impl std::fmt::Display for ParseSideError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "side must be 'left' or 'right', got '{}'", self.0)
    }
}

impl std::error::Error for ParseSideError {}

impl std::str::FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            other => Err(ParseSideError(other.to_string())),
        }
    }
}

/// Rigid-body state shared by every simulated entity
///
/// Positions are top-left corners in pixel space, y down.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub angular_vel: f32, // Radians per second
    pub mass: f32,        // Must be positive; used as integration divisor
    pub size: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2, mass: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            angular_vel: 0.0,
            mass,
            size,
        }
    }

    /// Newtonian impulse: velocity changes by force / mass * dt
    pub fn apply_force(&mut self, force: Vec2, dt: f32) {
        self.vel += force / self.mass * dt;
    }

    /// Euler position update; never triggers collision logic
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_top_left(self.pos, self.size)
    }
}

/// Ball component - carries the speed/spin state that rides on its `Body`
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub base_speed: f32, // Serve speed; only `reset` restores `speed` to this
    pub speed: f32,      // Current speed, compounds with boosts during a rally
    pub rotation: f32,   // Visual spin angle, wrapped into (-2π, 2π)
}

impl Ball {
    pub fn new(config: &Config) -> Self {
        Self {
            base_speed: config.ball_base_speed,
            speed: config.ball_base_speed,
            rotation: 0.0,
        }
    }

    /// Reset ball to the serve point with a fresh random direction
    ///
    /// Serve angle is uniform in [-30°, 30°], horizontal sign uniform in
    /// {-1, +1}. Spin, rotation, and speed escalation are all cleared.
    pub fn reset(&mut self, body: &mut Body, serve_point: Vec2, rng: &mut GameRng) {
        body.pos = serve_point - body.size * 0.5;
        body.angular_vel = 0.0;
        self.rotation = 0.0;
        self.speed = self.base_speed;

        let direction = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let angle: f32 = rng.0.gen_range(-30.0_f32.to_radians()..=30.0_f32.to_radians());

        body.vel = Vec2::new(
            direction * self.speed * angle.cos(),
            self.speed * angle.sin(),
        );
    }

    /// Scale velocity for progressive difficulty; `base_speed` is untouched
    pub fn increase_speed(&mut self, body: &mut Body, factor: f32) {
        body.vel *= factor;
        let magnitude = body.vel.length();
        self.speed = if magnitude > 0.0 {
            magnitude
        } else {
            self.base_speed
        };
    }

    /// Which edge the ball has fully crossed, if any
    pub fn off_screen_side(&self, body: &Body, screen_width: f32) -> Option<Side> {
        if body.pos.x + body.size.x < 0.0 {
            Some(Side::Left)
        } else if body.pos.x > screen_width {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Paddle component - acceleration-based control parameters and bounds
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub max_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    pub min_y: f32, // Top of the playable band
    pub max_y: f32, // Bottom of the playable band
    pub is_moving: bool,
}

impl Paddle {
    pub fn new(side: Side, config: &Config, arena: &Arena) -> Self {
        let (min_y, max_y) = arena.play_bounds_y();
        Self {
            side,
            max_speed: config.paddle_max_speed,
            acceleration: config.paddle_acceleration,
            deceleration: config.paddle_deceleration,
            min_y,
            max_y,
            is_moving: false,
        }
    }
}

/// Optional capability: a paddle surface that imparts spin on impact
#[derive(Debug, Clone, Copy)]
pub struct SpinSurface {
    pub friction: f32, // Spin transfer rate
}

impl SpinSurface {
    pub fn new(friction: f32) -> Self {
        Self { friction }
    }

    /// Spin imparted to a ball contacting the paddle at `contact_y`
    ///
    /// Contact offset contributes 70%, the paddle's own vertical motion 30%;
    /// a paddle moving into the ball imparts more spin than a stationary one.
    pub fn impact_spin(&self, body: &Body, paddle: &Paddle, contact_y: f32, max_spin: f32) -> f32 {
        let half_height = body.size.y / 2.0;
        let relative = ((contact_y - body.center().y) / half_height).clamp(-1.0, 1.0);
        let vel_norm = (body.vel.y / paddle.max_speed).clamp(-1.0, 1.0);

        (relative * 0.7 + vel_norm * 0.3) * max_spin * self.friction
    }
}

/// AI state for a bot-driven paddle
#[derive(Debug, Clone, Copy)]
pub struct BotBrain {
    pub difficulty: Difficulty,
    pub profile: AiProfile,
    pub reaction_timer: f32,
    pub target_y: f32, // Predicted intercept (center of paddle)
}

impl BotBrain {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            profile: difficulty.ai_profile(),
            reaction_timer: 0.0,
            target_y: 0.0,
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.profile = difficulty.ai_profile();
        self.reaction_timer = 0.0;
    }
}

/// Static wall collider; the owning `Body` never moves
///
/// `push_y` is the direction the wall shoves a penetrating ball: +1.0 for
/// the top wall, -1.0 for the bottom.
#[derive(Debug, Clone, Copy)]
pub struct Wall {
    pub push_y: f32,
}

impl Wall {
    pub fn new(push_y: f32) -> Self {
        Self { push_y }
    }

    /// Inner face of the wall, where a bounced ball comes to rest
    pub fn inner_face_y(&self, body: &Body) -> f32 {
        if self.push_y > 0.0 {
            body.aabb().max.y
        } else {
            body.aabb().min.y
        }
    }

    /// Walls are static: collision response belongs to the other object.
    ///
    /// The band is half-open past the screen edge, so a ball fast enough to
    /// cross the whole band in one step still registers the hit.
    pub fn collides(&self, body: &Body, other: &Aabb) -> bool {
        let own = body.aabb();
        if other.max.x <= own.min.x || other.min.x >= own.max.x {
            return false;
        }
        if self.push_y > 0.0 {
            other.min.y < own.max.y
        } else {
            other.max.y > own.min.y
        }
    }
}

/// Per-frame movement input for a paddle
#[derive(Debug, Clone, Copy)]
pub struct PaddleIntent {
    pub dir: Vec2,        // Analog direction, components in [-1, 1]
    pub speed_scale: f32, // Multiplier on max_speed (bots run capped)
}

impl Default for PaddleIntent {
    fn default() -> Self {
        Self {
            dir: Vec2::ZERO,
            speed_scale: 1.0,
        }
    }
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_side_from_str() {
        assert_eq!(Side::from_str("left"), Ok(Side::Left));
        assert_eq!(Side::from_str("right"), Ok(Side::Right));
        assert!(Side::from_str("middle").is_err(), "Unknown side must fail");
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
    }

    #[test]
    fn test_body_apply_force_scales_by_mass() {
        let mut light = Body::new(Vec2::ZERO, Vec2::splat(10.0), 1.0);
        let mut heavy = Body::new(Vec2::ZERO, Vec2::splat(10.0), 5.0);

        light.apply_force(Vec2::new(100.0, 0.0), 0.5);
        heavy.apply_force(Vec2::new(100.0, 0.0), 0.5);

        assert_eq!(light.vel.x, 50.0);
        assert_eq!(heavy.vel.x, 10.0, "Heavier body gains less velocity");
    }

    #[test]
    fn test_body_integrate() {
        let mut body = Body::new(Vec2::new(10.0, 20.0), Vec2::splat(10.0), 1.0);
        body.vel = Vec2::new(4.0, -2.0);
        body.integrate(0.5);
        assert_eq!(body.pos, Vec2::new(12.0, 19.0));
    }

    #[test]
    fn test_ball_reset_restores_base_speed() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut body = Body::new(Vec2::ZERO, Vec2::splat(config.ball_size), config.ball_mass);
        let mut ball = Ball::new(&config);

        // Escalate, then reset
        ball.increase_speed(&mut body, 2.0);
        body.angular_vel = 2.5;
        ball.rotation = 1.0;
        ball.reset(&mut body, Vec2::new(640.0, 360.0), &mut rng);

        assert!(
            (body.vel.length() - ball.base_speed).abs() < 1e-3,
            "Serve speed must equal base_speed, got {}",
            body.vel.length()
        );
        assert_eq!(ball.speed, ball.base_speed);
        assert_eq!(body.angular_vel, 0.0, "Reset clears spin");
        assert_eq!(ball.rotation, 0.0, "Reset clears rotation");
        assert_eq!(body.center(), Vec2::new(640.0, 360.0));
    }

    #[test]
    fn test_ball_reset_is_deterministic_for_seed() {
        let config = Config::new();
        let mut body_a = Body::new(Vec2::ZERO, Vec2::splat(config.ball_size), config.ball_mass);
        let mut body_b = Body::new(Vec2::ZERO, Vec2::splat(config.ball_size), config.ball_mass);
        let mut ball_a = Ball::new(&config);
        let mut ball_b = Ball::new(&config);

        let mut rng_a = GameRng::new(42);
        let mut rng_b = GameRng::new(42);
        ball_a.reset(&mut body_a, Vec2::new(640.0, 360.0), &mut rng_a);
        ball_b.reset(&mut body_b, Vec2::new(640.0, 360.0), &mut rng_b);

        assert_eq!(body_a.vel, body_b.vel, "Same seed, same serve");

        // Serve angle stays within ±30° of horizontal
        let angle = (body_a.vel.y / body_a.vel.length()).asin().abs();
        assert!(
            angle <= 30.0_f32.to_radians() + 1e-6,
            "Serve angle {} exceeds 30°",
            angle.to_degrees()
        );
    }

    #[test]
    fn test_increase_speed_leaves_base_speed() {
        let config = Config::new();
        let mut body = Body::new(Vec2::ZERO, Vec2::splat(config.ball_size), config.ball_mass);
        let mut ball = Ball::new(&config);
        body.vel = Vec2::new(300.0, 0.0);

        ball.increase_speed(&mut body, 1.25);

        assert!((ball.speed - 375.0).abs() < 1e-3);
        assert_eq!(ball.base_speed, config.ball_base_speed);
        assert_eq!(body.vel.x, 375.0);
    }

    #[test]
    fn test_increase_speed_zero_velocity_falls_back() {
        let config = Config::new();
        let mut body = Body::new(Vec2::ZERO, Vec2::splat(config.ball_size), config.ball_mass);
        let mut ball = Ball::new(&config);
        body.vel = Vec2::ZERO;

        ball.increase_speed(&mut body, 1.5);

        assert_eq!(ball.speed, ball.base_speed, "Zero magnitude falls back");
    }

    #[test]
    fn test_off_screen_side() {
        let config = Config::new();
        let ball = Ball::new(&config);
        let mut body = Body::new(Vec2::ZERO, Vec2::splat(config.ball_size), config.ball_mass);

        body.pos.x = -config.ball_size - 0.1;
        assert_eq!(ball.off_screen_side(&body, 1280.0), Some(Side::Left));

        body.pos.x = 1280.1;
        assert_eq!(ball.off_screen_side(&body, 1280.0), Some(Side::Right));

        body.pos.x = 640.0;
        assert_eq!(ball.off_screen_side(&body, 1280.0), None);

        // Partially out still counts as in play
        body.pos.x = -config.ball_size / 2.0;
        assert_eq!(ball.off_screen_side(&body, 1280.0), None);
    }

    #[test]
    fn test_impact_spin_bounded_and_velocity_weighted() {
        let config = Config::new();
        let arena = Arena::from_config(&config);
        let paddle = Paddle::new(Side::Left, &config, &arena);
        let surface = SpinSurface::new(config.paddle_friction);
        let mut body = Body::new(
            Vec2::new(20.0, 300.0),
            Vec2::new(config.paddle_width, config.paddle_height),
            config.paddle_mass,
        );

        // Stationary paddle, extreme edge contact: spin bounded by max * friction
        let edge_spin = surface.impact_spin(&body, &paddle, body.pos.y, config.max_ball_spin);
        assert!(edge_spin.abs() <= config.max_ball_spin * config.paddle_friction + 1e-6);
        assert!(edge_spin < 0.0, "Top-edge contact spins negative");

        // A paddle moving into the ball imparts more spin than a stationary one
        let still_spin = surface.impact_spin(&body, &paddle, body.center().y + 20.0, config.max_ball_spin);
        body.vel.y = paddle.max_speed;
        let moving_spin = surface.impact_spin(&body, &paddle, body.center().y + 20.0, config.max_ball_spin);
        assert!(
            moving_spin > still_spin,
            "Downward paddle motion adds positive spin: {} vs {}",
            moving_spin,
            still_spin
        );
    }

    #[test]
    fn test_bot_brain_set_difficulty() {
        let mut brain = BotBrain::new(Difficulty::Easy);
        brain.reaction_timer = 0.25;
        brain.set_difficulty(Difficulty::Hard);

        assert_eq!(brain.difficulty, Difficulty::Hard);
        assert_eq!(brain.profile.speed_fraction, 1.0);
        assert_eq!(brain.reaction_timer, 0.0, "Timer restarts on retune");
    }

    #[test]
    fn test_wall_collides() {
        let body = Body::new(Vec2::ZERO, Vec2::new(1280.0, 20.0), 1000.0);
        let wall = Wall::new(1.0);
        let inside = Aabb::from_top_left(Vec2::new(100.0, 10.0), Vec2::splat(15.0));
        let past = Aabb::from_top_left(Vec2::new(100.0, -60.0), Vec2::splat(15.0));
        let outside = Aabb::from_top_left(Vec2::new(100.0, 300.0), Vec2::splat(15.0));

        assert!(wall.collides(&body, &inside));
        assert!(
            wall.collides(&body, &past),
            "Band extends past the screen edge"
        );
        assert!(!wall.collides(&body, &outside));
        assert_eq!(wall.inner_face_y(&body), 20.0);
    }
}
