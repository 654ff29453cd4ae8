/// Game tuning parameters for spin Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;
    pub const WALL_THICKNESS: f32 = 20.0;

    // Ball
    pub const BALL_SIZE: f32 = 15.0;
    pub const BALL_BASE_SPEED: f32 = 300.0;
    pub const BALL_MASS: f32 = 1.0;
    pub const BALL_MAX_BOUNCE_ANGLE_DEG: f32 = 75.0;

    // Magnus effect (spin-induced curve)
    pub const MAGNUS_STRENGTH: f32 = 0.5;
    pub const MAGNUS_MIN_SPIN: f32 = 0.1; // Below this, spin is treated as noise

    // Friction (exponential decay factors, applied as factor^dt)
    pub const AIR_FRICTION: f32 = 0.99;
    pub const ANGULAR_FRICTION: f32 = 0.8;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MASS: f32 = 5.0;
    pub const PADDLE_ACCELERATION: f32 = 800.0;
    pub const PADDLE_DECELERATION: f32 = 600.0;
    pub const PADDLE_MAX_SPEED: f32 = 600.0;
    pub const PADDLE_FRICTION: f32 = 0.15; // Spin transfer rate on impact
    pub const PADDLE_MARGIN: f32 = 20.0;
    pub const PADDLE_STOP_THRESHOLD: f32 = 5.0; // Snap velocity to zero below this

    // Walls (effectively immovable)
    pub const WALL_MASS: f32 = 1000.0;

    // Spin
    pub const MAX_BALL_SPIN: f32 = 3.0;
    pub const SPIN_TRANSFER_EFFICIENCY: f32 = 1.0;
    pub const WALL_SPIN_REDUCTION: f32 = 0.7;

    // AI
    pub const AI_DEADZONE: f32 = 5.0; // Pixels; prevents jitter around the target
    pub const AI_INTENSITY_WINDOW: f32 = 50.0; // Distance over which intent ramps to full
    pub const AI_ERROR_RANGE: f32 = 100.0; // Max prediction error in pixels at accuracy 0

    // Score
    pub const WIN_SCORE: u8 = 11;

    // Physics stepping
    pub const FIXED_DT: f32 = 1.0 / 120.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}

/// Bot difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// AI behavior parameters derived from a difficulty tier
#[derive(Debug, Clone, Copy)]
pub struct AiProfile {
    pub reaction_time: f32,       // Delay before reacting to new ball info, seconds
    pub prediction_accuracy: f32, // 0..=1, where 1 is a perfect intercept prediction
    pub speed_fraction: f32,      // Cap on paddle max speed while AI-driven
    pub center_bias: f32,         // Pull toward screen center when the ball recedes
}

impl Difficulty {
    /// Ball speed multiplier applied per reported wall or paddle hit
    pub fn speed_boost(self) -> f32 {
        match self {
            Difficulty::Easy => 1.10,
            Difficulty::Medium => 1.25,
            Difficulty::Hard => 1.50,
        }
    }

    pub fn ai_profile(self) -> AiProfile {
        match self {
            Difficulty::Easy => AiProfile {
                reaction_time: 0.3,
                prediction_accuracy: 0.6,
                speed_fraction: 0.7,
                center_bias: 0.3,
            },
            Difficulty::Medium => AiProfile {
                reaction_time: 0.2,
                prediction_accuracy: 0.8,
                speed_fraction: 0.85,
                center_bias: 0.2,
            },
            Difficulty::Hard => AiProfile {
                reaction_time: 0.1,
                prediction_accuracy: 0.95,
                speed_fraction: 1.0,
                center_bias: 0.1,
            },
        }
    }
}

/// Game configuration
///
/// Passed by reference into constructors and systems; never mutated at runtime.
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub wall_thickness: f32,
    pub ball_size: f32,
    pub ball_base_speed: f32,
    pub ball_mass: f32,
    pub max_bounce_angle: f32, // Radians
    pub magnus_strength: f32,
    pub magnus_min_spin: f32,
    pub air_friction: f32,
    pub angular_friction: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_mass: f32,
    pub paddle_acceleration: f32,
    pub paddle_deceleration: f32,
    pub paddle_max_speed: f32,
    pub paddle_friction: f32,
    pub paddle_margin: f32,
    pub max_ball_spin: f32,
    pub spin_transfer_efficiency: f32,
    pub wall_spin_reduction: f32,
    pub win_score: u8,
    pub speed_boost: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            wall_thickness: Params::WALL_THICKNESS,
            ball_size: Params::BALL_SIZE,
            ball_base_speed: Params::BALL_BASE_SPEED,
            ball_mass: Params::BALL_MASS,
            max_bounce_angle: Params::BALL_MAX_BOUNCE_ANGLE_DEG.to_radians(),
            magnus_strength: Params::MAGNUS_STRENGTH,
            magnus_min_spin: Params::MAGNUS_MIN_SPIN,
            air_friction: Params::AIR_FRICTION,
            angular_friction: Params::ANGULAR_FRICTION,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_mass: Params::PADDLE_MASS,
            paddle_acceleration: Params::PADDLE_ACCELERATION,
            paddle_deceleration: Params::PADDLE_DECELERATION,
            paddle_max_speed: Params::PADDLE_MAX_SPEED,
            paddle_friction: Params::PADDLE_FRICTION,
            paddle_margin: Params::PADDLE_MARGIN,
            max_ball_spin: Params::MAX_BALL_SPIN,
            spin_transfer_efficiency: Params::SPIN_TRANSFER_EFFICIENCY,
            wall_spin_reduction: Params::WALL_SPIN_REDUCTION,
            win_score: Params::WIN_SCORE,
            speed_boost: Difficulty::Medium.speed_boost(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config with the speed escalation factor for the given difficulty
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            speed_boost: difficulty.speed_boost(),
            ..Self::default()
        }
    }

    /// Paddle X position (left edge) for a side
    pub fn paddle_x(&self, side: crate::Side) -> f32 {
        match side {
            crate::Side::Left => self.paddle_margin,
            crate::Side::Right => self.screen_width - self.paddle_margin - self.paddle_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 20.0, "Left paddle X position");
        assert_eq!(
            config.paddle_x(Side::Right),
            1280.0 - 20.0 - 20.0,
            "Right paddle X position"
        );
    }

    #[test]
    fn test_difficulty_speed_boost() {
        assert_eq!(Difficulty::Easy.speed_boost(), 1.10);
        assert_eq!(Difficulty::Medium.speed_boost(), 1.25);
        assert_eq!(Difficulty::Hard.speed_boost(), 1.50);
    }

    #[test]
    fn test_ai_profiles_scale_with_difficulty() {
        let easy = Difficulty::Easy.ai_profile();
        let medium = Difficulty::Medium.ai_profile();
        let hard = Difficulty::Hard.ai_profile();

        assert!(easy.reaction_time > medium.reaction_time);
        assert!(medium.reaction_time > hard.reaction_time);
        assert!(easy.prediction_accuracy < medium.prediction_accuracy);
        assert!(medium.prediction_accuracy < hard.prediction_accuracy);
        assert!(easy.speed_fraction < hard.speed_fraction);
        assert!(easy.center_bias > hard.center_bias);
    }

    #[test]
    fn test_max_bounce_angle_is_75_degrees() {
        let config = Config::new();
        assert!((config.max_bounce_angle - 75.0_f32.to_radians()).abs() < 1e-6);
    }
}
