use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build from a top-left corner and a size (screen-space convention)
    pub fn from_top_left(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Check rectangle overlap; touching edges do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Play area definition: screen extents plus the top/bottom wall band
#[derive(Debug, Clone, Copy)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    pub wall_thickness: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32, wall_thickness: f32) -> Self {
        Self {
            width,
            height,
            wall_thickness,
        }
    }

    pub fn from_config(config: &crate::Config) -> Self {
        Self::new(
            config.screen_width,
            config.screen_height,
            config.wall_thickness,
        )
    }

    /// Screen center, where the ball serves from
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Vertical band paddles and the ball may occupy: [min_y, max_y]
    pub fn play_bounds_y(&self) -> (f32, f32) {
        (self.wall_thickness, self.height - self.wall_thickness)
    }

    /// Colliders for the top and bottom walls
    pub fn walls(&self) -> [Aabb; 2] {
        [
            Aabb::new(Vec2::ZERO, Vec2::new(self.width, self.wall_thickness)),
            Aabb::new(
                Vec2::new(0.0, self.height - self.wall_thickness),
                Vec2::new(self.width, self.height),
            ),
        ]
    }
}
