use glam::Vec3;

/// An Axis-Aligned Bounding Box.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    pub fn new(a: Vec3, b: Vec3) -> Self {
        AABB {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_center_dims(center: Vec3, dimensions: Vec3) -> Self {
        let half_dims = dimensions * 0.5;
        AABB {
            min: center - half_dims,
            max: center + half_dims,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn translate(&self, translation: Vec3) -> Self {
        AABB {
            min: self.min + translation,
            max: self.max + translation,
        }
    }

    /// Slab test with inclusive bounds: boxes sharing a face or an edge intersect.
    #[inline]
    pub fn intersects(&self, other: &AABB) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
            && self.min.z <= other.max.z
            && other.min.z <= self.max.z
    }
}
