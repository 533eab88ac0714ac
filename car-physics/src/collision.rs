use crate::aabb::AABB;
use glam::Vec3;

/// Answers whether a candidate body box would overlap static geometry.
///
/// The integrator only needs a yes/no answer, so implementations are free to
/// stop at the first overlapping obstacle.
pub trait CollisionOracle {
    fn intersects(&self, candidate: &AABB) -> bool;
}

impl CollisionOracle for [AABB] {
    fn intersects(&self, candidate: &AABB) -> bool {
        self.iter().any(|obstacle| candidate.intersects(obstacle))
    }
}

impl CollisionOracle for Vec<AABB> {
    fn intersects(&self, candidate: &AABB) -> bool {
        self.as_slice().intersects(candidate)
    }
}

/// Ordered collection of static obstacle boxes owned by the scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObstacleSet {
    obstacles: Vec<AABB>,
}

impl ObstacleSet {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
        }
    }

    /// One box of `dimensions` centered on each of `centers`, in order.
    pub fn from_boxes(centers: impl IntoIterator<Item = Vec3>, dimensions: Vec3) -> Self {
        Self {
            obstacles: centers
                .into_iter()
                .map(|center| AABB::from_center_dims(center, dimensions))
                .collect(),
        }
    }

    /// Appends an obstacle and returns its index.
    pub fn push(&mut self, obstacle: AABB) -> usize {
        self.obstacles.push(obstacle);
        self.obstacles.len() - 1
    }

    /// Removes the obstacle at `index`, shifting later ones down.
    pub fn remove(&mut self, index: usize) -> Option<AABB> {
        (index < self.obstacles.len()).then(|| self.obstacles.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&AABB> {
        self.obstacles.get(index)
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn as_slice(&self) -> &[AABB] {
        &self.obstacles
    }
}

impl CollisionOracle for ObstacleSet {
    fn intersects(&self, candidate: &AABB) -> bool {
        self.as_slice().intersects(candidate)
    }
}

impl FromIterator<AABB> for ObstacleSet {
    fn from_iter<T: IntoIterator<Item = AABB>>(iter: T) -> Self {
        Self {
            obstacles: iter.into_iter().collect(),
        }
    }
}
