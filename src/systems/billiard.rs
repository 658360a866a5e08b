use nalgebra::{DVector, Vector2};

use crate::collision::ContactModel;
use crate::core::PairId;
use crate::state::StateVector;
use crate::systems::{ContactMaterial, OdeSystem};

/// The side of the rectangular box a wall contact refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WallSide {
    Left,
    Right,
    Bottom,
    Top,
}

/// A contact entry in the billiard's pair table
#[derive(Debug, Clone, Copy)]
enum Contact {
    /// A ball against one side of the box
    Wall { ball: usize, side: WallSide },

    /// Two balls against each other
    Balls(usize, usize),
}

/// N disks moving inside an axis-aligned rectangular box in 2-D, with
/// optional gravity.
///
/// The state layout is `[x_0, y_0 .. x_{n-1}, y_{n-1}, vx_0, vy_0 ..]`.
/// The pair table lists the four wall contacts of each ball in index
/// order (left, right, bottom, top), then ball pairs `(i, j)` with
/// `i < j`.
pub struct Billiard {
    masses: Vec<f64>,
    radii: Vec<f64>,
    materials: Vec<ContactMaterial>,
    min: Vector2<f64>,
    max: Vector2<f64>,
    gravity: Vector2<f64>,
    contacts: Vec<Contact>,
}

impl Billiard {
    /// Creates a new billiard with the given balls and box corners
    pub fn new(masses: Vec<f64>, radii: Vec<f64>, min: Vector2<f64>, max: Vector2<f64>) -> Self {
        assert_eq!(masses.len(), radii.len());

        let n = masses.len();
        let materials = vec![ContactMaterial::default(); n];

        let mut contacts = Vec::new();
        for ball in 0..n {
            for side in [WallSide::Left, WallSide::Right, WallSide::Bottom, WallSide::Top] {
                contacts.push(Contact::Wall { ball, side });
            }
        }
        for i in 0..n {
            for j in (i + 1)..n {
                contacts.push(Contact::Balls(i, j));
            }
        }

        Self {
            masses,
            radii,
            materials,
            min,
            max,
            gravity: Vector2::zeros(),
            contacts,
        }
    }

    /// Sets the contact material of every ball
    pub fn with_materials(mut self, materials: Vec<ContactMaterial>) -> Self {
        assert_eq!(materials.len(), self.masses.len());
        self.materials = materials;
        self
    }

    /// Sets a constant gravity vector
    pub fn with_gravity(mut self, gravity: Vector2<f64>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Returns the number of balls
    pub fn ball_count(&self) -> usize {
        self.masses.len()
    }

    /// Builds the initial state from per-ball positions and velocities
    pub fn initial_state(
        &self,
        positions: &[Vector2<f64>],
        velocities: &[Vector2<f64>],
    ) -> StateVector {
        let n = self.masses.len();
        assert_eq!(positions.len(), n);
        assert_eq!(velocities.len(), n);

        let mut components = DVector::zeros(4 * n);
        for i in 0..n {
            components[2 * i] = positions[i].x;
            components[2 * i + 1] = positions[i].y;
            components[2 * n + 2 * i] = velocities[i].x;
            components[2 * n + 2 * i + 1] = velocities[i].y;
        }
        StateVector::new(components, 0.0)
    }

    fn contact(&self, pair: PairId) -> Contact {
        self.contacts[pair.0]
    }

    fn position(&self, state: &StateVector, i: usize) -> Vector2<f64> {
        Vector2::new(state.component(2 * i), state.component(2 * i + 1))
    }

    fn velocity(&self, state: &StateVector, i: usize) -> Vector2<f64> {
        let offset = 2 * self.masses.len();
        Vector2::new(
            state.component(offset + 2 * i),
            state.component(offset + 2 * i + 1),
        )
    }

    /// Unit normal from ball j toward ball i
    fn ball_normal(&self, state: &StateVector, i: usize, j: usize) -> Vector2<f64> {
        let delta = self.position(state, i) - self.position(state, j);
        let distance = delta.norm();
        if distance > 0.0 {
            delta / distance
        } else {
            Vector2::x()
        }
    }
}

impl OdeSystem for Billiard {
    fn dimension(&self) -> usize {
        4 * self.masses.len()
    }

    fn derivative(&self, state: &StateVector) -> DVector<f64> {
        let n = self.masses.len();
        let mut derivative = DVector::zeros(4 * n);

        for i in 0..n {
            let velocity = self.velocity(state, i);
            derivative[2 * i] = velocity.x;
            derivative[2 * i + 1] = velocity.y;
            derivative[2 * n + 2 * i] = self.gravity.x;
            derivative[2 * n + 2 * i + 1] = self.gravity.y;
        }
        derivative
    }
}

impl ContactModel for Billiard {
    fn pair_count(&self) -> usize {
        self.contacts.len()
    }

    fn gap(&self, pair: PairId, state: &StateVector) -> f64 {
        match self.contact(pair) {
            Contact::Wall { ball, side } => {
                let position = self.position(state, ball);
                let radius = self.radii[ball];
                match side {
                    WallSide::Left => position.x - radius - self.min.x,
                    WallSide::Right => self.max.x - position.x - radius,
                    WallSide::Bottom => position.y - radius - self.min.y,
                    WallSide::Top => self.max.y - position.y - radius,
                }
            }
            Contact::Balls(i, j) => {
                let distance = (self.position(state, i) - self.position(state, j)).norm();
                distance - (self.radii[i] + self.radii[j])
            }
        }
    }

    fn normal_velocity(&self, pair: PairId, state: &StateVector) -> f64 {
        match self.contact(pair) {
            Contact::Wall { ball, side } => {
                let velocity = self.velocity(state, ball);
                match side {
                    WallSide::Left => velocity.x,
                    WallSide::Right => -velocity.x,
                    WallSide::Bottom => velocity.y,
                    WallSide::Top => -velocity.y,
                }
            }
            Contact::Balls(i, j) => {
                let normal = self.ball_normal(state, i, j);
                normal.dot(&(self.velocity(state, i) - self.velocity(state, j)))
            }
        }
    }

    fn effective_mass(&self, pair: PairId, _state: &StateVector) -> f64 {
        match self.contact(pair) {
            Contact::Wall { ball, .. } => self.masses[ball],
            Contact::Balls(i, j) => {
                let (m_i, m_j) = (self.masses[i], self.masses[j]);
                m_i * m_j / (m_i + m_j)
            }
        }
    }

    fn apply_normal_impulse(
        &self,
        pair: PairId,
        state: &StateVector,
        magnitude: f64,
    ) -> StateVector {
        let offset = 2 * self.masses.len();
        let mut components = state.components().clone();

        match self.contact(pair) {
            Contact::Wall { ball, side } => {
                let inv_mass = 1.0 / self.masses[ball];
                match side {
                    WallSide::Left => components[offset + 2 * ball] += magnitude * inv_mass,
                    WallSide::Right => components[offset + 2 * ball] -= magnitude * inv_mass,
                    WallSide::Bottom => components[offset + 2 * ball + 1] += magnitude * inv_mass,
                    WallSide::Top => components[offset + 2 * ball + 1] -= magnitude * inv_mass,
                }
            }
            Contact::Balls(i, j) => {
                let normal = self.ball_normal(state, i, j);
                let delta_i = normal * (magnitude / self.masses[i]);
                let delta_j = normal * (magnitude / self.masses[j]);

                components[offset + 2 * i] += delta_i.x;
                components[offset + 2 * i + 1] += delta_i.y;
                components[offset + 2 * j] -= delta_j.x;
                components[offset + 2 * j + 1] -= delta_j.y;
            }
        }
        StateVector::new(components, state.time())
    }

    fn restitution(&self, pair: PairId) -> f64 {
        match self.contact(pair) {
            Contact::Wall { ball, .. } => self.materials[ball].restitution,
            Contact::Balls(i, j) => {
                ContactMaterial::combine(&self.materials[i], &self.materials[j])
            }
        }
    }

    fn describe_pair(&self, pair: PairId) -> String {
        match self.contact(pair) {
            Contact::Wall { ball, side } => {
                let side = match side {
                    WallSide::Left => "left wall",
                    WallSide::Right => "right wall",
                    WallSide::Bottom => "bottom wall",
                    WallSide::Top => "top wall",
                };
                format!("ball {} / {}", ball, side)
            }
            Contact::Balls(i, j) => format!("ball {} / ball {}", i, j),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_box() -> Billiard {
        Billiard::new(
            vec![1.0],
            vec![0.1],
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 1.0),
        )
    }

    #[test]
    fn test_wall_gaps() {
        let billiard = unit_box();
        let state = billiard.initial_state(&[Vector2::new(0.5, 0.5)], &[Vector2::zeros()]);

        // Centered ball: every wall gap is 0.4
        for pair in 0..4 {
            assert_relative_eq!(billiard.gap(PairId(pair), &state), 0.4);
        }
    }

    #[test]
    fn test_ball_pair_normal_velocity() {
        let billiard = Billiard::new(
            vec![1.0, 1.0],
            vec![0.1, 0.1],
            Vector2::new(0.0, 0.0),
            Vector2::new(10.0, 10.0),
        );
        let state = billiard.initial_state(
            &[Vector2::new(4.0, 5.0), Vector2::new(6.0, 5.0)],
            &[Vector2::new(1.0, 0.0), Vector2::new(-1.0, 0.0)],
        );

        // Last pair is ball 0 / ball 1; heads-on approach at 2 units/s
        let pair = PairId(billiard.pair_count() - 1);
        assert_relative_eq!(billiard.normal_velocity(pair, &state), -2.0);
    }

    #[test]
    fn test_wall_impulse_only_changes_normal_velocity() {
        let billiard = unit_box();
        let state = billiard.initial_state(
            &[Vector2::new(0.2, 0.5)],
            &[Vector2::new(-1.0, 0.3)],
        );

        // Pair 0 is ball 0 / left wall
        let resolved = billiard.apply_normal_impulse(PairId(0), &state, 2.0);
        let velocity = billiard.velocity(&resolved, 0);

        assert_relative_eq!(velocity.x, 1.0);
        assert_relative_eq!(velocity.y, 0.3);
    }
}
