use nalgebra::DVector;

use crate::collision::ContactModel;
use crate::core::PairId;
use crate::state::StateVector;
use crate::systems::{ContactMaterial, OdeSystem};

/// A contact entry in the system's pair table
#[derive(Debug, Clone, Copy)]
enum Contact {
    /// A particle against the left wall
    LeftWall(usize),

    /// A particle against the right wall
    RightWall(usize),

    /// Two particles against each other
    Bodies(usize, usize),
}

/// N point masses moving on a line, with optional walls at either end
/// and an optional uniform acceleration along the line.
///
/// The state layout is `[x_0 .. x_{n-1}, v_0 .. v_{n-1}]`. The pair
/// table lists left-wall contacts, then right-wall contacts, then
/// particle pairs `(i, j)` with `i < j`, each block in index order.
pub struct LinearParticles {
    masses: Vec<f64>,
    radii: Vec<f64>,
    materials: Vec<ContactMaterial>,
    acceleration: f64,
    left_wall: Option<f64>,
    right_wall: Option<f64>,
    contacts: Vec<Contact>,
}

impl LinearParticles {
    /// Creates a new system of particles with the given masses and radii
    pub fn new(masses: Vec<f64>, radii: Vec<f64>) -> Self {
        assert_eq!(masses.len(), radii.len());

        let materials = vec![ContactMaterial::default(); masses.len()];
        let mut system = Self {
            masses,
            radii,
            materials,
            acceleration: 0.0,
            left_wall: None,
            right_wall: None,
            contacts: Vec::new(),
        };
        system.rebuild_contacts();
        system
    }

    /// Sets the contact material of every particle
    pub fn with_materials(mut self, materials: Vec<ContactMaterial>) -> Self {
        assert_eq!(materials.len(), self.masses.len());
        self.materials = materials;
        self
    }

    /// Adds walls at both ends of the line
    pub fn with_walls(mut self, left: f64, right: f64) -> Self {
        self.left_wall = Some(left);
        self.right_wall = Some(right);
        self.rebuild_contacts();
        self
    }

    /// Adds a wall at the left end of the line only
    pub fn with_left_wall(mut self, left: f64) -> Self {
        self.left_wall = Some(left);
        self.rebuild_contacts();
        self
    }

    /// Sets a uniform acceleration along the line (negative pulls toward
    /// the left wall)
    pub fn with_acceleration(mut self, acceleration: f64) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Returns the number of particles
    pub fn particle_count(&self) -> usize {
        self.masses.len()
    }

    /// Builds the initial state from per-particle positions and
    /// velocities
    pub fn initial_state(&self, positions: &[f64], velocities: &[f64]) -> StateVector {
        let n = self.masses.len();
        assert_eq!(positions.len(), n);
        assert_eq!(velocities.len(), n);

        let mut components = DVector::zeros(2 * n);
        for i in 0..n {
            components[i] = positions[i];
            components[n + i] = velocities[i];
        }
        StateVector::new(components, 0.0)
    }

    fn rebuild_contacts(&mut self) {
        let n = self.masses.len();
        self.contacts.clear();

        if self.left_wall.is_some() {
            for i in 0..n {
                self.contacts.push(Contact::LeftWall(i));
            }
        }
        if self.right_wall.is_some() {
            for i in 0..n {
                self.contacts.push(Contact::RightWall(i));
            }
        }
        for i in 0..n {
            for j in (i + 1)..n {
                self.contacts.push(Contact::Bodies(i, j));
            }
        }
    }

    fn contact(&self, pair: PairId) -> Contact {
        self.contacts[pair.0]
    }

    fn position(&self, state: &StateVector, i: usize) -> f64 {
        state.component(i)
    }

    fn velocity(&self, state: &StateVector, i: usize) -> f64 {
        state.component(self.masses.len() + i)
    }
}

impl OdeSystem for LinearParticles {
    fn dimension(&self) -> usize {
        2 * self.masses.len()
    }

    fn derivative(&self, state: &StateVector) -> DVector<f64> {
        let n = self.masses.len();
        let mut derivative = DVector::zeros(2 * n);

        for i in 0..n {
            derivative[i] = self.velocity(state, i);
            derivative[n + i] = self.acceleration;
        }
        derivative
    }
}

impl ContactModel for LinearParticles {
    fn pair_count(&self) -> usize {
        self.contacts.len()
    }

    fn gap(&self, pair: PairId, state: &StateVector) -> f64 {
        match self.contact(pair) {
            Contact::LeftWall(i) => {
                self.position(state, i) - self.radii[i] - self.left_wall.unwrap_or(f64::NEG_INFINITY)
            }
            Contact::RightWall(i) => {
                self.right_wall.unwrap_or(f64::INFINITY) - self.position(state, i) - self.radii[i]
            }
            Contact::Bodies(i, j) => {
                let distance = (self.position(state, i) - self.position(state, j)).abs();
                distance - (self.radii[i] + self.radii[j])
            }
        }
    }

    fn normal_velocity(&self, pair: PairId, state: &StateVector) -> f64 {
        match self.contact(pair) {
            Contact::LeftWall(i) => self.velocity(state, i),
            Contact::RightWall(i) => -self.velocity(state, i),
            Contact::Bodies(i, j) => {
                let sign = (self.position(state, i) - self.position(state, j)).signum();
                sign * (self.velocity(state, i) - self.velocity(state, j))
            }
        }
    }

    fn effective_mass(&self, pair: PairId, _state: &StateVector) -> f64 {
        match self.contact(pair) {
            Contact::LeftWall(i) | Contact::RightWall(i) => self.masses[i],
            Contact::Bodies(i, j) => {
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
        let n = self.masses.len();
        let mut components = state.components().clone();

        match self.contact(pair) {
            Contact::LeftWall(i) => {
                components[n + i] += magnitude / self.masses[i];
            }
            Contact::RightWall(i) => {
                components[n + i] -= magnitude / self.masses[i];
            }
            Contact::Bodies(i, j) => {
                let sign = (self.position(state, i) - self.position(state, j)).signum();
                components[n + i] += sign * magnitude / self.masses[i];
                components[n + j] -= sign * magnitude / self.masses[j];
            }
        }
        StateVector::new(components, state.time())
    }

    fn restitution(&self, pair: PairId) -> f64 {
        match self.contact(pair) {
            Contact::LeftWall(i) | Contact::RightWall(i) => self.materials[i].restitution,
            Contact::Bodies(i, j) => {
                ContactMaterial::combine(&self.materials[i], &self.materials[j])
            }
        }
    }

    fn describe_pair(&self, pair: PairId) -> String {
        match self.contact(pair) {
            Contact::LeftWall(i) => format!("particle {} / left wall", i),
            Contact::RightWall(i) => format!("particle {} / right wall", i),
            Contact::Bodies(i, j) => format!("particle {} / particle {}", i, j),
        }
    }
}
