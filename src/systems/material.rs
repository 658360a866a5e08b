/// Contact material properties for simulated bodies
#[derive(Debug, Clone, Copy)]
pub struct ContactMaterial {
    /// Coefficient of restitution (bounciness), 0-1
    pub restitution: f64,
}

impl ContactMaterial {
    /// Creates a new material with the specified restitution
    pub fn new(restitution: f64) -> Self {
        Self { restitution }
    }

    /// Combines two materials into the pair restitution.
    ///
    /// The bouncier material dominates, so a rubber ball still bounces
    /// off a clay wall.
    pub fn combine(a: &ContactMaterial, b: &ContactMaterial) -> f64 {
        a.restitution.max(b.restitution)
    }

    /// Creates a perfectly elastic material
    pub fn elastic() -> Self {
        Self { restitution: 1.0 }
    }

    /// Creates a material for steel (high restitution)
    pub fn steel() -> Self {
        Self { restitution: 0.9 }
    }

    /// Creates a material for rubber (medium-high restitution)
    pub fn rubber() -> Self {
        Self { restitution: 0.7 }
    }

    /// Creates a material for wood (low restitution)
    pub fn wood() -> Self {
        Self { restitution: 0.3 }
    }

    /// Creates a material for clay (nearly dead contact)
    pub fn clay() -> Self {
        Self { restitution: 0.05 }
    }
}

impl Default for ContactMaterial {
    fn default() -> Self {
        Self { restitution: 0.8 }
    }
}
