pub mod state_vector;

pub use self::state_vector::StateVector;
