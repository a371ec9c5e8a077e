use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, P2, Z0},
};

/// Volumetric thermal expansion coefficient, 1/K in SI.
pub type ThermalExpansionCoefficient = Quantity<ISQ<Z0, Z0, Z0, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Kinematic viscosity, m²/s in SI.
///
/// Shares its dimension with [`uom::si::f64::DiffusionCoefficient`], so the
/// `diffusion_coefficient` units apply.
pub type KinematicViscosity = Quantity<ISQ<P2, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
