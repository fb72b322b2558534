mod coefficients;
mod force_calculator;
mod torque_calculator;

pub use coefficients::{drag_coefficient, lift_coefficient, stall_blend};
pub use force_calculator::calculate_aerodynamic_force;
pub use torque_calculator::{calculate_aerodynamic_torque, cg_offset_moment};
