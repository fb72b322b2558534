pub mod aerodynamics;
mod plane;

pub use aerodynamics::{
    calculate_aerodynamic_force, calculate_aerodynamic_torque, cg_offset_moment, drag_coefficient,
    lift_coefficient, stall_blend,
};
pub use plane::plane_step_system;
