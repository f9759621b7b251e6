#![allow(non_snake_case)]

use types::Float;
pub extern crate nalgebra as na;
pub use cfg_if;

pub mod geometry;
pub mod oscillator;
pub mod plot;
pub mod simulate;
pub mod types;
pub mod util;

// Wasm bindings
pub mod interface;

pub const PI: Float = std::f64::consts::PI;
pub const TWO_PI: Float = 2.0 * PI;

/// Spring constant (N/m)
pub const SPRING_CONSTANT: Float = 100.0;
/// Mass of each block (kg)
pub const MASS: Float = 20.0;
/// Amplitude of each normal mode (m)
pub const AMPLITUDE: Float = 0.175;

/// Fixed simulation time step (s)
pub const DT: Float = 0.075;

/// Positions of the two fixed walls (m)
pub const LEFT_WALL: Float = 0.0;
pub const RIGHT_WALL: Float = 3.0;
