use anyhow::Result;
use mixed_modes::{
    flog,
    oscillator::CoupledOscillator,
    plot::{animate, PlotSettings},
    simulate::SimulationState,
};

/// Animate the mixed-mode oscillation of two spring-coupled masses, along
/// with the two normal coordinates.
pub fn main() -> Result<()> {
    let model = CoupledOscillator::default(); // k = 100 N/m, m = 20 kg, A = 0.175 m
    let mut state = SimulationState::default(); // dt = 0.075 s
    let settings = PlotSettings::default();

    flog!(
        "k = {} N/m, m = {} kg, A = {} m, w1 = {:.4} rad/s, w2 = {:.4} rad/s",
        model.k,
        model.m,
        model.A,
        model.w1(),
        model.w2()
    );

    animate(&mut state, &model, &settings)?;

    Ok(())
}
