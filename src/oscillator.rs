use crate::{types::Float, AMPLITUDE, MASS, SPRING_CONSTANT};

/// Two equal masses coupled to each other and to two walls by three
/// identical springs. The motion is the superposition of the two normal
/// modes, each excited with the same amplitude.
///
/// At rest, mass 1 sits at x = 1 and mass 2 at x = 2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoupledOscillator {
    pub k: Float, // spring constant (N/m)
    pub m: Float, // mass (kg)
    pub A: Float, // amplitude of each normal mode (m)
}

impl Default for CoupledOscillator {
    fn default() -> Self {
        CoupledOscillator::new(SPRING_CONSTANT, MASS, AMPLITUDE)
    }
}

impl CoupledOscillator {
    pub fn new(k: Float, m: Float, A: Float) -> Self {
        CoupledOscillator { k, m, A }
    }

    /// Angular frequency of the first normal mode, where both masses move
    /// in phase (rad/s)
    pub fn w1(&self) -> Float {
        (self.k / self.m).sqrt()
    }

    /// Angular frequency of the second normal mode, where the masses move
    /// in anti-phase (rad/s)
    pub fn w2(&self) -> Float {
        (3.0 * self.k / self.m).sqrt()
    }

    /// Center of the first mass (m)
    pub fn X1(&self, t: Float) -> Float {
        1.0 + self.A * (self.w1() * t).cos() + self.A * (self.w2() * t).cos()
    }

    /// Center of the second mass (m)
    pub fn X2(&self, t: Float) -> Float {
        2.0 + self.A * (self.w1() * t).cos() - self.A * (self.w2() * t).cos()
    }

    /// First normal coordinate η1
    pub fn N1(&self, t: Float) -> Float {
        (self.X1(t) + self.X2(t) - 3.0) / 2.0
    }

    /// Second normal coordinate η2
    pub fn N2(&self, t: Float) -> Float {
        (self.X1(t) - self.X2(t) + 1.0) / 2.0
    }
}

#[cfg(test)]
mod oscillator_tests {
    use crate::{
        assert_close,
        util::test_utils::{random_times, time_grid},
    };

    use super::*;

    #[test]
    fn normal_mode_frequencies() {
        // Arrange
        let osc = CoupledOscillator::new(100.0, 20.0, 0.175);

        // Assert
        assert_close!(osc.w1(), 2.2360679775, 1e-6);
        assert_close!(osc.w2(), 3.8729833462, 1e-6);
        assert_close!(osc.w1(), Float::sqrt(5.0), 1e-6);
        assert_close!(osc.w2(), Float::sqrt(15.0), 1e-6);
    }

    #[test]
    fn initial_configuration() {
        // Arrange
        let osc = CoupledOscillator::default();
        let A = 0.175;

        // Assert
        assert_close!(osc.X1(0.0), 1.0 + 2.0 * A, 1e-12);
        assert_close!(osc.X2(0.0), 2.0, 1e-12);
        assert_close!(osc.N1(0.0), A, 1e-12);
        assert_close!(osc.N2(0.0), A, 1e-12);
    }

    /// Both modes start at full amplitude, so mass 2 begins at rest position
    /// while mass 1 carries both displacements.
    #[test]
    fn both_modes_start_at_amplitude() {
        let osc = CoupledOscillator::default();

        assert_close!((osc.X1(0.0) - osc.X2(0.0) + 1.0) / 2.0, osc.A, 1e-12);
        assert_close!(osc.N1(0.0) + osc.N2(0.0), osc.X1(0.0) - 1.0, 1e-12);
    }

    #[test]
    fn displacements_bounded() {
        let osc = CoupledOscillator::default();
        let bound = 2.0 * osc.A + 1e-12;

        for t in time_grid(15.0, 3000) {
            let d1 = osc.X1(t) - 1.0;
            let d2 = osc.X2(t) - 2.0;
            assert!(d1 >= -bound && d1 <= bound, "X1({}) - 1 = {}", t, d1);
            assert!(d2 >= -bound && d2 <= bound, "X2({}) - 2 = {}", t, d2);
        }
    }

    #[test]
    fn deterministic() {
        let osc = CoupledOscillator::default();
        let mut rng = rand::rng();

        for t in random_times(&mut rng, 100.0, 200) {
            assert_eq!(osc.X1(t).to_bits(), osc.X1(t).to_bits());
            assert_eq!(osc.X2(t).to_bits(), osc.X2(t).to_bits());
            assert_eq!(osc.N1(t).to_bits(), osc.N1(t).to_bits());
            assert_eq!(osc.N2(t).to_bits(), osc.N2(t).to_bits());
        }
    }

    /// Each normal coordinate oscillates at its own single frequency.
    #[test]
    fn normal_coordinates_decouple() {
        // Arrange
        let osc = CoupledOscillator::default();
        let mut rng = rand::rng();
        let mut ts = time_grid(15.0, 600);
        ts.extend(random_times(&mut rng, 15.0, 200));

        // Assert
        for t in ts {
            assert_close!(osc.N1(t), osc.A * (osc.w1() * t).cos(), 1e-9);
            assert_close!(osc.N2(t), osc.A * (osc.w2() * t).cos(), 1e-9);
        }
    }

    #[test]
    fn decoupling_holds_for_other_parameters() {
        let osc = CoupledOscillator::new(40.0, 3.0, 0.05);

        for t in time_grid(15.0, 300) {
            assert_close!(osc.N1(t), osc.A * (osc.w1() * t).cos(), 1e-9);
            assert_close!(osc.N2(t), osc.A * (osc.w2() * t).cos(), 1e-9);
        }
    }

    /// First mode returns to its starting value after one period
    #[test]
    fn first_mode_period() {
        let osc = CoupledOscillator::default();
        let period = crate::TWO_PI / osc.w1();

        assert_close!(osc.N1(period), osc.N1(0.0), 1e-9);
        assert_close!(osc.N1(period / 2.0), -osc.A, 1e-9);
    }
}
