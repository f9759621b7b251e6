use itertools::izip;

use crate::{
    geometry::{position, springs, MassCorners, Spring},
    oscillator::CoupledOscillator,
    types::Float,
    DT,
};

/// Time series of the two normal coordinates, one entry per tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    pub times: Vec<Float>,
    pub eta1: Vec<Float>,
    pub eta2: Vec<Float>,
}

impl History {
    pub fn new() -> Self {
        History::default()
    }

    pub fn push(&mut self, t: Float, n1: Float, n2: Float) {
        self.times.push(t);
        self.eta1.push(n1);
        self.eta2.push(n2);
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// (t, η1, η2) in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (Float, Float, Float)> + '_ {
        izip!(self.times.iter(), self.eta1.iter(), self.eta2.iter())
            .map(|(t, n1, n2)| (*t, *n1, *n2))
    }

    pub fn eta1_trace(&self) -> impl Iterator<Item = (Float, Float)> + '_ {
        self.times.iter().copied().zip(self.eta1.iter().copied())
    }

    pub fn eta2_trace(&self) -> impl Iterator<Item = (Float, Float)> + '_ {
        self.times.iter().copied().zip(self.eta2.iter().copied())
    }
}

/// Everything needed to draw a single tick
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub t: Float,
    pub x1: Float,
    pub x2: Float,
    pub n1: Float,
    pub n2: Float,
    pub mass1: MassCorners,
    pub mass2: MassCorners,
    pub springs: [Spring; 3],
}

impl Frame {
    pub fn new(model: &CoupledOscillator, t: Float) -> Self {
        let x1 = model.X1(t);
        let x2 = model.X2(t);
        let mass1 = position(x1);
        let mass2 = position(x2);

        Frame {
            t,
            x1,
            x2,
            n1: model.N1(t),
            n2: model.N2(t),
            mass1,
            mass2,
            springs: springs(&mass1, &mass2),
        }
    }
}

/// Mutable state of the animation: the clock and the traces drawn so far.
pub struct SimulationState {
    pub t: Float,
    pub dt: Float,
    pub history: History,
}

impl Default for SimulationState {
    fn default() -> Self {
        SimulationState::new(DT)
    }
}

impl SimulationState {
    pub fn new(dt: Float) -> Self {
        SimulationState {
            t: 0.0,
            dt,
            history: History::new(),
        }
    }

    /// Evaluate the model at the current time, record the normal
    /// coordinates, then advance the clock by dt.
    pub fn step(&mut self, model: &CoupledOscillator) -> Frame {
        let frame = Frame::new(model, self.t);
        self.history.push(frame.t, frame.n1, frame.n2);
        self.t += self.dt;
        frame
    }

    /// Number of ticks taken so far
    pub fn ticks(&self) -> usize {
        self.history.len()
    }

    /// Step num_steps times and collect every frame
    pub fn run(&mut self, model: &CoupledOscillator, num_steps: usize) -> Vec<Frame> {
        (0..num_steps).map(|_| self.step(model)).collect()
    }
}
