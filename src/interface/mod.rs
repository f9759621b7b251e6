use wasm_bindgen::prelude::*;
use web_sys::js_sys::Float32Array;

use crate::{
    flog,
    oscillator::CoupledOscillator,
    simulate::{Frame, SimulationState},
    toJsFloat32Array,
    types::Float,
};

pub mod util;

/// WebAssembly handle to the animation. The page's requestAnimationFrame
/// loop calls step() once per tick and redraws from the accessors.
#[wasm_bindgen]
pub struct InterfaceMixedModes {
    model: CoupledOscillator,
    state: SimulationState,
    frame: Frame,
}

#[wasm_bindgen]
pub fn createMixedModes() -> InterfaceMixedModes {
    createMixedModesWithParams(
        crate::SPRING_CONSTANT,
        crate::MASS,
        crate::AMPLITUDE,
        crate::DT,
    )
}

#[wasm_bindgen]
pub fn createMixedModesWithParams(k: Float, m: Float, A: Float, dt: Float) -> InterfaceMixedModes {
    console_error_panic_hook::set_once();

    let model = CoupledOscillator::new(k, m, A);
    flog!(
        "mixed modes: k = {}, m = {}, A = {}, w1 = {:.4}, w2 = {:.4}",
        model.k,
        model.m,
        model.A,
        model.w1(),
        model.w2()
    );

    InterfaceMixedModes {
        frame: Frame::new(&model, 0.0),
        state: SimulationState::new(dt),
        model,
    }
}

#[wasm_bindgen]
impl InterfaceMixedModes {
    /// Advance one tick. Returns [t, X1, X2, η1, η2] for the tick just
    /// taken.
    #[wasm_bindgen]
    pub fn step(&mut self) -> Float32Array {
        self.frame = self.state.step(&self.model);
        let f = &self.frame;
        toJsFloat32Array!([f.t, f.x1, f.x2, f.n1, f.n2])
    }

    /// Current simulated time, i.e. the time of the next tick
    #[wasm_bindgen]
    pub fn time(&self) -> Float {
        self.state.t
    }

    /// Closed outline of mass 1 as interleaved x, y pairs
    #[wasm_bindgen]
    pub fn mass1Outline(&self) -> Float32Array {
        toJsFloat32Array!(self.frame.mass1.outline().iter().flat_map(|p| [p.x, p.y]))
    }

    #[wasm_bindgen]
    pub fn mass2Outline(&self) -> Float32Array {
        toJsFloat32Array!(self.frame.mass2.outline().iter().flat_map(|p| [p.x, p.y]))
    }

    /// Spring end points along y = 0, as [from, to] per spring
    #[wasm_bindgen]
    pub fn springs(&self) -> Float32Array {
        toJsFloat32Array!(self.frame.springs.iter().flat_map(|s| [s.from, s.to]))
    }

    #[wasm_bindgen]
    pub fn times(&self) -> Float32Array {
        toJsFloat32Array!(self.state.history.times.iter().copied())
    }

    #[wasm_bindgen]
    pub fn eta1(&self) -> Float32Array {
        toJsFloat32Array!(self.state.history.eta1.iter().copied())
    }

    #[wasm_bindgen]
    pub fn eta2(&self) -> Float32Array {
        toJsFloat32Array!(self.state.history.eta2.iter().copied())
    }

    #[wasm_bindgen]
    pub fn w1(&self) -> Float {
        self.model.w1()
    }

    #[wasm_bindgen]
    pub fn w2(&self) -> Float {
        self.model.w2()
    }

    #[wasm_bindgen]
    pub fn amplitude(&self) -> Float {
        self.model.A
    }
}
