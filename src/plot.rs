use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::{
    flog,
    oscillator::CoupledOscillator,
    simulate::{Frame, History, SimulationState},
    types::Float,
    LEFT_WALL, RIGHT_WALL,
};

pub struct PlotSettings {
    pub path: String,
    pub size: (u32, u32),
    pub frame_delay_ms: u32,
    /// Length of the time axis of the η traces (s)
    pub time_window: Float,
    /// Vertical extent of the schematic (m)
    pub schematic_height: Float,
    /// Gap between the trace limits and the amplitude (m)
    pub trace_margin: Float,
}

impl Default for PlotSettings {
    fn default() -> Self {
        PlotSettings {
            path: "mixed_modes.gif".to_string(),
            size: (700, 700),
            frame_delay_ms: 20,
            time_window: 15.0,
            schematic_height: 1.0,
            trace_margin: 0.1,
        }
    }
}

impl PlotSettings {
    /// Number of ticks that fill the time axis once. Zero if the clock
    /// would never advance.
    pub fn num_frames(&self, dt: Float) -> usize {
        if !(dt > 0.0) || !dt.is_finite() {
            return 0;
        }
        (self.time_window / dt).round() as usize
    }

    /// y range of the normal coordinate traces
    pub fn trace_range(&self, model: &CoupledOscillator) -> (Float, Float) {
        (-model.A - self.trace_margin, model.A + self.trace_margin)
    }
}

/// Draw the masses, their centers and the springs
fn draw_schematic<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    model: &CoupledOscillator,
    frame: &Frame,
    settings: &PlotSettings,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let h = settings.schematic_height;
    let caption = format!(
        "k = {} N/m   m = {} kg   η1 = η2 = {} m",
        model.k, model.m, model.A
    );
    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 18))
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(LEFT_WALL..RIGHT_WALL, -h..h)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Position (m)")
        .draw()?;

    for spring in frame.springs.iter() {
        chart.draw_series(DashedLineSeries::new(
            spring.endpoints().iter().map(|p| (p.x, p.y)),
            5,
            5,
            RED.stroke_width(5),
        ))?;
    }

    for mass in [&frame.mass1, &frame.mass2] {
        chart.draw_series(LineSeries::new(
            mass.outline().iter().map(|p| (p.x, p.y)),
            BLUE.stroke_width(3),
        ))?;
    }

    chart.draw_series(
        [frame.x1, frame.x2]
            .into_iter()
            .map(|x| Circle::new((x, 0.0), 4, BLACK.filled())),
    )?;

    Ok(())
}

/// Draw one normal coordinate trace against time, with a zero line
fn draw_trace<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    trace: impl Iterator<Item = (Float, Float)>,
    label: &str,
    y_range: (Float, Float),
    settings: &PlotSettings,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let t_max = settings.time_window;
    let mut chart = ChartBuilder::on(area)
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..t_max, y_range.0..y_range.1)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Time (s)")
        .y_desc(label)
        .draw()?;

    chart.draw_series(LineSeries::new(
        [(0.0, 0.0), (t_max, 0.0)],
        BLACK.stroke_width(1),
    ))?;
    chart.draw_series(LineSeries::new(trace, GREEN.stroke_width(1)))?;

    Ok(())
}

/// Redraw the three stacked views for the current tick
pub fn draw_frame<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    model: &CoupledOscillator,
    frame: &Frame,
    history: &History,
    settings: &PlotSettings,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let panels = root.split_evenly((3, 1));
    let y_range = settings.trace_range(model);

    draw_schematic(&panels[0], model, frame, settings)?;
    draw_trace(
        &panels[1],
        history.eta1_trace(),
        "η1 (m)",
        y_range,
        settings,
    )?;
    draw_trace(
        &panels[2],
        history.eta2_trace(),
        "η2 (m)",
        y_range,
        settings,
    )?;

    Ok(())
}

/// Run the simulation for one time window, writing each tick as a frame of
/// an animated gif.
pub fn animate(
    state: &mut SimulationState,
    model: &CoupledOscillator,
    settings: &PlotSettings,
) -> Result<usize> {
    let num_frames = settings.num_frames(state.dt);
    if num_frames == 0 {
        flog!("dt = {} does not advance the clock, nothing to draw", state.dt);
        return Ok(0);
    }

    let root =
        BitMapBackend::gif(&settings.path, settings.size, settings.frame_delay_ms)?
            .into_drawing_area();

    for _ in 0..num_frames {
        let frame = state.step(model);
        draw_frame(&root, model, &frame, &state.history, settings)?;
        root.present()?;
    }

    flog!("wrote {} frames to {}", num_frames, settings.path);
    Ok(num_frames)
}
