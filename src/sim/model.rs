//! Built-in biofuel pathway model.
//!
//! Forward-Euler difference equations for a bacterial population carrying a
//! sensor → efflux-pump feedback loop:
//!
//! - bacteria grow logistically and are killed by internal fuel toxicity
//! - the sensor tracks internal fuel levels
//! - pump production is driven by `alpha_p`, gated by sensor saturation
//! - internal fuel is produced at `alpha_b` per unit bacteria and exported
//!   at a pump-dependent efflux rate
//! - external fuel accumulates the exported flux, less dilution
//!
//! `step()` is pure (no mutation of the input state); `run` preallocates the
//! five output trajectories to the time-axis length.

use crate::domain::Dataset;
use crate::error::AppError;
use crate::sim::{SimOutput, SimRequest, Simulate};

/// Rate constants for one dataset.
#[derive(Debug, Clone, Copy)]
pub struct ModelParams {
    pub growth_rate: f64,
    pub capacity: f64,
    pub toxicity: f64,
    pub sensor_gain: f64,
    pub sensor_decay: f64,
    pub pump_decay: f64,
    pub efflux_rate: f64,
    pub fuel_decay: f64,
    pub dilution: f64,
}

impl ModelParams {
    pub fn for_dataset(dataset: Dataset) -> Self {
        match dataset {
            Dataset::One => Self {
                growth_rate: 0.55,
                capacity: 8.0,
                toxicity: 0.03,
                sensor_gain: 0.9,
                sensor_decay: 0.6,
                pump_decay: 0.35,
                efflux_rate: 0.2,
                fuel_decay: 0.04,
                dilution: 0.01,
            },
            Dataset::Two => Self {
                growth_rate: 0.8,
                capacity: 12.0,
                toxicity: 0.05,
                sensor_gain: 1.2,
                sensor_decay: 0.8,
                pump_decay: 0.5,
                efflux_rate: 0.3,
                fuel_decay: 0.06,
                dilution: 0.02,
            },
        }
    }
}

/// Instantaneous model state at one time instant.
#[derive(Debug, Clone, Copy)]
pub struct State {
    pub bacteria: f64,
    pub sensor: f64,
    pub pump: f64,
    pub internal_fuel: f64,
    pub external_fuel: f64,
}

impl State {
    pub fn initial(bacteria: f64) -> Self {
        Self {
            bacteria,
            sensor: 0.0,
            pump: 0.0,
            internal_fuel: 0.0,
            external_fuel: 0.0,
        }
    }
}

/// Advance the state by one Euler step of size `dt`.
///
/// All quantities are clamped at zero: the model is a population/concentration
/// model and a coarse `dt` must not drive any pool negative.
pub fn step(state: &State, params: &ModelParams, alpha_b: f64, alpha_p: f64, dt: f64) -> State {
    let b = state.bacteria;
    let s = state.sensor;
    let p = state.pump;
    let fi = state.internal_fuel;
    let fe = state.external_fuel;

    let growth = params.growth_rate * b * (1.0 - b / params.capacity);
    let kill = params.toxicity * fi * b;
    let export = params.efflux_rate * p * fi;

    State {
        bacteria: (b + dt * (growth - kill)).max(0.0),
        sensor: (s + dt * (params.sensor_gain * fi - params.sensor_decay * s)).max(0.0),
        pump: (p + dt * (alpha_p * s / (1.0 + s) - params.pump_decay * p)).max(0.0),
        internal_fuel: (fi + dt * (alpha_b * b - export - params.fuel_decay * fi)).max(0.0),
        external_fuel: (fe + dt * (export - params.dilution * fe)).max(0.0),
    }
}

/// The built-in simulator.
///
/// Stateless: the dataset id in each request selects the constant set, so one
/// instance serves every grid cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct BiofuelModel;

impl Simulate for BiofuelModel {
    fn simulate(&self, req: &SimRequest<'_>) -> Result<SimOutput, AppError> {
        if req.times.is_empty() {
            return Err(AppError::new(2, "Simulation time axis is empty."));
        }
        if !(req.initial_bacteria.is_finite() && req.initial_bacteria >= 0.0) {
            return Err(AppError::new(
                2,
                format!("Invalid initial bacteria amount: {}.", req.initial_bacteria),
            ));
        }
        if !(req.alpha_b.is_finite() && req.alpha_p.is_finite()) {
            return Err(AppError::new(
                2,
                format!(
                    "Non-finite rate parameters: alpha_b={}, alpha_p={}.",
                    req.alpha_b, req.alpha_p
                ),
            ));
        }

        let params = ModelParams::for_dataset(req.dataset);
        let n = req.times.len();

        let mut bacteria = Vec::with_capacity(n);
        let mut sensor = Vec::with_capacity(n);
        let mut pump = Vec::with_capacity(n);
        let mut internal_fuel = Vec::with_capacity(n);
        let mut external_fuel = Vec::with_capacity(n);

        let mut state = State::initial(req.initial_bacteria);
        push_state(&state, &mut bacteria, &mut sensor, &mut pump, &mut internal_fuel, &mut external_fuel);

        for k in 1..n {
            let dt = req.times[k] - req.times[k - 1];
            if !(dt.is_finite() && dt > 0.0) {
                return Err(AppError::new(
                    2,
                    format!(
                        "Time axis must be strictly increasing: t[{}]={} after t[{}]={}.",
                        k,
                        req.times[k],
                        k - 1,
                        req.times[k - 1]
                    ),
                ));
            }
            state = step(&state, &params, req.alpha_b, req.alpha_p, dt);
            push_state(&state, &mut bacteria, &mut sensor, &mut pump, &mut internal_fuel, &mut external_fuel);
        }

        Ok(SimOutput {
            bacteria,
            sensor,
            pump,
            internal_fuel,
            external_fuel,
        })
    }
}

fn push_state(
    state: &State,
    bacteria: &mut Vec<f64>,
    sensor: &mut Vec<f64>,
    pump: &mut Vec<f64>,
    internal_fuel: &mut Vec<f64>,
    external_fuel: &mut Vec<f64>,
) {
    bacteria.push(state.bacteria);
    sensor.push(state.sensor);
    pump.push(state.pump);
    internal_fuel.push(state.internal_fuel);
    external_fuel.push(state.external_fuel);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time_axis(t_end: f64, dt: f64) -> Vec<f64> {
        let n = (t_end / dt).round() as usize;
        (0..=n).map(|k| k as f64 * dt).collect()
    }

    fn request(times: &[f64]) -> SimRequest<'_> {
        SimRequest {
            dataset: Dataset::One,
            times,
            initial_bacteria: 0.5,
            alpha_b: 4.0,
            alpha_p: 1.5,
        }
    }

    #[test]
    fn step_does_not_mutate_input_state() {
        let params = ModelParams::for_dataset(Dataset::One);
        let state = State::initial(0.5);

        let _next = step(&state, &params, 4.0, 1.5, 0.05);

        assert_eq!(state.bacteria, 0.5);
        assert_eq!(state.internal_fuel, 0.0);
    }

    #[test]
    fn step_keeps_pools_non_negative() {
        let params = ModelParams::for_dataset(Dataset::Two);
        // Large internal fuel and a huge dt would overshoot without clamping.
        let state = State {
            bacteria: 0.01,
            sensor: 5.0,
            pump: 10.0,
            internal_fuel: 50.0,
            external_fuel: 0.0,
        };

        let next = step(&state, &params, 0.0, 0.0, 10.0);

        assert!(next.bacteria >= 0.0);
        assert!(next.sensor >= 0.0);
        assert!(next.pump >= 0.0);
        assert!(next.internal_fuel >= 0.0);
        assert!(next.external_fuel >= 0.0);
    }

    #[test]
    fn output_lengths_match_time_axis() {
        let times = time_axis(10.0, 0.1);
        let out = BiofuelModel.simulate(&request(&times)).unwrap();

        assert_eq!(out.bacteria.len(), times.len());
        assert_eq!(out.sensor.len(), times.len());
        assert_eq!(out.pump.len(), times.len());
        assert_eq!(out.internal_fuel.len(), times.len());
        assert_eq!(out.external_fuel.len(), times.len());
    }

    #[test]
    fn outputs_are_finite_and_non_negative() {
        let times = time_axis(60.0, 0.05);
        let out = BiofuelModel.simulate(&request(&times)).unwrap();

        for t in 0..times.len() {
            assert!(out.internal_fuel[t].is_finite(), "non-finite at t={t}");
            assert!(out.internal_fuel[t] >= 0.0);
            assert!(out.external_fuel[t].is_finite());
            assert!(out.external_fuel[t] >= 0.0);
        }
    }

    #[test]
    fn deterministic_for_fixed_inputs() {
        let times = time_axis(20.0, 0.05);
        let a = BiofuelModel.simulate(&request(&times)).unwrap();
        let b = BiofuelModel.simulate(&request(&times)).unwrap();

        assert_eq!(a.internal_fuel, b.internal_fuel);
        assert_eq!(a.external_fuel, b.external_fuel);
    }

    #[test]
    fn no_bacteria_means_no_fuel() {
        let times = time_axis(5.0, 0.05);
        let mut req = request(&times);
        req.initial_bacteria = 0.0;

        let out = BiofuelModel.simulate(&req).unwrap();

        assert!(out.internal_fuel.iter().all(|&v| v == 0.0));
        assert!(out.external_fuel.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn pumping_exports_fuel() {
        let times = time_axis(60.0, 0.05);
        let mut req = request(&times);
        req.alpha_p = 2.0;

        let out = BiofuelModel.simulate(&req).unwrap();

        // With production and pumps active, some fuel must end up outside.
        assert!(*out.external_fuel.last().unwrap() > 0.0);
    }

    #[test]
    fn rejects_non_increasing_time_axis() {
        let times = [0.0, 1.0, 1.0, 2.0];
        let err = BiofuelModel.simulate(&request(&times)).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn rejects_empty_time_axis() {
        let err = BiofuelModel.simulate(&request(&[])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn datasets_use_distinct_constants() {
        let times = time_axis(30.0, 0.05);
        let mut req2 = request(&times);
        req2.dataset = Dataset::Two;

        let one = BiofuelModel.simulate(&request(&times)).unwrap();
        let two = BiofuelModel.simulate(&req2).unwrap();

        assert_ne!(one.external_fuel.last(), two.external_fuel.last());
    }
}
