//! Explicit time march.
//!
//! For each sample `k`, in order:
//!
//! 1. Hub position from the depth model, using the thrust of step `k − 1`.
//! 2. Attenuated inflow at that hub depth.
//! 3. Rotor speed: the control law's initial speed at `k = 0`, otherwise
//!    `ω[k] = ω[k−1] + ω̇[k−1] · dt` with `dt` the mean sample spacing.
//! 4. Tip-speed ratio, hydrodynamic torque, torque command, thrust.
//! 5. Acceleration from the torque balance, consumed by step `k + 1`.
//!
//! Step `k` reads nothing but the configuration and step `k − 1`.

use tracing::{debug, info};

use crate::config::{AttachmentMethod, ControlStrategy, SimulationConfig};
use crate::constant_speed::ConstantSpeedSolver;
use crate::error::SimResult;
use crate::power::PowerSeries;
use crate::results::SimulationResults;
use crate::rotor::RotorDynamics;
use crate::state::{StepRecord, TimeSeriesState};
use ts_controls::{
    ConstantSpeed, ControlLaw, Controller, OperatingPoint, OptimalTsr, PowerLimits,
    optimal_torque_gain,
};
use ts_core::numeric::mean_step;
use ts_hydro::{DepthModel, FeedbackDepth, FlowAttenuation, StaticDepth, unit_weight};

/// A validated run, ready to march.
///
/// All checks and the constant-speed search happen in [`Simulation::new`];
/// [`Simulation::run`] cannot fail on user input.
pub struct Simulation {
    config: SimulationConfig,
    rotor: RotorDynamics,
    flow: FlowAttenuation,
    depth: Box<dyn DepthModel>,
    controller: Controller,
    kopt: f64,
    turbine_weight: f64,
    dt: f64,
    constant_speed: Option<f64>,
    /// Attenuated inflow for every sample when the hub depth never changes
    fixed_inflow: Option<Vec<f64>>,
}

impl Simulation {
    /// Validate the configuration and build every component of the run.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Configuration`](crate::SimError::Configuration) for
    /// invalid input and
    /// [`SimError::DegenerateOptimization`](crate::SimError::DegenerateOptimization)
    /// when no constant speed yields positive power.
    pub fn new(config: SimulationConfig) -> SimResult<Self> {
        config.validate()?;
        let ctx = config.context;

        let rotor = RotorDynamics::new(
            &ctx,
            config.radius,
            config.inertia,
            config.optimum.tsr_max,
        )?;
        let flow = FlowAttenuation::new(&ctx, config.radius, config.mooring_depth)?;
        let weight = unit_weight(&ctx, config.radius, config.rated_power);

        let depth: Box<dyn DepthModel> = match config.attachment {
            AttachmentMethod::SolidBar => Box::new(StaticDepth::new(config.cable_depth)),
            AttachmentMethod::Cable => Box::new(FeedbackDepth::new(config.cable_depth, weight)?),
        };

        let (law, constant_speed) = match config.strategy {
            ControlStrategy::Optimal => (
                ControlLaw::OptimalTsr(OptimalTsr::new(&ctx, config.radius, &config.optimum)?),
                None,
            ),
            ControlStrategy::ConstantSpeed => {
                let solution = ConstantSpeedSolver::from_config(&config)?.solve()?;
                (
                    ControlLaw::ConstantSpeed(ConstantSpeed::new(solution.speed)?),
                    Some(solution.speed),
                )
            }
        };
        let limits = PowerLimits::new(config.rated_power, config.efficiency, config.cut_in_speed)?;
        let controller = Controller::new(law, limits, config.brake_enabled);

        let fixed_inflow = depth.fixed_depth().map(|d| {
            config
                .inflow
                .iter()
                .map(|&u| flow.at_depth(u, d))
                .collect()
        });

        Ok(Self {
            kopt: optimal_torque_gain(&ctx, config.radius, &config.optimum),
            turbine_weight: weight.value,
            dt: mean_step(&config.time),
            rotor,
            flow,
            depth,
            controller,
            constant_speed,
            fixed_inflow,
            config,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Maximum-power-point torque gain of this rotor.
    pub fn kopt(&self) -> f64 {
        self.kopt
    }

    /// Weight of rotor plus power take-off (N).
    pub fn turbine_weight(&self) -> f64 {
        self.turbine_weight
    }

    /// Speed chosen for the constant-speed strategy, if any.
    pub fn constant_speed(&self) -> Option<f64> {
        self.constant_speed
    }

    /// Euler step (s).
    pub fn dt(&self) -> f64 {
        self.dt
    }

    fn step(&self, k: usize, previous: Option<&StepRecord>) -> StepRecord {
        let position = self.depth.position(previous.map(|p| p.thrust));
        let inflow = match &self.fixed_inflow {
            Some(series) => series[k],
            None => self.flow.at_depth(self.config.inflow[k], position.depth),
        };

        let speed = match previous {
            None => self.controller.law.initial_speed(inflow),
            Some(p) => p.speed + p.acceleration * self.dt,
        };
        let tsr = self.rotor.tip_speed_ratio(speed, inflow);
        let hydro_torque = self.rotor.hydro_torque(inflow, self.config.curves.cq(tsr));

        let command = self.controller.command(&OperatingPoint {
            speed,
            inflow,
            tsr,
            hydro_torque,
        });
        let thrust = self.rotor.thrust(inflow, self.config.curves.ct(tsr));
        let acceleration = self
            .rotor
            .acceleration(hydro_torque, command.control, command.brake);

        StepRecord {
            speed,
            acceleration,
            tsr,
            hydro_torque,
            control_torque: command.control,
            brake_torque: command.brake,
            thrust,
            inflow_adjusted: inflow,
            hub_depth: position.depth,
            mooring_angle: position.angle,
        }
    }

    /// March over every sample and derive the power series.
    ///
    /// Repeated calls return identical results.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Invariant`](crate::SimError::Invariant) only if the
    /// write-once state buffer is misused, which indicates a bug.
    pub fn run(&self) -> SimResult<SimulationResults> {
        let n = self.config.len();
        info!(
            law = self.controller.law.name(),
            attachment = %self.config.attachment,
            samples = n,
            dt = self.dt,
            "starting rotor simulation"
        );

        let mut state = TimeSeriesState::new(n);
        for k in 0..n {
            let record = self.step(k, state.last().as_ref());
            state.record(k, &record)?;
        }

        let power = PowerSeries::compute(
            &state,
            &self.rotor,
            &*self.config.curves,
            self.kopt,
            self.config.optimum.tsr_opt,
            self.config.efficiency,
        )?;
        let results = SimulationResults::new(
            &self.config,
            state,
            power,
            self.turbine_weight,
            self.constant_speed,
        );
        debug!(weight = self.turbine_weight, kopt = self.kopt, "rotor constants");
        info!(
            energy_kwh = results.summary.energy_kwh,
            peak_thrust = results.summary.peak_thrust,
            capacity_factor = results.summary.capacity_factor,
            "rotor simulation finished"
        );
        Ok(results)
    }
}

/// Build and run in one call.
///
/// # Errors
///
/// See [`Simulation::new`].
pub fn simulate(config: SimulationConfig) -> SimResult<SimulationResults> {
    Simulation::new(config)?.run()
}
