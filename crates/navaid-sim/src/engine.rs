//! Simulation engine: the harness around the navigation models.
//!
//! `SimulationEngine` owns the hecs ECS world, processes harness commands,
//! runs all systems, and produces `InstrumentSnapshot`s. Headless and
//! deterministic for a given seed.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use navaid_core::commands::NavCommand;
use navaid_core::components::{Aircraft, Wander};
use navaid_core::config::NavConfig;
use navaid_core::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use navaid_core::enums::ScenarioId;
use navaid_core::error::NavResult;
use navaid_core::state::InstrumentSnapshot;
use navaid_core::types::{Position, SimTime, Velocity};
use navaid_dme::RangingModel;
use navaid_vor::PhaseAzimuthDecoder;

use crate::scenario;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Scenario loaded at construction.
    pub scenario: ScenarioId,
    pub nav: NavConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            scenario: ScenarioId::default(),
            nav: NavConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    running: bool,
    scenario: ScenarioId,
    rng: ChaCha8Rng,
    command_queue: VecDeque<NavCommand>,
    config: NavConfig,
    ranging: RangingModel,
    azimuth: PhaseAzimuthDecoder,
}

impl SimulationEngine {
    /// Build the models from `config.nav` and load the configured scenario.
    pub fn new(config: SimConfig) -> NavResult<Self> {
        config.nav.validate()?;
        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            running: true,
            scenario: config.scenario,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            config: config.nav,
            ranging: RangingModel::new(config.nav.ranging)?,
            azimuth: PhaseAzimuthDecoder::new(config.nav.azimuth)?,
        };
        engine.load_scenario(config.scenario)?;
        Ok(engine)
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: NavCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = NavCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> InstrumentSnapshot {
        self.process_commands();

        if self.running {
            // Time first, so ranging sees the post-movement clock.
            self.time.advance();
            self.run_systems();
        }
        // Stateless instruments follow the aircraft even while paused.
        self.refresh_instruments();

        systems::snapshot::build_snapshot(&self.world, &self.time, self.running, self.scenario)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn scenario(&self) -> ScenarioId {
        self.scenario
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    fn load_scenario(&mut self, scenario: ScenarioId) -> NavResult<()> {
        let layout = scenario::build_layout(scenario);
        world_setup::setup_scenario(
            &mut self.world,
            &layout,
            &self.ranging,
            self.config.deviation,
        )?;
        self.scenario = scenario;
        self.time = SimTime::default();
        info!(
            ?scenario,
            stations = layout.stations.len(),
            "scenario loaded"
        );
        Ok(())
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single harness command.
    fn handle_command(&mut self, command: NavCommand) {
        match command {
            NavCommand::LoadScenario { scenario } => {
                if let Err(err) = self.load_scenario(scenario) {
                    warn!(?scenario, %err, "scenario load failed");
                }
            }
            NavCommand::MoveAircraft { position } => {
                let target = position.clamped(WORLD_WIDTH, WORLD_HEIGHT);
                let mut moved = false;
                for (_entity, (_aircraft, pos)) in
                    self.world.query_mut::<(&Aircraft, &mut Position)>()
                {
                    *pos = target;
                    moved = true;
                }
                if !moved {
                    warn!("MoveAircraft ignored: no aircraft in world");
                }
            }
            NavCommand::SetAircraftVelocity { velocity } => {
                let aircraft = self.aircraft_entities();
                if aircraft.is_empty() {
                    warn!("SetAircraftVelocity ignored: no aircraft in world");
                }
                for entity in aircraft {
                    let _ = self.world.remove_one::<Wander>(entity);
                    if let Ok(mut vel) = self.world.get::<&mut Velocity>(entity) {
                        *vel = velocity;
                    }
                }
            }
            NavCommand::Wander { speed } => {
                let aircraft = self.aircraft_entities();
                if aircraft.is_empty() {
                    warn!("Wander ignored: no aircraft in world");
                }
                for entity in aircraft {
                    let heading = self
                        .world
                        .get::<&Velocity>(entity)
                        .map(|vel| vel.heading())
                        .unwrap_or_default();
                    let _ = self.world.insert_one(entity, Wander { speed, heading });
                }
            }
            NavCommand::Pause => {
                self.running = false;
            }
            NavCommand::Resume => {
                self.running = true;
            }
        }
    }

    fn aircraft_entities(&self) -> Vec<hecs::Entity> {
        self.world
            .query::<&Aircraft>()
            .iter()
            .map(|(entity, _)| entity)
            .collect()
    }

    /// Run the time-dependent systems in order.
    fn run_systems(&mut self) {
        // 1. Heading jitter for wandering aircraft
        systems::movement::wander(&mut self.world, &mut self.rng);
        // 2. Movement integration
        systems::movement::run(&mut self.world);
        // 3. DME interrogations
        if let Some(aircraft) = systems::snapshot::find_aircraft_position(&self.world) {
            systems::ranging::run(
                &mut self.world,
                &self.ranging,
                &aircraft,
                self.time.elapsed_secs,
            );
        }
    }

    /// Azimuth decode and lobe evaluation at the current aircraft position.
    fn refresh_instruments(&mut self) {
        let Some(aircraft) = systems::snapshot::find_aircraft_position(&self.world) else {
            return;
        };
        systems::azimuth::run(&mut self.world, &self.azimuth, &aircraft);
        systems::deviation::run(&mut self.world, &aircraft);
    }
}
