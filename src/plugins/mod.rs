use bevy::prelude::*;

use crate::components::{FlightControls, FlightForces, FlightState, SpatialComponent};
use crate::config::AircraftConfig;
use crate::resources::PhysicsConfig;
use crate::systems::flight_dynamics_system;
use crate::terrain::TerrainModel;

/// Fixed-update stages of the flight model.
///
/// Host systems that write `FlightControls` belong in `Controls` so their
/// commands take effect on the same tick.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightDynamicsSet {
    Controls,
    Dynamics,
}

/// Everything an aircraft entity needs for the flight model to drive it.
#[derive(Bundle)]
pub struct AircraftBundle {
    pub config: AircraftConfig,
    pub controls: FlightControls,
    pub state: FlightState,
    pub spatial: SpatialComponent,
    pub forces: FlightForces,
}

impl AircraftBundle {
    /// Bundle for a freshly fuelled aircraft at `spatial`
    pub fn new(config: AircraftConfig, spatial: SpatialComponent) -> Self {
        let state = FlightState::new(&config);
        Self {
            config,
            controls: FlightControls::default(),
            state,
            spatial,
            forces: FlightForces::default(),
        }
    }
}

/// Plugin that runs the flight model for every aircraft entity.
/// It provides:
/// - The fixed-update dynamics system and its ordering sets.
/// - A default flat terrain backend (hosts override by inserting their own
///   `TerrainModel` first).
/// - One aircraft spawned at the origin from the given configuration.
pub struct FlightDynamicsPlugin {
    config: AircraftConfig,
    timestep: f64,
}

impl FlightDynamicsPlugin {
    /// Creates the plugin for one aircraft configuration.
    ///
    /// # Panics
    /// Panics if the configuration fails validation; a bad config is a
    /// wiring mistake, not a runtime condition.
    pub fn new(config: AircraftConfig) -> Self {
        if let Err(err) = config.validate() {
            panic!("{}", err);
        }
        Self {
            config,
            timestep: 1.0 / 120.0, // 120 Hz default physics rate
        }
    }

    /// Overrides the fixed timestep [s]
    pub fn with_timestep(mut self, timestep: f64) -> Self {
        self.timestep = timestep;
        self
    }

    fn setup_aircraft(mut commands: Commands, config: AircraftConfig) {
        info!("Spawning aircraft entity with config: {:?}", config);
        commands.spawn(AircraftBundle::new(config, SpatialComponent::default()));
    }
}

impl Plugin for FlightDynamicsPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();

        // Resources; an existing TerrainModel from the host wins.
        app.init_resource::<TerrainModel>()
            .insert_resource(PhysicsConfig {
                timestep: self.timestep,
            })
            .insert_resource(Time::<Fixed>::from_seconds(self.timestep));

        app.configure_sets(
            FixedUpdate,
            (FlightDynamicsSet::Controls, FlightDynamicsSet::Dynamics).chain(),
        );

        app.add_systems(
            Startup,
            move |commands: Commands| Self::setup_aircraft(commands, config.clone()),
        );

        app.add_systems(
            FixedUpdate,
            flight_dynamics_system.in_set(FlightDynamicsSet::Dynamics),
        );
    }
}
