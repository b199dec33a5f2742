use bevy::prelude::*;
use airframe::{
    AircraftConfig, FlightDynamicsPlugin, TerrainModel, TerrainQuery,
};

/// Builder for a minimal app running the flight dynamics plugin
pub struct TestAppBuilder {
    config: AircraftConfig,
    timestep: f64,
    terrain: Option<TerrainModel>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: AircraftConfig::trainer(),
            timestep: 1.0 / 120.0,
            terrain: None,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: AircraftConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_timestep(mut self, timestep: f64) -> Self {
        self.timestep = timestep;
        self
    }

    pub fn with_terrain(mut self, terrain: impl TerrainQuery + Send + Sync + 'static) -> Self {
        self.terrain = Some(TerrainModel::new(terrain));
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        if let Some(terrain) = self.terrain {
            app.insert_resource(terrain);
        }
        app.add_plugins(FlightDynamicsPlugin::new(self.config).with_timestep(self.timestep));

        // First update runs Startup and spawns the aircraft.
        app.update();

        TestApp { app }
    }
}

/// Test harness driving the fixed schedule by hand
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Advance the flight model by `n` fixed steps
    pub fn run_steps(&mut self, n: usize) {
        for _ in 0..n {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    /// Clone the single matching component off the aircraft entity
    pub fn query_single<C: Component + Clone>(&mut self) -> C {
        let mut query = self.app.world_mut().query::<&C>();
        query.single(self.app.world()).clone()
    }

    /// Overwrite the single matching component on the aircraft entity
    pub fn set_single<C: Component>(&mut self, value: C) {
        let mut query = self.app.world_mut().query::<&mut C>();
        *query.single_mut(self.app.world_mut()) = value;
    }
}
