use bevy::prelude::*;
use plane_sitl::{
    components::{PlaneConfig, ServoInputs, SpatialComponent},
    plugins::PlaneSimPlugin,
    resources::{PhysicsConfig, SensorNoiseConfig},
};

/// Builder for a headless app carrying one plane.
///
/// No time plugin is added; fixed ticks are driven explicitly with
/// [`TestApp::run_steps`] so runs are deterministic.
pub struct TestAppBuilder {
    plane_config: PlaneConfig,
    physics_config: Option<PhysicsConfig>,
    noise: Option<(SensorNoiseConfig, u64)>,
    initial_state: Option<SpatialComponent>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            plane_config: PlaneConfig::small_uav(),
            physics_config: None,
            noise: None,
            initial_state: None,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plane(mut self, config: PlaneConfig) -> Self {
        self.plane_config = config;
        self
    }

    pub fn with_physics(mut self, config: PhysicsConfig) -> Self {
        self.physics_config = Some(config);
        self
    }

    pub fn with_noise(mut self, config: SensorNoiseConfig, seed: u64) -> Self {
        self.noise = Some((config, seed));
        self
    }

    pub fn with_initial_state(mut self, spatial: SpatialComponent) -> Self {
        self.initial_state = Some(spatial);
        self
    }

    pub fn build(self) -> TestApp {
        let mut plugin = PlaneSimPlugin::new(self.plane_config)
            .with_physics(self.physics_config.unwrap_or_default());
        if let Some((config, seed)) = self.noise {
            plugin = plugin.with_noise(config, seed);
        }
        if let Some(spatial) = self.initial_state {
            plugin = plugin.with_initial_state(spatial);
        }

        let mut app = App::new();
        app.add_plugins(plugin);

        // Runs Startup so the plane entity exists
        app.update();

        TestApp { app }
    }
}

/// Test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Runs `steps` fixed ticks.
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    pub fn set_servos(&mut self, channels: &[u16]) {
        let mut servos = self
            .query_single_mut::<ServoInputs>()
            .expect("plane entity should exist");
        *servos = ServoInputs::from_channels(channels);
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }

    pub fn query_all<T: Component>(&mut self) -> Vec<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.iter(world).collect()
    }
}
