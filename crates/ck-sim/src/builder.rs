//! Fluent builder for constructing an [`Engine`].

use ck_core::{SimConfig, SimRng};

use crate::{Engine, ItemScan, RoutingPolicy, ServiceModel, SimResult, Station, WaitQueue};

/// Fluent builder for [`Engine<P, S>`].
///
/// # Required inputs
///
/// - [`SimConfig`][ck_core::SimConfig] — station count, duration, arrival
///   interval, seed
/// - `P: RoutingPolicy` — which of the three routing rules to run
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                                              |
/// |---------------|------------------------------------------------------|
/// | `.service(m)` | [`ItemScan`] defaults (5 s/item + 20–40 s payment)   |
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = EngineBuilder::new(config, LeastCustomers)
///     .service(FixedService(90))
///     .build()?;
/// engine.run(&mut NoopObserver)?;
/// ```
pub struct EngineBuilder<P: RoutingPolicy, S: ServiceModel = ItemScan> {
    config:  SimConfig,
    policy:  P,
    service: S,
}

impl<P: RoutingPolicy> EngineBuilder<P> {
    /// Create a builder with all required inputs and the production service
    /// model.
    pub fn new(config: SimConfig, policy: P) -> Self {
        Self {
            config,
            policy,
            service: ItemScan::default(),
        }
    }
}

impl<P: RoutingPolicy, S: ServiceModel> EngineBuilder<P, S> {
    /// Replace the service-duration model (tests use this to pin durations).
    pub fn service<S2: ServiceModel>(self, service: S2) -> EngineBuilder<P, S2> {
        EngineBuilder {
            config:  self.config,
            policy:  self.policy,
            service,
        }
    }

    /// Validate the configuration and allocate stations, lines, and the
    /// seeded RNG for a ready-to-run [`Engine`].
    ///
    /// Fails with [`SimError::Config`][crate::SimError::Config] before any
    /// state is built if the configuration is rejected — the run never
    /// starts.
    pub fn build(self) -> SimResult<Engine<P, S>> {
        self.config.validate()?;

        let stations = (0..self.config.station_count).map(|_| Station::new()).collect();
        let lines = (0..self.policy.line_count(self.config.station_count))
            .map(|_| WaitQueue::new())
            .collect();
        let rng = SimRng::new(self.config.seed);

        Ok(Engine::from_parts(self.config, self.policy, self.service, stations, lines, rng))
    }
}
