//! Construction of the services the decision core consumes.
//!
//! The host builds one [`ServiceFactory`] at startup and hands it to
//! [`GameContextBuilder::services`](crate::GameContextBuilder::services) and
//! the tick driver. Tests swap individual services through the `with_*`
//! methods instead of patching shared state.

use std::fmt;
use std::sync::Arc;

use farm_core::{ConfigStore, Policy, StaticConfigStore, UnitFilter, UnitFilters};

/// Builds the default [`Policy`] when no config store is supplied.
pub trait ConfigFactory: Send + Sync {
    fn create_policy(&self) -> Policy;
}

/// Produces [`Policy::default`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultConfigFactory;

impl ConfigFactory for DefaultConfigFactory {
    fn create_policy(&self) -> Policy {
        Policy::default()
    }
}

type UnitFilterBuilder = dyn Fn() -> Arc<dyn UnitFilter> + Send + Sync;

/// Constructs the unit filter and the default configuration.
pub struct ServiceFactory {
    build_unit_filter: Box<UnitFilterBuilder>,
    config_factory: Arc<dyn ConfigFactory>,
}

impl ServiceFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the unit filter builder.
    pub fn with_unit_filter<F>(mut self, build: F) -> Self
    where
        F: Fn() -> Arc<dyn UnitFilter> + Send + Sync + 'static,
    {
        self.build_unit_filter = Box::new(build);
        self
    }

    pub fn with_config_factory(mut self, factory: impl ConfigFactory + 'static) -> Self {
        self.config_factory = Arc::new(factory);
        self
    }

    pub fn create_unit_filter(&self) -> Arc<dyn UnitFilter> {
        (self.build_unit_filter)()
    }

    pub fn config_factory(&self) -> &dyn ConfigFactory {
        self.config_factory.as_ref()
    }

    /// A store that always serves the factory's default policy.
    pub fn create_config_store(&self) -> Arc<dyn ConfigStore> {
        Arc::new(StaticConfigStore::new(self.config_factory.create_policy()))
    }
}

impl Default for ServiceFactory {
    fn default() -> Self {
        Self {
            build_unit_filter: Box::new(|| Arc::new(UnitFilters::new())),
            config_factory: Arc::new(DefaultConfigFactory),
        }
    }
}

impl fmt::Debug for ServiceFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceFactory").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use farm_core::{Party, Unit};

    use super::*;

    struct RejectAll;

    impl UnitFilter for RejectAll {
        fn is_attackable(&self, _: Option<&Party>, _: Option<&Unit>, _: &Policy) -> bool {
            false
        }
    }

    struct FarPolicy;

    impl ConfigFactory for FarPolicy {
        fn create_policy(&self) -> Policy {
            Policy {
                detection_distance: 50.0,
                ..Policy::default()
            }
        }
    }

    #[test]
    fn default_filter_accepts_a_plain_mob() {
        let services = ServiceFactory::default();
        let mob = Unit::mob(1, "Goblin").with_distance(5.0);
        let party = Party::default();

        assert!(
            services
                .create_unit_filter()
                .is_attackable(Some(&party), Some(&mob), &Policy::default())
        );
    }

    #[test]
    fn substitutes_are_used() {
        let services = ServiceFactory::default()
            .with_unit_filter(|| Arc::new(RejectAll))
            .with_config_factory(FarPolicy);
        let mob = Unit::mob(1, "Goblin").with_distance(5.0);

        assert!(
            !services
                .create_unit_filter()
                .is_attackable(None, Some(&mob), &Policy::default())
        );
        assert_eq!(services.create_config_store().policy().detection_distance, 50.0);
    }
}
