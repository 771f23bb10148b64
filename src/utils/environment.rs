//! Contains environment specific logic.

use std::sync::Arc;

/// A logger type which is called with various information.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences engine behavior.
#[derive(Clone)]
pub struct Environment {
    /// Keeps data parallelism settings.
    pub parallelism: Parallelism,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(parallelism: Parallelism, logger: InfoLogger) -> Self {
        Self { parallelism, logger }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Parallelism::default(), Arc::new(|msg| println!("{msg}")))
    }
}

/// Specifies data parallelism settings.
#[derive(Clone)]
pub struct Parallelism {
    available_cpus: usize,
}

impl Default for Parallelism {
    fn default() -> Self {
        Self { available_cpus: num_cpus::get() }
    }
}

impl Parallelism {
    /// Creates an instance of `Parallelism` using available cpus as given.
    pub fn new_with_cpus(available_cpus: usize) -> Self {
        Self { available_cpus }
    }

    /// Amount of total available CPUs.
    pub fn available_cpus(&self) -> usize {
        self.available_cpus
    }
}
