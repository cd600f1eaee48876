//! Map readiness monitor.
//!
//! The mapping library is injected by a script tag and may show up late or
//! never. The monitor polls [`MapProvider::is_available`] on a fixed interval
//! and, on the first successful detection, builds the map surface exactly
//! once.
//!
//! ```text
//! Unchecked -> Polling -> Ready      (surface built)
//!                      -> Failed     (library present, surface construction threw)
//!                      -> TimedOut   (max_attempts reached)
//! ```

use super::{MapProvider, SurfaceConfig};
use crate::error::MapError;
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

/// How often and how long to wait for the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    pub interval_ms: u64,
    /// `None` polls forever.
    pub max_attempts: Option<u32>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_ms: 500,
            max_attempts: Some(120),
        }
    }
}

impl PollConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Where the monitor is in its lifecycle. `S` is the provider's surface handle.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadinessState<S> {
    Unchecked,
    /// Library not seen yet after `attempts` checks.
    Polling { attempts: u32 },
    Ready(S),
    Failed(MapError),
    TimedOut { attempts: u32 },
}

impl<S> ReadinessState<S> {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ReadinessState::Ready(_) | ReadinessState::Failed(_) | ReadinessState::TimedOut { .. }
        )
    }

    pub fn surface(&self) -> Option<&S> {
        match self {
            ReadinessState::Ready(surface) => Some(surface),
            _ => None,
        }
    }

    fn attempts(&self) -> u32 {
        match self {
            ReadinessState::Polling { attempts } | ReadinessState::TimedOut { attempts } => *attempts,
            _ => 0,
        }
    }
}

/// Polls a provider until the map surface exists or the wait is abandoned.
#[derive(Debug)]
pub struct ReadinessMonitor<S> {
    poll: PollConfig,
    surface_config: SurfaceConfig,
    state: ReadinessState<S>,
}

impl<S> ReadinessMonitor<S> {
    pub fn new(poll: PollConfig, surface_config: SurfaceConfig) -> Self {
        Self {
            poll,
            surface_config,
            state: ReadinessState::Unchecked,
        }
    }

    pub fn state(&self) -> &ReadinessState<S> {
        &self.state
    }

    pub fn into_state(self) -> ReadinessState<S> {
        self.state
    }

    /// Perform one availability check.
    ///
    /// Once a terminal state is reached further calls return it unchanged;
    /// in particular a Ready monitor never builds a second surface.
    pub fn poll<P>(&mut self, provider: &P) -> &ReadinessState<S>
    where
        P: MapProvider<Surface = S>,
    {
        if self.state.is_terminal() {
            return &self.state;
        }

        let attempts = self.state.attempts() + 1;
        if provider.is_available() {
            self.state = match provider.create_surface(&self.surface_config) {
                Ok(surface) => {
                    info!("Map library ready after {} check(s)", attempts);
                    ReadinessState::Ready(surface)
                }
                Err(e) => {
                    error!("Map library present but unusable: {}", e);
                    ReadinessState::Failed(e)
                }
            };
        } else if self.poll.max_attempts.is_some_and(|max| attempts >= max) {
            warn!("Map library did not load after {} checks", attempts);
            self.state = ReadinessState::TimedOut { attempts };
        } else {
            debug!("Waiting for map library (check {})", attempts);
            self.state = ReadinessState::Polling { attempts };
        }

        &self.state
    }

    /// Poll until a terminal state, sleeping `interval` between checks.
    ///
    /// `sleep` supplies the platform timer, and `observe` sees every state
    /// the monitor passes through, including the final one.
    pub async fn run<P, F, Fut, O>(
        &mut self,
        provider: &P,
        mut sleep: F,
        mut observe: O,
    ) -> &ReadinessState<S>
    where
        P: MapProvider<Surface = S>,
        F: FnMut(Duration) -> Fut,
        Fut: Future<Output = ()>,
        O: FnMut(&ReadinessState<S>),
    {
        let interval = self.poll.interval();
        loop {
            let state = self.poll(provider);
            observe(state);
            if state.is_terminal() {
                break;
            }
            sleep(interval).await;
        }
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::fake::FakeMap;
    use std::cell::RefCell;

    fn monitor(max_attempts: Option<u32>) -> ReadinessMonitor<u32> {
        ReadinessMonitor::new(
            PollConfig {
                interval_ms: 500,
                max_attempts,
            },
            SurfaceConfig::default(),
        )
    }

    #[test]
    fn becomes_ready_on_first_detection() {
        let map = FakeMap::default();
        let mut monitor = monitor(None);
        assert_eq!(monitor.state(), &ReadinessState::Unchecked);

        assert_eq!(monitor.poll(&map), &ReadinessState::Polling { attempts: 1 });
        assert_eq!(monitor.poll(&map), &ReadinessState::Polling { attempts: 2 });

        map.available.set(true);
        assert_eq!(monitor.poll(&map), &ReadinessState::Ready(1));
        assert_eq!(map.surfaces_created.get(), 1);
    }

    #[test]
    fn ready_is_idempotent() {
        let map = FakeMap::ready();
        let mut monitor = monitor(None);
        monitor.poll(&map);
        monitor.poll(&map);
        monitor.poll(&map);
        assert_eq!(map.surfaces_created.get(), 1);
        assert_eq!(map.availability_checks.get(), 1);
        assert_eq!(monitor.state().surface(), Some(&1));
    }

    #[test]
    fn surface_failure_is_terminal() {
        let map = FakeMap::ready();
        *map.surface_error.borrow_mut() = Some("container not attached".to_string());
        let mut monitor = monitor(None);

        let failed = ReadinessState::Failed(MapError::SurfaceConstruction(
            "container not attached".to_string(),
        ));
        assert_eq!(monitor.poll(&map), &failed);

        *map.surface_error.borrow_mut() = None;
        assert_eq!(monitor.poll(&map), &failed);
        assert_eq!(map.surfaces_created.get(), 0);
    }

    #[test]
    fn gives_up_after_max_attempts() {
        let map = FakeMap::default();
        let mut monitor = monitor(Some(3));
        monitor.poll(&map);
        monitor.poll(&map);
        assert_eq!(monitor.poll(&map), &ReadinessState::TimedOut { attempts: 3 });

        map.available.set(true);
        assert_eq!(monitor.poll(&map), &ReadinessState::TimedOut { attempts: 3 });
        assert_eq!(map.surfaces_created.get(), 0);
    }

    #[test]
    fn without_limit_keeps_polling() {
        let map = FakeMap::default();
        let mut monitor = monitor(None);
        for _ in 0..1_000 {
            monitor.poll(&map);
        }
        assert_eq!(monitor.state(), &ReadinessState::Polling { attempts: 1_000 });
    }

    #[tokio::test]
    async fn run_sleeps_between_checks_and_reports_states() {
        let map = FakeMap::default();
        let mut monitor = monitor(None);
        let sleeps = RefCell::new(Vec::new());
        let mut seen = Vec::new();

        let state = monitor
            .run(
                &map,
                |interval| {
                    sleeps.borrow_mut().push(interval);
                    if sleeps.borrow().len() == 3 {
                        map.available.set(true);
                    }
                    async {}
                },
                |state| seen.push(state.clone()),
            )
            .await;

        assert_eq!(state, &ReadinessState::Ready(1));
        assert_eq!(sleeps.borrow().len(), 3);
        assert!(sleeps.borrow().iter().all(|d| *d == Duration::from_millis(500)));
        assert_eq!(
            seen,
            vec![
                ReadinessState::Polling { attempts: 1 },
                ReadinessState::Polling { attempts: 2 },
                ReadinessState::Polling { attempts: 3 },
                ReadinessState::Ready(1),
            ]
        );
    }

    #[tokio::test]
    async fn run_stops_on_timeout() {
        let map = FakeMap::default();
        let mut monitor = monitor(Some(2));
        let state = monitor.run(&map, |_| async {}, |_| {}).await;
        assert_eq!(state, &ReadinessState::TimedOut { attempts: 2 });
    }
}
