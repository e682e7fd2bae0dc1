use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use super::probe::{FeedSource, Prober};
use crate::error::ProbeError;
use crate::location::Locate;
use crate::models::{ProbeRequest, ProbeResponse, ProbeSource};
use crate::parser::domain::HostResolver;
use crate::parser::subparser::select_subscription;

pub type LatestResponse = Option<Arc<ProbeResponse>>;

/// Runs probes one at a time on behalf of a single presentation surface.
///
/// Each trigger supersedes the previous one: the in-flight task is cancelled
/// and observers only ever see the response of the most recent request.
pub struct ProbeSession<F, R, L> {
    prober: Arc<Prober<F, R, L>>,
    subscriptions: Vec<String>,
    rng: Mutex<StdRng>,
    latest: Arc<AtomicU64>,
    in_flight: Mutex<Option<CancellationToken>>,
    tx: Arc<watch::Sender<LatestResponse>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<F, R, L> ProbeSession<F, R, L>
where
    F: FeedSource + Send + Sync + 'static,
    R: HostResolver + Send + Sync + 'static,
    L: Locate + Send + Sync + 'static,
{
    pub fn new(prober: Prober<F, R, L>, subscriptions: Vec<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let (tx, _) = watch::channel(None);
        ProbeSession {
            prober: Arc::new(prober),
            subscriptions,
            rng: Mutex::new(rng),
            latest: Arc::new(AtomicU64::new(0)),
            in_flight: Mutex::new(None),
            tx: Arc::new(tx),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<LatestResponse> {
        self.tx.subscribe()
    }

    /// The most recently published response, if any.
    pub fn latest(&self) -> LatestResponse {
        self.tx.borrow().clone()
    }

    /// Probes a random line of a random configured subscription.
    pub fn trigger_random(&self) -> Result<u64, ProbeError> {
        let url = {
            let mut rng = lock(&self.rng);
            select_subscription(&self.subscriptions, &mut *rng)
                .ok_or(ProbeError::NoSubscription)?
                .to_string()
        };
        Ok(self.trigger(ProbeSource::Subscription(url)))
    }

    /// Starts a probe, cancelling any probe still running. Must be called
    /// from within a Tokio runtime. Returns the new request id.
    pub fn trigger(&self, source: ProbeSource) -> u64 {
        let token = CancellationToken::new();
        // The id and the token swap move together under the in-flight lock.
        let id = {
            let mut in_flight = lock(&self.in_flight);
            let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
            if let Some(previous) = in_flight.replace(token.clone()) {
                previous.cancel();
            }
            id
        };
        let seed = lock(&self.rng).gen::<u64>();
        let request = ProbeRequest { id, source, seed };

        let prober = Arc::clone(&self.prober);
        let latest = Arc::clone(&self.latest);
        let tx = Arc::clone(&self.tx);
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!("Probe {} superseded", request.id);
                }
                response = prober.probe(&request) => {
                    tx.send_if_modified(|slot| {
                        if latest.load(Ordering::SeqCst) != response.request_id {
                            return false;
                        }
                        *slot = Some(Arc::new(response));
                        true
                    });
                }
            }
        });

        id
    }

    /// Cancels the in-flight probe, if any. The last published response stays.
    pub fn cancel(&self) {
        if let Some(token) = lock(&self.in_flight).take() {
            token.cancel();
        }
    }
}

impl<F, R, L> Drop for ProbeSession<F, R, L> {
    fn drop(&mut self) {
        if let Some(token) = lock(&self.in_flight).take() {
            token.cancel();
        }
    }
}
