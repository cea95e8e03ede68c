//! The opponent proper: settings, the busy flag, and the delay task.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use chess_core::{Color, Move, Position, RulesEngine, StandardRules};
use parking_lot::{Mutex, RwLock};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tiered_engine::{Selector, Tier};
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tracing::debug;

use crate::cancel::CancelHandle;
use crate::config::OpponentConfig;
use crate::error::OpponentError;

/// Tier and side, read once per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub tier: Tier,
    pub side: Color,
}

pub struct Opponent<R: RulesEngine = StandardRules> {
    rules: R,
    settings: RwLock<Settings>,
    thinking: Arc<AtomicBool>,
    rng: Mutex<StdRng>,
    instant: bool,
}

impl Opponent<StandardRules> {
    pub fn new(tier: Tier, side: Color) -> Self {
        Self::with_rules(StandardRules, tier, side)
    }

    pub fn from_config(config: &OpponentConfig) -> Self {
        let opponent = Self::new(config.tier, config.side).instant(config.instant);
        match config.seed {
            Some(seed) => opponent.with_seed(seed),
            None => opponent,
        }
    }
}

impl<R: RulesEngine> Opponent<R> {
    pub fn with_rules(rules: R, tier: Tier, side: Color) -> Self {
        Self {
            rules,
            settings: RwLock::new(Settings { tier, side }),
            thinking: Arc::new(AtomicBool::new(false)),
            rng: Mutex::new(StdRng::from_entropy()),
            instant: false,
        }
    }

    /// Replaces the random source with a seeded one.
    pub fn with_seed(self, seed: u64) -> Self {
        *self.rng.lock() = StdRng::seed_from_u64(seed);
        self
    }

    /// With `instant` set, moves resolve without the thinking delay.
    pub fn instant(mut self, instant: bool) -> Self {
        self.instant = instant;
        self
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Takes effect from the next request; one in flight keeps its snapshot.
    pub fn configure(&self, tier: Tier, side: Color) {
        *self.settings.write() = Settings { tier, side };
        debug!(%tier, %side, "opponent configured");
    }

    pub fn settings(&self) -> Settings {
        *self.settings.read()
    }

    pub fn is_thinking(&self) -> bool {
        self.thinking.load(Ordering::Acquire)
    }

    /// Starts thinking about `pos`.
    ///
    /// The move is picked before this returns; the returned future only
    /// waits out the tier's thinking time. It resolves to `None` right away
    /// when the engine may not move (wrong turn, game over, no legal moves),
    /// and to `None` after cancellation.
    pub fn request_move(&self, pos: &Position) -> Result<PendingMove, OpponentError> {
        let runtime = Handle::try_current().map_err(|_| OpponentError::NoRuntime)?;
        let guard = ThinkingGuard::claim(&self.thinking).ok_or(OpponentError::Busy)?;

        let Settings { tier, side } = self.settings();
        let choice = {
            let mut rng = self.rng.lock();
            Selector::new(&self.rules, tier, side).choose(pos, &mut *rng)
        };
        let selection = match choice {
            Ok(selection) => selection,
            Err(reason) => {
                debug!(%tier, %side, %reason, "no move to make");
                return Ok(PendingMove::resolved(None));
            }
        };

        let delay = if self.instant {
            Duration::ZERO
        } else {
            tier.think_time()
        };
        let cancel = CancelHandle::new();
        let signal = cancel.signal();
        let (tx, rx) = oneshot::channel();
        let mv = selection.mv;
        debug!(%tier, mv = %mv.san, delay_ms = delay.as_millis() as u64, "thinking");

        runtime.spawn(async move {
            let ready = if delay.is_zero() {
                true
            } else {
                tokio::select! {
                    biased;
                    _ = signal.cancelled() => false,
                    _ = tokio::time::sleep(delay) => true,
                }
            };
            if ready {
                let _ = tx.send(mv);
            } else {
                debug!("move request cancelled");
            }
            // Released only once the move is in the channel.
            drop(guard);
        });

        Ok(PendingMove {
            state: State::Waiting(rx),
            cancel,
        })
    }
}

/// Holds the thinking flag for the lifetime of one request.
struct ThinkingGuard(Arc<AtomicBool>);

impl ThinkingGuard {
    fn claim(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(Arc::clone(flag)))
    }
}

impl Drop for ThinkingGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

enum State {
    Resolved(Option<Move>),
    Waiting(oneshot::Receiver<Move>),
}

/// The engine's reply to one request. Dropping it cancels the request.
pub struct PendingMove {
    state: State,
    cancel: CancelHandle,
}

impl PendingMove {
    fn resolved(mv: Option<Move>) -> Self {
        Self {
            state: State::Resolved(mv),
            cancel: CancelHandle::new(),
        }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }
}

impl Future for PendingMove {
    type Output = Option<Move>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        if this.cancel.is_cancelled() {
            return Poll::Ready(None);
        }
        match &mut this.state {
            State::Resolved(mv) => Poll::Ready(mv.take()),
            State::Waiting(rx) => match Pin::new(rx).poll(cx) {
                Poll::Ready(result) if !this.cancel.is_cancelled() => Poll::Ready(result.ok()),
                Poll::Ready(_) => Poll::Ready(None),
                Poll::Pending => Poll::Pending,
            },
        }
    }
}

impl Drop for PendingMove {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
#[path = "opponent_tests.rs"]
mod opponent_tests;
