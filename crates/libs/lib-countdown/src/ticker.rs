//! # Countdown Ticker
//!
//! The countdown as a value stream: one value immediately, one per tick, and
//! nothing after [`Countdown::Ended`]. The tick source is any `Stream` so the
//! browser can plug in a timer interval and tests a finite iterator.

use chrono::{DateTime, Utc};
use futures::future::{AbortHandle, Abortable};
use futures::stream::{self, Stream, StreamExt};
use std::future::Future;

use crate::countdown::{derive, Countdown};
use lib_utils::time::Clock;

enum Phase<C, T> {
    Initial(C, T),
    Ticking(C, T),
    Finished,
}

fn advance<C, T>(value: Countdown, clock: C, ticks: T) -> Option<(Countdown, Phase<C, T>)> {
    let next = if value.is_ended() {
        Phase::Finished
    } else {
        Phase::Ticking(clock, ticks)
    };
    Some((value, next))
}

/// Countdown values for `target`, re-derived from `clock` on every tick.
///
/// Ends right after yielding [`Countdown::Ended`], or when `ticks` ends.
pub fn countdown_stream<C, T>(
    target: DateTime<Utc>,
    clock: C,
    ticks: T,
) -> impl Stream<Item = Countdown>
where
    C: Clock,
    T: Stream + Unpin,
{
    stream::unfold(Phase::Initial(clock, ticks), move |phase| async move {
        match phase {
            Phase::Initial(clock, ticks) => {
                let value = derive(target, clock.now());
                advance(value, clock, ticks)
            }
            Phase::Ticking(clock, mut ticks) => match ticks.next().await {
                Some(_) => {
                    let value = derive(target, clock.now());
                    advance(value, clock, ticks)
                }
                None => None,
            },
            Phase::Finished => None,
        }
    })
}

/// Cancels a task started by [`run_countdown`].
#[derive(Debug, Clone)]
pub struct CountdownHandle {
    abort: AbortHandle,
}

impl CountdownHandle {
    pub fn cancel(&self) {
        log::debug!("Countdown task cancelled");
        self.abort.abort();
    }
}

/// Feed every value of `countdown` to `on_value` until it ends or is cancelled.
///
/// The returned future must be spawned by the caller; once
/// [`CountdownHandle::cancel`] is called `on_value` is never invoked again.
pub fn run_countdown<S, F>(countdown: S, mut on_value: F) -> (impl Future<Output = ()>, CountdownHandle)
where
    S: Stream<Item = Countdown>,
    F: FnMut(Countdown),
{
    let (abort, registration) = AbortHandle::new_pair();
    let task = Abortable::new(
        countdown.for_each(move |value| {
            on_value(value);
            futures::future::ready(())
        }),
        registration,
    );

    let task = async move {
        if task.await.is_err() {
            log::debug!("Countdown task stopped before completion");
        }
    };
    (task, CountdownHandle { abort })
}
