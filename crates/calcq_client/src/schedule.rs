use std::time::Duration;

use futures::Stream;

/// Shortest period a tick stream runs at.
pub const MIN_TICK_PERIOD: Duration = Duration::from_millis(1);

/// A stream that yields once per `period`, starting one period after it is
/// first polled. It never ends. Periods below [`MIN_TICK_PERIOD`] are raised to it.
#[cfg(target_arch = "wasm32")]
pub fn interval_ticks(period: Duration) -> impl Stream<Item = ()> {
    let period = period.max(MIN_TICK_PERIOD);
    let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::IntervalStream::new(millis)
}

/// A stream that yields once per `period`, starting one period after it is
/// first polled. It never ends. Periods below [`MIN_TICK_PERIOD`] are raised to it.
///
/// Must be polled inside a Tokio runtime.
#[cfg(not(target_arch = "wasm32"))]
pub fn interval_ticks(period: Duration) -> impl Stream<Item = ()> {
    use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

    let period = period.max(MIN_TICK_PERIOD);

    // The interval is created lazily so building the stream needs no runtime.
    futures::stream::unfold(None::<Interval>, move |interval| async move {
        let mut interval = interval.unwrap_or_else(|| {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            interval
        });
        interval.tick().await;
        Some(((), Some(interval)))
    })
}
