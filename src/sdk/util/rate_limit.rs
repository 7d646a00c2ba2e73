use governor::clock::{Clock, DefaultClock};
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::thread;

pub type Limiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Free-tier openrouteservice allowance.
pub const ORS_REQUESTS_PER_MINUTE: u32 = 40;

pub fn ors_limiter() -> Limiter {
    limiter_per_minute(ORS_REQUESTS_PER_MINUTE)
}

pub fn limiter_per_minute(requests: u32) -> Limiter {
    let quota = Quota::per_minute(NonZeroU32::new(requests).unwrap_or(NonZeroU32::MIN));
    Arc::new(RateLimiter::direct(quota))
}

/// Blocks the calling thread until the limiter hands out a permit.
pub fn wait(limiter: &Limiter) {
    let clock = DefaultClock::default();
    while let Err(not_until) = limiter.check() {
        let delay = not_until.wait_time_from(clock.now());
        log::debug!("Rate limit reached, waiting {:?}", delay);
        thread::sleep(delay);
    }
}
