//! Wind and traffic pacing

use std::f32::consts::TAU;

use rand::Rng;

use super::state::Wind;
use crate::settings::Settings;

/// Milliseconds between spawn attempts at the given score
///
/// Shrinks linearly with score and never goes below the floor.
pub fn spawn_interval_ms(score: u64, settings: &Settings) -> f32 {
    let shrink = score as f32 * settings.spawn_interval_per_point_ms;
    (settings.spawn_interval_initial_ms - shrink).max(settings.spawn_interval_floor_ms)
}

/// Draw a fresh wind from the configured band
pub fn sample_wind(rng: &mut impl Rng, settings: &Settings) -> Wind {
    Wind {
        direction: rng.random_range(0.0..TAU),
        speed: rng.random_range(settings.wind_speed_min..=settings.wind_speed_max),
    }
}

/// Advance the wind timer; returns the new wind when a resample is due
pub fn advance_wind(
    timer_ms: &mut f32,
    dt_ms: f32,
    rng: &mut impl Rng,
    settings: &Settings,
) -> Option<Wind> {
    *timer_ms += dt_ms;
    if *timer_ms > settings.wind_resample_ms {
        *timer_ms = 0.0;
        Some(sample_wind(rng, settings))
    } else {
        None
    }
}

/// Advance the spawn timer; returns `true` when an aircraft should spawn
///
/// Once the interval elapses the timer resets whether or not the cap let the
/// spawn through.
pub fn advance_spawn(
    timer_ms: &mut f32,
    dt_ms: f32,
    score: u64,
    active: usize,
    settings: &Settings,
) -> bool {
    *timer_ms += dt_ms;
    if *timer_ms > spawn_interval_ms(score, settings) {
        *timer_ms = 0.0;
        active < settings.max_aircraft
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_interval_endpoints() {
        let settings = Settings::default();
        assert_eq!(spawn_interval_ms(0, &settings), 2000.0);
        assert_eq!(spawn_interval_ms(100, &settings), 1500.0);
        assert_eq!(spawn_interval_ms(1000, &settings), 800.0);
        assert_eq!(spawn_interval_ms(1_000_000, &settings), 800.0);
    }

    #[test]
    fn test_wind_resamples_after_period() {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(5);
        let mut timer = 0.0;

        assert!(advance_wind(&mut timer, 15_000.0, &mut rng, &settings).is_none());
        let wind = advance_wind(&mut timer, 16.0, &mut rng, &settings).expect("resample due");
        assert_eq!(timer, 0.0);
        assert!((0.0..TAU).contains(&wind.direction));
        assert!((0.5..=3.0).contains(&wind.speed));
    }

    #[test]
    fn test_spawn_timer_resets_even_when_capped() {
        let settings = Settings::default();
        let mut timer = 1990.0;

        assert!(!advance_spawn(&mut timer, 20.0, 0, 12, &settings));
        assert_eq!(timer, 0.0);

        timer = 1990.0;
        assert!(advance_spawn(&mut timer, 20.0, 0, 11, &settings));
        assert_eq!(timer, 0.0);

        assert!(!advance_spawn(&mut timer, 500.0, 0, 0, &settings));
        assert_eq!(timer, 500.0);
    }

    proptest! {
        #[test]
        fn spawn_interval_monotone_and_floored(a in 0u64..10_000, b in 0u64..10_000) {
            let settings = Settings::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let at_lo = spawn_interval_ms(lo, &settings);
            let at_hi = spawn_interval_ms(hi, &settings);
            prop_assert!(at_hi <= at_lo);
            prop_assert!(at_hi >= 800.0);
        }
    }
}
