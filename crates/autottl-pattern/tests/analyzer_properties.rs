use autottl_core::config::AnalysisConfig;
use autottl_core::{Prediction, TtlBounds};
use autottl_pattern::{most_active_hours, PatternAnalyzer, TtlPredictor};
use chrono_tz::Tz;
use proptest::prelude::*;
use test_fixtures::{daily, evenly_spaced, utc};

/// Ascending timestamps built from non-negative gaps.
fn arb_history() -> impl Strategy<Value = Vec<i64>> {
    (
        1_600_000_000i64..1_800_000_000,
        prop::collection::vec(0i64..200_000, 0..120),
    )
        .prop_map(|(start, gaps)| {
            let mut ts = Vec::with_capacity(gaps.len() + 1);
            let mut t = start;
            ts.push(t);
            for g in gaps {
                t += g;
                ts.push(t);
            }
            ts
        })
}

fn analyzer() -> PatternAnalyzer {
    PatternAnalyzer::new(AnalysisConfig::default(), Tz::UTC)
}

// ── Fixed scenarios ──────────────────────────────────────────────────────

#[test]
fn nine_hourly_entries_are_insufficient() {
    let ts = evenly_spaced(utc(2024, 3, 4, 0, 0), 3600, 9);
    let pattern = analyzer().analyze(&ts, 0);
    assert!(!pattern.has_enough_data);
    assert_eq!(pattern.simple_avg_interval, 3600.0);
}

#[test]
fn forty_daily_entries_at_eight() {
    let ts = daily(utc(2024, 3, 4, 8, 0), 40);
    let pattern = analyzer().analyze(&ts, 0);
    assert!(pattern.has_enough_data);
    assert!((pattern.hour_interval(8).unwrap() - 86_400.0).abs() < 1e-6);
    assert!(pattern.weekdays.iter().all(|d| d.has_updates));

    let bounds = TtlBounds::new(600, 172_800);
    let predictor = TtlPredictor::new(bounds, Tz::UTC);
    let at_eight = utc(2024, 4, 15, 8, 5);
    let ttl = bounds.clamp(predictor.predict(&pattern, at_eight).resolve(&bounds));
    assert_eq!(ttl, 86_400);
}

#[test]
fn ten_days_four_entries_each_at_eight() {
    // 08:00, 08:10, 08:20, 08:30 for ten days.
    let ts = test_fixtures::bursts(utc(2024, 3, 4, 8, 0), 10, 4, 600);
    let pattern = analyzer().analyze(&ts, 0);
    assert!(pattern.has_enough_data);
    assert_eq!(pattern.days_covered, 10);
    assert_eq!(pattern.hours.len(), 1);
    assert_eq!(pattern.hour_density(8), Some(4.0));

    let bounds = TtlBounds::new(600, 86_400);
    let predictor = TtlPredictor::new(bounds, Tz::UTC);
    let ttl = bounds.clamp(predictor.predict(&pattern, utc(2024, 3, 14, 8, 0)).resolve(&bounds));
    assert!((600..=86_400).contains(&ttl));
}

// ── Properties ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn weekday_table_always_complete(ts in arb_history()) {
        let pattern = analyzer().analyze(&ts, 0);
        prop_assert_eq!(pattern.weekdays.len(), 7);
        for day in &pattern.weekdays {
            prop_assert_eq!(day.has_updates, day.interval > 0.0);
        }
    }

    #[test]
    fn sufficiency_matches_thresholds(ts in arb_history()) {
        let pattern = analyzer().analyze(&ts, 0);
        prop_assert_eq!(pattern.total_entries, ts.len());
        prop_assert_eq!(
            pattern.has_enough_data,
            ts.len() >= 30 && pattern.days_covered >= 7
        );
        if ts.len() < 10 {
            prop_assert!(pattern.hours.is_empty());
        }
    }

    #[test]
    fn hour_densities_sum_to_entries_per_day(ts in arb_history()) {
        let pattern = analyzer().analyze(&ts, 0);
        if ts.len() >= 10 {
            let total: f64 = pattern.hours.values().map(|h| h.density).sum();
            let expected = ts.len() as f64 / pattern.days_covered.max(1) as f64;
            prop_assert!((total - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn active_hours_bounded_and_ordered(ts in arb_history()) {
        let pattern = analyzer().analyze(&ts, 0);
        let top = most_active_hours(&pattern);
        prop_assert!(top.len() <= 3);
        for w in top.windows(2) {
            prop_assert!(w[0].density >= w[1].density);
        }
    }

    #[test]
    fn sufficient_prediction_respects_floor(ts in arb_history(), now in 1_600_000_000i64..1_900_000_000) {
        let pattern = analyzer().analyze(&ts, 0);
        let bounds = TtlBounds::new(900, 86_400);
        let prediction = TtlPredictor::new(bounds, Tz::UTC).predict(&pattern, now);
        if pattern.has_enough_data {
            match prediction {
                Prediction::Interval(secs) => prop_assert!(secs >= 900),
                Prediction::UseMax => prop_assert!(false, "sufficient data never yields UseMax"),
            }
        }
    }
}
