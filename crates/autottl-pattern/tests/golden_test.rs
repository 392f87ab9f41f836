//! Analyzer and predictor against the golden feeds in `test-fixtures`.

use autottl_core::config::AnalysisConfig;
use autottl_core::TtlBounds;
use autottl_pattern::{most_active_hours, PatternAnalyzer, TtlPredictor};
use chrono_tz::Tz;
use test_fixtures::{all_feeds, load_feed, FeedFixture};

fn timezone(feed: &FeedFixture) -> Tz {
    feed.timezone.parse().expect("fixture timezone")
}

// ── Analysis ─────────────────────────────────────────────────────────────

#[test]
fn golden_feed_statistics() {
    for feed in all_feeds() {
        let analyzer = PatternAnalyzer::new(AnalysisConfig::default(), timezone(&feed));
        let pattern = analyzer.analyze(&feed.timestamps, 0);
        let expected = &feed.expected;

        assert_eq!(pattern.total_entries, expected.total_entries, "{}", feed.name);
        assert_eq!(pattern.days_covered, expected.days_covered, "{}", feed.name);
        assert_eq!(pattern.has_enough_data, expected.has_enough_data, "{}", feed.name);
        assert!(
            (pattern.simple_avg_interval - expected.simple_avg_interval).abs() < 1e-6,
            "{}: {} != {}",
            feed.name,
            pattern.simple_avg_interval,
            expected.simple_avg_interval
        );

        let hours: Vec<u32> = most_active_hours(&pattern).iter().map(|h| h.hour).collect();
        assert_eq!(hours, expected.most_active_hours, "{}", feed.name);
    }
}

#[test]
fn business_hours_skip_weekends() {
    let feed = load_feed("business_hours");
    let pattern = PatternAnalyzer::new(AnalysisConfig::default(), timezone(&feed))
        .analyze(&feed.timestamps, 0);

    assert!(!pattern.weekdays[0].has_updates, "Sunday");
    assert!(!pattern.weekdays[6].has_updates, "Saturday");
    for day in 1..=4 {
        assert!(pattern.weekdays[day].has_updates);
        assert!((pattern.weekdays[day].interval - 28_800.0).abs() < 1e-6);
    }
    // Friday's last gap spans the weekend.
    assert!(pattern.weekdays[5].interval > 28_800.0);
}

// ── Prediction ───────────────────────────────────────────────────────────

#[test]
fn golden_feed_predictions() {
    for feed in all_feeds() {
        let tz = timezone(&feed);
        let bounds = TtlBounds::new(feed.expected.default_ttl, feed.expected.max_ttl);
        let pattern = PatternAnalyzer::new(AnalysisConfig::default(), tz).analyze(&feed.timestamps, 0);
        let predictor = TtlPredictor::new(bounds, tz);

        for probe in &feed.expected.probes {
            let ttl = bounds.clamp(predictor.predict(&pattern, probe.at).resolve(&bounds));
            assert_eq!(ttl, probe.first_ttl, "{} at {}", feed.name, probe.at);
        }
    }
}
