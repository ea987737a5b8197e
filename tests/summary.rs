#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use fieldlog::libs::entry::{ActivityKind, DailyEntry, ExtraActivity};
    use fieldlog::libs::period::{select_month, YearMonth};
    use fieldlog::libs::summary::{nearing_deadline, progress, total_credits, total_field, total_studies, trend, Dashboard, MonthlySummary, BAR_FLOOR};
    use fieldlog::libs::time::TimeTotal;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(date: &str, hours: i64, minutes: i64, studies: i64, notes: Option<&str>) -> DailyEntry {
        DailyEntry::new(date.to_string(), hours, minutes, studies, notes.map(str::to_string))
    }

    #[test]
    fn test_month_boundaries_split_records() {
        let entries = vec![
            entry("2025-01-31", 1, 0, 0, None),
            entry("2025-02-01", 2, 0, 0, None),
            entry("2024-01-15", 3, 0, 0, None),
            entry("garbage", 4, 0, 0, None),
        ];

        let january = select_month(&entries, YearMonth::new(2025, 1));
        assert_eq!(january.len(), 1);
        assert_eq!(january[0].hours, 1);

        let february = select_month(&entries, YearMonth::new(2025, 2));
        assert_eq!(february.len(), 1);
        assert_eq!(february[0].hours, 2);
    }

    #[test]
    fn test_monthly_scenario_totals() {
        let today = day(2025, 1, 20);
        let entries = vec![
            entry("2025-01-10", 2, 30, 1, Some("estudo com a Ana")),
            entry("2025-01-12", 1, 45, 2, None),
            entry("2024-12-30", 5, 0, 4, Some("mês anterior")),
        ];

        assert_eq!(total_field(&entries, today), TimeTotal { hours: 4, minutes: 15 });
        assert_eq!(total_field(&entries, today).to_string(), "4h 15m");
        assert_eq!(total_studies(&entries, today), 3);

        let summary = MonthlySummary::compute(&entries, &[], today);
        assert_eq!(summary.notes, vec!["estudo com a Ana".to_string()]);
        assert_eq!(summary.credits, TimeTotal::zero());
    }

    #[test]
    fn test_credits_only_count_current_month() {
        let today = day(2025, 3, 5);
        let extras = vec![
            ExtraActivity::new(ActivityKind::Ldc, "2025-03-01".to_string(), 3, 40),
            ExtraActivity::new(ActivityKind::AssemblyHall, "2025-03-02".to_string(), 0, 30),
            ExtraActivity::new(ActivityKind::Ldc, "2025-02-28".to_string(), 8, 0),
        ];

        assert_eq!(total_credits(&extras, today).to_string(), "4h 10m");
    }

    #[test]
    fn test_insight_payload_shape() {
        let entries = vec![entry("2025-01-10", 2, 30, 1, Some("revisitas")), entry("2025-01-11", 1, 0, 0, Some("  "))];
        let summary = MonthlySummary::compute(&entries, &[], day(2025, 1, 20));

        let payload = serde_json::to_value(summary.insight_payload()).unwrap();
        assert_eq!(payload, serde_json::json!({ "fieldHours": 3, "studies": 1, "notes": ["revisitas"] }));
    }

    #[test]
    fn test_progress_against_goal() {
        assert_eq!(progress(15, 30.0), 0.5);
        assert_eq!(progress(45, 30.0), 1.0);
        assert_eq!(progress(0, 30.0), 0.0);
        assert_eq!(progress(0, 0.0), 0.0);
        assert_eq!(progress(3, 0.0), 1.0);
    }

    #[test]
    fn test_trend_spans_year_boundary() {
        let entries = vec![entry("2024-11-05", 10, 0, 0, None), entry("2025-01-03", 5, 30, 0, None)];
        let points = trend(&entries, 30.0, day(2025, 1, 15));

        let months: Vec<YearMonth> = points.iter().map(|p| p.month).collect();
        assert_eq!(months, vec![YearMonth::new(2024, 11), YearMonth::new(2024, 12), YearMonth::new(2025, 1)]);
        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Nov", "Dez", "Jan"]);

        assert_eq!(points[2].hours, 5.5);
        assert_eq!(points[2].display_hours, 5);
        assert!((points[0].bar - 10.0 / 30.0).abs() < 1e-9);
        assert_eq!(points[1].bar, BAR_FLOOR);
    }

    #[test]
    fn test_trend_scales_to_busiest_month_above_goal() {
        let entries = vec![entry("2025-01-03", 60, 0, 0, None), entry("2024-12-03", 30, 0, 0, None)];
        let points = trend(&entries, 30.0, day(2025, 1, 15));

        assert_eq!(points[2].bar, 1.0);
        assert_eq!(points[1].bar, 0.5);
    }

    #[test]
    fn test_trend_with_zero_goal_and_no_data() {
        let points = trend(&[], 0.0, day(2025, 1, 15));

        assert_eq!(points.len(), 3);
        for point in points {
            assert!(point.bar.is_finite());
            assert_eq!(point.bar, BAR_FLOOR);
        }
    }

    #[test]
    fn test_reminder_threshold() {
        assert!(!nearing_deadline(day(2025, 1, 24), 25));
        assert!(nearing_deadline(day(2025, 1, 25), 25));
        assert!(nearing_deadline(day(2025, 1, 31), 25));
        assert!(nearing_deadline(day(2025, 1, 20), 20));
    }

    #[test]
    fn test_oversized_stored_records_do_not_abort_aggregation() {
        let entries = vec![
            entry("2025-01-10", i64::MAX, 59, i64::MAX, None),
            entry("2025-01-11", i64::MAX, 59, 1, None),
        ];
        let extras = vec![ExtraActivity::new(ActivityKind::AssemblyHall, "2025-01-12".to_string(), i64::MAX, 0)];

        let dashboard = Dashboard::build(&entries, &extras, 30.0, day(2025, 1, 20), 25);

        assert_eq!(dashboard.summary.field.total_minutes(), i64::MAX);
        assert_eq!(dashboard.summary.credits.total_minutes(), i64::MAX);
        assert_eq!(dashboard.summary.studies, i64::MAX);
        assert_eq!(dashboard.progress, 1.0);
        assert!(!dashboard.summary.field.to_string().is_empty());
    }

    #[test]
    fn test_dashboard_freezes_values_at_build() {
        let entries = vec![entry("2025-01-10", 15, 0, 2, None)];
        let dashboard = Dashboard::build(&entries, &[], 30.0, day(2025, 1, 26), 25);

        assert_eq!(dashboard.progress, 0.5);
        assert!(dashboard.nearing_deadline);
        assert_eq!(dashboard.summary.studies, 2);
        assert_eq!(dashboard.trend.len(), 3);
    }
}
