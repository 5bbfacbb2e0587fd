use budget_tracker_core::dates::{same_week, week_end, week_start};
use budget_tracker_core::models::bucket::{Bucket, BucketState};
use budget_tracker_core::models::budget::Budget;
use budget_tracker_core::models::category::BucketCategory;
use budget_tracker_core::models::chart::BucketChartEntry;
use budget_tracker_core::models::expense::Expense;
use budget_tracker_core::models::settings::{BudgetSplit, DateFormat, Settings};
use budget_tracker_core::models::summary::{CategoryTotals, WeekKey, WeekTotals};
use chrono::{NaiveDate, NaiveDateTime};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn at(y: i32, m: u32, day: u32, h: u32) -> NaiveDateTime {
    d(y, m, day).and_hms_opt(h, 0, 0).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  BucketCategory
// ═══════════════════════════════════════════════════════════════════

mod bucket_category {
    use super::*;

    #[test]
    fn display_is_raw_identifier() {
        assert_eq!(BucketCategory::Needs.to_string(), "needs");
        assert_eq!(BucketCategory::Wants.to_string(), "wants");
        assert_eq!(BucketCategory::Future.to_string(), "future");
    }

    #[test]
    fn labels_are_capitalized() {
        assert_eq!(BucketCategory::Needs.label(), "Needs");
        assert_eq!(BucketCategory::Wants.label(), "Wants");
        assert_eq!(BucketCategory::Future.label(), "Future");
    }

    #[test]
    fn all_is_display_order() {
        assert_eq!(
            BucketCategory::ALL,
            [BucketCategory::Needs, BucketCategory::Wants, BucketCategory::Future]
        );
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!("needs".parse::<BucketCategory>().unwrap(), BucketCategory::Needs);
        assert_eq!(" WANTS ".parse::<BucketCategory>().unwrap(), BucketCategory::Wants);
        assert_eq!("Future".parse::<BucketCategory>().unwrap(), BucketCategory::Future);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "savings".parse::<BucketCategory>().unwrap_err();
        assert!(err.to_string().contains("Unknown category 'savings'"));
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&BucketCategory::Wants).unwrap(), "\"wants\"");
        let back: BucketCategory = serde_json::from_str("\"future\"").unwrap();
        assert_eq!(back, BucketCategory::Future);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Expense
// ═══════════════════════════════════════════════════════════════════

mod expense {
    use super::*;

    #[test]
    fn at_keeps_fields() {
        let e = Expense::at(12.5, "lunch", BucketCategory::Wants, at(2024, 1, 3, 12));
        assert_eq!(e.amount, 12.5);
        assert_eq!(e.description, "lunch");
        assert_eq!(e.category, BucketCategory::Wants);
        assert_eq!(e.date(), d(2024, 1, 3));
    }

    #[test]
    fn ids_are_unique() {
        let a = Expense::new(1.0, "a", BucketCategory::Needs);
        let b = Expense::new(1.0, "a", BucketCategory::Needs);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn json_roundtrip_preserves_everything() {
        let e = Expense::at(40.0, "rent, partial", BucketCategory::Needs, at(2024, 2, 1, 9));
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"category\":\"needs\""));
        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Bucket / BucketState
// ═══════════════════════════════════════════════════════════════════

mod bucket_state {
    use super::*;

    #[test]
    fn remaining_is_allocated_minus_spent() {
        let b = Bucket::new(500.0, 120.0);
        assert_eq!(b.remaining, 380.0);
        assert!(!b.is_overspent());
    }

    #[test]
    fn overspend_is_not_clamped() {
        let b = Bucket::new(500.0, 600.0);
        assert_eq!(b.remaining, -100.0);
        assert!(b.is_overspent());
    }

    #[test]
    fn get_and_totals() {
        let state = BucketState {
            needs: Bucket::new(500.0, 600.0),
            wants: Bucket::new(300.0, 20.0),
            future: Bucket::new(200.0, 0.0),
        };
        assert_eq!(state.get(BucketCategory::Wants).spent, 20.0);
        assert_eq!(state.total_allocated(), 1000.0);
        assert_eq!(state.total_spent(), 620.0);
        assert_eq!(state.total_remaining(), 380.0);
        assert_eq!(state.overspent_categories(), vec![BucketCategory::Needs]);
    }

    #[test]
    fn default_is_all_zero() {
        let state = BucketState::default();
        assert_eq!(state.total_allocated(), 0.0);
        assert!(state.overspent_categories().is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn default_split_is_50_30_20() {
        let split = BudgetSplit::default();
        assert_eq!(split.fraction(BucketCategory::Needs), 0.5);
        assert_eq!(split.fraction(BucketCategory::Wants), 0.3);
        assert_eq!(split.fraction(BucketCategory::Future), 0.2);
        assert!(split.validate().is_ok());
    }

    #[test]
    fn percentage() {
        let split = BudgetSplit::default();
        assert!((split.percentage(BucketCategory::Wants) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn split_must_sum_to_one() {
        let split = BudgetSplit {
            needs: 0.5,
            wants: 0.3,
            future: 0.3,
        };
        let err = split.validate().unwrap_err();
        assert!(err.to_string().contains("must sum to 1"));
    }

    #[test]
    fn split_rejects_negative_fraction() {
        let split = BudgetSplit {
            needs: 1.2,
            wants: -0.2,
            future: 0.0,
        };
        let err = split.validate().unwrap_err();
        assert!(err.to_string().contains("between 0 and 1"));
    }

    #[test]
    fn split_rejects_nan() {
        let split = BudgetSplit {
            needs: f64::NAN,
            wants: 0.5,
            future: 0.5,
        };
        assert!(split.validate().is_err());
    }

    #[test]
    fn custom_split_is_accepted() {
        let split = BudgetSplit {
            needs: 0.6,
            wants: 0.2,
            future: 0.2,
        };
        assert!(split.validate().is_ok());
    }

    #[test]
    fn date_formats() {
        let date = d(2024, 1, 7);
        assert_eq!(DateFormat::UsShort.format(date), "1/7/2024");
        assert_eq!(DateFormat::EuShort.format(date), "7/1/2024");
        assert_eq!(DateFormat::Iso.format(date), "2024-01-07");
        assert_eq!(DateFormat::default(), DateFormat::UsShort);
    }

    #[test]
    fn from_json_fills_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn from_json_reads_fields() {
        let json = r#"{"split":{"needs":0.6,"wants":0.2,"future":0.2},"date_format":"Iso"}"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.split.needs, 0.6);
        assert_eq!(settings.date_format, DateFormat::Iso);
    }

    #[test]
    fn from_json_rejects_bad_split() {
        let json = r#"{"split":{"needs":0.9,"wants":0.3,"future":0.2}}"#;
        assert!(Settings::from_json(json).is_err());
    }

    #[test]
    fn from_json_rejects_malformed() {
        assert!(Settings::from_json("not json").is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Weeks
// ═══════════════════════════════════════════════════════════════════

mod weeks {
    use super::*;

    #[test]
    fn sunday_is_its_own_week_start() {
        // 2024-01-07 is a Sunday
        assert_eq!(week_start(d(2024, 1, 7)), d(2024, 1, 7));
    }

    #[test]
    fn saturday_maps_back_six_days() {
        assert_eq!(week_start(d(2024, 1, 13)), d(2024, 1, 7));
    }

    #[test]
    fn crosses_month_and_year_boundaries() {
        // 2024-01-01 is a Monday; its week opened on 2023-12-31
        assert_eq!(week_start(d(2024, 1, 1)), d(2023, 12, 31));
        assert_eq!(week_start(d(2024, 3, 1)), d(2024, 2, 25));
    }

    #[test]
    fn week_end_is_saturday() {
        assert_eq!(week_end(d(2024, 1, 7)), d(2024, 1, 13));
    }

    #[test]
    fn same_week_boundaries() {
        assert!(same_week(d(2024, 1, 7), d(2024, 1, 13)));
        assert!(!same_week(d(2024, 1, 13), d(2024, 1, 14)));
        assert!(!same_week(d(2024, 1, 6), d(2024, 1, 7)));
    }

    #[test]
    fn week_start_saturates_at_earliest_date() {
        // NaiveDate::MIN is not a Sunday; its Sunday predates chrono's range
        assert_eq!(week_start(NaiveDate::MIN), NaiveDate::MIN);
        assert_eq!(WeekKey::containing(NaiveDate::MIN).start, NaiveDate::MIN);
    }

    #[test]
    fn week_end_saturates_at_latest_date() {
        assert_eq!(week_end(NaiveDate::MAX), NaiveDate::MAX);
        assert_eq!(WeekKey::containing(NaiveDate::MAX).end(), NaiveDate::MAX);
    }

    #[test]
    fn week_key_label_uses_format() {
        let key = WeekKey::containing(d(2024, 1, 10));
        assert_eq!(key.start, d(2024, 1, 7));
        assert_eq!(key.end(), d(2024, 1, 13));
        assert_eq!(key.label(DateFormat::UsShort), "Week of 1/7/2024");
        assert_eq!(key.label(DateFormat::Iso), "Week of 2024-01-07");
    }

    #[test]
    fn week_keys_order_chronologically() {
        assert!(WeekKey::containing(d(2024, 1, 1)) < WeekKey::containing(d(2024, 1, 8)));
    }

    #[test]
    fn category_totals_add_and_get() {
        let mut totals = CategoryTotals::default();
        totals.add(BucketCategory::Needs, 50.0);
        totals.add(BucketCategory::Needs, 5.0);
        totals.add(BucketCategory::Future, 1.5);
        assert_eq!(totals.get(BucketCategory::Needs), 55.0);
        assert_eq!(totals.get(BucketCategory::Wants), 0.0);
        assert_eq!(totals.get(BucketCategory::Future), 1.5);
    }

    #[test]
    fn week_totals_default_is_empty() {
        let totals = WeekTotals::default();
        assert_eq!(totals.count, 0);
        assert_eq!(totals.total, 0.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Budget / chart entry
// ═══════════════════════════════════════════════════════════════════

mod containers {
    use super::*;

    #[test]
    fn budget_default_is_empty() {
        let budget = Budget::default();
        assert_eq!(budget.salary, 0.0);
        assert!(budget.expenses.is_empty());
        assert_eq!(budget.settings, Settings::default());
    }

    #[test]
    fn chart_entry_overspent_flag() {
        let entry = BucketChartEntry {
            category: BucketCategory::Needs,
            label: "Needs".into(),
            share_pct: 50.0,
            allocated: 500.0,
            spent: 600.0,
            remaining: -100.0,
            percent_used: 120.0,
            display_percent: 100.0,
        };
        assert!(entry.is_overspent());
    }
}
