#[cfg(test)]
mod tests {
    use calchora::libs::summary::{sum_times, TotalResult};

    fn total(hhmm: &str, decimal: &str) -> Option<TotalResult> {
        Some(TotalResult {
            hhmm: hhmm.to_string(),
            decimal: decimal.to_string(),
        })
    }

    #[test]
    fn test_sum_canonical_entries() {
        assert_eq!(sum_times(&["01:30", "00:45"]), total("2:15", "2.25"));
    }

    #[test]
    fn test_sum_bare_digits() {
        assert_eq!(sum_times(&["0100", "0200"]), total("3:00", "3.00"));
    }

    #[test]
    fn test_sum_no_valid_entries() {
        assert_eq!(sum_times(&["", "abc", "99:99"]), None);
        assert_eq!(sum_times::<&str>(&[]), None);
        assert_eq!(sum_times(&["   "]), None);
    }

    #[test]
    fn test_sum_hours_beyond_a_day() {
        assert_eq!(sum_times(&["24:00"]), total("24:00", "24.00"));
        assert_eq!(sum_times(&["99:00", "99:00"]), total("198:00", "198.00"));
    }

    #[test]
    fn test_sum_clamps_bare_digits_before_summing() {
        assert_eq!(sum_times(&["9999"]), total("99:59", "99.98"));
    }

    #[test]
    fn test_sum_skips_invalid_entries() {
        assert_eq!(sum_times(&["01:00", "1:30", "abc", "013", "00:30"]), total("1:30", "1.50"));
        assert_eq!(sum_times(&["00:15", "01:75"]), total("0:15", "0.25"));
    }

    #[test]
    fn test_sum_trims_entries() {
        assert_eq!(sum_times(&[" 01:00 ", "\t0030"]), total("1:30", "1.50"));
    }

    #[test]
    fn test_sum_minutes_roll_over() {
        assert_eq!(sum_times(&["00:45", "00:45", "00:45"]), total("2:15", "2.25"));
        assert_eq!(sum_times(&["00:20"]), total("0:20", "0.33"));
    }

    #[test]
    fn test_sum_owned_strings() {
        let entries = vec!["01:10".to_string(), String::new(), "0050".to_string()];
        assert_eq!(sum_times(&entries), total("2:00", "2.00"));
    }

    #[test]
    fn test_total_serialization() {
        let result = sum_times(&["01:30", "00:45"]).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({ "hhmm": "2:15", "decimal": "2.25" }));

        let back: TotalResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }
}
