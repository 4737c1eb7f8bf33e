#[cfg(test)]
mod tests {
    use calchora::libs::messages::Message;
    use calchora::libs::summary::sum_times;
    use calchora::libs::view::View;

    #[test]
    fn test_entries_table() {
        let entries = vec!["0130".to_string(), "13".to_string(), "00:45".to_string()];
        let table = View::entries_table(&entries);

        assert_eq!(table.len(), 4);
        let rendered = table.to_string();
        assert!(rendered.contains("01:30"));
        assert!(rendered.contains("90"));
        assert!(rendered.contains("45"));
    }

    #[test]
    fn test_total_table() {
        let total = sum_times(&["01:30", "00:45"]).unwrap();
        let rendered = View::total_table(&total).to_string();
        assert!(rendered.contains("2:15"));
        assert!(rendered.contains("2.25"));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Message::NoValidEntries.to_string(),
            "No field contains a value in valid HH:MM format (for example, 0015 becomes 00:15)"
        );
        assert_eq!(Message::TotalHhmm("2:15".to_string()).to_string(), "HH:MM: 2:15");
        assert_eq!(Message::TotalDecimal("2.25".to_string()).to_string(), "Decimal: 2.25");
        assert_eq!(Message::MenuEditSlot(2, String::new()).to_string(), "Edit field 2");
    }
}
