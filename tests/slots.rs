#[cfg(test)]
mod tests {
    use calchora::libs::slots::{EntrySlots, SlotError, SlotUpdate, DEFAULT_SLOTS};

    #[test]
    fn test_new_form_has_at_least_one_slot() {
        assert_eq!(EntrySlots::default().len(), DEFAULT_SLOTS);
        assert_eq!(EntrySlots::new(5).len(), 5);
        assert_eq!(EntrySlots::new(0).len(), 1);
        assert!(EntrySlots::new(2).values().iter().all(String::is_empty));
    }

    #[test]
    fn test_from_values() {
        let slots = EntrySlots::from_values(["0130", "abc"]);
        assert_eq!(slots.values(), ["0130", "abc"]);

        let empty = EntrySlots::from_values(Vec::<String>::new());
        assert_eq!(empty.len(), 1);
        assert!(!empty.is_empty());
    }

    #[test]
    fn test_add_and_insert() {
        let mut slots = EntrySlots::new(1);
        slots.set(0, "01:00").unwrap();

        assert_eq!(slots.add(), 1);
        slots.insert(0).unwrap();
        assert_eq!(slots.values(), ["", "01:00", ""]);

        slots.insert(3).unwrap();
        assert_eq!(slots.len(), 4);
        assert_eq!(slots.insert(9), Err(SlotError::OutOfRange { index: 9, len: 4 }));
    }

    #[test]
    fn test_remove_shifts_following_slots() {
        let mut slots = EntrySlots::from_values(["01:00", "02:00", "03:00"]);
        assert_eq!(slots.remove(1), Ok("02:00".to_string()));
        assert_eq!(slots.values(), ["01:00", "03:00"]);
        assert_eq!(slots.get(1), Some("03:00"));
        assert_eq!(slots.get(2), None);
    }

    #[test]
    fn test_remove_keeps_last_slot() {
        let mut slots = EntrySlots::from_values(["01:00"]);
        assert_eq!(slots.remove(0), Err(SlotError::LastSlot));
        assert_eq!(slots.values(), ["01:00"]);
        assert_eq!(slots.remove(3), Err(SlotError::OutOfRange { index: 3, len: 1 }));
    }

    #[test]
    fn test_input_keeps_partial_value() {
        let mut slots = EntrySlots::new(3);
        let update = slots.input(0, "01:3").unwrap();
        assert_eq!(
            update,
            SlotUpdate {
                value: "013".to_string(),
                focus: None
            }
        );
        assert_eq!(slots.get(0), Some("013"));
    }

    #[test]
    fn test_input_requests_focus_on_next_slot() {
        let mut slots = EntrySlots::new(3);
        assert_eq!(slots.input(0, "0130").unwrap().focus, Some(1));
        assert_eq!(slots.input(1, "012345").unwrap(), SlotUpdate { value: "0123".to_string(), focus: Some(2) });
        // No slot after the last one
        assert_eq!(slots.input(2, "0045").unwrap().focus, None);
    }

    #[test]
    fn test_input_out_of_range() {
        let mut slots = EntrySlots::new(1);
        assert_eq!(slots.input(1, "0130"), Err(SlotError::OutOfRange { index: 1, len: 1 }));
    }

    #[test]
    fn test_blur_commits_or_clears() {
        let mut slots = EntrySlots::new(2);
        slots.input(0, "0199").unwrap();
        slots.input(1, "13").unwrap();

        assert_eq!(slots.blur(0).unwrap(), "01:59");
        assert_eq!(slots.blur(1).unwrap(), "");
        assert_eq!(slots.values(), ["01:59", ""]);
    }

    #[test]
    fn test_submit_normalizes_slots() {
        let mut slots = EntrySlots::from_values(["0130", "00:45", "13", "x"]);
        let total = slots.submit().unwrap();

        assert_eq!(total.hhmm, "2:15");
        assert_eq!(total.decimal, "2.25");
        assert_eq!(slots.values(), ["01:30", "00:45", "", ""]);
    }

    #[test]
    fn test_submit_without_valid_entries_leaves_slots() {
        let mut slots = EntrySlots::from_values(["", "abc", "13"]);
        assert_eq!(slots.submit(), Err(SlotError::NoValidEntries));
        assert_eq!(slots.values(), ["", "abc", "13"]);
    }

    #[test]
    fn test_submissions_are_independent() {
        let mut slots = EntrySlots::from_values(["0100"]);
        assert_eq!(slots.submit().unwrap().hhmm, "1:00");
        assert_eq!(slots.submit().unwrap().hhmm, "1:00");

        slots.add();
        slots.input(1, "0030").unwrap();
        assert_eq!(slots.submit().unwrap().hhmm, "1:30");
    }

    #[test]
    fn test_clear_resets_form() {
        let mut slots = EntrySlots::from_values(["0130", "00:45", "13", "0200"]);
        slots.submit().unwrap();

        slots.clear(DEFAULT_SLOTS);
        assert_eq!(slots.len(), DEFAULT_SLOTS);
        assert!(slots.values().iter().all(String::is_empty));
        assert_eq!(slots.submit(), Err(SlotError::NoValidEntries));

        slots.clear(0);
        assert_eq!(slots.values(), [""]);
    }
}
