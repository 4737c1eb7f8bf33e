#[cfg(test)]
mod tests {
    use calchora::commands::format::write_formatted;
    use calchora::libs::messages::macros::{is_debug_mode, DEBUG_ENV};

    #[test]
    fn test_format_output_ignores_debug_mode() {
        // Debug mode is cached on first use, so it is switched on before anything reads it.
        std::env::set_var(DEBUG_ENV, "1");
        std::env::set_var("RUST_LOG", "warn");
        assert!(is_debug_mode());

        let values = vec!["0130".to_string(), "0199".to_string(), "13".to_string()];

        let mut out = Vec::new();
        write_formatted(&mut out, &values, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "01:30\n01:59\n13\n");

        let mut out = Vec::new();
        write_formatted(&mut out, &values, true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "01:30\n01:59\n\n");
    }
}
