#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use fieldlog::libs::entry::{ActivityKind, DailyEntry, ExtraActivity};
    use fieldlog::libs::profile::UserProfile;
    use fieldlog::libs::report::{build_message, destination, share_link, SHARE_BASE_URL};
    use fieldlog::libs::summary::MonthlySummary;

    fn january_summary() -> MonthlySummary {
        let entries = vec![
            DailyEntry::new("2025-01-10".to_string(), 2, 30, 1, None),
            DailyEntry::new("2025-01-12".to_string(), 1, 45, 2, None),
        ];
        let extras = vec![ExtraActivity::new(ActivityKind::Ldc, "2025-01-05".to_string(), 3, 0)];
        MonthlySummary::compute(&entries, &extras, NaiveDate::from_ymd_opt(2025, 1, 20).unwrap())
    }

    #[test]
    fn test_message_template() {
        let profile = UserProfile {
            name: "Maria".to_string(),
            ..UserProfile::default()
        };

        let message = build_message(&profile, &january_summary());

        assert_eq!(
            message,
            "*Meu Relatório – JANEIRO DE 2025*\n\n\
             *Nome:* Maria\n\
             *Horas de Campo:* 4h 15m\n\
             *Estudos Bíblicos:* 3\n\
             *Créditos Extras:* 3h\n\n\
             _Enviado com amor pelo Meu Relatório_ 🕊️"
        );
    }

    #[test]
    fn test_message_falls_back_to_generic_name() {
        let message = build_message(&UserProfile::default(), &january_summary());
        assert!(message.contains("*Nome:* Pioneiro\n"));
    }

    #[test]
    fn test_destination_is_digits_only() {
        assert_eq!(destination("(11) 99999-9999").as_deref(), Some("11999999999"));
        assert_eq!(destination(""), None);
    }

    #[test]
    fn test_share_link_encodes_message() {
        let link = share_link("11999999999", "*Nome:* Maria & Ana\nok");

        assert_eq!(link, format!("{}11999999999?text=*Nome%3A*%20Maria%20%26%20Ana%0Aok", SHARE_BASE_URL));
        assert!(!link.contains('+'));
        let parsed = reqwest::Url::parse(&link).unwrap();
        let (_, text) = parsed.query_pairs().find(|(k, _)| k == "text").unwrap();
        assert_eq!(text, "*Nome:* Maria & Ana\nok");
    }

    #[test]
    fn test_share_link_for_full_report_has_no_form_encoding() {
        let link = share_link("11999999999", &build_message(&UserProfile::default(), &january_summary()));

        assert!(link.contains("Meu%20Relat%C3%B3rio"));
        assert!(!link.contains('+'));
        assert!(!link.contains(' '));
    }
}
