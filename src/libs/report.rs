//! The shareable monthly report and its messaging deep link.
//!
//! The report is rendered in a single fixed locale (Brazilian Portuguese) with
//! WhatsApp-style emphasis markers:
//!
//! ```text
//! *Meu Relatório – JANEIRO DE 2025*
//!
//! *Nome:* Maria
//! *Horas de Campo:* 4h 15m
//! *Estudos Bíblicos:* 3
//! *Créditos Extras:* 0h
//!
//! _Enviado com amor pelo Meu Relatório_ 🕊️
//! ```

use super::period::YearMonth;
use super::profile::UserProfile;
use super::summary::MonthlySummary;

pub const SHARE_BASE_URL: &str = "https://wa.me/";

const MONTHS_PT: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
];

/// `"janeiro de 2025"`
pub fn month_year_label(month: YearMonth) -> String {
    format!("{} de {}", MONTHS_PT[(month.month - 1) as usize], month.year)
}

pub fn build_message(profile: &UserProfile, summary: &MonthlySummary) -> String {
    format!(
        "*Meu Relatório – {}*\n\n\
         *Nome:* {}\n\
         *Horas de Campo:* {}\n\
         *Estudos Bíblicos:* {}\n\
         *Créditos Extras:* {}\n\n\
         _Enviado com amor pelo Meu Relatório_ 🕊️",
        month_year_label(summary.month).to_uppercase(),
        profile.display_name(),
        summary.field,
        summary.studies,
        summary.credits,
    )
}

/// Digits-only destination number, or `None` when no contact is set.
pub fn destination(contact: &str) -> Option<String> {
    if contact.is_empty() {
        return None;
    }
    Some(contact.chars().filter(|c| c.is_ascii_digit()).collect())
}

/// Characters `encodeURIComponent` leaves as they are on top of `A-Za-z0-9-_.~`.
const KEPT_ESCAPES: [(&str, &str); 5] = [("%21", "!"), ("%27", "'"), ("%28", "("), ("%29", ")"), ("%2A", "*")];

/// Percent-encodes `text` the way browsers encode a URI component: spaces
/// become `%20`, never `+`.
pub fn encode_component(text: &str) -> String {
    KEPT_ESCAPES
        .iter()
        .fold(urlencoding::encode(text).into_owned(), |encoded, (escape, raw)| encoded.replace(escape, raw))
}

/// Deep link that opens a chat with `destination` prefilled with `message`.
pub fn share_link(destination: &str, message: &str) -> String {
    format!("{}{}?text={}", SHARE_BASE_URL, destination, encode_component(message))
}
