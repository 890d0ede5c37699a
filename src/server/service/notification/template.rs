//! Results mail rendering.

use crate::server::{mail::MailMessage, model::completion::StudentResultSummary};

pub const RESULTS_SUBJECT: &str = "Résultats de votre formation";

/// Renders the results mail for one student.
pub fn render(summary: &StudentResultSummary) -> MailMessage {
    let items: String = summary
        .results
        .iter()
        .map(|result| {
            format!(
                "<li>Examen #{} : {} - {}</li>\n",
                result.exam_id,
                result.score,
                if result.passed { "Réussi" } else { "Échoué" }
            )
        })
        .collect();

    let html = format!(
        "<!DOCTYPE html>\n\
<html>\n\
<head>\n\
    <title>{subject}</title>\n\
</head>\n\
<body>\n\
    <h1>Bonjour {first_name} {last_name},</h1>\n\
    <p>Vos résultats pour la formation sont disponibles :</p>\n\
    <h2>Résultats des examens</h2>\n\
    <ul>\n\
{items}</ul>\n\
    <h2>Résultat final</h2>\n\
    <p>Votre résultat final est : <strong>{verdict}</strong></p>\n\
    <p>Merci de votre participation !</p>\n\
</body>\n\
</html>\n",
        subject = RESULTS_SUBJECT,
        first_name = escape_html(&summary.first_name),
        last_name = escape_html(&summary.last_name),
        items = items,
        verdict = summary.final_result.label(),
    );

    MailMessage {
        to: summary.email.clone(),
        subject: RESULTS_SUBJECT.to_string(),
        html,
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
