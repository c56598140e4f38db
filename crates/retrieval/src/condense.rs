//! Condense-question prompt rendering.
//!
//! Follow-up questions lean on the conversation ("Wie hoch ist er?"), so the
//! service first rewrites them into standalone questions. The rewrite prompt
//! is fixed and German-only; it is rendered locally and shipped with each
//! request so the service needs no prompt configuration of its own.

use crate::types::Turn;
use handlebars::Handlebars;
use lugpt_core::{AppError, AppResult};
use serde::Serialize;

/// Standalone-question rewrite prompt, German output enforced.
const CONDENSE_TEMPLATE: &str = "\
Angesichts der folgenden Konversation und einer anschließenden Frage, \
formulieren Sie die Nachfrage so um, dass sie als eigenständige Frage gestellt werden kann.
Alle Ausgaben müssen in Deutsch sein.
Wenn Sie die Antwort nicht kennen, sagen Sie einfach, dass Sie es nicht wissen, \
versuchen Sie nicht, eine Antwort zu erfinden.

Chatverlauf:
{{chat_history}}
Nachfrage: {{question}}
Eigenständige Frage:
";

#[derive(Serialize)]
struct CondenseVars<'a> {
    chat_history: String,
    question: &'a str,
}

/// Render the condense prompt for a question and its preceding turns.
pub fn render_condense_prompt(history: &[Turn], question: &str) -> AppResult<String> {
    let mut handlebars = Handlebars::new();

    // Plain text output, no HTML escaping
    handlebars.register_escape_fn(handlebars::no_escape);

    handlebars
        .register_template_string("condense", CONDENSE_TEMPLATE)
        .map_err(|e| AppError::Other(format!("Failed to register condense template: {}", e)))?;

    let vars = CondenseVars {
        chat_history: format_history(history),
        question,
    };

    handlebars
        .render("condense", &vars)
        .map_err(|e| AppError::Other(format!("Failed to render condense template: {}", e)))
}

/// Format prior turns as alternating speaker lines, oldest first.
fn format_history(history: &[Turn]) -> String {
    history
        .iter()
        .map(|turn| format!("Mensch: {}\nAssistent: {}", turn.question, turn.answer))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_question() {
        let rendered = render_condense_prompt(&[], "Wie hoch ist der Pilatus?").unwrap();
        assert!(rendered.contains("Nachfrage: Wie hoch ist der Pilatus?"));
        assert!(rendered.contains("Eigenständige Frage:"));
    }

    #[test]
    fn test_render_contains_history_in_order() {
        let history = vec![
            Turn::new("Erste Frage", "Erste Antwort"),
            Turn::new("Zweite Frage", "Zweite Antwort"),
        ];

        let rendered = render_condense_prompt(&history, "Und dann?").unwrap();

        let first = rendered.find("Mensch: Erste Frage").unwrap();
        let second = rendered.find("Mensch: Zweite Frage").unwrap();
        assert!(first < second);
        assert!(rendered.contains("Assistent: Erste Antwort"));
        assert!(rendered.contains("Assistent: Zweite Antwort"));
    }

    #[test]
    fn test_render_no_html_escaping() {
        let rendered = render_condense_prompt(&[], "Was ist <schnell> & \"gut\"?").unwrap();
        assert!(rendered.contains("Was ist <schnell> & \"gut\"?"));
    }

    #[test]
    fn test_format_history_empty() {
        assert_eq!(format_history(&[]), "");
    }
}
