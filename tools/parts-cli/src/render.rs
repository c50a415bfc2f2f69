use std::fmt;

use parts_session::SessionView;

/// The word bank panels, one line per category.
pub struct BankText<'a>(pub &'a SessionView);

/// Plain-text frame of the whole exercise.
pub struct FrameText<'a>(pub &'a SessionView);

impl fmt::Display for BankText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.0.panels.iter().map(|p| p.heading.len() + 1).max().unwrap_or(0) + 2;
        for panel in &self.0.panels {
            write!(f, "{:<width$}", format!("{}:", panel.heading), width = width)?;
            let words: Vec<String> =
                panel.words.iter().map(|w| format!("[{}] {}", w.id, w.text)).collect();
            writeln!(f, "{}", words.join("  "))?;
        }
        Ok(())
    }
}

impl fmt::Display for FrameText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        writeln!(f, "{}", view.title)?;
        writeln!(f, "{}", "=".repeat(view.title.len()))?;
        writeln!(f, "{}", BankText(view))?;

        match view.placeholder {
            Some(placeholder) => writeln!(f, "  {}", placeholder)?,
            None => {
                let tokens: Vec<String> =
                    view.tokens.iter().map(|t| format!("({}) {}", t.index, t.text)).collect();
                writeln!(f, "  {}", tokens.join("  "))?;
            }
        }

        writeln!(f, "{} {}", view.sentence_heading, view.display_line)?;
        writeln!(f, "[{}]", view.check_label)?;
        if let Some(feedback) = view.feedback {
            writeln!(f, "{}", feedback)?;
        }
        Ok(())
    }
}
