//! Human-readable rendering of a query result.

use crate::InteractionRecord;

/// Printed when no supplied pair has a known interaction.
pub const NO_INTERACTION: &str = "No interaction";

/// `"<LABEL>: <description>"` for a known interaction, [`NO_INTERACTION`] otherwise.
///
/// A record whose severity label was not recognised at load time counts as
/// no interaction.
pub fn impact_line(interaction: Option<&InteractionRecord>) -> String {
    match interaction {
        Some(record) if record.severity().is_known() => format!(
            "{}: {}",
            record.severity().label().to_uppercase(),
            record.description()
        ),
        _ => NO_INTERACTION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InteractionIndex, Severity, SeverityTable};

    #[test]
    fn known_severity_is_upper_cased() {
        let mut builder = InteractionIndex::builder();
        builder.push(
            ["Sildenafil".to_string(), "Echinacea".to_string()],
            SeverityTable::standard().resolve("Major"),
            "The metabolism of Sildenafil can be increased when combined with Echinacea.",
        );
        let index = builder.finish();
        assert_eq!(
            impact_line(index.lookup("echinacea", "sildenafil")),
            "MAJOR: The metabolism of Sildenafil can be increased when combined with Echinacea."
        );
    }

    #[test]
    fn missing_or_unranked_is_no_interaction() {
        assert_eq!(impact_line(None), NO_INTERACTION);

        let mut builder = InteractionIndex::builder();
        builder.push(
            ["a".to_string(), "b".to_string()],
            Severity::new("unknown", 0),
            "ignored",
        );
        let index = builder.finish();
        assert_eq!(impact_line(index.lookup("a", "b")), "No interaction");
    }
}
