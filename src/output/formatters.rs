//! Formatting utilities for terminal output

use crate::core::Chain;
use std::time::Duration;

/// Format a chain as an arrow-joined sequence
#[must_use]
pub fn chain_to_arrows(chain: &Chain) -> String {
    chain
        .words()
        .iter()
        .map(std::string::ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Format a duration with a sensible unit
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    if duration.as_secs() >= 1 {
        format!("{:.2}s", duration.as_secs_f64())
    } else if duration.as_millis() >= 1 {
        format!("{}ms", duration.as_millis())
    } else {
        format!("{}us", duration.as_micros())
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a success rate as a bar with percentage
#[must_use]
pub fn rate_bar(rate: f64, width: usize) -> String {
    format!("{} {:5.1}%", create_progress_bar(rate, 1.0, width), rate * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn chain_arrows() {
        let chain = Chain::new(vec![
            Word::new("CAT").unwrap(),
            Word::new("COT").unwrap(),
        ]);
        assert_eq!(chain_to_arrows(&chain), "CAT -> COT");
    }

    #[test]
    fn empty_chain_formats_empty() {
        assert_eq!(chain_to_arrows(&Chain::empty()), "");
    }

    #[test]
    fn duration_units() {
        assert_eq!(format_duration(Duration::from_secs(2)), "2.00s");
        assert_eq!(format_duration(Duration::from_millis(15)), "15ms");
        assert_eq!(format_duration(Duration::from_micros(80)), "80us");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
