/// Display format of a counter, resolved once from its configured target.
///
/// The original targets are short marketing strings like `"50K+"`, `"30%"`,
/// `"24/7"`, `"100+"`. The format tag is derived a single time at
/// construction instead of re-sniffing the target text on every tick.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CounterFormat {
    /// `"{floor}K+"` — thousands with a plus suffix.
    Thousands,
    /// `"{floor}%"` — percentage.
    Percent,
    /// The source text rendered verbatim, never numerically animated.
    Literal(String),
    /// `"{floor}+"` — plain count with a plus suffix.
    Plus,
}

impl CounterFormat {
    /// Resolve a target string into its format tag and numeric target.
    ///
    /// The numeric target is the digits of the string run together
    /// (`"50K+"` → 50, `"24/7"` → 247); a digitless target degrades to 0.
    pub fn resolve(target: &str) -> (Self, u64) {
        let digits: String = target.chars().filter(|c| c.is_ascii_digit()).collect();
        let numeric = digits.parse::<u64>().unwrap_or(0);

        let format = if target.contains('K') {
            Self::Thousands
        } else if target.contains('%') {
            Self::Percent
        } else if target.contains('/') {
            Self::Literal(target.to_owned())
        } else {
            Self::Plus
        };
        (format, numeric)
    }

    /// Render a running value in this format.
    pub fn render(&self, value: f64) -> String {
        let floored = value.max(0.0).floor() as u64;
        match self {
            Self::Thousands => format!("{floored}K+"),
            Self::Percent => format!("{floored}%"),
            Self::Literal(text) => text.clone(),
            Self::Plus => format!("{floored}+"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/counter/format.rs"]
mod tests;
