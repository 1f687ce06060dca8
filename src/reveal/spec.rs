use std::fmt;

/// Default reveal length when a statistic doesn't specify one.
pub const DEFAULT_DURATION_MS: i64 = 2000;

/// Immutable configuration for one animated statistic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterSpec {
    pub target: i64,
    /// Zero or negative completes on the first tick.
    pub duration_ms: i64,
    pub prefix: String,
    pub suffix: String,
    /// When set, the number is never animated and this text is shown as-is.
    pub literal_override: Option<String>,
}

impl CounterSpec {
    pub fn new(target: i64) -> Self {
        Self {
            target,
            duration_ms: DEFAULT_DURATION_MS,
            prefix: String::new(),
            suffix: String::new(),
            literal_override: None,
        }
    }

    pub fn duration_ms(mut self, duration_ms: i64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Empty strings are treated as "no override".
    pub fn literal(mut self, literal: impl Into<String>) -> Self {
        let literal = literal.into();
        self.literal_override = (!literal.is_empty()).then_some(literal);
        self
    }

    pub fn is_literal(&self) -> bool {
        self.literal_override.is_some()
    }

    /// The state shown before any animation starts.
    pub fn initialize(&self) -> RenderableState {
        self.state_at(0)
    }

    pub(crate) fn state_at(&self, value: i64) -> RenderableState {
        match &self.literal_override {
            Some(text) => RenderableState::Literal(text.clone()),
            None => RenderableState::Value {
                prefix: self.prefix.clone(),
                value,
                suffix: self.suffix.clone(),
            },
        }
    }
}

/// What a hosting view should display right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderableState {
    Value {
        prefix: String,
        value: i64,
        suffix: String,
    },
    Literal(String),
}

impl RenderableState {
    pub fn value(&self) -> Option<i64> {
        match self {
            RenderableState::Value { value, .. } => Some(*value),
            RenderableState::Literal(_) => None,
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RenderableState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderableState::Value {
                prefix,
                value,
                suffix,
            } => write!(f, "{prefix}{value}{suffix}"),
            RenderableState::Literal(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_starts_at_zero_with_affixes() {
        let spec = CounterSpec::new(200).suffix("+");
        let state = spec.initialize();
        assert_eq!(state.value(), Some(0));
        assert_eq!(state.render(), "0+");

        let spec = CounterSpec::new(-15).prefix("$").suffix("k");
        assert_eq!(spec.initialize().render(), "$0k");
    }

    #[test]
    fn literal_override_ignores_target_and_affixes() {
        let spec = CounterSpec::new(42).prefix("~").suffix("%").literal("N/A");
        assert!(spec.is_literal());
        assert_eq!(spec.initialize().render(), "N/A");
        assert_eq!(spec.initialize().value(), None);
    }

    #[test]
    fn empty_literal_is_no_override() {
        let spec = CounterSpec::new(7).literal("");
        assert!(!spec.is_literal());
        assert_eq!(spec.initialize().render(), "0");
    }

    #[test]
    fn default_duration_applies() {
        assert_eq!(CounterSpec::new(1).duration_ms, DEFAULT_DURATION_MS);
    }
}
