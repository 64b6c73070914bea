use crate::animation::ViewportOptions;

/// Visible ratio at which achievement counters start counting.
pub const COUNT_UP_THRESHOLD: f64 = 0.3;
/// Counters restart each time they come back into view.
pub const COUNT_UP_VIEWPORT: ViewportOptions = ViewportOptions {
    once: false,
    amount: COUNT_UP_THRESHOLD,
};

/// Animated number that eases from `start` to `end` once in view.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    pub start: f64,
    pub end: f64,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub prefix: String,
    pub suffix: String,
    pub decimals: usize,
}

impl Default for CountUp {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 0.0,
            duration_ms: 2000.0,
            delay_ms: 0.0,
            prefix: String::new(),
            suffix: String::new(),
            decimals: 0,
        }
    }
}

impl CountUp {
    pub fn to(end: f64) -> Self {
        Self {
            end,
            ..Self::default()
        }
    }

    pub fn prefix(self, prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..self
        }
    }

    pub fn suffix(self, suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            ..self
        }
    }

    pub fn duration_ms(self, duration_ms: f64) -> Self {
        Self {
            duration_ms,
            ..self
        }
    }

    pub fn delay_ms(self, delay_ms: f64) -> Self {
        Self { delay_ms, ..self }
    }

    pub fn decimals(self, decimals: usize) -> Self {
        Self { decimals, ..self }
    }

    /// Value `elapsed_ms` after the counter was triggered, eased out cubically.
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        let elapsed = elapsed_ms - self.delay_ms;
        if elapsed < 0.0 {
            return self.start;
        }
        if elapsed >= self.duration_ms {
            return self.end;
        }
        let progress = elapsed / self.duration_ms;
        let eased = 1.0 - (1.0 - progress).powi(3);
        self.start + (self.end - self.start) * eased
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms - self.delay_ms >= self.duration_ms
    }

    pub fn format(&self, value: f64) -> String {
        let number = if self.decimals > 0 {
            format!("{:.*}", self.decimals, value)
        } else {
            format!("{}", value.floor() as i64)
        };
        format!("{}{}{}", self.prefix, number, self.suffix)
    }
}
