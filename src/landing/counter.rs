pub const COUNTER_DURATION_MS: f64 = 2000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatCounter {
    pub start: u64,
    pub end: u64,
    pub suffix: &'static str,
    pub caption: &'static str,
}

pub const STAT_COUNTERS: [StatCounter; 3] = [
    StatCounter {
        start: 0,
        end: 10_000,
        suffix: "+",
        caption: "Active users",
    },
    StatCounter {
        start: 0,
        end: 250_000,
        suffix: "+",
        caption: "Messages answered",
    },
    StatCounter {
        start: 0,
        end: 98,
        suffix: "%",
        caption: "Satisfaction rate",
    },
];

impl StatCounter {
    pub fn progress(elapsed_ms: f64) -> f64 {
        (elapsed_ms / COUNTER_DURATION_MS).clamp(0.0, 1.0)
    }

    /// Linear interpolation, floored, as the frame at `elapsed_ms` shows it.
    pub fn value_at(&self, elapsed_ms: f64) -> u64 {
        let start = self.start as f64;
        let span = self.end as f64 - start;
        (Self::progress(elapsed_ms) * span + start).floor() as u64
    }

    pub fn label_at(&self, elapsed_ms: f64) -> String {
        format!("{}{}", group_thousands(self.value_at(elapsed_ms)), self.suffix)
    }

    pub fn is_finished(elapsed_ms: f64) -> bool {
        Self::progress(elapsed_ms) >= 1.0
    }
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
