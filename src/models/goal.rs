use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalKind {
    /// Accumulate money toward a target.
    Saving,
    /// Keep a spending category under a cap.
    Challenge,
}

impl GoalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Saving => "Saving",
            Self::Challenge => "Challenge",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "saving" | "savings" | "save" => Some(Self::Saving),
            "challenge" => Some(Self::Challenge),
            _ => None,
        }
    }

    pub fn all() -> &'static [GoalKind] {
        &[Self::Saving, Self::Challenge]
    }
}

impl std::fmt::Display for GoalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub title: String,
    pub target: Decimal,
    pub current: Decimal,
    pub kind: GoalKind,
}

impl Goal {
    /// A fresh goal with nothing put toward it yet.
    pub fn new(title: String, target: Decimal, kind: GoalKind) -> Self {
        Self {
            title,
            target,
            current: Decimal::ZERO,
            kind,
        }
    }
}
