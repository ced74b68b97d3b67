use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillStatus {
    Due,
    Upcoming,
    Paid,
}

impl BillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Due => "Due",
            Self::Upcoming => "Upcoming",
            Self::Paid => "Paid",
        }
    }
}

impl std::fmt::Display for BillStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bill {
    pub name: String,
    pub amount: Decimal,
    /// Human label such as "Tomorrow" or "in 3 days".
    pub due: String,
    pub status: BillStatus,
}

impl Bill {
    pub fn new(name: String, amount: Decimal, due: String, status: BillStatus) -> Self {
        Self {
            name,
            amount,
            due,
            status,
        }
    }

    pub fn is_paid(&self) -> bool {
        self.status == BillStatus::Paid
    }

    /// Mark the bill paid. Returns false if it already was.
    pub fn pay(&mut self) -> bool {
        if self.is_paid() {
            return false;
        }
        self.status = BillStatus::Paid;
        true
    }
}
