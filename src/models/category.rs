use crate::error::Error;

/// Expense category. The set is fixed; records never carry anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Transportation,
    Bills,
    Groceries,
    Entertainment,
    Healthcare,
    Shopping,
    Dining,
    Travel,
    Education,
}

impl Category {
    pub(crate) const ALL: [Category; 10] = [
        Self::Food,
        Self::Transportation,
        Self::Bills,
        Self::Groceries,
        Self::Entertainment,
        Self::Healthcare,
        Self::Shopping,
        Self::Dining,
        Self::Travel,
        Self::Education,
    ];

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Bills => "Bills",
            Self::Groceries => "Groceries",
            Self::Entertainment => "Entertainment",
            Self::Healthcare => "Healthcare",
            Self::Shopping => "Shopping",
            Self::Dining => "Dining",
            Self::Travel => "Travel",
            Self::Education => "Education",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}
