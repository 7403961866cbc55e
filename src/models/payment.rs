use crate::error::Error;

/// How an expense was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMode {
    Cash,
    Online,
    NetBanking,
    CreditCard,
    DebitCard,
    Wallet,
}

impl PaymentMode {
    pub(crate) const ALL: [PaymentMode; 6] = [
        Self::Cash,
        Self::Online,
        Self::NetBanking,
        Self::CreditCard,
        Self::DebitCard,
        Self::Wallet,
    ];

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Online => "Online",
            Self::NetBanking => "NetBanking",
            Self::CreditCard => "Credit Card",
            Self::DebitCard => "Debit Card",
            Self::Wallet => "Wallet",
        }
    }
}

impl std::fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| Error::UnknownPaymentMode(s.to_string()))
    }
}
