use crate::utils::token::{FormatTokenOptions, format_token};
use candid::CandidType;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use thiserror::Error as ThisError;

pub const DEFAULT_DECIMALS: u8 = 8;

///
/// Token
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Token {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl Token {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals: DEFAULT_DECIMALS,
        }
    }

    #[must_use]
    pub fn icp() -> Self {
        Self::new("Internet Computer", "ICP")
    }
}

///
/// IcrcTokenMetadata
/// Token metadata with the fields the dashboard requires.
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct IcrcTokenMetadata {
    pub name: String,
    pub symbol: String,
    pub fee: u64,
    pub decimals: u8,
}

impl IcrcTokenMetadata {
    #[must_use]
    pub fn token(&self) -> Token {
        Token {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            decimals: self.decimals,
        }
    }
}

///
/// TokenAmountError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TokenAmountError {
    #[error("invalid amount '{0}'")]
    InvalidFormat(String),

    #[error("amount '{amount}' has more than {decimals} decimals")]
    TooManyDecimals { amount: String, decimals: u8 },

    #[error("amount '{0}' overflows")]
    Overflow(String),
}

///
/// TokenAmount
/// An amount in base units (e8s for an 8 decimals token) tagged with its token.
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct TokenAmount {
    amount: u64,
    token: Token,
}

impl TokenAmount {
    #[must_use]
    pub const fn from_e8s(amount: u64, token: Token) -> Self {
        Self { amount, token }
    }

    /// Parse a decimal string ("1234567.8901") into base units.
    pub fn from_string(amount: &str, token: Token) -> Result<Self, TokenAmountError> {
        let trimmed = amount.trim();
        let (integral, fractional) = trimmed.split_once('.').unwrap_or((trimmed, ""));

        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if (integral.is_empty() && fractional.is_empty())
            || !all_digits(integral)
            || !all_digits(fractional)
        {
            return Err(TokenAmountError::InvalidFormat(amount.to_string()));
        }

        let decimals = usize::from(token.decimals);
        if fractional.len() > decimals {
            return Err(TokenAmountError::TooManyDecimals {
                amount: amount.to_string(),
                decimals: token.decimals,
            });
        }

        let overflow = || TokenAmountError::Overflow(amount.to_string());
        let scale = 10u64.checked_pow(u32::from(token.decimals)).ok_or_else(overflow)?;

        let whole = if integral.is_empty() {
            0
        } else {
            integral.parse::<u64>().map_err(|_| overflow())?
        };
        let frac = if fractional.is_empty() {
            0
        } else {
            let padded = format!("{fractional:0<decimals$}");
            padded.parse::<u64>().map_err(|_| overflow())?
        };

        let base = whole
            .checked_mul(scale)
            .and_then(|v| v.checked_add(frac))
            .ok_or_else(overflow)?;

        Ok(Self::from_e8s(base, token))
    }

    #[must_use]
    pub const fn to_e8s(&self) -> u64 {
        self.amount
    }

    #[must_use]
    pub const fn token(&self) -> &Token {
        &self.token
    }

    /// Formatted amount without the symbol.
    #[must_use]
    pub fn format(&self, options: FormatTokenOptions) -> String {
        format_token(self.amount, self.token.decimals, options)
    }
}

impl Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.format(FormatTokenOptions::default()),
            self.token.symbol
        )
    }
}

///
/// TESTS
///
