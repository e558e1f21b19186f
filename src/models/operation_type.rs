//! Catalog of transaction operation types.
//!
//! Each operation type has a fixed numeric code used on the wire and in the
//! `transactions.operation_type` column, and a sign rule deciding whether a
//! transaction of that type takes credit away from the account or gives it
//! back.
//!
//! | Code | Operation                 | Sign     |
//! |------|---------------------------|----------|
//! | 1    | Cash withdrawal           | negative |
//! | 2    | Installment purchase      | negative |
//! | 3    | Cash-advance withdrawal   | negative |
//! | 4    | Payment                   | positive |

use rust_decimal::Decimal;

use crate::error::AppError;

/// Category of a transaction.
///
/// Stored as its integer code (`INTEGER` column) through the `repr(i32)`
/// discriminants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[repr(i32)]
pub enum OperationType {
    CashWithdrawal = 1,
    InstallmentPurchase = 2,
    CashAdvanceWithdrawal = 3,
    Payment = 4,
}

impl OperationType {
    /// Every operation type, in code order.
    pub const ALL: [OperationType; 4] = [
        OperationType::CashWithdrawal,
        OperationType::InstallmentPurchase,
        OperationType::CashAdvanceWithdrawal,
        OperationType::Payment,
    ];

    /// Resolve a request's operation type code.
    ///
    /// # Errors
    ///
    /// - `InvalidOperationType`: the code is absent or not in 1..=4
    pub fn resolve(code: Option<i64>) -> Result<Self, AppError> {
        match code {
            Some(1) => Ok(OperationType::CashWithdrawal),
            Some(2) => Ok(OperationType::InstallmentPurchase),
            Some(3) => Ok(OperationType::CashAdvanceWithdrawal),
            Some(4) => Ok(OperationType::Payment),
            _ => Err(AppError::InvalidOperationType),
        }
    }

    /// Numeric code exposed to clients.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            OperationType::CashWithdrawal => "cash withdrawal",
            OperationType::InstallmentPurchase => "installment purchase",
            OperationType::CashAdvanceWithdrawal => "cash-advance withdrawal",
            OperationType::Payment => "payment",
        }
    }

    /// Whether transactions of this type reduce the available credit limit.
    pub fn is_negative(self) -> bool {
        !matches!(self, OperationType::Payment)
    }

    /// Apply the canonical sign of this operation type to an amount.
    ///
    /// Only the magnitude of `amount` is used; a caller-supplied sign is
    /// discarded.
    pub fn apply_sign(self, amount: Decimal) -> Decimal {
        let magnitude = amount.abs();
        if self.is_negative() { -magnitude } else { magnitude }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.code())
    }
}
