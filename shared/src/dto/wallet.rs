use serde::{Deserialize, Serialize};

use super::lenient;

/// Wallet snapshot from `GET /wallet/`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct WalletSummary {
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub current_balance: f64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub total_earned: f64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub total_withdrawn: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Credit,
    Debit,
    Withdrawal,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

/// How an amount is colored when displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountTone {
    Positive,
    Negative,
}

/// A wallet ledger entry. Records are immutable once received.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "type", alias = "transaction_type")]
    pub kind: TransactionKind,
    #[serde(deserialize_with = "lenient::f64_or_zero")]
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    pub status: TransactionStatus,
    #[serde(default, alias = "created_at")]
    pub date: String,
    #[serde(default, alias = "fileName", skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(
        default,
        alias = "fileSize",
        deserialize_with = "lenient::opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub file_size: Option<f64>,
}

impl Transaction {
    /// Display tone derived from the amount's sign.
    pub fn tone(&self) -> AmountTone {
        if self.amount < 0.0 {
            AmountTone::Negative
        } else {
            AmountTone::Positive
        }
    }

    /// Whether the amount's sign agrees with the transaction kind:
    /// credits are non-negative, debits and withdrawals non-positive.
    pub fn sign_matches_kind(&self) -> bool {
        match self.kind {
            TransactionKind::Credit => self.amount >= 0.0,
            TransactionKind::Debit | TransactionKind::Withdrawal => self.amount <= 0.0,
        }
    }
}

/// Body of `POST /wallet/withdraw`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WithdrawRequest {
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upi_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
}

/// Acknowledgement of a withdrawal request. Every field is optional because
/// the backend only guarantees a success status.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WithdrawalReceipt {
    #[serde(default, alias = "id", skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
