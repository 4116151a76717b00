//! # Wallet Page
//!
//! Balance, lifetime totals and recent ledger entries, plus withdrawals.
//! A withdrawal changes the balance only once the backend has accepted it;
//! until then the page shows the amount as pending.

use super::{require_credential, PagePhase, Redirect};
use crate::api::wallet::validate_amount;
use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use lib_utils::today_iso_date;
use parking_lot::RwLock;
use shared::{Transaction, TransactionKind, TransactionStatus, WalletSummary, WithdrawalReceipt};
use std::sync::Arc;

/// Ledger entries fetched on load.
pub const TRANSACTIONS_PAGE_SIZE: u32 = 20;
pub const WITHDRAWAL_DESCRIPTION: &str = "Bank Withdrawal Request";
pub const WITHDRAWAL_NOTICE: &str =
    "Withdrawal request submitted! You'll receive the amount within 2-3 business days.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletState {
    pub phase: PagePhase,
    pub summary: WalletSummary,
    pub transactions: Vec<Transaction>,
    /// Amount of the withdrawal awaiting the backend's answer.
    pub pending_withdrawal: Option<f64>,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl WalletState {
    pub fn in_flight(&self) -> bool {
        self.pending_withdrawal.is_some()
    }

    /// Apply an accepted withdrawal: debit the balance and record the entry
    /// at the top of the ledger.
    fn apply_withdrawal(&mut self, amount: f64, receipt: &WithdrawalReceipt) -> Transaction {
        let id = receipt.transaction_id.unwrap_or_else(|| {
            self.transactions.iter().map(|t| t.id).max().unwrap_or(0) + 1
        });

        let entry = Transaction {
            id,
            kind: TransactionKind::Withdrawal,
            amount: -amount,
            description: WITHDRAWAL_DESCRIPTION.to_string(),
            status: receipt.status.unwrap_or(TransactionStatus::Pending),
            date: today_iso_date(),
            file_name: None,
            file_size: None,
        };

        self.summary.current_balance -= amount;
        self.summary.total_withdrawn += amount;
        self.transactions.insert(0, entry.clone());
        entry
    }
}

pub struct WalletPage {
    api: Arc<dyn ApiService>,
    state: Arc<RwLock<WalletState>>,
}

impl WalletPage {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(WalletState::default())),
        }
    }

    pub fn snapshot(&self) -> WalletState {
        self.state.read().clone()
    }

    pub fn redirect(&self) -> Option<Redirect> {
        self.state.read().phase.redirect()
    }

    /// Fetch the wallet, then the ledger. A ledger failure other than an
    /// expired session leaves the page usable with an empty list.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self) -> Result<()> {
        self.state.write().phase = PagePhase::Loading;

        if let Err(err) = require_credential(self.api.session()) {
            self.state.write().phase = PagePhase::LoginRequired;
            return Err(err);
        }

        let summary = match self.api.wallet().await {
            Ok(summary) => summary,
            Err(err) => {
                tracing::error!(error = %err, "Failed to load wallet");
                let mut state = self.state.write();
                state.phase = if err.is_unauthorized() {
                    PagePhase::LoginRequired
                } else {
                    PagePhase::Failed
                };
                state.error = Some(err.to_string());
                return Err(err);
            }
        };

        let transactions = match self.api.transactions(TRANSACTIONS_PAGE_SIZE, 0).await {
            Ok(transactions) => transactions.unwrap_or_default(),
            Err(err) if err.is_unauthorized() => {
                tracing::warn!(error = %err, "Session expired while loading transactions");
                let mut state = self.state.write();
                state.summary = summary;
                state.phase = PagePhase::LoginRequired;
                state.error = Some(err.to_string());
                return Err(err);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load transactions");
                Vec::new()
            }
        };

        let mut state = self.state.write();
        state.summary = summary;
        state.transactions = transactions;
        state.phase = PagePhase::Ready;
        state.error = None;
        Ok(())
    }

    /// Withdraw `amount` to the given payout details.
    ///
    /// Rejected up front when the amount is not positive, exceeds the
    /// balance, or another withdrawal is still pending.
    #[tracing::instrument(skip(self, upi_id, bank_account))]
    pub async fn withdraw(
        &self,
        amount: f64,
        upi_id: Option<String>,
        bank_account: Option<String>,
    ) -> Result<Transaction> {
        {
            let mut state = self.state.write();
            if let Err(err) = Self::check_withdrawal(&state, amount) {
                state.error = Some(err.to_string());
                return Err(err);
            }
            state.pending_withdrawal = Some(amount);
            state.error = None;
            state.notice = None;
        }

        let outcome = self.api.withdraw(amount, upi_id, bank_account).await;

        let mut state = self.state.write();
        state.pending_withdrawal = None;
        match outcome {
            Ok(receipt) => {
                let entry = state.apply_withdrawal(amount, &receipt);
                state.notice = Some(
                    receipt
                        .message
                        .clone()
                        .unwrap_or_else(|| WITHDRAWAL_NOTICE.to_string()),
                );
                tracing::info!(
                    transaction_id = entry.id,
                    balance = state.summary.current_balance,
                    "Withdrawal accepted"
                );
                Ok(entry)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Withdrawal failed");
                if err.is_unauthorized() {
                    state.phase = PagePhase::LoginRequired;
                }
                state.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    fn check_withdrawal(state: &WalletState, amount: f64) -> Result<()> {
        if state.phase != PagePhase::Ready {
            return Err(AppError::Validation("Wallet is not loaded".to_string()));
        }
        if state.in_flight() {
            return Err(AppError::Validation(
                "A withdrawal is already in progress".to_string(),
            ));
        }
        validate_amount(amount)?;
        if amount > state.summary.current_balance {
            return Err(AppError::Validation("Invalid withdrawal amount".to_string()));
        }
        Ok(())
    }
}
