//! # History Page
//!
//! Upload and transaction history. When the ledger cannot be fetched, or the
//! backend answers without a list, the page shows a fixed illustrative set
//! instead, flagged as placeholder data. An empty list is shown as empty.

use super::{require_credential, PagePhase, Redirect};
use crate::core::error::Result;
use crate::core::service::ApiService;
use parking_lot::RwLock;
use shared::{Transaction, TransactionKind, TransactionStatus};
use std::sync::Arc;

pub const HISTORY_PAGE_SIZE: u32 = 50;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryState {
    pub phase: PagePhase,
    pub transactions: Vec<Transaction>,
    /// The entries are the placeholder set, not the user's ledger.
    pub placeholder: bool,
    pub error: Option<String>,
}

/// Sample ledger shown when the real one is unavailable.
pub fn placeholder_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: 1,
            kind: TransactionKind::Credit,
            amount: 15.5,
            description: "Upload approved — Image Set A".to_string(),
            status: TransactionStatus::Completed,
            date: "2025-12-04".to_string(),
            file_name: Some("image_a.jpg".to_string()),
            file_size: Some(45.6),
        },
        Transaction {
            id: 2,
            kind: TransactionKind::Withdrawal,
            amount: -200.0,
            description: "Bank Withdrawal".to_string(),
            status: TransactionStatus::Completed,
            date: "2025-11-30".to_string(),
            file_name: None,
            file_size: None,
        },
        Transaction {
            id: 3,
            kind: TransactionKind::Credit,
            amount: 8.0,
            description: "Upload approved — Image Set B".to_string(),
            status: TransactionStatus::Pending,
            date: "2025-12-01".to_string(),
            file_name: Some("image_b.jpg".to_string()),
            file_size: Some(27.1),
        },
    ]
}

pub struct HistoryPage {
    api: Arc<dyn ApiService>,
    state: Arc<RwLock<HistoryState>>,
}

impl HistoryPage {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(HistoryState::default())),
        }
    }

    pub fn snapshot(&self) -> HistoryState {
        self.state.read().clone()
    }

    pub fn redirect(&self) -> Option<Redirect> {
        self.state.read().phase.redirect()
    }

    #[tracing::instrument(skip(self))]
    pub async fn load(&self) -> Result<()> {
        self.state.write().phase = PagePhase::Loading;

        if let Err(err) = require_credential(self.api.session()) {
            self.state.write().phase = PagePhase::LoginRequired;
            return Err(err);
        }

        let fetched = self.api.transactions(HISTORY_PAGE_SIZE, 0).await;

        let mut state = self.state.write();
        match fetched {
            Ok(Some(transactions)) => {
                state.transactions = transactions;
                state.placeholder = false;
            }
            Ok(None) => {
                tracing::warn!("Transactions response had no list, showing placeholder data");
                state.transactions = placeholder_transactions();
                state.placeholder = true;
            }
            Err(err) if err.is_unauthorized() => {
                state.phase = PagePhase::LoginRequired;
                state.error = Some(err.to_string());
                return Err(err);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to fetch transactions, showing placeholder data");
                state.transactions = placeholder_transactions();
                state.placeholder = true;
            }
        }
        state.phase = PagePhase::Ready;
        state.error = None;
        Ok(())
    }
}
