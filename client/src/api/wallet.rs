//! # Wallet Endpoints
//!
//! Balance, ledger and withdrawals.

use crate::core::error::{AppError, Result};
use crate::transport::url::paginated;
use crate::transport::{ApiClient, ApiRequest};
use shared::{Transaction, WalletSummary, WithdrawRequest, WithdrawalReceipt};

pub const DEFAULT_LIMIT: u32 = 20;

/// Wallet snapshot. An empty body reads as a zeroed wallet.
pub async fn get(client: &ApiClient) -> Result<WalletSummary> {
    let summary: Option<WalletSummary> = client.call(ApiRequest::get("/wallet/")).await?;
    Ok(summary.unwrap_or_default())
}

/// Ledger page as sent. `None` when the backend answered without a body.
pub async fn ledger(
    client: &ApiClient,
    limit: u32,
    offset: u32,
) -> Result<Option<Vec<Transaction>>> {
    client
        .call(ApiRequest::get(paginated("/wallet/transactions", limit, offset)))
        .await
}

pub async fn transactions(client: &ApiClient, limit: u32, offset: u32) -> Result<Vec<Transaction>> {
    Ok(ledger(client, limit, offset).await?.unwrap_or_default())
}

/// Reject amounts that can never be withdrawn.
pub fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(AppError::Validation("Invalid withdrawal amount".to_string()));
    }
    Ok(())
}

/// Request a withdrawal. Blank payout details are left out of the body.
#[tracing::instrument(skip(client, upi_id, bank_account))]
pub async fn withdraw(
    client: &ApiClient,
    amount: f64,
    upi_id: Option<&str>,
    bank_account: Option<&str>,
) -> Result<WithdrawalReceipt> {
    validate_amount(amount)?;

    let body = WithdrawRequest {
        amount,
        upi_id: non_blank(upi_id),
        bank_account: non_blank(bank_account),
    };
    let receipt: Option<WithdrawalReceipt> = client
        .call(ApiRequest::post("/wallet/withdraw").json(&body)?)
        .await?;

    tracing::info!("Withdrawal requested");
    Ok(receipt.unwrap_or_default())
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(40.0).is_ok());
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert_eq!(
                validate_amount(bad),
                Err(AppError::Validation("Invalid withdrawal amount".to_string()))
            );
        }
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some(" user@upi ")), Some("user@upi".to_string()));
        assert_eq!(non_blank(Some("  ")), None);
        assert_eq!(non_blank(None), None);
    }
}
