//! Concurrent, partial-failure-tolerant loading of the three dashboard reads.

use api_types::{transaction::Transaction, user::User, wallet::WalletBalance};

use crate::client::{Client, ClientError};

/// The three independent data sets backing the dashboard. A `None`/empty
/// slot means that read failed or has not completed yet.
#[derive(Debug, Default)]
pub struct DashboardData {
    pub user: Option<User>,
    pub transactions: Vec<Transaction>,
    pub wallet: Option<WalletBalance>,
}

/// Outcome of one load batch: whatever data settled successfully, plus one
/// user-facing notice per failed read.
#[derive(Debug, Default)]
pub struct DashboardLoad {
    pub data: DashboardData,
    pub failures: Vec<String>,
}

/// Issues the three reads concurrently and waits for all of them to settle.
///
/// A failed read never aborts the others and the batch as a whole never
/// fails: partial failure yields partial data.
pub async fn load_dashboard(client: &Client) -> DashboardLoad {
    let (user, transactions, wallet) = tokio::join!(
        client.user(),
        client.transactions(),
        client.wallet_balance()
    );
    settle(user, transactions, wallet)
}

/// Folds the three settled outcomes into dashboard data. Failures are logged
/// and reported as transient notices naming which read failed; the
/// corresponding slot stays unset.
pub fn settle(
    user: Result<User, ClientError>,
    transactions: Result<Vec<Transaction>, ClientError>,
    wallet: Result<WalletBalance, ClientError>,
) -> DashboardLoad {
    let mut load = DashboardLoad::default();

    match user {
        Ok(user) => load.data.user = Some(user),
        Err(err) => {
            tracing::warn!(error = ?err, "user read failed");
            load.failures.push("Failed to fetch user".to_string());
        }
    }

    match transactions {
        Ok(transactions) => load.data.transactions = transactions,
        Err(err) => {
            tracing::warn!(error = ?err, "transactions read failed");
            load.failures
                .push("Failed to fetch transactions".to_string());
        }
    }

    match wallet {
        Ok(wallet) => load.data.wallet = Some(wallet),
        Err(err) => {
            tracing::warn!(error = ?err, "wallet read failed");
            load.failures
                .push("Failed to fetch wallet balance".to_string());
        }
    }

    load
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
        }
    }

    fn wallet() -> WalletBalance {
        WalletBalance {
            balance: 50000.0,
            ledger_balance: 45000.0,
            total_payout: 100000.0,
            total_revenue: 150000.0,
            pending_payout: 5000.0,
        }
    }

    #[test]
    fn all_successful_reads_populate_every_slot() {
        let load = settle(Ok(user()), Ok(Vec::new()), Ok(wallet()));
        assert!(load.data.user.is_some());
        assert!(load.data.wallet.is_some());
        assert!(load.failures.is_empty());
    }

    #[test]
    fn one_failed_read_leaves_the_others_populated() {
        let load = settle(
            Ok(user()),
            Err(ClientError::Server("boom".to_string())),
            Ok(wallet()),
        );

        assert!(load.data.user.is_some());
        assert!(load.data.wallet.is_some());
        assert!(load.data.transactions.is_empty());
        assert_eq!(load.failures, vec!["Failed to fetch transactions"]);
    }

    #[test]
    fn every_read_can_fail_without_the_batch_failing() {
        let load = settle(
            Err(ClientError::NotFound),
            Err(ClientError::NotFound),
            Err(ClientError::NotFound),
        );

        assert!(load.data.user.is_none());
        assert!(load.data.wallet.is_none());
        assert_eq!(load.failures.len(), 3);
    }
}
