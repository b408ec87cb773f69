use serde::{Deserialize, Serialize};

pub mod user {
    use super::*;

    /// Account profile, used for display only (initials in the header).
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct User {
        pub first_name: String,
        pub last_name: String,
        pub email: String,
    }
}

pub mod wallet {
    use super::*;

    /// Snapshot of account totals in the account's home currency.
    ///
    /// Replaced wholesale on each fetch; never mutated on the client.
    #[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
    pub struct WalletBalance {
        pub balance: f64,
        pub ledger_balance: f64,
        pub total_payout: f64,
        pub total_revenue: f64,
        pub pending_payout: f64,
    }
}

pub mod transaction {
    use super::*;

    /// One financial event as returned by the remote API.
    ///
    /// `date` stays a string at this boundary: the display formatter has a
    /// documented fallback for malformed timestamps, so parsing happens at
    /// the point of use rather than during deserialization.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct Transaction {
        pub amount: f64,
        /// RFC 3339 timestamp, possibly empty or malformed.
        pub date: String,
        /// Open set of category labels, e.g. "deposit", "withdrawal".
        #[serde(rename = "type")]
        pub kind: String,
        /// "successful", "pending" or "failed".
        pub status: String,
        #[serde(default)]
        pub payment_reference: Option<String>,
        #[serde(default)]
        pub metadata: Option<TransactionMetadata>,
    }

    /// Free-form display details attached to a transaction.
    ///
    /// Every field may be absent; missing values must never fail a render,
    /// only fall back to a placeholder label.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    pub struct TransactionMetadata {
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default, rename = "type")]
        pub kind: Option<String>,
        #[serde(default)]
        pub email: Option<String>,
        #[serde(default)]
        pub quantity: Option<u64>,
        #[serde(default)]
        pub country: Option<String>,
        #[serde(default)]
        pub product_name: Option<String>,
    }
}

#[cfg(test)]
mod tests {
    use super::transaction::Transaction;
    use super::user::User;
    use super::wallet::WalletBalance;

    #[test]
    fn transaction_deserializes_full_record() {
        let json = r#"{
            "amount": 500,
            "metadata": {
                "name": "John Doe",
                "type": "digital_product",
                "email": "johndoe@example.com",
                "quantity": 1,
                "country": "Nigeria",
                "product_name": "Rich Dad Poor Dad"
            },
            "payment_reference": "c3f7d8d9-77ef-4498-a5bd-abb778c5255b",
            "status": "successful",
            "type": "deposit",
            "date": "2022-03-03T00:00:00.000Z"
        }"#;

        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.amount, 500.0);
        assert_eq!(tx.kind, "deposit");
        assert_eq!(tx.status, "successful");
        let metadata = tx.metadata.unwrap();
        assert_eq!(metadata.product_name.as_deref(), Some("Rich Dad Poor Dad"));
        assert_eq!(metadata.quantity, Some(1));
    }

    #[test]
    fn transaction_tolerates_missing_optional_fields() {
        let json = r#"{
            "amount": 1500,
            "status": "successful",
            "type": "withdrawal",
            "date": "2022-03-01T00:00:00.000Z"
        }"#;

        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert!(tx.metadata.is_none());
        assert!(tx.payment_reference.is_none());
    }

    #[test]
    fn transaction_tolerates_partial_metadata() {
        let json = r#"{
            "amount": 300,
            "metadata": { "name": "Ada" },
            "status": "pending",
            "type": "deposit",
            "date": "2022-03-02T00:00:00.000Z"
        }"#;

        let tx: Transaction = serde_json::from_str(json).unwrap();
        let metadata = tx.metadata.unwrap();
        assert_eq!(metadata.name.as_deref(), Some("Ada"));
        assert!(metadata.product_name.is_none());
    }

    #[test]
    fn wallet_balance_deserializes() {
        let json = r#"{
            "balance": 120500.0,
            "total_payout": 55080.0,
            "total_revenue": 175580.0,
            "pending_payout": 0.0,
            "ledger_balance": 38000.0
        }"#;

        let wallet: WalletBalance = serde_json::from_str(json).unwrap();
        assert_eq!(wallet.balance, 120500.0);
        assert_eq!(wallet.pending_payout, 0.0);
    }

    #[test]
    fn user_deserializes() {
        let json = r#"{
            "first_name": "Olivier",
            "last_name": "Jones",
            "email": "olivierjones@gmail.com"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.first_name, "Olivier");
    }
}
