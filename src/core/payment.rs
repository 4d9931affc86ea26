//! Payment-proof gating rules.
//!
//! One proof per order, uploaded only while the order is still awaiting
//! payment. Approval and rejection are admin operations on the API side.

use crate::api::{self, ApiClient};
use crate::errors::{Error, Result};
use crate::models::{Order, OrderStatus, PaymentProof, PaymentProofUpload};

/// Whether the customer may upload a payment proof for this order.
#[must_use]
pub fn can_upload_proof(order: &Order) -> bool {
    order.status == OrderStatus::Pending && order.payment_proof.is_none()
}

/// Validates the gating rules and uploads a payment proof.
///
/// # Errors
/// Returns [`Error::ProofAlreadyUploaded`] when the order already carries a
/// proof, and [`Error::OrderNotPayable`] when the order is not PENDING.
/// Nothing is sent in either case.
pub async fn upload_proof(
    client: &ApiClient,
    order: &Order,
    upload: PaymentProofUpload,
) -> Result<PaymentProof> {
    if order.payment_proof.is_some() {
        return Err(Error::ProofAlreadyUploaded {
            order_id: order.id.clone(),
        });
    }
    if order.status != OrderStatus::Pending {
        return Err(Error::OrderNotPayable {
            order_id: order.id.clone(),
        });
    }
    api::payments::upload(client, upload).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_order, sample_payment_proof};

    #[test]
    fn test_pending_order_without_proof_is_payable() {
        let order = sample_order("o1", OrderStatus::Pending);
        assert!(can_upload_proof(&order));
    }

    #[test]
    fn test_existing_proof_blocks_upload() {
        let mut order = sample_order("o1", OrderStatus::Pending);
        order.payment_proof = Some(sample_payment_proof("pp1", "o1"));
        assert!(!can_upload_proof(&order));
    }

    #[test]
    fn test_non_pending_order_is_not_payable() {
        assert!(!can_upload_proof(&sample_order("o1", OrderStatus::InProgress)));
        assert!(!can_upload_proof(&sample_order("o2", OrderStatus::Completed)));
        assert!(!can_upload_proof(&sample_order("o3", OrderStatus::Cancelled)));
    }
}
