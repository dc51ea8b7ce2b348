use serde::{Deserialize, Serialize};

/// An invitation to join a group. Create-only, never fetched back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendInvite {
    pub sender_id: i64,
    pub receiver_email: String,
    pub group_id: i64,
}
