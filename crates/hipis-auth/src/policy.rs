use uuid::Uuid;

use hipis_core::models::user::Role;

use crate::token::AuthIdentity;

/// The ownership predicate gating every owner-scoped resource read or write.
///
/// Admins may act on anything. Otherwise the requester must be the record's
/// owner, or its counsellor for resources that have a counsellor party
/// (appointments, session notes). Mood entries and personal assessments have
/// no counsellor party, so callers pass `None` for them.
pub fn can_access(requester: &AuthIdentity, owner_id: Uuid, counsellor_id: Option<Uuid>) -> bool {
    requester.role == Role::Admin
        || requester.user_id == owner_id
        || counsellor_id.is_some_and(|c| c == requester.user_id)
}
