use uuid::Uuid;

use hipis_auth::policy::can_access;
use hipis_auth::token::AuthIdentity;
use hipis_core::models::user::Role;

fn identity(user_id: Uuid, role: Role) -> AuthIdentity {
    AuthIdentity {
        user_id,
        email: "someone@campus.edu".to_string(),
        role,
    }
}

// Exhaustive truth table: access iff admin, or requester is the owner, or
// requester is the counsellor party when one is defined.
#[test]
fn can_access_truth_table() {
    let owner = Uuid::new_v4();
    let counsellor = Uuid::new_v4();
    let stranger = Uuid::new_v4();

    let cases = [
        // (requester id, role, counsellor party, expected)
        (owner, Role::Student, None, true),
        (owner, Role::Student, Some(counsellor), true),
        (counsellor, Role::Counsellor, Some(counsellor), true),
        (counsellor, Role::Counsellor, None, false),
        (stranger, Role::Student, None, false),
        (stranger, Role::Student, Some(counsellor), false),
        (stranger, Role::Counsellor, Some(counsellor), false),
        (stranger, Role::Admin, None, true),
        (stranger, Role::Admin, Some(counsellor), true),
        (owner, Role::Admin, None, true),
    ];

    for (requester_id, role, counsellor_id, expected) in cases {
        let requester = identity(requester_id, role);
        assert_eq!(
            can_access(&requester, owner, counsellor_id),
            expected,
            "requester {requester_id} role {role:?} counsellor {counsellor_id:?}"
        );
    }
}

#[test]
fn owner_match_is_exact() {
    let owner = Uuid::new_v4();
    let almost = Uuid::new_v4();
    assert!(!can_access(&identity(almost, Role::Student), owner, None));
    assert!(can_access(&identity(owner, Role::Student), owner, None));
}
