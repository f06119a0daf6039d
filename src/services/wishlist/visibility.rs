//! Visibility policy for wishlists.
//!
//! A stateless decision function of (wishlist snapshot, actor id). Each
//! check is a single match over [`WishlistVisibility`]; there is no strategy
//! object or factory behind it. None of the checks can fail: an unknown
//! stored visibility value denies everything, because a permission check
//! must fail closed.

use crate::entities::{wishlist, wishlist_share, WishlistVisibility};
use uuid::Uuid;

/// True when `actor` owns the wishlist. Anonymous actors and guest
/// (ownerless) wishlists never satisfy the owner test.
fn is_owner(wishlist: &wishlist::Model, actor: Option<Uuid>) -> bool {
    match (wishlist.customer_id, actor) {
        (Some(owner), Some(actor)) => owner == actor,
        _ => false,
    }
}

/// True when `actor` holds a share grant on the wishlist. The role on the
/// grant is not consulted; membership alone decides.
fn is_member(shares: &[wishlist_share::Model], actor: Option<Uuid>) -> bool {
    match actor {
        Some(actor) => shares.iter().any(|share| share.customer_id == actor),
        None => false,
    }
}

/// Whether `actor` may view the wishlist.
pub fn can_view(
    wishlist: &wishlist::Model,
    shares: &[wishlist_share::Model],
    actor: Option<Uuid>,
) -> bool {
    match wishlist.parsed_visibility() {
        Some(WishlistVisibility::Private) => is_owner(wishlist, actor),
        Some(WishlistVisibility::Public) => true,
        Some(WishlistVisibility::Shared) => is_owner(wishlist, actor) || is_member(shares, actor),
        None => false,
    }
}

/// Whether `actor` may mutate the wishlist (rename, add/remove items,
/// change visibility, delete). Owner-only under every visibility.
pub fn can_edit(wishlist: &wishlist::Model, actor: Option<Uuid>) -> bool {
    match wishlist.parsed_visibility() {
        Some(_) => is_owner(wishlist, actor),
        None => false,
    }
}

/// Whether `actor` may share the wishlist (hand out grants or a share link).
pub fn can_share(
    wishlist: &wishlist::Model,
    shares: &[wishlist_share::Model],
    actor: Option<Uuid>,
) -> bool {
    match wishlist.parsed_visibility() {
        Some(WishlistVisibility::Private) => is_owner(wishlist, actor),
        Some(WishlistVisibility::Public) => true,
        Some(WishlistVisibility::Shared) => is_owner(wishlist, actor) || is_member(shares, actor),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn wishlist_with(owner: Option<Uuid>, visibility: &str) -> wishlist::Model {
        wishlist::Model {
            id: Uuid::new_v4(),
            customer_id: owner,
            session_id: None,
            name: "Birthday ideas".to_string(),
            description: None,
            visibility: visibility.to_string(),
            is_default: false,
            expires_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn grant(wishlist_id: Uuid, customer_id: Uuid, role: &str) -> wishlist_share::Model {
        wishlist_share::Model {
            id: Uuid::new_v4(),
            wishlist_id,
            customer_id,
            role: role.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn private_denies_everyone_but_owner() {
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let w = wishlist_with(Some(owner), "private");

        assert!(can_view(&w, &[], Some(owner)));
        assert!(can_edit(&w, Some(owner)));
        assert!(can_share(&w, &[], Some(owner)));

        assert!(!can_view(&w, &[], Some(stranger)));
        assert!(!can_edit(&w, Some(stranger)));
        assert!(!can_share(&w, &[], Some(stranger)));
        assert!(!can_view(&w, &[], None));
    }

    #[test]
    fn public_is_viewable_by_anyone_including_anonymous() {
        let owner = Uuid::new_v4();
        let w = wishlist_with(Some(owner), "public");

        assert!(can_view(&w, &[], None));
        assert!(can_view(&w, &[], Some(Uuid::new_v4())));
        assert!(can_share(&w, &[], None));
        assert!(can_share(&w, &[], Some(Uuid::new_v4())));
    }

    #[test]
    fn public_edit_stays_owner_only() {
        let owner = Uuid::new_v4();
        let w = wishlist_with(Some(owner), "public");

        assert!(can_edit(&w, Some(owner)));
        assert!(!can_edit(&w, Some(Uuid::new_v4())));
        assert!(!can_edit(&w, None));
    }

    #[test]
    fn shared_grants_view_to_owner_and_members_only() {
        let owner = Uuid::new_v4();
        let member = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let w = wishlist_with(Some(owner), "shared");
        let shares = vec![grant(w.id, member, "viewer")];

        assert!(can_view(&w, &shares, Some(owner)));
        assert!(can_view(&w, &shares, Some(member)));
        assert!(!can_view(&w, &shares, Some(stranger)));
        assert!(!can_view(&w, &shares, None));
    }

    #[test]
    fn shared_member_scenario_from_storefront() {
        // owner "u1" shares with member "u2" (viewer role)
        let u1 = Uuid::new_v4();
        let u2 = Uuid::new_v4();
        let w = wishlist_with(Some(u1), "shared");
        let shares = vec![grant(w.id, u2, "viewer")];

        assert!(can_view(&w, &shares, Some(u2)));
        assert!(!can_edit(&w, Some(u2)));
        // membership grants share rights regardless of role
        assert!(can_share(&w, &shares, Some(u2)));
        assert!(can_share(&w, &shares, Some(u1)));
    }

    #[test]
    fn membership_ignores_role_value() {
        let owner = Uuid::new_v4();
        let member = Uuid::new_v4();
        let w = wishlist_with(Some(owner), "shared");
        // even a malformed role keeps the grant effective for membership
        let shares = vec![grant(w.id, member, "something-unknown")];

        assert!(can_view(&w, &shares, Some(member)));
        assert!(can_share(&w, &shares, Some(member)));
        assert!(!can_edit(&w, Some(member)));
    }

    #[test]
    fn unknown_visibility_fails_closed() {
        let owner = Uuid::new_v4();
        let w = wishlist_with(Some(owner), "friends-only");
        let shares = vec![grant(w.id, owner, "editor")];

        // even the owner is denied when the stored type is unrecognized
        assert!(!can_view(&w, &shares, Some(owner)));
        assert!(!can_edit(&w, Some(owner)));
        assert!(!can_share(&w, &shares, Some(owner)));
    }

    #[test]
    fn guest_wishlist_has_no_owner() {
        let w = wishlist_with(None, "private");
        let somebody = Uuid::new_v4();

        assert!(!can_view(&w, &[], Some(somebody)));
        assert!(!can_edit(&w, Some(somebody)));
    }
}
