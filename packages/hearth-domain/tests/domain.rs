use hearth_domain::{Principal, ResourceView, Role, can_view, visibility_filter};

const FAMILIES: [&str; 2] = ["F1", "F2"];
const MEMBERS: [&str; 3] = ["U1", "U2", "U3"];
const ROLES: [Role; 3] = [Role::Child, Role::Adult, Role::Admin];
const TIERS: [&str; 3] = ["PRIVATE", "FAMILY", "ADULT"];

fn principal(member_id: &str, family_id: &str, role: Role) -> Principal {
	Principal::new(member_id.to_string(), family_id.to_string(), role).expect("valid principal")
}

fn all_principals() -> Vec<Principal> {
	let mut out = Vec::new();

	for family_id in FAMILIES {
		for member_id in MEMBERS {
			for role in ROLES {
				out.push(principal(member_id, family_id, role));
			}
		}
	}

	out
}

fn all_resources() -> Vec<(&'static str, &'static str, &'static str)> {
	let mut out = Vec::new();

	for family_id in FAMILIES {
		for owner_id in MEMBERS {
			for visibility in TIERS {
				out.push((family_id, owner_id, visibility));
			}
		}
	}

	out
}

#[test]
fn family_isolation_holds_for_every_combination() {
	for p in all_principals() {
		for (family_id, owner_id, visibility) in all_resources() {
			if family_id == p.family_id() {
				continue;
			}

			let resource = ResourceView { family_id, owner_id, visibility };

			assert!(
				!can_view(&p, resource).expect("valid input"),
				"cross-family resource leaked: {p:?} {resource:?}"
			);
		}
	}
}

#[test]
fn private_tier_tracks_ownership_within_the_family() {
	for p in all_principals() {
		for owner_id in MEMBERS {
			let resource =
				ResourceView { family_id: p.family_id(), owner_id, visibility: "PRIVATE" };

			assert_eq!(
				can_view(&p, resource).expect("valid input"),
				owner_id == p.member_id(),
				"private ownership violated: {p:?} {resource:?}"
			);
		}
	}
}

#[test]
fn adult_tier_tracks_role_within_the_family() {
	for p in all_principals() {
		for owner_id in MEMBERS {
			let resource = ResourceView { family_id: p.family_id(), owner_id, visibility: "ADULT" };

			assert_eq!(
				can_view(&p, resource).expect("valid input"),
				p.role().is_adult(),
				"adult gating violated: {p:?} {resource:?}"
			);
		}
	}
}

#[test]
fn filter_is_equivalent_to_the_predicate() {
	for p in all_principals() {
		let filter = visibility_filter(&p);

		for (family_id, owner_id, visibility) in all_resources() {
			let resource = ResourceView { family_id, owner_id, visibility };

			assert_eq!(
				filter.matches(resource),
				can_view(&p, resource).expect("valid input"),
				"filter diverged from predicate: {p:?} {resource:?}"
			);
		}
	}
}

#[test]
fn child_owner_cannot_read_own_adult_resource() {
	let p = principal("U1", "F1", Role::Child);
	let resource = ResourceView { family_id: "F1", owner_id: "U1", visibility: "ADULT" };

	assert!(!can_view(&p, resource).expect("valid input"));
}

#[test]
fn adult_cannot_read_another_members_private_resource() {
	let p = principal("U1", "F1", Role::Adult);
	let resource = ResourceView { family_id: "F1", owner_id: "U2", visibility: "PRIVATE" };

	assert!(!can_view(&p, resource).expect("valid input"));
}
