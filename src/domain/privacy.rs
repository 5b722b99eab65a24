// src/domain/privacy.rs

use crate::domain::status::PrivacyLevel;

/// Decides whether `viewer` may see a piece of profile content owned by
/// `owner`, given the section's configured level and whether a friendship
/// edge exists between the two (either direction counts).
///
/// An anonymous viewer is represented as `None` and can only ever see
/// PUBLIC content.
pub fn can_view(
    viewer: Option<i64>,
    owner: i64,
    level: PrivacyLevel,
    are_friends: bool,
) -> bool {
    if viewer == Some(owner) {
        return true;
    }
    match level {
        PrivacyLevel::Public => true,
        PrivacyLevel::FriendsOnly => viewer.is_some() && are_friends,
        PrivacyLevel::OnlyMe => false,
    }
}
