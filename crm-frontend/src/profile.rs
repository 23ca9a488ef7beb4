use crm_api::user::me;

pub type Profile = me::Response;

pub const FALLBACK_NAME: &str = "User";
pub const FALLBACK_INITIALS: &str = "U";
pub const FALLBACK_ROLE: &str = "Member";

pub const ACTIVE_LEADS: &str = "12";
pub const MONTHLY_REVENUE: &str = "$24,500";

/// Profile of the current shell mount. `Loaded` is terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProfileState {
    #[default]
    Unloaded,
    Loaded(Profile),
}

/// What the sidebar footer shows about the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub initials: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickStats {
    pub role: String,
    pub active_leads: &'static str,
    pub monthly_revenue: &'static str,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|value| !value.is_empty())
}

pub fn initials(full_name: Option<&str>) -> String {
    let initials: String = full_name
        .unwrap_or_default()
        .split(' ')
        .filter_map(|word| word.chars().next())
        .collect();
    if initials.is_empty() { FALLBACK_INITIALS.to_owned() } else { initials }
}

impl ProfileState {
    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Self::Unloaded => None,
            Self::Loaded(profile) => Some(profile),
        }
    }

    pub fn identity(&self) -> Option<Identity> {
        self.profile().map(Identity::from)
    }

    pub fn quick_stats(&self) -> Option<QuickStats> {
        self.profile().map(QuickStats::from)
    }
}

impl From<&Profile> for Identity {
    fn from(profile: &Profile) -> Self {
        let full_name = non_empty(profile.full_name.as_ref());
        Self {
            name: full_name.unwrap_or(FALLBACK_NAME).to_owned(),
            initials: initials(full_name),
            role: non_empty(profile.role.as_ref()).unwrap_or(FALLBACK_ROLE).to_owned(),
        }
    }
}

impl From<&Profile> for QuickStats {
    fn from(profile: &Profile) -> Self {
        Self {
            role: profile.role.clone().unwrap_or_default(),
            active_leads: ACTIVE_LEADS,
            monthly_revenue: MONTHLY_REVENUE,
        }
    }
}

#[cfg(test)]
#[coverage(off)]
mod tests {
    use fake::Fake;
    use fake::faker::name::en::{FirstName, LastName};
    use rstest::rstest;

    use super::*;

    fn profile(full_name: Option<&str>, role: Option<&str>) -> Profile {
        Profile { full_name: full_name.map(str::to_owned), role: role.map(str::to_owned) }
    }

    #[test]
    fn test_unloaded() {
        let state = ProfileState::default();
        assert_eq!(state, ProfileState::Unloaded);
        assert!(state.identity().is_none());
        assert!(state.quick_stats().is_none());
    }

    #[test]
    fn test_loaded() {
        let state = ProfileState::Loaded(profile(Some("Jane Doe"), Some("manager")));
        assert_eq!(
            state.identity(),
            Some(Identity { name: "Jane Doe".into(), initials: "JD".into(), role: "manager".into() })
        );
        assert_eq!(
            state.quick_stats(),
            Some(QuickStats {
                role: "manager".into(),
                active_leads: "12",
                monthly_revenue: "$24,500"
            })
        );
    }

    #[rstest]
    #[case(None, None, "User", "U", "Member")]
    #[case(Some(""), Some(""), "User", "U", "Member")]
    #[case(Some("Cher"), Some("sales"), "Cher", "C", "sales")]
    #[case(Some("mary ann  smith"), None, "mary ann  smith", "mas", "Member")]
    #[case(Some("Élodie Ørsted"), Some("admin"), "Élodie Ørsted", "ÉØ", "admin")]
    #[case(Some(" "), None, " ", "U", "Member")]
    fn test_identity(
        #[case] full_name: Option<&str>,
        #[case] role: Option<&str>,
        #[case] name: &str,
        #[case] initials: &str,
        #[case] role_label: &str,
    ) {
        let identity = Identity::from(&profile(full_name, role));
        assert_eq!(identity.name, name);
        assert_eq!(identity.initials, initials);
        assert_eq!(identity.role, role_label);
    }

    #[test]
    fn test_quick_stats_without_role() {
        let stats = QuickStats::from(&profile(Some("Jane Doe"), None));
        assert_eq!(stats.role, "");
    }

    #[test]
    fn test_initials_generated_names() {
        for _ in 0..16 {
            let first: String = FirstName().fake();
            let last: String = LastName().fake();
            if first.contains(' ') || last.contains(' ') {
                continue;
            }
            let expected: String =
                [&first, &last].iter().filter_map(|name| name.chars().next()).collect();
            assert_eq!(initials(Some(&format!("{first} {last}"))), expected);
        }
    }
}
