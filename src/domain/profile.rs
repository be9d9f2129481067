use serde::{Deserialize, Serialize};

/// A member profile returned by a people search.
///
/// Profiles are read-only to the orchestrator and discarded after the
/// iteration that processes them.
///
/// Only [`public_id`](Profile::public_id) makes a profile eligible for a
/// connection request; [`urn_id`](Profile::urn_id) is passed along as the
/// profile reference and is what an unfollow targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default = "unknown_name")]
    pub name: String,
    #[serde(default)]
    pub public_id: Option<String>,
    #[serde(default)]
    pub urn_id: Option<String>,
    #[serde(default = "not_available", alias = "jobtitle")]
    pub job_title: String,
    #[serde(default = "not_available")]
    pub location: String,
}

fn unknown_name() -> String {
    "Unknown".to_string()
}

fn not_available() -> String {
    "N/A".to_string()
}

impl Profile {
    /// Creates a profile with a name and public identifier.
    ///
    /// Title and location start as `"N/A"`; use the builder-style setters to fill them in.
    pub fn new(name: impl Into<String>, public_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            public_id: Some(public_id.into()),
            urn_id: None,
            job_title: not_available(),
            location: not_available(),
        }
    }

    /// Creates a profile that has no public identifier.
    pub fn anonymous(name: impl Into<String>) -> Self {
        Self {
            public_id: None,
            ..Self::new(name, String::new())
        }
    }

    pub fn with_urn(mut self, urn_id: impl Into<String>) -> Self {
        self.urn_id = Some(urn_id.into());
        self
    }

    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = job_title.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// The identifier a connection request is addressed to, if any.
    ///
    /// Empty strings are treated the same as a missing identifier.
    pub fn connect_id(&self) -> Option<&str> {
        non_empty(self.public_id.as_deref())
    }

    /// The profile reference used for unfollowing, if any.
    pub fn profile_urn(&self) -> Option<&str> {
        non_empty(self.urn_id.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Degree of separation between the signed-in account and a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkDepth {
    /// Already connected.
    #[serde(rename = "F")]
    First,
    /// Second-degree relation.
    #[serde(rename = "S")]
    Second,
    /// Third degree and beyond.
    #[serde(rename = "O")]
    Out,
}

impl NetworkDepth {
    /// Depths worth sending a connection request to.
    pub const NOT_CONNECTED: [NetworkDepth; 2] = [NetworkDepth::Second, NetworkDepth::Out];
}

/// Parameters for a people search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchQuery {
    pub keywords: String,
    pub limit: usize,
    pub network_depths: Vec<NetworkDepth>,
    pub include_private_profiles: bool,
}

impl SearchQuery {
    /// A search for people outside the first-degree network, excluding private profiles.
    pub fn not_connected(keywords: impl Into<String>, limit: usize) -> Self {
        Self {
            keywords: keywords.into(),
            limit,
            network_depths: NetworkDepth::NOT_CONNECTED.to_vec(),
            include_private_profiles: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_fills_defaults() {
        let profile: Profile = serde_json::from_str(r#"{"public_id": "jane-doe"}"#).unwrap();
        assert_eq!(profile.name, "Unknown");
        assert_eq!(profile.job_title, "N/A");
        assert_eq!(profile.location, "N/A");
        assert_eq!(profile.connect_id(), Some("jane-doe"));
        assert_eq!(profile.profile_urn(), None);
    }

    #[test]
    fn test_deserialize_accepts_jobtitle_alias() {
        let profile: Profile = serde_json::from_str(
            r#"{"name": "Jane", "public_id": "jane", "urn_id": "ACoAA1", "jobtitle": "SDE II", "location": "Pune"}"#,
        )
        .unwrap();
        assert_eq!(profile.job_title, "SDE II");
        assert_eq!(profile.profile_urn(), Some("ACoAA1"));
    }

    #[test]
    fn test_empty_identifier_is_not_eligible() {
        let mut profile = Profile::new("Jane", "");
        assert_eq!(profile.connect_id(), None);

        profile.public_id = Some("   ".to_string());
        assert_eq!(profile.connect_id(), None);

        assert_eq!(Profile::anonymous("Ghost").connect_id(), None);
    }

    #[test]
    fn test_not_connected_query_excludes_first_degree() {
        let query = SearchQuery::not_connected("Software Engineer", 20);
        assert_eq!(query.network_depths, vec![NetworkDepth::Second, NetworkDepth::Out]);
        assert!(!query.include_private_profiles);

        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["network_depths"], serde_json::json!(["S", "O"]));
    }
}
