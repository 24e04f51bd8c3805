use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A sponsoring organisation shown in the showcase grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sponsor {
    pub id: u32,
    pub name: String,
    /// Logo reference for hosts that can resolve it; cards fall back to the
    /// styled name when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub url: String,
}

/// A judge profile shown in the showcase grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Judge {
    pub id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl Judge {
    /// Initials used for the avatar placeholder when no photo is given.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// The full content roster as a loadable JSON asset. Mirrors the JSON
/// structure exactly; an external `roster.json` matching these shapes can
/// replace the built-in lists at startup.
#[derive(Asset, TypePath, Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    pub sponsors: Vec<Sponsor>,
    pub judges: Vec<Judge>,
}

impl Roster {
    /// Ids must be unique within each list; order is otherwise free.
    pub fn has_unique_ids(&self) -> bool {
        let mut seen = HashSet::new();
        if !self.sponsors.iter().all(|s| seen.insert(s.id)) {
            return false;
        }
        seen.clear();
        self.judges.iter().all(|j| seen.insert(j.id))
    }

    /// Built-in roster used when no external `roster.json` is supplied.
    pub fn builtin() -> Self {
        Self {
            sponsors: vec![
                Sponsor {
                    id: 1,
                    name: "TechCorp".into(),
                    logo: None,
                    url: "https://example.com".into(),
                },
                Sponsor {
                    id: 2,
                    name: "InnovateX".into(),
                    logo: None,
                    url: "https://example.com".into(),
                },
                Sponsor {
                    id: 3,
                    name: "DevFund".into(),
                    logo: None,
                    url: "https://example.com".into(),
                },
                Sponsor {
                    id: 4,
                    name: "CloudSys".into(),
                    logo: None,
                    url: "https://example.com".into(),
                },
                Sponsor {
                    id: 5,
                    name: "BuilderAI".into(),
                    logo: None,
                    url: "https://example.com".into(),
                },
                Sponsor {
                    id: 6,
                    name: "CodeLabs".into(),
                    logo: None,
                    url: "https://example.com".into(),
                },
            ],
            judges: vec![
                Judge {
                    id: 1,
                    name: "Alex Johnson".into(),
                    title: Some("CTO at TechVentures".into()),
                    bio: "Alex has over 15 years of experience in software \
                          engineering and has mentored numerous successful startups."
                        .into(),
                    photo: None,
                },
                Judge {
                    id: 2,
                    name: "Sam Rodriguez".into(),
                    title: Some("Founder & CEO".into()),
                    bio: "Sam founded three successful tech startups and is \
                          passionate about fostering innovation in young developers."
                        .into(),
                    photo: None,
                },
                Judge {
                    id: 3,
                    name: "Jordan Lee".into(),
                    title: Some("VP of Engineering".into()),
                    bio: "Jordan specializes in AI and machine learning \
                          applications, with a background in both academia and industry."
                        .into(),
                    photo: None,
                },
                Judge {
                    id: 4,
                    name: "Taylor Morgan".into(),
                    title: Some("Product Director".into()),
                    bio: "Taylor has led product teams at major tech companies \
                          and brings expertise in user experience and market fit."
                        .into(),
                    photo: None,
                },
            ],
        }
    }
}

/// The roster the page actually renders, inserted once resolution between
/// the external asset and the built-in lists has finished.
#[derive(Resource, Debug, Clone)]
pub struct ActiveRoster(pub Roster);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_roster_ids_are_unique() {
        assert!(Roster::builtin().has_unique_ids());
    }

    #[test]
    fn duplicate_sponsor_ids_are_rejected() {
        let mut roster = Roster::builtin();
        roster.sponsors[1].id = roster.sponsors[0].id;
        assert!(!roster.has_unique_ids());
    }

    #[test]
    fn duplicate_judge_ids_are_rejected() {
        let mut roster = Roster::builtin();
        roster.judges[3].id = roster.judges[0].id;
        assert!(!roster.has_unique_ids());
    }

    #[test]
    fn sponsor_and_judge_ids_may_overlap() {
        // The two lists are independent id spaces.
        let roster = Roster::builtin();
        assert!(roster.sponsors.iter().any(|s| s.id == 1));
        assert!(roster.judges.iter().any(|j| j.id == 1));
        assert!(roster.has_unique_ids());
    }

    #[test]
    fn roster_round_trips_through_json() {
        let roster = Roster::builtin();
        let json = serde_json::to_string(&roster).unwrap();
        let parsed: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.sponsors, roster.sponsors);
        assert_eq!(parsed.judges, roster.judges);
    }

    #[test]
    fn omitted_judge_title_deserializes_as_none() {
        let judge: Judge = serde_json::from_str(
            r#"{"id": 9, "name": "Robin Vale", "bio": "Builds compilers."}"#,
        )
        .unwrap();
        assert_eq!(judge.title, None);
        assert_eq!(judge.photo, None);
    }

    #[test]
    fn initials_come_from_name_parts() {
        let judge = &Roster::builtin().judges[0];
        assert_eq!(judge.initials(), "AJ");
    }
}
