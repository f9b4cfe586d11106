//! Bundled marketplace dataset.
//!
//! The same records populate the database through the seed endpoint and
//! stand in for the project listing when the database has nothing to offer.
//! Company ids are the slugs of their names (see [`crate::slug`]); project ids
//! are fixed so that a seeded listing and the fallback listing agree.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Review state of a project a user has joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinStatus {
    Pending,
    Accepted,
    Rejected,
}

impl JoinStatus {
    /// The stored (and serialized) spelling of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for JoinStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for JoinStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "Pending" => Ok(Self::Pending),
            "Accepted" => Ok(Self::Accepted),
            "Rejected" => Ok(Self::Rejected),
            other => Err(CoreError::Validation(format!(
                "Unknown join status '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CatalogCompany {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct CatalogProject {
    pub id: DbId,
    pub company_id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub category: &'static str,
    pub level: &'static str,
    pub salary: i32,
    /// Posting time in milliseconds since the Unix epoch.
    pub date: i64,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct CatalogManageProject {
    pub company_id: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub date: i64,
    pub applicants: i32,
    pub visible: bool,
}

/// A joined-project record; the owning user is attached at seed time.
#[derive(Debug, Clone, Copy)]
pub struct CatalogProjectJoined {
    pub company_id: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub date: &'static str,
    pub status: JoinStatus,
}

#[derive(Debug, Clone, Copy)]
pub struct CatalogViewApplication {
    pub company_id: &'static str,
    pub name: &'static str,
    pub project_title: &'static str,
    pub location: &'static str,
}

pub const COMPANIES: &[CatalogCompany] = &[
    CatalogCompany {
        id: "slack",
        name: "Slack",
        email: "projects@slack.example.com",
        image: "/assets/companies/slack.svg",
    },
    CatalogCompany {
        id: "bluefinlabs",
        name: "Bluefin Labs",
        email: "hello@bluefinlabs.example.com",
        image: "/assets/companies/bluefin.svg",
    },
    CatalogCompany {
        id: "northwindtraders",
        name: "Northwind Traders",
        email: "talent@northwind.example.com",
        image: "/assets/companies/northwind.svg",
    },
    CatalogCompany {
        id: "quillandink",
        name: "Quill and Ink",
        email: "studio@quillandink.example.com",
        image: "",
    },
];

pub const PROJECTS: &[CatalogProject] = &[
    CatalogProject {
        id: 1,
        company_id: "slack",
        title: "Notification Digest Service",
        description: "Design a service that batches workspace notifications into a daily digest \
                      with per-user delivery windows.",
        location: "Remote",
        category: "Backend",
        level: "Intermediate",
        salary: 1800,
        date: 1_735_689_600_000,
        visible: true,
    },
    CatalogProject {
        id: 2,
        company_id: "slack",
        title: "Accessible Message Composer",
        description: "Rebuild the message composer so every formatting action is reachable \
                      from the keyboard and announced to screen readers.",
        location: "San Francisco",
        category: "Frontend",
        level: "Senior",
        salary: 2600,
        date: 1_736_208_000_000,
        visible: true,
    },
    CatalogProject {
        id: 3,
        company_id: "bluefinlabs",
        title: "Sensor Data Dashboard",
        description: "Visualise live readings from ocean buoys with alerting on threshold \
                      breaches.",
        location: "Lisbon",
        category: "Data",
        level: "Beginner",
        salary: 900,
        date: 1_736_899_200_000,
        visible: true,
    },
    CatalogProject {
        id: 4,
        company_id: "bluefinlabs",
        title: "Firmware Update Pipeline",
        description: "Automate signed over-the-air firmware rollouts with staged cohorts and \
                      automatic rollback.",
        location: "Remote",
        category: "DevOps",
        level: "Senior",
        salary: 3100,
        date: 1_737_504_000_000,
        visible: true,
    },
    CatalogProject {
        id: 5,
        company_id: "northwindtraders",
        title: "Inventory Forecasting Model",
        description: "Predict weekly stock levels per warehouse from two years of order \
                      history.",
        location: "London",
        category: "Data",
        level: "Intermediate",
        salary: 2200,
        date: 1_738_108_800_000,
        visible: true,
    },
    CatalogProject {
        id: 6,
        company_id: "northwindtraders",
        title: "Supplier Onboarding Portal",
        description: "Build a portal where suppliers upload certificates and track their \
                      approval status.",
        location: "Remote",
        category: "Full Stack",
        level: "Beginner",
        salary: 1200,
        date: 1_738_713_600_000,
        visible: true,
    },
    CatalogProject {
        id: 7,
        company_id: "quillandink",
        title: "Manuscript Formatting Tool",
        description: "Convert author manuscripts into print-ready layouts with consistent \
                      typography.",
        location: "Berlin",
        category: "Tooling",
        level: "Intermediate",
        salary: 1500,
        date: 1_739_318_400_000,
        visible: true,
    },
];

pub const MANAGE_PROJECTS: &[CatalogManageProject] = &[
    CatalogManageProject {
        company_id: "slack",
        title: "Notification Digest Service",
        location: "Remote",
        date: 1_735_689_600_000,
        applicants: 12,
        visible: true,
    },
    CatalogManageProject {
        company_id: "slack",
        title: "Accessible Message Composer",
        location: "San Francisco",
        date: 1_736_208_000_000,
        applicants: 5,
        visible: true,
    },
    CatalogManageProject {
        company_id: "bluefinlabs",
        title: "Sensor Data Dashboard",
        location: "Lisbon",
        date: 1_736_899_200_000,
        applicants: 20,
        visible: false,
    },
    CatalogManageProject {
        company_id: "northwindtraders",
        title: "Inventory Forecasting Model",
        location: "London",
        date: 1_738_108_800_000,
        applicants: 8,
        visible: true,
    },
];

pub const PROJECTS_JOINED: &[CatalogProjectJoined] = &[
    CatalogProjectJoined {
        company_id: "slack",
        title: "Notification Digest Service",
        location: "Remote",
        date: "22 Jan, 2025",
        status: JoinStatus::Pending,
    },
    CatalogProjectJoined {
        company_id: "bluefinlabs",
        title: "Sensor Data Dashboard",
        location: "Lisbon",
        date: "3 Feb, 2025",
        status: JoinStatus::Accepted,
    },
    CatalogProjectJoined {
        company_id: "northwindtraders",
        title: "Supplier Onboarding Portal",
        location: "Remote",
        date: "14 Feb, 2025",
        status: JoinStatus::Rejected,
    },
];

pub const VIEW_APPLICATIONS: &[CatalogViewApplication] = &[
    CatalogViewApplication {
        company_id: "slack",
        name: "Priya Raman",
        project_title: "Notification Digest Service",
        location: "Remote",
    },
    CatalogViewApplication {
        company_id: "slack",
        name: "Tomás Ortega",
        project_title: "Accessible Message Composer",
        location: "San Francisco",
    },
    CatalogViewApplication {
        company_id: "bluefinlabs",
        name: "Amara Okafor",
        project_title: "Sensor Data Dashboard",
        location: "Lisbon",
    },
    CatalogViewApplication {
        company_id: "northwindtraders",
        name: "Lena Fischer",
        project_title: "Inventory Forecasting Model",
        location: "London",
    },
];

/// Look up a bundled company by key.
pub fn company(id: &str) -> Option<&'static CatalogCompany> {
    COMPANIES.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::slug::company_slug;

    #[test]
    fn company_ids_are_slugs_of_their_names() {
        for c in COMPANIES {
            assert_eq!(company_slug(c.name).unwrap(), c.id, "company {}", c.name);
        }
    }

    #[test]
    fn company_keys_and_emails_are_unique() {
        let ids: HashSet<_> = COMPANIES.iter().map(|c| c.id).collect();
        let emails: HashSet<_> = COMPANIES.iter().map(|c| c.email).collect();
        assert_eq!(ids.len(), COMPANIES.len());
        assert_eq!(emails.len(), COMPANIES.len());
    }

    #[test]
    fn project_ids_are_unique_and_positive() {
        let ids: HashSet<_> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
        assert!(PROJECTS.iter().all(|p| p.id > 0));
    }

    #[test]
    fn every_record_references_a_bundled_company() {
        let referenced = PROJECTS
            .iter()
            .map(|p| p.company_id)
            .chain(MANAGE_PROJECTS.iter().map(|m| m.company_id))
            .chain(PROJECTS_JOINED.iter().map(|j| j.company_id))
            .chain(VIEW_APPLICATIONS.iter().map(|v| v.company_id));

        for id in referenced {
            assert!(company(id).is_some(), "unknown company '{id}'");
        }
    }

    #[test]
    fn join_status_parses_its_own_spelling() {
        for status in [JoinStatus::Pending, JoinStatus::Accepted, JoinStatus::Rejected] {
            assert_eq!(JoinStatus::try_from(status.to_string()).unwrap(), status);
        }
    }

    #[test]
    fn join_status_rejects_unknown_values() {
        assert!(JoinStatus::try_from("pending".to_string()).is_err());
        assert!(JoinStatus::try_from("Withdrawn".to_string()).is_err());
    }
}
