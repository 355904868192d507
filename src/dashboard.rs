// src/dashboard.rs

//! Role-based dashboard dispatch.
//!
//! Each [`Role`] gets exactly one dashboard, chosen by [`dispatch`]. A
//! dashboard lists the navigation sections that role may open.

use std::fmt;

use crate::models::{Role, Session};

/// A dashboard navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Profile,
    AddScholarship,
    ManageScholarships,
    ManageUsers,
    Analytics,
    ManageApplications,
    AllReviews,
    MyApplications,
    MyReviews,
}

impl Section {
    pub fn path(&self) -> &'static str {
        match self {
            Section::Profile => "/dashboard/profile",
            Section::AddScholarship => "/dashboard/add-scholarship",
            Section::ManageScholarships => "/dashboard/manage-scholarships",
            Section::ManageUsers => "/dashboard/manage-users",
            Section::Analytics => "/dashboard/analytics",
            Section::ManageApplications => "/dashboard/manage-applications",
            Section::AllReviews => "/dashboard/all-reviews",
            Section::MyApplications => "/dashboard/my-applications",
            Section::MyReviews => "/dashboard/my-reviews",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Profile => "My Profile",
            Section::AddScholarship => "Add Scholarship",
            Section::ManageScholarships => "Manage Scholarships",
            Section::ManageUsers => "Manage Users",
            Section::Analytics => "Analytics",
            Section::ManageApplications => "Manage Applications",
            Section::AllReviews => "All Reviews",
            Section::MyApplications => "My Applications",
            Section::MyReviews => "My Reviews",
        }
    }

    /// Look up a section by its route path.
    pub fn from_path(path: &str) -> Option<Self> {
        ALL_SECTIONS.iter().copied().find(|s| s.path() == path)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.path())
    }
}

const ALL_SECTIONS: [Section; 9] = [
    Section::Profile,
    Section::AddScholarship,
    Section::ManageScholarships,
    Section::ManageUsers,
    Section::Analytics,
    Section::ManageApplications,
    Section::AllReviews,
    Section::MyApplications,
    Section::MyReviews,
];

const ADMIN_SECTIONS: &[Section] = &[
    Section::Profile,
    Section::AddScholarship,
    Section::ManageScholarships,
    Section::ManageUsers,
    Section::Analytics,
];

const MODERATOR_SECTIONS: &[Section] = &[
    Section::Profile,
    Section::ManageApplications,
    Section::AllReviews,
];

const STUDENT_SECTIONS: &[Section] = &[
    Section::Profile,
    Section::MyApplications,
    Section::MyReviews,
];

/// The dashboard shown to one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub role: Role,
    pub title: &'static str,
    pub sections: &'static [Section],
}

impl Dashboard {
    /// Whether this dashboard may open `section`.
    pub fn permits(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }

    /// Section shown when the dashboard is first opened.
    pub fn landing(&self) -> Section {
        self.sections.first().copied().unwrap_or(Section::Profile)
    }
}

/// Map a role to its dashboard.
pub fn dispatch(role: Role) -> Dashboard {
    match role {
        Role::Admin => Dashboard {
            role,
            title: "Admin Dashboard",
            sections: ADMIN_SECTIONS,
        },
        Role::Moderator => Dashboard {
            role,
            title: "Moderator Dashboard",
            sections: MODERATOR_SECTIONS,
        },
        Role::Student => Dashboard {
            role,
            title: "Student Dashboard",
            sections: STUDENT_SECTIONS,
        },
    }
}

/// Dashboard for the signed-in user.
pub fn for_session(session: &Session) -> Dashboard {
    dispatch(session.role())
}
