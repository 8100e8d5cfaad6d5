//! Organization records shown on the dashboard list screens

use serde::Serialize;

use super::{Dated, Named};
use crate::types::{AttendanceType, LocationType};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Branch {
    pub id: u32,
    pub name: &'static str,
    pub created_at: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    pub id: u32,
    pub name: &'static str,
    pub places: &'static [&'static str],
    pub branch: &'static str,
}

/// A geofenced location employees check in at
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    pub id: u32,
    pub name: &'static str,
    pub location_type: LocationType,
    pub attendance_type: AttendanceType,
    pub lat: f64,
    pub lng: f64,
    /// Radius in metres for points, width for areas
    pub width: Option<u32>,
    /// Vertex count for polygons
    pub points: Option<u32>,
}

impl Place {
    /// One-line description of the boundary
    pub fn boundary(&self) -> String {
        match (self.location_type, self.width, self.points) {
            (LocationType::Point, Some(width), _) => format!("Radius: {}m", width),
            (LocationType::Area, Some(width), _) => format!("Width: {}m", width),
            (LocationType::Polygon, _, Some(points)) => format!("Points: {}", points),
            (kind, _, _) => kind.to_string(),
        }
    }
}

/// A work site grouping several employee groups
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub id: u32,
    pub name: &'static str,
    pub groups: &'static [&'static str],
    pub note: &'static str,
    pub created_at: &'static str,
}

/// An employee and the fields they are assigned to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    pub id: u32,
    pub name: &'static str,
    pub phone: &'static str,
    pub fields: &'static [&'static str],
}

macro_rules! impl_named {
    ($($ty:ty),*) => {
        $(impl Named for $ty {
            fn name(&self) -> &str {
                self.name
            }
        })*
    };
}

impl_named!(Branch, Group, Place, Field, Assignment);

impl Dated for Branch {
    fn created_at(&self) -> &str {
        self.created_at
    }
}

impl Dated for Field {
    fn created_at(&self) -> &str {
        self.created_at
    }
}

const BRANCHES: &[Branch] = &[
    Branch { id: 1, name: "Cairo HQ", created_at: "2025-01-15" },
    Branch { id: 2, name: "Alexandria Branch", created_at: "2025-03-22" },
    Branch { id: 3, name: "Giza Office", created_at: "2025-06-10" },
    Branch { id: 4, name: "Mansoura Branch", created_at: "2025-09-01" },
];

const GROUPS: &[Group] = &[
    Group {
        id: 1,
        name: "Engineering Team",
        places: &["Main Office", "Factory Floor"],
        branch: "Cairo HQ",
    },
    Group { id: 2, name: "Sales Team", places: &["Main Office"], branch: "Alexandria Branch" },
    Group {
        id: 3,
        name: "Warehouse Staff",
        places: &["Warehouse A", "Remote Site B"],
        branch: "Giza Office",
    },
    Group { id: 4, name: "Management", places: &["Main Office"], branch: "Cairo HQ" },
];

const PLACES: &[Place] = &[
    Place {
        id: 1,
        name: "Main Office",
        location_type: LocationType::Point,
        attendance_type: AttendanceType::CheckInOut,
        lat: 30.0444,
        lng: 31.2357,
        width: Some(50),
        points: None,
    },
    Place {
        id: 2,
        name: "Warehouse A",
        location_type: LocationType::Polygon,
        attendance_type: AttendanceType::CheckIn,
        lat: 30.0131,
        lng: 31.2089,
        width: None,
        points: Some(5),
    },
    Place {
        id: 3,
        name: "Factory Floor",
        location_type: LocationType::Area,
        attendance_type: AttendanceType::CheckInOut,
        lat: 30.0561,
        lng: 31.2394,
        width: Some(200),
        points: None,
    },
    Place {
        id: 4,
        name: "Remote Site B",
        location_type: LocationType::Polygon,
        attendance_type: AttendanceType::CheckIn,
        lat: 31.2001,
        lng: 29.9187,
        width: None,
        points: Some(8),
    },
];

const FIELDS: &[Field] = &[
    Field {
        id: 1,
        name: "Construction Site Alpha",
        groups: &["Engineering Team", "Warehouse Staff"],
        note: "Active site, safety gear required",
        created_at: "2025-02-10",
    },
    Field {
        id: 2,
        name: "Downtown Office Block",
        groups: &["Sales Team", "Management"],
        note: "Standard hours apply",
        created_at: "2025-04-18",
    },
    Field {
        id: 3,
        name: "Logistics Hub",
        groups: &["Warehouse Staff"],
        note: "24/7 shift rotation",
        created_at: "2025-07-05",
    },
];

const ASSIGNMENTS: &[Assignment] = &[
    Assignment {
        id: 1,
        name: "Ahmed Hassan",
        phone: "+20 112 345 6789",
        fields: &["Construction Site Alpha", "Logistics Hub"],
    },
    Assignment {
        id: 2,
        name: "Sara Mohamed",
        phone: "+20 100 987 6543",
        fields: &["Downtown Office Block"],
    },
    Assignment {
        id: 3,
        name: "Omar Ali",
        phone: "+20 115 222 3344",
        fields: &["Construction Site Alpha"],
    },
    Assignment {
        id: 4,
        name: "Nour Ibrahim",
        phone: "+20 101 555 7788",
        fields: &["Logistics Hub", "Downtown Office Block"],
    },
    Assignment {
        id: 5,
        name: "Youssef Kamal",
        phone: "+20 112 444 9900",
        fields: &["Construction Site Alpha", "Downtown Office Block", "Logistics Hub"],
    },
];

pub fn branches() -> &'static [Branch] {
    BRANCHES
}

pub fn groups() -> &'static [Group] {
    GROUPS
}

pub fn places() -> &'static [Place] {
    PLACES
}

pub fn fields() -> &'static [Field] {
    FIELDS
}

pub fn assignments() -> &'static [Assignment] {
    ASSIGNMENTS
}
