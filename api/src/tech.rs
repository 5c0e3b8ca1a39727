use serde::{Deserialize, Serialize};

use crate::endpoint;

// structs and types

// a single entry in the tech stack grid
//
// the studio reuses the generic draft fields for this, so category and level are
// free text rather than enums
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechItem {
    pub name: String,
    pub category: String,
    pub level: String,
}

// messages

// add a tech stack entry from the studio
endpoint!(CreateTech, "/tech");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateTechReq {
    pub name: String,
    pub category: String,
    pub level: String,
}
