use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{blog::CreateBlogReq, project::CreateProjectReq, tech::CreateTechReq};

// the three kinds of content the studio can create
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    #[default]
    Project,
    Blog,
    Tech,
}

impl ContentKind {
    pub fn all() -> [ContentKind; 3] {
        [ContentKind::Project, ContentKind::Blog, ContentKind::Tech]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Project => "project",
            ContentKind::Blog => "blog",
            ContentKind::Tech => "tech",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            ContentKind::Project => "/projects",
            ContentKind::Blog => "/blog",
            ContentKind::Tech => "/tech",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "project" => Ok(ContentKind::Project),
            "blog" => Ok(ContentKind::Blog),
            "tech" => Ok(ContentKind::Tech),
            other => Err(anyhow::Error::msg(format!("unknown content kind {other}"))),
        }
    }
}

// one create request, already shaped for its endpoint
//
// untagged so that serializing the enum produces exactly the body the backend expects
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreateContentReq {
    Project(CreateProjectReq),
    Blog(CreateBlogReq),
    Tech(CreateTechReq),
}

impl CreateContentReq {
    pub fn kind(&self) -> ContentKind {
        match self {
            CreateContentReq::Project(_) => ContentKind::Project,
            CreateContentReq::Blog(_) => ContentKind::Blog,
            CreateContentReq::Tech(_) => ContentKind::Tech,
        }
    }

    pub fn path(&self) -> &'static str {
        self.kind().path()
    }
}
