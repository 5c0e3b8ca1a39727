use serde::{Deserialize, Serialize};

use crate::endpoint;

// structs and types

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogPost {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub read_time: Option<u32>,
    pub published_at: Option<String>,
}

// messages

// create a new blog post from the studio
endpoint!(CreateBlog, "/blog");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateBlogReq {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub read_time: u32,
}
