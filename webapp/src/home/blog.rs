use dioxus::prelude::*;

use api::blog::BlogPost;

use crate::common::short_date;

// teasers only; posts are read elsewhere, so these cards are not links
#[component]
fn PostCard(post: BlogPost) -> Element {
    let mut meta = Vec::new();
    if let Some(date) = post.published_at.as_deref() {
        meta.push(short_date(date));
    }
    if let Some(minutes) = post.read_time {
        meta.push(format!("{minutes} min read"));
    }
    let meta = meta.join(" · ");

    rsx! {
        article { class: "card post-card",
            if !meta.is_empty() {
                span { class: "post-meta", "{meta}" }
            }
            h3 { "{post.title}" }
            p { "{post.excerpt}" }
            ul { class: "tag-list",
                for tag in post.tags.iter() {
                    li { class: "tag", "#{tag}" }
                }
            }
        }
    }
}

#[component]
pub fn Blog(posts: Vec<BlogPost>) -> Element {
    rsx! {
        section { id: "blog", class: "reveal",
            div { class: "container",
                h2 { class: "section-title", "Writing" }
                div { class: "grid",
                    for post in posts {
                        PostCard { key: "{post.slug}", post: post.clone() }
                    }
                }
            }
        }
    }
}
