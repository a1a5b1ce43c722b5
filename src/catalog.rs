// SPDX-FileCopyrightText: 2026 The pressgate authors
//
// SPDX-License-Identifier: Apache-2.0

use once_cell::sync::Lazy;

/// A catalog record. Everything except `id` and `premium` is display
/// metadata that the access decision never looks at.
#[derive(Clone, Debug)]
pub(crate) struct Article {
    pub(crate) id: &'static str,
    pub(crate) title: &'static str,
    pub(crate) excerpt: &'static str,
    pub(crate) body: &'static str,
    pub(crate) category: &'static str,
    pub(crate) image: &'static str,
    pub(crate) read_time: u32,
    pub(crate) published_at: &'static str,
    pub(crate) premium: bool,
}

static ARTICLES: Lazy<Vec<Article>> = Lazy::new(|| {
    vec![
        Article {
            id: "1",
            title: "The Future of Web Development",
            excerpt: "Exploring the latest trends and technologies shaping the future of web development.",
            body: "Web development is evolving at an unprecedented pace. From AI-assisted \
                   tooling to new frameworks and paradigms, developers need to stay ahead of \
                   the curve. WebAssembly promises near-native performance on the web, opening \
                   up applications that were previously desktop-only.",
            category: "Technology",
            image: "https://images.pexels.com/photos/11035380/pexels-photo-11035380.jpeg",
            read_time: 5,
            published_at: "2024-01-15",
            premium: false,
        },
        Article {
            id: "2",
            title: "Advanced React Patterns",
            excerpt: "Deep dive into compound components, render props, and custom hooks.",
            body: "Compound components let a set of components share implicit state while \
                   keeping a declarative surface. Render props and custom hooks round out a \
                   toolkit for reusable behavior without inheritance.",
            category: "Development",
            image: "https://images.pexels.com/photos/11035471/pexels-photo-11035471.jpeg",
            read_time: 8,
            published_at: "2024-01-12",
            premium: true,
        },
        Article {
            id: "3",
            title: "Building Scalable APIs",
            excerpt: "Best practices for designing and implementing APIs that grow with you.",
            body: "Versioning, pagination, and idempotent endpoints keep an API stable while \
                   the system behind it evolves. Rate limiting and caching carry the load once \
                   traffic arrives.",
            category: "Backend",
            image: "https://images.pexels.com/photos/1181467/pexels-photo-1181467.jpeg",
            read_time: 12,
            published_at: "2024-01-08",
            premium: true,
        },
        Article {
            id: "4",
            title: "Introduction to TypeScript",
            excerpt: "A practical tour of static typing for JavaScript developers.",
            body: "Structural typing, generics, and narrowing give JavaScript projects the \
                   confidence of a compiler without giving up the ecosystem.",
            category: "Programming",
            image: "https://images.pexels.com/photos/4164418/pexels-photo-4164418.jpeg",
            read_time: 6,
            published_at: "2024-01-05",
            premium: false,
        },
        Article {
            id: "5",
            title: "Modern CSS Techniques",
            excerpt: "Container queries, cascade layers, and the end of the media-query era.",
            body: "Container queries finally let components respond to their own size. \
                   Cascade layers bring order to specificity wars in large stylesheets.",
            category: "Design",
            image: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg",
            read_time: 7,
            published_at: "2024-01-02",
            premium: true,
        },
        Article {
            id: "6",
            title: "Getting Started with Node.js",
            excerpt: "From zero to a running HTTP service with the Node.js runtime.",
            body: "The event loop is the heart of Node.js. Understanding how it schedules \
                   callbacks explains both its throughput and its sharp edges.",
            category: "Backend",
            image: "https://images.pexels.com/photos/574071/pexels-photo-574071.jpeg",
            read_time: 9,
            published_at: "2023-12-28",
            premium: false,
        },
    ]
});

pub(crate) fn all() -> &'static [Article] {
    &ARTICLES
}

pub(crate) fn find(id: &str) -> Option<&'static Article> {
    ARTICLES.iter().find(|article| article.id == id)
}

/// Free-text search over title and excerpt plus an exact category filter,
/// both optional.
pub(crate) fn filter(query: Option<&str>, category: Option<&str>) -> Vec<&'static Article> {
    let query = query.map(str::to_lowercase);
    ARTICLES
        .iter()
        .filter(|article| {
            query.as_deref().map_or(true, |q| {
                article.title.to_lowercase().contains(q)
                    || article.excerpt.to_lowercase().contains(q)
            })
        })
        .filter(|article| category.map_or(true, |c| article.category.eq_ignore_ascii_case(c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_ids_are_present() {
        // The walkthrough scenarios lean on these two records.
        assert!(matches!(find("1"), Some(article) if !article.premium));
        assert!(matches!(find("2"), Some(article) if article.premium));
        assert!(find("999").is_none());
    }

    #[test]
    fn filter_matches_title_and_excerpt() {
        let by_title = filter(Some("react"), None);
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, "2");

        let by_excerpt = filter(Some("static typing"), None);
        assert_eq!(by_excerpt.len(), 1);
        assert_eq!(by_excerpt[0].id, "4");
    }

    #[test]
    fn filter_by_category() {
        let backend = filter(None, Some("Backend"));
        assert_eq!(backend.len(), 2);
        assert!(backend.iter().all(|article| article.category == "Backend"));

        assert_eq!(filter(None, None).len(), all().len());
    }
}
