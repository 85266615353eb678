//! Sample discussion loaded at startup when seeding is enabled.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use ql_core::models::{ArticleId, Author, CommentId, ViewerId};
use ql_core::tree::{CommentNode, Forest};

use crate::MemoryCommentStore;

/// Articles the sample blog ships with.
const SEEDED_ARTICLES: [ArticleId; 3] = [1, 2, 3];

/// Seeded likes come from readers outside the user directory.
const FIRST_SEED_READER: ViewerId = 10_000;

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_default()
}

fn liked(node: CommentNode, likes: u64) -> CommentNode {
    node.with_likes(FIRST_SEED_READER..FIRST_SEED_READER + likes)
}

fn comment(id: CommentId, author: Author, content: &str, published_at: DateTime<Utc>) -> CommentNode {
    CommentNode::new(id, author, content, published_at)
}

fn first_article_discussion() -> Forest {
    let mut forest = Forest::new();

    let reply = liked(
        comment(
            11,
            Author::new(1, "Sarah Chen", "Senior Full Stack Developer"),
            "Thanks Alex! Yes, Server Components are game-changing. I've seen 40-50% bundle size reductions in some cases.",
            at(2024, 1, 15, 17, 15),
        ),
        8,
    );
    forest.push(
        liked(
            comment(
                1,
                Author::new(2, "Alex Rodriguez", "React Developer"),
                "Great article! I'm particularly excited about Server Components. The performance implications are huge.",
                at(2024, 1, 15, 16, 45),
            ),
            12,
        )
        .with_reply(reply),
    );
    forest.push(liked(
        comment(
            2,
            Author::new(3, "Emma Thompson", "Backend Engineer"),
            "The AI integration section resonates with me. I've been using Copilot for 6 months now and my productivity has increased significantly.",
            at(2024, 1, 15, 18, 20),
        ),
        15,
    ));
    forest.push(liked(
        comment(
            3,
            Author::new(4, "Michael Park", "Frontend Designer"),
            "Edge computing is definitely the future. The latency improvements are noticeable, especially for global applications.",
            at(2024, 1, 16, 9, 10),
        ),
        7,
    ));

    forest
}

impl MemoryCommentStore {
    /// The sample blog: articles 1 to 3, with a short discussion on article 1.
    /// New ids start at 12.
    pub fn with_seed_data() -> Self {
        let mut forests: BTreeMap<ArticleId, Forest> = SEEDED_ARTICLES
            .into_iter()
            .map(|id| (id, Forest::new()))
            .collect();
        forests.insert(1, first_article_discussion());

        log::info!("seeded {} articles with sample comments", forests.len());
        Self::from_forests(forests)
    }
}
