//! Post model and the static post catalog.
//!
//! Posts are immutable once loaded: the collection is defined in-source,
//! there is no creation or deletion lifecycle, and every other component
//! refers to posts by id.

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;

/// A single blog post under the AI/ML category.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    /// Unique id, referenced by the expansion state
    pub id: u32,
    /// Title shown in the list and when expanded
    pub title: String,
    /// One-paragraph summary shown in the collapsed list
    pub description: String,
    /// Full body, markdown
    pub content: String,
    /// Publication timestamp; the sort key
    pub published_at: DateTime<Utc>,
    /// Human-readable read time, e.g. "5 min read"
    pub read_time: String,
    /// Topic tags in display order
    pub tags: Vec<String>,
}

impl Post {
    /// Publication date formatted for display, e.g. "Jul 1, 2023".
    pub fn published_label(&self) -> String {
        self.published_at.format("%b %-d, %Y").to_string()
    }
}

fn post(
    id: u32,
    title: &str,
    description: &str,
    content: &str,
    published_at: DateTime<Utc>,
    read_time: &str,
    tags: &[&str],
) -> Post {
    Post {
        id,
        title: title.to_string(),
        description: description.to_string(),
        content: content.to_string(),
        published_at,
        read_time: read_time.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// The static post catalog, in authoring order.
///
/// Authoring order is the tie-break when two posts share a timestamp.
pub static CATALOG: Lazy<Vec<Post>> = Lazy::new(|| {
    vec![
        post(
            1,
            "Machine Learning Project Insights",
            "Exploring the latest in machine learning applications.",
            "# Machine Learning Project Insights\n\n\
             Over the past few months I have been building small ML projects \
             end to end: data collection, training, and a thin serving layer.\n\n\
             A few things that surprised me:\n\n\
             - **Data cleaning** dominates the schedule. Model choice rarely does.\n\
             - Simple baselines (`logistic regression`, gradient boosting) are \
             hard to beat on tabular data.\n\
             - Evaluation drift is real: freeze your test set *early*.\n\n\
             ```python\n\
             score = cross_val_score(model, X, y, cv=5).mean()\n\
             ```\n\n\
             More write-ups to follow as the projects mature.",
            datetime(2023, 7, 1, 9, 0, 0),
            "5 min read",
            &["machine-learning", "projects"],
        ),
        post(
            2,
            "Attention Is Most of What You Need",
            "Notes from re-reading the transformer paper with fresh eyes.",
            "# Attention Is Most of What You Need\n\n\
             Re-reading the original transformer paper, the part that aged \
             best is not the architecture diagram but the *scaling* argument.\n\n\
             The attention matrix is just a soft lookup table. Everything \
             else - positional encodings, layer norm placement - has been \
             renegotiated by later work.\n\n\
             **Takeaway**: read old papers for the constraints they name, \
             not the solutions they pick.",
            datetime(2023, 8, 14, 18, 30, 0),
            "7 min read",
            &["transformers", "papers"],
        ),
        post(
            3,
            "Small Models, Local Machines",
            "Why I run quantized models on a laptop and what breaks.",
            "# Small Models, Local Machines\n\n\
             Quantized 7B models run comfortably on a laptop now. The \
             interesting failures are not quality failures:\n\n\
             - Tokenizer mismatches between converters\n\
             - Context-window truncation that silently eats the system prompt\n\
             - Sampling defaults tuned for much larger models\n\n\
             Local inference makes iteration *cheap*, and cheap iteration \
             beats clever prompting.",
            datetime(2024, 1, 20, 12, 0, 0),
            "4 min read",
            &["llm", "local-inference"],
        ),
        post(
            4,
            "Evaluation Is the Product",
            "A harness you trust is worth more than a model you like.",
            "# Evaluation Is the Product\n\n\
             Every ML project I have shipped ended up with the same shape: \
             the model is a commodity, the evaluation harness is the asset.\n\n\
             A good harness answers three questions quickly:\n\n\
             1. Did this change help?\n\
             2. What did it break?\n\
             3. Which examples should I look at?\n\n\
             If answering any of those takes more than a minute, fix the \
             harness before touching the model.",
            datetime(2024, 6, 2, 8, 15, 0),
            "6 min read",
            &["evaluation", "mlops"],
        ),
    ]
});

fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    // Call sites use valid calendar dates only.
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
        .single()
        .expect("valid catalog date")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut ids: Vec<u32> = CATALOG.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn test_catalog_is_nonempty_with_content() {
        assert!(!CATALOG.is_empty());
        for p in CATALOG.iter() {
            assert!(!p.title.is_empty());
            assert!(!p.description.is_empty());
            assert!(!p.content.is_empty());
            assert!(!p.read_time.is_empty());
        }
    }

    #[test]
    fn test_published_label_format() {
        let p = &CATALOG[0];
        assert_eq!(p.published_label(), "Jul 1, 2023");
    }
}
