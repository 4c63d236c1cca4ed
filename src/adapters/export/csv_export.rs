//! CSV export of extracted articles. Uses the `csv` crate for safe quoting.

use crate::domain::{ArticleContentItem, DomainError};
use std::fmt;

const HEADER: [&str; 6] = ["id", "title", "source", "url", "hygge_score", "final_score"];

/// Convert articles to a CSV string, one row per article in the given order.
///
/// Format: `id;title;source;url;hygge_score;final_score` (semicolon-delimited).
/// Missing scores are written as empty cells.
pub fn articles_to_csv(articles: &[&ArticleContentItem]) -> Result<String, DomainError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .from_writer(Vec::new());

    wtr.write_record(HEADER).map_err(export_error)?;

    for article in articles {
        // Titles come from scrapers and may carry line breaks.
        let title = article.base.title.replace('\n', " ").replace('\r', "");
        let hygge = score_cell(article.hygge_score);
        let final_score = score_cell(article.final_score);

        wtr.write_record([
            article.base.id.as_str(),
            title.as_str(),
            article.news_source.name.as_str(),
            article.url.as_str(),
            hygge.as_str(),
            final_score.as_str(),
        ])
        .map_err(export_error)?;
    }

    wtr.flush().map_err(export_error)?;
    let bytes = wtr.into_inner().map_err(export_error)?;
    String::from_utf8(bytes).map_err(export_error)
}

fn export_error(e: impl fmt::Display) -> DomainError {
    DomainError::Export(format!("csv: {}", e))
}

fn score_cell(score: Option<f64>) -> String {
    score.map(|s| s.to_string()).unwrap_or_default()
}
