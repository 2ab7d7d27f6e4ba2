use crate::answer::resolver::QuizAnswerSpec;
use crate::canon::canonicalizer::NameCanonicalizer;
use crate::color::palette::{Palette, Rgb};
use crate::color::scale::{color_for, summarize, DistributionSummary};
use crate::prelude::*;
use crate::quiz::dataset::DatasetFile;
use itertools::Itertools;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::collections::HashSet;

/// One colorable map entity: canonical key, value, assigned color.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizEntity {
    pub key: String,
    pub value: f64,
    pub color: Rgb,
}

/// A fully assembled quiz: colored entities, legend summary, the palette
/// used (kept for redraws), and the accepted-answer spec.
#[derive(Debug, Clone)]
pub struct Quiz {
    pub title: String,
    pub category: String,
    pub answers: QuizAnswerSpec,
    pub palette: Palette,
    pub entities: Vec<QuizEntity>,
    pub summary: DistributionSummary,
}

/// Shapes one dataset into a quiz: canonicalizes every record's country,
/// merges duplicate canonical keys (first record wins), summarizes the
/// value distribution, and colors each entity by its rank ratio.
///
/// Errors only when the dataset has no records to distribute.
pub fn build_quiz(
    canonicalizer: &NameCanonicalizer,
    dataset: &DatasetFile,
    palette: Palette,
) -> Result<Quiz> {
    let keyed: Vec<(String, f64)> = dataset
        .records
        .par_iter()
        .map(|record| (canonicalizer.canonicalize(&record.country), record.value))
        .collect();

    let mut seen: HashSet<String> = HashSet::new();
    let mut merged: Vec<(String, f64)> = Vec::new();
    for (key, value) in keyed {
        if !seen.insert(key.clone()) {
            tracing::debug!("Duplicate canonical key {:?} in {:?}", key, dataset.title);
            continue;
        }

        merged.push((key, value));
    }

    let values: Vec<f64> = merged.iter().map(|(_, value)| *value).collect();
    let summary = summarize(&values)?;
    let sorted: Vec<f64> = values.iter().copied().sorted_by(f64::total_cmp).collect();

    let entities = merged
        .into_iter()
        .map(|(key, value)| {
            let color = color_for(rank_ratio(&sorted, value), &palette);
            QuizEntity { key, value, color }
        })
        .collect();

    Ok(Quiz {
        title: dataset.title.clone(),
        category: dataset.category.clone(),
        answers: QuizAnswerSpec::new(&dataset.title, dataset.answers.iter()),
        palette,
        entities,
        summary,
    })
}

/// Position of a value within the sorted distribution, as the rank of its
/// first occurrence over `n - 1`. A single-entity distribution sits at the
/// middle of the palette.
fn rank_ratio(sorted: &[f64], value: f64) -> f64 {
    if sorted.len() < 2 {
        return 0.5;
    }

    let rank = sorted.partition_point(|v| *v < value);
    rank as f64 / (sorted.len() - 1) as f64
}
