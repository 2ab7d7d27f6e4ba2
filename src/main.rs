use dotenv::dotenv;
use geoquiz_engine::answer::resolver::AnswerResolver;
use geoquiz_engine::canon::canonicalizer::NameCanonicalizer;
use geoquiz_engine::color::palette::pick_palette;
use geoquiz_engine::prelude::*;
use geoquiz_engine::quiz::dataset::load_datasets;
use geoquiz_engine::quiz::quiz_service::build_quiz;
use geoquiz_engine::service::log_service::setup_logging;
use geoquiz_engine::service::var_service::{get_dataset_dir, get_palette_strategy};
use rand::thread_rng;
use std::io::{stdin, stdout, BufRead, Write};
use std::path::Path;

fn main() -> Result<()> {
    dotenv().ok();
    setup_logging()?;

    let dataset_dir = get_dataset_dir()?;
    let strategy = get_palette_strategy()?;
    let datasets = load_datasets(Path::new(&dataset_dir))?;
    if datasets.is_empty() {
        tracing::warn!("No datasets found in {}", dataset_dir);
        return Ok(());
    }

    let canonicalizer = NameCanonicalizer::new();
    let resolver = AnswerResolver::new();
    let mut rng = thread_rng();
    let stdin = stdin();

    for dataset in &datasets {
        let palette = pick_palette(strategy, &dataset.category, dataset.records.len(), &mut rng);
        let quiz = match build_quiz(&canonicalizer, dataset, palette) {
            Ok(quiz) => quiz,
            Err(e) => {
                tracing::error!("Skipping dataset {:?}: {}", dataset.title, e);
                continue;
            }
        };

        println!(
            "\n{} countries colored by an unnamed statistic.",
            quiz.entities.len()
        );
        println!(
            "Legend: min {} | q1 {} | median {} | q3 {} | max {}",
            quiz.summary.min, quiz.summary.q1, quiz.summary.median, quiz.summary.q3, quiz.summary.max
        );
        print!("Name the statistic: ");
        stdout().flush()?;

        let mut guess = String::new();
        stdin.lock().read_line(&mut guess)?;
        match resolver.is_correct(&guess, &quiz.answers) {
            true => println!("Correct: {}", quiz.answers.title()),
            false => println!("Not quite. It was: {}", quiz.answers.title()),
        }
    }

    Ok(())
}
