/// Интерактивный прогноз цен на жилье

use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use housing_ml::data::DataLoader;
use housing_ml::pipeline::HousingPipeline;
use housing_ml::preprocessing::RAW_FEATURES;
use housing_ml::types::PipelineConfig;

#[derive(Parser)]
#[command(name = "housing-ml")]
#[command(about = "Прогноз цен на жилье: линейная регрессия и kNN")]
struct Cli {
    /// Путь к CSV с датасетом
    #[arg(short, long)]
    data: PathBuf,

    /// Доля тестовой выборки
    #[arg(long, default_value_t = 0.2)]
    test_fraction: f64,

    /// Seed разбиения train/test
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Число соседей для kNN
    #[arg(short = 'k', long, default_value_t = 5)]
    neighbors: usize,
}

// Подсказки диапазонов - справка для ввода, ядро их не проверяет
const RANGE_HINTS: [&str; 8] = [
    "0.5 - 15.0",
    "1 - 52",
    "1 - 10",
    "0.5 - 5",
    "3 - 36000",
    "1 - 10",
    "32 - 42",
    "-125 - -113",
];

fn main() -> anyhow::Result<()> {
    // Инициализация логирования
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let records = DataLoader::load_csv(&cli.data)
        .with_context(|| format!("Failed to load dataset: {:?}", cli.data))?;
    tracing::info!("Loaded {} records from {:?}", records.len(), cli.data);

    let config = PipelineConfig {
        test_fraction: cli.test_fraction,
        seed: cli.seed,
        neighbors: cli.neighbors,
    };
    let pipeline = HousingPipeline::fit(&records, &config)?;

    println!("Качество моделей на тестовой выборке:");
    for report in pipeline.reports() {
        println!(
            "  {:8} MAE {:.4}  R2 {:.4}",
            report.model, report.metrics.mae, report.metrics.r2
        );
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("Введите значения признаков (пустая строка - выход):");

        let mut values = HashMap::new();
        for (name, hint) in RAW_FEATURES.iter().zip(RANGE_HINTS.iter()) {
            match read_value(&mut lines, name, hint)? {
                Some(value) => values.insert((*name).to_string(), value),
                None => return Ok(()),
            };
        }

        let predictions = pipeline.predict_one(&values)?;

        println!("Прогноз (в сотнях тысяч долларов):");
        for (model, value) in &predictions {
            println!("  {:8} {:.3}", model, value);
        }
    }
}

fn read_value(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    name: &str,
    hint: &str,
) -> anyhow::Result<Option<f64>> {
    loop {
        print!("  {} [{}]: ", name, hint);
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(None),
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        match trimmed.parse::<f64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("  Не число, попробуйте еще раз"),
        }
    }
}
