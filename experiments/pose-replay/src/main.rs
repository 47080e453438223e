mod replay;

use {
    analytics::{Analytics, AnalyticsConfig, AnalyticsPipeline, HoldTrigger},
    futures_util::{SinkExt, StreamExt},
    replay::{parse_line, summarize},
    std::{
        env,
        fs::File,
        io::{self, BufRead, BufReader},
    },
};

const CONFIG_VAR: &str = "STANCE_CONFIG";
const LOG_DIR_VAR: &str = "STANCE_LOG_DIR";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match env::var(LOG_DIR_VAR) {
        Ok(dir) => base::init_file_logger(dir)?,
        Err(_) => base::init_stdout_logger(),
    }

    let config = match env::var(CONFIG_VAR) {
        Ok(path) => {
            log::info!("loading config from {path}");
            AnalyticsConfig::from_file(&path)?
        }
        Err(_) => AnalyticsConfig::default(),
    };

    let input: Box<dyn BufRead> = match env::args().nth(1) {
        Some(path) => {
            log::info!("replaying {path}");
            Box::new(BufReader::new(File::open(&path)?))
        }
        None => {
            log::info!("replaying stdin");
            Box::new(BufReader::new(io::stdin()))
        }
    };

    let mut hold = HoldTrigger::new(config.hold_frames);
    let mut pipeline = AnalyticsPipeline::new(Analytics::new(config)?);
    let mut skipped = 0usize;

    for (number, line) in input.lines().enumerate() {
        let frame = match parse_line(&line?) {
            Ok(Some(frame)) => frame,
            Ok(None) => continue,
            Err(error) => {
                log::warn!("line {}: {error}", number + 1);
                skipped += 1;
                continue;
            }
        };

        pipeline.send(frame).await?;
        match pipeline.next().await {
            Some(Ok(result)) => {
                log::info!("{}", summarize(&result));
                if let Some(event) = hold.observe(&result) {
                    println!("{} held for {} frames", event.label, event.frames);
                }
            }
            Some(Err(error)) => {
                log::warn!("line {}: {error}", number + 1);
                skipped += 1;
            }
            None => break,
        }
    }

    pipeline.close().await?;
    let analytics = pipeline.into_inner();
    log::info!(
        "replayed {} frames ({skipped} skipped), {} retained",
        analytics.frames_recorded(),
        analytics.history().len()
    );
    if let Some(result) = analytics.result() {
        println!("final: {}", summarize(result));
        for hint in result.suggestions() {
            println!("  - {hint}");
        }
    }
    Ok(())
}
