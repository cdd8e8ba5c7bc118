use std::time::Instant;

use futures::StreamExt;
use steppers::config::{ChunkConfig, SequenceConfig};
use steppers::*;

use tracing::{error, info};

#[tokio::main]
async fn main() {
    let subscriber = tracing_subscriber::FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber).expect("Tracing setup failed");

    let now = Instant::now();

    if let Err(err) = run_playground().await {
        error!("Playground failed: {err}");
    }

    let elapsed = now.elapsed();
    info!("Elapsed: {:.2?}", elapsed);
}

async fn run_playground() -> StepperResult<()> {
    let sequence_config = SequenceConfig::new(-7..10).with_step(5);
    let chunk_config = ChunkConfig::new(2);
    let items: Vec<i64> = (1..=5).collect();

    let pulled: Vec<_> = SequenceStepper::from_config(&sequence_config)?.collect();
    info!("Pulled sequence: {pulled:?}");

    let pulled_chunks: Vec<_> = ChunkStepper::from_config(&items, &chunk_config)?.collect();
    info!("Pulled chunks: {pulled_chunks:?}");

    let generated = drain(generator(3, 12, 2))?;
    info!("Generated sequence: {generated:?}");

    let pushed: Vec<_> = spawn_sequence(&sequence_config)?
        .into_stream()
        .collect()
        .await;
    info!("Pushed sequence: {pushed:?}");

    let mut pushed_chunks = spawn_chunks::<i64>(items, &chunk_config)?;
    while let Some(chunk) = pushed_chunks.recv().await {
        info!("Pushed chunk {:?}: {:?}", chunk.window(), &*chunk);
    }

    match xrange(0, 1, 0) {
        Err(err) => info!("Rejected misconfigured xrange: {err}"),
        Ok(handoff) => handoff.shutdown().await,
    }

    Ok(())
}
