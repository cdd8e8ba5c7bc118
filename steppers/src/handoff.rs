use futures::Stream;
use tokio::sync::{mpsc, oneshot};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, info, info_span, Instrument};

type Demand<T> = oneshot::Sender<T>;

/// Consumer side of a push-style stepper running as its own task.
///
/// Values are handed over one at a time: the producer only computes a value once a consumer asks
/// for it, so it never runs ahead of consumption. The producer ends the handoff after its last
/// value, after [`Handoff::cancel`], or as soon as the handle is dropped.
pub struct Handoff<T> {
    demands: mpsc::Sender<Demand<T>>,
    cancel_token: CancellationToken,
    producer_tracker: TaskTracker,
}

impl<T: Send + 'static> Handoff<T> {
    /// Spawns the producer onto the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a tokio runtime.
    pub(crate) fn spawn<S>(name: &'static str, source: S, cancel_token: CancellationToken) -> Self
    where
        S: Iterator<Item = T> + Send + 'static,
    {
        let (demands, consumer_demands) = mpsc::channel::<Demand<T>>(1);

        let producer_tracker = TaskTracker::new();
        producer_tracker.spawn(
            produce(name, source, consumer_demands, cancel_token.clone())
                .instrument(info_span!("producer", name)),
        );
        producer_tracker.close();

        Self {
            demands,
            cancel_token,
            producer_tracker,
        }
    }

    /// Waits for the next value; `None` once the producer has ended the handoff.
    pub async fn recv(&mut self) -> Option<T> {
        let (demand, value) = oneshot::channel::<T>();

        self.demands.send(demand).await.ok()?;

        value.await.ok()
    }

    pub fn into_stream(self) -> impl Stream<Item = T> {
        futures::stream::unfold(self, |mut handoff| async move {
            handoff.recv().await.map(|value| (value, handoff))
        })
    }
}

impl<T> Handoff<T> {
    /// Stops the producer before its next handoff.
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.producer_tracker.is_empty()
    }

    /// Cancels the producer and waits until its task has exited.
    pub async fn shutdown(self) {
        self.cancel();
        self.producer_tracker.wait().await;
    }
}

async fn produce<T, S>(
    name: &'static str,
    mut source: S,
    mut consumer_demands: mpsc::Receiver<Demand<T>>,
    cancel_token: CancellationToken,
) where
    S: Iterator<Item = T>,
{
    info!("Producer:{name} started");

    // A value whose consumer stopped waiting goes to the next demand
    let mut undelivered: Option<T> = None;
    let mut handed_over = 0usize;

    loop {
        tokio::select! {
            biased;

            _ = cancel_token.cancelled() => {
                info!("Producer:{name} cancelled after {handed_over} values");
                break;
            }
            demand = consumer_demands.recv() => {
                let Some(consumer) = demand else {
                    info!("Producer:{name} dropped by its consumer after {handed_over} values");
                    break;
                };

                let Some(value) = undelivered.take().or_else(|| source.next()) else {
                    info!("Producer:{name} exhausted after {handed_over} values");
                    break;
                };

                match consumer.send(value) {
                    Ok(()) => handed_over += 1,
                    Err(value) => {
                        debug!("Producer:{name} keeping value for the next demand");
                        undelivered = Some(value);
                    }
                }
            }
        }
    }
}
