use std::{
    collections::HashMap,
    future::Future,
    path::PathBuf,
    sync::{
        mpsc,
        Arc,
    },
};

use tokio::runtime::Runtime;
use tracing::debug;

use super::{
    TaskKind,
    TaskResult,
};
use crate::core::{
    report,
    MahasiswaError,
    RecordId,
    RecordManagerView,
    StudentRecord,
};

type RepaintHook = Arc<dyn Fn() + Send + Sync>;

/// Runs view operations on a background runtime and hands completions back to the UI thread.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    repaint: Option<RepaintHook>,
    in_flight: HashMap<TaskKind, usize>,
}

impl TaskManager {
    pub fn new() -> Result<Self, MahasiswaError> {
        let runtime = Arc::new(Runtime::new()?);
        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime, receiver, sender, repaint: None, in_flight: HashMap::new() })
    }

    /// Called after every completion so the window wakes up to show it.
    pub fn set_repaint_hook(&mut self, hook: impl Fn() + Send + Sync + 'static) {
        self.repaint = Some(Arc::new(hook));
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            if let Some(count) = self.in_flight.get_mut(&result.kind()) {
                *count = count.saturating_sub(1);
            }
            results.push(result);
        }

        results
    }

    pub fn is_running(&self, kind: TaskKind) -> bool {
        self.in_flight.get(&kind).is_some_and(|count| *count > 0)
    }

    fn spawn<F>(&mut self, kind: TaskKind, task: F)
    where
        F: Future<Output = TaskResult> + Send + 'static,
    {
        *self.in_flight.entry(kind).or_default() += 1;

        let sender = self.sender.clone();
        let repaint = self.repaint.clone();

        self.runtime.spawn(async move {
            let result = task.await;
            debug!(task = result.task_type(), "task finished");
            let _ = sender.send(result);
            if let Some(repaint) = repaint {
                repaint();
            }
        });
    }

    pub fn load_all(&mut self, view: &RecordManagerView) {
        let view = view.clone();
        self.spawn(TaskKind::Load, async move {
            let ok = view.load_all().await.is_ok();
            TaskResult::Finished { kind: TaskKind::Load, ok }
        });
    }

    pub fn submit(&mut self, view: &RecordManagerView) {
        let view = view.clone();
        self.spawn(TaskKind::Submit, async move {
            let ok = view.submit_current().await.is_ok();
            TaskResult::Finished { kind: TaskKind::Submit, ok }
        });
    }

    pub fn remove(&mut self, view: &RecordManagerView, id: RecordId) {
        let view = view.clone();
        self.spawn(TaskKind::Remove, async move {
            let ok = matches!(view.remove(id).await, Ok(true));
            TaskResult::Finished { kind: TaskKind::Remove, ok }
        });
    }

    pub fn export(&mut self, records: Vec<StudentRecord>, path: PathBuf) {
        self.spawn(TaskKind::Export, async move {
            let result = tokio::task::spawn_blocking(move || {
                report::export_csv(&records, &path).map(|_| path).map_err(|e| e.to_string())
            })
            .await
            .unwrap_or_else(|e| Err(format!("Export task failed: {e}")));

            TaskResult::Exported(result)
        });
    }
}
