use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Load,
    Submit,
    Remove,
    Export,
}

#[derive(Debug, Clone)]
pub enum TaskResult {
    Finished { kind: TaskKind, ok: bool },
    Exported(Result<PathBuf, String>),
}

impl TaskResult {
    pub fn kind(&self) -> TaskKind {
        match self {
            TaskResult::Finished { kind, .. } => *kind,
            TaskResult::Exported(_) => TaskKind::Export,
        }
    }

    pub fn task_type(&self) -> &'static str {
        match self.kind() {
            TaskKind::Load => "load_all",
            TaskKind::Submit => "submit",
            TaskKind::Remove => "remove",
            TaskKind::Export => "export",
        }
    }
}
