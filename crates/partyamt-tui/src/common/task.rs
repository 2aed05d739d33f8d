//! Async task bookkeeping.
//!
//! Every fetch is tagged with a `TaskId`. Results carry the id back so the
//! reducer can drop anything that does not belong to the active task.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    EventList,
    TagCatalog,
}

/// Task lifecycle state (stored in `AppState`, mutated only by the reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, id: TaskId) {
        self.active = Some(id);
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
        }
        ok
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub event_list: TaskState,
    pub tag_catalog: TaskState,
}

impl Tasks {
    pub fn state(&self, kind: TaskKind) -> &TaskState {
        match kind {
            TaskKind::EventList => &self.event_list,
            TaskKind::TagCatalog => &self.tag_catalog,
        }
    }

    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::EventList => &mut self.event_list,
            TaskKind::TagCatalog => &mut self.tag_catalog,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.event_list.is_running() || self.tag_catalog.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_ids_are_unique() {
        let mut seq = TaskSeq::default();
        let a = seq.next_id();
        let b = seq.next_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_finish_only_matching_task() {
        let mut seq = TaskSeq::default();
        let mut tasks = Tasks::default();
        let stale = seq.next_id();
        let current = seq.next_id();

        tasks.state_mut(TaskKind::EventList).on_started(current);

        assert!(!tasks.state_mut(TaskKind::EventList).finish_if_active(stale));
        assert!(tasks.is_any_running());
        assert!(tasks.state_mut(TaskKind::EventList).finish_if_active(current));
        assert!(!tasks.state(TaskKind::EventList).is_running());
    }
}
