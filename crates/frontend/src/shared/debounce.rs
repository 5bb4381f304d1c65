//! Debounce как отменяемый отложенный вызов
//!
//! Каждый новый вызов отменяет ранее запланированный, поэтому из серии
//! частых событий выполняется только последнее - после того как поток
//! событий затих на `delay_ms`.

use gloo_timers::callback::Timeout;

/// Отложенная задача
pub type Task = Box<dyn FnOnce() + 'static>;

/// Планировщик отложенных задач
pub trait Scheduler {
    type Handle;

    /// Запланировать `task` через `delay_ms` миллисекунд
    fn schedule(&self, delay_ms: u32, task: Task) -> Self::Handle;

    /// Отменить задачу. Для уже выполненной задачи - ничего не делает.
    fn cancel(&self, handle: Self::Handle);
}

/// Планировщик на таймерах браузера
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Task) -> Timeout {
        Timeout::new(delay_ms, task)
    }

    fn cancel(&self, handle: Timeout) {
        let _ = handle.cancel();
    }
}

/// Debounce с явным хранением дескриптора отложенного вызова
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: None,
        }
    }

    /// Отменяет предыдущий отложенный вызов (если есть) и планирует новый
    pub fn call(&mut self, task: impl FnOnce() + 'static) {
        self.cancel();
        let handle = self.scheduler.schedule(self.delay_ms, Box::new(task));
        self.pending = Some(handle);
    }

    /// Отменяет отложенный вызов
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl<S: Scheduler> Drop for Debouncer<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}
