//! 进度汇报与协作式取消 - 边界层
//!
//! 编排器在批次开始时上报总工作量，每个 (分子, 描述符) 对推进 1 个
//! 工作单元并标注子任务名称，结束时发出完成信号；
//! 取消通过轮询 `is_cancelled` 协作式生效，不会打断进行中的远程调用。

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::info;

/// 进度接收器
pub trait ProgressSink {
    /// 批次开始，上报任务名称和总工作单元数
    fn begin_task(&self, name: &str, total_units: usize);

    /// 标注当前子任务名称
    fn sub_task(&self, name: &str);

    /// 推进指定数量的工作单元
    fn worked(&self, units: usize);

    /// 批次结束
    fn done(&self);

    /// 是否已请求取消
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// 共享的取消标志
///
/// 调用方持有一份，传给 `LogProgress`；在任意线程调用 `cancel()`，
/// 编排器会在下一个 (分子, 描述符) 对开始前观察到
#[derive(Debug, Default, Clone)]
pub struct CancelFlag {
    flag: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// 请求取消
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// 基于 tracing 的进度接收器
///
/// 把进度输出到日志，适合无界面的批处理运行
#[derive(Debug, Default)]
pub struct LogProgress {
    total: AtomicUsize,
    completed: AtomicUsize,
    cancel: CancelFlag,
}

impl LogProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建共享取消标志的进度接收器
    pub fn with_cancel_flag(cancel: CancelFlag) -> Self {
        Self {
            total: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
            cancel,
        }
    }
}

impl ProgressSink for LogProgress {
    fn begin_task(&self, name: &str, total_units: usize) {
        self.total.store(total_units, Ordering::SeqCst);
        self.completed.store(0, Ordering::SeqCst);
        info!("🚀 {} (共 {} 个工作单元)", name, total_units);
    }

    fn sub_task(&self, name: &str) {
        info!("  ▶ {}", name);
    }

    fn worked(&self, units: usize) {
        let done = self.completed.fetch_add(units, Ordering::SeqCst) + units;
        let total = self.total.load(Ordering::SeqCst);
        info!("  进度: {}/{}", done, total);
    }

    fn done(&self) {
        info!("✅ 批次处理完成");
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}
