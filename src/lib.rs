//! # Descriptor Batch Calc
//!
//! 一个把分子描述符计算委托给远程服务的批处理 Rust 库
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Clients）
//! - `clients/` - 远程计算服务的 HTTP 封装
//! - `CalculationService` - invoke / ping 能力边界
//! - `HttpCalcClient` - 基于 reqwest 的实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个 (分子, 描述符) 对
//! - `RetryingCaller` - 固定预算的背靠背重试能力
//! - `ResultParser` - 原始字符串 → 类型化结果的解析能力
//!
//! ### ③ 边界层（Registry / Progress）
//! - `registry` - 内部本体标识符 → 远程描述符 ID 的元数据解析
//! - `progress` - 进度汇报与协作式取消
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_calculator` - 批次计算器：工作量统计、
//!   服务预检、顺序遍历、结果聚合
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod progress;
pub mod registry;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use clients::{CalculationService, HttpCalcClient};
pub use config::Config;
pub use error::{CalcError, CalcResult};
pub use models::{
    BatchDefinition, BatchOutcome, BatchResult, DescriptorRequest, DescriptorResult, Molecule,
    MoleculeResult, RemoteDescriptor,
};
pub use orchestrator::BatchCalculator;
pub use progress::{CancelFlag, LogProgress, ProgressSink};
pub use registry::{DescriptorRegistry, InMemoryRegistry};
pub use services::{ResultParser, RetryingCaller};
