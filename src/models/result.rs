//! 计算结果数据模型
//!
//! 单个描述符的结果（成功或失败）、单个分子的结果序列，
//! 以及整个批次的最终结果

use crate::models::descriptor::DescriptorRequest;
use crate::models::molecule::Molecule;
use chrono::{DateTime, Local};

/// 单个描述符的计算结果
///
/// 成功和失败两种形态互斥：
/// - `Values`: 数值序列 + 等长的标签序列 + 来源请求
/// - `Failed`: 来源请求 + 人类可读的错误信息，无数值
#[derive(Debug, Clone, PartialEq)]
pub enum DescriptorResult {
    /// 计算成功
    Values {
        request: DescriptorRequest,
        values: Vec<f64>,
        labels: Vec<String>,
    },
    /// 计算失败（仅影响该描述符，不影响整个批次）
    Failed {
        request: DescriptorRequest,
        message: String,
    },
}

impl DescriptorResult {
    /// 创建失败结果
    pub fn failed(request: DescriptorRequest, message: impl Into<String>) -> Self {
        Self::Failed {
            request,
            message: message.into(),
        }
    }

    /// 是否成功
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Values { .. })
    }

    /// 来源的描述符请求
    pub fn request(&self) -> &DescriptorRequest {
        match self {
            Self::Values { request, .. } => request,
            Self::Failed { request, .. } => request,
        }
    }

    /// 数值序列（失败时为 None）
    pub fn values(&self) -> Option<&[f64]> {
        match self {
            Self::Values { values, .. } => Some(values),
            Self::Failed { .. } => None,
        }
    }

    /// 标签序列（失败时为 None）
    pub fn labels(&self) -> Option<&[String]> {
        match self {
            Self::Values { labels, .. } => Some(labels),
            Self::Failed { .. } => None,
        }
    }

    /// 失败信息（成功时为 None）
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Values { .. } => None,
            Self::Failed { message, .. } => Some(message),
        }
    }
}

/// 单个分子的结果
///
/// results 与请求的描述符顺序一一对应
#[derive(Debug, Clone)]
pub struct MoleculeResult {
    pub molecule: Molecule,
    pub results: Vec<DescriptorResult>,
}

/// 整个批次的结果
///
/// 每个请求的分子恰好对应一个条目，顺序与输入一致；
/// 构建一次、返回一次，之后不再修改
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub entries: Vec<MoleculeResult>,
    /// 批次完成时间
    pub completed_at: DateTime<Local>,
}

impl BatchResult {
    pub(crate) fn new(entries: Vec<MoleculeResult>) -> Self {
        Self {
            entries,
            completed_at: Local::now(),
        }
    }

    /// 批次内的分子数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按分子 ID 查找结果
    pub fn get(&self, molecule_id: &str) -> Option<&MoleculeResult> {
        self.entries.iter().find(|e| e.molecule.id == molecule_id)
    }

    /// 统计（成功数, 失败数）
    pub fn stats(&self) -> (usize, usize) {
        let mut success = 0;
        let mut failed = 0;
        for entry in &self.entries {
            for result in &entry.results {
                if result.is_success() {
                    success += 1;
                } else {
                    failed += 1;
                }
            }
        }
        (success, failed)
    }
}

/// 批次计算的终态
///
/// 取消是与"完成"并列的一等结果，不是错误
#[derive(Debug)]
pub enum BatchOutcome {
    /// 批次全部处理完成（个别描述符可能失败，见 DescriptorResult）
    Completed(BatchResult),
    /// 观察到协作式取消信号，批次中止，不返回部分结果
    Cancelled,
}

impl BatchOutcome {
    /// 是否被取消
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// 提取完成的结果
    pub fn into_result(self) -> Option<BatchResult> {
        match self {
            Self::Completed(r) => Some(r),
            Self::Cancelled => None,
        }
    }
}
