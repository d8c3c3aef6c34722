//! 错误类型定义
//!
//! 批次级错误会中止整个计算并作为 `Err` 返回；
//! 描述符级错误（未知描述符 / 无结果 / 数值解析失败）只影响单个
//! (分子, 描述符) 对，通过 `Display` 渲染进对应的失败结果，批次继续。

use thiserror::Error;

/// 计算错误类型
#[derive(Debug, Error)]
pub enum CalcError {
    /// 预检失败：无法连接远程计算服务（批次级，全有或全无）
    #[error("无法连接计算服务 ({endpoint}): {source}")]
    ServiceUnreachable {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// 元数据注册表中没有该 (描述符, 提供方) 的映射（描述符级）
    #[error("未知描述符: 提供方 {provider_id} 下无法解析 {ontology_id}")]
    UnknownDescriptor {
        ontology_id: String,
        provider_id: String,
    },

    /// 重试预算耗尽后远程服务仍未返回结果（描述符级）
    #[error("描述符 {descriptor_id} 未返回结果")]
    NoResult { descriptor_id: String },

    /// 远程返回的原始值无法解析为数字（描述符级）
    #[error("描述符 {descriptor_id} 的返回值 '{raw}' 无法解析为数字")]
    ParseFailure { descriptor_id: String, raw: String },
}

// ========== 便捷构造函数 ==========

impl CalcError {
    /// 创建服务不可达错误
    pub fn service_unreachable(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        CalcError::ServiceUnreachable {
            endpoint: endpoint.into(),
            source: Box::new(source),
        }
    }

    /// 创建未知描述符错误
    pub fn unknown_descriptor(
        ontology_id: impl Into<String>,
        provider_id: impl Into<String>,
    ) -> Self {
        CalcError::UnknownDescriptor {
            ontology_id: ontology_id.into(),
            provider_id: provider_id.into(),
        }
    }
}

// ========== Result 类型别名 ==========

/// 计算结果类型
pub type CalcResult<T> = Result<T, CalcError>;
