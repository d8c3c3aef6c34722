//! 描述符元数据注册表 - 边界层
//!
//! 负责把内部本体标识符解析为远程服务自己的描述符 ID。
//! 解析必须幂等、无副作用：编排器对每个 (分子, 描述符) 对都会查询一次，
//! 不假设任何缓存。

use crate::error::{CalcError, CalcResult};
use crate::models::RemoteDescriptor;
use std::collections::HashMap;

/// 描述符元数据注册表
///
/// 编排器通过显式注入的句柄访问注册表，不做任何全局查找
pub trait DescriptorRegistry {
    /// 解析 (内部本体标识符, 提供方) 对应的远程描述符元数据
    ///
    /// # 返回
    /// 无映射时返回 `CalcError::UnknownDescriptor`
    fn resolve(&self, ontology_id: &str, provider_id: &str) -> CalcResult<RemoteDescriptor>;
}

/// 内存注册表
///
/// 以 (本体标识符, 提供方) 为键保存映射，供应用装配和测试使用
#[derive(Debug, Default, Clone)]
pub struct InMemoryRegistry {
    entries: HashMap<(String, String), RemoteDescriptor>,
}

impl InMemoryRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建带常用描述符映射的注册表
    ///
    /// 预置若干 Blue Obelisk 本体条目到远程算法 ID 的映射
    pub fn with_defaults(provider_id: &str) -> Self {
        const ONT: &str = "http://www.blueobelisk.org/ontologies/chemoinformatics-algorithms/";
        let mut registry = Self::new();
        for (fragment, remote_id, name) in [
            ("xlogP", "XLogP", "XLogP 分配系数"),
            ("tpsa", "TPSADescriptor", "拓扑极性表面积"),
            ("weight", "WeightDescriptor", "分子量"),
            ("hBondDonorCount", "HBondDonorCountDescriptor", "氢键供体数"),
            ("hBondAcceptorCount", "HBondAcceptorCountDescriptor", "氢键受体数"),
            ("rotatableBondsCount", "RotatableBondsCountDescriptor", "可旋转键数"),
        ] {
            registry.register(
                format!("{}#{}", ONT, fragment),
                provider_id,
                RemoteDescriptor::new(remote_id, name),
            );
        }
        registry
    }

    /// 注册一条映射
    pub fn register(
        &mut self,
        ontology_id: impl Into<String>,
        provider_id: impl Into<String>,
        remote: RemoteDescriptor,
    ) {
        self.entries
            .insert((ontology_id.into(), provider_id.into()), remote);
    }

    /// 注册表条目数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DescriptorRegistry for InMemoryRegistry {
    fn resolve(&self, ontology_id: &str, provider_id: &str) -> CalcResult<RemoteDescriptor> {
        self.entries
            .get(&(ontology_id.to_string(), provider_id.to_string()))
            .cloned()
            .ok_or_else(|| CalcError::unknown_descriptor(ontology_id, provider_id))
    }
}
