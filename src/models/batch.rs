//! 批次定义模型
//!
//! 对应 TOML 批次文件：一组分子 + 对每个分子统一请求的描述符列表

use crate::models::descriptor::DescriptorRequest;
use crate::models::molecule::Molecule;

/// 一个批次的定义（通常由 TOML 文件加载而来）
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BatchDefinition {
    /// 批次名称
    #[serde(default)]
    pub name: String,
    /// 请求的描述符列表（应用到批次内的每个分子）
    #[serde(default)]
    pub descriptors: Vec<DescriptorRequest>,
    /// 分子列表
    #[serde(default)]
    pub molecules: Vec<Molecule>,
    /// 来源文件路径（加载时填充，不序列化进文件）
    #[serde(skip)]
    pub file_path: Option<String>,
}

impl BatchDefinition {
    /// 展开为编排器的输入形态
    ///
    /// 每个分子配上完整的描述符请求列表，顺序保持定义顺序
    pub fn into_requests(self) -> Vec<(Molecule, Vec<DescriptorRequest>)> {
        let descriptors = self.descriptors;
        self.molecules
            .into_iter()
            .map(|mol| (mol, descriptors.clone()))
            .collect()
    }
}
