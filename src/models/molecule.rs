/// 分子数据模型
///
/// 批量计算的基本工作单元，由调用方提供，核心层只读
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Molecule {
    /// 分子标识（批次内唯一）
    pub id: String,
    /// SMILES 结构式，远程计算服务的输入
    pub smiles: String,
    /// 可选的显示名称
    #[serde(default)]
    pub name: Option<String>,
}

impl Molecule {
    /// 创建新的分子
    pub fn new(id: impl Into<String>, smiles: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            smiles: smiles.into(),
            name: None,
        }
    }

    /// 获取用于日志显示的名称
    ///
    /// 优先使用 name，否则回退到 id
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}
