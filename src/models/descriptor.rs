/// 描述符请求
///
/// 标识"为某个分子计算哪一个描述符"，由调用方提供，不可变。
/// `ontology_id` 是本系统内部的本体式标识符（形如
/// `http://www.blueobelisk.org/ontologies/chemoinformatics-algorithms/#xlogP`），
/// `id` 是对应的短标识
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DescriptorRequest {
    /// 内部本体标识符
    pub ontology_id: String,
    /// 短标识符
    pub id: String,
}

impl DescriptorRequest {
    /// 创建新的描述符请求
    pub fn new(ontology_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            ontology_id: ontology_id.into(),
            id: id.into(),
        }
    }

    /// 计算结果标签的基础名
    ///
    /// 取本体标识符中最后一个 `#` 之后的部分；没有 `#` 时使用完整标识符
    pub fn label_base(&self) -> &str {
        match self.ontology_id.rfind('#') {
            Some(pos) => &self.ontology_id[pos + 1..],
            None => &self.ontology_id,
        }
    }
}

/// 远程服务侧的描述符元数据
///
/// 通过元数据注册表解析得到：远程服务自己的描述符 ID，
/// 以及用于进度子任务标签的显示名称
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RemoteDescriptor {
    /// 远程服务使用的描述符 ID
    pub id: String,
    /// 显示名称
    pub name: String,
}

impl RemoteDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_base_with_hash() {
        let req = DescriptorRequest::new("http://x/ont#LogP", "logp");
        assert_eq!(req.label_base(), "LogP");
    }

    #[test]
    fn test_label_base_without_hash() {
        let req = DescriptorRequest::new("plainIdentifier", "plain");
        assert_eq!(req.label_base(), "plainIdentifier");
    }

    #[test]
    fn test_label_base_takes_last_hash() {
        let req = DescriptorRequest::new("http://x/ont#a#TPSA", "tpsa");
        assert_eq!(req.label_base(), "TPSA");
    }
}
