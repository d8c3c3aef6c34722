//! 结果解析服务 - 业务能力层
//!
//! 把远程返回的原始字符串值（或"无结果"）解析为类型化的描述符结果。
//!
//! 标签规则：
//! - 标签基础名取本体标识符最后一个 `#` 之后的部分
//! - 恰好一个值时直接用基础名
//! - 多个值时用 `基础名-<序号>`（序号从 1 开始）区分
//!
//! 数值解析失败只判定该描述符失败，不中止批次（与"无结果"同等对待）

use crate::error::CalcError;
use crate::models::{DescriptorRequest, DescriptorResult};

/// 结果解析服务
pub struct ResultParser;

impl ResultParser {
    /// 解析原始计算结果
    ///
    /// # 参数
    /// - `raw`: 远程返回的原始字符串值；重试预算耗尽时为 None
    /// - `request`: 来源的描述符请求
    ///
    /// # 返回
    /// 成功或失败形态的 DescriptorResult，失败信息可区分
    /// "未返回结果"与"数值解析失败"
    pub fn parse(raw: Option<Vec<String>>, request: &DescriptorRequest) -> DescriptorResult {
        let Some(raw_values) = raw else {
            let err = CalcError::NoResult {
                descriptor_id: request.id.clone(),
            };
            return DescriptorResult::failed(request.clone(), err.to_string());
        };

        let mut values = Vec::with_capacity(raw_values.len());
        for raw_value in &raw_values {
            match raw_value.trim().parse::<f64>() {
                Ok(v) => values.push(v),
                Err(_) => {
                    let err = CalcError::ParseFailure {
                        descriptor_id: request.id.clone(),
                        raw: raw_value.clone(),
                    };
                    return DescriptorResult::failed(request.clone(), err.to_string());
                }
            }
        }

        let base = request.label_base();
        let labels: Vec<String> = if values.len() == 1 {
            vec![base.to_string()]
        } else {
            (1..=values.len()).map(|i| format!("{}-{}", base, i)).collect()
        };

        DescriptorResult::Values {
            request: request.clone(),
            values,
            labels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logp_request() -> DescriptorRequest {
        DescriptorRequest::new("http://x/ont#LogP", "logp")
    }

    #[test]
    fn test_single_value_uses_base_label() {
        let result = ResultParser::parse(Some(vec!["3.14".to_string()]), &logp_request());

        assert!(result.is_success());
        assert_eq!(result.values().unwrap(), &[3.14]);
        assert_eq!(result.labels().unwrap(), &["LogP".to_string()]);
    }

    #[test]
    fn test_multiple_values_get_numbered_labels() {
        let raw = vec!["1.0".to_string(), "2.0".to_string()];
        let result = ResultParser::parse(Some(raw), &logp_request());

        assert!(result.is_success());
        assert_eq!(result.values().unwrap(), &[1.0, 2.0]);
        assert_eq!(
            result.labels().unwrap(),
            &["LogP-1".to_string(), "LogP-2".to_string()]
        );
    }

    #[test]
    fn test_absent_raw_yields_failed_result() {
        let request = logp_request();
        let result = ResultParser::parse(None, &request);

        assert!(!result.is_success());
        assert_eq!(result.request(), &request);
        assert!(result.values().is_none());
        assert!(result.labels().is_none());
        assert!(result.error_message().unwrap().contains("未返回结果"));
    }

    #[test]
    fn test_unparsable_value_fails_locally() {
        // 解析失败与"无结果"同等对待：失败结果，不是 panic 也不是批次级错误
        let raw = vec!["3.14".to_string(), "not-a-number".to_string()];
        let result = ResultParser::parse(Some(raw), &logp_request());

        assert!(!result.is_success());
        assert!(result.error_message().unwrap().contains("not-a-number"));
    }

    #[test]
    fn test_empty_sequence_is_success_with_no_values() {
        let result = ResultParser::parse(Some(Vec::new()), &logp_request());

        assert!(result.is_success());
        assert!(result.values().unwrap().is_empty());
        assert!(result.labels().unwrap().is_empty());
    }

    #[test]
    fn test_identifier_without_hash_uses_whole_id() {
        let request = DescriptorRequest::new("plainDescriptor", "plain");
        let result = ResultParser::parse(Some(vec!["7.5".to_string()]), &request);

        assert_eq!(result.labels().unwrap(), &["plainDescriptor".to_string()]);
    }

    #[test]
    fn test_whitespace_around_number_is_tolerated() {
        let result = ResultParser::parse(Some(vec![" 2.5 ".to_string()]), &logp_request());

        assert!(result.is_success());
        assert_eq!(result.values().unwrap(), &[2.5]);
    }
}
