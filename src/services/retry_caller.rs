//! 重试调用服务 - 业务能力层
//!
//! 只负责"带重试地调一次远程计算"能力，不关心流程
//!
//! 职责：
//! - 在固定的尝试预算内反复调用远程计算服务
//! - 任何调用故障一律视为瞬时故障，只记日志不上抛
//! - 拿到结果（包括空序列）立即结束
//! - 预算耗尽后返回"无结果"，其含义由结果解析层决定

use crate::clients::CalculationService;
use crate::models::Molecule;
use tracing::{debug, error};

/// 重试调用服务
///
/// 面向尽力而为的科研计算服务，瞬时网络/服务故障很常见；
/// 尝试之间不做退避，背靠背连续发起
pub struct RetryingCaller {
    max_attempts: usize,
}

impl RetryingCaller {
    /// 创建新的重试调用服务
    ///
    /// # 参数
    /// - `max_attempts`: 总尝试次数（首次 + 重试）
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// 调用远程描述符计算（带重试逻辑）
    ///
    /// # 返回
    /// 第一次拿到的原始字符串值序列；预算耗尽仍无结果时返回 None
    pub async fn call<S: CalculationService>(
        &self,
        service: &S,
        endpoint: &str,
        descriptor_id: &str,
        molecule: &Molecule,
    ) -> Option<Vec<String>> {
        debug!(
            "调用远程计算: 服务 {} 描述符 {} 分子 {}",
            endpoint,
            descriptor_id,
            molecule.display_name()
        );

        // 重试逻辑
        for attempt in 0..self.max_attempts {
            if attempt > 0 {
                debug!("  - 描述符计算重试 第 {} 次", attempt);
            }

            match service.invoke(endpoint, descriptor_id, molecule).await {
                // 拿到结果就结束（空序列在这一层不算失败）
                Ok(values) => return Some(values),
                Err(e) => {
                    error!("  == 远程计算调用失败: {}", e);
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// 前 fail_times 次调用失败、之后返回固定结果的模拟服务
    struct FlakyService {
        fail_times: usize,
        attempts: AtomicUsize,
        values: Vec<String>,
    }

    impl FlakyService {
        fn new(fail_times: usize, values: Vec<String>) -> Self {
            Self {
                fail_times,
                attempts: AtomicUsize::new(0),
                values,
            }
        }

        fn attempts(&self) -> usize {
            self.attempts.load(Ordering::SeqCst)
        }
    }

    impl CalculationService for FlakyService {
        async fn invoke(
            &self,
            _endpoint: &str,
            _descriptor_id: &str,
            _molecule: &Molecule,
        ) -> Result<Vec<String>> {
            let n = self.attempts.fetch_add(1, Ordering::SeqCst);
            if n < self.fail_times {
                anyhow::bail!("模拟瞬时故障 (第 {} 次)", n + 1);
            }
            Ok(self.values.clone())
        }

        async fn ping(&self, _endpoint: &str) -> Result<()> {
            Ok(())
        }
    }

    fn test_molecule() -> Molecule {
        Molecule::new("ethanol", "CCO")
    }

    #[tokio::test]
    async fn test_succeeds_on_fifth_attempt() {
        // 前 4 次失败、第 5 次成功：应恰好尝试 5 次并返回第 5 次的结果
        let service = FlakyService::new(4, vec!["1.23".to_string()]);
        let caller = RetryingCaller::new(6);

        let result = caller
            .call(&service, "http://calc", "XLogP", &test_molecule())
            .await;

        assert_eq!(service.attempts(), 5);
        assert_eq!(result, Some(vec!["1.23".to_string()]));
    }

    #[tokio::test]
    async fn test_first_attempt_wins() {
        let service = FlakyService::new(0, vec!["0.5".to_string()]);
        let caller = RetryingCaller::new(6);

        let result = caller
            .call(&service, "http://calc", "XLogP", &test_molecule())
            .await;

        assert_eq!(service.attempts(), 1);
        assert!(result.is_some());
    }

    #[tokio::test]
    async fn test_empty_sequence_is_not_a_failure() {
        // 空序列也算结果，不应触发重试
        let service = FlakyService::new(0, Vec::new());
        let caller = RetryingCaller::new(6);

        let result = caller
            .call(&service, "http://calc", "XLogP", &test_molecule())
            .await;

        assert_eq!(service.attempts(), 1);
        assert_eq!(result, Some(Vec::new()));
    }

    #[test]
    fn test_always_failing_exhausts_budget() {
        // 一直失败：恰好尝试 6 次后返回 None
        tokio_test::block_on(async {
            let service = FlakyService::new(usize::MAX, Vec::new());
            let caller = RetryingCaller::new(6);

            let result = caller
                .call(&service, "http://calc", "XLogP", &test_molecule())
                .await;

            assert_eq!(service.attempts(), 6);
            assert!(result.is_none());
        });
    }

    #[tokio::test]
    async fn test_configurable_budget() {
        // 预算可配置，测试用小值即可
        let service = FlakyService::new(usize::MAX, Vec::new());
        let caller = RetryingCaller::new(2);

        let result = caller
            .call(&service, "http://calc", "XLogP", &test_molecule())
            .await;

        assert_eq!(service.attempts(), 2);
        assert!(result.is_none());
    }
}
