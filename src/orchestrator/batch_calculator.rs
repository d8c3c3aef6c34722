//! 批次描述符计算器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个 crate 的入口，负责一个批次的完整计算流程。
//!
//! ## 核心功能
//!
//! 1. **工作量计算**：开始前统计所有 (分子, 描述符) 对的总数
//! 2. **服务预检**：先验证远程服务可达，失败则整批中止
//! 3. **顺序遍历**：按调用方给定的顺序处理分子及其描述符
//! 4. **标识解析**：把内部本体标识符映射为远程描述符 ID
//! 5. **向下委托**：委托 RetryingCaller 调用、ResultParser 解析
//! 6. **进度与取消**：每个工作单元推进进度，循环顶部轮询取消
//! 7. **结果聚合**：按请求顺序聚合为最终的 BatchResult
//!
//! ## 设计特点
//!
//! - **显式注入**：注册表和计算服务在构造时传入，不做全局查找
//! - **无跨批状态**：所有状态都限定在一次 compute 调用内
//! - **严格串行**：同一时刻只有一个远程调用在途

use crate::clients::CalculationService;
use crate::config::Config;
use crate::error::{CalcError, CalcResult};
use crate::models::{
    BatchOutcome, BatchResult, DescriptorRequest, DescriptorResult, Molecule, MoleculeResult,
};
use crate::progress::ProgressSink;
use crate::registry::DescriptorRegistry;
use crate::services::{ResultParser, RetryingCaller};
use tracing::{info, warn};

/// 批次描述符计算器
pub struct BatchCalculator<S, R> {
    service: S,
    registry: R,
    service_url: String,
    provider_id: String,
    retry_caller: RetryingCaller,
}

impl<S, R> BatchCalculator<S, R>
where
    S: CalculationService,
    R: DescriptorRegistry,
{
    /// 创建新的批次计算器
    ///
    /// # 参数
    /// - `config`: 服务地址、提供方标识、重试预算等配置
    /// - `service`: 远程计算服务句柄
    /// - `registry`: 描述符元数据注册表句柄
    pub fn new(config: &Config, service: S, registry: R) -> Self {
        Self {
            service,
            registry,
            service_url: config.service_url.clone(),
            provider_id: config.provider_id.clone(),
            retry_caller: RetryingCaller::new(config.max_attempts),
        }
    }

    /// 计算一个批次的所有描述符
    ///
    /// # 参数
    /// - `requests`: 分子及其请求的描述符列表，顺序由调用方控制
    /// - `progress`: 进度接收器（含协作式取消轮询）
    ///
    /// # 返回
    /// - `Ok(BatchOutcome::Completed)`: 批次处理完成，每个分子恰好
    ///   对应一个条目，每个请求的描述符恰好对应一个结果
    /// - `Ok(BatchOutcome::Cancelled)`: 观察到取消信号，不返回部分结果
    /// - `Err(CalcError::ServiceUnreachable)`: 预检失败，整批中止
    pub async fn compute<P: ProgressSink>(
        &self,
        requests: &[(Molecule, Vec<DescriptorRequest>)],
        progress: &P,
    ) -> CalcResult<BatchOutcome> {
        // 总工作量 = 每个分子请求的描述符数量之和，必须在开工前算好
        let workload: usize = requests.iter().map(|(_, descs)| descs.len()).sum();

        log_batch_start(requests.len(), workload, &self.service_url);
        progress.begin_task("计算远程描述符", workload);

        // ========== 预检：先验证服务器再处理分子 ==========
        progress.sub_task("正在验证服务器...");
        if let Err(e) = self.service.ping(&self.service_url).await {
            return Err(CalcError::ServiceUnreachable {
                endpoint: self.service_url.clone(),
                source: e.into(),
            });
        }

        let mut entries = Vec::with_capacity(requests.len());

        // ========== 遍历所有分子及其描述符 ==========
        for (mol_index, (molecule, descriptors)) in requests.iter().enumerate() {
            let mut mol_results = Vec::with_capacity(descriptors.len());

            for descriptor in descriptors {
                // 每个 (分子, 描述符) 对开始前轮询一次取消
                if progress.is_cancelled() {
                    warn!("⚠️ 观察到取消请求，批次中止");
                    return Ok(BatchOutcome::Cancelled);
                }

                let result = self
                    .compute_one(mol_index + 1, molecule, descriptor, progress)
                    .await;
                mol_results.push(result);
            }

            entries.push(MoleculeResult {
                molecule: molecule.clone(),
                results: mol_results,
            });
        }

        progress.done();

        let batch = BatchResult::new(entries);
        log_batch_complete(&batch);

        Ok(BatchOutcome::Completed(batch))
    }

    /// 处理单个 (分子, 描述符) 对
    ///
    /// 解析失败、无结果等都收敛为失败形态的 DescriptorResult，
    /// 不会中止批次
    async fn compute_one<P: ProgressSink>(
        &self,
        mol_index: usize,
        molecule: &Molecule,
        descriptor: &DescriptorRequest,
        progress: &P,
    ) -> DescriptorResult {
        // 解析远程描述符 ID；解析失败不重试，直接判定该描述符失败
        let remote = match self
            .registry
            .resolve(&descriptor.ontology_id, &self.provider_id)
        {
            Ok(remote) => remote,
            Err(e) => {
                warn!("[分子 {}] ⚠️ {}", mol_index, e);
                progress.sub_task(&format!("跳过描述符: {}", descriptor.id));
                progress.worked(1);
                return DescriptorResult::failed(descriptor.clone(), e.to_string());
            }
        };

        progress.sub_task(&format!("计算描述符: {}", remote.name));
        progress.worked(1);

        // 委托重试调用，再委托结果解析
        let raw = self
            .retry_caller
            .call(&self.service, &self.service_url, &remote.id, molecule)
            .await;

        let result = ResultParser::parse(raw, descriptor);

        if let Some(message) = result.error_message() {
            warn!(
                "[分子 {}] ⚠️ 描述符 {} 失败: {}",
                mol_index, descriptor.id, message
            );
        }

        result
    }
}

// ========== 日志辅助函数 ==========

fn log_batch_start(molecule_count: usize, workload: usize, service_url: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 开始批次描述符计算");
    info!("📄 分子数量: {}", molecule_count);
    info!("📊 总工作单元: {}", workload);
    info!("🌐 计算服务: {}", service_url);
    info!("{}", "=".repeat(60));
}

fn log_batch_complete(batch: &BatchResult) {
    let (success, failed) = batch.stats();
    info!("\n{}", "─".repeat(60));
    info!("✅ 批次计算完成: 成功 {}, 失败 {}", success, failed);
    info!(
        "完成时间: {}",
        batch.completed_at.format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "─".repeat(60));
}
