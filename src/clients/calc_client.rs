//! 远程计算服务客户端 - 基础设施层
//!
//! 封装所有与远程描述符计算服务相关的调用逻辑

use crate::config::Config;
use crate::models::Molecule;
use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

/// 远程计算服务
///
/// 编排器通过显式注入的句柄调用服务；调用失败一律视为瞬时故障，
/// 是否重试由上层的重试逻辑决定
#[allow(async_fn_in_trait)]
pub trait CalculationService {
    /// 调用远程描述符计算
    ///
    /// # 参数
    /// - `endpoint`: 服务地址
    /// - `descriptor_id`: 远程服务的描述符 ID
    /// - `molecule`: 待计算的分子
    ///
    /// # 返回
    /// 返回原始字符串值的有序序列（解析为数值由上层负责）
    async fn invoke(
        &self,
        endpoint: &str,
        descriptor_id: &str,
        molecule: &Molecule,
    ) -> Result<Vec<String>>;

    /// 预检服务可达性
    async fn ping(&self, endpoint: &str) -> Result<()>;
}

/// 基于 HTTP 的计算服务客户端
pub struct HttpCalcClient {
    client: reqwest::Client,
    ping_timeout: Duration,
}

impl HttpCalcClient {
    /// 创建新的计算服务客户端
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("无法创建 HTTP 客户端")?;

        Ok(Self {
            client,
            ping_timeout: Duration::from_secs(config.ping_timeout_secs),
        })
    }

    /// 检查 API 响应是否成功
    fn is_success_response(result: &Value) -> bool {
        match result.get("code").and_then(|v| v.as_u64()) {
            Some(code) => code == 200,
            // 没有 code 字段时以 values 的存在与否为准
            None => result.get("values").is_some(),
        }
    }

    /// 提取计算结果数据
    ///
    /// 远程服务把数值作为 JSON 数组返回，元素可能是字符串或数字；
    /// 统一转成字符串，解析推迟到结果解析层
    fn extract_values(result: &Value) -> Option<Vec<String>> {
        let array = result.get("values")?.as_array()?;
        Some(
            array
                .iter()
                .map(|v| match v.as_str() {
                    Some(s) => s.to_string(),
                    None => v.to_string(),
                })
                .collect(),
        )
    }
}

impl CalculationService for HttpCalcClient {
    async fn invoke(
        &self,
        endpoint: &str,
        descriptor_id: &str,
        molecule: &Molecule,
    ) -> Result<Vec<String>> {
        let url = format!("{}/algorithm/{}", endpoint.trim_end_matches('/'), descriptor_id);

        let payload = json!({
            "id": molecule.id,
            "smiles": molecule.smiles,
        });

        debug!("计算请求 Payload: {} -> {}", payload, url);

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .with_context(|| format!("计算请求失败: {}", url))?
            .error_for_status()
            .with_context(|| format!("计算服务返回错误状态: {}", url))?;

        let result: Value = response.json().await.context("无法解析计算服务响应")?;

        debug!("计算结果: {}", result);

        if !Self::is_success_response(&result) {
            anyhow::bail!("计算服务返回错误响应: {}", result);
        }

        Self::extract_values(&result)
            .with_context(|| format!("计算服务响应缺少 values 字段: {}", result))
    }

    async fn ping(&self, endpoint: &str) -> Result<()> {
        // 预检必须有界，否则一次挂起会阻塞整个批次
        let response = self
            .client
            .get(endpoint)
            .timeout(self.ping_timeout)
            .send()
            .await
            .with_context(|| format!("无法连接服务: {}", endpoint))?;

        if !response.status().is_success() {
            anyhow::bail!("服务返回状态 {}: {}", response.status(), endpoint);
        }

        Ok(())
    }
}
