use crate::models::batch::BatchDefinition;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 从 TOML 文件加载数据并转换为 BatchDefinition 对象
pub async fn load_batch_from_toml(toml_file_path: &Path) -> Result<BatchDefinition> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取TOML文件: {}", toml_file_path.display()))?;

    let mut batch: BatchDefinition = toml::from_str(&content)
        .with_context(|| format!("无法解析TOML文件: {}", toml_file_path.display()))?;

    // 设置文件路径
    batch.file_path = Some(toml_file_path.to_string_lossy().to_string());

    Ok(batch)
}

/// 从文件夹中加载所有 TOML 批次定义
pub async fn load_all_batch_files(folder_path: &str) -> Result<Vec<BatchDefinition>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        anyhow::bail!("文件夹不存在: {}", folder_path);
    }

    let mut batches = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            tracing::info!(
                "正在加载: {}",
                path.file_name().unwrap_or_default().to_string_lossy()
            );

            match load_batch_from_toml(&path).await {
                Ok(batch) => {
                    tracing::info!(
                        "成功加载 {} 个分子 / {} 个描述符",
                        batch.molecules.len(),
                        batch.descriptors.len()
                    );
                    batches.push(batch);
                }
                Err(e) => {
                    tracing::warn!("加载文件失败 {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(batches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_batch_from_toml() {
        let content = r#"
name = "醇类 LogP 批次"

[[descriptors]]
ontology_id = "http://www.blueobelisk.org/ontologies/chemoinformatics-algorithms/#xlogP"
id = "xlogP"

[[molecules]]
id = "ethanol"
smiles = "CCO"

[[molecules]]
id = "benzene"
smiles = "c1ccccc1"
"#;
        let dir = std::env::temp_dir().join("descriptor_batch_calc_test_load");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("batch.toml");
        tokio::fs::write(&path, content).await.unwrap();

        let batch = load_batch_from_toml(&path).await.expect("加载失败");
        assert_eq!(batch.molecules.len(), 2);
        assert_eq!(batch.descriptors.len(), 1);
        assert!(batch.file_path.is_some());

        // 每个分子都应携带全部请求的描述符
        let requests = batch.into_requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].1.len(), 1);

        tokio::fs::remove_dir_all(&dir).await.ok();
    }
}
