/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 远程计算服务地址
    pub service_url: String,
    /// 描述符提供方标识
    pub provider_id: String,
    /// 单次远程调用的总尝试次数（首次 + 重试）
    pub max_attempts: usize,
    /// 预检 ping 的超时秒数
    pub ping_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_url: "http://apps.ideaconsult.net:8080/ambit2".to_string(),
            provider_id: "opentox.calculation".to_string(),
            max_attempts: 6,
            ping_timeout_secs: 10,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            service_url: std::env::var("CALC_SERVICE_URL").unwrap_or(default.service_url),
            provider_id: std::env::var("CALC_PROVIDER_ID").unwrap_or(default.provider_id),
            max_attempts: std::env::var("CALC_MAX_ATTEMPTS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_attempts),
            ping_timeout_secs: std::env::var("CALC_PING_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.ping_timeout_secs),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }
}
