use profile_export_core::{ExportConfig, ProfileExporter};

#[derive(Clone)]
pub struct AppState {
    pub exporter: ProfileExporter,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        // 从环境变量读取服务器地址和分页参数
        let config = ExportConfig::from_env()?;
        let exporter = ProfileExporter::with_http(config)?;

        Ok(Self::with_exporter(exporter))
    }

    pub fn with_exporter(exporter: ProfileExporter) -> Self {
        Self { exporter }
    }
}
